//! Target files and the indirection variables that locate them.

use std::path::PathBuf;

use crate::error::EnvFileError;
use crate::process_env::ProcessEnv;

/// A runner-managed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// Environment variables for later steps.
    Env,
    /// Step outputs.
    Output,
    /// State handed to the action's `post` step.
    State,
    /// Directories prepended to `PATH` for later steps.
    Path,
    /// Markdown job summary.
    StepSummary,
}

impl Target {
    pub const ALL: [Target; 5] = [
        Target::Env,
        Target::Output,
        Target::State,
        Target::Path,
        Target::StepSummary,
    ];

    /// Variable the runner uses for this target's path.
    pub const fn default_variable(self) -> &'static str {
        match self {
            Self::Env => "GITHUB_ENV",
            Self::Output => "GITHUB_OUTPUT",
            Self::State => "GITHUB_STATE",
            Self::Path => "GITHUB_PATH",
            Self::StepSummary => "GITHUB_STEP_SUMMARY",
        }
    }
}

/// Names of the indirection variables, one per [`Target`].
///
/// Defaults to the runner's standard names. Tests point targets at their own
/// variables with [`FileTargets::with_variable`] rather than touching the
/// real ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTargets {
    env: String,
    output: String,
    state: String,
    path: String,
    step_summary: String,
}

impl Default for FileTargets {
    fn default() -> Self {
        Self {
            env: Target::Env.default_variable().to_owned(),
            output: Target::Output.default_variable().to_owned(),
            state: Target::State.default_variable().to_owned(),
            path: Target::Path.default_variable().to_owned(),
            step_summary: Target::StepSummary.default_variable().to_owned(),
        }
    }
}

impl FileTargets {
    #[must_use]
    pub fn with_variable(mut self, target: Target, variable: impl Into<String>) -> Self {
        *self.slot_mut(target) = variable.into();
        self
    }

    #[must_use]
    pub fn variable(&self, target: Target) -> &str {
        match target {
            Target::Env => &self.env,
            Target::Output => &self.output,
            Target::State => &self.state,
            Target::Path => &self.path,
            Target::StepSummary => &self.step_summary,
        }
    }

    fn slot_mut(&mut self, target: Target) -> &mut String {
        match target {
            Target::Env => &mut self.env,
            Target::Output => &mut self.output,
            Target::State => &mut self.state,
            Target::Path => &mut self.path,
            Target::StepSummary => &mut self.step_summary,
        }
    }

    /// Read the path of `target` from its indirection variable.
    ///
    /// An unset or blank variable is a configuration error; whether the file
    /// exists is left to the caller.
    pub fn resolve(
        &self,
        target: Target,
        env: &impl ProcessEnv,
    ) -> Result<PathBuf, EnvFileError> {
        let variable = self.variable(target);
        match env.var(variable) {
            Some(path) if !path.trim().is_empty() => Ok(PathBuf::from(path)),
            _ => Err(EnvFileError::NotConfigured {
                variable: variable.to_owned(),
            }),
        }
    }
}
