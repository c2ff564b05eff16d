//! [`EnvFiles`]: the operations a step runs against the runner's files.

use std::ffi::OsString;
use std::fs::OpenOptions;
use std::io::Write;

use crate::delimiter::{DelimiterSource, RandomDelimiter};
use crate::error::EnvFileError;
use crate::process_env::{ProcessEnv, SystemEnv};
use crate::record::{append_record, append_to, ensure_env_key_allowed, KeyValueRecord};
use crate::targets::{FileTargets, Target};

/// Search-path variable updated by [`EnvFiles::add_path`].
pub const PATH_VAR: &str = "PATH";

/// Separator between `PATH` entries on this platform.
#[cfg(windows)]
pub const PATH_LIST_SEPARATOR: char = ';';
#[cfg(not(windows))]
pub const PATH_LIST_SEPARATOR: char = ':';

/// Prefix under which the runner exposes saved state to the `post` step.
pub const STATE_PREFIX: &str = "STATE_";

/// Writer for the runner's environment files.
pub struct EnvFiles<E = SystemEnv, D = RandomDelimiter> {
    targets: FileTargets,
    env: E,
    delimiters: D,
}

impl EnvFiles {
    /// Standard variable names, the real process environment and random
    /// delimiters.
    pub fn from_process() -> Self {
        Self::new(FileTargets::default(), SystemEnv, RandomDelimiter)
    }
}

impl<E: ProcessEnv, D: DelimiterSource> EnvFiles<E, D> {
    pub fn new(targets: FileTargets, env: E, delimiters: D) -> Self {
        Self {
            targets,
            env,
            delimiters,
        }
    }

    pub fn into_env(self) -> E {
        self.env
    }

    /// Value of an environment variable (empty key ⇒ `None`).
    pub fn get_env(&self, key: &str) -> Option<String> {
        if key.is_empty() {
            return None;
        }
        self.env.var(key)
    }

    /// State saved by an earlier [`EnvFiles::save_state`], as the runner
    /// exposes it to the `post` step.
    pub fn get_state(&self, name: &str) -> Option<String> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        self.env.var(&format!("{STATE_PREFIX}{name}"))
    }

    /// Set an environment variable for later steps and for this process.
    ///
    /// Multiline values use the random delimiter form. `CI`, `NODE_OPTIONS`,
    /// `GITHUB_*` and `RUNNER_*` are rejected.
    pub fn set_env(&mut self, key: &str, value: &str) -> Result<(), EnvFileError> {
        let record = KeyValueRecord::new(key, value)?;
        ensure_env_key_allowed(record.key())?;
        self.append(Target::Env, &record)?;
        self.env.set_var(record.key(), record.value());
        Ok(())
    }

    /// Set a step output.
    pub fn set_output(&mut self, key: &str, value: &str) -> Result<(), EnvFileError> {
        let record = KeyValueRecord::new(key, value)?;
        self.append(Target::Output, &record)
    }

    /// Save state for the action's `post` step.
    pub fn save_state(&mut self, key: &str, value: &str) -> Result<(), EnvFileError> {
        let record = KeyValueRecord::new(key, value)?;
        self.append(Target::State, &record)
    }

    /// Prepend `path` to `PATH` for later steps and for this process.
    ///
    /// Existing `PATH` entries are kept as raw platform strings.
    pub fn add_path(&mut self, path: &str) -> Result<(), EnvFileError> {
        let path = path.trim();
        if path.is_empty() {
            return Err(EnvFileError::EmptyPath);
        }
        if path.contains(['\n', '\r', '\0']) {
            return Err(EnvFileError::InvalidPath {
                path: path.to_owned(),
            });
        }

        let file = self.targets.resolve(Target::Path, &self.env)?;
        append_to(&file, &format!("{path}\n"))?;
        tracing::debug!(entry = path, path = %file.display(), "appended path entry");

        let mut updated = OsString::from(path);
        if let Some(existing) = self.env.var_os(PATH_VAR).filter(|value| !value.is_empty()) {
            updated.push(PATH_LIST_SEPARATOR.to_string());
            updated.push(existing);
        }
        self.env.set_var_os(PATH_VAR, &updated);
        Ok(())
    }

    /// Replace the job summary with `markdown`, creating the file if needed.
    ///
    /// An empty string clears the summary.
    pub fn write_summary(&mut self, markdown: &str) -> Result<(), EnvFileError> {
        let path = self.targets.resolve(Target::StepSummary, &self.env)?;
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .map_err(|source| EnvFileError::io("opening step summary", &path, source))?;
        file.write_all(markdown.as_bytes())
            .map_err(|source| EnvFileError::io("writing step summary", &path, source))?;
        tracing::debug!(path = %path.display(), bytes = markdown.len(), "wrote step summary");
        Ok(())
    }

    fn append(&mut self, target: Target, record: &KeyValueRecord) -> Result<(), EnvFileError> {
        let path = self.targets.resolve(target, &self.env)?;
        append_record(&path, record, &mut self.delimiters)
    }
}
