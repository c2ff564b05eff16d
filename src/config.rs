//! Runner environment configuration.

use std::env;

/// Variable the runner sets to `1` when debug logging is enabled.
pub const RUNNER_DEBUG: &str = "RUNNER_DEBUG";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunnerConfig {
    /// `${{ runner.debug }}`: `::debug::` lines are only shown when set.
    pub debug: bool,
}

impl RunnerConfig {
    pub fn from_env() -> Self {
        Self {
            debug: env_flag(RUNNER_DEBUG),
        }
    }
}

/// Whether the runner is in debug mode, so [`crate::Logger::debug`] output is visible.
pub fn is_debug() -> bool {
    RunnerConfig::from_env().debug
}

fn env_flag(key: &str) -> bool {
    env::var(key).map(|value| value == "1").unwrap_or(false)
}
