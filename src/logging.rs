//! Diagnostic logging for the toolkit itself.
//!
//! Stdout carries workflow commands, so diagnostics always go to stderr.

use tracing_subscriber::EnvFilter;

pub use tracing_subscriber::util::TryInitError;

/// Install a stderr `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_level` (e.g. `"warn"`) is used.
/// Fails if a global subscriber is already installed.
pub fn init_diagnostics(default_level: &str) -> Result<(), TryInitError> {
    use tracing_subscriber::util::SubscriberInitExt;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish()
        .try_init()
}
