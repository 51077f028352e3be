//! Structured logging setup for the command line binary.

use tracing_subscriber::{EnvFilter, fmt};

/// Installs a stderr `tracing` subscriber filtered by `RUST_LOG`
/// (default `info`).
///
/// Calling it again after a subscriber is installed is a no-op.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(false)
        .try_init();
}
