//! Diagnostic logging. User-facing output goes through `ui::messages`;
//! this only carries `tracing` events, to stderr.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directive, e.g. `timberops=debug`.
pub const LOG_ENV: &str = "TIMBEROPS_LOG";

/// Installs the global subscriber. Safe to call more than once.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
