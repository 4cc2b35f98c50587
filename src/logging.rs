//! Tracing setup. Logs go to stderr; stdout carries the host channel.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "VISUAL_FILE_LOG";

/// Installs the global subscriber.
///
/// The filter is read from `VISUAL_FILE_LOG`, then `RUST_LOG`, and
/// defaults to `warn`. Calling this more than once is harmless.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
