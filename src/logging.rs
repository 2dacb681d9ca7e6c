use tracing_subscriber::{fmt, EnvFilter};

/// Env var holding the log filter, e.g. `MPM_LOG=mpm=debug`.
pub const LOG_ENV: &str = "MPM_LOG";

/// Installs the global subscriber. Logs go to stderr so they stay out of the
/// REPL output. Calling twice is harmless.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
