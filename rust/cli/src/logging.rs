//! Diagnostic logging for the binary.

/// Installs a stderr `tracing` subscriber filtered by `RUST_LOG`
/// (default `warn`). Calling it twice is harmless.
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let installed = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
    if installed.is_err() {
        tracing::debug!("global subscriber already installed");
    }
}
