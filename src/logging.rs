use tracing_subscriber::EnvFilter;

/// Initialize tracing for a one-shot tool.
///
/// stdout is reserved for the JSON result, so all diagnostics go to stderr.
/// Silent unless the caller opts in via `RUST_LOG` (e.g. `RUST_LOG=winctl=debug`).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
