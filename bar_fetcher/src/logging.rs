use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initializes console logging.
///
/// Everything goes to stderr: stdout is reserved for the JSON payload and
/// must stay machine-parseable. Verbosity is controlled through `RUST_LOG`
/// and defaults to warnings only.
pub fn init() {
    let console_layer = fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(console_layer)
        .init();
}
