//! Diagnostic logging via `tracing`.
//!
//! Events go to stderr so the menu transcript on stdout stays clean. `RUST_LOG`
//! wins when set; otherwise the configured level applies to this crate and
//! everything else stays at `warn`.

use tracing_subscriber::filter::EnvFilter;

fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("warn,{}={}", env!("CARGO_CRATE_NAME"), level)))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber. Calling this more than once is harmless.
pub fn init(level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
