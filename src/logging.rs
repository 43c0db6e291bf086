//! Logging configuration for extension-cli.
//!
//! Diagnostics go to stderr; stdout is reserved for the acknowledgment line,
//! and a skipped dispatch must produce no output at all, so the default
//! filter is quiet.

use tracing_subscriber::EnvFilter;

/// Initializes stderr logging with `RUST_LOG` support (default: `warn`).
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
