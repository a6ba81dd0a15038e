//! # Initialization
//!
//! Tracing subscriber setup. Standard output carries the export lines a parent
//! shell evaluates, so all logs go to standard error.

use tracing::warn;

use crate::constants::DEFAULT_LOG_FILTER;

/// Initialize the tracing subscriber
///
/// `RUST_LOG` overrides the default `secret_manager_env=info` filter.
pub fn init_tracing() {
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with_writer(std::io::stderr)
        .try_init()
    {
        // Already set, e.g. by an embedding binary or a test harness
        warn!("Tracing subscriber init returned error: {}", e);
    }
}
