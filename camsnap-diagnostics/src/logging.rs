//! Logging bootstrap

use tracing_subscriber::EnvFilter;

/// Initialize the process-wide `tracing` subscriber.
///
/// Filter defaults to `info` and follows `RUST_LOG` when set. Safe to call
/// once per process; a second call is ignored.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}
