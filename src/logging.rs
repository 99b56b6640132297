//! Tracing subscriber setup for the server binary.

use tracing_subscriber::EnvFilter;

/// Install a compact `fmt` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` (e.g. `"info"`) is
/// used. Calling this twice is harmless: the second install is ignored.
pub fn init(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
