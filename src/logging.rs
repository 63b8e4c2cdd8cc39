//! Diagnostic output for the binary
//!
//! The library only emits `tracing` events; this installs the stderr
//! subscriber that prints them.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber
///
/// `RUST_LOG` wins when set; otherwise `level` applies to this crate.
pub fn init(level: Level) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("frame_cache={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
