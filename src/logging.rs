//! Logging setup.
//!
//! Library code only emits `tracing` events; hosts decide whether to install
//! a subscriber. `RUST_LOG` overrides the default filter.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "topodraw=info";

/// Install a global fmt subscriber. Returns an error if one is already set.
pub fn init() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))
}
