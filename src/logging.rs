//! Tracing subscriber setup for applications embedding the store.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::config::StoreConfig;

/// Install a fmt subscriber. `RUST_LOG` wins over `default_filter`.
/// Fails if a global subscriber is already installed.
pub fn init(default_filter: &str) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}

pub fn init_from_config(config: &StoreConfig) -> Result<()> {
    init(&config.log_filter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails() {
        let _ = init_from_config(&StoreConfig::default());
        assert!(init("debug").is_err());
    }
}
