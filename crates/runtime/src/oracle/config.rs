//! Config oracle implementation for runtime.

use draw_core::{DrawConfig, env::ConfigOracle};

/// Runtime implementation of ConfigOracle that wraps DrawConfig
pub struct ConfigOracleImpl {
    config: DrawConfig,
}

impl ConfigOracleImpl {
    pub fn new(config: DrawConfig) -> Self {
        Self { config }
    }
}

impl ConfigOracle for ConfigOracleImpl {
    fn tuning(&self) -> &DrawConfig {
        &self.config
    }
}
