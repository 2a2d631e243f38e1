//! Oracle implementations backing the draw environment.

mod catalog;
mod config;

pub use catalog::CatalogOracleImpl;
pub use config::ConfigOracleImpl;

use draw_core::env::{CatalogOracle, ConfigOracle, DrawEnv, PcgRng, RngOracle};
use draw_core::{Catalog, DrawConfig};

/// Owns the concrete oracles and lends them out as a [`DrawEnv`].
pub struct OracleSet {
    catalog: CatalogOracleImpl,
    config: ConfigOracleImpl,
    rng: PcgRng,
}

impl OracleSet {
    pub fn new(catalog: Catalog, config: DrawConfig) -> Self {
        Self {
            catalog: CatalogOracleImpl::new(catalog),
            config: ConfigOracleImpl::new(config),
            rng: PcgRng,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        self.catalog.catalog()
    }

    pub fn tuning(&self) -> &DrawConfig {
        self.config.tuning()
    }

    /// Borrows the oracles as a trait-object environment for one command.
    pub fn env(&self) -> DrawEnv<'_> {
        DrawEnv::new(
            Some(&self.catalog as &dyn CatalogOracle),
            Some(&self.config as &dyn ConfigOracle),
            Some(&self.rng as &dyn RngOracle),
        )
    }
}
