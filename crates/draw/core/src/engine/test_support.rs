//! Shared oracle fixtures for transition and engine tests.

use crate::catalog::Catalog;
use crate::config::DrawConfig;
use crate::env::{CatalogOracle, ConfigOracle, DrawEnv, PcgRng, RngOracle};

struct StaticCatalog(Catalog);

impl CatalogOracle for StaticCatalog {
    fn catalog(&self) -> &Catalog {
        &self.0
    }
}

struct StaticConfig(DrawConfig);

impl ConfigOracle for StaticConfig {
    fn tuning(&self) -> &DrawConfig {
        &self.0
    }
}

/// Bundles a static catalog, tuning, and the default PCG source.
pub(crate) struct OracleFixture {
    catalog: StaticCatalog,
    config: StaticConfig,
    rng: PcgRng,
}

impl OracleFixture {
    pub(crate) fn new(catalog: Catalog, config: DrawConfig) -> Self {
        config.validate().expect("fixture config must be valid");
        Self {
            catalog: StaticCatalog(catalog),
            config: StaticConfig(config),
            rng: PcgRng,
        }
    }

    pub(crate) fn catalog(&self) -> &Catalog {
        self.catalog.catalog()
    }

    pub(crate) fn env(&self) -> DrawEnv<'_> {
        DrawEnv::new(
            Some(&self.catalog as &dyn CatalogOracle),
            Some(&self.config as &dyn ConfigOracle),
            Some(&self.rng as &dyn RngOracle),
        )
    }
}
