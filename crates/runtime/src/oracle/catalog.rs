//! Catalog oracle implementation for runtime.

use draw_core::{Catalog, env::CatalogOracle};

/// Runtime implementation of CatalogOracle that wraps a loaded catalog
pub struct CatalogOracleImpl {
    catalog: Catalog,
}

impl CatalogOracleImpl {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

impl CatalogOracle for CatalogOracleImpl {
    fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
