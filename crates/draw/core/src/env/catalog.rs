//! Catalog oracle trait.

use crate::catalog::Catalog;

/// Read-only access to the entry list a draw selects from.
///
/// The catalog is external configuration; the core never owns or mutates
/// it. Implementations typically wrap a list loaded at startup.
pub trait CatalogOracle: Send + Sync {
    /// The validated entry list.
    fn catalog(&self) -> &Catalog;
}
