//! Traits describing the read-only facts a draw consumes.
//!
//! Oracles expose the entry catalog, tuning values, and the random source.
//! The [`Env`] aggregate bundles them so the command pipeline can reach
//! everything it needs without hard coupling to concrete implementations.
mod catalog;
mod config;
mod error;
mod rng;

pub use catalog::CatalogOracle;
pub use config::ConfigOracle;
pub use error::OracleError;
pub use rng::{
    PcgRng, RngOracle, STREAM_JITTER, STREAM_POOL_BASE, STREAM_SLOT, STREAM_WINNER, stream_seed,
};

/// Aggregates the read-only oracles required by the draw command pipeline.
#[derive(Clone, Copy, Debug)]
pub struct Env<'a, C, T, R>
where
    C: CatalogOracle + ?Sized,
    T: ConfigOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    catalog: Option<&'a C>,
    config: Option<&'a T>,
    rng: Option<&'a R>,
}

pub type DrawEnv<'a> = Env<'a, dyn CatalogOracle + 'a, dyn ConfigOracle + 'a, dyn RngOracle + 'a>;

impl<'a, C, T, R> Env<'a, C, T, R>
where
    C: CatalogOracle + ?Sized,
    T: ConfigOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    pub fn new(catalog: Option<&'a C>, config: Option<&'a T>, rng: Option<&'a R>) -> Self {
        Self {
            catalog,
            config,
            rng,
        }
    }

    pub fn with_all(catalog: &'a C, config: &'a T, rng: &'a R) -> Self {
        Self::new(Some(catalog), Some(config), Some(rng))
    }

    pub fn empty() -> Self {
        Self {
            catalog: None,
            config: None,
            rng: None,
        }
    }

    /// Returns the CatalogOracle, or an error if not available.
    pub fn catalog(&self) -> Result<&'a C, OracleError> {
        self.catalog.ok_or(OracleError::CatalogNotAvailable)
    }

    /// Returns the ConfigOracle, or an error if not available.
    pub fn config(&self) -> Result<&'a T, OracleError> {
        self.config.ok_or(OracleError::ConfigNotAvailable)
    }

    /// Returns the RngOracle, or an error if not available.
    pub fn rng(&self) -> Result<&'a R, OracleError> {
        self.rng.ok_or(OracleError::RngNotAvailable)
    }
}

impl<'a, C, T, R> Env<'a, C, T, R>
where
    C: CatalogOracle + 'a,
    T: ConfigOracle + 'a,
    R: RngOracle + 'a,
{
    /// Converts this environment into a trait-object based `DrawEnv`.
    pub fn as_draw_env(&self) -> DrawEnv<'a> {
        let catalog: Option<&'a dyn CatalogOracle> = self.catalog.map(|catalog| catalog as _);
        let config: Option<&'a dyn ConfigOracle> = self.config.map(|config| config as _);
        let rng: Option<&'a dyn RngOracle> = self.rng.map(|rng| rng as _);
        Env::new(catalog, config, rng)
    }
}
