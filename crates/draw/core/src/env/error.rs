//! Oracle availability errors.

use crate::error::{DrawError, ErrorSeverity};

/// A required oracle was not provided to the environment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    #[error("catalog oracle not available")]
    CatalogNotAvailable,

    #[error("config oracle not available")]
    ConfigNotAvailable,

    #[error("rng oracle not available")]
    RngNotAvailable,
}

impl DrawError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }
}
