//! Runtime error type.

use draw_core::{CatalogError, ConfigError, ExecuteError};

/// Errors surfaced by the runtime boundary.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("invalid draw configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error("draw command failed: {0}")]
    Execute(#[from] ExecuteError),

    #[error("runtime task is no longer running")]
    ChannelClosed,
}
