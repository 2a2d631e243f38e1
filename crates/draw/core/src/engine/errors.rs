//! Error types for the command execution pipeline.

use crate::command::{FinishError, ResetError, StartError};
use crate::env::OracleError;
use crate::error::{DrawError, ErrorSeverity};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: core::fmt::Display> core::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: core::fmt::Display + core::fmt::Debug> core::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing a command through the draw engine.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    #[error("start draw failed: {0}")]
    Start(TransitionPhaseError<StartError>),

    #[error("finish draw failed: {0}")]
    Finish(TransitionPhaseError<FinishError>),

    #[error("reset draw failed: {0}")]
    Reset(TransitionPhaseError<ResetError>),

    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("pending draw vanished during {command}")]
    MissingPendingDraw { command: &'static str },

    #[error("completed winner index {index} is not in the catalog")]
    WinnerNotInCatalog { index: usize },
}

impl DrawError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            ExecuteError::Start(inner) => inner.error.severity(),
            ExecuteError::Finish(inner) => inner.error.severity(),
            ExecuteError::Reset(inner) => inner.error.severity(),
            ExecuteError::Oracle(inner) => inner.severity(),
            ExecuteError::MissingPendingDraw { .. } | ExecuteError::WinnerNotInCatalog { .. } => {
                ErrorSeverity::Internal
            }
        }
    }
}
