//! Draw commands and the transition pipeline they run through.
//!
//! # Module Structure
//!
//! - `start`: begin a draw (select winner, compute motion target)
//! - `finish`: complete a draw when motion lands
//! - `reset`: restore the canonical zero state
//!
//! Every state mutation flows through the same three-phase pipeline
//! (`pre_validate → apply → post_validate`) executed by the engine, so the
//! landing invariant is checked on every single draw, not just in tests.

mod finish;
mod reset;
mod start;

pub use finish::{FinishDraw, FinishError};
pub use reset::{ResetDraw, ResetError};
pub use start::{StartDraw, StartError};

use crate::env::DrawEnv;
use crate::state::DrawState;

/// Defines how a concrete command mutates draw state.
///
/// Implementors can override the validation hooks to surface pre- and
/// post-conditions that must hold around the mutation. All hooks receive
/// read-only oracle access via the environment and must stay free of other
/// side effects.
pub trait DrawTransition {
    type Error;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &DrawState, _env: &DrawEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the command by mutating the draw state directly.
    /// Implementations should assume `pre_validate` has already passed.
    fn apply(&self, state: &mut DrawState, env: &DrawEnv<'_>) -> Result<(), Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &DrawState, _env: &DrawEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Top-level command enum dispatched by the engine.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawCommand {
    Start(StartDraw),
    Finish(FinishDraw),
    Reset(ResetDraw),
}

impl DrawCommand {
    /// Returns the snake_case name of the command.
    ///
    /// Used for logging and event labels.
    pub fn as_snake_case(&self) -> &'static str {
        match self {
            DrawCommand::Start(_) => "start_draw",
            DrawCommand::Finish(_) => "finish_draw",
            DrawCommand::Reset(_) => "reset_draw",
        }
    }
}

impl From<StartDraw> for DrawCommand {
    fn from(command: StartDraw) -> Self {
        Self::Start(command)
    }
}

impl From<FinishDraw> for DrawCommand {
    fn from(command: FinishDraw) -> Self {
        Self::Finish(command)
    }
}

impl From<ResetDraw> for DrawCommand {
    fn from(command: ResetDraw) -> Self {
        Self::Reset(command)
    }
}
