//! Command execution pipeline for one draw surface.
//!
//! The [`DrawEngine`] is the authoritative reducer for [`DrawState`]. All
//! state mutations flow through the three-phase transition pipeline
//! (`pre_validate → apply → post_validate`), and the engine surfaces rich
//! error information for the orchestrating layer.
//!
//! The engine also owns the idempotency boundary: [`DrawEngine::start`] and
//! [`DrawEngine::reset`] on a spinning surface are ignored no-ops rather
//! than errors, which is what an interactive trigger wants. The strict
//! transition errors remain reachable through [`DrawEngine::execute`].

mod errors;

#[cfg(test)]
pub(crate) mod test_support;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use crate::catalog::Entry;
use crate::command::{DrawCommand, DrawTransition, FinishDraw, ResetDraw, StartDraw};
use crate::env::DrawEnv;
use crate::state::{DrawMode, DrawState, MotionTarget};

/// Outcome of a successfully executed command.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawOutcome {
    Started(StartedDraw),
    Finished(CompletedDraw),
    Reset { generation: u32 },
}

/// A draw locked in and awaiting motion completion.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StartedDraw {
    pub mode: DrawMode,
    pub winner_index: usize,
    pub target: MotionTarget,
    /// Nonce the draw's RNG streams were derived from.
    pub nonce: u64,
}

/// A landed draw carrying exactly one winner.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompletedDraw {
    pub mode: DrawMode,
    pub winner_index: usize,
    pub winner_slot: Option<usize>,
    pub winner: Entry,
}

/// Result of the idempotent start boundary.
#[derive(Clone, Debug, PartialEq)]
pub enum StartOutcome {
    Started(StartedDraw),
    /// A draw was already in flight; nothing was selected or computed.
    Ignored,
}

/// Result of the idempotent reset boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResetOutcome {
    Reset { generation: u32 },
    /// A draw was in flight; the surface was left untouched.
    Ignored,
}

/// Draw engine that executes commands against a mutable state.
pub struct DrawEngine<'a> {
    state: &'a mut DrawState,
}

impl<'a> DrawEngine<'a> {
    pub fn new(state: &'a mut DrawState) -> Self {
        Self { state }
    }

    /// Executes a command through its transition pipeline.
    ///
    /// The nonce increments after every successful execution, so each
    /// command draws from fresh RNG streams.
    pub fn execute(
        &mut self,
        env: &DrawEnv<'_>,
        command: &DrawCommand,
    ) -> Result<DrawOutcome, ExecuteError> {
        let outcome = match command {
            DrawCommand::Start(start) => {
                run_pipeline(start, self.state, env).map_err(ExecuteError::Start)?;
                let pending =
                    self.state
                        .pending
                        .as_ref()
                        .ok_or(ExecuteError::MissingPendingDraw {
                            command: "start_draw",
                        })?;
                DrawOutcome::Started(StartedDraw {
                    mode: pending.mode,
                    winner_index: pending.winner_index,
                    target: pending.target,
                    nonce: self.state.nonce,
                })
            }
            DrawCommand::Finish(finish) => {
                // `apply` consumes the pending draw; capture the winner first.
                let pending = self.state.pending.clone();
                run_pipeline(finish, self.state, env).map_err(ExecuteError::Finish)?;
                let pending = pending.ok_or(ExecuteError::MissingPendingDraw {
                    command: "finish_draw",
                })?;
                let winner = env
                    .catalog()?
                    .catalog()
                    .entry(pending.winner_index)
                    .cloned()
                    .ok_or(ExecuteError::WinnerNotInCatalog {
                        index: pending.winner_index,
                    })?;
                DrawOutcome::Finished(CompletedDraw {
                    mode: pending.mode,
                    winner_index: pending.winner_index,
                    winner_slot: pending.winner_slot,
                    winner,
                })
            }
            DrawCommand::Reset(reset) => {
                run_pipeline(reset, self.state, env).map_err(ExecuteError::Reset)?;
                DrawOutcome::Reset {
                    generation: self.state.generation,
                }
            }
        };

        self.state.nonce += 1;
        Ok(outcome)
    }

    /// Starts a draw; an already-spinning surface ignores the trigger.
    ///
    /// Two immediate calls produce exactly one selection and one motion
    /// target, never two.
    pub fn start(
        &mut self,
        env: &DrawEnv<'_>,
        mode: DrawMode,
    ) -> Result<StartOutcome, ExecuteError> {
        if self.state.is_spinning() {
            return Ok(StartOutcome::Ignored);
        }
        match self.execute(env, &DrawCommand::Start(StartDraw::new(mode)))? {
            DrawOutcome::Started(started) => Ok(StartOutcome::Started(started)),
            _ => unreachable!("start command produced a non-start outcome"),
        }
    }

    /// Completes the in-flight draw, returning its winner.
    pub fn finish(&mut self, env: &DrawEnv<'_>) -> Result<CompletedDraw, ExecuteError> {
        match self.execute(env, &DrawCommand::Finish(FinishDraw))? {
            DrawOutcome::Finished(completed) => Ok(completed),
            _ => unreachable!("finish command produced a non-finish outcome"),
        }
    }

    /// Resets to the canonical zero state; ignored while spinning.
    pub fn reset(&mut self, env: &DrawEnv<'_>) -> Result<ResetOutcome, ExecuteError> {
        if self.state.is_spinning() {
            return Ok(ResetOutcome::Ignored);
        }
        match self.execute(env, &DrawCommand::Reset(ResetDraw))? {
            DrawOutcome::Reset { generation } => Ok(ResetOutcome::Reset { generation }),
            _ => unreachable!("reset command produced a non-reset outcome"),
        }
    }
}

/// Runs one command through all three phases, attributing failures.
fn run_pipeline<T: DrawTransition>(
    command: &T,
    state: &mut DrawState,
    env: &DrawEnv<'_>,
) -> Result<(), TransitionPhaseError<T::Error>> {
    command
        .pre_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;
    command
        .apply(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;
    command
        .post_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;
    Ok(())
}
