//! Finish-draw command: lands the in-flight draw.

use crate::command::DrawTransition;
use crate::env::DrawEnv;
use crate::error::{DrawError, ErrorSeverity};
use crate::geometry::normalize_rotation;
use crate::state::{DrawPhase, DrawState, MotionTarget};

/// Completes the in-flight draw once the external motion player reports
/// the destination reached.
///
/// Carried motion state is folded back into the surface: the wheel's
/// cumulative rotation is normalized into `[0, 360)` so repeated draws
/// never accumulate an unbounded angle, and the tape keeps its final
/// offset. The winner stays available in `pending` until `apply` clears
/// it; the engine surfaces it in the execution outcome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FinishDraw;

/// Errors surfaced while finishing a draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FinishError {
    #[error("no draw is in flight")]
    NotSpinning,

    #[error("spinning surface has no pending draw")]
    PendingMissing,
}

impl DrawError for FinishError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            FinishError::NotSpinning => ErrorSeverity::Validation,
            // Spinning implies pending by construction.
            FinishError::PendingMissing => ErrorSeverity::Internal,
        }
    }
}

impl DrawTransition for FinishDraw {
    type Error = FinishError;

    fn pre_validate(&self, state: &DrawState, _env: &DrawEnv<'_>) -> Result<(), Self::Error> {
        if !state.is_spinning() {
            return Err(FinishError::NotSpinning);
        }
        if state.pending.is_none() {
            return Err(FinishError::PendingMissing);
        }
        Ok(())
    }

    fn apply(&self, state: &mut DrawState, _env: &DrawEnv<'_>) -> Result<(), Self::Error> {
        let pending = state.pending.take().ok_or(FinishError::PendingMissing)?;

        match pending.target {
            MotionTarget::Wheel(target) => {
                state.rotation_degrees = normalize_rotation(target.final_rotation);
            }
            MotionTarget::Tape(target) => {
                state.tape_offset = target.final_offset;
            }
        }

        state.phase = DrawPhase::Idle;
        Ok(())
    }

    fn post_validate(&self, state: &DrawState, _env: &DrawEnv<'_>) -> Result<(), Self::Error> {
        debug_assert!(
            (0.0..360.0).contains(&state.rotation_degrees),
            "carried rotation must stay normalized"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Entry};
    use crate::command::{DrawTransition, StartDraw};
    use crate::config::DrawConfig;
    use crate::engine::test_support::OracleFixture;
    use crate::state::DrawMode;

    fn fixture() -> OracleFixture {
        let catalog = Catalog::new(vec![
            Entry::from("a"),
            Entry::from("b"),
            Entry::from("c"),
        ])
        .unwrap();
        OracleFixture::new(catalog, DrawConfig::default())
    }

    #[test]
    fn finish_normalizes_the_carried_rotation() {
        let fixture = fixture();
        let env = fixture.env();
        let mut state = DrawState::new(5);

        StartDraw::new(DrawMode::Wheel).apply(&mut state, &env).unwrap();
        FinishDraw.apply(&mut state, &env).unwrap();
        FinishDraw.post_validate(&state, &env).unwrap();

        assert_eq!(state.phase, DrawPhase::Idle);
        assert!(state.pending.is_none());
        assert!((0.0..360.0).contains(&state.rotation_degrees));
    }

    #[test]
    fn finish_applies_the_tape_offset() {
        let fixture = fixture();
        let env = fixture.env();
        let mut state = DrawState::new(5);

        StartDraw::new(DrawMode::Tape).apply(&mut state, &env).unwrap();
        let destination = state.pending.as_ref().unwrap().target.destination();
        FinishDraw.apply(&mut state, &env).unwrap();

        assert_eq!(state.tape_offset, destination);
    }

    #[test]
    fn finish_without_a_spin_is_rejected() {
        let fixture = fixture();
        let env = fixture.env();
        let state = DrawState::new(5);
        assert_eq!(
            FinishDraw.pre_validate(&state, &env),
            Err(FinishError::NotSpinning)
        );
    }
}
