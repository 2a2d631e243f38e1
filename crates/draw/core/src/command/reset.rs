//! Reset command: restore the canonical zero state.

use crate::command::DrawTransition;
use crate::env::DrawEnv;
use crate::error::{DrawError, ErrorSeverity};
use crate::state::{DrawPhase, DrawState};

/// Clears carried motion state back to the canonical baseline and bumps
/// the generation counter so dependent views (e.g. a rendered tape pool)
/// know to rebuild.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResetDraw;

/// Errors surfaced while resetting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResetError {
    #[error("cannot reset while a draw is in flight")]
    SpinInProgress,
}

impl DrawError for ResetError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }
}

impl DrawTransition for ResetDraw {
    type Error = ResetError;

    fn pre_validate(&self, state: &DrawState, _env: &DrawEnv<'_>) -> Result<(), Self::Error> {
        if state.is_spinning() {
            return Err(ResetError::SpinInProgress);
        }
        Ok(())
    }

    fn apply(&self, state: &mut DrawState, _env: &DrawEnv<'_>) -> Result<(), Self::Error> {
        state.rotation_degrees = 0.0;
        state.tape_offset = 0.0;
        state.pool.clear();
        state.generation = state.generation.wrapping_add(1);
        state.phase = DrawPhase::Idle;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Entry};
    use crate::command::{DrawTransition, FinishDraw, StartDraw};
    use crate::config::DrawConfig;
    use crate::engine::test_support::OracleFixture;
    use crate::state::DrawMode;

    fn fixture() -> OracleFixture {
        let catalog = Catalog::new(vec![Entry::from("a"), Entry::from("b")]).unwrap();
        OracleFixture::new(catalog, DrawConfig::default())
    }

    #[test]
    fn reset_restores_the_zero_baseline_and_bumps_generation() {
        let fixture = fixture();
        let env = fixture.env();
        let mut state = DrawState::new(3);

        StartDraw::new(DrawMode::Tape).apply(&mut state, &env).unwrap();
        FinishDraw.apply(&mut state, &env).unwrap();
        assert_ne!(state.tape_offset, 0.0);
        assert!(!state.pool.is_empty());

        ResetDraw.apply(&mut state, &env).unwrap();

        assert_eq!(state.rotation_degrees, 0.0);
        assert_eq!(state.tape_offset, 0.0);
        assert!(state.pool.is_empty());
        assert_eq!(state.generation, 1);
    }

    #[test]
    fn reset_during_a_spin_is_rejected() {
        let fixture = fixture();
        let env = fixture.env();
        let mut state = DrawState::new(3);

        StartDraw::new(DrawMode::Wheel).apply(&mut state, &env).unwrap();
        assert_eq!(
            ResetDraw.pre_validate(&state, &env),
            Err(ResetError::SpinInProgress)
        );
    }
}
