//! Start-draw command: winner selection plus motion-target computation.

use crate::command::DrawTransition;
use crate::env::{
    DrawEnv, OracleError, STREAM_JITTER, STREAM_POOL_BASE, STREAM_SLOT, STREAM_WINNER, stream_seed,
};
use crate::error::{DrawError, ErrorSeverity};
use crate::geometry::{self, GeometryError, TapeLayout};
use crate::select::select_weighted;
use crate::state::{DrawMode, DrawPhase, DrawState, MotionTarget, PendingDraw};

/// Begins a draw on an idle surface.
///
/// Selection and geometry both happen here, before any motion plays: the
/// winner is locked in and the motion target is guaranteed (and checked in
/// `post_validate`) to land on it. Wheel draws select a catalog index
/// directly; tape draws sample a fresh pool, draw a slot from the landing
/// window, and read the winner out of that slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StartDraw {
    pub mode: DrawMode,
}

impl StartDraw {
    pub fn new(mode: DrawMode) -> Self {
        Self { mode }
    }
}

/// Errors surfaced while starting a draw.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StartError {
    #[error("a draw is already in flight")]
    AlreadySpinning,

    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(
        "computed target lands on sector {landed} instead of winner {winner} \
         (count {count})"
    )]
    WheelLandingMismatch {
        landed: usize,
        winner: usize,
        count: usize,
    },

    #[error("tape landing deviates {deviation} from the winner's center (bound {bound})")]
    TapeLandingOutOfBounds { deviation: f64, bound: f64 },

    #[error("pending draw missing after start")]
    PendingMissing,
}

impl DrawError for StartError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            StartError::AlreadySpinning | StartError::Oracle(_) | StartError::Geometry(_) => {
                ErrorSeverity::Validation
            }
            // The landing invariant holds by construction; a violation
            // means the geometry itself is wrong.
            StartError::WheelLandingMismatch { .. }
            | StartError::TapeLandingOutOfBounds { .. }
            | StartError::PendingMissing => ErrorSeverity::Internal,
        }
    }
}

impl DrawTransition for StartDraw {
    type Error = StartError;

    fn pre_validate(&self, state: &DrawState, _env: &DrawEnv<'_>) -> Result<(), Self::Error> {
        if state.is_spinning() {
            return Err(StartError::AlreadySpinning);
        }
        Ok(())
    }

    fn apply(&self, state: &mut DrawState, env: &DrawEnv<'_>) -> Result<(), Self::Error> {
        let catalog = env.catalog()?.catalog();
        let config = env.config()?.tuning();
        let rng = env.rng()?;

        let seed_for = |stream: u32| stream_seed(state.session_seed, state.nonce, stream);

        let pending = match self.mode {
            DrawMode::Wheel => {
                let pick = select_weighted(catalog, rng, seed_for(STREAM_WINNER));
                let target = geometry::wheel_target(
                    catalog.len(),
                    pick.index,
                    state.rotation_degrees,
                    config,
                    rng,
                    seed_for(STREAM_JITTER),
                )?;
                PendingDraw {
                    mode: self.mode,
                    winner_index: pick.index,
                    winner_slot: None,
                    target: MotionTarget::Wheel(target),
                }
            }
            DrawMode::Tape => {
                let pool: Vec<usize> = (0..config.pool_size)
                    .map(|slot| {
                        let seed = seed_for(STREAM_POOL_BASE + slot as u32);
                        select_weighted(catalog, rng, seed).index
                    })
                    .collect();

                let slot = geometry::winner_slot(
                    pool.len(),
                    config.min_slot,
                    config.end_margin,
                    rng,
                    seed_for(STREAM_SLOT),
                )?;

                let layout = TapeLayout {
                    item_width: config.item_width,
                    gap: config.item_gap,
                    viewport_width: config.viewport_width,
                };
                let target = geometry::tape_target(
                    &layout,
                    pool.len(),
                    slot,
                    config.tape_jitter_fraction,
                    rng,
                    seed_for(STREAM_JITTER),
                )?;

                // The entry sitting at the drawn slot IS the winner; the
                // reported winner and the landing target can never diverge.
                let winner_index = pool[slot];
                state.pool = pool;

                PendingDraw {
                    mode: self.mode,
                    winner_index,
                    winner_slot: Some(slot),
                    target: MotionTarget::Tape(target),
                }
            }
        };

        state.pending = Some(pending);
        state.phase = DrawPhase::Spinning;
        Ok(())
    }

    fn post_validate(&self, state: &DrawState, env: &DrawEnv<'_>) -> Result<(), Self::Error> {
        let catalog = env.catalog()?.catalog();
        let config = env.config()?.tuning();
        let pending = state.pending.as_ref().ok_or(StartError::PendingMissing)?;

        match &pending.target {
            MotionTarget::Wheel(target) => {
                // Wheel draws never come from a pool slot.
                debug_assert!(pending.winner_slot.is_none());

                let landed = geometry::landed_index(target.final_rotation, catalog.len());
                if landed != pending.winner_index {
                    return Err(StartError::WheelLandingMismatch {
                        landed,
                        winner: pending.winner_index,
                        count: catalog.len(),
                    });
                }
            }
            MotionTarget::Tape(target) => {
                let deviation = (target.final_offset + target.item_center).abs();
                let bound = config.item_width * config.tape_jitter_fraction;
                if deviation > bound + 1e-9 {
                    return Err(StartError::TapeLandingOutOfBounds { deviation, bound });
                }
            }
        }
        Ok(())
    }
}
