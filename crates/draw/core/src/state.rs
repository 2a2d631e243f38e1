//! Authoritative draw state representation.
//!
//! This module owns the data describing one draw surface across its
//! lifetime: the phase guard, carried motion state, the tape pool, and the
//! in-flight draw. Consumers snapshot or query this state but mutate it
//! exclusively through the engine.

use crate::geometry::{TapeTarget, WheelTarget};

/// Presentation mode sharing the one selection core.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawMode {
    /// Rotary wheel with a fixed pointer.
    Wheel,
    /// Scrolling tape with a fixed center marker.
    Tape,
}

/// Phase of the draw surface; `Spinning` doubles as the mutual-exclusion
/// guard against overlapping draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawPhase {
    Idle,
    Spinning,
}

/// Motion destination for the active mode.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MotionTarget {
    Wheel(WheelTarget),
    Tape(TapeTarget),
}

impl MotionTarget {
    /// The scalar destination an external player interpolates toward:
    /// absolute rotation in degrees (wheel) or horizontal offset (tape).
    pub fn destination(&self) -> f64 {
        match self {
            MotionTarget::Wheel(target) => target.final_rotation,
            MotionTarget::Tape(target) => target.final_offset,
        }
    }
}

/// The draw currently in flight; present exactly while `Spinning`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PendingDraw {
    pub mode: DrawMode,

    /// Index of the winner in the catalog.
    pub winner_index: usize,

    /// Pool slot the winner was read from (tape mode only).
    pub winner_slot: Option<usize>,

    pub target: MotionTarget,
}

/// Canonical state of one draw surface.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DrawState {
    /// RNG seed for deterministic stream derivation.
    ///
    /// Set once at session start and never modified. Combined with `nonce`
    /// to generate unique seeds for each random decision.
    pub session_seed: u64,

    /// Command sequence number, incremented per executed command.
    pub nonce: u64,

    /// Reset counter; bumped by a reset so dependent views rebuild.
    pub generation: u32,

    pub phase: DrawPhase,

    /// Cumulative wheel rotation in degrees, carried across draws and
    /// normalized into `[0, 360)` when a draw completes.
    pub rotation_degrees: f64,

    /// Current tape scroll offset.
    pub tape_offset: f64,

    /// Catalog indices sampled for the current tape cycle; regenerated on
    /// every tape draw start.
    pub pool: Vec<usize>,

    pub pending: Option<PendingDraw>,
}

impl DrawState {
    /// Creates the canonical zero state for a new session.
    pub fn new(session_seed: u64) -> Self {
        Self {
            session_seed,
            nonce: 0,
            generation: 0,
            phase: DrawPhase::Idle,
            rotation_degrees: 0.0,
            tape_offset: 0.0,
            pool: Vec::new(),
            pending: None,
        }
    }

    pub fn is_spinning(&self) -> bool {
        self.phase == DrawPhase::Spinning
    }
}

impl Default for DrawState {
    fn default() -> Self {
        Self::new(0)
    }
}
