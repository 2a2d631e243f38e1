//! Deterministic landing geometry for both presentation modes.
//!
//! Geometry functions map a pre-selected winner to the exact motion
//! destination an external player animates toward. They never select
//! winners themselves and never perform animation.
mod tape;
mod wheel;

pub use tape::{TapeLayout, TapeTarget, item_center, tape_target, winner_slot};
pub use wheel::{
    WheelTarget, landed_index, normalize_rotation, sector_angle, sector_center, wheel_target,
};

use crate::error::{DrawError, ErrorSeverity};

/// Errors for geometry computations on degenerate input.
///
/// Valid inputs (count >= 1, slot in range) make every geometry function
/// total; these variants are the configuration-violation escape hatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GeometryError {
    #[error("wheel has no sectors")]
    EmptyWheel,

    #[error("winner index {index} out of range for {count} entries")]
    WinnerOutOfRange { index: usize, count: usize },

    #[error("tape pool is empty")]
    EmptyPool,

    #[error("winner slot {slot} out of range for pool of {len}")]
    SlotOutOfRange { slot: usize, len: usize },

    #[error(
        "landing window [{min_slot}, {len} - {end_margin}) contains no slot"
    )]
    LandingWindowEmpty {
        min_slot: usize,
        end_margin: usize,
        len: usize,
    },
}

impl DrawError for GeometryError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }
}
