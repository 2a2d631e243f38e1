//! Draw configuration constants and tunable parameters.

use crate::error::{DrawError, ErrorSeverity};

/// Tunable parameters for selection geometry and motion pacing.
///
/// Values are validated as a set by [`DrawConfig::validate`]: the jitter
/// fractions must keep a landing inside the winning sector/item, and the
/// tape landing window must fit inside the pool.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DrawConfig {
    /// Whole extra turns added to every wheel spin for visual effect.
    pub full_spins: u32,

    /// Landing jitter as a fraction of one sector angle, in (0, 0.5).
    /// Bounded so the pointer never crosses into a neighboring sector.
    pub wheel_jitter_fraction: f64,

    /// Landing jitter as a fraction of one tape item width, in (0, 0.5).
    pub tape_jitter_fraction: f64,

    /// Number of entries sampled into the tape pool per draw cycle.
    pub pool_size: usize,

    /// First pool slot eligible to win. Slots before it exist only to give
    /// the deceleration enough scroll distance to read as real.
    pub min_slot: usize,

    /// Slots at the tail of the pool excluded from winning, so the tape
    /// never runs out of items past the marker.
    pub end_margin: usize,

    /// Tape item width in layout units (pixels for the reference renderer).
    pub item_width: f64,

    /// Horizontal gap between tape items.
    pub item_gap: f64,

    /// Width of the tape viewport; items start at half this padding so the
    /// first item's left edge sits under the center marker at offset zero.
    pub viewport_width: f64,

    /// Motion duration from trigger to landing, in milliseconds.
    pub spin_duration_ms: u64,
}

impl DrawConfig {
    pub const DEFAULT_FULL_SPINS: u32 = 8;
    pub const DEFAULT_WHEEL_JITTER_FRACTION: f64 = 0.4;
    pub const DEFAULT_TAPE_JITTER_FRACTION: f64 = 0.175;
    pub const DEFAULT_POOL_SIZE: usize = 100;
    pub const DEFAULT_MIN_SLOT: usize = 60;
    pub const DEFAULT_END_MARGIN: usize = 15;
    pub const DEFAULT_ITEM_WIDTH: f64 = 160.0;
    pub const DEFAULT_ITEM_GAP: f64 = 16.0;
    pub const DEFAULT_VIEWPORT_WIDTH: f64 = 800.0;
    pub const DEFAULT_SPIN_DURATION_MS: u64 = 6000;

    pub fn new() -> Self {
        Self {
            full_spins: Self::DEFAULT_FULL_SPINS,
            wheel_jitter_fraction: Self::DEFAULT_WHEEL_JITTER_FRACTION,
            tape_jitter_fraction: Self::DEFAULT_TAPE_JITTER_FRACTION,
            pool_size: Self::DEFAULT_POOL_SIZE,
            min_slot: Self::DEFAULT_MIN_SLOT,
            end_margin: Self::DEFAULT_END_MARGIN,
            item_width: Self::DEFAULT_ITEM_WIDTH,
            item_gap: Self::DEFAULT_ITEM_GAP,
            viewport_width: Self::DEFAULT_VIEWPORT_WIDTH,
            spin_duration_ms: Self::DEFAULT_SPIN_DURATION_MS,
        }
    }

    /// Checks cross-field invariants. Call once when accepting external
    /// configuration; a valid config stays valid (all fields are plain data).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.wheel_jitter_fraction > 0.0 && self.wheel_jitter_fraction < 0.5) {
            return Err(ConfigError::JitterOutOfBounds {
                field: "wheel_jitter_fraction",
                value: self.wheel_jitter_fraction,
            });
        }
        if !(self.tape_jitter_fraction > 0.0 && self.tape_jitter_fraction < 0.5) {
            return Err(ConfigError::JitterOutOfBounds {
                field: "tape_jitter_fraction",
                value: self.tape_jitter_fraction,
            });
        }
        if self.pool_size == 0 {
            return Err(ConfigError::EmptyPool);
        }
        if self.min_slot + self.end_margin >= self.pool_size {
            return Err(ConfigError::LandingWindowEmpty {
                min_slot: self.min_slot,
                end_margin: self.end_margin,
                pool_size: self.pool_size,
            });
        }
        if !(self.item_width.is_finite() && self.item_width > 0.0) {
            return Err(ConfigError::InvalidDimension {
                field: "item_width",
                value: self.item_width,
            });
        }
        if !(self.item_gap.is_finite() && self.item_gap >= 0.0) {
            return Err(ConfigError::InvalidDimension {
                field: "item_gap",
                value: self.item_gap,
            });
        }
        if !(self.viewport_width.is_finite() && self.viewport_width > 0.0) {
            return Err(ConfigError::InvalidDimension {
                field: "viewport_width",
                value: self.viewport_width,
            });
        }
        if self.spin_duration_ms == 0 {
            return Err(ConfigError::ZeroDuration);
        }
        Ok(())
    }
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors surfaced by [`DrawConfig::validate`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfigError {
    #[error("{field} is {value}, must lie strictly between 0 and 0.5")]
    JitterOutOfBounds { field: &'static str, value: f64 },

    #[error("pool_size must be at least 1")]
    EmptyPool,

    #[error(
        "landing window is empty: min_slot {min_slot} + end_margin {end_margin} \
         leaves no winnable slot in a pool of {pool_size}"
    )]
    LandingWindowEmpty {
        min_slot: usize,
        end_margin: usize,
        pool_size: usize,
    },

    #[error("{field} has invalid dimension {value}")]
    InvalidDimension { field: &'static str, value: f64 },

    #[error("spin_duration_ms must be at least 1")]
    ZeroDuration,
}

impl DrawError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }
}
