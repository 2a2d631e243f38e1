//! Rotary wheel landing geometry.
//!
//! Convention: the pointer is fixed at 0 degrees ("12 o'clock") and sectors
//! are laid out clockwise from it in catalog order, so rotating the wheel
//! backward by a sector's center angle brings that sector under the pointer.
//! The same sign convention applies from the base state (rotation 0) and
//! every subsequent draw.

use super::GeometryError;
use crate::config::DrawConfig;
use crate::env::RngOracle;

/// Motion destination for one wheel draw.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WheelTarget {
    /// Absolute rotation the motion player interpolates toward, in degrees.
    pub final_rotation: f64,

    /// Angular size of one sector.
    pub sector_angle: f64,

    /// Unjittered stop angle for the winning sector (`-sector_center`).
    pub stop_angle: f64,

    /// Applied landing jitter, bounded inside the winning sector.
    pub jitter: f64,
}

/// Angular size of one sector for `entry_count` entries.
pub fn sector_angle(entry_count: usize) -> f64 {
    360.0 / entry_count as f64
}

/// Center angle of sector `index` in wheel coordinates.
pub fn sector_center(entry_count: usize, index: usize) -> f64 {
    let sector = sector_angle(entry_count);
    index as f64 * sector + sector / 2.0
}

/// Normalizes a cumulative rotation into `[0, 360)`.
///
/// Applied when a draw completes so the carried rotation stays bounded no
/// matter how many draws a session runs.
pub fn normalize_rotation(rotation: f64) -> f64 {
    rotation.rem_euclid(360.0)
}

/// Which sector sits under the pointer at an absolute rotation.
pub fn landed_index(rotation: f64, entry_count: usize) -> usize {
    let sector = sector_angle(entry_count);
    let pointer_angle = normalize_rotation(-rotation);
    ((pointer_angle / sector) as usize).min(entry_count - 1)
}

/// Computes the destination rotation that lands `winner_index` under the
/// pointer after the configured number of extra full turns.
///
/// The current rotation is threaded through explicitly: motion starts
/// where the last draw left the wheel, and the destination re-aligns to a
/// whole-turn boundary before applying the stop angle so the landing is
/// exact regardless of what rotation was carried in.
pub fn wheel_target(
    entry_count: usize,
    winner_index: usize,
    current_rotation: f64,
    config: &DrawConfig,
    rng: &(impl RngOracle + ?Sized),
    jitter_seed: u64,
) -> Result<WheelTarget, GeometryError> {
    if entry_count == 0 {
        return Err(GeometryError::EmptyWheel);
    }
    if winner_index >= entry_count {
        return Err(GeometryError::WinnerOutOfRange {
            index: winner_index,
            count: entry_count,
        });
    }

    let sector = sector_angle(entry_count);
    let stop_angle = -sector_center(entry_count, winner_index);
    let jitter = rng.jitter(jitter_seed, sector * config.wheel_jitter_fraction);

    // Whole-turn boundary at or below the carried rotation. From a
    // normalized state this is zero; from anything else it cancels the
    // residual so the landing stays on the winner.
    let aligned = current_rotation - normalize_rotation(current_rotation);
    let final_rotation = aligned + f64::from(config.full_spins) * 360.0 + stop_angle + jitter;

    Ok(WheelTarget {
        final_rotation,
        sector_angle: sector,
        stop_angle,
        jitter,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{PcgRng, STREAM_JITTER, stream_seed};

    /// RNG stub whose unit draw is exactly 0.5, making jitter zero.
    struct MidpointRng;

    impl RngOracle for MidpointRng {
        fn next_u32(&self, _seed: u64) -> u32 {
            1 << 31
        }
    }

    #[test]
    fn ten_entries_winner_three_stops_at_234() {
        // sector 36, center 126, base stop -126; mod 360 that is 234.
        let config = DrawConfig::default();
        let target = wheel_target(10, 3, 0.0, &config, &MidpointRng, 0).unwrap();

        assert_eq!(target.sector_angle, 36.0);
        assert_eq!(target.stop_angle, -126.0);
        assert_eq!(target.jitter, 0.0);
        assert_eq!(normalize_rotation(target.final_rotation), 234.0);
    }

    #[test]
    fn full_spins_are_added_on_top_of_the_stop_angle() {
        let config = DrawConfig::default();
        let target = wheel_target(10, 3, 0.0, &config, &MidpointRng, 0).unwrap();
        assert_eq!(target.final_rotation, 8.0 * 360.0 - 126.0);
    }

    #[test]
    fn landing_stays_inside_the_winning_sector_for_any_count_and_index() {
        let config = DrawConfig::default();
        let rng = PcgRng;

        for entry_count in 1..=24 {
            for winner_index in 0..entry_count {
                let seed = stream_seed(11, (entry_count * 100 + winner_index) as u64, STREAM_JITTER);
                let target =
                    wheel_target(entry_count, winner_index, 0.0, &config, &rng, seed).unwrap();

                assert_eq!(
                    landed_index(target.final_rotation, entry_count),
                    winner_index,
                    "count {entry_count}, winner {winner_index}"
                );

                // Deviation from the sector center never exceeds the jitter bound.
                let pointer_angle = normalize_rotation(-target.final_rotation);
                let center = sector_center(entry_count, winner_index);
                let deviation = (pointer_angle - center).abs();
                assert!(
                    deviation <= target.sector_angle * config.wheel_jitter_fraction + 1e-9,
                    "deviation {deviation} over bound"
                );
            }
        }
    }

    #[test]
    fn carried_rotation_does_not_shift_the_landing() {
        let config = DrawConfig::default();
        let rng = PcgRng;
        let seed = stream_seed(21, 4, STREAM_JITTER);

        let from_zero = wheel_target(10, 7, 0.0, &config, &rng, seed).unwrap();
        let from_carry = wheel_target(10, 7, 197.5, &config, &rng, seed).unwrap();

        assert_eq!(landed_index(from_zero.final_rotation, 10), 7);
        assert_eq!(landed_index(from_carry.final_rotation, 10), 7);
        assert!(
            (normalize_rotation(from_zero.final_rotation)
                - normalize_rotation(from_carry.final_rotation))
            .abs()
                < 1e-9
        );
    }

    #[test]
    fn destination_always_moves_forward_from_a_normalized_state() {
        let config = DrawConfig::default();
        let rng = PcgRng;

        for current in [0.0, 90.0, 234.0, 359.9] {
            let seed = stream_seed(33, current as u64, STREAM_JITTER);
            let target = wheel_target(12, 5, current, &config, &rng, seed).unwrap();
            // Residual alignment and stop angle eat at most two turns.
            assert!(target.final_rotation - current > (f64::from(config.full_spins) - 2.0) * 360.0);
        }
    }

    #[test]
    fn single_entry_wheel_is_total() {
        let config = DrawConfig::default();
        let target = wheel_target(1, 0, 0.0, &config, &MidpointRng, 0).unwrap();
        assert_eq!(landed_index(target.final_rotation, 1), 0);
    }

    #[test]
    fn degenerate_inputs_are_rejected() {
        let config = DrawConfig::default();
        assert_eq!(
            wheel_target(0, 0, 0.0, &config, &MidpointRng, 0),
            Err(GeometryError::EmptyWheel)
        );
        assert_eq!(
            wheel_target(5, 5, 0.0, &config, &MidpointRng, 0),
            Err(GeometryError::WinnerOutOfRange { index: 5, count: 5 })
        );
    }

    #[test]
    fn normalize_rotation_handles_negative_angles() {
        assert_eq!(normalize_rotation(-126.0), 234.0);
        assert_eq!(normalize_rotation(720.0), 0.0);
        assert_eq!(normalize_rotation(-360.0), 0.0);
    }
}
