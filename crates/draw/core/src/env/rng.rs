//! RNG oracle for deterministic random number generation.
//!
//! Every random decision in a draw (winner, jitter, pool slots) pulls from
//! its own seed-addressed stream, so a fixed session seed reproduces the
//! entire draw bit for bit and no draw's outcome can leak into another
//! draw's jitter range.

/// Stream tag for the winner-selection draw.
pub const STREAM_WINNER: u32 = 0;
/// Stream tag for the landing-jitter draw.
pub const STREAM_JITTER: u32 = 1;
/// Stream tag for the tape landing-slot draw.
pub const STREAM_SLOT: u32 = 2;
/// Base stream tag for tape pool sampling; slot `i` uses `STREAM_POOL_BASE + i`.
pub const STREAM_POOL_BASE: u32 = 16;

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be stateless between calls: the same seed always
/// produces the same value. Callers derive a fresh seed per decision via
/// [`stream_seed`].
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Uniform draw from `[0, 1)`.
    fn unit_f64(&self, seed: u64) -> f64 {
        f64::from(self.next_u32(seed)) / (u64::from(u32::MAX) + 1) as f64
    }

    /// Uniform draw from `[-magnitude, +magnitude)`.
    ///
    /// Used for landing jitter; `magnitude` must be non-negative.
    fn jitter(&self, seed: u64, magnitude: f64) -> f64 {
        (self.unit_f64(seed) * 2.0 - 1.0) * magnitude
    }

    /// Uniform draw from the half-open range `[start, end)`.
    ///
    /// Returns `start` when the range is empty.
    fn range_usize(&self, seed: u64, start: usize, end: usize) -> usize {
        if start >= end {
            return start;
        }
        let span = (end - start) as u64;
        start + (u64::from(self.next_u32(seed)) % span) as usize
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 32-bit output permuted out of 64-bit LCG state. Small, fast,
/// and statistically solid. Cosmetic draws need no cryptographic
/// randomness, so nothing heavier is warranted here.
///
/// Reference: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    /// Advance the LCG state by one step.
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation: xorshift the high bits, then rotate by the
    /// topmost bits.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        let state = Self::pcg_step(seed);
        Self::pcg_output(state)
    }
}

/// Derives the seed for one random decision within one command.
///
/// * `session_seed` - fixed at session start, for replay/determinism
/// * `nonce` - command sequence number (increments per executed command)
/// * `stream` - which decision within the command (see the `STREAM_*` tags)
///
/// Mixing uses SplitMix64-style multipliers with a final avalanche so that
/// adjacent nonces and streams land on unrelated seeds.
pub fn stream_seed(session_seed: u64, nonce: u64, stream: u32) -> u64 {
    let mut hash = session_seed;

    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= u64::from(stream).wrapping_mul(0x517cc1b727220a95);

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_output() {
        let rng = PcgRng;
        assert_eq!(rng.next_u32(42), rng.next_u32(42));
        assert_eq!(rng.unit_f64(7), rng.unit_f64(7));
    }

    #[test]
    fn unit_f64_stays_in_half_open_range() {
        let rng = PcgRng;
        for nonce in 0..1000 {
            let value = rng.unit_f64(stream_seed(99, nonce, STREAM_WINNER));
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn jitter_is_bounded_by_magnitude() {
        let rng = PcgRng;
        for nonce in 0..1000 {
            let offset = rng.jitter(stream_seed(5, nonce, STREAM_JITTER), 14.4);
            assert!((-14.4..14.4).contains(&offset));
        }
    }

    #[test]
    fn range_usize_covers_the_window() {
        let rng = PcgRng;
        let mut seen = [false; 25];
        for nonce in 0..2000 {
            let slot = rng.range_usize(stream_seed(1, nonce, STREAM_SLOT), 60, 85);
            assert!((60..85).contains(&slot));
            seen[slot - 60] = true;
        }
        assert!(seen.iter().all(|hit| *hit));
    }

    #[test]
    fn streams_do_not_collide() {
        let winner = stream_seed(3, 10, STREAM_WINNER);
        let jitter = stream_seed(3, 10, STREAM_JITTER);
        let next_nonce = stream_seed(3, 11, STREAM_WINNER);
        assert_ne!(winner, jitter);
        assert_ne!(winner, next_nonce);
    }
}
