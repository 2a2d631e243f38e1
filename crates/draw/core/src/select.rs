//! Weighted winner selection via cumulative-distribution draw.
//!
//! This is the statistically sensitive half of the core. It is a pure
//! function of the catalog and one RNG draw, so its distribution can be
//! tested without any rendering surface.

use crate::catalog::{Catalog, Entry};
use crate::env::RngOracle;

/// Outcome of one weighted draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pick {
    /// Index of the winning entry in the catalog's order.
    pub index: usize,
}

/// Picks an index from `weights` given a uniform draw `r` in `[0, 1)`.
///
/// Weights are normalized by their total before the cumulative walk, so a
/// table that sums to 0.97 or 3.0 behaves the same as one summing to 1.
/// If floating rounding leaves `r` beyond the final cumulative value the
/// last index wins; this function never panics on a non-empty slice with
/// positive total mass.
pub fn select_index(weights: &[f64], r: f64) -> usize {
    debug_assert!(!weights.is_empty(), "weights must be validated non-empty");

    let total: f64 = weights.iter().sum();
    let mut cumulative = 0.0;
    for (index, weight) in weights.iter().enumerate() {
        cumulative += weight / total;
        if r < cumulative {
            return index;
        }
    }

    // Rounding pushed r past the last cumulative value; the final entry
    // absorbs the sliver.
    weights.len() - 1
}

/// Draws one winner from the catalog according to its effective weights.
///
/// Pure in the catalog and the seed-addressed RNG stream: a fixed seed
/// fully determines the pick.
pub fn select_weighted(catalog: &Catalog, rng: &(impl RngOracle + ?Sized), seed: u64) -> Pick {
    let weights = catalog.effective_weights();
    let r = rng.unit_f64(seed);
    Pick {
        index: select_index(&weights, r),
    }
}

/// As [`select_weighted`], but resolves the winning entry as well.
pub fn select_entry<'c>(
    catalog: &'c Catalog,
    rng: &(impl RngOracle + ?Sized),
    seed: u64,
) -> (usize, &'c Entry) {
    let pick = select_weighted(catalog, rng, seed);
    // Pick indices come from the catalog's own weight table.
    let entry = catalog
        .entry(pick.index)
        .expect("selected index is within the catalog");
    (pick.index, entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EntryId;
    use crate::env::{PcgRng, STREAM_WINNER, stream_seed};

    /// RNG stub pinned to the maximal unit value.
    struct MaxRng;

    impl RngOracle for MaxRng {
        fn next_u32(&self, _seed: u64) -> u32 {
            u32::MAX
        }
    }

    fn entry(id: &str, weight: Option<f64>) -> Entry {
        Entry {
            id: EntryId::from(id),
            label: id.to_owned(),
            weight,
        }
    }

    fn frequencies(catalog: &Catalog, trials: u64) -> Vec<f64> {
        let rng = PcgRng;
        let mut counts = vec![0u64; catalog.len()];
        for nonce in 0..trials {
            let seed = stream_seed(0xC0FFEE, nonce, STREAM_WINNER);
            counts[select_weighted(catalog, &rng, seed).index] += 1;
        }
        counts
            .into_iter()
            .map(|count| count as f64 / trials as f64)
            .collect()
    }

    #[test]
    fn explicit_weights_drive_the_distribution() {
        let catalog = Catalog::new(vec![
            entry("common", Some(0.7)),
            entry("rare", Some(0.2)),
            entry("legendary", Some(0.1)),
        ])
        .unwrap();

        let observed = frequencies(&catalog, 50_000);
        for (freq, expected) in observed.iter().zip([0.7, 0.2, 0.1]) {
            assert!(
                (freq - expected).abs() < 0.015,
                "frequency {freq} too far from {expected}"
            );
        }
    }

    #[test]
    fn unweighted_entries_are_uniform() {
        let catalog =
            Catalog::new(vec![entry("a", None), entry("b", None), entry("c", None)]).unwrap();

        let observed = frequencies(&catalog, 50_000);
        for freq in observed {
            assert!((freq - 1.0 / 3.0).abs() < 0.015);
        }
    }

    #[test]
    fn mixed_weights_respect_the_shared_remainder() {
        // "half" takes 0.5 explicitly; the other two split the rest.
        let catalog = Catalog::new(vec![
            entry("half", Some(0.5)),
            entry("a", None),
            entry("b", None),
        ])
        .unwrap();

        let observed = frequencies(&catalog, 50_000);
        assert!((observed[0] - 0.5).abs() < 0.015);
        assert!((observed[1] - 0.25).abs() < 0.015);
        assert!((observed[2] - 0.25).abs() < 0.015);
    }

    #[test]
    fn oversized_totals_are_normalized() {
        let catalog = Catalog::new(vec![entry("a", Some(3.0)), entry("b", Some(1.0))]).unwrap();
        let observed = frequencies(&catalog, 50_000);
        assert!((observed[0] - 0.75).abs() < 0.015);
    }

    #[test]
    fn draw_at_the_top_of_the_unit_range_falls_back_to_the_last_entry() {
        let catalog =
            Catalog::new(vec![entry("a", None), entry("b", None), entry("c", None)]).unwrap();
        let pick = select_weighted(&catalog, &MaxRng, 0);
        assert_eq!(pick.index, catalog.len() - 1);
    }

    #[test]
    fn select_index_never_walks_past_the_table() {
        // r at (or beyond) the final cumulative value resolves to the last
        // index rather than panicking.
        assert_eq!(select_index(&[1.0, 1.0], 1.0), 1);
        assert_eq!(select_index(&[0.3, 0.3, 0.4], 0.999999999), 2);
    }

    #[test]
    fn zero_weight_entries_never_win() {
        let catalog = Catalog::new(vec![entry("dead", Some(0.0)), entry("live", None)]).unwrap();
        let rng = PcgRng;
        for nonce in 0..1000 {
            let seed = stream_seed(7, nonce, STREAM_WINNER);
            assert_eq!(select_weighted(&catalog, &rng, seed).index, 1);
        }
    }

    #[test]
    fn fixed_seed_is_fully_deterministic() {
        let catalog = Catalog::new(vec![entry("a", None), entry("b", None)]).unwrap();
        let rng = PcgRng;
        let first = select_weighted(&catalog, &rng, 123456);
        let second = select_weighted(&catalog, &rng, 123456);
        assert_eq!(first, second);
    }

    #[test]
    fn select_entry_resolves_the_picked_index() {
        let catalog = Catalog::new(vec![entry("a", None), entry("b", None)]).unwrap();
        let (index, winner) = select_entry(&catalog, &PcgRng, 98765);
        assert_eq!(winner, &catalog.entries()[index]);
    }
}
