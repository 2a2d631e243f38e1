//! Prize catalog: the ordered, weight-validated entry list.
//!
//! A [`Catalog`] is external configuration as far as the draw machinery is
//! concerned: it is validated once at construction and never mutated by a
//! draw. Entry order defines sector boundaries (wheel) and pool positions
//! (tape); it has no bearing on selection fairness.

use crate::error::{DrawError, ErrorSeverity};

/// Stable unique identifier for a catalog entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntryId(pub String);

impl EntryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for EntryId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntryId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// One prize/outcome in the draw.
///
/// `label` is an opaque display payload; the core never inspects it.
/// `weight` is the relative selection probability. Entries without an
/// explicit weight share the probability mass left over by the explicit
/// ones equally.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry {
    pub id: EntryId,
    pub label: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub weight: Option<f64>,
}

impl Entry {
    /// Creates an entry that shares the remaining probability mass.
    pub fn new(id: impl Into<EntryId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            weight: None,
        }
    }

    /// Creates an entry with an explicit relative weight.
    pub fn weighted(id: impl Into<EntryId>, label: impl Into<String>, weight: f64) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            weight: Some(weight),
        }
    }
}

impl From<&str> for Entry {
    fn from(id: &str) -> Self {
        Self::new(id, id)
    }
}

/// Errors rejected at catalog construction time.
///
/// Weight problems surface here, never during a draw.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CatalogError {
    #[error("catalog must contain at least one entry")]
    Empty,

    #[error("entry {index} has invalid weight {value} (must be finite and >= 0)")]
    InvalidWeight { index: usize, value: f64 },

    #[error("effective weights sum to {total}, which carries no probability mass")]
    ZeroMass { total: f64 },
}

impl DrawError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }
}

/// Ordered, validated entry list.
///
/// Construction enforces the weight invariant: every explicit weight is
/// finite and non-negative, and the effective weights carry positive total
/// mass. Holding a `Catalog` is proof the list is drawable.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Catalog {
    entries: Vec<Entry>,
}

impl Catalog {
    /// Validates and wraps an entry list.
    pub fn new(entries: Vec<Entry>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }

        for (index, entry) in entries.iter().enumerate() {
            if let Some(weight) = entry.weight
                && (!weight.is_finite() || weight < 0.0)
            {
                return Err(CatalogError::InvalidWeight {
                    index,
                    value: weight,
                });
            }
        }

        let catalog = Self { entries };
        let total: f64 = catalog.effective_weights().iter().sum();
        if !(total.is_finite() && total > 0.0) {
            return Err(CatalogError::ZeroMass { total });
        }

        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the empty list is rejected at construction.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn entry(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    /// Effective (unnormalized) weight per entry.
    ///
    /// Explicit weights are taken as given. Entries without one split
    /// `max(0, 1 - sum(explicit))` equally; when no entry has an explicit
    /// weight each gets `1/N`. The result can sum to something other than
    /// 1.0 (the selector normalizes), but construction guarantees the sum
    /// is finite and positive.
    pub fn effective_weights(&self) -> Vec<f64> {
        let explicit_total: f64 = self.entries.iter().filter_map(|e| e.weight).sum();
        let unset_count = self.entries.iter().filter(|e| e.weight.is_none()).count();

        let default_weight = if unset_count > 0 {
            (1.0 - explicit_total).max(0.0) / unset_count as f64
        } else {
            0.0
        };

        self.entries
            .iter()
            .map(|e| e.weight.unwrap_or(default_weight))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, weight: Option<f64>) -> Entry {
        Entry {
            id: EntryId::from(id),
            label: id.to_owned(),
            weight,
        }
    }

    #[test]
    fn rejects_empty_list() {
        assert_eq!(Catalog::new(Vec::new()), Err(CatalogError::Empty));
    }

    #[test]
    fn rejects_negative_weight() {
        let result = Catalog::new(vec![entry("a", None), entry("b", Some(-0.2))]);
        assert_eq!(
            result,
            Err(CatalogError::InvalidWeight {
                index: 1,
                value: -0.2
            })
        );
    }

    #[test]
    fn rejects_non_finite_weight() {
        let result = Catalog::new(vec![entry("a", Some(f64::NAN))]);
        assert!(matches!(
            result,
            Err(CatalogError::InvalidWeight { index: 0, .. })
        ));
    }

    #[test]
    fn rejects_all_zero_weights() {
        let result = Catalog::new(vec![entry("a", Some(0.0)), entry("b", Some(0.0))]);
        assert!(matches!(result, Err(CatalogError::ZeroMass { .. })));
    }

    #[test]
    fn unweighted_entries_split_mass_equally() {
        let catalog = Catalog::new(vec![entry("a", None), entry("b", None)]).unwrap();
        assert_eq!(catalog.effective_weights(), vec![0.5, 0.5]);
    }

    #[test]
    fn unset_entries_share_the_remainder() {
        let catalog = Catalog::new(vec![
            entry("a", Some(0.5)),
            entry("b", None),
            entry("c", None),
        ])
        .unwrap();
        assert_eq!(catalog.effective_weights(), vec![0.5, 0.25, 0.25]);
    }

    #[test]
    fn overcommitted_explicit_weights_leave_nothing_for_unset() {
        // Explicit weights already exceed 1; the remainder clamps to zero.
        let catalog = Catalog::new(vec![
            entry("a", Some(2.0)),
            entry("b", Some(1.0)),
            entry("c", None),
        ])
        .unwrap();
        assert_eq!(catalog.effective_weights(), vec![2.0, 1.0, 0.0]);
    }

    #[test]
    fn zero_weight_entry_is_allowed_alongside_positive_mass() {
        let catalog = Catalog::new(vec![entry("a", Some(0.0)), entry("b", None)]).unwrap();
        assert_eq!(catalog.effective_weights(), vec![0.0, 1.0]);
    }
}
