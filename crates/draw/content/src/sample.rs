//! Built-in sample prize table.

use draw_core::{Catalog, Entry};

/// Ten-entry giveaway table used by the CLI and integration tests.
///
/// The two top prizes carry explicit weights; the remaining entries split
/// the leftover mass equally, which exercises the defaulting rule end to
/// end.
pub fn sample_catalog() -> Catalog {
    let entries = vec![
        Entry::weighted("grand", "Grand Prize Console", 0.02),
        Entry::weighted("deluxe", "Deluxe Headset", 0.08),
        Entry::new("keyboard", "Mechanical Keyboard"),
        Entry::new("mouse", "Wireless Mouse"),
        Entry::new("mug", "Thermal Mug"),
        Entry::new("shirt", "Logo T-Shirt"),
        Entry::new("stickers", "Sticker Pack"),
        Entry::new("tote", "Canvas Tote"),
        Entry::new("bottle", "Water Bottle"),
        Entry::new("badge", "Enamel Badge"),
    ];

    Catalog::new(entries).expect("sample catalog is statically valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_catalog_is_valid_and_ordered() {
        let catalog = sample_catalog();
        assert_eq!(catalog.len(), 10);
        assert_eq!(catalog.entries()[0].id.as_str(), "grand");

        let weights = catalog.effective_weights();
        let total: f64 = weights.iter().sum();
        assert!((total - 1.0).abs() < 1e-12);
        // Eight unset entries split the remaining 0.9.
        assert!((weights[2] - 0.1125).abs() < 1e-12);
    }
}
