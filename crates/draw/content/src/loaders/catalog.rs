//! Prize catalog loader.

use std::path::Path;

use draw_core::{Catalog, Entry};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub entries: Vec<Entry>,
}

/// Loader for prize catalogs from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a prize catalog from a RON file.
    ///
    /// The entry list is re-validated through [`Catalog::new`], so weight
    /// problems in the data file surface here with file context attached.
    pub fn load(path: &Path) -> LoadResult<Catalog> {
        let content = read_file(path)?;
        let file: CatalogFile = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog RON: {}", e))?;

        Catalog::new(file.entries)
            .map_err(|e| anyhow::anyhow!("Invalid catalog in {}: {}", path.display(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_a_catalog_with_mixed_weights() {
        let file = write_temp(
            r#"(
    entries: [
        (id: "grand", label: "Grand Prize", weight: Some(0.05)),
        (id: "small", label: "Small Prize", weight: None),
    ],
)"#,
        );

        let catalog = CatalogLoader::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.entries()[0].weight, Some(0.05));
        assert_eq!(catalog.entries()[1].weight, None);
    }

    #[test]
    fn rejects_a_catalog_with_negative_weight() {
        let file = write_temp(
            r#"(
    entries: [
        (id: "bad", label: "Bad", weight: Some(-1.0)),
    ],
)"#,
        );

        let error = CatalogLoader::load(file.path()).unwrap_err();
        assert!(error.to_string().contains("Invalid catalog"));
    }

    #[test]
    fn missing_file_reports_the_path() {
        let error = CatalogLoader::load(Path::new("/nonexistent/catalog.ron")).unwrap_err();
        assert!(error.to_string().contains("/nonexistent/catalog.ron"));
    }
}
