//! Draw tuning loader.

use std::path::Path;

use draw_core::DrawConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for draw tuning from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load tuning from a TOML file and validate the cross-field
    /// invariants (jitter bounds, landing window).
    pub fn load(path: &Path) -> LoadResult<DrawConfig> {
        let content = read_file(path)?;
        let config: DrawConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid config in {}: {}", path.display(), e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const FULL_CONFIG: &str = r#"
full_spins = 6
wheel_jitter_fraction = 0.3
tape_jitter_fraction = 0.15
pool_size = 50
min_slot = 30
end_margin = 10
item_width = 120.0
item_gap = 12.0
viewport_width = 640.0
spin_duration_ms = 4000
"#;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_and_validates_tuning() {
        let file = write_temp(FULL_CONFIG);
        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.full_spins, 6);
        assert_eq!(config.pool_size, 50);
    }

    #[test]
    fn rejects_an_empty_landing_window() {
        let file = write_temp(&FULL_CONFIG.replace("min_slot = 30", "min_slot = 45"));
        let error = ConfigLoader::load(file.path()).unwrap_err();
        assert!(error.to_string().contains("Invalid config"));
    }
}
