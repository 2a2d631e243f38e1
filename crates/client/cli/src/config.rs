//! CLI configuration from environment variables.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use draw_core::DrawMode;

/// Output format for completed draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Plain,
    Json,
}

/// Runtime options sourced from the environment (and `.env`).
///
/// Variables:
/// - `DRAW_MODE`: `wheel` (default) or `tape`
/// - `DRAW_COUNT`: number of draw cycles to run (default 1)
/// - `DRAW_SEED`: fixed session seed; omitted means process entropy
/// - `DRAW_CATALOG`: path to a RON catalog; omitted means the sample table
/// - `DRAW_CONFIG`: path to a TOML tuning file
/// - `DRAW_OUTPUT`: `plain` (default) or `json`
/// - `DRAW_FAST`: any value skips the real-time motion wait
#[derive(Clone, Debug)]
pub struct CliConfig {
    pub mode: DrawMode,
    pub count: u32,
    pub seed: Option<u64>,
    pub catalog_path: Option<PathBuf>,
    pub config_path: Option<PathBuf>,
    pub output: OutputFormat,
    pub fast: bool,
}

impl CliConfig {
    pub fn from_env() -> Result<Self> {
        let mode = match std::env::var("DRAW_MODE") {
            Ok(raw) => DrawMode::from_str(&raw)
                .with_context(|| format!("DRAW_MODE must be 'wheel' or 'tape', got '{raw}'"))?,
            Err(_) => DrawMode::Wheel,
        };

        let count = match std::env::var("DRAW_COUNT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("DRAW_COUNT must be a number, got '{raw}'"))?,
            Err(_) => 1,
        };

        let seed = match std::env::var("DRAW_SEED") {
            Ok(raw) => Some(
                raw.parse()
                    .with_context(|| format!("DRAW_SEED must be a number, got '{raw}'"))?,
            ),
            Err(_) => None,
        };

        let output = match std::env::var("DRAW_OUTPUT").as_deref() {
            Ok("json") => OutputFormat::Json,
            _ => OutputFormat::Plain,
        };

        Ok(Self {
            mode,
            count,
            seed,
            catalog_path: std::env::var_os("DRAW_CATALOG").map(PathBuf::from),
            config_path: std::env::var_os("DRAW_CONFIG").map(PathBuf::from),
            output,
            fast: std::env::var_os("DRAW_FAST").is_some(),
        })
    }
}
