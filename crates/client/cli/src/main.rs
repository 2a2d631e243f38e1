//! Terminal client entry point.
//!
//! Drives draw cycles against the runtime and prints each winner. This is
//! the thinnest possible consumer: it never touches selection or geometry,
//! it only triggers draws and listens for completion events.
mod config;

use std::sync::Arc;

use anyhow::{Context, Result};
use config::{CliConfig, OutputFormat};
use draw_content::{CatalogLoader, ConfigLoader, sample_catalog};
use runtime::{DrawEvent, DrawRuntime, Event, InstantMotionPlayer, Topic};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    setup_logging();

    let cli = CliConfig::from_env()?;

    let catalog = match &cli.catalog_path {
        Some(path) => CatalogLoader::load(path)?,
        None => sample_catalog(),
    };
    let mut builder = DrawRuntime::builder().catalog(catalog);

    if let Some(path) = &cli.config_path {
        builder = builder.config(ConfigLoader::load(path)?);
    }
    if let Some(seed) = cli.seed {
        builder = builder.seed(seed);
    }
    if cli.fast {
        builder = builder.motion_player(Arc::new(InstantMotionPlayer));
    }

    let runtime = builder.build()?;
    let handle = runtime.handle();
    let mut events = handle.subscribe(Topic::Draw);

    tracing::info!(mode = %cli.mode, count = cli.count, "draw client ready");

    for cycle in 1..=cli.count {
        handle.start(cli.mode).await?;

        // Each cycle produces exactly one completion.
        let winner = loop {
            let event = events.recv().await.context("runtime closed mid-draw")?;
            match event {
                Event::Draw(DrawEvent::Completed { winner, .. }) => break winner,
                Event::Draw(DrawEvent::Failed { error, .. }) => {
                    anyhow::bail!("draw {cycle} failed: {error}");
                }
                _ => {}
            }
        };

        match cli.output {
            OutputFormat::Plain => {
                println!("[{cycle}/{}] {} ({})", cli.count, winner.label, winner.id);
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(&winner)?);
            }
        }
    }

    runtime.shutdown().await;
    Ok(())
}

/// Structured logging to stderr, filtered by `RUST_LOG`.
fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
