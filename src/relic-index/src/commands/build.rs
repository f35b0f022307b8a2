//! `build` subcommand

use anyhow::{Context, Result};
use relic_index::build_index;
use std::path::{Path, PathBuf};

/// Build an index from the configured sources and write it
pub fn handle(config_path: Option<&Path>, output: Option<PathBuf>) -> Result<()> {
    let config = super::load_config(config_path)?;
    let output = output.unwrap_or_else(|| config.output.clone());

    let index = build_index(&config).context("Failed to build relic index")?;
    index
        .save(&output)
        .with_context(|| format!("Failed to write index to {}", output.display()))?;

    println!(
        "Wrote {} relics and {} prices to {}",
        index.relics.len(),
        index.prices.len(),
        output.display()
    );

    Ok(())
}
