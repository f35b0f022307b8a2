//! `fetch` subcommand

use anyhow::{Context, Result};
use std::path::Path;

/// Download a published index, check that it parses, and store it
pub fn handle(url: &str, output: &Path) -> Result<()> {
    let index = super::load_index(url)?;

    index
        .save(output)
        .with_context(|| format!("Failed to write index to {}", output.display()))?;

    println!(
        "Saved {} relics from {} to {}",
        index.relics.len(),
        url,
        output.display()
    );

    Ok(())
}
