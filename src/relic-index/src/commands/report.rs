//! `report` subcommand
//!
//! Writes `relic_data.json` (every relic at every refinement) and
//! `set_data.json` (every priced set) for an index.

use anyhow::{Context, Result};
use relic_engine::{build_relic_data, build_set_data};
use serde::Serialize;
use std::fs;
use std::path::Path;

const RELIC_DATA_FILE: &str = "relic_data.json";
const SET_DATA_FILE: &str = "set_data.json";

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize report")?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}

pub fn handle(index: &str, out_dir: &Path) -> Result<()> {
    let index = super::load_index(index)?;

    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let relic_data = build_relic_data(&index).context("Failed to build relic report")?;
    let relic_path = out_dir.join(RELIC_DATA_FILE);
    write_json(&relic_path, &relic_data)?;
    tracing::info!(relics = relic_data.len(), path = %relic_path.display(), "wrote relic report");

    let set_data = build_set_data(&index);
    let set_path = out_dir.join(SET_DATA_FILE);
    write_json(&set_path, &set_data)?;
    tracing::info!(sets = set_data.len(), path = %set_path.display(), "wrote set report");

    println!("Wrote {} and {}", relic_path.display(), set_path.display());

    Ok(())
}
