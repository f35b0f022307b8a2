//! Command handlers for relic-index
//!
//! Each subcommand has its own module with a `handle` function.

pub mod build;
pub mod configure;
pub mod fetch;
pub mod report;
pub mod value;

use anyhow::{Context, Result};
use relic_engine::RelicIndex;
use relic_index::{fetch_index, Config};
use std::path::Path;

/// Load the config from `path`, or the default location
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// Load an index from a file path or URL
pub fn load_index(source: &str) -> Result<RelicIndex> {
    fetch_index(source).with_context(|| format!("Failed to load index from {source}"))
}
