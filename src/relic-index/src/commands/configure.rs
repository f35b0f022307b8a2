//! `configure` subcommand

use anyhow::{Context, Result};
use relic_index::Config;
use std::path::{Path, PathBuf};

/// Show the active configuration, optionally writing defaults first
pub fn handle(config_path: Option<&Path>, init: bool) -> Result<()> {
    let path: PathBuf = match config_path {
        Some(path) => path.to_path_buf(),
        None => Config::config_path()?,
    };

    if init && !path.exists() {
        Config::default().save_to(&path)?;
        println!("Wrote default config to {}", path.display());
    }

    let config = Config::load_from(&path)?;
    let contents = toml::to_string_pretty(&config).context("Failed to serialize config")?;

    println!("Config file: {}", path.display());
    println!();
    print!("{contents}");

    Ok(())
}
