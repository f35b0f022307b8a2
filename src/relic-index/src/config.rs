//! Configuration management for relic-index

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_EXPORT_INDEX: &str =
    "https://content.warframe.com/PublicExport/index_en.txt.lzma";
pub const DEFAULT_MANIFEST_BASE: &str = "http://content.warframe.com/PublicExport/Manifest/";

/// Ingestion sources and index metadata.
///
/// Every source may be a URL or a local path. Missing keys fall back to the
/// defaults, so a config file only needs the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Drop table HTML page
    pub drop_table: String,
    /// Market price history JSON
    pub price_history: String,
    /// LZMA compressed export index
    pub export_index: String,
    /// Prefix joined with export index entries to form export URLs
    pub manifest_base: String,
    /// Where `build` writes the index
    pub output: PathBuf,
    /// Relics currently in the drop tables
    pub non_vaulted: Vec<String>,
    /// Set name → item type
    pub types: HashMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            drop_table: "drop_table.html".to_string(),
            price_history: "price_history.json".to_string(),
            export_index: DEFAULT_EXPORT_INDEX.to_string(),
            manifest_base: DEFAULT_MANIFEST_BASE.to_string(),
            output: PathBuf::from("index.json.gz"),
            non_vaulted: Vec::new(),
            types: HashMap::new(),
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("relic-index");

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration from the default location, or defaults if absent
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, or defaults if it doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory at {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        Ok(())
    }

    /// URL of one export file named in the export index
    pub fn export_url(&self, entry: &str) -> String {
        format!("{}{}", self.manifest_base, entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.export_index, DEFAULT_EXPORT_INDEX);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
drop_table = "https://example.com/drops.html"
non_vaulted = ["Lith A1", "Axi A1"]

[types]
"Ash Prime" = "Warframes"
"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.drop_table, "https://example.com/drops.html");
        assert_eq!(config.non_vaulted, vec!["Lith A1", "Axi A1"]);
        assert_eq!(config.types["Ash Prime"], "Warframes");
        assert_eq!(config.price_history, "price_history.json");
        assert_eq!(config.output, PathBuf::from("index.json.gz"));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.non_vaulted.push("Meso N1".to_string());
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "non_vaulted = 3").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_export_url() {
        let config = Config::default();
        assert_eq!(
            config.export_url("ExportRecipes_en.json!00_abc"),
            "http://content.warframe.com/PublicExport/Manifest/ExportRecipes_en.json!00_abc"
        );
    }
}
