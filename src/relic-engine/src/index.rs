//! Relic index: the immutable snapshot of drop tables and market data
//!
//! An index is built once by the ingestion tooling and stored as gzip
//! compressed JSON with the keys `relics`, `prices`, `ducats`,
//! `required_count`, `non_vaulted` and `types`. All queries and
//! calculations read from a shared `&RelicIndex`.

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::chance::TierCode;
use crate::error::EngineError;

const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];

/// Item name → tier code for one relic
pub type RelicDrops = BTreeMap<String, TierCode>;

/// Loaded relic and market data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelicIndex {
    /// Relic name (e.g. "Axi A1") → drop table
    pub relics: BTreeMap<String, RelicDrops>,
    /// Item or set name → market price
    pub prices: HashMap<String, f64>,
    /// Item name → ducat value
    #[serde(default)]
    pub ducats: HashMap<String, u32>,
    /// Part name → number needed to craft its set (only when > 1)
    #[serde(default)]
    pub required_count: HashMap<String, u32>,
    /// Relics currently in the drop tables
    #[serde(default)]
    pub non_vaulted: Vec<String>,
    /// Set name → item type ("Warframes", "Primary", ...)
    #[serde(default)]
    pub types: HashMap<String, String>,
}

impl RelicIndex {
    /// Load an index file, gzip compressed or plain JSON
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, EngineError> {
        let bytes = fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    /// Parse index bytes, detecting gzip by its magic number
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EngineError> {
        let index: RelicIndex = if bytes.starts_with(&GZIP_MAGIC) {
            serde_json::from_reader(GzDecoder::new(bytes))?
        } else {
            serde_json::from_slice(bytes)?
        };

        tracing::debug!(
            relics = index.relics.len(),
            prices = index.prices.len(),
            "loaded relic index"
        );

        Ok(index)
    }

    /// Serialize as gzip compressed JSON
    pub fn to_gzip_bytes(&self) -> Result<Vec<u8>, EngineError> {
        let json = serde_json::to_vec(self)?;
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&json)?;
        Ok(encoder.finish()?)
    }

    /// Write the index as gzip compressed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), EngineError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, self.to_gzip_bytes()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "relics": {"Axi A1": {"Akstiletto Prime Barrel": 2, "Forma Blueprint": 21}},
        "prices": {"Akstiletto Prime Barrel": 12.5},
        "ducats": {"Akstiletto Prime Barrel": 45},
        "required_count": {},
        "non_vaulted": ["Axi A1"]
    }"#;

    #[test]
    fn test_plain_json() {
        let index = RelicIndex::from_bytes(SAMPLE.as_bytes()).unwrap();
        assert_eq!(index.relics["Axi A1"]["Forma Blueprint"], TierCode(21));
        assert_eq!(index.prices["Akstiletto Prime Barrel"], 12.5);
        assert!(index.types.is_empty());
    }

    #[test]
    fn test_optional_keys_default() {
        let index = RelicIndex::from_bytes(br#"{"relics": {}, "prices": {}}"#).unwrap();
        assert!(index.ducats.is_empty());
        assert!(index.non_vaulted.is_empty());
    }

    #[test]
    fn test_gzip_file_roundtrip() -> anyhow::Result<()> {
        let index = RelicIndex::from_bytes(SAMPLE.as_bytes())?;
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("index").join("index.json.gz");

        index.save(&path)?;
        let raw = fs::read(&path)?;
        assert!(raw.starts_with(&GZIP_MAGIC));

        let loaded = RelicIndex::load(&path)?;
        assert_eq!(loaded, index);
        Ok(())
    }

    #[test]
    fn test_invalid_json() {
        let err = RelicIndex::from_bytes(b"not json").unwrap_err();
        assert!(matches!(err, EngineError::Json(_)));
    }
}
