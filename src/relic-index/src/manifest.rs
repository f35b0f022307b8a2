//! Public export manifest reader
//!
//! The game publishes an LZMA compressed index listing its export files.
//! Four of them are needed here: recipes (ducat values of blueprints and
//! ingredient counts), resources (ducat values of components), and the
//! warframe and weapon exports that map unique names to display names.

use serde::Deserialize;
use std::collections::HashMap;
use std::io::{self, Read};
use xz2::bufread::XzDecoder;
use xz2::stream::Stream;

use crate::error::IngestError;

/// Export files named in the export index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFiles {
    pub recipes: String,
    pub resources: String,
    pub warframes: String,
    pub weapons: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ingredient {
    #[serde(rename = "ItemType")]
    pub item_type: String,
    #[serde(rename = "ItemCount")]
    pub item_count: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub result_type: String,
    #[serde(default)]
    pub prime_selling_price: Option<u32>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportItem {
    pub unique_name: String,
    pub name: String,
    #[serde(default)]
    pub prime_selling_price: Option<u32>,
    #[serde(default)]
    pub product_category: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecipesExport {
    #[serde(rename = "ExportRecipes")]
    pub recipes: Vec<Recipe>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResourcesExport {
    #[serde(rename = "ExportResources")]
    pub resources: Vec<ExportItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WarframesExport {
    #[serde(rename = "ExportWarframes")]
    pub warframes: Vec<ExportItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeaponsExport {
    #[serde(rename = "ExportWeapons")]
    pub weapons: Vec<ExportItem>,
}

/// Ducat values and set requirements extracted from the exports
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ManifestData {
    pub ducats: HashMap<String, u32>,
    pub required_count: HashMap<String, u32>,
}

/// Decode an LZMA (alone format) payload.
///
/// Decoding stops at the end-of-stream marker. The published index is known
/// to carry trailing bytes after it, which the decoder reports as corrupt
/// data once the stream has been fully read; those are ignored.
pub fn decode_lzma(data: &[u8]) -> Result<String, IngestError> {
    let stream = Stream::new_lzma_decoder(u64::MAX)
        .map_err(|e| IngestError::Decompress(format!("lzma: {e}")))?;
    let mut decoder = XzDecoder::new_stream(data, stream);

    let mut output = Vec::new();
    match decoder.read_to_end(&mut output) {
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::InvalidData && !output.is_empty() => {
            let trailing = data.len().saturating_sub(decoder.total_in() as usize);
            tracing::debug!(trailing, "ignoring data after lzma stream");
        }
        Err(e) => return Err(IngestError::Decompress(format!("lzma: {e}"))),
    }

    Ok(String::from_utf8_lossy(&output).into_owned())
}

/// Pick the four needed export files out of the export index text
pub fn parse_export_index(index: &str) -> Result<ExportFiles, IngestError> {
    let find = |export: &'static str| {
        index
            .lines()
            .map(str::trim)
            .find(|line| line.contains(export))
            .map(str::to_string)
            .ok_or(IngestError::MissingExport(export))
    };

    Ok(ExportFiles {
        recipes: find("ExportRecipes")?,
        resources: find("ExportResources")?,
        warframes: find("ExportWarframes")?,
        weapons: find("ExportWeapons")?,
    })
}

/// Parse an export document.
///
/// Exports contain raw control characters inside strings, which strict JSON
/// rejects; they are replaced with spaces first.
pub fn parse_export<T: serde::de::DeserializeOwned>(json: &str) -> Result<T, IngestError> {
    let cleaned: String = json
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    Ok(serde_json::from_str(&cleaned)?)
}

/// Unique name → display name for every prime item
pub fn prime_names(
    resources: &ResourcesExport,
    warframes: &WarframesExport,
    weapons: &WeaponsExport,
) -> HashMap<String, String> {
    let mut names = HashMap::new();

    for item in &resources.resources {
        if item.name.contains("Prime") {
            names.insert(item.unique_name.clone(), item.name.clone());
        }
    }

    for item in &warframes.warframes {
        if !item.name.contains("Prime") {
            continue;
        }
        let name = if item.name.contains("<ARCHWING>") {
            item.name
                .split_once(char::is_whitespace)
                .map_or(item.name.as_str(), |(_, rest)| rest.trim_start())
        } else {
            item.name.as_str()
        };
        names.insert(item.unique_name.clone(), name.to_string());
    }

    for item in &weapons.weapons {
        let excluded = matches!(
            item.product_category.as_deref(),
            Some("SpecialItems" | "SentinelWeapons")
        );
        if item.name.contains("Prime") && !excluded {
            names.insert(item.unique_name.clone(), item.name.clone());
        }
    }

    names
}

/// Ducat values and required counts from parsed exports
pub fn extract_manifest_data(
    recipes: &RecipesExport,
    resources: &ResourcesExport,
    warframes: &WarframesExport,
    weapons: &WeaponsExport,
) -> ManifestData {
    let names = prime_names(resources, warframes, weapons);
    let mut data = ManifestData::default();

    for recipe in &recipes.recipes {
        let Some(result) = names.get(&recipe.result_type) else {
            continue;
        };

        if let Some(ducats) = recipe.prime_selling_price {
            data.ducats.insert(format!("{result} Blueprint"), ducats);
        }

        for ingredient in &recipe.ingredients {
            if ingredient.item_count <= 1 {
                continue;
            }
            if let Some(part) = names.get(&ingredient.item_type) {
                data.required_count.insert(part.clone(), ingredient.item_count);
            }
        }
    }

    for item in &resources.resources {
        if let Some(ducats) = item.prime_selling_price {
            data.ducats.insert(item.name.clone(), ducats);
        }
    }

    tracing::info!(
        ducats = data.ducats.len(),
        required = data.required_count.len(),
        "extracted manifest data"
    );

    data
}
