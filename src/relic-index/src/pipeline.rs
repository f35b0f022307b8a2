//! Index build pipeline
//!
//! Pulls the drop table, price history and export manifest from their
//! configured sources and merges them into a single [`RelicIndex`].

use relic_engine::RelicIndex;
use std::collections::HashMap;

use crate::config::Config;
use crate::droptable::{parse_drop_table, DropTable};
use crate::error::IngestError;
use crate::fetch::{fetch_text, read_source, read_source_text};
use crate::manifest::{
    decode_lzma, extract_manifest_data, parse_export, parse_export_index, ManifestData,
    RecipesExport, ResourcesExport, WarframesExport, WeaponsExport,
};
use crate::prices::parse_price_history;

/// Merge parsed sources into an index
pub fn assemble(
    drops: DropTable,
    prices: HashMap<String, f64>,
    manifest: ManifestData,
    config: &Config,
) -> RelicIndex {
    let unpriced = drops
        .prime_parts
        .iter()
        .filter(|part| !prices.contains_key(*part))
        .count();
    if unpriced > 0 {
        tracing::warn!(unpriced, "prime parts without a market price");
    }

    for relic in &config.non_vaulted {
        if !drops.relics.contains_key(relic) {
            tracing::warn!(relic = %relic, "configured non-vaulted relic not in drop table");
        }
    }

    RelicIndex {
        relics: drops.relics,
        prices,
        ducats: manifest.ducats,
        required_count: manifest.required_count,
        non_vaulted: config.non_vaulted.clone(),
        types: config.types.clone(),
    }
}

/// Fetch the export index and the four export documents it names
pub fn fetch_manifest(config: &Config) -> Result<ManifestData, IngestError> {
    let index = decode_lzma(&read_source(&config.export_index)?)?;
    let files = parse_export_index(&index)?;

    let recipes: RecipesExport = parse_export(&fetch_text(&config.export_url(&files.recipes))?)?;
    let resources: ResourcesExport =
        parse_export(&fetch_text(&config.export_url(&files.resources))?)?;
    let warframes: WarframesExport =
        parse_export(&fetch_text(&config.export_url(&files.warframes))?)?;
    let weapons: WeaponsExport = parse_export(&fetch_text(&config.export_url(&files.weapons))?)?;

    Ok(extract_manifest_data(&recipes, &resources, &warframes, &weapons))
}

/// Build an index from every configured source
pub fn build_index(config: &Config) -> Result<RelicIndex, IngestError> {
    let drops = parse_drop_table(&read_source_text(&config.drop_table)?)?;
    tracing::info!(sets = drops.sets().len(), "grouped prime parts into sets");

    let prices = parse_price_history(&read_source_text(&config.price_history)?)?;
    let manifest = fetch_manifest(config)?;

    let index = assemble(drops, prices, manifest, config);
    tracing::info!(
        relics = index.relics.len(),
        prices = index.prices.len(),
        ducats = index.ducats.len(),
        "built relic index"
    );

    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use relic_engine::{BatchStrategy, Refinement, TierCode};

    fn drop_table() -> DropTable {
        let html = "<table>\
            <tr><th>Lith A1 Relic (Intact)</th></tr>\
            <tr><td>Ash Prime Chassis</td><td>Uncommon (25.33%)</td></tr>\
            <tr><td>Forma Blueprint</td><td>Uncommon (25.33%)</td></tr>\
            <tr><td>Lex Prime Barrel</td><td>Uncommon (25.33%)</td></tr>\
            <tr><td>Bo Prime Handle</td><td>Uncommon (11.00%)</td></tr>\
            <tr><td>Akstiletto Prime Barrel</td><td>Uncommon (11.00%)</td></tr>\
            <tr><td>Nikana Prime Blueprint</td><td>Rare (2.00%)</td></tr>\
            </table>";
        parse_drop_table(html).unwrap()
    }

    fn prices() -> HashMap<String, f64> {
        HashMap::from([
            ("Ash Prime Chassis".to_string(), 10.0),
            ("Nikana Prime Blueprint".to_string(), 60.0),
            ("Ash Prime Set".to_string(), 90.0),
        ])
    }

    fn manifest() -> ManifestData {
        ManifestData {
            ducats: HashMap::from([("Nikana Prime Blueprint".to_string(), 100)]),
            required_count: HashMap::from([("Bo Prime Handle".to_string(), 2)]),
        }
    }

    #[test]
    fn test_assemble() {
        let config = Config {
            non_vaulted: vec!["Lith A1".to_string()],
            types: HashMap::from([("Ash Prime".to_string(), "Warframes".to_string())]),
            ..Config::default()
        };

        let index = assemble(drop_table(), prices(), manifest(), &config);

        assert_eq!(index.relic_list(), vec!["Lith A1"]);
        assert_eq!(index.relics["Lith A1"]["Nikana Prime Blueprint"], TierCode(3));
        assert_eq!(index.ducats("Nikana Prime Blueprint"), 100);
        assert_eq!(index.required_count("Bo Prime Handle"), 2);
        assert!(!index.is_vaulted("Lith A1"));
        assert_eq!(index.set_type("Ash Prime"), Some("Warframes"));
    }

    #[test]
    fn test_assembled_index_survives_save_and_load() {
        let index = assemble(drop_table(), prices(), manifest(), &Config::default());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.json.gz");
        index.save(&path).unwrap();
        let loaded = RelicIndex::load(&path).unwrap();

        assert_eq!(loaded, index);
        assert!(loaded.is_vaulted("Lith A1"));
        let solo = loaded
            .average_return("Lith A1", Refinement::Radiant, BatchStrategy::Solo, None)
            .unwrap();
        assert!(solo > 0.0);
    }
}
