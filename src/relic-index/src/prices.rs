//! Market price history reader

use serde::Deserialize;
use std::collections::HashMap;

use crate::error::IngestError;

/// One day of statistics for an item
#[derive(Debug, Clone, Deserialize)]
pub struct PriceEntry {
    pub avg_price: f64,
    #[serde(default)]
    pub volume: Option<u64>,
}

/// Latest average price of every prime item in a price history document.
///
/// The document maps item names to daily entries, most recent first. Items
/// without " Prime " in the name and items with no entries are dropped.
pub fn parse_price_history(json: &str) -> Result<HashMap<String, f64>, IngestError> {
    let history: HashMap<String, Vec<PriceEntry>> = serde_json::from_str(json)?;

    let prices: HashMap<String, f64> = history
        .into_iter()
        .filter(|(item, _)| item.contains(" Prime "))
        .filter_map(|(item, entries)| entries.first().map(|latest| (item, latest.avg_price)))
        .collect();

    tracing::info!(items = prices.len(), "parsed price history");
    Ok(prices)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HISTORY: &str = r#"{
        "Ash Prime Chassis": [{"avg_price": 12.4, "volume": 30}, {"avg_price": 11.0, "volume": 25}],
        "Ash Prime Set": [{"avg_price": 80}],
        "Arcane Energize": [{"avg_price": 60.0}],
        "Lex Prime Barrel": []
    }"#;

    #[test]
    fn test_keeps_latest_prime_prices() {
        let prices = parse_price_history(HISTORY).unwrap();
        assert_eq!(prices.len(), 2);
        assert_eq!(prices["Ash Prime Chassis"], 12.4);
        assert_eq!(prices["Ash Prime Set"], 80.0);
    }

    #[test]
    fn test_drops_non_prime_and_empty() {
        let prices = parse_price_history(HISTORY).unwrap();
        assert!(!prices.contains_key("Arcane Energize"));
        assert!(!prices.contains_key("Lex Prime Barrel"));
    }

    #[test]
    fn test_invalid_document() {
        assert!(matches!(
            parse_price_history("[1, 2, 3]"),
            Err(IngestError::Json(_))
        ));
    }
}
