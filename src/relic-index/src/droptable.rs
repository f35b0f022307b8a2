//! Drop table page scraper
//!
//! The public drop table lists every relic as a header row such as
//! `Axi A1 Relic (Intact)` followed by its six reward rows (item, chance).
//! Only the Intact tables are read: the tier of each slot is recovered from
//! the Intact chance and the other refinements are derived from tiers.

use relic_engine::{set_name, RelicDrops, TierCode};
use scraper::{ElementRef, Html, Selector};
use std::collections::{BTreeMap, BTreeSet};

use crate::error::IngestError;

const INTACT_HEADER: &str = "Relic (Intact)";
const REWARDS_PER_RELIC: usize = 6;

/// Relic drop tables scraped from the page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DropTable {
    pub relics: BTreeMap<String, RelicDrops>,
    /// Every prime part seen in any relic
    pub prime_parts: BTreeSet<String>,
}

impl DropTable {
    /// Prime parts grouped by set name
    pub fn sets(&self) -> BTreeMap<String, Vec<String>> {
        let mut sets: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for part in &self.prime_parts {
            sets.entry(set_name(part)).or_default().push(part.clone());
        }
        sets
    }
}

/// Tier of an Intact reward label such as `Uncommon (25.33%)`
pub fn tier_from_label(label: &str) -> Option<TierCode> {
    let percent = label.split_once('(')?.1.split_once('%')?.0.trim();
    match percent {
        "25.33" => Some(TierCode(1)),
        "11.00" => Some(TierCode(2)),
        "2.00" => Some(TierCode(3)),
        _ => None,
    }
}

fn selector(css: &'static str) -> Result<Selector, IngestError> {
    Selector::parse(css).map_err(|e| IngestError::Selector {
        selector: css,
        message: e.to_string(),
    })
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}

/// Parse relic drop tables out of the drop table HTML
pub fn parse_drop_table(html: &str) -> Result<DropTable, IngestError> {
    let document = Html::parse_document(html);
    let row_selector = selector("tr")?;
    let header_selector = selector("th")?;
    let cell_selector = selector("td")?;

    let rows: Vec<ElementRef<'_>> = document.select(&row_selector).collect();
    let mut table = DropTable::default();

    for (i, row) in rows.iter().enumerate() {
        let Some(header) = row.select(&header_selector).next() else {
            continue;
        };
        let header = cell_text(header);
        if !header.contains(INTACT_HEADER) {
            continue;
        }

        let relic = header
            .split("Relic")
            .next()
            .unwrap_or_default()
            .trim_end()
            .to_string();

        let mut drops = RelicDrops::new();
        for reward in rows.iter().skip(i + 1).take(REWARDS_PER_RELIC) {
            let cells: Vec<String> = reward.select(&cell_selector).map(cell_text).collect();
            let [item, label, ..] = cells.as_slice() else {
                tracing::warn!(relic = %relic, "reward row without item and chance cells");
                continue;
            };

            let Some(tier) = tier_from_label(label) else {
                tracing::warn!(
                    relic = %relic,
                    item = %item,
                    label = %label,
                    "unknown chance label"
                );
                continue;
            };

            if item.contains(" Prime ") {
                table.prime_parts.insert(item.clone());
            }

            drops
                .entry(item.clone())
                .and_modify(|code| *code = code.tied(tier))
                .or_insert(tier);
        }

        tracing::debug!(relic = %relic, drops = drops.len(), "parsed relic");
        table.relics.insert(relic, drops);
    }

    tracing::info!(
        relics = table.relics.len(),
        prime_parts = table.prime_parts.len(),
        "parsed drop table"
    );

    Ok(table)
}
