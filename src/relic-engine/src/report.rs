//! Relic and set summary reports
//!
//! Flattened views of the index used by front ends: per relic and
//! refinement the resolved drops plus the expected return of every reported
//! strategy, and per set its parts, prices and vault status.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::calculator::expected_return;
use crate::chance::DropChance;
use crate::error::EngineError;
use crate::index::RelicIndex;
use crate::rarity::rarity_by_tier;
use crate::refinement::Refinement;
use crate::strategy::BatchStrategy;

/// Warframes and the weapons released alongside them in prime access
pub const PRIME_ACCESS: &[(&str, &[&str])] = &[
    ("Ash", &["Carrier", "Vectis"]),
    ("Atlas", &["Dethcube", "Tekko"]),
    ("Banshee", &["Euphona", "Helios"]),
    ("Chroma", &["Gram", "Rubico"]),
    ("Ember", &["Sicarus", "Glaive"]),
    ("Equinox", &["Stradavar", "Tipedo"]),
    ("Frost", &["Latron", "Reaper"]),
    ("Gara", &["Astilla", "Volnus"]),
    ("Hydroid", &["Ballistica", "Nami Skyla"]),
    ("Inaros", &["Karyst", "Panthera"]),
    ("Ivara", &["Baza", "Aksomati"]),
    ("Limbo", &["Destreza", "Pyrana"]),
    ("Loki", &["Bo", "Wyrm"]),
    ("Mag", &["Boar", "Dakra"]),
    ("Mesa", &["Akjagara", "Redeemer"]),
    ("Mirage", &["Akbolto", "Kogake"]),
    ("Nekros", &["Galatine", "Tigris"]),
    ("Nezha", &["Guandao", "Zakti"]),
    ("Nidus", &["Magnus", "Strun"]),
    ("Nova", &["Soma", "Vasto"]),
    ("Nyx", &["Hikou", "Scindo"]),
    ("Oberon", &["Sybaris", "Silva & Aegis"]),
    ("Octavia", &["Pandero", "Tenora"]),
    ("Rhino", &["Ankyros", "Boltor"]),
    ("Saryn", &["Nikana", "Spira"]),
    ("Titania", &["Corinth", "Pangolin"]),
    ("Trinity", &["Kavasa", "Dual Kamas"]),
    ("Valkyr", &["Cernos", "Venka"]),
    ("Vauban", &["Akstiletto", "Fragor"]),
    ("Volt", &["Odonata"]),
    ("Wukong", &["Ninkondi", "Zhuge"]),
    ("Zephyr", &["Kronen", "Tiberon"]),
    ("Harrow", &["Knell", "Scourge"]),
    ("Garuda", &["Corvas", "Nagantaka"]),
    ("Khora", &["Hystrix", "Dual Keres"]),
    ("Revenant", &["Phantasma", "Tatsu"]),
    ("Baruuk", &["Afuris", "Cobra & Crane"]),
    ("Hildryn", &["Larkspur", "Shade"]),
    ("Wisp", &["Fulmin", "Gunsen"]),
    ("Grendel", &["Zylok", "Masseter"]),
    ("Gauss", &["Akarius", "Acceltra"]),
    ("Protea", &["Velox", "Okina"]),
];

const NOT_AVAILABLE: &str = "N/A";

/// One drop of a relic at one refinement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropReport {
    /// `null` when the tier code does not resolve
    pub chance: Option<DropChance>,
    pub tier: String,
    pub tier_id: u8,
    pub price: f64,
    pub ducats: u32,
}

/// Expected return per reported strategy
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StrategyReturns {
    pub solo: f64,
    #[serde(rename = "1b1")]
    pub one_by_one: f64,
    #[serde(rename = "2b2")]
    pub two_by_two: f64,
    #[serde(rename = "3b3")]
    pub three_by_three: f64,
    #[serde(rename = "4b4")]
    pub four_by_four: f64,
}

impl StrategyReturns {
    fn set(&mut self, strategy: BatchStrategy, value: f64) {
        match strategy {
            BatchStrategy::Solo => self.solo = value,
            BatchStrategy::OneByOne => self.one_by_one = value,
            BatchStrategy::TwoByTwo => self.two_by_two = value,
            BatchStrategy::ThreeByThree => self.three_by_three = value,
            BatchStrategy::FourByFour => self.four_by_four = value,
            BatchStrategy::EightByEight => {}
        }
    }
}

/// A relic at one refinement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelicReport {
    pub drops: BTreeMap<String, DropReport>,
    pub vaulted: bool,
    pub average_return: StrategyReturns,
}

/// Relic name → refinement → report
pub type RelicData = BTreeMap<String, BTreeMap<Refinement, RelicReport>>;

/// One part of a set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SetPartReport {
    pub plat: f64,
    pub ducats: u32,
    pub required: u32,
}

/// A prime set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetReport {
    pub parts: BTreeMap<String, SetPartReport>,
    pub vaulted: bool,
    #[serde(rename = "type")]
    pub set_type: String,
    pub plat: f64,
    #[serde(rename = "prime-access")]
    pub prime_access: String,
}

/// Set name (without " Set") → report
pub type SetData = BTreeMap<String, SetReport>;

/// Prime access warframe whose release included `set_name`
pub fn prime_access_for(set_name: &str) -> Option<&'static str> {
    let matches = |name: &str| {
        set_name == name
            || set_name
                .strip_prefix(name)
                .is_some_and(|rest| rest.starts_with(' '))
    };

    PRIME_ACCESS
        .iter()
        .find(|(frame, items)| matches(*frame) || items.iter().any(|&item| matches(item)))
        .map(|(frame, _)| *frame)
}

fn relic_report(
    index: &RelicIndex,
    relic: &str,
    refinement: Refinement,
) -> Result<RelicReport, EngineError> {
    let resolved = index.relic_drops(relic, refinement)?;
    let stored = index.relic(relic)?;

    let drops = resolved
        .into_iter()
        .map(|(part, chance)| {
            let lead = stored.get(&part).map_or(0, |code| code.lead_tier());
            let report = DropReport {
                chance,
                tier: rarity_by_tier(lead)
                    .map_or("Unknown", |tier| tier.name)
                    .to_string(),
                tier_id: lead.saturating_sub(1),
                price: index.price(&part),
                ducats: index.ducats(&part),
            };
            (part, report)
        })
        .collect();

    let priced = index.priced_drops(relic, refinement, None)?;
    let mut average_return = StrategyReturns::default();
    for strategy in BatchStrategy::REPORTED {
        average_return.set(strategy, expected_return(&priced, strategy));
    }

    Ok(RelicReport {
        drops,
        vaulted: index.is_vaulted(relic),
        average_return,
    })
}

/// Build reports for every relic at every refinement
pub fn build_relic_data(index: &RelicIndex) -> Result<RelicData, EngineError> {
    let mut data = RelicData::new();

    for relic in index.relics.keys() {
        let mut by_refinement = BTreeMap::new();
        for refinement in Refinement::ALL {
            by_refinement.insert(refinement, relic_report(index, relic, refinement)?);
        }
        data.insert(relic.clone(), by_refinement);
    }

    tracing::info!(relics = data.len(), "built relic reports");
    Ok(data)
}

/// Build reports for every set with a market price.
///
/// A set counts as vaulted when every relic dropping one of its parts is
/// vaulted (including when no relic drops it at all).
pub fn build_set_data(index: &RelicIndex) -> SetData {
    let mut data = SetData::new();

    for full_name in index.set_list() {
        let name = full_name.replace(" Set", "");
        let parts = index.set_parts(&name);

        let vaulted = index
            .relics
            .iter()
            .filter(|(_, drops)| parts.iter().any(|part| drops.contains_key(part)))
            .all(|(relic, _)| index.is_vaulted(relic));

        let set_type = index
            .set_type(&name)
            .or_else(|| index.set_type(full_name))
            .unwrap_or(NOT_AVAILABLE)
            .to_string();

        let part_reports = parts
            .into_iter()
            .map(|part| {
                let report = SetPartReport {
                    plat: index.price(&part),
                    ducats: index.ducats(&part),
                    required: index.required_count(&part),
                };
                (part, report)
            })
            .collect();

        data.insert(
            name.clone(),
            SetReport {
                parts: part_reports,
                vaulted,
                set_type,
                plat: index.price(full_name),
                prime_access: prime_access_for(&name).unwrap_or(NOT_AVAILABLE).to_string(),
            },
        );
    }

    tracing::info!(sets = data.len(), "built set reports");
    data
}
