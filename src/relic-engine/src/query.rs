//! Look-ups over a [`RelicIndex`]
//!
//! Missing prices and ducat values are 0 and missing required counts are 1;
//! none of these are errors.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::calculator::{expected_return, PricedDrop};
use crate::chance::{resolve_drop_chance, DropChance};
use crate::error::EngineError;
use crate::index::{RelicDrops, RelicIndex};
use crate::refinement::Refinement;
use crate::strategy::{BatchStrategy, RunOptions};

/// Set name for a prime part ("Ash Prime Chassis" → "Ash Prime").
///
/// Kavasa parts belong to the "Kavasa Prime Kubrow Collar" set.
pub fn set_name(prime_part: &str) -> String {
    let base = prime_part.split(" Prime").next().unwrap_or(prime_part);
    let mut name = format!("{base} Prime");
    if name.contains("Kavasa") {
        name.push_str(" Kubrow Collar");
    }
    name
}

impl RelicIndex {
    /// Market price of an item, 0 when unknown
    pub fn price(&self, item: &str) -> f64 {
        self.prices.get(item).copied().unwrap_or(0.0)
    }

    /// Ducat value of an item, 0 when unknown
    pub fn ducats(&self, item: &str) -> u32 {
        self.ducats.get(item).copied().unwrap_or(0)
    }

    /// Number of copies of a part needed for its set, 1 when unknown
    pub fn required_count(&self, item: &str) -> u32 {
        self.required_count.get(item).copied().unwrap_or(1)
    }

    /// Item type of a set, if known
    pub fn set_type(&self, item: &str) -> Option<&str> {
        self.types.get(item).map(String::as_str)
    }

    /// All relic names, sorted
    pub fn relic_list(&self) -> Vec<&str> {
        self.relics.keys().map(String::as_str).collect()
    }

    /// Stored drop table of a relic
    pub fn relic(&self, relic: &str) -> Result<&RelicDrops, EngineError> {
        self.relics
            .get(relic)
            .ok_or_else(|| EngineError::UnknownRelic(relic.to_string()))
    }

    pub fn non_vaulted_relics(&self) -> &[String] {
        &self.non_vaulted
    }

    pub fn is_vaulted(&self, relic: &str) -> bool {
        !self.non_vaulted.iter().any(|r| r == relic)
    }

    /// Relics no longer in the drop tables, sorted
    pub fn vaulted_relics(&self) -> Vec<&str> {
        let active: HashSet<&str> = self.non_vaulted.iter().map(String::as_str).collect();
        self.relics
            .keys()
            .map(String::as_str)
            .filter(|relic| !active.contains(relic))
            .collect()
    }

    /// Price keys that name a full set, sorted
    pub fn set_list(&self) -> Vec<&str> {
        let mut sets: Vec<&str> = self
            .prices
            .keys()
            .map(String::as_str)
            .filter(|name| name.contains("Set"))
            .collect();
        sets.sort_unstable();
        sets
    }

    /// Ducat values of every part whose name contains `set_name`
    pub fn set_ducats(&self, set_name: &str) -> BTreeMap<String, u32> {
        self.ducats
            .iter()
            .filter(|(part, _)| part.contains(set_name))
            .map(|(part, &ducats)| (part.clone(), ducats))
            .collect()
    }

    /// Parts of a set, sorted
    pub fn set_parts(&self, set_name: &str) -> Vec<String> {
        self.set_ducats(set_name).into_keys().collect()
    }

    /// Required count of every part of a set
    pub fn set_required(&self, set_name: &str) -> BTreeMap<String, u32> {
        self.set_parts(set_name)
            .into_iter()
            .map(|part| {
                let count = self.required_count(&part);
                (part, count)
            })
            .collect()
    }

    /// Resolved drop chances of a relic at `refinement`.
    ///
    /// Drops whose tier code does not resolve map to `None`.
    pub fn relic_drops(
        &self,
        relic: &str,
        refinement: Refinement,
    ) -> Result<BTreeMap<String, Option<DropChance>>, EngineError> {
        Ok(self
            .relic(relic)?
            .iter()
            .map(|(item, &code)| (item.clone(), resolve_drop_chance(refinement, code)))
            .collect())
    }

    /// Drops of a relic with chances and prices, ready for the calculator.
    ///
    /// Prices come from `custom_prices` when it has the item, otherwise from
    /// the index. Unresolvable drops are left out.
    pub fn priced_drops(
        &self,
        relic: &str,
        refinement: Refinement,
        custom_prices: Option<&HashMap<String, f64>>,
    ) -> Result<Vec<PricedDrop>, EngineError> {
        let mut drops = Vec::new();

        for (item, &code) in self.relic(relic)? {
            let Some(chance) = resolve_drop_chance(refinement, code) else {
                tracing::debug!(
                    relic,
                    item = %item,
                    code = %code,
                    %refinement,
                    "skipping unresolvable drop"
                );
                continue;
            };

            let price = custom_prices
                .and_then(|prices| prices.get(item))
                .copied()
                .unwrap_or_else(|| self.price(item));

            drops.push(PricedDrop::new(item.clone(), chance, price));
        }

        Ok(drops)
    }

    /// Expected return of opening `relic`, rounded to 3 decimals
    pub fn average_return(
        &self,
        relic: &str,
        refinement: Refinement,
        strategy: BatchStrategy,
        custom_prices: Option<&HashMap<String, f64>>,
    ) -> Result<f64, EngineError> {
        let drops = self.priced_drops(relic, refinement, custom_prices)?;
        Ok(expected_return(&drops, strategy))
    }

    /// [`RelicIndex::average_return`] with options from `parse_run_options`
    pub fn average_return_with(
        &self,
        relic: &str,
        options: RunOptions,
        custom_prices: Option<&HashMap<String, f64>>,
    ) -> Result<f64, EngineError> {
        self.average_return(relic, options.refinement, options.strategy, custom_prices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chance::TierCode;
    use crate::strategy::parse_run_options;

    fn test_index() -> RelicIndex {
        let mut index = RelicIndex::default();

        let mut lith = RelicDrops::new();
        lith.insert("Forma Blueprint".into(), TierCode(1));
        lith.insert("Ash Prime Chassis".into(), TierCode(2));
        lith.insert("Ash Prime Systems".into(), TierCode(3));
        index.relics.insert("Lith A1".into(), lith);

        let mut meso = RelicDrops::new();
        meso.insert("Bo Prime Handle".into(), TierCode(21));
        meso.insert("Broken Part".into(), TierCode(7));
        index.relics.insert("Meso B2".into(), meso);

        index.prices.insert("Ash Prime Chassis".into(), 10.0);
        index.prices.insert("Ash Prime Systems".into(), 50.0);
        index.prices.insert("Bo Prime Handle".into(), 4.0);
        index.prices.insert("Ash Prime Set".into(), 90.0);
        index.prices.insert("Bo Prime Set".into(), 20.0);

        index.ducats.insert("Ash Prime Chassis".into(), 45);
        index.ducats.insert("Ash Prime Systems".into(), 100);
        index.ducats.insert("Bo Prime Handle".into(), 15);

        index.required_count.insert("Bo Prime Handle".into(), 2);
        index.non_vaulted.push("Lith A1".into());
        index.types.insert("Ash Prime".into(), "Warframes".into());
        index
    }

    #[test]
    fn test_defaults_for_unknown_items() {
        let index = test_index();
        assert_eq!(index.price("UnknownItem"), 0.0);
        assert_eq!(index.ducats("UnknownItem"), 0);
        assert_eq!(index.required_count("UnknownItem"), 1);
        assert_eq!(index.set_type("UnknownItem"), None);
    }

    #[test]
    fn test_known_values() {
        let index = test_index();
        assert_eq!(index.price("Ash Prime Systems"), 50.0);
        assert_eq!(index.ducats("Ash Prime Chassis"), 45);
        assert_eq!(index.required_count("Bo Prime Handle"), 2);
        assert_eq!(index.set_type("Ash Prime"), Some("Warframes"));
    }

    #[test]
    fn test_set_name() {
        assert_eq!(set_name("Ash Prime Chassis"), "Ash Prime");
        assert_eq!(set_name("Nami Skyla Prime Blade"), "Nami Skyla Prime");
        assert_eq!(set_name("Kavasa Prime Band"), "Kavasa Prime Kubrow Collar");
    }

    #[test]
    fn test_set_queries() {
        let index = test_index();
        assert_eq!(index.set_list(), vec!["Ash Prime Set", "Bo Prime Set"]);
        assert_eq!(
            index.set_parts("Ash Prime"),
            vec!["Ash Prime Chassis".to_string(), "Ash Prime Systems".to_string()]
        );
        assert_eq!(index.set_ducats("Bo Prime")["Bo Prime Handle"], 15);

        let required = index.set_required("Ash Prime");
        assert_eq!(required.len(), 2);
        assert!(required.values().all(|&count| count == 1));
        assert_eq!(index.set_required("Bo Prime")["Bo Prime Handle"], 2);
    }

    #[test]
    fn test_vaulted_relics() {
        let index = test_index();
        assert_eq!(index.relic_list(), vec!["Lith A1", "Meso B2"]);
        assert_eq!(index.vaulted_relics(), vec!["Meso B2"]);
        assert!(index.is_vaulted("Meso B2"));
        assert!(!index.is_vaulted("Lith A1"));
    }

    #[test]
    fn test_relic_drops_marks_unresolvable() {
        let index = test_index();
        let drops = index.relic_drops("Meso B2", Refinement::Radiant).unwrap();
        assert_eq!(drops["Broken Part"], None);
        assert_eq!(
            drops["Bo Prime Handle"],
            Some(DropChance::Tied(vec![0.2, 1.0 / 6.0]))
        );
    }

    #[test]
    fn test_priced_drops_skip_unresolvable() {
        let index = test_index();
        let drops = index.priced_drops("Meso B2", Refinement::Intact, None).unwrap();
        assert_eq!(drops.len(), 1);
        assert_eq!(drops[0].name, "Bo Prime Handle");
        assert_eq!(drops[0].price, 4.0);
    }

    #[test]
    fn test_unknown_relic() {
        let index = test_index();
        let err = index
            .average_return("Axi Z9", Refinement::Intact, BatchStrategy::Solo, None)
            .unwrap_err();
        assert!(matches!(err, EngineError::UnknownRelic(ref r) if r == "Axi Z9"));
    }

    #[test]
    fn test_average_return_solo() {
        let index = test_index();
        // 10 * 0.11 + 50 * 0.02 (Forma has no price)
        let value = index
            .average_return("Lith A1", Refinement::Intact, BatchStrategy::Solo, None)
            .unwrap();
        assert!((value - 2.1).abs() < 1e-9);
    }

    #[test]
    fn test_unresolvable_drop_does_not_block_relic() {
        let index = test_index();
        // Only the tied Bo handle counts: 4 * (0.2 + 1/6)
        let value = index
            .average_return("Meso B2", Refinement::Radiant, BatchStrategy::Solo, None)
            .unwrap();
        assert!((value - 1.467).abs() < 1e-9);
    }

    #[test]
    fn test_custom_prices_override_index() {
        let index = test_index();
        let mut custom = HashMap::new();
        custom.insert("Ash Prime Chassis".to_string(), 0.0);

        // Chassis overridden to 0, Systems falls back to the index price
        let value = index
            .average_return("Lith A1", Refinement::Intact, BatchStrategy::Solo, Some(&custom))
            .unwrap();
        assert!((value - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_partial_custom_prices_in_batched_run() {
        let index = test_index();
        let custom = HashMap::from([("Ash Prime Systems".to_string(), 80.0)]);

        let drops = index
            .priced_drops("Lith A1", Refinement::Intact, Some(&custom))
            .unwrap();
        let chassis = drops.iter().find(|d| d.name == "Ash Prime Chassis").unwrap();
        assert_eq!(chassis.price, 10.0);

        // Systems at 80 from the custom map, Chassis keeps its index price of 10.
        // Pricing the Chassis at 0 instead would give 6.211.
        let value = index
            .average_return("Lith A1", Refinement::Intact, BatchStrategy::FourByFour, Some(&custom))
            .unwrap();
        assert!((value - 9.705).abs() < 1e-9, "got {value}");
    }

    #[test]
    fn test_average_return_with_parsed_options() {
        let index = test_index();
        let options = parse_run_options(["intact", "solo"]);
        let value = index.average_return_with("Lith A1", options, None).unwrap();
        assert!((value - 2.1).abs() < 1e-9);
    }
}
