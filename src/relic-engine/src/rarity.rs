//! Rarity tiers and base drop chances per refinement

use crate::refinement::Refinement;

/// Rarity tier information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RarityTier {
    pub tier: u8,
    pub name: &'static str,
}

/// All rarity tiers in order
pub const RARITY_TIERS: &[RarityTier] = &[
    RarityTier {
        tier: 1,
        name: "Common",
    },
    RarityTier {
        tier: 2,
        name: "Uncommon",
    },
    RarityTier {
        tier: 3,
        name: "Rare",
    },
];

// Per-slot chances, indexed by tier - 1. Each relic has three common,
// two uncommon and one rare slot, so every row sums to 1.
const INTACT: [f64; 3] = [(25.0 + 1.0 / 3.0) / 100.0, 0.11, 0.02];
const EXCEPTIONAL: [f64; 3] = [(23.0 + 1.0 / 3.0) / 100.0, 0.13, 0.04];
const FLAWLESS: [f64; 3] = [0.20, 0.17, 0.06];
const RADIANT: [f64; 3] = [1.0 / 6.0, 0.20, 0.10];

/// Get rarity tier by tier number
pub fn rarity_by_tier(tier: u8) -> Option<&'static RarityTier> {
    RARITY_TIERS.iter().find(|r| r.tier == tier)
}

/// Base chance of a single drop slot of `tier` at `refinement`.
///
/// Returns `None` when the tier has no entry in the table.
pub fn base_chance(refinement: Refinement, tier: u8) -> Option<f64> {
    let table = match refinement {
        Refinement::Intact => &INTACT,
        Refinement::Exceptional => &EXCEPTIONAL,
        Refinement::Flawless => &FLAWLESS,
        Refinement::Radiant => &RADIANT,
    };

    match tier {
        1..=3 => Some(table[usize::from(tier - 1)]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rarity_lookup() {
        assert_eq!(rarity_by_tier(1).map(|r| r.name), Some("Common"));
        assert_eq!(rarity_by_tier(3).map(|r| r.name), Some("Rare"));
        assert!(rarity_by_tier(4).is_none());
    }

    #[test]
    fn test_base_chances_in_open_unit_interval() {
        for refinement in Refinement::ALL {
            for tier in 1..=3 {
                let chance = base_chance(refinement, tier).unwrap();
                assert!(chance > 0.0 && chance < 1.0, "{refinement} tier {tier}: {chance}");
            }
        }
    }

    #[test]
    fn test_known_values() {
        assert!((base_chance(Refinement::Intact, 1).unwrap() - 0.253_333).abs() < 1e-6);
        assert!((base_chance(Refinement::Exceptional, 2).unwrap() - 0.13).abs() < f64::EPSILON);
        assert!((base_chance(Refinement::Flawless, 3).unwrap() - 0.06).abs() < f64::EPSILON);
        assert!((base_chance(Refinement::Radiant, 1).unwrap() - 1.0 / 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_slots_sum_to_one() {
        for refinement in Refinement::ALL {
            let total = 3.0 * base_chance(refinement, 1).unwrap()
                + 2.0 * base_chance(refinement, 2).unwrap()
                + base_chance(refinement, 3).unwrap();
            assert!((total - 1.0).abs() < 1e-9, "{refinement}: {total}");
        }
    }

    #[test]
    fn test_unknown_tier() {
        assert_eq!(base_chance(Refinement::Radiant, 0), None);
        assert_eq!(base_chance(Refinement::Intact, 4), None);
        assert_eq!(base_chance(Refinement::Intact, 21), None);
    }
}
