//! Tier codes and drop chance resolution
//!
//! A relic's drop table stores one [`TierCode`] per item. Most codes are a
//! single tier digit, but an item that fills two slots of the same relic is
//! stored as a compound code (`21` = one uncommon slot plus one common slot).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::rarity::base_chance;
use crate::refinement::Refinement;

/// Stored rarity code for one item of a relic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TierCode(pub u32);

impl TierCode {
    /// Decimal digits of the code, most significant first
    pub fn digits(self) -> Vec<u8> {
        let mut digits = Vec::new();
        let mut n = self.0;
        loop {
            digits.push((n % 10) as u8);
            n /= 10;
            if n == 0 {
                break;
            }
        }
        digits.reverse();
        digits
    }

    /// Tier of the leading digit (the best slot the item occupies)
    pub fn lead_tier(self) -> u8 {
        self.digits()[0]
    }

    /// Combine two codes for the same item into one compound code.
    ///
    /// Digits are kept largest first, so `tied(1, 2)` is `21`.
    pub fn tied(self, other: TierCode) -> TierCode {
        let mut digits = self.digits();
        digits.extend(other.digits());
        digits.sort_unstable_by(|a, b| b.cmp(a));
        TierCode(digits.iter().fold(0, |acc, &d| acc * 10 + u32::from(d)))
    }
}

impl From<u32> for TierCode {
    fn from(code: u32) -> Self {
        TierCode(code)
    }
}

impl fmt::Display for TierCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Resolved chance of an item dropping from one relic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DropChance {
    /// Item occupies a single slot
    Single(f64),
    /// Item occupies several slots; one chance per slot in code order
    Tied(Vec<f64>),
}

impl DropChance {
    /// Per-slot chances in order
    pub fn as_slice(&self) -> &[f64] {
        match self {
            DropChance::Single(chance) => std::slice::from_ref(chance),
            DropChance::Tied(chances) => chances,
        }
    }

    /// Combined chance across all slots
    pub fn total(&self) -> f64 {
        self.as_slice().iter().sum()
    }
}

/// Resolve a stored tier code into drop chances at `refinement`.
///
/// Returns `None` when the code (or any digit of a compound code) is not a
/// tier known for the refinement. Compound codes never resolve partially.
pub fn resolve_drop_chance(refinement: Refinement, code: TierCode) -> Option<DropChance> {
    if let Some(chance) = u8::try_from(code.0)
        .ok()
        .and_then(|tier| base_chance(refinement, tier))
    {
        return Some(DropChance::Single(chance));
    }

    code.digits()
        .into_iter()
        .map(|digit| base_chance(refinement, digit))
        .collect::<Option<Vec<f64>>>()
        .map(DropChance::Tied)
}
