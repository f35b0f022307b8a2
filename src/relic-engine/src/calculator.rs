//! Expected return of opening relics
//!
//! Solo style runs are a plain probability-weighted sum. Batched runs open
//! several relics together and every player takes the most valuable reward
//! on offer, so the value of a relic is the expected price of the best item
//! among `modifier` independent draws. That expectation is computed by
//! walking the drops from most to least valuable while depleting the
//! remaining probability mass.

use crate::chance::DropChance;
use crate::strategy::{BatchStrategy, Batching};

/// A drop with its resolved chance and the price used for valuation
#[derive(Debug, Clone, PartialEq)]
pub struct PricedDrop {
    pub name: String,
    pub chance: DropChance,
    pub price: f64,
}

impl PricedDrop {
    pub fn new(name: impl Into<String>, chance: DropChance, price: f64) -> Self {
        Self {
            name: name.into(),
            chance,
            price,
        }
    }
}

/// Expected return for `drops` under `strategy`, rounded to 3 decimals
pub fn expected_return(drops: &[PricedDrop], strategy: BatchStrategy) -> f64 {
    let value = match strategy.batching() {
        Batching::Flat(multiplier) => single_draw_return(drops) * multiplier,
        Batching::Depleting { modifier, runs } => depleting_return(drops, modifier, runs),
    };
    round_to_thousandths(value)
}

fn single_draw_return(drops: &[PricedDrop]) -> f64 {
    drops.iter().map(|drop| drop.price * drop.chance.total()).sum()
}

/// Order-dependent best-of-`modifier` expectation.
///
/// Drops are visited by price descending, equal prices by name ascending.
/// Once the remaining mass reaches zero, later slots contribute nothing.
fn depleting_return(drops: &[PricedDrop], modifier: i32, runs: f64) -> f64 {
    let mut ordered: Vec<&PricedDrop> = drops.iter().collect();
    ordered.sort_by(|a, b| {
        b.price
            .total_cmp(&a.price)
            .then_with(|| a.name.cmp(&b.name))
    });

    let mut chance_left = 1.0;
    let mut chance_used = 1.0;
    let mut total = 0.0;

    for drop in ordered {
        for &chance in drop.chance.as_slice() {
            if chance_left <= 0.0 {
                continue;
            }

            // Chance that none of the batched relics lands on this slot
            let miss = (1.0 - chance / chance_left).powi(modifier);
            let item_chance = chance_used * (1.0 - miss);
            total += drop.price * item_chance * runs;

            chance_left -= chance;
            chance_used *= miss;
        }
    }

    total
}

/// Round the exact binary value to 3 decimals, ties to even.
fn round_to_thousandths(value: f64) -> f64 {
    format!("{value:.3}").parse().unwrap_or(value)
}
