//! # relic-engine
//!
//! Relic drop tables, market prices, and expected-return calculations.
//!
//! This library provides functionality to:
//! - Resolve stored relic tier codes into drop chances per refinement
//! - Compute the expected return of opening relics solo or in batched runs
//! - Query prices, ducat values, and set membership from a relic index
//! - Build per-relic and per-set summary reports
//!
//! ## Example
//!
//! ```no_run
//! use relic_engine::{BatchStrategy, Refinement, RelicIndex};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let index = RelicIndex::load("index.json.gz")?;
//!
//! let value =
//!     index.average_return("Axi A1", Refinement::Radiant, BatchStrategy::FourByFour, None)?;
//! println!("Axi A1 radiant 4b4: {value}");
//!
//! println!("Ash Prime Chassis: {}", index.price("Ash Prime Chassis"));
//! # Ok(())
//! # }
//! ```

pub mod calculator;
pub mod chance;
pub mod error;
pub mod index;
pub mod query;
pub mod rarity;
pub mod refinement;
pub mod report;
pub mod strategy;

#[doc(inline)]
pub use calculator::{expected_return, PricedDrop};
#[doc(inline)]
pub use chance::{resolve_drop_chance, DropChance, TierCode};
#[doc(inline)]
pub use error::EngineError;
#[doc(inline)]
pub use index::{RelicDrops, RelicIndex};
#[doc(inline)]
pub use query::set_name;
#[doc(inline)]
pub use rarity::{base_chance, rarity_by_tier, RarityTier, RARITY_TIERS};
#[doc(inline)]
pub use refinement::Refinement;
#[doc(inline)]
pub use report::{
    build_relic_data, build_set_data, prime_access_for, DropReport, RelicData, RelicReport,
    SetData, SetPartReport, SetReport, StrategyReturns, PRIME_ACCESS,
};
#[doc(inline)]
pub use strategy::{parse_run_options, BatchStrategy, Batching, RunOptions};
