//! Run strategies and run option parsing
//!
//! A run strategy describes how many relics are opened together. When
//! several players crack relics in the same mission each picks the best
//! reward on offer, which changes the value of a single relic.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;
use crate::refinement::Refinement;

/// How relics are run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BatchStrategy {
    /// One relic, one reward
    Solo,
    /// Four relics opened back to back with no interaction
    OneByOne,
    TwoByTwo,
    ThreeByThree,
    FourByFour,
    EightByEight,
}

/// Parameters of the expected-return calculation for a strategy
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Batching {
    /// Plain probability-weighted sum, scaled by a multiplier
    Flat(f64),
    /// Best-of-`modifier` depletion walk, scaled by `runs`
    Depleting { modifier: i32, runs: f64 },
}

impl BatchStrategy {
    /// Strategies included in generated reports
    pub const REPORTED: [BatchStrategy; 5] = [
        BatchStrategy::Solo,
        BatchStrategy::OneByOne,
        BatchStrategy::TwoByTwo,
        BatchStrategy::ThreeByThree,
        BatchStrategy::FourByFour,
    ];

    pub fn batching(self) -> Batching {
        match self {
            BatchStrategy::Solo => Batching::Flat(1.0),
            BatchStrategy::OneByOne => Batching::Flat(4.0),
            BatchStrategy::TwoByTwo => Batching::Depleting {
                modifier: 2,
                runs: 2.0,
            },
            BatchStrategy::ThreeByThree => Batching::Depleting {
                modifier: 3,
                runs: 4.0 / 3.0,
            },
            BatchStrategy::FourByFour => Batching::Depleting {
                modifier: 4,
                runs: 1.0,
            },
            BatchStrategy::EightByEight => Batching::Depleting {
                modifier: 8,
                runs: 1.0,
            },
        }
    }

    /// Look up a strategy by its short code (`s`, `1`, `2`, `3`, `4`, `8`)
    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_lowercase() {
            's' => Some(BatchStrategy::Solo),
            '1' => Some(BatchStrategy::OneByOne),
            '2' => Some(BatchStrategy::TwoByTwo),
            '3' => Some(BatchStrategy::ThreeByThree),
            '4' => Some(BatchStrategy::FourByFour),
            '8' => Some(BatchStrategy::EightByEight),
            _ => None,
        }
    }

    /// Report key (`solo`, `1b1`, `2b2`, ...)
    pub fn key(self) -> &'static str {
        match self {
            BatchStrategy::Solo => "solo",
            BatchStrategy::OneByOne => "1b1",
            BatchStrategy::TwoByTwo => "2b2",
            BatchStrategy::ThreeByThree => "3b3",
            BatchStrategy::FourByFour => "4b4",
            BatchStrategy::EightByEight => "8b8",
        }
    }
}

impl fmt::Display for BatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for BatchStrategy {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .chars()
            .next()
            .and_then(Self::from_code)
            .ok_or_else(|| EngineError::UnknownStrategy(s.to_string()))
    }
}

/// Refinement and strategy for one expected-return query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    pub refinement: Refinement,
    pub strategy: BatchStrategy,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            refinement: Refinement::Radiant,
            strategy: BatchStrategy::FourByFour,
        }
    }
}

/// Read refinement and strategy from loosely formatted arguments.
///
/// Each argument may name a strategy, a refinement, or both (`"4b4"`,
/// `"rad"`, `"2r"`). A refinement letter at the end of an argument sets the
/// refinement; the first character then selects a strategy or, failing
/// that, a refinement. Later arguments win. Unrecognised text is ignored.
pub fn parse_run_options<'a, I>(args: I) -> RunOptions
where
    I: IntoIterator<Item = &'a str>,
{
    let mut options = RunOptions::default();

    for arg in args {
        let arg = arg.trim().to_lowercase();

        if let Some(refinement) = arg.chars().last().and_then(Refinement::from_letter) {
            options.refinement = refinement;
        }

        let Some(first) = arg.chars().next() else {
            continue;
        };

        if let Some(strategy) = BatchStrategy::from_code(first) {
            options.strategy = strategy;
        } else if let Some(refinement) = Refinement::from_letter(first) {
            options.refinement = refinement;
        }
    }

    options
}
