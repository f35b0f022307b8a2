//! Relic refinement levels

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

/// Refinement level of a relic.
///
/// Higher refinements shift probability mass from common slots toward the
/// uncommon and rare slots. Variants are ordered from least to most refined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Refinement {
    Intact,
    Exceptional,
    Flawless,
    Radiant,
}

impl Refinement {
    /// All refinements in order
    pub const ALL: [Refinement; 4] = [
        Refinement::Intact,
        Refinement::Exceptional,
        Refinement::Flawless,
        Refinement::Radiant,
    ];

    /// Look up a refinement by its abbreviation letter (`i`, `e`, `f`, `r`)
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'i' => Some(Refinement::Intact),
            'e' => Some(Refinement::Exceptional),
            'f' => Some(Refinement::Flawless),
            'r' => Some(Refinement::Radiant),
            _ => None,
        }
    }

    /// Parse a refinement from any text starting with its letter
    /// ("r", "Rad", "radiant" all give [`Refinement::Radiant`]).
    pub fn parse(text: &str) -> Option<Self> {
        text.trim().chars().next().and_then(Self::from_letter)
    }

    pub fn letter(self) -> char {
        match self {
            Refinement::Intact => 'i',
            Refinement::Exceptional => 'e',
            Refinement::Flawless => 'f',
            Refinement::Radiant => 'r',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Refinement::Intact => "Intact",
            Refinement::Exceptional => "Exceptional",
            Refinement::Flawless => "Flawless",
            Refinement::Radiant => "Radiant",
        }
    }
}

impl fmt::Display for Refinement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Refinement {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| EngineError::UnknownRefinement(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_by_first_letter() {
        assert_eq!(Refinement::parse("i"), Some(Refinement::Intact));
        assert_eq!(Refinement::parse("Exceptional"), Some(Refinement::Exceptional));
        assert_eq!(Refinement::parse("FLAW"), Some(Refinement::Flawless));
        assert_eq!(Refinement::parse(" radiant"), Some(Refinement::Radiant));
        assert_eq!(Refinement::parse("x"), None);
        assert_eq!(Refinement::parse(""), None);
    }

    #[test]
    fn test_letter_roundtrip() {
        for refinement in Refinement::ALL {
            assert_eq!(Refinement::from_letter(refinement.letter()), Some(refinement));
        }
    }

    #[test]
    fn test_from_str_error() {
        let err = "gold".parse::<Refinement>().unwrap_err();
        assert!(matches!(err, EngineError::UnknownRefinement(ref s) if s == "gold"));
    }
}
