//! Matchup classification - canonical label for a pair of tiers

use std::fmt;

use crate::Tier;

/// Canonical matchup class, named stronger tier first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MatchupClass {
    /// Power vs power
    P5P5,

    /// Power vs Group of Five
    P5G5,

    /// Power vs FCS
    P5Fcs,

    /// Group of Five vs Group of Five
    G5G5,

    /// Group of Five vs FCS
    G5Fcs,
}

impl MatchupClass {
    /// All classes, strongest pairing first
    pub const ALL: [MatchupClass; 5] = [
        MatchupClass::P5P5,
        MatchupClass::P5G5,
        MatchupClass::P5Fcs,
        MatchupClass::G5G5,
        MatchupClass::G5Fcs,
    ];

    /// Get the class label (`"P5_G5"` etc.)
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchupClass::P5P5 => "P5_P5",
            MatchupClass::P5G5 => "P5_G5",
            MatchupClass::P5Fcs => "P5_FCS",
            MatchupClass::G5G5 => "G5_G5",
            MatchupClass::G5Fcs => "G5_FCS",
        }
    }

    /// Parse a class label (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "P5_P5" => Some(MatchupClass::P5P5),
            "P5_G5" => Some(MatchupClass::P5G5),
            "P5_FCS" => Some(MatchupClass::P5Fcs),
            "G5_G5" => Some(MatchupClass::G5G5),
            "G5_FCS" => Some(MatchupClass::G5Fcs),
            _ => None,
        }
    }

    /// The (higher, lower) tiers this class describes
    pub fn tiers(&self) -> (Tier, Tier) {
        match self {
            MatchupClass::P5P5 => (Tier::P5, Tier::P5),
            MatchupClass::P5G5 => (Tier::P5, Tier::G5),
            MatchupClass::P5Fcs => (Tier::P5, Tier::Fcs),
            MatchupClass::G5G5 => (Tier::G5, Tier::G5),
            MatchupClass::G5Fcs => (Tier::G5, Tier::Fcs),
        }
    }
}

impl fmt::Display for MatchupClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MatchupClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid matchup class: {}", s))
    }
}

/// A pair of tiers with no matchup class
///
/// Only FCS vs FCS falls here. Such games sit outside the FBS markets
/// the classes describe, so callers decide whether to skip or fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnsupportedPairing {
    /// Stronger (or home, on a tie) tier
    pub higher: Tier,

    /// Weaker (or away, on a tie) tier
    pub lower: Tier,
}

impl fmt::Display for UnsupportedPairing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no matchup class for {} vs {}", self.higher, self.lower)
    }
}

impl std::error::Error for UnsupportedPairing {}

/// Order two tiers strongest first; equal tiers keep their input order
pub fn ordered_pair(home: Tier, away: Tier) -> (Tier, Tier) {
    if away.rank() > home.rank() {
        (away, home)
    } else {
        (home, away)
    }
}

/// Classify a pairing of tiers, independent of which side is home
///
/// # Examples
///
/// ```
/// use gridiron_domain::{get_matchup_class, MatchupClass, Tier};
///
/// assert_eq!(get_matchup_class(Tier::G5, Tier::P5), Ok(MatchupClass::P5G5));
/// assert!(get_matchup_class(Tier::Fcs, Tier::Fcs).is_err());
/// ```
pub fn get_matchup_class(home: Tier, away: Tier) -> Result<MatchupClass, UnsupportedPairing> {
    let (higher, lower) = ordered_pair(home, away);

    match (higher, lower) {
        (Tier::P5, Tier::P5) => Ok(MatchupClass::P5P5),
        (Tier::P5, Tier::G5) => Ok(MatchupClass::P5G5),
        (Tier::P5, Tier::Fcs) => Ok(MatchupClass::P5Fcs),
        (Tier::G5, Tier::G5) => Ok(MatchupClass::G5G5),
        (Tier::G5, Tier::Fcs) => Ok(MatchupClass::G5Fcs),
        _ => Err(UnsupportedPairing { higher, lower }),
    }
}
