//! Tier module - competitive strength bands for teams

use std::cmp::Ordering;
use std::fmt;

/// Competitive tier of a team for a single season
///
/// Tiers are ordered by strength: `P5 > G5 > FCS`.
/// - P5: Power conferences plus designated independents
/// - G5: Remaining FBS conferences and FBS independents
/// - FCS: Championship subdivision, and any team we know nothing about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Power conference tier
    P5,

    /// Group of Five tier
    G5,

    /// Championship subdivision tier
    Fcs,
}

impl Tier {
    /// All tiers, strongest first
    pub const ALL: [Tier; 3] = [Tier::P5, Tier::G5, Tier::Fcs];

    /// Get the canonical tier label
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::P5 => "P5",
            Tier::G5 => "G5",
            Tier::Fcs => "FCS",
        }
    }

    /// Parse a tier label (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "P5" => Some(Tier::P5),
            "G5" => Some(Tier::G5),
            "FCS" => Some(Tier::Fcs),
            _ => None,
        }
    }

    /// Strength rank (P5=3, G5=2, FCS=1)
    pub fn rank(&self) -> u8 {
        match self {
            Tier::P5 => 3,
            Tier::G5 => 2,
            Tier::Fcs => 1,
        }
    }
}

impl PartialOrd for Tier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid tier: {}", s))
    }
}
