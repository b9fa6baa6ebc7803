//! Team module - identity, division membership, and per-season snapshots

use std::borrow::Borrow;
use std::fmt;

/// Opaque team identifier (e.g. `"alabama"`, `"notre-dame"`)
///
/// The classifier never inspects the contents beyond equality checks
/// against the alignment's override map.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TeamId(String);

impl TeamId {
    /// Create a new team identifier
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for TeamId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TeamId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TeamId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Top-level NCAA division a team competes in for a season
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DivisionLevel {
    /// Football Bowl Subdivision
    Fbs,

    /// Football Championship Subdivision
    Fcs,
}

impl DivisionLevel {
    /// Get the level name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            DivisionLevel::Fbs => "fbs",
            DivisionLevel::Fcs => "fcs",
        }
    }

    /// Parse a level from a string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "fbs" => Some(DivisionLevel::Fbs),
            "fcs" => Some(DivisionLevel::Fcs),
            _ => None,
        }
    }
}

impl fmt::Display for DivisionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DivisionLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid division level: {}", s))
    }
}

/// A team's membership record for one season
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Membership {
    /// Division the team played in that season
    pub level: DivisionLevel,
}

impl Membership {
    /// FBS membership
    pub fn fbs() -> Self {
        Self { level: DivisionLevel::Fbs }
    }

    /// FCS membership
    pub fn fcs() -> Self {
        Self { level: DivisionLevel::Fcs }
    }

    /// Whether this membership is FBS
    pub fn is_fbs(&self) -> bool {
        self.level == DivisionLevel::Fbs
    }

    /// Whether this membership is FCS
    pub fn is_fcs(&self) -> bool {
        self.level == DivisionLevel::Fcs
    }
}

impl From<DivisionLevel> for Membership {
    fn from(level: DivisionLevel) -> Self {
        Self { level }
    }
}

/// Everything the tier rules need to know about a team in one season
///
/// Snapshots are independent: a team's tier in one season is never
/// influenced by its snapshot in another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamSeason {
    /// Team identifier
    pub team_id: TeamId,

    /// Season year (e.g. 2024)
    pub season: u16,

    /// Division membership, if known
    pub membership: Option<Membership>,

    /// Conference name, absent for independents
    pub conference: Option<String>,
}

impl TeamSeason {
    /// Create a snapshot with no membership and no conference
    pub fn new(team_id: impl Into<TeamId>, season: u16) -> Self {
        Self {
            team_id: team_id.into(),
            season,
            membership: None,
            conference: None,
        }
    }

    /// Set the membership level
    pub fn with_membership(mut self, membership: Membership) -> Self {
        self.membership = Some(membership);
        self
    }

    /// Set the conference name
    pub fn with_conference(mut self, conference: impl Into<String>) -> Self {
        self.conference = Some(conference.into());
        self
    }
}
