//! Conference alignment - the conference-to-tier table for a range of seasons
//!
//! Conference membership changes with realignment, so the table is a value
//! handed to the classifier rather than a set of compiled-in constants.
//! [`ConferenceAlignment::standard`] provides the classic Power Five / Group
//! of Five split.

use std::collections::{BTreeMap, BTreeSet};

use crate::{TeamId, Tier};

/// Identifier of the independent that is treated as a power program
pub const NOTRE_DAME: &str = "notre-dame";

/// Canonical Power Five conference names (and common aliases)
pub const STANDARD_P5_CONFERENCES: [&str; 7] =
    ["ACC", "Big Ten", "B1G", "Big 12", "SEC", "Pac-12", "Pac-10"];

/// Canonical Group of Five conference names (and common aliases)
pub const STANDARD_G5_CONFERENCES: [&str; 9] = [
    "American Athletic",
    "AAC",
    "Mountain West",
    "MWC",
    "Sun Belt",
    "Mid-American",
    "MAC",
    "Conference USA",
    "C-USA",
];

/// Conference-to-tier lookup plus per-team overrides
///
/// Conference names match exactly (case-sensitive, no alias folding).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConferenceAlignment {
    p5: BTreeSet<String>,
    g5: BTreeSet<String>,
    overrides: BTreeMap<TeamId, Tier>,
}

impl ConferenceAlignment {
    /// Create an empty alignment (every conference unrecognized, no overrides)
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard P5/G5 split with Notre Dame forced to P5
    pub fn standard() -> Self {
        Self::new()
            .with_p5_conferences(STANDARD_P5_CONFERENCES)
            .with_g5_conferences(STANDARD_G5_CONFERENCES)
            .with_override(NOTRE_DAME, Tier::P5)
    }

    /// Add conferences to the P5 set
    pub fn with_p5_conferences<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.p5.extend(names.into_iter().map(Into::into));
        self
    }

    /// Add conferences to the G5 set
    pub fn with_g5_conferences<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.g5.extend(names.into_iter().map(Into::into));
        self
    }

    /// Force a team to a tier regardless of its conference
    pub fn with_override(mut self, team_id: impl Into<TeamId>, tier: Tier) -> Self {
        self.overrides.insert(team_id.into(), tier);
        self
    }

    /// Whether the conference is in the P5 set
    pub fn is_p5_conference(&self, conference: &str) -> bool {
        self.p5.contains(conference)
    }

    /// Whether the conference is in the G5 set
    pub fn is_g5_conference(&self, conference: &str) -> bool {
        self.g5.contains(conference)
    }

    /// Forced tier for a team, if one is configured
    pub fn override_for(&self, team_id: &str) -> Option<Tier> {
        self.overrides.get(team_id).copied()
    }

    /// P5 conference names, sorted
    pub fn p5_conferences(&self) -> impl Iterator<Item = &str> {
        self.p5.iter().map(String::as_str)
    }

    /// G5 conference names, sorted
    pub fn g5_conferences(&self) -> impl Iterator<Item = &str> {
        self.g5.iter().map(String::as_str)
    }

    /// Overrides, sorted by team
    pub fn overrides(&self) -> impl Iterator<Item = (&TeamId, Tier)> {
        self.overrides.iter().map(|(team, tier)| (team, *tier))
    }

    /// Conferences listed in both the P5 and G5 sets
    ///
    /// The classifier checks P5 first, so an overlap silently resolves to P5.
    /// Loaders use this to reject ambiguous tables.
    pub fn overlapping_conferences(&self) -> Vec<&str> {
        self.p5.intersection(&self.g5).map(String::as_str).collect()
    }
}
