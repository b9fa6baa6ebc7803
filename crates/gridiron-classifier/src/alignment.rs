//! Season-versioned conference alignments
//!
//! Each entry applies from its `effective_from` season until the next entry
//! takes over. Tables are loaded from TOML:
//!
//! ```toml
//! [[alignment]]
//! effective_from = 2024
//! p5 = ["ACC", "Big Ten", "Big 12", "SEC"]
//! g5 = ["American Athletic", "Mountain West", "Sun Belt", "Mid-American", "Conference USA", "Pac-12"]
//!
//! [alignment.overrides]
//! notre-dame = "P5"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use gridiron_domain::{ConferenceAlignment, Tier};
use serde::Deserialize;

use crate::error::{ClassifierError, Result};

/// Ordered set of conference alignments keyed by first season in force
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentBook {
    entries: BTreeMap<u16, ConferenceAlignment>,
}

impl AlignmentBook {
    /// Build a book from `(effective_from, alignment)` pairs
    ///
    /// # Errors
    /// Returns a config error if the book is empty, a season appears twice,
    /// or an alignment lists a conference in both tiers
    pub fn new<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u16, ConferenceAlignment)>,
    {
        let mut map = BTreeMap::new();
        for (effective_from, alignment) in entries {
            let overlap = alignment.overlapping_conferences();
            if !overlap.is_empty() {
                return Err(ClassifierError::Config(format!(
                    "Alignment effective from {} lists {} as both P5 and G5",
                    effective_from,
                    overlap.join(", ")
                )));
            }
            if map.insert(effective_from, alignment).is_some() {
                return Err(ClassifierError::Config(format!(
                    "Duplicate alignment for season {}",
                    effective_from
                )));
            }
        }

        if map.is_empty() {
            return Err(ClassifierError::Config(
                "Alignment book must contain at least one entry".to_string(),
            ));
        }

        Ok(Self { entries: map })
    }

    /// The standard P5/G5 table applied to every season
    pub fn standard() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(0, ConferenceAlignment::standard());
        Self { entries }
    }

    /// Parse a book from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: AlignmentFile = toml::from_str(contents)?;
        let entries = file
            .alignment
            .into_iter()
            .map(AlignmentEntry::into_alignment)
            .collect::<Result<Vec<_>>>()?;
        Self::new(entries)
    }

    /// Load a book from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }

    /// Entry in force for a season, with its effective-from season
    ///
    /// Returns `None` when the season predates every entry.
    pub fn covering(&self, season: u16) -> Option<(u16, &ConferenceAlignment)> {
        self.entries
            .range(..=season)
            .next_back()
            .map(|(from, alignment)| (*from, alignment))
    }

    /// Earliest entry in the book
    pub fn earliest(&self) -> Option<(u16, &ConferenceAlignment)> {
        self.entries
            .iter()
            .next()
            .map(|(from, alignment)| (*from, alignment))
    }

    /// Seasons at which a new alignment takes effect
    pub fn effective_seasons(&self) -> impl Iterator<Item = u16> + '_ {
        self.entries.keys().copied()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the book has no entries (never true for a constructed book)
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for AlignmentBook {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, Deserialize)]
struct AlignmentFile {
    #[serde(default)]
    alignment: Vec<AlignmentEntry>,
}

#[derive(Debug, Deserialize)]
struct AlignmentEntry {
    effective_from: u16,
    #[serde(default)]
    p5: Vec<String>,
    #[serde(default)]
    g5: Vec<String>,
    #[serde(default)]
    overrides: BTreeMap<String, String>,
}

impl AlignmentEntry {
    fn into_alignment(self) -> Result<(u16, ConferenceAlignment)> {
        let mut alignment = ConferenceAlignment::new()
            .with_p5_conferences(self.p5)
            .with_g5_conferences(self.g5);

        for (team, tier) in self.overrides {
            let tier = Tier::parse(&tier).ok_or_else(|| {
                ClassifierError::Config(format!(
                    "Invalid tier '{}' for override '{}' (season {})",
                    tier, team, self.effective_from
                ))
            })?;
            alignment = alignment.with_override(team, tier);
        }

        Ok((self.effective_from, alignment))
    }
}
