//! In-memory season roster
//!
//! Loaded from a JSON array of per-season team records:
//!
//! ```json
//! [
//!   { "team_id": "alabama", "season": 2024, "level": "fbs", "conference": "SEC" },
//!   { "team_id": "notre-dame", "season": 2024, "level": "fbs" }
//! ]
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use gridiron_domain::traits::SeasonRoster;
use gridiron_domain::{DivisionLevel, Membership, TeamSeason};
use serde::{Deserialize, Serialize};

use crate::error::{ClassifierError, Result};

/// One roster row as stored on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterRecord {
    /// Team identifier
    pub team_id: String,

    /// Season year
    pub season: u16,

    /// `"fbs"` or `"fcs"`; omitted when unknown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    /// Conference name; omitted for independents
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conference: Option<String>,
}

impl RosterRecord {
    fn into_snapshot(self) -> Result<TeamSeason> {
        let membership = match self.level.as_deref() {
            None => None,
            Some(level) => {
                let level = DivisionLevel::parse(level).ok_or_else(|| {
                    ClassifierError::Roster(format!(
                        "Invalid level '{}' for {} in {}",
                        level, self.team_id, self.season
                    ))
                })?;
                Some(Membership::from(level))
            }
        };

        Ok(TeamSeason {
            team_id: self.team_id.into(),
            season: self.season,
            membership,
            conference: self.conference,
        })
    }
}

/// Team snapshots keyed by `(team_id, season)`
#[derive(Debug, Clone, Default)]
pub struct Roster {
    snapshots: HashMap<(String, u16), TeamSeason>,
}

impl Roster {
    /// Create an empty roster
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a snapshot
    ///
    /// # Errors
    /// Returns a roster error if the team already has a snapshot for that season
    pub fn insert(&mut self, snapshot: TeamSeason) -> Result<()> {
        let key = (snapshot.team_id.as_str().to_string(), snapshot.season);
        if self.snapshots.contains_key(&key) {
            return Err(ClassifierError::Roster(format!(
                "Duplicate roster entry for {} in {}",
                key.0, key.1
            )));
        }
        self.snapshots.insert(key, snapshot);
        Ok(())
    }

    /// Build a roster from records
    pub fn from_records(records: Vec<RosterRecord>) -> Result<Self> {
        let mut roster = Self::new();
        for record in records {
            roster.insert(record.into_snapshot()?)?;
        }
        Ok(roster)
    }

    /// Parse a roster from JSON text
    pub fn from_json_str(contents: &str) -> Result<Self> {
        let records: Vec<RosterRecord> = serde_json::from_str(contents)?;
        Self::from_records(records)
    }

    /// Load a roster from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&contents)
    }

    /// Look up a snapshot without going through the trait
    pub fn get(&self, team_id: &str, season: u16) -> Option<&TeamSeason> {
        self.snapshots.get(&(team_id.to_string(), season))
    }

    /// Number of snapshots
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether the roster is empty
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

impl SeasonRoster for Roster {
    type Error = ClassifierError;

    fn snapshot(&self, team_id: &str, season: u16) -> Result<Option<TeamSeason>> {
        Ok(self.get(team_id, season).cloned())
    }
}
