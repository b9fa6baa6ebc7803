//! Aggregate counts for a labeling run

use std::collections::{BTreeMap, BTreeSet};

use gridiron_domain::{MatchupClass, Tier};

/// Counts collected while labeling a batch of games
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSummary {
    /// Games labeled per matchup class
    pub by_class: BTreeMap<MatchupClass, usize>,

    /// Team appearances per tier (two per game)
    pub by_tier: BTreeMap<Tier, usize>,

    /// Games with no matchup class (FCS vs FCS)
    pub unsupported: usize,

    /// Distinct `(team, season)` pairs with no roster entry
    pub missing: BTreeSet<(String, u16)>,
}

impl LabelSummary {
    /// Create an empty summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a classified game
    pub fn record_class(&mut self, class: MatchupClass) {
        *self.by_class.entry(class).or_insert(0) += 1;
    }

    /// Record a team appearance
    pub fn record_tier(&mut self, tier: Tier) {
        *self.by_tier.entry(tier).or_insert(0) += 1;
    }

    /// Record a game with no matchup class
    pub fn record_unsupported(&mut self) {
        self.unsupported += 1;
    }

    /// Record a team missing from the roster for a season
    pub fn record_missing_snapshot(&mut self, team_id: &str, season: u16) {
        self.missing.insert((team_id.to_string(), season));
    }

    /// Number of distinct teams missing from the roster, counted per season
    pub fn missing_snapshots(&self) -> usize {
        self.missing.len()
    }

    /// Games with a matchup class
    pub fn total_classified(&self) -> usize {
        self.by_class.values().sum()
    }

    /// All games seen
    pub fn total_games(&self) -> usize {
        self.total_classified() + self.unsupported
    }

    /// Count for one class
    pub fn count(&self, class: MatchupClass) -> usize {
        self.by_class.get(&class).copied().unwrap_or(0)
    }

    /// Generate a summary report
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Labeling Summary".to_string(),
            "================".to_string(),
            format!("Games: {}", self.total_games()),
            format!("Classified: {}", self.total_classified()),
            format!("Unsupported: {}", self.unsupported),
            format!("Missing roster entries: {}", self.missing_snapshots()),
        ];

        if !self.by_class.is_empty() {
            lines.push(String::new());
            lines.push("Games by class:".to_string());
            for (class, count) in &self.by_class {
                lines.push(format!("  {}: {}", class, count));
            }
        }

        if !self.by_tier.is_empty() {
            lines.push(String::new());
            lines.push("Teams by tier:".to_string());
            for (tier, count) in self.by_tier.iter().rev() {
                lines.push(format!("  {}: {}", tier, count));
            }
        }

        lines.join("\n")
    }
}
