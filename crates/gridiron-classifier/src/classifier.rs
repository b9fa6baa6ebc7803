//! Classifier service: season-aware tier and matchup labeling

use std::fmt;

use gridiron_domain::traits::SeasonRoster;
use gridiron_domain::{
    classify_snapshot, explain_team_tier, get_matchup_class, ConferenceAlignment, MatchupClass,
    Membership, TeamSeason, Tier, TierDecision, UnsupportedPairing,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{ClassifierError, Result};
use crate::{AlignmentBook, ClassifierConfig, LabelSummary, UnsupportedPolicy};

/// A scheduled or played game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Optional external game identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Season the game belongs to
    pub season: u16,

    /// Home team identifier
    pub home: String,

    /// Away team identifier
    pub away: String,
}

impl Game {
    /// Create a game without an identifier
    pub fn new(season: u16, home: impl Into<String>, away: impl Into<String>) -> Self {
        Self {
            id: None,
            season,
            home: home.into(),
            away: away.into(),
        }
    }

    /// Attach an identifier
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Result of classifying a game's pairing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchupOutcome {
    /// The pairing has a matchup class
    Classified(MatchupClass),

    /// The pairing has no matchup class
    Unsupported(UnsupportedPairing),
}

impl MatchupOutcome {
    /// The class, if the pairing has one
    pub fn class(&self) -> Option<MatchupClass> {
        match self {
            MatchupOutcome::Classified(class) => Some(*class),
            MatchupOutcome::Unsupported(_) => None,
        }
    }
}

impl fmt::Display for MatchupOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchupOutcome::Classified(class) => write!(f, "{}", class),
            MatchupOutcome::Unsupported(_) => f.write_str("unsupported"),
        }
    }
}

/// A game with both teams' tiers and the matchup outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameLabel {
    /// The labeled game
    pub game: Game,

    /// Home team decision
    pub home: TierDecision,

    /// Away team decision
    pub away: TierDecision,

    /// Matchup class or unsupported marker
    pub outcome: MatchupOutcome,

    /// Whether the roster had the home team for this season
    pub home_in_roster: bool,

    /// Whether the roster had the away team for this season
    pub away_in_roster: bool,
}

/// Season-aware classifier
///
/// # Examples
///
/// ```
/// use gridiron_classifier::Classifier;
/// use gridiron_domain::{Membership, Tier};
///
/// let classifier = Classifier::standard();
/// let tier = classifier
///     .team_tier("boise-state", 2024, Some(Membership::fbs()), Some("Mountain West"))
///     .unwrap();
/// assert_eq!(tier, Tier::G5);
/// ```
#[derive(Debug, Clone)]
pub struct Classifier {
    config: ClassifierConfig,
    book: AlignmentBook,
}

impl Classifier {
    /// Create a classifier from a config and an alignment book
    pub fn new(config: ClassifierConfig, book: AlignmentBook) -> Self {
        Self { config, book }
    }

    /// Default config with the standard alignment
    pub fn standard() -> Self {
        Self::new(ClassifierConfig::default(), AlignmentBook::standard())
    }

    /// Active configuration
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Alignment book in use
    pub fn book(&self) -> &AlignmentBook {
        &self.book
    }

    /// Resolve the alignment for a season, honoring `strict_seasons`
    pub fn alignment(&self, season: u16) -> Result<&ConferenceAlignment> {
        if let Some((_, alignment)) = self.book.covering(season) {
            return Ok(alignment);
        }

        if self.config.strict_seasons {
            return Err(ClassifierError::NoAlignment { season });
        }

        let (from, alignment) = self
            .book
            .earliest()
            .ok_or(ClassifierError::NoAlignment { season })?;
        warn!(
            "Season {} predates every alignment; using alignment effective from {}",
            season, from
        );
        Ok(alignment)
    }

    /// Classify a team and report the rule that fired
    pub fn explain(
        &self,
        team_id: &str,
        season: u16,
        membership: Option<Membership>,
        conference: Option<&str>,
    ) -> Result<TierDecision> {
        let alignment = self.alignment(season)?;
        let decision = explain_team_tier(team_id, membership, conference, alignment);
        debug!(
            team = team_id,
            season,
            tier = %decision.tier,
            rule = decision.rule.describe(),
            "Classified team"
        );
        Ok(decision)
    }

    /// Classify a team into a tier
    pub fn team_tier(
        &self,
        team_id: &str,
        season: u16,
        membership: Option<Membership>,
        conference: Option<&str>,
    ) -> Result<Tier> {
        self.explain(team_id, season, membership, conference)
            .map(|decision| decision.tier)
    }

    /// Classify a pairing of tiers
    ///
    /// Always fails on an unsupported pairing; the policy only applies to
    /// game labeling.
    pub fn matchup(&self, home: Tier, away: Tier) -> Result<MatchupClass> {
        Ok(get_matchup_class(home, away)?)
    }

    /// Label one game using roster snapshots for its season
    ///
    /// Teams missing from the roster are classified with no membership and
    /// no conference.
    pub fn label_game<R>(&self, game: &Game, roster: &R) -> Result<GameLabel>
    where
        R: SeasonRoster,
        R::Error: fmt::Display,
    {
        let alignment = self.alignment(game.season)?;

        let (home_snapshot, home_in_roster) = lookup(roster, &game.home, game.season)?;
        let (away_snapshot, away_in_roster) = lookup(roster, &game.away, game.season)?;

        let home = classify_snapshot(&home_snapshot, alignment);
        let away = classify_snapshot(&away_snapshot, alignment);

        let outcome = match get_matchup_class(home.tier, away.tier) {
            Ok(class) => MatchupOutcome::Classified(class),
            Err(pairing) => match self.config.unsupported {
                UnsupportedPolicy::Fail => return Err(pairing.into()),
                UnsupportedPolicy::Report => {
                    warn!(
                        "No matchup class for {} vs {} ({})",
                        game.home, game.away, pairing
                    );
                    MatchupOutcome::Unsupported(pairing)
                }
            },
        };

        debug!(
            home = %game.home,
            away = %game.away,
            season = game.season,
            outcome = %outcome,
            "Labeled game"
        );

        Ok(GameLabel {
            game: game.clone(),
            home,
            away,
            outcome,
            home_in_roster,
            away_in_roster,
        })
    }

    /// Label a batch of games and collect a summary
    pub fn label_games<R>(
        &self,
        games: &[Game],
        roster: &R,
    ) -> Result<(Vec<GameLabel>, LabelSummary)>
    where
        R: SeasonRoster,
        R::Error: fmt::Display,
    {
        info!("Labeling {} games", games.len());

        let mut summary = LabelSummary::new();
        let mut labels = Vec::with_capacity(games.len());

        for game in games {
            let label = self.label_game(game, roster)?;

            summary.record_tier(label.home.tier);
            summary.record_tier(label.away.tier);
            if !label.home_in_roster {
                summary.record_missing_snapshot(&game.home, game.season);
            }
            if !label.away_in_roster {
                summary.record_missing_snapshot(&game.away, game.season);
            }
            match label.outcome {
                MatchupOutcome::Classified(class) => summary.record_class(class),
                MatchupOutcome::Unsupported(_) => summary.record_unsupported(),
            }

            labels.push(label);
        }

        info!(
            "Labeled {} games ({} classified, {} unsupported)",
            summary.total_games(),
            summary.total_classified(),
            summary.unsupported
        );

        Ok((labels, summary))
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::standard()
    }
}

fn lookup<R>(roster: &R, team_id: &str, season: u16) -> Result<(TeamSeason, bool)>
where
    R: SeasonRoster,
    R::Error: fmt::Display,
{
    let snapshot = roster
        .snapshot(team_id, season)
        .map_err(|e| ClassifierError::Roster(format!("Failed to look up {}: {}", team_id, e)))?;

    match snapshot {
        Some(snapshot) => Ok((snapshot, true)),
        None => {
            debug!("No roster entry for {} in {}", team_id, season);
            Ok((TeamSeason::new(team_id, season), false))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Roster;
    use gridiron_domain::TierRule;

    fn roster() -> Roster {
        Roster::from_json_str(
            r#"[
                { "team_id": "alabama", "season": 2024, "level": "fbs", "conference": "SEC" },
                { "team_id": "georgia", "season": 2024, "level": "fbs", "conference": "SEC" },
                { "team_id": "boise-state", "season": 2024, "level": "fbs", "conference": "Mountain West" },
                { "team_id": "montana", "season": 2024, "level": "fcs", "conference": "Big Sky" },
                { "team_id": "weber-state", "season": 2024, "level": "fcs", "conference": "Big Sky" },
                { "team_id": "notre-dame", "season": 2024, "level": "fbs" }
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_team_tier() {
        let classifier = Classifier::standard();
        assert_eq!(
            classifier.team_tier("alabama", 2024, Some(Membership::fbs()), Some("SEC")).unwrap(),
            Tier::P5
        );
        assert_eq!(
            classifier.team_tier("army", 2024, Some(Membership::fbs()), None).unwrap(),
            Tier::G5
        );
    }

    #[test]
    fn test_explain_reports_rule() {
        let classifier = Classifier::standard();
        let decision = classifier
            .explain("notre-dame", 2024, Some(Membership::fbs()), Some("ACC"))
            .unwrap();
        assert_eq!(decision.rule, TierRule::IdentityOverride);
    }

    #[test]
    fn test_matchup_rejects_fcs_pairing() {
        let classifier = Classifier::standard();
        assert_eq!(classifier.matchup(Tier::Fcs, Tier::P5).unwrap(), MatchupClass::P5Fcs);
        assert!(matches!(
            classifier.matchup(Tier::Fcs, Tier::Fcs),
            Err(ClassifierError::Unsupported(_))
        ));
    }

    #[test]
    fn test_label_game() {
        let classifier = Classifier::standard();
        let label = classifier
            .label_game(&Game::new(2024, "boise-state", "alabama"), &roster())
            .unwrap();

        assert_eq!(label.home.tier, Tier::G5);
        assert_eq!(label.away.tier, Tier::P5);
        assert_eq!(label.outcome, MatchupOutcome::Classified(MatchupClass::P5G5));
        assert!(label.home_in_roster && label.away_in_roster);
    }

    #[test]
    fn test_label_game_missing_team_defaults_to_fcs() {
        let classifier = Classifier::standard();
        let label = classifier
            .label_game(&Game::new(2024, "alabama", "somewhere-tech"), &roster())
            .unwrap();

        assert_eq!(label.away.tier, Tier::Fcs);
        assert_eq!(label.away.rule, TierRule::UnknownFallback);
        assert!(!label.away_in_roster);
        assert_eq!(label.outcome.class(), Some(MatchupClass::P5Fcs));
    }

    #[test]
    fn test_unsupported_reported() {
        let classifier = Classifier::standard();
        let label = classifier
            .label_game(&Game::new(2024, "montana", "weber-state"), &roster())
            .unwrap();
        assert!(matches!(label.outcome, MatchupOutcome::Unsupported(_)));
        assert_eq!(label.outcome.to_string(), "unsupported");
    }

    #[test]
    fn test_unsupported_fails_under_fail_policy() {
        let config = ClassifierConfig {
            unsupported: UnsupportedPolicy::Fail,
            ..ClassifierConfig::default()
        };
        let classifier = Classifier::new(config, AlignmentBook::standard());
        let result = classifier.label_game(&Game::new(2024, "montana", "weber-state"), &roster());
        assert!(matches!(result, Err(ClassifierError::Unsupported(_))));
    }

    #[test]
    fn test_label_games_summary() {
        let classifier = Classifier::standard();
        let games = vec![
            Game::new(2024, "alabama", "georgia").with_id("g1"),
            Game::new(2024, "notre-dame", "boise-state"),
            Game::new(2024, "boise-state", "montana"),
            Game::new(2024, "montana", "weber-state"),
            Game::new(2024, "alabama", "nowhere-state"),
            Game::new(2024, "georgia", "nowhere-state"),
        ];

        let (labels, summary) = classifier.label_games(&games, &roster()).unwrap();

        assert_eq!(labels.len(), 6);
        assert_eq!(labels[0].game.id.as_deref(), Some("g1"));
        assert_eq!(summary.count(MatchupClass::P5P5), 1);
        assert_eq!(summary.count(MatchupClass::P5G5), 1);
        assert_eq!(summary.count(MatchupClass::G5Fcs), 1);
        assert_eq!(summary.count(MatchupClass::P5Fcs), 2);
        assert_eq!(summary.unsupported, 1);
        // nowhere-state is missing from two games but counted once
        assert_eq!(summary.missing_snapshots(), 1);
        assert_eq!(summary.total_games(), 6);
        assert_eq!(summary.by_tier.values().sum::<usize>(), 12);
    }

    #[test]
    fn test_strict_seasons() {
        let book = AlignmentBook::new([(2014, ConferenceAlignment::standard())]).unwrap();

        let lenient = Classifier::new(ClassifierConfig::default(), book.clone());
        assert!(lenient.alignment(2000).is_ok());

        let strict = Classifier::new(ClassifierConfig::strict(), book);
        assert!(matches!(
            strict.alignment(2000),
            Err(ClassifierError::NoAlignment { season: 2000 })
        ));
        assert!(strict.alignment(2014).is_ok());
    }
}
