//! Integration tests for gridiron-classifier
//!
//! These tests load alignment and roster files from disk and label games
//! across conference realignment.

use std::io::Write;

use gridiron_classifier::{
    AlignmentBook, Classifier, ClassifierConfig, ClassifierError, Game, MatchupOutcome, Roster,
};
use gridiron_domain::{MatchupClass, Membership, Tier, TierRule};
use tempfile::NamedTempFile;

const ALIGNMENTS: &str = r#"
[[alignment]]
effective_from = 2014
p5 = ["ACC", "Big Ten", "Big 12", "SEC", "Pac-12"]
g5 = ["American Athletic", "Mountain West", "Sun Belt", "Mid-American", "Conference USA"]

[alignment.overrides]
notre-dame = "P5"

[[alignment]]
effective_from = 2024
p5 = ["ACC", "Big Ten", "Big 12", "SEC"]
g5 = ["American Athletic", "Mountain West", "Sun Belt", "Mid-American", "Conference USA", "Pac-12"]

[alignment.overrides]
notre-dame = "P5"
"#;

const ROSTER: &str = r#"
[
    { "team_id": "oregon-state", "season": 2023, "level": "fbs", "conference": "Pac-12" },
    { "team_id": "oregon-state", "season": 2024, "level": "fbs", "conference": "Pac-12" },
    { "team_id": "sam-houston", "season": 2022, "level": "fcs", "conference": "WAC" },
    { "team_id": "sam-houston", "season": 2023, "level": "fbs", "conference": "Conference USA" },
    { "team_id": "texas", "season": 2023, "level": "fbs", "conference": "Big 12" },
    { "team_id": "texas", "season": 2024, "level": "fbs", "conference": "SEC" },
    { "team_id": "notre-dame", "season": 2024, "level": "fbs" },
    { "team_id": "army", "season": 2023, "level": "fbs" }
]
"#;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn load() -> (Classifier, Roster) {
    let alignment_file = write_temp(ALIGNMENTS);
    let roster_file = write_temp(ROSTER);

    let book = AlignmentBook::load(alignment_file.path()).unwrap();
    let roster = Roster::load(roster_file.path()).unwrap();

    (Classifier::new(ClassifierConfig::default(), book), roster)
}

#[test]
fn test_load_from_files() {
    let (classifier, roster) = load();
    assert_eq!(classifier.book().len(), 2);
    assert_eq!(roster.len(), 8);
}

#[test]
fn test_realignment_changes_tier() {
    let (classifier, _) = load();

    let before = classifier
        .team_tier("oregon-state", 2023, Some(Membership::fbs()), Some("Pac-12"))
        .unwrap();
    let after = classifier
        .team_tier("oregon-state", 2024, Some(Membership::fbs()), Some("Pac-12"))
        .unwrap();

    assert_eq!(before, Tier::P5);
    assert_eq!(after, Tier::G5);
}

#[test]
fn test_division_transition() {
    let (classifier, roster) = load();

    let games = vec![
        Game::new(2022, "sam-houston", "army"),
        Game::new(2023, "sam-houston", "army"),
    ];
    let (labels, summary) = classifier.label_games(&games, &roster).unwrap();

    // 2022: FCS member; army has no 2022 roster row, so it falls to FCS too
    assert!(matches!(labels[0].outcome, MatchupOutcome::Unsupported(_)));
    assert_eq!(labels[0].home.rule, TierRule::DivisionFcs);
    assert_eq!(labels[0].away.rule, TierRule::UnknownFallback);

    // 2023: FBS in Conference USA vs FBS independent
    assert_eq!(labels[1].home.tier, Tier::G5);
    assert_eq!(labels[1].away.rule, TierRule::FbsFallback);
    assert_eq!(labels[1].outcome.class(), Some(MatchupClass::G5G5));

    assert_eq!(summary.unsupported, 1);
    assert_eq!(summary.missing_snapshots(), 1);
}

#[test]
fn test_label_across_eras() {
    let (classifier, roster) = load();

    let games = vec![
        Game::new(2023, "texas", "oregon-state"),
        Game::new(2024, "texas", "oregon-state"),
        Game::new(2024, "oregon-state", "notre-dame"),
    ];
    let (labels, summary) = classifier.label_games(&games, &roster).unwrap();

    assert_eq!(labels[0].outcome.class(), Some(MatchupClass::P5P5));
    assert_eq!(labels[1].outcome.class(), Some(MatchupClass::P5G5));
    assert_eq!(labels[2].outcome.class(), Some(MatchupClass::P5G5));
    assert_eq!(summary.count(MatchupClass::P5G5), 2);
}

#[test]
fn test_games_from_json() {
    let (classifier, roster) = load();

    let games: Vec<Game> = serde_json::from_str(
        r#"[
            { "id": "401520281", "season": 2024, "home": "texas", "away": "notre-dame" }
        ]"#,
    )
    .unwrap();

    let (labels, _) = classifier.label_games(&games, &roster).unwrap();
    assert_eq!(labels[0].game.id.as_deref(), Some("401520281"));
    assert_eq!(labels[0].outcome.class(), Some(MatchupClass::P5P5));
}

#[test]
fn test_strict_classifier_rejects_old_season() {
    let alignment_file = write_temp(ALIGNMENTS);
    let book = AlignmentBook::load(alignment_file.path()).unwrap();
    let classifier = Classifier::new(ClassifierConfig::strict(), book);

    assert!(matches!(
        classifier.team_tier("texas", 2010, Some(Membership::fbs()), Some("Big 12")),
        Err(ClassifierError::NoAlignment { season: 2010 })
    ));
    assert!(classifier.alignment(2015).is_ok());
}

#[test]
fn test_missing_file() {
    let result = AlignmentBook::load("/nonexistent/alignments.toml");
    assert!(matches!(result, Err(ClassifierError::Io(_))));
}
