//! Label command implementation.

use crate::cli::LabelArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use gridiron_classifier::{Classifier, Game, Roster};
use std::fs;
use std::io::{self, Read};

/// Execute the label command.
pub fn execute_label(
    args: LabelArgs,
    classifier: &Classifier,
    formatter: &Formatter,
) -> Result<()> {
    let games = read_games(&args.games)?;
    if games.is_empty() {
        return Err(CliError::InvalidInput("No games provided".to_string()));
    }

    let roster = Roster::load(&args.roster)?;
    tracing::info!("Loaded {} roster entries from {}", roster.len(), args.roster);

    let (labels, summary) = classifier.label_games(&games, &roster)?;

    if !args.summary_only {
        println!("{}", formatter.format_labels(&labels)?);
        println!();
    }
    println!("{}", formatter.format_summary(&summary)?);

    if summary.missing_snapshots() > 0 && !args.summary_only {
        eprintln!(
            "{}",
            formatter.warning("* team not in roster for that season; classified as unknown")
        );
    }

    Ok(())
}

/// Read games from a JSON file, or stdin when the path is `-`.
fn read_games(source: &str) -> Result<Vec<Game>> {
    let json_data = if source == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(source)?
    };

    parse_games(&json_data)
}

fn parse_games(json_data: &str) -> Result<Vec<Game>> {
    let games: Vec<Game> = serde_json::from_str(json_data)?;

    if let Some(game) = games.iter().find(|g| g.home == g.away) {
        return Err(CliError::InvalidInput(format!(
            "Game {} lists {} as both home and away",
            game.id.as_deref().unwrap_or("-"),
            game.home
        )));
    }

    Ok(games)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_games() {
        let json = r#"
        [
            { "season": 2024, "home": "alabama", "away": "georgia" },
            { "id": "g2", "season": 2024, "home": "army", "away": "navy" }
        ]
        "#;

        let games = parse_games(json).unwrap();
        assert_eq!(games.len(), 2);
        assert!(games[0].id.is_none());
        assert_eq!(games[1].id.as_deref(), Some("g2"));
    }

    #[test]
    fn test_self_matchup_rejected() {
        let json = r#"[{ "season": 2024, "home": "army", "away": "army" }]"#;
        assert!(matches!(parse_games(json), Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_read_games_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"[{{ "season": 2023, "home": "texas", "away": "rice" }}]"#).unwrap();

        let games = read_games(file.path().to_str().unwrap()).unwrap();
        assert_eq!(games[0].away, "rice");
    }

    #[test]
    fn test_read_games_malformed() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            read_games(file.path().to_str().unwrap()),
            Err(CliError::Serialization(_))
        ));
    }
}
