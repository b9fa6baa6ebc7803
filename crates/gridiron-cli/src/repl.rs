//! Interactive REPL (Read-Eval-Print Loop) mode.

use crate::cli::{AlignmentArgs, Command, LevelArg, MatchupArgs, TierArg, TierArgs};
use crate::commands;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use gridiron_classifier::Classifier;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// Run the interactive REPL.
pub fn run_repl(classifier: &Classifier, config: &Config, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.info("Gridiron REPL - Type 'help' for commands, 'exit' to quit"));
    println!();

    let editor_config = rustyline::Config::builder()
        .max_history_size(config.settings.history_size)
        .map_err(|e| CliError::Config(format!("Invalid history size: {}", e)))?
        .build();
    let mut editor = DefaultEditor::with_config(editor_config).map_err(|e| {
        CliError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("Failed to initialize editor: {}", e),
        ))
    })?;

    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    let mut season: Option<u16> = None;

    loop {
        let prompt = match season {
            Some(year) => format!("gridiron [{}]> ", year),
            None => "gridiron> ".to_string(),
        };

        match editor.readline(&prompt) {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_command(line, season) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => {
                        print_help(formatter);
                    }
                    Ok(ReplCommand::Season(None)) => {
                        let message = match config.resolve_season(season, classifier) {
                            Some(current) => format!("Season: {}", current),
                            None => "Season: not set (one alignment covers every season)".into(),
                        };
                        println!("{}", formatter.info(&message));
                    }
                    Ok(ReplCommand::Season(Some(year))) => {
                        season = Some(year);
                        println!("{}", formatter.success(&format!("Season set to {}", year)));
                    }
                    Ok(ReplCommand::Command(cmd)) => {
                        if let Err(e) = execute_repl_command(cmd, classifier, config, formatter) {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    editor.save_history(&history_path).ok();

    Ok(())
}

/// REPL command type.
#[derive(Debug)]
enum ReplCommand {
    Exit,
    Help,
    Season(Option<u16>),
    Command(Command),
}

/// Parse a REPL command line.
fn parse_repl_command(line: &str, season: Option<u16>) -> Result<ReplCommand> {
    let (command, rest) = split_token(line);

    if command.is_empty() {
        return Err(CliError::InvalidInput("Empty command".to_string()));
    }

    let parts: Vec<&str> = rest.split_whitespace().collect();

    match command {
        "exit" | "quit" | "q" => Ok(ReplCommand::Exit),
        "help" | "?" => Ok(ReplCommand::Help),
        "season" => parse_season_command(&parts),
        "tier" => parse_tier_command(rest, season),
        "matchup" => parse_matchup_command(&parts),
        "alignment" => parse_alignment_command(&parts, season),
        _ => Err(CliError::InvalidInput(format!(
            "Unknown command: {}. Type 'help' for available commands.",
            command
        ))),
    }
}

/// Split off the first whitespace-delimited token, leaving the remainder as typed.
fn split_token(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    input.split_once(char::is_whitespace).unwrap_or((input, ""))
}

/// Execute a REPL command.
fn execute_repl_command(
    cmd: Command,
    classifier: &Classifier,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    match cmd {
        Command::Tier(args) => commands::execute_tier(args, classifier, config, formatter),
        Command::Matchup(args) => commands::execute_matchup(args, formatter),
        Command::Alignment(args) => {
            commands::execute_alignment(args, classifier, config, formatter)
        }
        Command::Label(_) | Command::Repl => Err(CliError::InvalidInput(
            "Command not available inside the REPL".to_string(),
        )),
    }
}

// Simple command parsers for REPL (minimal argument parsing)

fn parse_season_command(args: &[&str]) -> Result<ReplCommand> {
    match args.first() {
        None => Ok(ReplCommand::Season(None)),
        Some(year) => year
            .parse()
            .map(|y| ReplCommand::Season(Some(y)))
            .map_err(|_| CliError::InvalidInput(format!("Invalid season: {}", year))),
    }
}

fn parse_tier_command(input: &str, season: Option<u16>) -> Result<ReplCommand> {
    let (team, rest) = split_token(input);
    if team.is_empty() {
        return Err(CliError::InvalidInput(
            "Usage: tier <team> [fbs|fcs|-] [conference...]".to_string(),
        ));
    }

    let (level, rest) = split_token(rest);
    let level = match level {
        "" | "-" => None,
        level => Some(parse_level_arg(level).ok_or_else(|| {
            CliError::InvalidInput(format!("Invalid level: {} (expected fbs, fcs or -)", level))
        })?),
    };

    // Conference names match exactly, so inner spacing is kept as typed
    let conference = Some(rest.trim())
        .filter(|c| !c.is_empty())
        .map(str::to_string);

    Ok(ReplCommand::Command(Command::Tier(TierArgs {
        team: team.to_string(),
        level,
        conference,
        season,
        explain: true,
    })))
}

fn parse_matchup_command(args: &[&str]) -> Result<ReplCommand> {
    if args.len() != 2 {
        return Err(CliError::InvalidInput("Usage: matchup <tier> <tier>".to_string()));
    }

    let parse = |s: &str| {
        parse_tier_arg(s).ok_or_else(|| {
            CliError::InvalidInput(format!("Invalid tier: {} (expected p5, g5 or fcs)", s))
        })
    };

    Ok(ReplCommand::Command(Command::Matchup(MatchupArgs {
        home: parse(args[0])?,
        away: parse(args[1])?,
    })))
}

fn parse_alignment_command(args: &[&str], season: Option<u16>) -> Result<ReplCommand> {
    let season = match args.first() {
        None => season,
        Some(year) => Some(
            year.parse()
                .map_err(|_| CliError::InvalidInput(format!("Invalid season: {}", year)))?,
        ),
    };

    Ok(ReplCommand::Command(Command::Alignment(AlignmentArgs { season })))
}

fn parse_tier_arg(s: &str) -> Option<TierArg> {
    match s.to_lowercase().as_str() {
        "p5" => Some(TierArg::P5),
        "g5" => Some(TierArg::G5),
        "fcs" => Some(TierArg::Fcs),
        _ => None,
    }
}

fn parse_level_arg(s: &str) -> Option<LevelArg> {
    match s.to_lowercase().as_str() {
        "fbs" => Some(LevelArg::Fbs),
        "fcs" => Some(LevelArg::Fcs),
        _ => None,
    }
}

fn get_history_path() -> Result<PathBuf> {
    let dir = Config::dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  tier <team> [level] [conf]     - Classify a team");
    println!("    level: fbs | fcs | - (unknown)");
    println!("    conf: conference name, may contain spaces");
    println!("  matchup <tier> <tier>          - Classify a pairing (p5|g5|fcs)");
    println!("  alignment [season]             - Show the conference table");
    println!("  season [year]                  - Show or set the session season");
    println!("  help, ?                        - Show this help");
    println!("  exit, quit, q                  - Exit REPL");
    println!();
}
