//! Gridiron CLI - Command-line interface for team-tier and matchup classification.

use clap::Parser;
use gridiron_cli::commands;
use gridiron_cli::repl;
use gridiron_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> gridiron_cli::Result<()> {
    let cli = Cli::parse();

    // Log to stderr so JSON output on stdout stays clean
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    // Explicit config must exist; a missing default config means defaults
    let config = match cli.config.as_deref() {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let classifier = config.build_classifier(cli.alignment.as_deref())?;

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        None | Some(Command::Repl) => {
            repl::run_repl(&classifier, &config, &formatter)?;
        }
        Some(Command::Tier(args)) => {
            commands::execute_tier(args, &classifier, &config, &formatter)?;
        }
        Some(Command::Matchup(args)) => {
            commands::execute_matchup(args, &formatter)?;
        }
        Some(Command::Label(args)) => {
            commands::execute_label(args, &classifier, &formatter)?;
        }
        Some(Command::Alignment(args)) => {
            commands::execute_alignment(args, &classifier, &config, &formatter)?;
        }
    }

    Ok(())
}
