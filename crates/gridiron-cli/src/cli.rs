//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};

/// Gridiron CLI - Classify college-football teams and matchups.
#[derive(Debug, Parser)]
#[command(name = "gridiron")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Conference alignment file (TOML), overrides the configured one
    #[arg(long, global = true)]
    pub alignment: Option<String>,

    /// Log classification decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (labels only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify a team into a tier
    Tier(TierArgs),

    /// Classify a pairing of tiers
    Matchup(MatchupArgs),

    /// Label a batch of games from JSON files
    Label(LabelArgs),

    /// Show the conference alignment for a season
    Alignment(AlignmentArgs),

    /// Enter interactive REPL mode
    Repl,
}

/// Arguments for the tier command.
#[derive(Debug, Parser)]
pub struct TierArgs {
    /// Team identifier (e.g. alabama)
    pub team: String,

    /// Division membership for the season
    #[arg(short, long, value_enum)]
    pub level: Option<LevelArg>,

    /// Conference name (exact, case-sensitive)
    #[arg(long)]
    pub conference: Option<String>,

    /// Season year
    #[arg(short, long)]
    pub season: Option<u16>,

    /// Show which rule decided the tier
    #[arg(short, long)]
    pub explain: bool,
}

/// Arguments for the matchup command.
#[derive(Debug, Parser)]
pub struct MatchupArgs {
    /// First (home) tier
    #[arg(value_enum)]
    pub home: TierArg,

    /// Second (away) tier
    #[arg(value_enum)]
    pub away: TierArg,
}

/// Arguments for the label command.
#[derive(Debug, Parser)]
pub struct LabelArgs {
    /// JSON file with games (`-` reads stdin)
    #[arg(short, long)]
    pub games: String,

    /// JSON file with per-season team records
    #[arg(short, long)]
    pub roster: String,

    /// Print only the summary
    #[arg(long)]
    pub summary_only: bool,
}

/// Arguments for the alignment command.
#[derive(Debug, Parser)]
pub struct AlignmentArgs {
    /// Season year (defaults to the configured or latest season)
    #[arg(short, long)]
    pub season: Option<u16>,
}

/// Tier argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum TierArg {
    /// Power conference tier
    P5,
    /// Group of Five tier
    G5,
    /// Championship subdivision tier
    Fcs,
}

/// Division level argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LevelArg {
    /// Football Bowl Subdivision
    Fbs,
    /// Football Championship Subdivision
    Fcs,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<TierArg> for gridiron_domain::Tier {
    fn from(tier: TierArg) -> Self {
        match tier {
            TierArg::P5 => gridiron_domain::Tier::P5,
            TierArg::G5 => gridiron_domain::Tier::G5,
            TierArg::Fcs => gridiron_domain::Tier::Fcs,
        }
    }
}

impl From<LevelArg> for gridiron_domain::Membership {
    fn from(level: LevelArg) -> Self {
        match level {
            LevelArg::Fbs => gridiron_domain::Membership::fbs(),
            LevelArg::Fcs => gridiron_domain::Membership::fcs(),
        }
    }
}
