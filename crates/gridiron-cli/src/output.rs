//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use gridiron_classifier::{GameLabel, LabelSummary, MatchupOutcome};
use gridiron_domain::{ConferenceAlignment, MatchupClass, Tier, TierDecision, UnsupportedPairing};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a team's tier decision.
    pub fn format_decision(
        &self,
        team: &str,
        season: Option<u16>,
        decision: &TierDecision,
        explain: bool,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let mut value = serde_json::json!({
                    "team": team,
                    "tier": decision.tier.as_str(),
                });
                if let Some(season) = season {
                    value["season"] = season.into();
                }
                if explain {
                    value["rule"] = serde_json::Value::from(decision.rule.describe());
                }
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Quiet => Ok(decision.tier.as_str().to_string()),
            OutputFormat::Table => {
                let tier = self.tier_label(decision.tier);
                let mut line = match season {
                    Some(season) => format!("{} ({}): {}", team, season, tier),
                    None => format!("{}: {}", team, tier),
                };
                if explain {
                    line.push_str(&format!("  [{}]", decision.rule.describe()));
                }
                Ok(line)
            }
        }
    }

    /// Format the result of classifying a pairing.
    pub fn format_matchup(
        &self,
        home: Tier,
        away: Tier,
        result: std::result::Result<MatchupClass, UnsupportedPairing>,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "home": home.as_str(),
                    "away": away.as_str(),
                    "class": result.ok().map(|c| c.as_str()),
                    "supported": result.is_ok(),
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Quiet => Ok(match result {
                Ok(class) => class.as_str().to_string(),
                Err(_) => "unsupported".to_string(),
            }),
            OutputFormat::Table => Ok(match result {
                Ok(class) => format!(
                    "{} vs {}: {}",
                    self.tier_label(home),
                    self.tier_label(away),
                    self.colorize(class.as_str(), "magenta")
                ),
                Err(pairing) => self.warning(&format!("Unsupported pairing: {}", pairing)),
            }),
        }
    }

    /// Format labeled games.
    pub fn format_labels(&self, labels: &[GameLabel]) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_labels_json(labels),
            OutputFormat::Table => self.format_labels_table(labels),
            OutputFormat::Quiet => Ok(labels
                .iter()
                .map(|l| l.outcome.to_string())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn format_labels_json(&self, labels: &[GameLabel]) -> Result<String> {
        let json_labels: Vec<serde_json::Value> = labels
            .iter()
            .map(|l| {
                serde_json::json!({
                    "id": l.game.id,
                    "season": l.game.season,
                    "home": l.game.home,
                    "away": l.game.away,
                    "home_tier": l.home.tier.as_str(),
                    "away_tier": l.away.tier.as_str(),
                    "class": l.outcome.class().map(|c| c.as_str()),
                    "supported": matches!(l.outcome, MatchupOutcome::Classified(_)),
                })
            })
            .collect();

        Ok(serde_json::to_string_pretty(&json_labels)?)
    }

    fn format_labels_table(&self, labels: &[GameLabel]) -> Result<String> {
        if labels.is_empty() {
            return Ok(self.colorize("No games found.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["Game", "Season", "Home", "Tier", "Away", "Tier", "Class"]);

        for label in labels {
            let id = label.game.id.clone().unwrap_or_else(|| "-".to_string());
            let home = mark_missing(&label.game.home, label.home_in_roster);
            let away = mark_missing(&label.game.away, label.away_in_roster);
            builder.push_record([
                id,
                label.game.season.to_string(),
                home,
                label.home.tier.to_string(),
                away,
                label.away.tier.to_string(),
                label.outcome.to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        Ok(table.to_string())
    }

    /// Format a labeling summary.
    pub fn format_summary(&self, summary: &LabelSummary) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let by_class: serde_json::Map<String, serde_json::Value> = summary
                    .by_class
                    .iter()
                    .map(|(class, count)| (class.as_str().to_string(), (*count).into()))
                    .collect();
                let by_tier: serde_json::Map<String, serde_json::Value> = summary
                    .by_tier
                    .iter()
                    .map(|(tier, count)| (tier.as_str().to_string(), (*count).into()))
                    .collect();
                let value = serde_json::json!({
                    "games": summary.total_games(),
                    "classified": summary.total_classified(),
                    "unsupported": summary.unsupported,
                    "missing_snapshots": summary.missing_snapshots(),
                    "by_class": by_class,
                    "by_tier": by_tier,
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Quiet => Ok(format!(
                "{} {}",
                summary.total_classified(),
                summary.unsupported
            )),
            OutputFormat::Table => Ok(summary.summary()),
        }
    }

    /// Format the alignment in force for a season.
    pub fn format_alignment(
        &self,
        season: Option<u16>,
        effective_from: u16,
        alignment: &ConferenceAlignment,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let overrides: serde_json::Map<String, serde_json::Value> = alignment
                    .overrides()
                    .map(|(team, tier)| (team.to_string(), tier.as_str().into()))
                    .collect();
                let mut value = serde_json::json!({
                    "effective_from": effective_from,
                    "p5": alignment.p5_conferences().collect::<Vec<_>>(),
                    "g5": alignment.g5_conferences().collect::<Vec<_>>(),
                    "overrides": overrides,
                });
                if let Some(season) = season {
                    value["season"] = season.into();
                }
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Quiet => {
                let mut lines: Vec<String> = alignment
                    .p5_conferences()
                    .map(|c| format!("P5\t{}", c))
                    .collect();
                lines.extend(alignment.g5_conferences().map(|c| format!("G5\t{}", c)));
                Ok(lines.join("\n"))
            }
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Name", "Kind", "Tier"]);
                for conference in alignment.p5_conferences() {
                    builder.push_record([conference, "conference", "P5"]);
                }
                for conference in alignment.g5_conferences() {
                    builder.push_record([conference, "conference", "G5"]);
                }
                for (team, tier) in alignment.overrides() {
                    builder.push_record([team.as_str(), "override", tier.as_str()]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));

                let header = match season {
                    Some(season) => self.info(&format!(
                        "Season {} (alignment effective from {})",
                        season, effective_from
                    )),
                    None => self.info(&format!("Alignment effective from {}", effective_from)),
                };
                Ok(format!("{}\n{}", header, table))
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn tier_label(&self, tier: Tier) -> String {
        let color = match tier {
            Tier::P5 => "green",
            Tier::G5 => "cyan",
            Tier::Fcs => "yellow",
        };
        self.colorize(tier.as_str(), color)
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

fn mark_missing(team: &str, in_roster: bool) -> String {
    if in_roster {
        team.to_string()
    } else {
        format!("{}*", team)
    }
}
