//! Tier command implementation.

use crate::cli::TierArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use gridiron_classifier::Classifier;

/// Execute the tier command.
pub fn execute_tier(
    args: TierArgs,
    classifier: &Classifier,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let season = config.resolve_season(args.season, classifier);
    let membership = args.level.map(Into::into);

    let decision = classifier.explain(
        &args.team,
        season.unwrap_or(0),
        membership,
        args.conference.as_deref(),
    )?;

    println!(
        "{}",
        formatter.format_decision(&args.team, season, &decision, args.explain)?
    );

    Ok(())
}
