//! Alignment command implementation.

use crate::cli::AlignmentArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use gridiron_classifier::Classifier;

/// Execute the alignment command.
pub fn execute_alignment(
    args: AlignmentArgs,
    classifier: &Classifier,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let season = config.resolve_season(args.season, classifier);
    let lookup = season.unwrap_or(0);

    // Resolve through the classifier so strict mode applies, then find the
    // entry's effective season for display.
    let alignment = classifier.alignment(lookup)?;
    let effective_from = classifier
        .book()
        .covering(lookup)
        .or_else(|| classifier.book().earliest())
        .map(|(from, _)| from)
        .ok_or_else(|| CliError::Config("Alignment book is empty".to_string()))?;

    println!(
        "{}",
        formatter.format_alignment(season, effective_from, alignment)?
    );

    Ok(())
}
