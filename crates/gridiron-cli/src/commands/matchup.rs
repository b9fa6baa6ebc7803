//! Matchup command implementation.

use crate::cli::MatchupArgs;
use crate::error::Result;
use crate::output::Formatter;
use gridiron_domain::{get_matchup_class, Tier};

/// Execute the matchup command.
///
/// An FCS vs FCS pairing is reported, not treated as a failure.
pub fn execute_matchup(args: MatchupArgs, formatter: &Formatter) -> Result<()> {
    let home: Tier = args.home.into();
    let away: Tier = args.away.into();

    let result = get_matchup_class(home, away);
    if let Err(pairing) = &result {
        tracing::debug!("{}", pairing);
    }

    println!("{}", formatter.format_matchup(home, away, result)?);

    Ok(())
}
