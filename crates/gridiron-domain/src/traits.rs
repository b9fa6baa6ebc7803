//! Trait definition for external interactions
//!
//! Membership and conference data live outside the domain layer (a database,
//! a data file, an API). This trait defines how the classifier reaches it.

use crate::TeamSeason;

/// Trait for looking up a team's membership and conference for a season
///
/// Implemented by the infrastructure layer (gridiron-classifier's `Roster`)
pub trait SeasonRoster {
    /// Error type for roster lookups
    type Error;

    /// Get a team's snapshot for a season, if the roster knows the team
    fn snapshot(&self, team_id: &str, season: u16) -> Result<Option<TeamSeason>, Self::Error>;
}
