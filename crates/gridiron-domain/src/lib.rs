//! Gridiron Domain Layer
//!
//! This crate contains the classification rules at the heart of Gridiron.
//! It has ZERO external dependencies and defines the value types and pure
//! functions every other layer builds on.
//!
//! ## Key Concepts
//!
//! - **Tier**: Competitive band of a team for one season (P5 > G5 > FCS)
//! - **Membership**: FBS or FCS division for a season
//! - **Conference Alignment**: Conference-to-tier table plus team overrides
//! - **Matchup Class**: Order-independent label for a pair of tiers
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - No I/O and no state: every function is a pure function of its inputs
//! - Lookup data (rosters, season alignments) is reached through traits
//!   implemented in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod alignment;
pub mod classifier;
pub mod matchup;
pub mod team;
pub mod tier;
pub mod traits;

// Re-exports for convenience
pub use alignment::ConferenceAlignment;
pub use classifier::{
    classify_snapshot, classify_team_tier, explain_team_tier, TierDecision, TierRule,
};
pub use matchup::{get_matchup_class, ordered_pair, MatchupClass, UnsupportedPairing};
pub use team::{DivisionLevel, Membership, TeamId, TeamSeason};
pub use tier::Tier;
