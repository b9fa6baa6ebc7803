//! Gridiron Classifier
//!
//! Season-aware labeling built on the pure rules in `gridiron-domain`.
//!
//! The classifier provides:
//! - Season-versioned conference alignments loaded from TOML
//! - An in-memory roster of per-season team snapshots loaded from JSON
//! - Tier classification with the rule that fired
//! - Game labeling with a batch summary
//!
//! # Examples
//!
//! ```
//! use gridiron_classifier::{Classifier, Game, Roster};
//! use gridiron_domain::MatchupClass;
//!
//! let roster = Roster::from_json_str(r#"[
//!     { "team_id": "alabama", "season": 2024, "level": "fbs", "conference": "SEC" },
//!     { "team_id": "boise-state", "season": 2024, "level": "fbs", "conference": "Mountain West" }
//! ]"#).unwrap();
//!
//! let classifier = Classifier::standard();
//! let label = classifier
//!     .label_game(&Game::new(2024, "boise-state", "alabama"), &roster)
//!     .unwrap();
//! assert_eq!(label.outcome.class(), Some(MatchupClass::P5G5));
//! ```

#![warn(missing_docs)]

mod alignment;
mod classifier;
mod config;
mod error;
mod roster;
mod summary;

pub use alignment::AlignmentBook;
pub use classifier::{Classifier, Game, GameLabel, MatchupOutcome};
pub use config::{ClassifierConfig, UnsupportedPolicy};
pub use error::{ClassifierError, Result};
pub use roster::{Roster, RosterRecord};
pub use summary::LabelSummary;
