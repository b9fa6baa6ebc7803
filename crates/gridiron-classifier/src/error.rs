//! Classifier error types

use gridiron_domain::UnsupportedPairing;
use thiserror::Error;

/// Result type alias for classifier operations
pub type Result<T> = std::result::Result<T, ClassifierError>;

/// Errors that can occur while loading lookup data or classifying
#[derive(Error, Debug)]
pub enum ClassifierError {
    /// Configuration or alignment table error
    #[error("Configuration error: {0}")]
    Config(String),

    /// No alignment entry covers the season (strict mode only)
    #[error("No conference alignment covers season {season}")]
    NoAlignment {
        /// Requested season
        season: u16,
    },

    /// Pairing with no matchup class under the `Fail` policy
    #[error("Unsupported pairing: {0}")]
    Unsupported(#[from] UnsupportedPairing),

    /// Roster data error
    #[error("Roster error: {0}")]
    Roster(String),

    /// I/O error while reading lookup files
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}
