//! Classifier configuration

use serde::{Deserialize, Serialize};

/// What to do with a game whose tiers have no matchup class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnsupportedPolicy {
    /// Label the game as unsupported and keep going
    #[default]
    Report,

    /// Stop with an error
    Fail,
}

/// Configuration for season lookup and unsupported pairings
///
/// # Examples
///
/// ```
/// use gridiron_classifier::{ClassifierConfig, UnsupportedPolicy};
///
/// let config = ClassifierConfig::default();
/// assert!(!config.strict_seasons);
/// assert_eq!(config.unsupported, UnsupportedPolicy::Report);
///
/// let config = ClassifierConfig::strict();
/// assert!(config.strict_seasons);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Reject seasons older than the earliest alignment entry instead of
    /// falling back to that entry
    #[serde(default)]
    pub strict_seasons: bool,

    /// Handling of FCS vs FCS games during labeling
    #[serde(default)]
    pub unsupported: UnsupportedPolicy,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            strict_seasons: false,
            unsupported: UnsupportedPolicy::Report,
        }
    }
}

impl ClassifierConfig {
    /// Strict configuration: every season must be covered, unsupported pairings fail
    pub fn strict() -> Self {
        Self {
            strict_seasons: true,
            unsupported: UnsupportedPolicy::Fail,
        }
    }

    /// Lenient configuration: fall back on the earliest alignment, report unsupported pairings
    pub fn lenient() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClassifierConfig::default();
        assert!(!config.strict_seasons);
        assert_eq!(config.unsupported, UnsupportedPolicy::Report);
        assert_eq!(config, ClassifierConfig::lenient());
    }

    #[test]
    fn test_strict_config() {
        let config = ClassifierConfig::strict();
        assert!(config.strict_seasons);
        assert_eq!(config.unsupported, UnsupportedPolicy::Fail);
    }

    #[test]
    fn test_toml_with_missing_fields() {
        let config: ClassifierConfig = toml::from_str("unsupported = \"fail\"").unwrap();
        assert!(!config.strict_seasons);
        assert_eq!(config.unsupported, UnsupportedPolicy::Fail);
    }
}
