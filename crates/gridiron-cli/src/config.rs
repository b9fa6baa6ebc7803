//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use gridiron_classifier::{AlignmentBook, Classifier, ClassifierConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Conference alignment file (TOML); the standard table is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment_file: Option<PathBuf>,

    /// Season used when a command does not name one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_season: Option<u16>,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Classifier behavior
    #[serde(default)]
    pub classifier: ClassifierConfig,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// REPL history size
    #[serde(default = "default_history_size")]
    pub history_size: usize,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        Ok(Self::dir()?.join("config.toml"))
    }

    /// Get the configuration directory (`~/.gridiron`).
    pub fn dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".gridiron"))
    }

    /// Load configuration from the default path, or defaults if it does not exist.
    pub fn load() -> Result<Self> {
        Self::load_or_default(Self::path()?)
    }

    /// Load configuration from a path, or defaults if the file does not exist.
    ///
    /// A file that exists but does not parse is an error; it is never rewritten.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if path.exists() {
            Self::load_from(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit path.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to an explicit path.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Build a classifier from this configuration.
    ///
    /// `alignment_override` takes precedence over `alignment_file`.
    pub fn build_classifier(&self, alignment_override: Option<&str>) -> Result<Classifier> {
        let alignment_path = alignment_override
            .map(PathBuf::from)
            .or_else(|| self.alignment_file.clone());

        let book = match alignment_path {
            Some(path) => {
                tracing::debug!("Loading alignment from {}", path.display());
                AlignmentBook::load(&path)?
            }
            None => AlignmentBook::standard(),
        };

        Ok(Classifier::new(self.classifier.clone(), book))
    }

    /// Pick the season for a command.
    ///
    /// Explicit season first, then `default_season`, then the most recent
    /// alignment's effective season. `None` when nothing names a season and
    /// the latest alignment starts at season 0, so it covers every season.
    pub fn resolve_season(&self, explicit: Option<u16>, classifier: &Classifier) -> Option<u16> {
        explicit.or(self.default_season).or_else(|| {
            classifier
                .book()
                .effective_seasons()
                .last()
                .filter(|&season| season > 0)
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            alignment_file: None,
            default_season: None,
            settings: Settings::default(),
            classifier: ClassifierConfig::default(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
            history_size: 1000,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_history_size() -> usize {
    1000
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridiron_classifier::UnsupportedPolicy;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.alignment_file.is_none());
        assert!(config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Table);
        assert!(!config.classifier.strict_seasons);
    }

    #[test]
    fn test_partial_toml() {
        let config: Config = toml::from_str(
            r#"
            default_season = 2024

            [settings]
            format = "json"

            [classifier]
            unsupported = "fail"
            "#,
        )
        .unwrap();

        assert_eq!(config.default_season, Some(2024));
        assert_eq!(config.settings.format, OutputFormat::Json);
        assert!(config.settings.color);
        assert_eq!(config.classifier.unsupported, UnsupportedPolicy::Fail);
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.default_season = Some(2023);
        config.settings.color = false;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.default_season, Some(2023));
        assert!(!loaded.settings.color);
    }

    #[test]
    fn test_build_classifier_with_alignment_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("alignments.toml");
        fs::write(
            &path,
            r#"
            [[alignment]]
            effective_from = 2024
            p5 = ["SEC"]
            g5 = ["Pac-12"]
            "#,
        )
        .unwrap();

        let config = Config {
            alignment_file: Some(path),
            ..Config::default()
        };
        let classifier = config.build_classifier(None).unwrap();
        assert_eq!(classifier.book().len(), 1);
        assert_eq!(config.resolve_season(None, &classifier), Some(2024));
        assert_eq!(config.resolve_season(Some(2030), &classifier), Some(2030));
    }

    #[test]
    fn test_build_classifier_missing_override() {
        let config = Config::default();
        assert!(config.build_classifier(Some("/nonexistent/alignments.toml")).is_err());
    }

    #[test]
    fn test_resolve_season_prefers_default() {
        let config = Config {
            default_season: Some(2019),
            ..Config::default()
        };
        let classifier = config.build_classifier(None).unwrap();
        assert_eq!(config.resolve_season(None, &classifier), Some(2019));
    }

    #[test]
    fn test_resolve_season_standard_book_names_no_season() {
        let config = Config::default();
        let classifier = config.build_classifier(None).unwrap();
        assert_eq!(config.resolve_season(None, &classifier), None);
        assert_eq!(config.resolve_season(Some(2022), &classifier), Some(2022));
    }

    #[test]
    fn test_missing_config_uses_defaults_without_writing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config::load_or_default(&path).unwrap();
        assert!(config.alignment_file.is_none());
        assert!(!path.exists());
    }

    #[test]
    fn test_malformed_config_is_an_error_and_left_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let contents = r#"
alignment_file = "/data/my-alignments.toml"
default_season = 2024

[classifier]
unsupported = "fial"
"#;
        fs::write(&path, contents).unwrap();

        let result = Config::load_or_default(&path);
        assert!(matches!(result, Err(CliError::Toml(_))));
        assert_eq!(fs::read_to_string(&path).unwrap(), contents);
    }
}
