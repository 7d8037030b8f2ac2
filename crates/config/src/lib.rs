//! Configuration loading and validation for newsdesk.
//!
//! Loads configuration from `~/.newsdesk/config.toml` with environment
//! variable overrides. A missing file is not an error — every setting
//! has a sensible default, so the demo runs unconfigured.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("failed to parse config at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("invalid configuration: {0}")]
    ValidationError(String),
}

/// The root configuration structure.
///
/// Maps directly to `~/.newsdesk/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Feed retrieval settings
    #[serde(default)]
    pub feed: FeedConfig,

    /// Archive writer settings
    #[serde(default)]
    pub archive: ArchiveConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Base URL the category is appended to as `<base_url>/<category>.xml`
    #[serde(default = "default_feed_base_url")]
    pub base_url: String,

    /// Request timeout in seconds for feed retrieval
    #[serde(default = "default_feed_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveConfig {
    /// Archive directory, resolved against the process working directory
    /// when relative
    #[serde(default = "default_archive_directory")]
    pub directory: String,
}

fn default_feed_base_url() -> String {
    "https://rss.nytimes.com/services/xml/rss/nyt".into()
}
fn default_feed_timeout_secs() -> u64 {
    15
}
fn default_archive_directory() -> String {
    "archives".into()
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: default_feed_base_url(),
            timeout_secs: default_feed_timeout_secs(),
        }
    }
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            directory: default_archive_directory(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            feed: FeedConfig::default(),
            archive: ArchiveConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default path (`~/.newsdesk/config.toml`).
    ///
    /// Environment variable overrides (highest priority):
    /// - `NEWSDESK_FEED_BASE_URL`
    /// - `NEWSDESK_ARCHIVE_DIR`
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_dir().join("config.toml");
        let mut config = Self::load_from(&config_path)?;

        if let Ok(base_url) = std::env::var("NEWSDESK_FEED_BASE_URL") {
            config.feed.base_url = base_url;
        }

        if let Ok(dir) = std::env::var("NEWSDESK_ARCHIVE_DIR") {
            config.archive.directory = dir;
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".newsdesk")
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.feed.base_url.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "feed.base_url must not be empty".into(),
            ));
        }

        if self.feed.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "feed.timeout_secs must be at least 1".into(),
            ));
        }

        if self.archive.directory.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "archive.directory must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Generate a default config TOML string.
    pub fn default_toml() -> String {
        toml::to_string_pretty(&Self::default()).unwrap_or_default()
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable() {
        let config = AppConfig::default();
        assert!(config.feed.base_url.starts_with("https://"));
        assert_eq!(config.feed.timeout_secs, 15);
        assert_eq!(config.archive.directory, "archives");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn toml_round_trip() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.feed.base_url, config.feed.base_url);
        assert_eq!(parsed.archive.directory, config.archive.directory);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
            [feed]
            base_url = "https://feeds.example.org/rss"
        "#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.feed.base_url, "https://feeds.example.org/rss");
        assert_eq!(config.feed.timeout_secs, 15);
        assert_eq!(config.archive.directory, "archives");
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.archive.directory, "archives");
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "feed = not toml").unwrap();
        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn zero_timeout_rejected() {
        let toml_str = r#"
            [feed]
            timeout_secs = 0
        "#;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, toml_str).unwrap();
        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn default_toml_parses_back() {
        let s = AppConfig::default_toml();
        let parsed: AppConfig = toml::from_str(&s).unwrap();
        assert!(parsed.validate().is_ok());
    }
}
