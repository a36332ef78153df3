//! Configuration management for newsfeed.
//!
//! Configuration is read from `~/.config/newsfeed/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is created.

pub mod http;
pub mod sections;

pub use http::HttpConfig;
pub use sections::{is_known_section, SECTIONS};

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::domain::query::RECENT;

pub const DEFAULT_BASE_URL: &str = "https://content.guardianapis.com/search";

/// Main configuration struct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub http: HttpConfig,
    pub feed: FeedConfig,
}

/// Search endpoint and the static parameters sent with every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: String,
    /// Value of the `show-fields` parameter
    pub show_fields: String,
    /// Value of the `show-tags` parameter
    pub show_tags: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: "test".to_string(),
            show_fields: "all".to_string(),
            show_tags: "contributor".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Initial category; `recent` means no section filter
    pub category: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            category: RECENT.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, creates a default one with comments.
    /// If the config file exists but is invalid, returns an error.
    /// Missing fields in the config file will use default values.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit file. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        if !is_known_section(&config.feed.category) {
            warn!(
                "Configured category {:?} is not a known section; using it as-is",
                config.feed.category
            );
        }

        Ok(config)
    }

    /// Get the default config file path: `~/.config/newsfeed/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("newsfeed").join("config.toml"))
    }

    /// Create a default config file with comments.
    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        file.write_all(Self::default_config_content().as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    /// Generate the default config file content with comments.
    fn default_config_content() -> String {
        r##"# newsfeed configuration

[api]
# Search endpoint
base_url = "https://content.guardianapis.com/search"

# API key; "test" is the public developer key with a low rate limit
api_key = "test"

# Expansion parameters sent with every request
show_fields = "all"
show_tags = "contributor"

[http]
# Connection timeout in milliseconds
connect_timeout_ms = 15000

# Read timeout in milliseconds
read_timeout_ms = 10000

[feed]
# Category shown on startup. "recent" shows the newest articles from every
# section; run `newsfeed sections` for the known section names.
category = "recent"
"##
        .to_string()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_deserializes() {
        let content = Config::default_config_content();
        let config: Config = toml::from_str(&content).expect("Default config should be valid TOML");

        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.http.connect_timeout_ms, 15_000);
        assert_eq!(config.http.read_timeout_ms, 10_000);
        assert_eq!(config.feed.category, "recent");
    }

    #[test]
    fn test_partial_config() {
        let content = r##"
[feed]
category = "sport"
"##;
        let config: Config = toml::from_str(content).expect("Partial config should work");

        assert_eq!(config.feed.category, "sport");
        assert_eq!(config.api, ApiConfig::default());
        assert_eq!(config.http, HttpConfig::default());
    }

    #[test]
    fn test_empty_config() {
        let config: Config = toml::from_str("").expect("Empty config should work");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[api]\napi_key = \"secret\"\n[http]\nread_timeout_ms = 500\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.api.api_key, "secret");
        assert_eq!(config.http.read_timeout_ms, 500);
        assert_eq!(config.http.connect_timeout_ms, 15_000);
    }

    #[test]
    fn test_load_from_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[feed\ncategory = ").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_create_default_config_writes_loadable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        Config::create_default_config(&path).unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
    }
}
