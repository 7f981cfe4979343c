//! Configuration module for veloscope
//!
//! Manages the bucket location, the horoscope date format and logging.
//! Configuration is stored in the user's config directory and created with
//! defaults on first load.

use crate::horoscope::DateFormat;
use crate::remote::DEFAULT_BASE_URL;
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct VeloscopeConfig {
    /// Base URL of the bucket holding `uci_riders.json` and `horoscope/`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Date segment format of horoscope paths
    #[serde(default)]
    pub date_format: DateFormat,

    /// Request timeout in seconds; unset means requests never time out
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Default log filter when `VELOSCOPE_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Skip the remote rider list and use the bundled snapshot
    #[serde(default)]
    pub offline: bool,
}

impl Default for VeloscopeConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            date_format: DateFormat::default(),
            request_timeout_secs: None,
            log_level: default_log_level(),
            offline: false,
        }
    }
}

impl VeloscopeConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("veloscope").join("config.toml"))
    }

    /// Load configuration from the default location, creating it if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, writing defaults there if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or created.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let default_config = Self::default();
            default_config.save_to(path)?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Request timeout, if one is configured
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = VeloscopeConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.date_format, DateFormat::Padded);
        assert!(config.request_timeout().is_none());
        assert!(!config.offline);
    }

    #[test]
    fn test_load_creates_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = VeloscopeConfig::load_from(&path).unwrap();
        assert_eq!(config, VeloscopeConfig::default());
        assert!(path.exists());
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let config = VeloscopeConfig {
            base_url: "https://mirror.test".to_string(),
            date_format: DateFormat::Unpadded,
            request_timeout_secs: Some(10),
            log_level: "debug".to_string(),
            offline: true,
        };
        config.save_to(&path).unwrap();

        let loaded = VeloscopeConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.request_timeout(), Some(Duration::from_secs(10)));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "date_format = \"unpadded\"\n").unwrap();

        let loaded = VeloscopeConfig::load_from(&path).unwrap();
        assert_eq!(loaded.date_format, DateFormat::Unpadded);
        assert_eq!(loaded.base_url, DEFAULT_BASE_URL);
        assert_eq!(loaded.log_level, "info");
    }

    #[test]
    fn test_invalid_date_format_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "date_format = \"iso\"\n").unwrap();

        assert!(VeloscopeConfig::load_from(&path).is_err());
    }
}
