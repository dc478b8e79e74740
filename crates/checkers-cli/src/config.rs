//! Configuration file loading.
//!
//! Settings come from a TOML file, `checkers.toml` in the current directory
//! unless `--config` names another one. A missing file means defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Names shown for the two sides.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct PlayersConfig {
    #[serde(default = "default_black")]
    pub black: String,
    #[serde(default = "default_red")]
    pub red: String,
}

fn default_black() -> String {
    "Black".to_string()
}

fn default_red() -> String {
    "Red".to_string()
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            black: default_black(),
            red: default_red(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CliConfig {
    #[serde(default)]
    pub players: PlayersConfig,
    /// Log filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            players: PlayersConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl CliConfig {
    pub fn default_path() -> PathBuf {
        PathBuf::from("checkers.toml")
    }

    /// Loads the configuration at `path`, or the defaults if the file does
    /// not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }
}
