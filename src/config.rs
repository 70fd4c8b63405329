//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Config file read when no `--config` is given.
pub const DEFAULT_CONFIG_PATH: &str = "rewind_tictactoe.toml";

/// Settings for the terminal front end.
///
/// The game itself has no configuration; everything here concerns how the
/// session is presented and logged.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// File that receives log output (the terminal is owned by the UI).
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// `tracing` filter directive used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Ring the terminal bell when a game is won.
    #[serde(default = "default_bell_on_win")]
    bell_on_win: bool,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("rewind_tictactoe.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_bell_on_win() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            bell_on_win: default_bell_on_win(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text. Missing keys take defaults.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(log_file = %config.log_file.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Resolves the configuration for a run.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_PATH`] is
    /// read if present and defaults are used otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(DEFAULT_CONFIG_PATH)
            }
            None => Ok(Self::default()),
        }
    }

    /// Replaces the log file, e.g. from a command-line override.
    pub fn with_log_file(mut self, log_file: PathBuf) -> Self {
        self.log_file = log_file;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(*config.bell_on_win());
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config = AppConfig::from_toml("bell_on_win = false\nlog_filter = \"debug\"").unwrap();
        assert!(!*config.bell_on_win());
        assert_eq!(config.log_filter(), "debug");
        assert_eq!(config.log_file(), &default_log_file());
    }

    #[test]
    fn test_bad_toml_is_config_error() {
        let err = AppConfig::from_toml("bell_on_win = \"loud\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
        assert!(err.to_string().starts_with("Config error:"));
    }
}
