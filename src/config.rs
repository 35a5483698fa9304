//! Game configuration: TOML file, environment and command-line overrides.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Environment variable overriding the result log path.
pub const LOG_PATH_ENV: &str = "NOUGHTS_LOG_PATH";

/// Settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Where match outcomes are appended.
    log_path: PathBuf,

    /// Seed for the random opponent; drawn from the OS when absent.
    opponent_seed: Option<u64>,

    /// Display name of the X player.
    human_name: String,

    /// Display name of the random opponent.
    opponent_name: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from("game_results.csv"),
            opponent_seed: None,
            human_name: "Human".to_string(),
            opponent_name: "Computer".to_string(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(log_path = %config.log_path.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file exists but is invalid.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies `NOUGHTS_LOG_PATH` if set.
    pub fn with_env_overrides(self) -> Self {
        match std::env::var_os(LOG_PATH_ENV) {
            Some(path) if !path.is_empty() => {
                debug!(env = LOG_PATH_ENV, "Log path overridden from environment");
                self.with_log_path(path)
            }
            _ => self,
        }
    }

    /// Replaces the result log path.
    pub fn with_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = path.into();
        self
    }

    /// Replaces the opponent seed.
    pub fn with_opponent_seed(mut self, seed: u64) -> Self {
        self.opponent_seed = Some(seed);
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
