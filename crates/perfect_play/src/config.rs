//! Runtime configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use perfect_tictactoe::{DEFAULT_BOARD_SIZE, Engine, MAX_BOARD_SIZE, Player, Scoring};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "perfect_play.toml";

/// Number of self-play games when neither the file nor the CLI says otherwise.
pub const DEFAULT_SELF_PLAY_GAMES: usize = 1000;

/// Settings shared by interactive play and self-play.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[serde(default)]
#[setters(prefix = "with_")]
pub struct PlayConfig {
    /// Side length of the board.
    board_size: usize,

    /// Symbol the human plays; prompted for when absent.
    human_symbol: Option<Player>,

    /// Games played by `self-play` when no count is given.
    self_play_games: usize,

    /// Terminal score constants for the engine.
    scoring: Scoring,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            human_symbol: None,
            self_play_games: DEFAULT_SELF_PLAY_GAMES,
            scoring: Scoring::default(),
        }
    }
}

impl PlayConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(board_size = config.board_size, "Config loaded successfully");
        Ok(config)
    }

    /// Resolves the configuration for this run.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// read if present, and the built-in defaults are used otherwise.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Checks the board size and the scoring constants.
    #[instrument(skip(self), fields(board_size = self.board_size))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::new(format!(
                "board_size must be between 1 and {}, got {}",
                MAX_BOARD_SIZE, self.board_size
            )));
        }
        self.scoring
            .validate(self.board_size * self.board_size)
            .map_err(|e| ConfigError::new(e.to_string()))
    }

    /// Builds an engine with the configured scoring.
    pub fn engine(&self) -> Engine {
        Engine::with_scoring(self.scoring)
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
    /// Creates a new configuration error at the caller's location.
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
