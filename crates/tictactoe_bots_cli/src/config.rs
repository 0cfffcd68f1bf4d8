//! Game configuration for the terminal front end.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_bots::{Player, Strategy};
use tracing::{debug, info, instrument};

/// Settings for an interactive game.
///
/// Every field is optional in the TOML file; missing ones take the defaults
/// below. Command-line flags are applied on top with [`GameConfig::overridden`].
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Mark the human plays; the bot takes the other.
    human_mark: Player,

    /// Strategy the bot searches with.
    strategy: Strategy,

    /// Pause before the bot's move is applied, in milliseconds.
    bot_delay_ms: u64,

    /// Seed for all randomness; drawn from the OS when absent.
    seed: Option<u64>,

    /// Where logs are written while the board owns the terminal.
    log_file: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human_mark: Player::X,
            strategy: Strategy::Minimax,
            bot_delay_ms: 500,
            seed: None,
            log_file: PathBuf::from("tictactoe_bots.log"),
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(strategy = %config.strategy, human = %config.human_mark, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Mark the bot plays.
    pub fn bot_mark(&self) -> Player {
        self.human_mark.opponent()
    }

    /// Replaces each setting for which a value is given.
    pub fn overridden(
        mut self,
        human_mark: Option<Player>,
        strategy: Option<Strategy>,
        bot_delay_ms: Option<u64>,
        seed: Option<u64>,
        log_file: Option<PathBuf>,
    ) -> Self {
        if let Some(mark) = human_mark {
            self.human_mark = mark;
        }
        if let Some(strategy) = strategy {
            self.strategy = strategy;
        }
        if let Some(delay) = bot_delay_ms {
            self.bot_delay_ms = delay;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        if let Some(path) = log_file {
            self.log_file = path;
        }
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
