//! Game configuration, loadable from TOML

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::MAX_RUN_LENGTH;
use crate::error::ConfigError;

/// Largest supported board side. Keeps the GUI grid legible.
pub const MAX_BOARD_SIDE: usize = 99;

/// Board dimensions, bot pacing and random seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Interior rows
    pub rows: usize,
    /// Interior columns
    pub cols: usize,
    /// Out-of-bounds margin on the high-index side
    pub padding: usize,
    /// How long the bot "thinks" before moving, in milliseconds
    pub bot_delay_ms: u64,
    /// Seed for the engine's random source. `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Whether the engine opens each round
    pub engine_first: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 25,
            cols: 25,
            padding: MAX_RUN_LENGTH - 1,
            bot_delay_ms: 1000,
            seed: None,
            engine_first: true,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate all fields.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::Validation(
                "board must have at least one row and one column".into(),
            ));
        }
        if self.rows > MAX_BOARD_SIDE || self.cols > MAX_BOARD_SIDE {
            return Err(ConfigError::Validation(format!(
                "board sides must be <= {MAX_BOARD_SIDE}, got {}x{}",
                self.rows, self.cols
            )));
        }
        if self.padding < MAX_RUN_LENGTH - 1 {
            return Err(ConfigError::Validation(format!(
                "padding must be >= {}, got {}",
                MAX_RUN_LENGTH - 1,
                self.padding
            )));
        }
        Ok(())
    }
}
