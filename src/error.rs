//! Error types for the board, the game session and configuration loading

use std::path::PathBuf;

/// Errors raised by board reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// Placement on a cell that is not `Empty` (a stone or the margin).
    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: i32, col: i32 },

    /// Coordinate outside the allocated padded grid.
    #[error("cell ({row}, {col}) lies outside the padded grid")]
    OutOfBoundsAccess { row: i32, col: i32 },
}

/// Errors returned by the game session when a human move is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("it is not the human's turn")]
    NotHumanTurn,

    #[error("the round is over")]
    RoundOver,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
