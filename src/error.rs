use std::path::PathBuf;

/// Errors from attempting an illegal move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("the game is already over")]
    GameOver,

    #[error("cell {0} is out of range (expected 0-8)")]
    OutOfRange(usize),

    #[error("cell {0} is already occupied")]
    CellOccupied(usize),
}

/// Errors from navigating the move history.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HistoryError {
    #[error("move index {index} is out of range (history has {len} snapshots)")]
    OutOfRange { index: usize, len: usize },
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
