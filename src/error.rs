use std::path::PathBuf;

/// Rejected move. None of these are fatal; the caller reports them and waits
/// for another column.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("column {0} is off the board")]
    InvalidColumn(usize),
}

/// Errors building players from setup values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("player {0} needs a name")]
    EmptyName(u8),

    #[error("player mode must be 0 (human) or 1-3 (bot difficulty), got {0}")]
    InvalidMode(u8),
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

    #[error("invalid player setup: {0}")]
    Setup(#[from] SetupError),
}
