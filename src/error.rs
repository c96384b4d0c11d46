use std::path::PathBuf;

/// Errors that can occur when reading a turn from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseTurnError {
    #[error("empty turn text")]
    Empty,

    #[error("unknown player symbol '{0}'")]
    UnknownPlayer(String),

    #[error("malformed move token '{0}' (expected a letter followed by a digit)")]
    MalformedToken(String),

    #[error("unknown source letter '{0}'")]
    UnknownSource(char),

    #[error("distance '{0}' is not a die face (1-6)")]
    BadDistance(char),

    #[error("a turn holds at most {max} moves")]
    TooManyMoves { max: u32 },
}

/// Errors that can occur when building a roll from die values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RollError {
    #[error("die value {0} is outside 1-6")]
    InvalidDie(u8),
}

/// Errors that can occur when applying a turn to a game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("the game is already over")]
    GameOver,

    #[error("turn belongs to {got} but {expected} is on move")]
    WrongPlayer { expected: char, got: char },

    #[error("turn {turn} is not legal for roll {roll}")]
    IllegalTurn { turn: String, roll: String },
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
