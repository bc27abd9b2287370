use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("config watch error: {0}")]
    WatchError(String),
}

/// Errors raised by the search-and-disambiguation engine.
///
/// `Pattern` is recoverable (the keystroke simply yields no matches);
/// `InvalidCount` and `LabelSpaceOverflow` are contract violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("invalid search pattern: {0}")]
    Pattern(String),

    #[error("label count must be at least 1, got {0}")]
    InvalidCount(usize),

    #[error("cannot enumerate labels of length {length} over {alphabet} symbols")]
    LabelSpaceOverflow { alphabet: usize, length: u32 },
}

#[derive(Debug, thiserror::Error)]
pub enum CharJumpError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
