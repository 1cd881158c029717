//! Error types for the PRNG engine
//!
//! Every failure is fatal and surfaces before any value is drawn. Once a
//! [`RandomNumberDevice`](crate::RandomNumberDevice) exists, drawing from it
//! cannot fail.

use thiserror::Error;

/// Coarse classification of a [`PrngError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid state size, empty seed, unknown value kind, inconsistent state
    Config,
    /// Malformed, duplicate, unknown or missing `key=value` argument
    ArgumentFormat,
    /// A value could not be parsed
    Parse,
    /// Checkpoint integrity check failed
    Checkpoint,
    /// Underlying writer failed
    Io,
}

/// Errors raised while configuring, constructing or restoring a generator
#[derive(Debug, Error)]
pub enum PrngError {
    #[error("Invalid config: state size {size} must be a multiple of {block} and greater than {block}")]
    InvalidStateSize { size: usize, block: usize },

    #[error("Invalid config: seed must contain at least one byte")]
    EmptySeed,

    #[error("Invalid config: unknown value kind '{0}' (expected 'u64' or 'f64')")]
    UnknownValueKind(String),

    #[error("Invalid config: inconsistent generator state: {0}")]
    InconsistentState(String),

    #[error("Malformed argument '{0}': expected key=value")]
    MalformedArgument(String),

    #[error("Duplicate argument key '{0}'")]
    DuplicateKey(String),

    #[error("Unknown argument key '{0}'")]
    UnknownKey(String),

    #[error("Missing required argument '{0}'")]
    MissingKey(&'static str),

    #[error("Failed to parse {key} value '{value}'")]
    Parse { key: String, value: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Checkpoint error: {0}")]
    Checkpoint(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PrngError {
    /// Which error family this belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            PrngError::InvalidStateSize { .. }
            | PrngError::EmptySeed
            | PrngError::UnknownValueKind(_)
            | PrngError::InconsistentState(_) => ErrorKind::Config,
            PrngError::MalformedArgument(_)
            | PrngError::DuplicateKey(_)
            | PrngError::UnknownKey(_)
            | PrngError::MissingKey(_) => ErrorKind::ArgumentFormat,
            PrngError::Parse { .. } | PrngError::Json(_) => ErrorKind::Parse,
            PrngError::Checkpoint(_) => ErrorKind::Checkpoint,
            PrngError::Io(_) => ErrorKind::Io,
        }
    }

    pub(crate) fn parse(key: &str, value: &str) -> Self {
        PrngError::Parse {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}
