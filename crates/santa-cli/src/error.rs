//! Error types for the draw command.

use thiserror::Error;

/// Result type for draw command operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading input, drawing, or notifying.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON participant file
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed line in a text participant file
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// Invalid record in a JSON participant file (1-based position)
    #[error("record {index}: {reason}")]
    Record { index: usize, reason: String },

    /// Invalid interactive input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Registry rejected the participants
    #[error(transparent)]
    Registry(#[from] santa_registry::Error),

    /// The draw failed
    #[error(transparent)]
    Engine(#[from] santa_engine::Error),

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// A notification could not be delivered
    #[error("Notification error: {0}")]
    Notify(String),
}
