//! Error types for the participant registry.

use thiserror::Error;

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or validating a registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Two participants share a name.
    #[error("duplicate participant name: {0}")]
    DuplicateName(String),

    /// An exclusion names a participant that is not registered.
    #[error("participant {participant} excludes unknown participant {excluded}")]
    UnknownExclusion {
        participant: String,
        excluded: String,
    },

    /// The participant being modified is not registered.
    #[error("unknown participant: {0}")]
    UnknownParticipant(String),
}
