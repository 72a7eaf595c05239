//! Error types for santa-engine.

use thiserror::Error;

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while drawing an assignment.
///
/// The engine never returns a partial assignment; every failure is one of
/// these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The registry failed validation before any draw was attempted.
    #[error(transparent)]
    Registry(#[from] santa_registry::Error),

    /// No valid assignment exists, or none was found within the retry budget.
    #[error("infeasible assignment: {0}")]
    InfeasibleAssignment(#[from] Infeasibility),

    /// A completed draw failed final verification.
    #[error("assignment invariant violated: {0}")]
    InvariantViolation(#[from] Violation),
}

/// Why no assignment could be produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Infeasibility {
    /// Fewer than two participants can never form a derangement.
    #[error("at least two participants are required, got {count}")]
    TooFewParticipants { count: usize },

    /// A participant's exclusions cover everybody else.
    #[error("{name} has no possible recipient")]
    NoPossibleRecipient { name: String },

    /// Every other participant excludes this one.
    #[error("nobody may give a gift to {name}")]
    NoPossibleAssignor { name: String },

    /// Every attempt ran into a dead end.
    #[error("no valid assignment found in {attempts} attempts")]
    RetryBudgetExhausted { attempts: usize },
}

/// A broken assignment invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// Pair count differs from participant count.
    #[error("expected {expected} pairs, got {actual}")]
    WrongSize { expected: usize, actual: usize },

    /// A pair references a participant outside the registry.
    #[error("unknown participant {0}")]
    UnknownParticipant(String),

    /// A participant appears twice as assignor.
    #[error("{0} is assigned twice")]
    DuplicateAssignor(String),

    /// A participant appears twice as recipient.
    #[error("{0} receives twice")]
    DuplicateRecipient(String),

    /// A participant was assigned to themself.
    #[error("{0} is assigned to themself")]
    SelfAssignment(String),

    /// A pair matches a declared exclusion.
    #[error("{assignor} excludes {recipient}")]
    ExcludedRecipient { assignor: String, recipient: String },
}
