//! Engine configuration.

/// Default number of full restarts before giving up.
///
/// Groups are small and most random orders succeed on the first try, so
/// this is generous.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// Configuration for [`AssignmentEngine`](crate::AssignmentEngine).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Maximum draw attempts; each attempt restarts from an empty assignment
    pub max_attempts: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl EngineConfig {
    /// Set the retry budget.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }
}
