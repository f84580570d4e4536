//! Result type for secondary actions whose failure must not affect the primary one.
//!
//! Thread deletion, audit message updates, embed re-renders and source-message cleanup
//! are best effort: the store change they follow is never rolled back. Failures are
//! logged when the outcome is recorded and then returned as data so callers (and tests)
//! can see what happened without having to propagate anything.

use std::fmt::Display;


/// Outcome of a best-effort action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BestEffort {
    /// The action completed.
    Done,
    /// The action failed; the reason has already been logged.
    Failed(String),
}

impl BestEffort {
    /// Records the outcome of `result`, logging failures under `action`.
    ///
    /// # Arguments
    /// - `action` - Short description used in the log line (e.g. "delete thread 123")
    /// - `result` - Result of the attempted action
    ///
    /// # Returns
    /// - `BestEffort::Done` for `Ok`, `BestEffort::Failed` carrying the error text otherwise
    pub fn record<T, E: Display>(action: &str, result: Result<T, E>) -> Self {
        match result {
            Ok(_) => Self::Done,
            Err(e) => {
                tracing::error!("Best-effort action failed ({}): {}", action, e);
                Self::Failed(e.to_string())
            }
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}
