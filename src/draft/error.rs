// Error taxonomy for the draft engine.
//
// Every error is recoverable: a rejected operation leaves the engine
// untouched, and the host decides how to surface the message.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    /// A registration name was empty or whitespace-only.
    #[error("{field} name must not be empty")]
    Validation { field: &'static str },

    /// A registration name collided with an existing entry of the same kind.
    #[error("{kind} name already exists: '{name}'")]
    DuplicateName { kind: &'static str, name: String },

    /// An operation was attempted in a phase (or under counts) that does not
    /// permit it, e.g. `start_draft` with fewer than 2 teams.
    #[error("precondition not met: {message}")]
    Precondition { message: String },

    /// Quota calculation was invoked with zero teams. Unreachable behind the
    /// `start_draft` precondition, but checked rather than dividing by zero.
    #[error("configuration error: {message}")]
    Configuration { message: String },
}

impl DraftError {
    /// Shorthand for a `Precondition` error with a formatted message.
    pub fn precondition(message: impl Into<String>) -> Self {
        DraftError::Precondition {
            message: message.into(),
        }
    }
}
