//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A cursor position outside the collection bounds.
    #[error("position out of bounds: user {user_index}, story {story_index}")]
    OutOfBounds {
        /// The offending reel index.
        user_index: usize,
        /// The offending story index within the reel.
        story_index: usize,
    },

    /// A validation error in domain logic.
    #[error("validation error: {0}")]
    Validation(String),

    /// An infrastructure error (IO, channels, task plumbing).
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
