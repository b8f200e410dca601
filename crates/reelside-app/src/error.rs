//! Application error types.

use reelside_core::error::DomainError;
use thiserror::Error;

/// Startup and runtime errors for the demo application.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// A playback-side failure while opening or driving a session.
    #[error("playback error: {0}")]
    Playback(#[from] DomainError),
}
