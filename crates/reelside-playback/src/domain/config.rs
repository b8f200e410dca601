//! Playback timing configuration.

use std::time::Duration;

use reelside_core::error::DomainError;

/// Reference tick period.
pub const DEFAULT_TICK_MS: u64 = 50;

/// Reference display duration for images and unknown-length media.
pub const DEFAULT_STORY_DURATION_MS: f64 = 5000.0;

/// Timing parameters for a playback session.
#[derive(Debug, Clone, Copy)]
pub struct PlaybackConfig {
    tick_ms: u64,
    default_story_duration_ms: f64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_MS,
            default_story_duration_ms: DEFAULT_STORY_DURATION_MS,
        }
    }
}

impl PlaybackConfig {
    /// Creates a configuration with the given tick period and default
    /// story duration, both in milliseconds.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when the tick is zero or the
    /// default duration is not a finite positive number.
    pub fn new(tick_ms: u64, default_story_duration_ms: f64) -> Result<Self, DomainError> {
        if tick_ms == 0 {
            return Err(DomainError::Validation("tick period must be non-zero".into()));
        }
        if !default_story_duration_ms.is_finite() || default_story_duration_ms <= 0.0 {
            return Err(DomainError::Validation(
                "default story duration must be a finite positive number".into(),
            ));
        }
        Ok(Self {
            tick_ms,
            default_story_duration_ms,
        })
    }

    /// Tick period in milliseconds.
    #[must_use]
    pub fn tick_ms(&self) -> u64 {
        self.tick_ms
    }

    /// Tick period as a [`Duration`].
    #[must_use]
    pub fn tick_duration(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Default story duration in milliseconds.
    #[must_use]
    pub fn default_story_duration_ms(&self) -> f64 {
        self.default_story_duration_ms
    }
}
