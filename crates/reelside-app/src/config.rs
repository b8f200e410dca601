//! Environment configuration.

use std::path::PathBuf;

use reelside_playback::domain::config::{
    DEFAULT_STORY_DURATION_MS, DEFAULT_TICK_MS, PlaybackConfig,
};

use crate::error::AppError;

/// Runtime configuration for the demo application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path of the stories feed document.
    pub stories_path: PathBuf,
    /// Reel index the viewer opens at.
    pub open_index: usize,
    /// Timing parameters for the playback session.
    pub playback: PlaybackConfig,
}

impl AppConfig {
    /// Reads configuration from the environment: `STORIES_PATH`,
    /// `OPEN_INDEX`, `TICK_MS`, and `STORY_DURATION_MS`, each with a
    /// sensible default.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` when a variable is present but not
    /// parseable.
    pub fn from_env() -> Result<Self, AppError> {
        let stories_path = std::env::var("STORIES_PATH")
            .map_or_else(|_| PathBuf::from("assets/stories.json"), PathBuf::from);

        let open_index: usize = std::env::var("OPEN_INDEX")
            .unwrap_or_else(|_| "0".to_string())
            .parse()
            .map_err(|e| AppError::Config(format!("OPEN_INDEX must be a valid index: {e}")))?;

        let tick_ms: u64 = std::env::var("TICK_MS")
            .unwrap_or_else(|_| DEFAULT_TICK_MS.to_string())
            .parse()
            .map_err(|e| AppError::Config(format!("TICK_MS must be a valid duration: {e}")))?;

        let story_duration_ms: f64 = std::env::var("STORY_DURATION_MS")
            .unwrap_or_else(|_| DEFAULT_STORY_DURATION_MS.to_string())
            .parse()
            .map_err(|e| {
                AppError::Config(format!("STORY_DURATION_MS must be a valid duration: {e}"))
            })?;

        let playback = PlaybackConfig::new(tick_ms, story_duration_ms)
            .map_err(|e| AppError::Config(e.to_string()))?;

        Ok(Self {
            stories_path,
            open_index,
            playback,
        })
    }
}
