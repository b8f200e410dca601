//! Timer/progress engine.
//!
//! Advances a percentage on a fixed tick and resolves the per-story
//! duration. The engine never touches media controls; it only owns the
//! progress value.

use reelside_collection::domain::model::MediaKind;

/// Result of applying one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Progress advanced to this percentage.
    Advanced(f64),
    /// Progress reached completion; the caller decides what comes next.
    Completed,
}

/// Resolves the active display duration for a story.
///
/// A video with a finite, strictly positive intrinsic duration uses it;
/// everything else (images, unknown or degenerate durations) falls back
/// to `default_ms`. Division by zero and runaway progress are impossible
/// by construction.
#[must_use]
pub fn resolve_duration_ms(kind: MediaKind, intrinsic_ms: Option<f64>, default_ms: f64) -> f64 {
    match kind {
        MediaKind::Video => intrinsic_ms
            .filter(|duration| duration.is_finite() && *duration > 0.0)
            .unwrap_or(default_ms),
        MediaKind::Image => default_ms,
    }
}

/// Owns the progress percentage for the active story.
#[derive(Debug, Clone, Copy)]
pub struct ProgressEngine {
    progress_pct: f64,
    active_duration_ms: Option<f64>,
}

impl ProgressEngine {
    /// Creates an engine at zero progress with no armed duration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            progress_pct: 0.0,
            active_duration_ms: None,
        }
    }

    /// Current progress within `[0, 100]`.
    #[must_use]
    pub fn progress_pct(&self) -> f64 {
        self.progress_pct
    }

    /// Arms the engine with the duration resolved at playback start.
    pub fn arm(&mut self, duration_ms: f64) {
        self.active_duration_ms = Some(duration_ms);
    }

    /// Resets to zero progress and disarms. Called on every cursor change.
    pub fn reset(&mut self) {
        self.progress_pct = 0.0;
        self.active_duration_ms = None;
    }

    /// Applies one tick of `tick_ms` milliseconds.
    ///
    /// An unarmed engine does not advance. Progress is clamped so the
    /// reported value never exceeds 100.
    pub fn advance(&mut self, tick_ms: u64) -> TickOutcome {
        let Some(duration_ms) = self.active_duration_ms else {
            return TickOutcome::Advanced(self.progress_pct);
        };

        #[allow(clippy::cast_precision_loss)]
        let increment = tick_ms as f64 / duration_ms * 100.0;
        let advanced = self.progress_pct + increment;
        if advanced >= 100.0 {
            self.progress_pct = 100.0;
            return TickOutcome::Completed;
        }

        self.progress_pct = advanced;
        TickOutcome::Advanced(advanced)
    }
}

impl Default for ProgressEngine {
    fn default() -> Self {
        Self::new()
    }
}
