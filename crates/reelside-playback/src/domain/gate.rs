//! Media readiness gate.
//!
//! Decouples "the cursor points at a story" from "that story's media is
//! displayable", and reconciles readiness with hold-to-pause intent: a
//! hold that begins while still loading is remembered and applied the
//! moment loading completes.

use crate::domain::cursor::PlaybackStatus;

/// Gate state for the active cursor.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadinessGate {
    ready: bool,
    hold_down: bool,
}

impl ReadinessGate {
    /// Creates a gate with no readiness and no hold.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-arms for a new cursor. The physical hold, if any, persists
    /// across cursor changes; readiness does not.
    pub fn rearm(&mut self) {
        self.ready = false;
    }

    /// Records the ready signal for the active cursor.
    ///
    /// Returns the status playback should enter, or `None` when the
    /// cursor was already ready (the signal arrives exactly once per
    /// cursor; duplicates are dropped here).
    pub fn media_ready(&mut self) -> Option<PlaybackStatus> {
        if self.ready {
            return None;
        }
        self.ready = true;
        Some(if self.hold_down {
            PlaybackStatus::Paused
        } else {
            PlaybackStatus::Playing
        })
    }

    /// Records the start of a hold. Returns `true` when this is a new
    /// hold rather than a repeat.
    pub fn hold_start(&mut self) -> bool {
        let newly_held = !self.hold_down;
        self.hold_down = true;
        newly_held
    }

    /// Records the end of a hold. Returns `true` when a hold was down.
    pub fn hold_end(&mut self) -> bool {
        let was_held = self.hold_down;
        self.hold_down = false;
        was_held
    }

    /// Whether the active cursor's media has reported ready.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Whether a hold is currently down.
    #[must_use]
    pub fn is_held(&self) -> bool {
        self.hold_down
    }
}
