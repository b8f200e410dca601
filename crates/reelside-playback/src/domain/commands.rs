//! Commands for the playback context.
//!
//! Every external stimulus the state machine reacts to is a command;
//! applying them one at a time is what serializes all transitions.

use crate::domain::cursor::MediaTicket;

/// An input to the playback state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaybackCommand {
    /// The active story's media reported its first displayable frame.
    /// For video, the intrinsic duration in milliseconds if known.
    MediaReady {
        /// Ticket issued with the cursor this signal answers.
        ticket: MediaTicket,
        /// Intrinsic media duration, when the decoder knows it.
        intrinsic_duration_ms: Option<f64>,
    },
    /// Video playback reached its natural end.
    MediaFinished {
        /// Ticket issued with the cursor this signal answers.
        ticket: MediaTicket,
    },
    /// One fixed-period progress tick.
    Tick {
        /// Ticket current when the tick was scheduled.
        ticket: MediaTicket,
    },
    /// Manual navigation to the next story.
    TapNext,
    /// Manual navigation to the previous story.
    TapPrevious,
    /// Press-and-hold began.
    HoldStart,
    /// Press-and-hold ended.
    HoldEnd,
    /// Explicit user dismissal of the viewer.
    Dismiss,
}

impl PlaybackCommand {
    /// The type name for this command (for logging).
    #[must_use]
    pub fn command_type(&self) -> &'static str {
        match self {
            Self::MediaReady { .. } => "playback.media_ready",
            Self::MediaFinished { .. } => "playback.media_finished",
            Self::Tick { .. } => "playback.tick",
            Self::TapNext => "playback.tap_next",
            Self::TapPrevious => "playback.tap_previous",
            Self::HoldStart => "playback.hold_start",
            Self::HoldEnd => "playback.hold_end",
            Self::Dismiss => "playback.dismiss",
        }
    }
}
