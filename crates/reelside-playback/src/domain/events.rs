//! Events emitted by a playback session.
//!
//! Collaborators (renderer, shell, hosting surface) observe the session
//! exclusively through these. Each event is stamped with the session id
//! and the injected clock's time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::cursor::{MediaTicket, PlaybackCursor, PlaybackStatus};

/// Event type identifier for [`PlaybackEventKind::CursorMoved`].
pub const CURSOR_MOVED_EVENT_TYPE: &str = "playback.cursor_moved";

/// Event type identifier for [`PlaybackEventKind::StatusChanged`].
pub const STATUS_CHANGED_EVENT_TYPE: &str = "playback.status_changed";

/// Event type identifier for [`PlaybackEventKind::ProgressChanged`].
pub const PROGRESS_CHANGED_EVENT_TYPE: &str = "playback.progress_changed";

/// Event type identifier for [`PlaybackEventKind::Closed`].
pub const CLOSED_EVENT_TYPE: &str = "playback.closed";

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CloseReason {
    /// The last story of the last reel completed.
    Exhausted,
    /// The user dismissed the viewer.
    Dismissed,
}

/// Event payload variants for the playback context.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PlaybackEventKind {
    /// The cursor moved (or was set at open). The ticket is the one
    /// media signals for this story must echo back.
    CursorMoved {
        /// The new cursor.
        cursor: PlaybackCursor,
        /// Ticket for the new cursor.
        ticket: MediaTicket,
    },
    /// The lifecycle status changed.
    StatusChanged {
        /// The new status.
        status: PlaybackStatus,
    },
    /// The progress percentage changed.
    ProgressChanged {
        /// Progress within `[0, 100]`.
        progress_pct: f64,
    },
    /// The session ended. Terminal; nothing follows it.
    Closed {
        /// Why the session ended.
        reason: CloseReason,
    },
}

impl PlaybackEventKind {
    /// The type name for this event (for logging and routing).
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::CursorMoved { .. } => CURSOR_MOVED_EVENT_TYPE,
            Self::StatusChanged { .. } => STATUS_CHANGED_EVENT_TYPE,
            Self::ProgressChanged { .. } => PROGRESS_CHANGED_EVENT_TYPE,
            Self::Closed { .. } => CLOSED_EVENT_TYPE,
        }
    }
}

/// Event envelope for the playback context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionEvent {
    /// The session this event belongs to.
    pub session_id: Uuid,
    /// Timestamp of event creation.
    pub occurred_at: DateTime<Utc>,
    /// Event-specific payload.
    pub kind: PlaybackEventKind,
}
