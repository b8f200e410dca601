//! Cursor, status, and the per-cursor media ticket.

use serde::{Deserialize, Serialize};

/// The (reel, story) pair identifying the currently displayed story.
///
/// Both indices are valid positions in the collection whenever a session
/// is open; a closed session has no cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackCursor {
    /// Index of the reel within the collection.
    pub user_index: usize,
    /// Index of the story within the reel.
    pub story_index: usize,
}

impl PlaybackCursor {
    /// Creates a cursor at `(user_index, story_index)`.
    #[must_use]
    pub fn new(user_index: usize, story_index: usize) -> Self {
        Self {
            user_index,
            story_index,
        }
    }

    /// Cursor at the first story of the given reel.
    #[must_use]
    pub fn reel_start(user_index: usize) -> Self {
        Self::new(user_index, 0)
    }
}

/// Lifecycle status of the active story.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackStatus {
    /// Media is not yet displayable; the timer is held off.
    Loading,
    /// Progress is advancing on the tick.
    Playing,
    /// Progress is frozen at its current value.
    Paused,
}

/// Witness for one cursor value.
///
/// Every cursor change issues a fresh ticket; media signals and ticks
/// echo the ticket they were issued under, and stale ones are discarded.
/// This is how "callbacks belong to the active story" is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaTicket {
    epoch: u64,
}

impl MediaTicket {
    pub(crate) fn new(epoch: u64) -> Self {
        Self { epoch }
    }
}
