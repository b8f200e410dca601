//! Headless media surface.
//!
//! Stands in for a real renderer: every story is "decoded" the instant
//! it is presented, and videos report the configured pretend duration.
//! This is what lets the demo exercise the full readiness/timing loop.

use reelside_collection::domain::model::{MediaKind, Story};
use reelside_playback::application::driver::SessionHandle;
use reelside_playback::domain::cursor::MediaTicket;

/// A renderer that acknowledges readiness immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessSurface {
    /// Intrinsic duration reported for video stories, when set.
    pub video_duration_ms: Option<f64>,
}

impl HeadlessSurface {
    /// Creates a surface that reports no intrinsic durations.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Presents a story: logs it and reports it ready at once.
    pub async fn present(&self, handle: &SessionHandle, story: &Story, ticket: MediaTicket) {
        tracing::info!(story_id = %story.id, kind = ?story.kind, url = %story.url, "presenting story");
        let intrinsic = match story.kind {
            MediaKind::Video => self.video_duration_ms,
            MediaKind::Image => None,
        };
        handle.media_ready(ticket, intrinsic).await;
    }
}
