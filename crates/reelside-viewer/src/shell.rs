//! The viewer shell.
//!
//! Owns the browsing/watching lifecycle: at most one playback session is
//! open at a time, and the hosting surface learns about open/close
//! through notifications so it can apply its own cross-cutting effects
//! (dimming, scroll suppression, focus) outside the core.

use std::sync::Arc;

use tokio::sync::broadcast;
use uuid::Uuid;

use reelside_collection::domain::model::StoryCollection;
use reelside_core::clock::Clock;
use reelside_core::error::DomainError;
use reelside_playback::application::driver::{SessionHandle, spawn_session};
use reelside_playback::domain::config::PlaybackConfig;
use reelside_playback::domain::events::{CloseReason, PlaybackEventKind, SessionEvent};

/// Lifecycle notification for the hosting surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellNotification {
    /// A viewer session opened; the host should enter viewer mode.
    ViewerOpened {
        /// The session that opened.
        session_id: Uuid,
    },
    /// The viewer session ended; the host should restore its view.
    ViewerClosed {
        /// The session that ended.
        session_id: Uuid,
        /// Why it ended.
        reason: CloseReason,
    },
}

/// A running viewer session as handed to the host.
pub struct ViewerSession {
    /// Input side: taps, holds, media signals, dismissal.
    pub handle: SessionHandle,
    /// Output side: the session's event stream, subscribed from the
    /// opening events onward.
    pub events: broadcast::Receiver<SessionEvent>,
}

/// The browsing/watching state machine around the playback core.
pub struct ViewerShell {
    collection: Arc<StoryCollection>,
    config: PlaybackConfig,
    clock: Arc<dyn Clock>,
    watching: Option<Uuid>,
    notifications: Vec<ShellNotification>,
}

impl ViewerShell {
    /// Creates a shell in browsing state over a loaded collection.
    #[must_use]
    pub fn new(
        collection: Arc<StoryCollection>,
        config: PlaybackConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            collection,
            config,
            clock,
            watching: None,
            notifications: Vec::new(),
        }
    }

    /// Whether a viewer session is currently open.
    #[must_use]
    pub fn is_watching(&self) -> bool {
        self.watching.is_some()
    }

    /// Opens a viewer session at the selected reel. Must be called
    /// within a tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when a session is already open,
    /// or the error from session open when the selection is not
    /// playable.
    pub fn open(&mut self, initial_user_index: usize) -> Result<ViewerSession, DomainError> {
        if self.watching.is_some() {
            return Err(DomainError::Validation(
                "a viewer session is already open".into(),
            ));
        }

        let (handle, events) = spawn_session(
            Arc::clone(&self.collection),
            initial_user_index,
            self.config,
            Arc::clone(&self.clock),
        )?;

        let session_id = handle.session_id();
        self.watching = Some(session_id);
        self.notifications
            .push(ShellNotification::ViewerOpened { session_id });
        tracing::debug!(%session_id, initial_user_index, "viewer opened");

        Ok(ViewerSession { handle, events })
    }

    /// Feeds one session event back into the shell. On the terminal
    /// close event the shell returns to browsing and queues the close
    /// notification.
    pub fn handle_session_event(&mut self, event: &SessionEvent) {
        if self.watching != Some(event.session_id) {
            return;
        }
        if let PlaybackEventKind::Closed { reason } = event.kind {
            self.watching = None;
            self.notifications.push(ShellNotification::ViewerClosed {
                session_id: event.session_id,
                reason,
            });
            tracing::debug!(session_id = %event.session_id, ?reason, "viewer closed");
        }
    }

    /// Drains queued notifications for the hosting surface.
    pub fn take_notifications(&mut self) -> Vec<ShellNotification> {
        std::mem::take(&mut self.notifications)
    }
}
