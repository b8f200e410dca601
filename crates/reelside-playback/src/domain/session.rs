//! The playback session state machine.
//!
//! A session owns the cursor/status/progress triple for one viewer run.
//! All mutation flows through [`PlaybackSession::apply`], one command at
//! a time, which serializes every transition regardless of where the
//! stimulus came from (tick, media signal, or user input).

use std::sync::Arc;

use uuid::Uuid;

use reelside_collection::domain::model::{Story, StoryCollection};
use reelside_core::clock::Clock;
use reelside_core::error::DomainError;

use crate::domain::commands::PlaybackCommand;
use crate::domain::config::PlaybackConfig;
use crate::domain::cursor::{MediaTicket, PlaybackCursor, PlaybackStatus};
use crate::domain::events::{CloseReason, PlaybackEventKind, SessionEvent};
use crate::domain::gate::ReadinessGate;
use crate::domain::navigation::{self, NavDirection, NavOutcome};
use crate::domain::progress::{ProgressEngine, TickOutcome, resolve_duration_ms};

/// The state machine behind one open viewer.
pub struct PlaybackSession {
    session_id: Uuid,
    collection: Arc<StoryCollection>,
    clock: Arc<dyn Clock>,
    config: PlaybackConfig,
    cursor: PlaybackCursor,
    epoch: u64,
    status: PlaybackStatus,
    engine: ProgressEngine,
    gate: ReadinessGate,
    completed: bool,
    closed: bool,
}

impl PlaybackSession {
    /// Opens a session at the first playable reel at or after
    /// `initial_user_index`. Returns the session and its opening events
    /// (initial cursor, zero progress, `Loading` status).
    ///
    /// # Errors
    ///
    /// Returns `DomainError::OutOfBounds` when the index is outside the
    /// collection, and `DomainError::Validation` when no reel at or after
    /// it holds any stories.
    pub fn open(
        collection: Arc<StoryCollection>,
        initial_user_index: usize,
        config: PlaybackConfig,
        clock: Arc<dyn Clock>,
    ) -> Result<(Self, Vec<SessionEvent>), DomainError> {
        if initial_user_index >= collection.len() {
            return Err(DomainError::OutOfBounds {
                user_index: initial_user_index,
                story_index: 0,
            });
        }
        let cursor = navigation::first_playable_from(&collection, initial_user_index)
            .ok_or_else(|| {
                DomainError::Validation(
                    "no playable reel at or after the requested index".into(),
                )
            })?;

        let mut session = Self {
            session_id: Uuid::new_v4(),
            collection,
            clock,
            config,
            cursor,
            epoch: 0,
            status: PlaybackStatus::Loading,
            engine: ProgressEngine::new(),
            gate: ReadinessGate::new(),
            completed: false,
            closed: false,
        };

        let mut events = Vec::new();
        session.announce_cursor(&mut events);
        events.push(session.event(PlaybackEventKind::StatusChanged {
            status: PlaybackStatus::Loading,
        }));

        tracing::debug!(
            session_id = %session.session_id,
            user_index = cursor.user_index,
            story_index = cursor.story_index,
            "playback session opened"
        );
        Ok((session, events))
    }

    /// The session identifier.
    #[must_use]
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// The current cursor.
    #[must_use]
    pub fn cursor(&self) -> PlaybackCursor {
        self.cursor
    }

    /// The current lifecycle status.
    #[must_use]
    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    /// The current progress percentage within `[0, 100]`.
    #[must_use]
    pub fn progress_pct(&self) -> f64 {
        self.engine.progress_pct()
    }

    /// The ticket media signals for the active story must echo.
    #[must_use]
    pub fn ticket(&self) -> MediaTicket {
        MediaTicket::new(self.epoch)
    }

    /// The timing configuration this session runs under.
    #[must_use]
    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    /// The story the cursor points at, `None` once closed.
    #[must_use]
    pub fn current_story(&self) -> Option<&Story> {
        if self.closed {
            return None;
        }
        self.collection
            .story(self.cursor.user_index, self.cursor.story_index)
    }

    /// Whether the session has ended.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Applies one command and returns the events it produced.
    ///
    /// A closed session ignores everything; stale-ticket signals are
    /// discarded without effect.
    pub fn apply(&mut self, command: PlaybackCommand) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        if self.closed {
            tracing::trace!(
                command = command.command_type(),
                "command ignored: session closed"
            );
            return events;
        }

        match command {
            PlaybackCommand::MediaReady {
                ticket,
                intrinsic_duration_ms,
            } => self.on_media_ready(ticket, intrinsic_duration_ms, &mut events),
            PlaybackCommand::MediaFinished { ticket } => {
                self.on_media_finished(ticket, &mut events);
            }
            PlaybackCommand::Tick { ticket } => self.on_tick(ticket, &mut events),
            PlaybackCommand::TapNext => self.navigate(NavDirection::Next, &mut events),
            PlaybackCommand::TapPrevious => {
                self.navigate(NavDirection::Previous, &mut events);
            }
            PlaybackCommand::HoldStart => self.on_hold_start(&mut events),
            PlaybackCommand::HoldEnd => self.on_hold_end(&mut events),
            PlaybackCommand::Dismiss => self.close(CloseReason::Dismissed, &mut events),
        }
        events
    }

    fn on_media_ready(
        &mut self,
        ticket: MediaTicket,
        intrinsic_duration_ms: Option<f64>,
        events: &mut Vec<SessionEvent>,
    ) {
        if ticket != self.ticket() {
            tracing::trace!("stale ready signal discarded");
            return;
        }
        let Some(target) = self.gate.media_ready() else {
            tracing::trace!("duplicate ready signal discarded");
            return;
        };
        let Some(story) = self.current_story() else {
            return;
        };

        let duration_ms = resolve_duration_ms(
            story.kind,
            intrinsic_duration_ms,
            self.config.default_story_duration_ms(),
        );
        self.engine.arm(duration_ms);
        self.set_status(target, events);
        tracing::debug!(
            session_id = %self.session_id,
            duration_ms,
            status = ?self.status,
            "media ready"
        );
    }

    fn on_media_finished(&mut self, ticket: MediaTicket, events: &mut Vec<SessionEvent>) {
        if ticket != self.ticket() {
            tracing::trace!("stale finished signal discarded");
            return;
        }
        if self.status == PlaybackStatus::Loading {
            // A story that never became ready cannot have finished.
            return;
        }
        self.complete(events);
    }

    fn on_tick(&mut self, ticket: MediaTicket, events: &mut Vec<SessionEvent>) {
        if ticket != self.ticket() {
            tracing::trace!("stale tick discarded");
            return;
        }
        if self.status != PlaybackStatus::Playing {
            return;
        }
        match self.engine.advance(self.config.tick_ms()) {
            TickOutcome::Advanced(progress_pct) => {
                events.push(self.event(PlaybackEventKind::ProgressChanged { progress_pct }));
            }
            TickOutcome::Completed => self.complete(events),
        }
    }

    fn on_hold_start(&mut self, events: &mut Vec<SessionEvent>) {
        if self.gate.hold_start() && self.status == PlaybackStatus::Playing {
            self.set_status(PlaybackStatus::Paused, events);
        }
    }

    fn on_hold_end(&mut self, events: &mut Vec<SessionEvent>) {
        if self.gate.hold_end() && self.status == PlaybackStatus::Paused {
            self.set_status(PlaybackStatus::Playing, events);
        }
    }

    /// Completion is idempotent per cursor: the latch absorbs the second
    /// of a tick/finished pair racing for the same story.
    fn complete(&mut self, events: &mut Vec<SessionEvent>) {
        if self.completed {
            tracing::trace!("duplicate completion discarded");
            return;
        }
        self.completed = true;
        self.navigate(NavDirection::Next, events);
    }

    fn navigate(&mut self, direction: NavDirection, events: &mut Vec<SessionEvent>) {
        match navigation::transition(&self.collection, self.cursor, direction) {
            NavOutcome::Advance(target) => self.move_cursor(target, events),
            NavOutcome::Stay => {}
            NavOutcome::Close => self.close(CloseReason::Exhausted, events),
        }
    }

    fn move_cursor(&mut self, target: PlaybackCursor, events: &mut Vec<SessionEvent>) {
        self.cursor = target;
        self.epoch += 1;
        self.completed = false;
        self.engine.reset();
        self.gate.rearm();

        self.announce_cursor(events);
        self.set_status(PlaybackStatus::Loading, events);
        tracing::debug!(
            session_id = %self.session_id,
            user_index = target.user_index,
            story_index = target.story_index,
            "cursor moved"
        );
    }

    fn close(&mut self, reason: CloseReason, events: &mut Vec<SessionEvent>) {
        self.closed = true;
        events.push(self.event(PlaybackEventKind::Closed { reason }));
        tracing::info!(session_id = %self.session_id, ?reason, "playback session closed");
    }

    fn announce_cursor(&mut self, events: &mut Vec<SessionEvent>) {
        events.push(self.event(PlaybackEventKind::CursorMoved {
            cursor: self.cursor,
            ticket: self.ticket(),
        }));
        events.push(self.event(PlaybackEventKind::ProgressChanged { progress_pct: 0.0 }));
    }

    fn set_status(&mut self, status: PlaybackStatus, events: &mut Vec<SessionEvent>) {
        if self.status != status {
            self.status = status;
            events.push(self.event(PlaybackEventKind::StatusChanged { status }));
        }
    }

    fn event(&self, kind: PlaybackEventKind) -> SessionEvent {
        SessionEvent {
            session_id: self.session_id,
            occurred_at: self.clock.now(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use reelside_collection::domain::model::MediaKind;
    use reelside_test_support::{FixedClock, collection_of, reel_with};

    use super::*;

    fn fixed_clock() -> Arc<dyn Clock> {
        Arc::new(FixedClock(
            Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap(),
        ))
    }

    fn fast_config() -> PlaybackConfig {
        // 25% per tick: four ticks complete a story.
        PlaybackConfig::new(50, 200.0).unwrap()
    }

    fn open_at(
        collection: StoryCollection,
        index: usize,
    ) -> (PlaybackSession, Vec<SessionEvent>) {
        PlaybackSession::open(Arc::new(collection), index, fast_config(), fixed_clock())
            .unwrap()
    }

    fn ready(session: &mut PlaybackSession) {
        let ticket = session.ticket();
        let _ = session.apply(PlaybackCommand::MediaReady {
            ticket,
            intrinsic_duration_ms: None,
        });
    }

    fn tick(session: &mut PlaybackSession) -> Vec<SessionEvent> {
        let ticket = session.ticket();
        session.apply(PlaybackCommand::Tick { ticket })
    }

    fn assert_pct(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_open_starts_loading_at_requested_reel() {
        // Arrange / Act
        let (session, events) = open_at(collection_of(&[("a", 1), ("b", 2)]), 1);

        // Assert
        assert_eq!(session.cursor(), PlaybackCursor::new(1, 0));
        assert_eq!(session.status(), PlaybackStatus::Loading);
        assert_pct(session.progress_pct(), 0.0);
        assert!(matches!(
            events[0].kind,
            PlaybackEventKind::CursorMoved { .. }
        ));
    }

    #[test]
    fn test_open_seeks_past_empty_reels() {
        let (session, _) = open_at(collection_of(&[("a", 0), ("b", 0), ("c", 1)]), 0);
        assert_eq!(session.cursor(), PlaybackCursor::reel_start(2));
    }

    #[test]
    fn test_open_rejects_out_of_range_index() {
        let result = PlaybackSession::open(
            Arc::new(collection_of(&[("a", 1)])),
            3,
            fast_config(),
            fixed_clock(),
        );
        assert!(matches!(result, Err(DomainError::OutOfBounds { .. })));
    }

    #[test]
    fn test_open_rejects_collection_with_no_playable_reel_ahead() {
        let result = PlaybackSession::open(
            Arc::new(collection_of(&[("a", 1), ("b", 0)])),
            1,
            fast_config(),
            fixed_clock(),
        );
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_ticks_are_inert_until_media_ready() {
        // Arrange
        let (mut session, _) = open_at(collection_of(&[("a", 1)]), 0);

        // Act
        let events = tick(&mut session);

        // Assert
        assert!(events.is_empty());
        assert_eq!(session.status(), PlaybackStatus::Loading);
        assert_pct(session.progress_pct(), 0.0);
    }

    #[test]
    fn test_media_ready_starts_playing_and_ticks_advance_progress() {
        // Arrange
        let (mut session, _) = open_at(collection_of(&[("a", 1), ("b", 1)]), 0);

        // Act
        ready(&mut session);
        let events = tick(&mut session);

        // Assert
        assert_eq!(session.status(), PlaybackStatus::Playing);
        assert_pct(session.progress_pct(), 25.0);
        assert!(matches!(
            events[0].kind,
            PlaybackEventKind::ProgressChanged { .. }
        ));
    }

    #[test]
    fn test_completion_advances_to_next_story() {
        // Arrange
        let (mut session, _) = open_at(collection_of(&[("a", 2)]), 0);
        ready(&mut session);

        // Act: four ticks complete the first story.
        for _ in 0..4 {
            let _ = tick(&mut session);
        }

        // Assert
        assert_eq!(session.cursor(), PlaybackCursor::new(0, 1));
        assert_eq!(session.status(), PlaybackStatus::Loading);
        assert_pct(session.progress_pct(), 0.0);
    }

    #[test]
    fn test_video_intrinsic_duration_shortens_playback() {
        // Arrange: one video story, intrinsic duration of two ticks.
        let collection = StoryCollection::new(vec![
            reel_with("a", &[MediaKind::Video]),
            reel_with("b", &[MediaKind::Image]),
        ]);
        let (mut session, _) = open_at(collection, 0);
        let ticket = session.ticket();

        // Act
        let _ = session.apply(PlaybackCommand::MediaReady {
            ticket,
            intrinsic_duration_ms: Some(100.0),
        });
        let _ = tick(&mut session);
        let _ = tick(&mut session);

        // Assert: completed after two ticks instead of four.
        assert_eq!(session.cursor(), PlaybackCursor::reel_start(1));
    }

    #[test]
    fn test_degenerate_video_duration_falls_back_to_default() {
        let collection = StoryCollection::new(vec![reel_with("a", &[MediaKind::Video])]);
        let (mut session, _) = open_at(collection, 0);
        let ticket = session.ticket();

        let _ = session.apply(PlaybackCommand::MediaReady {
            ticket,
            intrinsic_duration_ms: Some(0.0),
        });
        let _ = tick(&mut session);

        // One tick of the 200 ms default, not an instant completion.
        assert_pct(session.progress_pct(), 25.0);
        assert!(!session.is_closed());
    }

    #[test]
    fn test_hold_freezes_progress_and_release_resumes_from_frozen_value() {
        // Arrange: reach 50%.
        let (mut session, _) = open_at(collection_of(&[("a", 1)]), 0);
        ready(&mut session);
        let _ = tick(&mut session);
        let _ = tick(&mut session);
        assert_pct(session.progress_pct(), 50.0);

        // Act: hold, then deliver ticks.
        let _ = session.apply(PlaybackCommand::HoldStart);
        for _ in 0..10 {
            let events = tick(&mut session);
            assert!(events.is_empty());
        }

        // Assert: frozen.
        assert_eq!(session.status(), PlaybackStatus::Paused);
        assert_pct(session.progress_pct(), 50.0);

        // Act: release and tick once more.
        let _ = session.apply(PlaybackCommand::HoldEnd);
        let _ = tick(&mut session);

        // Assert: resumed from the frozen value, not from zero.
        assert_eq!(session.status(), PlaybackStatus::Playing);
        assert_pct(session.progress_pct(), 75.0);
    }

    #[test]
    fn test_hold_during_loading_applies_paused_once_ready() {
        // Arrange
        let (mut session, _) = open_at(collection_of(&[("a", 1)]), 0);

        // Act: hold before the media reports ready.
        let _ = session.apply(PlaybackCommand::HoldStart);
        assert_eq!(session.status(), PlaybackStatus::Loading);
        ready(&mut session);

        // Assert
        assert_eq!(session.status(), PlaybackStatus::Paused);

        // Act: release.
        let _ = session.apply(PlaybackCommand::HoldEnd);
        assert_eq!(session.status(), PlaybackStatus::Playing);
    }

    #[test]
    fn test_tap_next_during_loading_moves_cursor() {
        let (mut session, _) = open_at(collection_of(&[("a", 2)]), 0);
        let _ = session.apply(PlaybackCommand::TapNext);
        assert_eq!(session.cursor(), PlaybackCursor::new(0, 1));
        assert_eq!(session.status(), PlaybackStatus::Loading);
    }

    #[test]
    fn test_stale_tick_after_tap_is_discarded() {
        // Arrange: playing at (0, 0).
        let (mut session, _) = open_at(collection_of(&[("a", 2)]), 0);
        ready(&mut session);
        let stale_ticket = session.ticket();

        // Act: the tap wins; the tick scheduled for the old cursor loses.
        let _ = session.apply(PlaybackCommand::TapNext);
        let events = session.apply(PlaybackCommand::Tick {
            ticket: stale_ticket,
        });

        // Assert: no progress on the new story.
        assert!(events.is_empty());
        assert_pct(session.progress_pct(), 0.0);
    }

    #[test]
    fn test_finished_before_full_progress_advances_exactly_once() {
        // Arrange: playing at 25%.
        let (mut session, _) = open_at(collection_of(&[("a", 2)]), 0);
        ready(&mut session);
        let _ = tick(&mut session);
        let stale_ticket = session.ticket();

        // Act: natural end of the media, then a stale tick for the same
        // (now superseded) cursor.
        let _ = session.apply(PlaybackCommand::MediaFinished {
            ticket: stale_ticket,
        });
        assert_eq!(session.cursor(), PlaybackCursor::new(0, 1));
        let events = session.apply(PlaybackCommand::Tick {
            ticket: stale_ticket,
        });

        // Assert: single advance, stale tick discarded.
        assert!(events.is_empty());
        assert_eq!(session.cursor(), PlaybackCursor::new(0, 1));
    }

    #[test]
    fn test_finished_while_loading_is_ignored() {
        let (mut session, _) = open_at(collection_of(&[("a", 2)]), 0);
        let ticket = session.ticket();
        let events = session.apply(PlaybackCommand::MediaFinished { ticket });
        assert!(events.is_empty());
        assert_eq!(session.cursor(), PlaybackCursor::new(0, 0));
    }

    #[test]
    fn test_previous_at_first_story_is_a_no_op() {
        let (mut session, _) = open_at(collection_of(&[("a", 2), ("b", 1)]), 0);
        let events = session.apply(PlaybackCommand::TapPrevious);
        assert!(events.is_empty());
        assert_eq!(session.cursor(), PlaybackCursor::new(0, 0));
    }

    #[test]
    fn test_dismiss_closes_and_further_commands_are_ignored() {
        // Arrange
        let (mut session, _) = open_at(collection_of(&[("a", 2)]), 0);
        ready(&mut session);

        // Act
        let events = session.apply(PlaybackCommand::Dismiss);

        // Assert
        assert!(matches!(
            events[0].kind,
            PlaybackEventKind::Closed {
                reason: CloseReason::Dismissed
            }
        ));
        assert!(session.is_closed());
        assert!(session.current_story().is_none());

        let after = session.apply(PlaybackCommand::TapNext);
        assert!(after.is_empty());
    }

    #[test]
    fn test_exhausting_the_last_reel_closes_the_session() {
        // Arrange: single single-story reel.
        let (mut session, _) = open_at(collection_of(&[("a", 1)]), 0);
        ready(&mut session);

        // Act
        for _ in 0..4 {
            let _ = tick(&mut session);
        }

        // Assert
        assert!(session.is_closed());
    }

    #[test]
    fn test_hold_persists_across_auto_advance() {
        // A finger kept down while a video finishes must pause the next
        // story the moment it becomes ready.
        let (mut session, _) = open_at(collection_of(&[("a", 2)]), 0);
        ready(&mut session);
        let ticket = session.ticket();
        let _ = session.apply(PlaybackCommand::HoldStart);
        let _ = session.apply(PlaybackCommand::MediaFinished { ticket });

        assert_eq!(session.cursor(), PlaybackCursor::new(0, 1));
        ready(&mut session);
        assert_eq!(session.status(), PlaybackStatus::Paused);
    }
}
