//! The session driver.
//!
//! Owns the scheduling side of a session: one task per open session,
//! one tick interval per active cursor, one serialized command queue.
//! Collaborators talk to the session through a [`SessionHandle`] and
//! observe it through a broadcast event stream.

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc};
use tokio::time::MissedTickBehavior;
use uuid::Uuid;

use reelside_collection::domain::model::StoryCollection;
use reelside_core::clock::Clock;
use reelside_core::error::DomainError;

use crate::domain::commands::PlaybackCommand;
use crate::domain::config::PlaybackConfig;
use crate::domain::cursor::{MediaTicket, PlaybackStatus};
use crate::domain::events::{PlaybackEventKind, SessionEvent};
use crate::domain::session::PlaybackSession;

const COMMAND_QUEUE_DEPTH: usize = 32;
const EVENT_CHANNEL_DEPTH: usize = 64;

/// External input accepted by the driver. Ticks are driver-internal and
/// deliberately absent.
#[derive(Debug, Clone, Copy)]
enum SessionInput {
    MediaReady {
        ticket: MediaTicket,
        intrinsic_duration_ms: Option<f64>,
    },
    MediaFinished {
        ticket: MediaTicket,
    },
    TapNext,
    TapPrevious,
    HoldStart,
    HoldEnd,
    Dismiss,
}

impl SessionInput {
    fn into_command(self) -> PlaybackCommand {
        match self {
            Self::MediaReady {
                ticket,
                intrinsic_duration_ms,
            } => PlaybackCommand::MediaReady {
                ticket,
                intrinsic_duration_ms,
            },
            Self::MediaFinished { ticket } => PlaybackCommand::MediaFinished { ticket },
            Self::TapNext => PlaybackCommand::TapNext,
            Self::TapPrevious => PlaybackCommand::TapPrevious,
            Self::HoldStart => PlaybackCommand::HoldStart,
            Self::HoldEnd => PlaybackCommand::HoldEnd,
            Self::Dismiss => PlaybackCommand::Dismiss,
        }
    }
}

/// Handle to a running session.
///
/// Cloneable; every clone feeds the same serialized queue. Sends after
/// the session closed are dropped silently, matching the session's own
/// discard-after-close policy.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    session_id: Uuid,
    input_tx: mpsc::Sender<SessionInput>,
    events_tx: broadcast::Sender<SessionEvent>,
}

impl SessionHandle {
    /// The session identifier.
    #[must_use]
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Subscribes to session events from this point on. The receiver
    /// returned by [`spawn_session`] is the only one guaranteed to see
    /// the opening events.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events_tx.subscribe()
    }

    /// Reports the active story's media as displayable, with the
    /// intrinsic duration in milliseconds when the decoder knows it.
    pub async fn media_ready(&self, ticket: MediaTicket, intrinsic_duration_ms: Option<f64>) {
        self.send(SessionInput::MediaReady {
            ticket,
            intrinsic_duration_ms,
        })
        .await;
    }

    /// Reports natural end of the active story's media.
    pub async fn media_finished(&self, ticket: MediaTicket) {
        self.send(SessionInput::MediaFinished { ticket }).await;
    }

    /// Manual navigation toward newer content.
    pub async fn tap_next(&self) {
        self.send(SessionInput::TapNext).await;
    }

    /// Manual navigation toward older content.
    pub async fn tap_previous(&self) {
        self.send(SessionInput::TapPrevious).await;
    }

    /// Press-and-hold began.
    pub async fn hold_start(&self) {
        self.send(SessionInput::HoldStart).await;
    }

    /// Press-and-hold ended.
    pub async fn hold_end(&self) {
        self.send(SessionInput::HoldEnd).await;
    }

    /// Dismisses the viewer.
    pub async fn dismiss(&self) {
        self.send(SessionInput::Dismiss).await;
    }

    async fn send(&self, input: SessionInput) {
        if self.input_tx.send(input).await.is_err() {
            tracing::trace!(session_id = %self.session_id, "input dropped: session ended");
        }
    }
}

/// Opens a session and spawns its driver task.
///
/// Returns the handle and a receiver subscribed before the task starts,
/// so it observes the opening events. Must be called within a tokio
/// runtime.
///
/// # Errors
///
/// Returns the error from [`PlaybackSession::open`] when the initial
/// index is out of range or nothing at or after it is playable.
pub fn spawn_session(
    collection: Arc<StoryCollection>,
    initial_user_index: usize,
    config: PlaybackConfig,
    clock: Arc<dyn Clock>,
) -> Result<(SessionHandle, broadcast::Receiver<SessionEvent>), DomainError> {
    let (session, opening_events) =
        PlaybackSession::open(collection, initial_user_index, config, clock)?;
    let session_id = session.session_id();

    let (input_tx, input_rx) = mpsc::channel(COMMAND_QUEUE_DEPTH);
    let (events_tx, events_rx) = broadcast::channel(EVENT_CHANNEL_DEPTH);

    let handle = SessionHandle {
        session_id,
        input_tx,
        events_tx: events_tx.clone(),
    };

    tokio::spawn(run(session, input_rx, events_tx, opening_events));

    Ok((handle, events_rx))
}

async fn run(
    mut session: PlaybackSession,
    mut inputs: mpsc::Receiver<SessionInput>,
    events_tx: broadcast::Sender<SessionEvent>,
    opening_events: Vec<SessionEvent>,
) {
    let tick_period = session.config().tick_duration();
    let mut ticker = tokio::time::interval(tick_period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    // The first interval tick fires immediately; consume it so ticks
    // start one period after open.
    ticker.tick().await;

    forward(&events_tx, &mut ticker, opening_events);

    loop {
        // Biased toward the queue: when a manual tap and an elapsing
        // tick land in the same turn, the tap wins and the tick for the
        // superseded cursor is discarded by the ticket check.
        tokio::select! {
            biased;
            maybe_input = inputs.recv() => {
                match maybe_input {
                    Some(input) => {
                        let emitted = session.apply(input.into_command());
                        forward(&events_tx, &mut ticker, emitted);
                        if session.is_closed() {
                            break;
                        }
                    }
                    None => {
                        // Every handle dropped: the host is gone.
                        let emitted = session.apply(PlaybackCommand::Dismiss);
                        forward(&events_tx, &mut ticker, emitted);
                        break;
                    }
                }
            }
            _ = ticker.tick() => {
                if session.status() == PlaybackStatus::Playing {
                    let ticket = session.ticket();
                    let emitted = session.apply(PlaybackCommand::Tick { ticket });
                    forward(&events_tx, &mut ticker, emitted);
                    if session.is_closed() {
                        break;
                    }
                }
            }
        }
    }

    tracing::debug!(session_id = %session.session_id(), "session driver stopped");
}

/// Publishes events and re-arms the ticker whenever the cursor moved,
/// so each cursor gets exactly one fresh tick schedule.
fn forward(
    events_tx: &broadcast::Sender<SessionEvent>,
    ticker: &mut tokio::time::Interval,
    events: Vec<SessionEvent>,
) {
    for event in events {
        if matches!(event.kind, PlaybackEventKind::CursorMoved { .. }) {
            ticker.reset();
        }
        tracing::trace!(event = event.kind.event_type(), "event published");
        // No subscribers is fine; events are advisory.
        let _ = events_tx.send(event);
    }
}
