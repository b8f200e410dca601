//! The demo run loop.
//!
//! Loads the feed, lists the picker cards, opens the viewer at the
//! configured reel, and auto-plays every story to the terminal close,
//! acting as both the hosting surface and the renderer.

use std::sync::Arc;

use tokio::sync::broadcast;

use reelside_collection::application::loader::load_collection;
use reelside_collection::feed::file::JsonFileFeed;
use reelside_core::clock::SystemClock;
use reelside_playback::domain::cursor::PlaybackCursor;
use reelside_playback::domain::events::PlaybackEventKind;
use reelside_viewer::picker::ReelPicker;
use reelside_viewer::progress::story_bar_fills;
use reelside_viewer::shell::{ShellNotification, ViewerShell};

use crate::config::AppConfig;
use crate::error::AppError;
use crate::surface::HeadlessSurface;

/// Runs the demo to completion.
///
/// An unavailable or empty feed is not an error: the run logs the fact
/// and ends with nothing to show.
///
/// # Errors
///
/// Returns `AppError` when the viewer cannot be opened at the selected
/// reel.
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let feed = JsonFileFeed::new(&config.stories_path);
    let Some(collection) = load_collection(&feed).await else {
        tracing::warn!(path = %config.stories_path.display(), "nothing to show");
        return Ok(());
    };

    let picker = ReelPicker::new(Arc::clone(&collection));
    for card in picker.cards() {
        tracing::info!(
            username = %card.username,
            stories = card.story_count,
            badge = ?card.count_badge(),
            "reel available"
        );
    }

    let Some(open_index) = picker.select(config.open_index) else {
        tracing::warn!(index = config.open_index, "selected reel does not exist");
        return Ok(());
    };

    let mut shell = ViewerShell::new(Arc::clone(&collection), config.playback, Arc::new(SystemClock));
    let mut viewer = shell.open(open_index)?;
    apply_host_effects(&mut shell);

    let surface = HeadlessSurface::new();
    let mut active_cursor: Option<PlaybackCursor> = None;
    loop {
        let event = match viewer.events.recv().await {
            Ok(event) => event,
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "event stream lagged");
                continue;
            }
            Err(broadcast::error::RecvError::Closed) => break,
        };

        shell.handle_session_event(&event);
        match event.kind {
            PlaybackEventKind::CursorMoved { cursor, ticket } => {
                active_cursor = Some(cursor);
                if let Some(story) = collection.story(cursor.user_index, cursor.story_index) {
                    surface.present(&viewer.handle, story, ticket).await;
                }
            }
            PlaybackEventKind::StatusChanged { status } => {
                tracing::info!(?status, "playback status");
            }
            PlaybackEventKind::ProgressChanged { progress_pct } => {
                if let Some((reel, cursor)) = active_cursor
                    .and_then(|cursor| collection.reel(cursor.user_index).map(|r| (r, cursor)))
                {
                    let fills =
                        story_bar_fills(reel.story_count(), cursor.story_index, progress_pct);
                    tracing::trace!(progress_pct, bars = fills.len(), "progress");
                }
            }
            PlaybackEventKind::Closed { .. } => {
                apply_host_effects(&mut shell);
                break;
            }
        }
    }

    Ok(())
}

/// The demo's stand-in for the hosting surface's side effects.
fn apply_host_effects(shell: &mut ViewerShell) {
    for notification in shell.take_notifications() {
        match notification {
            ShellNotification::ViewerOpened { session_id } => {
                tracing::info!(%session_id, "entering viewer mode");
            }
            ShellNotification::ViewerClosed { session_id, reason } => {
                tracing::info!(%session_id, ?reason, "leaving viewer mode");
            }
        }
    }
}
