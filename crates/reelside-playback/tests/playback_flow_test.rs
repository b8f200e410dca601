//! End-to-end flows through the playback state machine.

use std::sync::Arc;

use chrono::{TimeZone, Utc};

use reelside_core::clock::Clock;
use reelside_playback::domain::commands::PlaybackCommand;
use reelside_playback::domain::config::PlaybackConfig;
use reelside_playback::domain::cursor::{PlaybackCursor, PlaybackStatus};
use reelside_playback::domain::session::PlaybackSession;
use reelside_test_support::{FixedClock, collection_of};

fn fixed_clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock(
        Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap(),
    ))
}

/// Four ticks of 50 ms complete one story.
fn fast_config() -> PlaybackConfig {
    PlaybackConfig::new(50, 200.0).unwrap()
}

fn ready(session: &mut PlaybackSession) {
    let ticket = session.ticket();
    let _ = session.apply(PlaybackCommand::MediaReady {
        ticket,
        intrinsic_duration_ms: None,
    });
}

fn run_story_out(session: &mut PlaybackSession) {
    for _ in 0..4 {
        let ticket = session.ticket();
        let _ = session.apply(PlaybackCommand::Tick { ticket });
    }
}

#[test]
fn test_auto_advance_then_taps_walk_both_reels_to_close() {
    // Collection: a has one story, b has two. Open at a.
    let collection = Arc::new(collection_of(&[("a", 1), ("b", 2)]));
    let (mut session, _) =
        PlaybackSession::open(collection, 0, fast_config(), fixed_clock()).unwrap();

    // Ready, then let the timer run the first story out.
    ready(&mut session);
    assert_eq!(session.status(), PlaybackStatus::Playing);
    run_story_out(&mut session);
    assert_eq!(session.cursor(), PlaybackCursor::new(1, 0));

    // Tap right twice: second story of b, then close.
    let _ = session.apply(PlaybackCommand::TapNext);
    assert_eq!(session.cursor(), PlaybackCursor::new(1, 1));

    let _ = session.apply(PlaybackCommand::TapNext);
    assert!(session.is_closed());
}

#[test]
fn test_tap_left_from_second_reel_lands_on_single_story_of_first() {
    // Same collection, opened at b; its previous reel has one story, so
    // story index 0.
    let collection = Arc::new(collection_of(&[("a", 1), ("b", 2)]));
    let (mut session, _) =
        PlaybackSession::open(collection, 1, fast_config(), fixed_clock()).unwrap();

    let _ = session.apply(PlaybackCommand::TapPrevious);
    assert_eq!(session.cursor(), PlaybackCursor::new(0, 0));
}

#[test]
fn test_n_taps_exhaust_a_lone_reel_and_one_previous_is_inert() {
    // A single reel of three stories: three taps close the session;
    // a previous tap from the start changes nothing.
    let collection = Arc::new(collection_of(&[("u", 3)]));
    let (mut session, _) =
        PlaybackSession::open(collection, 0, fast_config(), fixed_clock()).unwrap();

    let _ = session.apply(PlaybackCommand::TapPrevious);
    assert_eq!(session.cursor(), PlaybackCursor::new(0, 0));

    for expected in [Some(1), Some(2), None] {
        let _ = session.apply(PlaybackCommand::TapNext);
        match expected {
            Some(story_index) => {
                assert_eq!(session.cursor(), PlaybackCursor::new(0, story_index));
            }
            None => assert!(session.is_closed()),
        }
    }
}

#[test]
fn test_progress_stays_within_bounds_across_a_full_story() {
    let collection = Arc::new(collection_of(&[("u", 2)]));
    let (mut session, _) =
        PlaybackSession::open(collection, 0, fast_config(), fixed_clock()).unwrap();
    ready(&mut session);

    let mut last = 0.0;
    while session.cursor() == PlaybackCursor::new(0, 0) {
        let ticket = session.ticket();
        let _ = session.apply(PlaybackCommand::Tick { ticket });
        let pct = session.progress_pct();
        if session.cursor() == PlaybackCursor::new(0, 0) {
            assert!(pct >= last, "progress regressed: {last} -> {pct}");
            assert!((0.0..=100.0).contains(&pct));
            last = pct;
        }
    }

    // The advance reset progress for the new cursor.
    assert!(session.progress_pct().abs() < f64::EPSILON);
    assert_eq!(session.status(), PlaybackStatus::Loading);
}
