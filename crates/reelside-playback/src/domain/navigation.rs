//! Navigation policy.
//!
//! Pure position-transition logic over `(collection, cursor, direction)`.
//! Reaching the end of all content closes the viewer; reaching the start
//! stays put — there is nothing before the beginning to go back to.
//! Reels without stories are never landed on in either direction.

use reelside_collection::domain::model::StoryCollection;

use crate::domain::cursor::PlaybackCursor;

/// Direction of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    /// Toward newer content.
    Next,
    /// Toward older content.
    Previous,
}

/// Outcome of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// Move the cursor to this position.
    Advance(PlaybackCursor),
    /// Stay where we are (backward from the very first story).
    Stay,
    /// All content is exhausted; end the session.
    Close,
}

/// Computes the next valid cursor for a navigation request.
#[must_use]
pub fn transition(
    collection: &StoryCollection,
    cursor: PlaybackCursor,
    direction: NavDirection,
) -> NavOutcome {
    match direction {
        NavDirection::Next => next(collection, cursor),
        NavDirection::Previous => previous(collection, cursor),
    }
}

/// The first cursor at or after `user_index` that points into a
/// non-empty reel, if any.
#[must_use]
pub fn first_playable_from(
    collection: &StoryCollection,
    user_index: usize,
) -> Option<PlaybackCursor> {
    (user_index..collection.len())
        .find(|&index| collection.reel(index).is_some_and(|reel| !reel.is_empty()))
        .map(PlaybackCursor::reel_start)
}

fn next(collection: &StoryCollection, cursor: PlaybackCursor) -> NavOutcome {
    let has_following_story = collection
        .reel(cursor.user_index)
        .is_some_and(|reel| cursor.story_index + 1 < reel.story_count());
    if has_following_story {
        return NavOutcome::Advance(PlaybackCursor::new(
            cursor.user_index,
            cursor.story_index + 1,
        ));
    }

    match first_playable_from(collection, cursor.user_index + 1) {
        Some(start) => NavOutcome::Advance(start),
        None => NavOutcome::Close,
    }
}

fn previous(collection: &StoryCollection, cursor: PlaybackCursor) -> NavOutcome {
    if cursor.story_index > 0 {
        return NavOutcome::Advance(PlaybackCursor::new(
            cursor.user_index,
            cursor.story_index - 1,
        ));
    }

    let prior = (0..cursor.user_index).rev().find_map(|index| {
        let reel = collection.reel(index)?;
        reel.last_story_index()
            .map(|last| PlaybackCursor::new(index, last))
    });

    match prior {
        Some(target) => NavOutcome::Advance(target),
        None => NavOutcome::Stay,
    }
}
