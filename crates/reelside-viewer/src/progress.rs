//! Progress-bar view helper.
//!
//! For the active reel, each story's bar is full before the cursor,
//! live at the cursor, and empty after it.

/// Displayed fill percentage for each of `story_count` bars.
#[must_use]
pub fn story_bar_fills(story_count: usize, active_story_index: usize, progress_pct: f64) -> Vec<f64> {
    (0..story_count)
        .map(|index| {
            if index < active_story_index {
                100.0
            } else if index == active_story_index {
                progress_pct
            } else {
                0.0
            }
        })
        .collect()
}
