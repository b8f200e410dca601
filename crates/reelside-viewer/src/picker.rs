//! The reel picker view-model.
//!
//! Presents the collection as a row of cards and turns a selection into
//! the initial index a playback session opens at. Rendering is the
//! host's business.

use std::sync::Arc;

use reelside_collection::domain::model::StoryCollection;

/// One selectable card in the picker row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReelCard {
    /// The reel's index; doubles as the open index on selection.
    pub user_index: usize,
    /// Display name.
    pub username: String,
    /// Avatar image location.
    pub avatar_url: String,
    /// Number of stories in the reel.
    pub story_count: usize,
}

impl ReelCard {
    /// The story-count badge, shown only for reels holding more than
    /// one story.
    #[must_use]
    pub fn count_badge(&self) -> Option<usize> {
        (self.story_count > 1).then_some(self.story_count)
    }
}

/// View-model over the collection's reels.
#[derive(Debug, Clone)]
pub struct ReelPicker {
    collection: Arc<StoryCollection>,
}

impl ReelPicker {
    /// Creates a picker over `collection`.
    #[must_use]
    pub fn new(collection: Arc<StoryCollection>) -> Self {
        Self { collection }
    }

    /// Cards in presentation order.
    #[must_use]
    pub fn cards(&self) -> Vec<ReelCard> {
        self.collection
            .reels()
            .iter()
            .enumerate()
            .map(|(user_index, reel)| ReelCard {
                user_index,
                username: reel.user.username.clone(),
                avatar_url: reel.user.avatar_url.clone(),
                story_count: reel.story_count(),
            })
            .collect()
    }

    /// Validates a selection, returning the open index when in bounds.
    #[must_use]
    pub fn select(&self, user_index: usize) -> Option<usize> {
        (user_index < self.collection.len()).then_some(user_index)
    }
}
