//! The reel/story model.
//!
//! A `StoryCollection` is the ordered, two-level structure the playback
//! machinery operates over: reels in presentation order, stories in
//! display order within each reel. It is immutable for the lifetime of a
//! viewer session.

use serde::{Deserialize, Serialize};

/// Media kind of a story.
///
/// The feed is lenient: any `type` value that is not `image` plays as
/// video, so `Video` doubles as the catch-all variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// A still image, displayed for the default duration.
    Image,
    /// Timed media with an intrinsic duration known once decoded.
    #[serde(other)]
    Video,
}

/// The author of a reel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Stable identifier from the feed.
    pub id: String,
    /// Display name.
    pub username: String,
    /// Avatar image location.
    pub avatar_url: String,
}

/// A single piece of media within a reel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    /// Stable identifier from the feed.
    pub id: String,
    /// Image or video.
    pub kind: MediaKind,
    /// Media location.
    pub url: String,
}

/// One user's ordered sequence of stories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserReel {
    /// The reel's author.
    pub user: UserProfile,
    /// Stories in display order. May be empty; empty reels are skipped
    /// by navigation rather than surfaced as errors.
    pub stories: Vec<Story>,
}

impl UserReel {
    /// Number of stories in this reel.
    #[must_use]
    pub fn story_count(&self) -> usize {
        self.stories.len()
    }

    /// Whether this reel holds no stories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }

    /// Index of the last story, if any.
    #[must_use]
    pub fn last_story_index(&self) -> Option<usize> {
        self.stories.len().checked_sub(1)
    }
}

/// The ordered set of reels shown in one viewer session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryCollection {
    reels: Vec<UserReel>,
}

impl StoryCollection {
    /// Creates a collection from reels in presentation order.
    #[must_use]
    pub fn new(reels: Vec<UserReel>) -> Self {
        Self { reels }
    }

    /// All reels in presentation order.
    #[must_use]
    pub fn reels(&self) -> &[UserReel] {
        &self.reels
    }

    /// Number of reels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reels.len()
    }

    /// Whether the collection holds no reels at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reels.is_empty()
    }

    /// The reel at `user_index`, if in bounds.
    #[must_use]
    pub fn reel(&self, user_index: usize) -> Option<&UserReel> {
        self.reels.get(user_index)
    }

    /// The story at `(user_index, story_index)`, if in bounds.
    #[must_use]
    pub fn story(&self, user_index: usize, story_index: usize) -> Option<&Story> {
        self.reels.get(user_index)?.stories.get(story_index)
    }

    /// Whether any reel holds at least one story.
    #[must_use]
    pub fn has_playable_reel(&self) -> bool {
        self.reels.iter().any(|reel| !reel.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story(id: &str, kind: MediaKind) -> Story {
        Story {
            id: id.to_owned(),
            kind,
            url: format!("https://cdn.example/{id}"),
        }
    }

    fn reel(user: &str, stories: Vec<Story>) -> UserReel {
        UserReel {
            user: UserProfile {
                id: user.to_owned(),
                username: user.to_owned(),
                avatar_url: format!("https://cdn.example/{user}.png"),
            },
            stories,
        }
    }

    #[test]
    fn test_story_lookup_in_and_out_of_bounds() {
        let collection = StoryCollection::new(vec![
            reel("a", vec![story("s1", MediaKind::Image)]),
            reel("b", vec![story("s2", MediaKind::Video), story("s3", MediaKind::Image)]),
        ]);

        assert_eq!(collection.story(1, 1).map(|s| s.id.as_str()), Some("s3"));
        assert!(collection.story(0, 1).is_none());
        assert!(collection.story(2, 0).is_none());
    }

    #[test]
    fn test_last_story_index_is_none_for_empty_reel() {
        let empty = reel("a", vec![]);
        assert!(empty.is_empty());
        assert_eq!(empty.last_story_index(), None);

        let single = reel("b", vec![story("s1", MediaKind::Image)]);
        assert_eq!(single.last_story_index(), Some(0));
    }

    #[test]
    fn test_has_playable_reel_ignores_empty_reels() {
        let all_empty = StoryCollection::new(vec![reel("a", vec![]), reel("b", vec![])]);
        assert!(!all_empty.has_playable_reel());
        assert!(!all_empty.is_empty());

        let mixed = StoryCollection::new(vec![
            reel("a", vec![]),
            reel("b", vec![story("s1", MediaKind::Image)]),
        ]);
        assert!(mixed.has_playable_reel());
    }
}
