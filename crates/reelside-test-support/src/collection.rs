//! Collection builders for tests.

use reelside_collection::domain::model::{
    MediaKind, Story, StoryCollection, UserProfile, UserReel,
};

/// A reel of `count` image stories for `username`.
#[must_use]
pub fn image_reel(username: &str, count: usize) -> UserReel {
    let kinds: Vec<MediaKind> = std::iter::repeat(MediaKind::Image).take(count).collect();
    reel_with(username, &kinds)
}

/// A reel with one story per entry of `kinds`, in order.
#[must_use]
pub fn reel_with(username: &str, kinds: &[MediaKind]) -> UserReel {
    UserReel {
        user: UserProfile {
            id: username.to_owned(),
            username: username.to_owned(),
            avatar_url: format!("https://cdn.example/{username}.png"),
        },
        stories: kinds
            .iter()
            .enumerate()
            .map(|(index, kind)| Story {
                id: format!("{username}-{index}"),
                kind: *kind,
                url: format!("https://cdn.example/{username}-{index}"),
            })
            .collect(),
    }
}

/// A collection of image reels described as `(username, story count)`
/// pairs; a zero count makes an empty reel.
#[must_use]
pub fn collection_of(specs: &[(&str, usize)]) -> StoryCollection {
    StoryCollection::new(
        specs
            .iter()
            .map(|(username, count)| image_reel(username, *count))
            .collect(),
    )
}
