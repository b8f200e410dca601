//! Collection loading policy.
//!
//! A failed or empty fetch is not an error the user ever sees: the viewer
//! simply has nothing to show. The cause lands in the log instead.

use std::sync::Arc;

use crate::domain::model::StoryCollection;
use crate::feed::StoryFeed;

/// Fetches the collection, absorbing failures into "no collection".
///
/// Returns `None` when the feed is unavailable, malformed, or holds no
/// reels at all.
pub async fn load_collection(feed: &dyn StoryFeed) -> Option<Arc<StoryCollection>> {
    match feed.fetch().await {
        Ok(collection) if collection.is_empty() => {
            tracing::info!("story feed returned no reels");
            None
        }
        Ok(collection) => {
            tracing::debug!(reels = collection.len(), "story collection loaded");
            Some(Arc::new(collection))
        }
        Err(error) => {
            tracing::warn!(%error, "story feed unavailable");
            None
        }
    }
}
