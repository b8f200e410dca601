//! Test feeds — scripted `StoryFeed` implementations.

use async_trait::async_trait;
use reelside_collection::domain::model::StoryCollection;
use reelside_collection::feed::{FeedError, StoryFeed};

/// A feed that returns a fixed collection on every fetch.
#[derive(Debug, Clone)]
pub struct StaticFeed(pub StoryCollection);

#[async_trait]
impl StoryFeed for StaticFeed {
    async fn fetch(&self) -> Result<StoryCollection, FeedError> {
        Ok(self.0.clone())
    }
}

/// A feed that always fails with a read error. Useful for testing the
/// unavailable-collection path.
#[derive(Debug, Clone, Copy)]
pub struct FailingFeed;

#[async_trait]
impl StoryFeed for FailingFeed {
    async fn fetch(&self) -> Result<StoryCollection, FeedError> {
        Err(FeedError::Read(std::io::Error::other("connection refused")))
    }
}
