//! File-backed feed.
//!
//! Reads a feed document from local disk. Remote retrieval stays behind
//! the [`StoryFeed`] port for hosts to implement.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::model::StoryCollection;
use crate::feed::document::parse_feed;
use crate::feed::{FeedError, StoryFeed};

/// A feed backed by a JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonFileFeed {
    path: PathBuf,
}

impl JsonFileFeed {
    /// Creates a feed reading from `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl StoryFeed for JsonFileFeed {
    async fn fetch(&self) -> Result<StoryCollection, FeedError> {
        let bytes = tokio::fs::read(&self.path).await?;
        parse_feed(&bytes)
    }
}
