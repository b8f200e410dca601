//! Feed retrieval port for the Story Collection context.
//!
//! A feed is a one-shot source of the full collection. There is no retry
//! or caching policy here; callers that want "failure means nothing to
//! show" go through [`crate::application::loader`].

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::model::StoryCollection;

pub mod document;
pub mod file;

/// Errors produced while retrieving or decoding a feed.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The feed source could not be read.
    #[error("feed read failed: {0}")]
    Read(#[from] std::io::Error),

    /// The feed document did not match the expected shape.
    #[error("feed document malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Port for fetching the story collection from wherever it lives.
#[async_trait]
pub trait StoryFeed: Send + Sync {
    /// Fetches and decodes the full collection.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError`] when the source is unreadable or the
    /// document is malformed.
    async fn fetch(&self) -> Result<StoryCollection, FeedError>;
}
