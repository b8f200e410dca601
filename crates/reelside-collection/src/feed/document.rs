//! The feed wire format.
//!
//! The document is a JSON array of reel entries:
//! `{ id, user: { username, avatar }, stories: [{ id, type, url }] }`.
//! Identifiers arrive as either JSON numbers or strings depending on the
//! feed producer, so both are accepted.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::model::{MediaKind, Story, StoryCollection, UserProfile, UserReel};
use crate::feed::FeedError;

/// An identifier that may be numeric or textual in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocumentId {
    /// Numeric identifier.
    Number(u64),
    /// Textual identifier.
    Text(String),
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// The `user` object of a reel entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDocument {
    /// Display name.
    pub username: String,
    /// Avatar image location.
    pub avatar: String,
}

/// One story entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryDocument {
    /// Story identifier.
    pub id: DocumentId,
    /// Media kind; unrecognized values decode as video.
    #[serde(rename = "type")]
    pub kind: MediaKind,
    /// Media location.
    pub url: String,
}

/// One reel entry of the feed document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReelDocument {
    /// Reel identifier, reused as the user identifier.
    pub id: DocumentId,
    /// The reel's author.
    pub user: UserDocument,
    /// Stories in display order.
    #[serde(default)]
    pub stories: Vec<StoryDocument>,
}

impl From<ReelDocument> for UserReel {
    fn from(doc: ReelDocument) -> Self {
        Self {
            user: UserProfile {
                id: doc.id.to_string(),
                username: doc.user.username,
                avatar_url: doc.user.avatar,
            },
            stories: doc
                .stories
                .into_iter()
                .map(|story| Story {
                    id: story.id.to_string(),
                    kind: story.kind,
                    url: story.url,
                })
                .collect(),
        }
    }
}

/// Decodes a feed document into the domain collection.
///
/// # Errors
///
/// Returns [`FeedError::Malformed`] when the bytes are not a valid feed
/// document.
pub fn parse_feed(bytes: &[u8]) -> Result<StoryCollection, FeedError> {
    let entries: Vec<ReelDocument> = serde_json::from_slice(bytes)?;
    Ok(StoryCollection::new(
        entries.into_iter().map(UserReel::from).collect(),
    ))
}
