//! Reelside — Story Collection bounded context.
//!
//! Responsible for the immutable reel/story model, the feed document
//! wire format, and one-shot collection retrieval.

pub mod application;
pub mod domain;
pub mod feed;
