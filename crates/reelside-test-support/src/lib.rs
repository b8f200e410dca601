//! Shared test mocks and utilities for the Reelside stories engine.

mod clock;
mod collection;
mod feed;

pub use clock::FixedClock;
pub use collection::{collection_of, image_reel, reel_with};
pub use feed::{FailingFeed, StaticFeed};
