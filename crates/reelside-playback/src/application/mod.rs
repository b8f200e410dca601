//! Application layer for the playback context.

pub mod driver;
