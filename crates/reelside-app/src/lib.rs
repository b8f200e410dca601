//! Reelside stories demo application.
//!
//! Wires the feed, picker, shell, and playback driver together behind a
//! headless media surface, so the whole pipeline can run without a
//! renderer.

pub mod config;
pub mod error;
pub mod runner;
pub mod surface;
