//! Reelside — playback bounded context.
//!
//! Responsible for the viewer's playback state machine: cursor position,
//! tick-driven progress, navigation policy, and the media readiness gate.
//! The domain layer is synchronous and serialized; the application layer
//! owns the tokio driver that feeds it ticks and external input.

pub mod application;
pub mod domain;
