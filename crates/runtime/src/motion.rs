//! Motion playback seam.
//!
//! Geometry produces a destination; something still has to spend wall-clock
//! time "travelling" there before the winner may be revealed. The player
//! trait keeps that concern swappable: the timer player paces real
//! sessions, the instant player collapses the wait for tests and headless
//! runs. Easing and frame interpolation live entirely in the presentation
//! layer; the runtime only cares when the motion is over.

use std::time::Duration;

use async_trait::async_trait;
use draw_core::DrawMode;

/// One motion assignment handed to the player.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionSpec {
    pub mode: DrawMode,
    /// Scalar destination: absolute rotation (wheel) or offset (tape).
    pub destination: f64,
    pub duration: Duration,
}

/// Plays one motion to completion.
///
/// Exactly one motion is in flight per surface; the `Spinning` phase
/// enforces that upstream, so implementations need no queueing.
#[async_trait]
pub trait MotionPlayer: Send + Sync {
    async fn play(&self, motion: MotionSpec);
}

/// Paces the motion on the tokio clock for the configured duration.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimerMotionPlayer;

#[async_trait]
impl MotionPlayer for TimerMotionPlayer {
    async fn play(&self, motion: MotionSpec) {
        tokio::time::sleep(motion.duration).await;
    }
}

/// Completes every motion immediately.
#[derive(Clone, Copy, Debug, Default)]
pub struct InstantMotionPlayer;

#[async_trait]
impl MotionPlayer for InstantMotionPlayer {
    async fn play(&self, _motion: MotionSpec) {}
}
