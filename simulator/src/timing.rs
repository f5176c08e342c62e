//! Timing constants for the simulator host.
//!
//! These constants use `std::time::Duration` which is not available in
//! `no_std` environments, so they are defined here rather than in the
//! common crate.

use std::time::Duration;

/// Target frame time (~50 FPS). The main loop sleeps if a frame completes
/// early; one frame is one simulation tick.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Simulated seconds per tick, kept in lockstep with [`FRAME_TIME`].
pub const TICK_SECONDS: f32 = 0.02;
