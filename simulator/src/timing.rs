//! Timing constants for the simulator.
//!
//! These constants use `std::time::Duration` which is not available in `no_std`
//! environments, so they are defined here rather than in the scheduler crate.

use std::time::Duration;

/// Scheduler update rate for the demo.
pub const TARGET_FPS: u32 = 30;

/// Alternative update rate toggled with the `F` key.
pub const FAST_FPS: u32 = 60;

/// How long each demo frame stays on screen, in milliseconds.
pub const TIME_PER_FRAME_MS: u32 = 4_000;

/// How long a slide between demo frames takes, in milliseconds.
pub const TIME_PER_TRANSITION_MS: u32 = 400;

/// Simulated work done by each loading stage.
pub const STAGE_WORK: Duration = Duration::from_millis(350);

/// Final loading screen hold before handing over to the scheduler.
pub const LOADING_HOLD: Duration = Duration::from_millis(150);
