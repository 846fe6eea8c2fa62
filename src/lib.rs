//! Frame scheduler for small monochrome displays.
//!
//! Cycles through a set of full-screen "frames" with slide transitions, draws
//! a frame position indicator and independent overlays, all on top of
//! `embedded-graphics`. The scheduler is driven by polling
//! [`FrameScheduler::update`] from the main loop.
//!
//! ```ignore
//! let frames: [&dyn Frame<_, ()>; 2] = [&weather, &clock];
//! let mut ui = FrameScheduler::new(());
//! ui.set_target_fps(30);
//! ui.set_frames(&frames);
//!
//! loop {
//!     let remaining = ui.update(&mut display, &clock_ms);
//!     if remaining > 0 {
//!         // idle, handle input, ...
//!     }
//! }
//! ```
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test -p frameslide
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the library itself is `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod config;
pub mod display;
pub mod frame;
pub mod indicator;
pub mod scheduler;
pub mod state;
pub mod transition;

#[cfg(test)]
mod testing;

// Re-export commonly used items
pub use config::{AnimationDirection, IndicatorDirection, IndicatorPosition, UiConfig};
pub use display::{Clock, Display};
pub use frame::{DrawResult, Frame, Overlay};
pub use indicator::{Glyph, IndicatorDrawState};
pub use scheduler::FrameScheduler;
pub use state::{FrameState, TransitionDirection, UiState};
