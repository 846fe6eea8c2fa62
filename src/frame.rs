//! Frame and overlay callbacks.
//!
//! Frames are full-screen drawing routines selected by index; overlays are
//! drawn on top of every frame. Both are usually plain functions or closures:
//!
//! ```ignore
//! fn clock_frame<D: Display>(display: &mut D, state: &mut UiState<Data>, offset: Point) -> DrawResult {
//!     Text::new("12:00", Point::new(40, 30) + offset, STYLE).draw(display).ok();
//!     DrawResult::SHOW_INDICATOR
//! }
//! ```
//!
//! A frame reports through its [`DrawResult`] whether the position indicator
//! may be drawn over it. The scheduler uses the results of the current and
//! the next frame to slide the indicator in or out during a transition.

use embedded_graphics::prelude::Point;

use crate::state::UiState;

/// Outcome of drawing one frame.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DrawResult {
    /// Whether the frame wants the position indicator drawn over it.
    pub show_indicator: bool,
}

impl DrawResult {
    pub const SHOW_INDICATOR: Self = Self { show_indicator: true };
    pub const HIDE_INDICATOR: Self = Self { show_indicator: false };
}

impl Default for DrawResult {
    fn default() -> Self { Self::SHOW_INDICATOR }
}

/// Full-screen drawing routine.
///
/// `offset` is the position of the frame's top-left corner; it is `(0, 0)`
/// while the frame is at rest and moves during slide transitions.
pub trait Frame<D, U> {
    fn draw(
        &self,
        display: &mut D,
        state: &mut UiState<U>,
        offset: Point,
    ) -> DrawResult;
}

impl<D, U, F> Frame<D, U> for F
where
    F: Fn(&mut D, &mut UiState<U>, Point) -> DrawResult,
{
    #[inline]
    fn draw(
        &self,
        display: &mut D,
        state: &mut UiState<U>,
        offset: Point,
    ) -> DrawResult {
        self(display, state, offset)
    }
}

/// Drawing routine invoked every tick on top of the frames, never animated.
pub trait Overlay<D, U> {
    fn draw(
        &self,
        display: &mut D,
        state: &mut UiState<U>,
    );
}

impl<D, U, F> Overlay<D, U> for F
where
    F: Fn(&mut D, &mut UiState<U>),
{
    #[inline]
    fn draw(
        &self,
        display: &mut D,
        state: &mut UiState<U>,
    ) {
        self(display, state);
    }
}
