//! Demo frames and overlays.

use core::fmt::Write;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, Rectangle, Triangle};
use embedded_graphics::text::Text;
use frameslide::{DrawResult, FrameState, UiState};
use heapless::String;

use crate::panel::{PANEL_HEIGHT, PANEL_WIDTH};
use crate::styles::{CENTERED, FILLED, LEFT_ALIGNED, MEDIUM_TEXT, OUTLINE, SMALL_TEXT, SMALL_TEXT_INVERTED, TITLE_TEXT, TOP_RIGHT};

/// Data shared between the main loop and the demo frames.
#[derive(Debug, Default)]
pub struct DemoData {
    pub uptime_ms: u64,
    pub key_presses: u32,
    pub fps: u32,
}

pub type DemoState = UiState<DemoData>;

// =============================================================================
// Frames
// =============================================================================

pub fn title_frame<D>(
    display: &mut D,
    _state: &mut DemoState,
    offset: Point,
) -> DrawResult
where
    D: DrawTarget<Color = BinaryColor>,
{
    Text::with_text_style("frameslide", offset + Point::new(64, 28), TITLE_TEXT, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style("A/D to slide", offset + Point::new(64, 44), SMALL_TEXT, CENTERED)
        .draw(display)
        .ok();
    DrawResult::SHOW_INDICATOR
}

/// Live scheduler state.
pub fn status_frame<D>(
    display: &mut D,
    state: &mut DemoState,
    offset: Point,
) -> DrawResult
where
    D: DrawTarget<Color = BinaryColor>,
{
    let mode = match state.frame_state() {
        FrameState::Fixed => "fixed",
        FrameState::InTransition => "sliding",
    };

    let mut line: String<24> = String::new();
    let _ = write!(line, "frame {} {}", state.current_frame(), mode);
    Text::with_text_style(&line, offset + Point::new(4, 14), SMALL_TEXT, LEFT_ALIGNED)
        .draw(display)
        .ok();

    line.clear();
    let _ = write!(line, "ticks {}", state.ticks_since_state_switch());
    Text::with_text_style(&line, offset + Point::new(4, 26), SMALL_TEXT, LEFT_ALIGNED)
        .draw(display)
        .ok();

    line.clear();
    let _ = write!(line, "keys {}  fps {}", state.user_data.key_presses, state.user_data.fps);
    Text::with_text_style(&line, offset + Point::new(4, 38), SMALL_TEXT, LEFT_ALIGNED)
        .draw(display)
        .ok();

    DrawResult::SHOW_INDICATOR
}

/// Large uptime readout.
pub fn uptime_frame<D>(
    display: &mut D,
    state: &mut DemoState,
    offset: Point,
) -> DrawResult
where
    D: DrawTarget<Color = BinaryColor>,
{
    let seconds = state.user_data.uptime_ms / 1000;
    let mut value: String<16> = String::new();
    let _ = write!(value, "{:02}:{:02}:{:02}", seconds / 3600, (seconds / 60) % 60, seconds % 60);

    Text::with_text_style("uptime", offset + Point::new(64, 16), SMALL_TEXT, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style(&value, offset + Point::new(64, 36), MEDIUM_TEXT, CENTERED)
        .draw(display)
        .ok();
    DrawResult::SHOW_INDICATOR
}

pub fn shapes_frame<D>(
    display: &mut D,
    _state: &mut DemoState,
    offset: Point,
) -> DrawResult
where
    D: DrawTarget<Color = BinaryColor>,
{
    Circle::new(offset + Point::new(12, 12), 28)
        .into_styled(OUTLINE)
        .draw(display)
        .ok();
    Rectangle::new(offset + Point::new(50, 14), Size::new(26, 24))
        .into_styled(FILLED)
        .draw(display)
        .ok();
    Triangle::new(
        offset + Point::new(90, 38),
        offset + Point::new(103, 12),
        offset + Point::new(116, 38),
    )
    .into_styled(OUTLINE)
    .draw(display)
    .ok();
    DrawResult::SHOW_INDICATOR
}

/// Inverted full-screen frame that hides the indicator.
pub fn fullscreen_frame<D>(
    display: &mut D,
    _state: &mut DemoState,
    offset: Point,
) -> DrawResult
where
    D: DrawTarget<Color = BinaryColor>,
{
    Rectangle::new(offset, Size::new(PANEL_WIDTH, PANEL_HEIGHT))
        .into_styled(FILLED)
        .draw(display)
        .ok();
    Text::with_text_style("no indicator", offset + Point::new(64, 35), SMALL_TEXT_INVERTED, CENTERED)
        .draw(display)
        .ok();
    DrawResult::HIDE_INDICATOR
}

// =============================================================================
// Overlays
// =============================================================================

/// Uptime seconds pinned to the top-right corner.
pub fn clock_overlay<D>(
    display: &mut D,
    state: &mut DemoState,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    let mut value: String<12> = String::new();
    let _ = write!(value, "{}s", state.user_data.uptime_ms / 1000);
    Text::with_text_style(&value, Point::new(PANEL_WIDTH as i32 - 1, 0), SMALL_TEXT, TOP_RIGHT)
        .draw(display)
        .ok();
}

/// Underline marking manual navigation.
pub fn manual_overlay<D>(
    display: &mut D,
    state: &mut DemoState,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    if state.manual_control() {
        Line::new(Point::new(0, 0), Point::new(16, 0))
            .into_styled(OUTLINE)
            .draw(display)
            .ok();
    }
}
