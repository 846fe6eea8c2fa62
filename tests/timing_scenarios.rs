//! End-to-end scenarios driving `FrameScheduler::update` from a simulated clock.

use core::cell::Cell;
use core::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use frameslide::{Display, DrawResult, Frame, FrameScheduler, FrameState, Overlay, UiState};

// ── Helpers ─────────────────────────────────────────────────────────────

#[derive(Default)]
struct CountingDisplay {
    flushes: usize,
}

impl DrawTarget for CountingDisplay {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, _pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        Ok(())
    }
}

impl OriginDimensions for CountingDisplay {
    fn size(&self) -> Size { Size::new(128, 64) }
}

impl Display for CountingDisplay {
    fn flush(&mut self) -> Result<(), Self::Error> {
        self.flushes += 1;
        Ok(())
    }
}

fn blank(_display: &mut CountingDisplay, _state: &mut UiState, _offset: Point) -> DrawResult {
    DrawResult::SHOW_INDICATOR
}

const THREE_FRAMES: &[&dyn Frame<CountingDisplay, ()>] = &[&blank, &blank, &blank];

/// Clock starting at one second, advanced by hand.
struct ManualClock(Cell<u64>);

impl ManualClock {
    fn new() -> Self { Self(Cell::new(1_000)) }

    fn advance(&self, ms: u64) { self.0.set(self.0.get() + ms); }

    fn closure(&self) -> impl Fn() -> u64 + '_ { move || self.0.get() }
}

// ═════════════════════════════════════════════════════════════════════════
// Default Timing
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn test_default_timing_cycles_frames() {
    let clock = ManualClock::new();
    let now = clock.closure();
    let mut display = CountingDisplay::default();
    let mut ui = FrameScheduler::new(());
    ui.set_frames(THREE_FRAMES);

    for _ in 0..150 {
        ui.update(&mut display, &now);
        clock.advance(33);
    }
    assert_eq!(ui.state().frame_state(), FrameState::Fixed, "Frame should hold for 151 ticks");
    assert_eq!(ui.state().current_frame(), 0);

    ui.update(&mut display, &now);
    clock.advance(33);
    assert_eq!(ui.state().frame_state(), FrameState::InTransition, "Tick 151 should start sliding");

    for _ in 0..15 {
        ui.update(&mut display, &now);
        clock.advance(33);
    }
    assert_eq!(ui.state().frame_state(), FrameState::Fixed);
    assert_eq!(ui.state().current_frame(), 1, "Slide should land on the next frame");
    assert_eq!(display.flushes, 166, "Every update on schedule should render once");
}

#[test]
fn test_polling_early_does_not_render() {
    let clock = ManualClock::new();
    let now = clock.closure();
    let mut display = CountingDisplay::default();
    let mut ui = FrameScheduler::new(());
    ui.set_frames(THREE_FRAMES);

    ui.update(&mut display, &now);
    for _ in 0..32 {
        clock.advance(1);
        let remaining = ui.update(&mut display, &now);
        assert_eq!(remaining, 33, "Nothing was drawn, so the full interval remains");
    }
    assert_eq!(display.flushes, 1, "Polls inside the interval should not render");

    clock.advance(1);
    ui.update(&mut display, &now);
    assert_eq!(display.flushes, 2);
}

// ═════════════════════════════════════════════════════════════════════════
// Catch-up
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn test_stall_catches_up_into_transition() {
    let clock = ManualClock::new();
    let now = clock.closure();
    let mut display = CountingDisplay::default();
    let mut ui = FrameScheduler::new(());
    ui.set_frames(THREE_FRAMES);

    ui.update(&mut display, &now);
    assert_eq!(ui.state().ticks_since_state_switch(), 1);

    // 150 intervals late: 149 skipped ticks plus the rendered one
    clock.advance(150 * 33);
    ui.update(&mut display, &now);

    assert_eq!(ui.state().frame_state(), FrameState::InTransition, "Stall should not delay the slide");
    assert_eq!(display.flushes, 2, "Skipped ticks are not rendered");
}

#[test]
fn test_stall_without_auto_transition_keeps_frame() {
    let clock = ManualClock::new();
    let now = clock.closure();
    let mut display = CountingDisplay::default();
    let mut ui = FrameScheduler::new(());
    ui.set_frames(THREE_FRAMES);
    ui.disable_auto_transition();

    ui.update(&mut display, &now);
    clock.advance(60_000);
    ui.update(&mut display, &now);

    assert_eq!(ui.state().frame_state(), FrameState::Fixed);
    assert_eq!(ui.state().current_frame(), 0);
    assert_eq!(ui.state().ticks_since_state_switch(), 2, "Only rendered ticks count");
}

// ═════════════════════════════════════════════════════════════════════════
// Time Budget
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn test_slow_frame_reduces_budget() {
    let clock = ManualClock::new();
    let now = clock.closure();
    let slow = |_display: &mut CountingDisplay, _state: &mut UiState, _offset: Point| {
        clock.advance(12);
        DrawResult::SHOW_INDICATOR
    };
    let frames: [&dyn Frame<CountingDisplay, ()>; 1] = [&slow];
    let mut display = CountingDisplay::default();
    let mut ui = FrameScheduler::new(());
    ui.set_frames(&frames);

    let remaining = ui.update(&mut display, &now);

    assert_eq!(remaining, 21, "12ms of drawing should leave 21ms of a 33ms interval");
}

#[test]
fn test_overrun_reports_negative_budget() {
    let clock = ManualClock::new();
    let now = clock.closure();
    let stall = |_display: &mut CountingDisplay, _state: &mut UiState| clock.advance(50);
    let overlays: [&dyn Overlay<CountingDisplay, ()>; 1] = [&stall];
    let mut display = CountingDisplay::default();
    let mut ui = FrameScheduler::new(());
    ui.set_frames(THREE_FRAMES);
    ui.set_overlays(&overlays);

    let remaining = ui.update(&mut display, &now);

    assert_eq!(remaining, -17, "Overrun should be reported as a negative budget");
}

// ═════════════════════════════════════════════════════════════════════════
// User Data
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn test_frames_share_user_data() {
    fn count_draws(_display: &mut CountingDisplay, state: &mut UiState<u32>, _offset: Point) -> DrawResult {
        state.user_data += 1;
        DrawResult::HIDE_INDICATOR
    }

    let frames: [&dyn Frame<CountingDisplay, u32>; 2] = [&count_draws, &count_draws];
    let mut display = CountingDisplay::default();
    let mut ui = FrameScheduler::new(0u32);
    ui.set_frames(&frames);
    ui.set_time_per_frame(33);
    ui.set_time_per_transition(2 * 33);

    // Tick 1 starts the slide, tick 3 lands on frame 1
    for _ in 0..3 {
        ui.tick(&mut display);
    }

    assert_eq!(ui.state().current_frame(), 1);
    assert_eq!(ui.state().user_data, 2 + 2 + 1, "Both frames draw during a slide");
}
