//! Frame scheduler: timing governor, transition state machine and draw dispatch.
//!
//! # Tick Cycle
//!
//! The caller polls [`FrameScheduler::update`] as often as it can. Once the
//! update interval has elapsed a tick runs:
//!
//! 1. Advance the state machine (`Fixed` <-> `InTransition`)
//! 2. Clear the display buffer
//! 3. Draw the current frame, or both frames of a running transition
//! 4. Draw the position indicator (if enabled)
//! 5. Draw all overlays
//! 6. Flush the buffer to the panel
//!
//! # Frame Skipping
//!
//! When the caller polls late, the tick counter is advanced by the number of
//! missed intervals before the tick runs. Frame and transition lengths
//! therefore follow wall-clock time even if rendering can't keep up.
//!
//! # Manual Navigation
//!
//! [`next_frame`](FrameScheduler::next_frame),
//! [`previous_frame`](FrameScheduler::previous_frame) and
//! [`transition_to_frame`](FrameScheduler::transition_to_frame) start an
//! animated transition and temporarily override the automatic direction. The
//! automatic direction is restored on the first `Fixed` tick afterwards. Only
//! one transition runs at a time; requests made while one is in flight are
//! dropped. [`switch_to_frame`](FrameScheduler::switch_to_frame) jumps
//! without animation and discards a running transition.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use log::{debug, trace, warn};

use crate::config::{AnimationDirection, IndicatorDirection, IndicatorPosition, UiConfig};
use crate::display::{Clock, Display};
use crate::frame::{Frame, Overlay};
use crate::indicator::{
    ACTIVE_SYMBOL,
    Glyph,
    INACTIVE_SYMBOL,
    IndicatorDrawState,
    IndicatorRow,
    fade_progress,
};
use crate::state::{FrameState, TransitionDirection, UiState};
use crate::transition::{slide_offsets, transition_progress};

/// Drives a set of frames and overlays on a [`Display`].
///
/// Frames and overlays are borrowed from the caller; `U` is the type of the
/// caller's [`UiState::user_data`].
pub struct FrameScheduler<'a, D, U = ()> {
    config: UiConfig,
    state: UiState<U>,

    active_symbol: &'a Glyph,
    inactive_symbol: &'a Glyph,

    /// Automatic direction to restore once a manual transition finished.
    last_transition_direction: TransitionDirection,

    /// Explicit target of a running `transition_to_frame`.
    next_frame_override: Option<usize>,

    indicator_draw_state: IndicatorDrawState,

    frames: &'a [&'a dyn Frame<D, U>],
    overlays: &'a [&'a dyn Overlay<D, U>],
}

impl<'a, D, U> FrameScheduler<'a, D, U> {
    /// Create a scheduler with the default configuration and no frames.
    pub const fn new(user_data: U) -> Self { Self::with_config(UiConfig::new(), user_data) }

    /// Create a scheduler with a custom configuration and no frames.
    pub const fn with_config(
        config: UiConfig,
        user_data: U,
    ) -> Self {
        Self {
            config,
            state: UiState::new(user_data),
            active_symbol: &ACTIVE_SYMBOL,
            inactive_symbol: &INACTIVE_SYMBOL,
            last_transition_direction: TransitionDirection::Forward,
            next_frame_override: None,
            indicator_draw_state: IndicatorDrawState::Steady,
            frames: &[],
            overlays: &[],
        }
    }

    // =========================================================================
    // Timing
    // =========================================================================

    #[inline]
    pub const fn config(&self) -> &UiConfig { &self.config }

    /// Set the update rate, keeping frame and transition durations in wall-clock time.
    pub fn set_target_fps(
        &mut self,
        fps: u32,
    ) {
        if self.config.set_target_fps(fps) {
            debug!(
                "target fps {}: interval {}ms, {} ticks/frame, {} ticks/transition",
                fps,
                self.config.update_interval_ms,
                self.config.ticks_per_frame,
                self.config.ticks_per_transition
            );
        } else {
            warn!("ignoring unsupported target fps {}", fps);
        }
    }

    /// Set the approximate time a frame stays on screen.
    pub fn set_time_per_frame(
        &mut self,
        duration_ms: u32,
    ) {
        self.config.ticks_per_frame = self.config.ticks_for_duration(duration_ms);
    }

    /// Set the approximate time a slide transition takes.
    pub fn set_time_per_transition(
        &mut self,
        duration_ms: u32,
    ) {
        self.config.ticks_per_transition = self.config.ticks_for_duration(duration_ms);
    }

    // =========================================================================
    // Automatic Transitions
    // =========================================================================

    pub const fn enable_auto_transition(&mut self) { self.config.auto_transition = true; }

    pub const fn disable_auto_transition(&mut self) { self.config.auto_transition = false; }

    pub const fn set_auto_transition_forwards(&mut self) {
        self.state.transition_direction = TransitionDirection::Forward;
        self.last_transition_direction = TransitionDirection::Forward;
    }

    pub const fn set_auto_transition_backwards(&mut self) {
        self.state.transition_direction = TransitionDirection::Backward;
        self.last_transition_direction = TransitionDirection::Backward;
    }

    // =========================================================================
    // Indicator Style
    // =========================================================================

    pub const fn enable_all_indicators(&mut self) { self.config.indicator_enabled = true; }

    pub const fn disable_all_indicators(&mut self) { self.config.indicator_enabled = false; }

    pub const fn set_indicator_position(
        &mut self,
        position: IndicatorPosition,
    ) {
        self.config.indicator_position = position;
    }

    pub const fn set_indicator_direction(
        &mut self,
        direction: IndicatorDirection,
    ) {
        self.config.indicator_direction = direction;
    }

    /// Glyph marking the active frame in the indicator row.
    pub const fn set_active_symbol(
        &mut self,
        symbol: &'a Glyph,
    ) {
        self.active_symbol = symbol;
    }

    /// Glyph marking all other frames in the indicator row.
    pub const fn set_inactive_symbol(
        &mut self,
        symbol: &'a Glyph,
    ) {
        self.inactive_symbol = symbol;
    }

    // =========================================================================
    // Frames & Overlays
    // =========================================================================

    pub const fn set_frame_animation(
        &mut self,
        animation: AnimationDirection,
    ) {
        self.config.frame_animation = animation;
    }

    /// Install the frame registry and return to frame 0.
    pub fn set_frames(
        &mut self,
        frames: &'a [&'a dyn Frame<D, U>],
    ) {
        self.frames = frames;
        self.reset_frame_state();
        debug!("installed {} frames", frames.len());
    }

    /// Install the overlay registry and return to frame 0.
    pub fn set_overlays(
        &mut self,
        overlays: &'a [&'a dyn Overlay<D, U>],
    ) {
        self.overlays = overlays;
        self.reset_frame_state();
        debug!("installed {} overlays", overlays.len());
    }

    fn reset_frame_state(&mut self) {
        self.state.reset();
        self.next_frame_override = None;
        self.indicator_draw_state = IndicatorDrawState::Steady;
    }

    #[inline]
    pub const fn frame_count(&self) -> usize { self.frames.len() }

    // =========================================================================
    // Manual Control
    // =========================================================================

    /// Slide forward to the next frame (wrapping around).
    pub fn next_frame(&mut self) { self.start_manual_transition(TransitionDirection::Forward); }

    /// Slide backward to the previous frame (wrapping around).
    pub fn previous_frame(&mut self) { self.start_manual_transition(TransitionDirection::Backward); }

    /// Jump to `frame` without animation, discarding a running transition.
    ///
    /// Any valid index resets to `Fixed` with a fresh tick counter, even the
    /// current frame, so this also cancels an in-flight transition.
    pub fn switch_to_frame(
        &mut self,
        frame: usize,
    ) {
        if frame >= self.frames.len() {
            debug!("switch to frame {} ignored: only {} frames", frame, self.frames.len());
            return;
        }
        self.state.enter(FrameState::Fixed);
        self.state.current_frame = frame;
        self.state.indicator_visible = true;
        self.next_frame_override = None;
    }

    /// Slide to `frame`.
    ///
    /// The forward animation is used when `frame` is numerically greater than
    /// the current frame, the backward animation otherwise, regardless of
    /// which way around is shorter.
    pub fn transition_to_frame(
        &mut self,
        frame: usize,
    ) {
        if frame >= self.frames.len() || frame == self.state.current_frame {
            return;
        }
        if self.state.frame_state == FrameState::InTransition {
            debug!("transition to frame {} ignored: transition in flight", frame);
            return;
        }

        let direction = if frame > self.state.current_frame {
            TransitionDirection::Forward
        } else {
            TransitionDirection::Backward
        };
        self.begin_manual_transition(direction);
        self.next_frame_override = Some(frame);
    }

    fn start_manual_transition(
        &mut self,
        direction: TransitionDirection,
    ) {
        if self.state.frame_state == FrameState::InTransition {
            debug!("manual transition ignored: transition in flight");
            return;
        }
        if self.frames.is_empty() {
            return;
        }
        self.begin_manual_transition(direction);
    }

    fn begin_manual_transition(
        &mut self,
        direction: TransitionDirection,
    ) {
        // A pending restore still holds the automatic direction
        if !self.state.manual_control {
            self.last_transition_direction = self.state.transition_direction;
        }
        self.state.transition_direction = direction;
        self.state.manual_control = true;
        self.state.enter(FrameState::InTransition);
    }

    // =========================================================================
    // State
    // =========================================================================

    #[inline]
    pub const fn state(&self) -> &UiState<U> { &self.state }

    #[inline]
    pub const fn state_mut(&mut self) -> &mut UiState<U> { &mut self.state }

    /// Frame the running (or next) transition moves to.
    pub fn next_frame_index(&self) -> usize {
        if let Some(frame) = self.next_frame_override {
            return frame;
        }
        let count = self.frames.len();
        if count == 0 {
            return self.state.current_frame;
        }
        match self.state.transition_direction {
            TransitionDirection::Forward => (self.state.current_frame + 1) % count,
            TransitionDirection::Backward => (self.state.current_frame + count - 1) % count,
        }
    }

    /// Indicator fade state computed by the last draw.
    #[inline]
    pub const fn indicator_draw_state(&self) -> IndicatorDrawState { self.indicator_draw_state }
}

impl<D, U> FrameScheduler<'_, D, U>
where
    D: Display,
{
    /// Poll the scheduler; runs at most one tick.
    ///
    /// Returns the milliseconds left in the current update interval. The value
    /// is negative when the tick took longer than the interval, so the caller
    /// can sleep for positive values and poll again immediately otherwise.
    pub fn update<C>(
        &mut self,
        display: &mut D,
        clock: &C,
    ) -> i32
    where
        C: Clock + ?Sized,
    {
        let frame_start = clock.now_ms();
        let interval = i64::from(self.config.update_interval_ms);
        let elapsed = frame_start.saturating_sub(self.state.last_update.unwrap_or(0));
        let time_budget = interval - i64::try_from(elapsed).unwrap_or(i64::MAX);

        if time_budget <= 0 {
            // Skip ticks to keep the time budget
            if self.config.auto_transition && self.state.last_update.is_some() {
                let skipped = time_budget.unsigned_abs().div_ceil(interval.max(1).unsigned_abs());
                let skipped = u32::try_from(skipped).unwrap_or(u32::MAX);
                if skipped > 0 {
                    trace!("late by {}ms, skipping {} ticks", -time_budget, skipped);
                }
                self.state.ticks_since_state_switch =
                    self.state.ticks_since_state_switch.saturating_add(skipped);
            }

            self.state.last_update = Some(frame_start);
            self.tick(display);
        }

        let spent = clock.now_ms().saturating_sub(frame_start);
        let remaining = interval - i64::try_from(spent).unwrap_or(i64::MAX);
        remaining.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
    }

    /// Run one tick immediately, bypassing the timing governor.
    pub fn tick(
        &mut self,
        display: &mut D,
    ) {
        self.state.ticks_since_state_switch = self.state.ticks_since_state_switch.saturating_add(1);

        match self.state.frame_state {
            FrameState::InTransition => {
                if self.state.ticks_since_state_switch >= self.config.ticks_per_transition {
                    let next = self.next_frame_index();
                    self.state.current_frame = next;
                    self.state.enter(FrameState::Fixed);
                    self.next_frame_override = None;
                    debug!("frame {} fixed", next);
                }
            }
            FrameState::Fixed => {
                if self.state.manual_control {
                    self.state.transition_direction = self.last_transition_direction;
                    self.state.manual_control = false;
                }
                if self.state.ticks_since_state_switch >= self.config.ticks_per_frame {
                    if self.config.auto_transition {
                        self.state.enter(FrameState::InTransition);
                        debug!("auto transition from frame {}", self.state.current_frame);
                    } else {
                        self.state.ticks_since_state_switch = 0;
                    }
                }
            }
        }

        display.clear(BinaryColor::Off).ok();
        self.draw_frames(display);
        if self.config.indicator_enabled {
            self.draw_indicator(display);
        }
        self.draw_overlays(display);
        display.flush().ok();
    }

    fn draw_frames(
        &mut self,
        display: &mut D,
    ) {
        match self.state.frame_state {
            FrameState::Fixed => {
                // No fade in progress, only this frame's preference counts
                self.indicator_draw_state = IndicatorDrawState::Steady;
                self.state.indicator_visible =
                    self.draw_frame_at(display, self.state.current_frame, Point::zero());
            }
            FrameState::InTransition => {
                let progress = transition_progress(
                    self.state.ticks_since_state_switch,
                    self.config.ticks_per_transition,
                );
                let (current_offset, next_offset) = slide_offsets(
                    self.config.frame_animation,
                    display.size(),
                    progress,
                    self.state.transition_direction,
                );

                let next = self.next_frame_index();
                let current_shown = self.draw_frame_at(display, self.state.current_frame, current_offset);
                let next_shown = self.draw_frame_at(display, next, next_offset);

                self.indicator_draw_state = IndicatorDrawState::from_transition(current_shown, next_shown);
                self.state.indicator_visible = current_shown && next_shown;
            }
        }
    }

    /// Draw one frame and return whether it wants the indicator.
    fn draw_frame_at(
        &mut self,
        display: &mut D,
        index: usize,
        offset: Point,
    ) -> bool {
        let frames = self.frames;
        frames
            .get(index)
            .is_none_or(|frame| frame.draw(display, &mut self.state, offset).show_indicator)
    }

    fn draw_indicator(
        &self,
        display: &mut D,
    ) {
        let visible = match self.state.frame_state {
            FrameState::Fixed => self.state.indicator_visible,
            FrameState::InTransition => self.indicator_draw_state != IndicatorDrawState::Hidden,
        };
        if !visible || self.frames.is_empty() {
            return;
        }

        // A row sliding in already points at the frame that is coming
        let highlighted_frame = if self.indicator_draw_state == IndicatorDrawState::SlideIn {
            self.next_frame_index()
        } else {
            self.state.current_frame
        };

        IndicatorRow {
            position: self.config.indicator_position,
            direction: self.config.indicator_direction,
            frame_count: self.frames.len(),
            highlighted_frame,
            fade: fade_progress(
                self.indicator_draw_state,
                self.state.ticks_since_state_switch,
                self.config.ticks_per_transition,
            ),
            active_symbol: self.active_symbol,
            inactive_symbol: self.inactive_symbol,
        }
        .draw(display);
    }

    fn draw_overlays(
        &mut self,
        display: &mut D,
    ) {
        let overlays = self.overlays;
        for overlay in overlays {
            overlay.draw(display, &mut self.state);
        }
    }
}

impl<D, U: Default> Default for FrameScheduler<'_, D, U> {
    fn default() -> Self { Self::new(U::default()) }
}

// =============================================================================
// Unit Tests
// =============================================================================
