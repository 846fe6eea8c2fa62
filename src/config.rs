//! Scheduler configuration.
//!
//! Default timing values target a 30 FPS update rate on a 128x64 OLED:
//! a frame stays on screen for roughly five seconds and a slide transition
//! takes roughly half a second.
//!
//! # Wall-clock Preservation
//!
//! Frame and transition lengths are stored in ticks, not milliseconds.
//! Changing the target FPS rescales both tick counts by the ratio of the old
//! to the new update interval, so a frame that was shown for ~5000ms keeps
//! being shown for ~5000ms after the rate change.

// =============================================================================
// Timing Defaults
// =============================================================================

/// Default update interval in milliseconds (~30 FPS).
pub const DEFAULT_UPDATE_INTERVAL_MS: u32 = 33;

/// Default number of ticks a frame stays fixed (~5000ms at 30 FPS).
pub const DEFAULT_TICKS_PER_FRAME: u32 = 151;

/// Default number of ticks a slide transition lasts (~500ms at 30 FPS).
pub const DEFAULT_TICKS_PER_TRANSITION: u32 = 15;

// =============================================================================
// Indicator Geometry
// =============================================================================

/// Width and height of an indicator glyph in pixels.
pub const INDICATOR_GLYPH_SIZE: u32 = 8;

/// Distance between the origins of two neighbouring indicator glyphs.
pub const INDICATOR_SPACING: i32 = 12;

/// How far the indicator row travels when it slides in or out.
pub const INDICATOR_FADE_DISTANCE: f32 = 8.0;

/// Extra offset applied along vertical indicator rows (left/right edges).
pub const INDICATOR_VERTICAL_NUDGE: i32 = 2;

// =============================================================================
// Configuration Enums
// =============================================================================

/// Slide animation used when moving from one frame to the next.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnimationDirection {
    /// Current frame leaves through the top edge.
    SlideUp,
    /// Current frame leaves through the bottom edge.
    SlideDown,
    /// Current frame leaves through the left edge.
    SlideLeft,
    /// Current frame leaves through the right edge.
    #[default]
    SlideRight,
}

impl AnimationDirection {
    /// Whether the animation moves frames along the x axis.
    #[inline]
    pub const fn is_horizontal(self) -> bool { matches!(self, Self::SlideLeft | Self::SlideRight) }
}

/// Screen edge the frame indicator is attached to.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorPosition {
    Top,
    Right,
    #[default]
    Bottom,
    Left,
}

/// Order in which frames are laid out along the indicator row.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorDirection {
    /// Frame 0 is the first slot (leftmost / topmost).
    #[default]
    LeftRight,
    /// Frame 0 is the last slot (rightmost / bottommost).
    RightLeft,
}

// =============================================================================
// UiConfig
// =============================================================================

/// Runtime configuration owned by the scheduler.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct UiConfig {
    /// Milliseconds between two ticks.
    pub update_interval_ms: u32,

    /// Ticks a frame stays fixed before the next automatic transition.
    pub ticks_per_frame: u32,

    /// Ticks a slide transition lasts.
    pub ticks_per_transition: u32,

    /// Whether frames advance on their own once `ticks_per_frame` elapsed.
    pub auto_transition: bool,

    /// Slide animation used for transitions.
    pub frame_animation: AnimationDirection,

    /// Global indicator switch. When off, no frame shows the indicator.
    pub indicator_enabled: bool,

    /// Edge of the screen the indicator is drawn along.
    pub indicator_position: IndicatorPosition,

    /// Slot order of the indicator row.
    pub indicator_direction: IndicatorDirection,
}

impl UiConfig {
    /// Create the default configuration (30 FPS, 5s frames, 0.5s slides).
    pub const fn new() -> Self {
        Self {
            update_interval_ms: DEFAULT_UPDATE_INTERVAL_MS,
            ticks_per_frame: DEFAULT_TICKS_PER_FRAME,
            ticks_per_transition: DEFAULT_TICKS_PER_TRANSITION,
            auto_transition: true,
            frame_animation: AnimationDirection::SlideRight,
            indicator_enabled: true,
            indicator_position: IndicatorPosition::Bottom,
            indicator_direction: IndicatorDirection::LeftRight,
        }
    }

    /// Convert a duration in milliseconds into whole ticks at the current rate.
    ///
    /// A zero interval is treated as 1 ms.
    #[inline]
    pub const fn ticks_for_duration(
        &self,
        duration_ms: u32,
    ) -> u32 {
        let interval = if self.update_interval_ms == 0 { 1 } else { self.update_interval_ms };
        duration_ms / interval
    }

    /// Change the update interval to match `fps`, rescaling frame and
    /// transition tick counts so their wall-clock lengths are preserved.
    ///
    /// Returns `false` (and leaves the configuration untouched) for `fps == 0`
    /// or rates above 1000 FPS, which would yield a zero interval.
    pub fn set_target_fps(
        &mut self,
        fps: u32,
    ) -> bool {
        if fps == 0 || fps > 1000 {
            return false;
        }

        let old_interval = self.update_interval_ms as f32;
        self.update_interval_ms = 1000 / fps;

        let change_ratio = old_interval / self.update_interval_ms as f32;
        self.ticks_per_frame = (self.ticks_per_frame as f32 * change_ratio) as u32;
        self.ticks_per_transition = (self.ticks_per_transition as f32 * change_ratio) as u32;
        true
    }
}

impl Default for UiConfig {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timing() {
        let config = UiConfig::default();
        assert_eq!(config.update_interval_ms, 33, "Default interval should be ~30 FPS");
        assert_eq!(config.ticks_per_frame, 151, "Default frame time should be ~5000ms");
        assert_eq!(config.ticks_per_transition, 15, "Default transition should be ~500ms");
        assert!(config.auto_transition, "Auto transition should be on by default");
    }

    #[test]
    fn test_default_layout() {
        let config = UiConfig::new();
        assert_eq!(config.frame_animation, AnimationDirection::SlideRight);
        assert_eq!(config.indicator_position, IndicatorPosition::Bottom);
        assert_eq!(config.indicator_direction, IndicatorDirection::LeftRight);
        assert!(config.indicator_enabled);
    }

    #[test]
    fn test_ticks_for_duration() {
        let config = UiConfig::new();
        assert_eq!(config.ticks_for_duration(5000), 151);
        assert_eq!(config.ticks_for_duration(500), 15);
        assert_eq!(config.ticks_for_duration(10), 0, "Durations below one tick truncate to 0");
    }

    #[test]
    fn test_ticks_for_duration_zero_interval() {
        let config = UiConfig {
            update_interval_ms: 0,
            ..UiConfig::new()
        };
        assert_eq!(config.ticks_for_duration(500), 500, "Zero interval counts as 1ms");
    }

    #[test]
    fn test_set_target_fps_rescales_ticks() {
        let mut config = UiConfig::new();
        config.update_interval_ms = 40;
        config.ticks_per_frame = 100;
        config.ticks_per_transition = 10;

        // 40ms -> 20ms doubles the tick counts
        assert!(config.set_target_fps(50));
        assert_eq!(config.update_interval_ms, 20);
        assert_eq!(config.ticks_per_frame, 200, "Frame ticks should double");
        assert_eq!(config.ticks_per_transition, 20, "Transition ticks should double");
    }

    #[test]
    fn test_set_target_fps_preserves_wall_clock() {
        let mut config = UiConfig::new();
        let frame_ms = config.ticks_per_frame * config.update_interval_ms;

        assert!(config.set_target_fps(60));
        let rescaled_ms = config.ticks_per_frame * config.update_interval_ms;

        // Truncation may lose up to one tick at the new rate
        let diff = frame_ms.abs_diff(rescaled_ms);
        assert!(
            diff <= 2 * config.update_interval_ms,
            "Frame duration drifted by {diff}ms"
        );
    }

    #[test]
    fn test_set_target_fps_rejects_zero() {
        let mut config = UiConfig::new();
        assert!(!config.set_target_fps(0), "0 FPS should be rejected");
        assert_eq!(config, UiConfig::new(), "Config should be unchanged");
    }

    #[test]
    fn test_set_target_fps_rejects_sub_millisecond_interval() {
        let mut config = UiConfig::new();
        assert!(!config.set_target_fps(2000));
        assert_eq!(config.update_interval_ms, DEFAULT_UPDATE_INTERVAL_MS);
    }

    #[test]
    fn test_animation_axis() {
        assert!(AnimationDirection::SlideLeft.is_horizontal());
        assert!(AnimationDirection::SlideRight.is_horizontal());
        assert!(!AnimationDirection::SlideUp.is_horizontal());
        assert!(!AnimationDirection::SlideDown.is_horizontal());
    }
}
