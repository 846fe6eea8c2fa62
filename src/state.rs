//! Shared UI state handed to every frame and overlay callback.
//!
//! The scheduler owns all fields except [`UiState::user_data`], which belongs
//! to the caller. Callbacks receive `&mut UiState<U>` so they can update their
//! own data, while the scheduler's bookkeeping is exposed read-only.

/// Whether a single frame or a slide between two frames is on screen.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameState {
    /// One frame is drawn at rest.
    #[default]
    Fixed,
    /// The current frame slides out while the next one slides in.
    InTransition,
}

/// Direction the frame sequence is traversed in.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransitionDirection {
    #[default]
    Forward,
    Backward,
}

impl TransitionDirection {
    /// Signed step applied to the frame index (`+1` or `-1`).
    #[inline]
    pub const fn sign(self) -> i32 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// Scheduler state visible to callbacks.
#[derive(Clone, Debug)]
pub struct UiState<U = ()> {
    pub(crate) last_update: Option<u64>,
    pub(crate) ticks_since_state_switch: u32,
    pub(crate) frame_state: FrameState,
    pub(crate) current_frame: usize,
    pub(crate) indicator_visible: bool,
    pub(crate) transition_direction: TransitionDirection,
    pub(crate) manual_control: bool,

    /// Caller-owned data. Never read or written by the scheduler.
    pub user_data: U,
}

impl<U> UiState<U> {
    /// Create a fresh state showing frame 0.
    pub const fn new(user_data: U) -> Self {
        Self {
            last_update: None,
            ticks_since_state_switch: 0,
            frame_state: FrameState::Fixed,
            current_frame: 0,
            indicator_visible: true,
            transition_direction: TransitionDirection::Forward,
            manual_control: false,
            user_data,
        }
    }

    /// Timestamp (ms) of the last tick, `None` before the first one.
    #[inline]
    pub const fn last_update(&self) -> Option<u64> { self.last_update }

    /// Ticks elapsed since the last `Fixed`/`InTransition` switch.
    #[inline]
    pub const fn ticks_since_state_switch(&self) -> u32 { self.ticks_since_state_switch }

    #[inline]
    pub const fn frame_state(&self) -> FrameState { self.frame_state }

    /// Index of the frame currently at rest (or sliding out).
    #[inline]
    pub const fn current_frame(&self) -> usize { self.current_frame }

    /// Whether the indicator was requested by the most recently drawn frame(s).
    #[inline]
    pub const fn indicator_visible(&self) -> bool { self.indicator_visible }

    #[inline]
    pub const fn transition_direction(&self) -> TransitionDirection { self.transition_direction }

    /// Whether a manual navigation currently overrides the automatic direction.
    #[inline]
    pub const fn manual_control(&self) -> bool { self.manual_control }

    /// Return to frame 0 in `Fixed` state, forgetting the last tick time.
    pub(crate) fn reset(&mut self) {
        self.last_update = None;
        self.ticks_since_state_switch = 0;
        self.frame_state = FrameState::Fixed;
        self.current_frame = 0;
        self.indicator_visible = true;
    }

    /// Enter `new_state` with a fresh tick counter.
    pub(crate) fn enter(
        &mut self,
        new_state: FrameState,
    ) {
        self.frame_state = new_state;
        self.ticks_since_state_switch = 0;
    }
}

impl<U: Default> Default for UiState<U> {
    fn default() -> Self { Self::new(U::default()) }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_new() {
        let state = UiState::new(7u8);
        assert_eq!(state.last_update(), None, "No tick should have happened yet");
        assert_eq!(state.ticks_since_state_switch(), 0);
        assert_eq!(state.frame_state(), FrameState::Fixed);
        assert_eq!(state.current_frame(), 0);
        assert!(state.indicator_visible(), "Indicator should be visible initially");
        assert_eq!(state.transition_direction(), TransitionDirection::Forward);
        assert!(!state.manual_control());
        assert_eq!(state.user_data, 7);
    }

    #[test]
    fn test_direction_sign() {
        assert_eq!(TransitionDirection::Forward.sign(), 1);
        assert_eq!(TransitionDirection::Backward.sign(), -1);
    }

    #[test]
    fn test_reset_keeps_user_data_and_direction() {
        let mut state = UiState::new(42u32);
        state.last_update = Some(1000);
        state.ticks_since_state_switch = 9;
        state.frame_state = FrameState::InTransition;
        state.current_frame = 3;
        state.indicator_visible = false;
        state.transition_direction = TransitionDirection::Backward;

        state.reset();

        assert_eq!(state.last_update(), None);
        assert_eq!(state.ticks_since_state_switch(), 0);
        assert_eq!(state.frame_state(), FrameState::Fixed);
        assert_eq!(state.current_frame(), 0);
        assert!(state.indicator_visible());
        assert_eq!(
            state.transition_direction(),
            TransitionDirection::Backward,
            "Reset should not change the configured direction"
        );
        assert_eq!(state.user_data, 42, "User data is never touched");
    }

    #[test]
    fn test_enter_resets_counter() {
        let mut state: UiState = UiState::default();
        state.ticks_since_state_switch = 12;
        state.enter(FrameState::InTransition);
        assert_eq!(state.frame_state(), FrameState::InTransition);
        assert_eq!(state.ticks_since_state_switch(), 0, "Every state switch resets the counter");
    }
}
