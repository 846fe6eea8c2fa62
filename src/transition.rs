//! Slide transition geometry.
//!
//! During a transition the current frame slides out of the screen while the
//! next frame slides in right behind it, exactly one screen width (or
//! height) away:
//!
//! ```text
//! progress = 0.0       progress = 0.5        progress -> 1.0
//! [ current ][ next ]  [ent ][ next  ]       [  next   ]
//! ```
//!
//! Offsets are computed from the configured [`AnimationDirection`] and then
//! mirrored when the sequence is played backwards, so a backward step slides
//! the other way.

use embedded_graphics::prelude::{Point, Size};

use crate::config::AnimationDirection;
use crate::state::TransitionDirection;

/// Fraction of a transition that has elapsed.
///
/// A zero-length transition reports `0.0` instead of dividing by zero.
#[inline]
pub fn transition_progress(
    ticks: u32,
    ticks_per_transition: u32,
) -> f32 {
    if ticks_per_transition == 0 {
        return 0.0;
    }
    ticks as f32 / ticks_per_transition as f32
}

/// Offsets of the outgoing and incoming frame for a given `progress`.
///
/// Returns `(current, next)`.
pub fn slide_offsets(
    animation: AnimationDirection,
    screen: Size,
    progress: f32,
    direction: TransitionDirection,
) -> (Point, Point) {
    let width = screen.width as i32;
    let height = screen.height as i32;

    let (current, next) = match animation {
        AnimationDirection::SlideLeft => {
            let x = (-(width as f32) * progress) as i32;
            (Point::new(x, 0), Point::new(x + width, 0))
        }
        AnimationDirection::SlideRight => {
            let x = (width as f32 * progress) as i32;
            (Point::new(x, 0), Point::new(x - width, 0))
        }
        AnimationDirection::SlideUp => {
            let y = (-(height as f32) * progress) as i32;
            (Point::new(0, y), Point::new(0, y + height))
        }
        AnimationDirection::SlideDown => {
            let y = (height as f32 * progress) as i32;
            (Point::new(0, y), Point::new(0, y - height))
        }
    };

    let dir = direction.sign();
    (current * dir, next * dir)
}

// =============================================================================
// Unit Tests
// =============================================================================
