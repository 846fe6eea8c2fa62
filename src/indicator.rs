//! Frame position indicator.
//!
//! A row of small glyphs along one screen edge, one per frame, with the
//! active frame highlighted. Frames may opt out of the indicator; when a
//! transition moves between a frame that shows it and one that doesn't, the
//! whole row slides off (or onto) the screen in step with the transition.
//!
//! # Draw States
//!
//! | Current frame | Next frame | State      | Row position              |
//! |---------------|------------|------------|---------------------------|
//! | shown         | shown      | `Steady`   | at rest                   |
//! | shown         | hidden     | `SlideOut` | moves out, `t/T`          |
//! | hidden        | shown      | `SlideIn`  | moves in, `1 - t/T`       |
//! | hidden        | hidden     | `Hidden`   | not drawn                 |

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use crate::config::{
    INDICATOR_FADE_DISTANCE,
    INDICATOR_GLYPH_SIZE,
    INDICATOR_SPACING,
    INDICATOR_VERTICAL_NUDGE,
    IndicatorDirection,
    IndicatorPosition,
};

/// 8x8 one-bit glyph, one byte per row from the top, most significant bit on
/// the left.
///
/// SSD1306-style bitmaps (one byte per column, least significant bit at the
/// top) render transposed in this layout and must be converted first.
pub type Glyph = [u8; 8];

/// Filled diamond marking the active frame.
pub const ACTIVE_SYMBOL: Glyph = [0x00, 0x18, 0x3c, 0x7e, 0x7e, 0x3c, 0x18, 0x00];

/// Small dot marking every other frame.
pub const INACTIVE_SYMBOL: Glyph = [0x00, 0x00, 0x00, 0x18, 0x18, 0x00, 0x00, 0x00];

/// How the indicator is drawn on the current tick.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorDrawState {
    /// No fade in progress; the row sits at its resting position.
    #[default]
    Steady,
    /// Hidden on the current frame, shown on the next one.
    SlideIn,
    /// Shown on the current frame, hidden on the next one.
    SlideOut,
    /// Hidden on both frames.
    Hidden,
}

impl IndicatorDrawState {
    /// Combine the preferences of the outgoing and incoming frame.
    pub const fn from_transition(
        current_shown: bool,
        next_shown: bool,
    ) -> Self {
        match (current_shown, next_shown) {
            (true, true) => Self::Steady,
            (true, false) => Self::SlideOut,
            (false, true) => Self::SlideIn,
            (false, false) => Self::Hidden,
        }
    }
}

/// Displacement of the row as a fraction of [`INDICATOR_FADE_DISTANCE`].
///
/// `0.0` is fully at rest, `1.0` fully pushed off the edge.
pub fn fade_progress(
    draw_state: IndicatorDrawState,
    ticks: u32,
    ticks_per_transition: u32,
) -> f32 {
    let elapsed = crate::transition::transition_progress(ticks, ticks_per_transition);
    match draw_state {
        IndicatorDrawState::SlideIn => 1.0 - elapsed,
        IndicatorDrawState::SlideOut => elapsed,
        IndicatorDrawState::Steady | IndicatorDrawState::Hidden => 0.0,
    }
}

/// Slot that should carry the active glyph for `frame`.
///
/// `RightLeft` counts slots from `frame_count` downwards, so frame 0 maps one
/// past the last slot and no glyph is highlighted for it.
#[inline]
pub const fn highlight_slot(
    frame: usize,
    frame_count: usize,
    direction: IndicatorDirection,
) -> usize {
    match direction {
        IndicatorDirection::LeftRight => frame,
        IndicatorDirection::RightLeft => frame_count.saturating_sub(frame),
    }
}

/// Top-left corner of glyph `slot` in a row of `frame_count` glyphs.
pub fn glyph_position(
    position: IndicatorPosition,
    screen: Size,
    frame_count: usize,
    slot: usize,
    fade: f32,
) -> Point {
    let width = screen.width as i32;
    let height = screen.height as i32;
    let glyph = INDICATOR_GLYPH_SIZE as i32;
    let displacement = (INDICATOR_FADE_DISTANCE * fade) as i32;

    let row_start = INDICATOR_SPACING * frame_count as i32 / 2;
    let along = INDICATOR_SPACING * slot as i32;

    match position {
        IndicatorPosition::Top => Point::new(width / 2 - row_start + along, -displacement),
        IndicatorPosition::Bottom => {
            Point::new(width / 2 - row_start + along, height - glyph + displacement)
        }
        IndicatorPosition::Right => Point::new(
            width - glyph + displacement,
            height / 2 - row_start + INDICATOR_VERTICAL_NUDGE + along,
        ),
        IndicatorPosition::Left => Point::new(
            -displacement,
            height / 2 - row_start + INDICATOR_VERTICAL_NUDGE + along,
        ),
    }
}

/// Everything needed to draw one indicator row.
#[derive(Clone, Copy, Debug)]
pub struct IndicatorRow<'a> {
    pub position: IndicatorPosition,
    pub direction: IndicatorDirection,
    pub frame_count: usize,
    /// Frame whose slot gets the active glyph.
    pub highlighted_frame: usize,
    pub fade: f32,
    pub active_symbol: &'a Glyph,
    pub inactive_symbol: &'a Glyph,
}

impl IndicatorRow<'_> {
    /// Draw all glyphs of the row. Draw errors are ignored.
    pub fn draw<D>(
        &self,
        display: &mut D,
    ) where
        D: DrawTarget<Color = BinaryColor> + OriginDimensions,
    {
        let screen = display.size();
        let highlighted = highlight_slot(self.highlighted_frame, self.frame_count, self.direction);

        for slot in 0..self.frame_count {
            let symbol = if slot == highlighted {
                self.active_symbol
            } else {
                self.inactive_symbol
            };
            let origin = glyph_position(self.position, screen, self.frame_count, slot, self.fade);
            display.draw_iter(glyph_pixels(symbol, origin)).ok();
        }
    }
}

/// Set bits of `glyph` as pixels at `origin`. Clear bits are transparent so
/// the frame underneath stays visible around the glyph.
fn glyph_pixels(
    glyph: &Glyph,
    origin: Point,
) -> impl Iterator<Item = Pixel<BinaryColor>> + '_ {
    glyph.iter().enumerate().flat_map(move |(row, bits)| {
        (0..INDICATOR_GLYPH_SIZE)
            .filter(move |col| bits & (0x80 >> col) != 0)
            .map(move |col| Pixel(origin + Point::new(col as i32, row as i32), BinaryColor::On))
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
