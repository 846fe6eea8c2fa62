//! Static text and primitive styles for the demo screens.
//!
//! Defined as `const` so no style objects are built per tick.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::primitives::PrimitiveStyle;
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};
use profont::{PROFONT_12_POINT, PROFONT_18_POINT};

// =============================================================================
// Text Alignment Styles
// =============================================================================

pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).build();

/// Right-aligned, top baseline. Used for overlays pinned to a corner.
pub const TOP_RIGHT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Right)
    .baseline(Baseline::Top)
    .build();

// =============================================================================
// Text Styles
// =============================================================================

/// Small 6x10 text for labels, overlays and the loading screen.
pub const SMALL_TEXT: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);

/// Small text drawn dark, for use on lit backgrounds.
pub const SMALL_TEXT_INVERTED: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(&FONT_6X10, BinaryColor::Off);

/// Medium `ProFont` 12pt for frame values.
pub const MEDIUM_TEXT: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(&PROFONT_12_POINT, BinaryColor::On);

/// Large `ProFont` 18pt for frame titles.
pub const TITLE_TEXT: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(&PROFONT_18_POINT, BinaryColor::On);

// =============================================================================
// Primitive Styles
// =============================================================================

pub const OUTLINE: PrimitiveStyle<BinaryColor> = PrimitiveStyle::with_stroke(BinaryColor::On, 1);

pub const FILLED: PrimitiveStyle<BinaryColor> = PrimitiveStyle::with_fill(BinaryColor::On);
