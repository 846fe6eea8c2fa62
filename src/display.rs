//! Collaborators the scheduler talks to: the display buffer and the clock.
//!
//! Rasterization is left to `embedded-graphics`. A [`Display`] is any
//! monochrome [`DrawTarget`] with a known size that can push its buffer to
//! the physical panel. How that happens (I2C, SPI, a desktop window) is up
//! to the implementation.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

/// Monochrome frame buffer that can be presented on a panel.
pub trait Display: DrawTarget<Color = BinaryColor> + OriginDimensions {
    /// Present the buffer contents on the physical display.
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// Monotonic millisecond time source used by the timing governor.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

impl<F> Clock for F
where
    F: Fn() -> u64,
{
    #[inline]
    fn now_ms(&self) -> u64 { self() }
}
