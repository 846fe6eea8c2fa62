//! In-memory 128x64 display used by the unit tests.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use crate::display::Display;

const WIDTH: usize = 128;
const HEIGHT: usize = 64;

/// Monochrome buffer that counts clears and flushes.
pub struct TestDisplay {
    pixels: [[bool; WIDTH]; HEIGHT],
    pub clears: usize,
    pub flushes: usize,
}

impl TestDisplay {
    pub const fn new() -> Self {
        Self {
            pixels: [[false; WIDTH]; HEIGHT],
            clears: 0,
            flushes: 0,
        }
    }

    pub fn is_lit(
        &self,
        point: Point,
    ) -> bool {
        self.pixels[point.y as usize][point.x as usize]
    }

    pub fn lit_pixels(&self) -> usize { self.pixels.iter().flatten().filter(|lit| **lit).count() }
}

impl DrawTarget for TestDisplay {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if (0..WIDTH as i32).contains(&point.x) && (0..HEIGHT as i32).contains(&point.y) {
                self.pixels[point.y as usize][point.x as usize] = color.is_on();
            }
        }
        Ok(())
    }

    fn clear(
        &mut self,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        self.clears += 1;
        self.pixels = [[color.is_on(); WIDTH]; HEIGHT];
        Ok(())
    }
}

impl OriginDimensions for TestDisplay {
    fn size(&self) -> Size { Size::new(WIDTH as u32, HEIGHT as u32) }
}

impl Display for TestDisplay {
    fn flush(&mut self) -> Result<(), Self::Error> {
        self.flushes += 1;
        Ok(())
    }
}
