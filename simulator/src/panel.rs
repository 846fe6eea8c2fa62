//! Simulated 128x64 monochrome OLED panel.
//!
//! Wraps a `SimulatorDisplay` and its `Window` so the pair can be handed to the
//! scheduler as a single [`Display`]. Drawing goes to the off-screen buffer and
//! `flush` pushes the buffer to the window.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{BinaryColorTheme, OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use frameslide::Display;

pub const PANEL_WIDTH: u32 = 128;
pub const PANEL_HEIGHT: u32 = 64;

/// Window scale factor; the panel is tiny at 1:1.
const PANEL_SCALE: u32 = 4;

pub struct SimPanel {
    display: SimulatorDisplay<BinaryColor>,
    window: Window,
}

impl SimPanel {
    pub fn new(title: &str) -> Self {
        let output_settings = OutputSettingsBuilder::new()
            .theme(BinaryColorTheme::OledBlue)
            .scale(PANEL_SCALE)
            .build();
        Self {
            display: SimulatorDisplay::new(Size::new(PANEL_WIDTH, PANEL_HEIGHT)),
            window: Window::new(title, &output_settings),
        }
    }

    /// Drain pending window events. Only valid after the first `flush`.
    pub fn events(&mut self) -> impl Iterator<Item = SimulatorEvent> + '_ { self.window.events() }
}

impl DrawTarget for SimPanel {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.display.draw_iter(pixels)
    }

    fn clear(
        &mut self,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        self.display.clear(color)
    }
}

impl OriginDimensions for SimPanel {
    fn size(&self) -> Size { self.display.size() }
}

impl Display for SimPanel {
    fn flush(&mut self) -> Result<(), Self::Error> {
        self.window.update(&self.display);
        Ok(())
    }
}
