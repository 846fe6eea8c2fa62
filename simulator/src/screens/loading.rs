//! One-shot loading screen: run labeled stages while showing a progress bar.

use std::thread;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorEvent;
use frameslide::Display;
use log::{debug, info};

use crate::panel::SimPanel;
use crate::styles::{CENTERED, FILLED, OUTLINE, SMALL_TEXT};
use crate::timing::LOADING_HOLD;

const LABEL_POS: Point = Point::new(64, 26);
const BAR_ORIGIN: Point = Point::new(4, 32);
const BAR_SIZE: Size = Size::new(120, 8);
/// Gap between the bar outline and its fill.
const BAR_INSET: u32 = 2;

/// A named step of the startup sequence.
pub struct LoadingStage {
    pub label: &'static str,
    pub callback: fn(),
}

/// Renders one loading step at `progress` percent.
pub type LoadingDrawFn = fn(&mut SimPanel, &LoadingStage, u8);

/// Run `stages` in order, redrawing before each one.
///
/// Progress advances by `100 / stages.len()` per stage. After the last stage
/// the final state is drawn once more and held briefly. Returns `false` if
/// the window was closed.
pub fn run_loading_process(
    panel: &mut SimPanel,
    stages: &[LoadingStage],
    draw: LoadingDrawFn,
) -> bool {
    let Some(last) = stages.last() else {
        return true;
    };
    let increment = (100 / stages.len()) as u8;
    let mut progress = 0u8;

    for stage in stages {
        render(panel, stage, progress, draw);
        if quit_requested(panel) {
            return false;
        }

        debug!("loading stage '{}' at {}%", stage.label, progress);
        (stage.callback)();
        progress = progress.saturating_add(increment);
    }

    render(panel, last, progress, draw);
    info!("loading finished at {}%", progress);
    thread::sleep(LOADING_HOLD);
    !quit_requested(panel)
}

/// Centered stage label above a bordered progress bar.
pub fn draw_loading_default(
    panel: &mut SimPanel,
    stage: &LoadingStage,
    progress: u8,
) {
    Text::with_text_style(stage.label, LABEL_POS, SMALL_TEXT, CENTERED)
        .draw(panel)
        .ok();

    Rectangle::new(BAR_ORIGIN, BAR_SIZE)
        .into_styled(OUTLINE)
        .draw(panel)
        .ok();

    let inner_width = BAR_SIZE.width - 2 * BAR_INSET;
    let fill_width = inner_width * u32::from(progress.min(100)) / 100;
    if fill_width > 0 {
        let inset = BAR_INSET as i32;
        Rectangle::new(
            BAR_ORIGIN + Point::new(inset, inset),
            Size::new(fill_width, BAR_SIZE.height - 2 * BAR_INSET),
        )
        .into_styled(FILLED)
        .draw(panel)
        .ok();
    }
}

fn render(
    panel: &mut SimPanel,
    stage: &LoadingStage,
    progress: u8,
    draw: LoadingDrawFn,
) {
    panel.clear(BinaryColor::Off).ok();
    draw(panel, stage, progress);
    panel.flush().ok();
}

fn quit_requested(panel: &mut SimPanel) -> bool { panel.events().any(|ev| matches!(ev, SimulatorEvent::Quit)) }
