//! Desktop simulator for the frameslide scheduler.
//!
//! Runs a short loading sequence, then cycles demo frames on a simulated
//! 128x64 OLED using the embedded-graphics-simulator crate.
//!
//! # Keys
//!
//! | Key | Action |
//! |-----|--------|
//! | `A` / `D` | previous / next frame |
//! | `Z` `X` `C` `V` `B` | slide to frame 1-5 |
//! | `J` | jump to the first frame without animation |
//! | `P` | pause / resume automatic transitions |
//! | `R` | reverse the automatic direction |
//! | `I` | toggle the indicator |
//! | `O` | cycle the indicator edge |
//! | `M` | cycle the slide animation |
//! | `F` | toggle 30 / 60 FPS |

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]

mod frames;
mod panel;
mod screens;
mod styles;
mod timing;

use std::io::Write;
use std::thread;
use std::time::{Duration, Instant};

use embedded_graphics_simulator::SimulatorEvent;
use embedded_graphics_simulator::sdl2::Keycode;
use frameslide::{
    AnimationDirection,
    Frame,
    FrameScheduler,
    IndicatorDirection,
    IndicatorPosition,
    Overlay,
    TransitionDirection,
};
use log::{Level, LevelFilter, info};

use crate::frames::{
    DemoData,
    clock_overlay,
    fullscreen_frame,
    manual_overlay,
    shapes_frame,
    status_frame,
    title_frame,
    uptime_frame,
};
use crate::panel::SimPanel;
use crate::screens::{LoadingStage, draw_loading_default, run_loading_process};
use crate::timing::{FAST_FPS, STAGE_WORK, TARGET_FPS, TIME_PER_FRAME_MS, TIME_PER_TRANSITION_MS};

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

const fn level_letter(level: Level) -> char {
    match level {
        Level::Trace => 'T',
        Level::Debug => 'D',
        Level::Info => 'I',
        Level::Warn => 'W',
        Level::Error => 'E',
    }
}

/// Stderr logger printing `[<time> <level letter>] <target>: <message>`.
///
/// `filter` uses the `RUST_LOG` syntax; `None` falls back to the default level.
fn log_builder(filter: Option<&str>) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    if let Some(filter) = filter {
        builder.parse_filters(filter);
    } else {
        builder.filter_level(DEFAULT_LOG_LEVEL);
    }

    builder.format(|buf, record| {
        writeln!(
            buf,
            "[{} {}] {}: {}",
            buf.timestamp_millis(),
            level_letter(record.level()),
            record.target(),
            record.args()
        )
    });
    builder
}

fn init_logging() { log_builder(std::env::var("RUST_LOG").ok().as_deref()).init(); }

fn simulated_work() { thread::sleep(STAGE_WORK); }

const LOADING_STAGES: [LoadingStage; 4] = [
    LoadingStage {
        label: "Powering panel",
        callback: simulated_work,
    },
    LoadingStage {
        label: "Loading fonts",
        callback: simulated_work,
    },
    LoadingStage {
        label: "Registering frames",
        callback: simulated_work,
    },
    LoadingStage {
        label: "Starting scheduler",
        callback: simulated_work,
    },
];

fn main() {
    init_logging();

    let mut panel = SimPanel::new("frameslide");
    if !run_loading_process(&mut panel, &LOADING_STAGES, draw_loading_default) {
        return;
    }

    let frames: [&dyn Frame<SimPanel, DemoData>; 5] = [
        &title_frame::<SimPanel>,
        &status_frame::<SimPanel>,
        &uptime_frame::<SimPanel>,
        &shapes_frame::<SimPanel>,
        &fullscreen_frame::<SimPanel>,
    ];
    let overlays: [&dyn Overlay<SimPanel, DemoData>; 2] = [&clock_overlay::<SimPanel>, &manual_overlay::<SimPanel>];

    let mut ui = FrameScheduler::new(DemoData::default());
    ui.set_target_fps(TARGET_FPS);
    ui.set_time_per_frame(TIME_PER_FRAME_MS);
    ui.set_time_per_transition(TIME_PER_TRANSITION_MS);
    ui.set_frames(&frames);
    ui.set_overlays(&overlays);
    ui.state_mut().user_data.fps = TARGET_FPS;

    let start = Instant::now();
    let clock = || start.elapsed().as_millis() as u64;

    info!("running {} frames at {} fps", ui.frame_count(), TARGET_FPS);

    loop {
        ui.state_mut().user_data.uptime_ms = clock();
        let remaining = ui.update(&mut panel, &clock);

        for ev in panel.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    ui.state_mut().user_data.key_presses += 1;
                    handle_key(&mut ui, keycode);
                }
                _ => {}
            }
        }

        if remaining > 0 {
            thread::sleep(Duration::from_millis(remaining as u64));
        }
    }
}

fn handle_key(
    ui: &mut FrameScheduler<'_, SimPanel, DemoData>,
    keycode: Keycode,
) {
    match keycode {
        Keycode::A => ui.previous_frame(),
        Keycode::D => ui.next_frame(),
        Keycode::Z => ui.transition_to_frame(0),
        Keycode::X => ui.transition_to_frame(1),
        Keycode::C => ui.transition_to_frame(2),
        Keycode::V => ui.transition_to_frame(3),
        Keycode::B => ui.transition_to_frame(4),
        Keycode::J => ui.switch_to_frame(0),
        Keycode::P => {
            if ui.config().auto_transition {
                ui.disable_auto_transition();
                info!("auto transition paused");
            } else {
                ui.enable_auto_transition();
                info!("auto transition resumed");
            }
        }
        Keycode::R => match ui.state().transition_direction() {
            TransitionDirection::Forward => ui.set_auto_transition_backwards(),
            TransitionDirection::Backward => ui.set_auto_transition_forwards(),
        },
        Keycode::I => {
            if ui.config().indicator_enabled {
                ui.disable_all_indicators();
            } else {
                ui.enable_all_indicators();
            }
        }
        Keycode::O => {
            let (position, direction) = match ui.config().indicator_position {
                IndicatorPosition::Bottom => (IndicatorPosition::Left, IndicatorDirection::LeftRight),
                IndicatorPosition::Left => (IndicatorPosition::Top, IndicatorDirection::RightLeft),
                IndicatorPosition::Top => (IndicatorPosition::Right, IndicatorDirection::LeftRight),
                IndicatorPosition::Right => (IndicatorPosition::Bottom, IndicatorDirection::LeftRight),
            };
            ui.set_indicator_position(position);
            ui.set_indicator_direction(direction);
            info!("indicator {:?} {:?}", position, direction);
        }
        Keycode::M => {
            let animation = match ui.config().frame_animation {
                AnimationDirection::SlideRight => AnimationDirection::SlideLeft,
                AnimationDirection::SlideLeft => AnimationDirection::SlideUp,
                AnimationDirection::SlideUp => AnimationDirection::SlideDown,
                AnimationDirection::SlideDown => AnimationDirection::SlideRight,
            };
            ui.set_frame_animation(animation);
            info!("animation {:?}", animation);
        }
        Keycode::F => {
            let fps = if ui.state().user_data.fps == TARGET_FPS { FAST_FPS } else { TARGET_FPS };
            ui.set_target_fps(fps);
            ui.state_mut().user_data.fps = fps;
        }
        _ => {}
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_builder_default_level() {
        let logger = log_builder(None).build();
        assert_eq!(logger.filter(), LevelFilter::Debug, "Unset RUST_LOG should log at debug");
    }

    #[test]
    fn test_log_builder_parses_filter() {
        let logger = log_builder(Some("warn")).build();
        assert_eq!(logger.filter(), LevelFilter::Warn);

        let logger = log_builder(Some("frameslide=trace")).build();
        assert_eq!(logger.filter(), LevelFilter::Trace, "Per-target filters raise the maximum level");
    }

    #[test]
    fn test_level_letters() {
        assert_eq!(level_letter(Level::Trace), 'T');
        assert_eq!(level_letter(Level::Debug), 'D');
        assert_eq!(level_letter(Level::Info), 'I');
        assert_eq!(level_letter(Level::Warn), 'W');
        assert_eq!(level_letter(Level::Error), 'E');
    }
}
