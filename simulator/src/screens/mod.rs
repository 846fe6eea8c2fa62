//! Screens shown outside the frame scheduler.

mod loading;

pub use loading::{LoadingStage, draw_loading_default, run_loading_process};
