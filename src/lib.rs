//! Snake cover core crate.
//!
//! A self-playing snake that follows a scripted route across a tiled canvas,
//! eating food and growing as it goes, plus the small "theory" teaser canvas.
//! The simulation (`animation`, `motion`, `path`, `food`) and the drawing
//! (`render`, `teaser`) are plain Rust and run natively under `cargo test`; the
//! `web` module wires them to a browser canvas and an interval timer.

use wasm_bindgen::prelude::*;

pub mod animation;
pub mod clock;
pub mod config;
pub mod food;
pub mod grid;
pub mod logging;
pub mod motion;
pub mod path;
pub mod presets;
pub mod render;
pub mod teaser;
pub mod web;

pub use animation::{AnimationState, ResetCause, Tick};
pub use config::{AnimationConfig, ConfigError, Styles, Tuning};
pub use grid::{Cell, Direction, Movement};
pub use path::Waypoint;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // A second module instance on the same page already has a logger.
    let _ = logging::init(log::LevelFilter::Info);
}
