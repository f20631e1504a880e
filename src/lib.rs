//! Platforma Engine - 2D platformer physics in WASM
//!
//! A fixed-step physics core for a keyboard-driven platformer:
//! - domain/      - Level content (segments, bounds, tuning)
//! - systems/     - Bodies and the physics routines that move them
//! - simulation/  - Orchestration + wasm facade
//!
//! One `step()` equals one rendered frame. The host page owns the
//! `requestAnimationFrame` loop and the canvas; the engine hands it flat
//! render buffers and never reads anything back.

pub mod domain;
pub mod systems;
pub mod simulation;

// Re-export main types
pub use domain::level::{Level, LevelBounds, Segment, SegmentKind, Tuning};
pub use simulation::{PerfStats, World, WorldCore};
pub use systems::body::{Body, BodyKind, Vec2};
pub use systems::physics;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🦀 Platforma WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
