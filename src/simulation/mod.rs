//! World - platformer simulation orchestration
//!
//! The world only orchestrates; all motion math lives in `systems::physics`
//! and all content in `domain::level`. One `step()` is one rendered frame:
//! the host's animation callback calls it exactly once, then extracts the
//! render buffers, then draws. Input setters only flip flags and never run
//! physics, so key handlers can fire between frames without re-entering a
//! step.

use crate::domain::level::{Level, Tuning};
use crate::systems::body::Body;
use crate::systems::physics::InputState;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/random.rs"]
mod random;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use facade::World;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// Flat f32/u8 buffers the JS renderer reads through raw pointers.
pub(crate) struct RenderBuffers {
    /// [x1, y1, x2, y2] per segment; refilled on level load.
    segments: Vec<f32>,
    /// [x, y, w, h] per body, player first; refilled per frame.
    bodies: Vec<f32>,
    /// Body kind per entry (0 = player, 1 = obstacle), parallel to `bodies`.
    body_kinds: Vec<u8>,
}

/// The simulation world
pub struct WorldCore {
    level: Level,
    player: Body,
    obstacles: Vec<Body>,
    input: InputState,

    // State
    frame: u64,
    rng_state: u32,

    render: RenderBuffers,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl WorldCore {
    /// Create a world running the built-in generated level.
    pub fn new() -> Self {
        init::create_world_core()
    }

    /// Replace level + tuning from a JSON bundle, then reset the round.
    pub fn load_level_bundle_json(&mut self, json: &str) -> Result<(), String> {
        commands::load_level_bundle(self, json)
    }

    /// Re-serialize the active level for host-side display.
    pub fn level_manifest_json(&self) -> String {
        self.level.manifest_json()
    }

    pub fn width(&self) -> f32 {
        self.level.bounds().width
    }

    pub fn height(&self) -> f32 {
        self.level.bounds().height
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn body_count(&self) -> usize {
        1 + self.obstacles.len()
    }

    pub fn obstacle_count(&self) -> usize {
        self.obstacles.len()
    }

    pub fn segment_count(&self) -> usize {
        self.level.segment_count()
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn player(&self) -> &Body {
        &self.player
    }

    pub fn obstacles(&self) -> &[Body] {
        &self.obstacles
    }

    /// Current tuning constants.
    pub fn tuning(&self) -> Tuning {
        settings::tuning(self)
    }

    pub fn set_gravity(&mut self, gravity: f32) {
        settings::set_gravity(self, gravity);
    }

    pub fn set_friction(&mut self, friction: f32) {
        settings::set_friction(self, friction);
    }

    pub fn set_move_accel(&mut self, move_accel: f32) {
        settings::set_move_accel(self, move_accel);
    }

    pub fn set_jump_impulse(&mut self, jump_impulse: f32) {
        settings::set_jump_impulse(self, jump_impulse);
    }

    pub fn set_bounce(&mut self, bounce: f32) {
        settings::set_bounce(self, bounce);
    }

    /// Seed the reset RNG (deterministic rounds for tests/replays).
    pub fn set_seed(&mut self, seed: u32) {
        settings::set_seed(self, seed);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Level-triggered movement intents from the host's key handlers.
    pub fn set_input(&mut self, left: bool, right: bool, jump: bool) {
        commands::set_input(self, left, right, jump);
    }

    /// Edge-triggered round reset: re-randomizes the player position and
    /// the obstacle set.
    pub fn reset(&mut self) {
        commands::reset(self);
    }

    /// Step the simulation forward by one frame.
    pub fn step(&mut self) {
        step::step(self);
    }

    /// Refresh the per-frame body buffers; returns the body count.
    pub fn fill_render_buffers(&mut self) -> usize {
        render_extract::fill_body_buffers(self)
    }

    pub fn segments_ptr(&self) -> *const f32 {
        self.render.segments.as_ptr()
    }

    pub fn segments_len(&self) -> usize {
        self.render.segments.len()
    }

    pub fn bodies_ptr(&self) -> *const f32 {
        self.render.bodies.as_ptr()
    }

    pub fn bodies_len(&self) -> usize {
        self.render.bodies.len()
    }

    pub fn body_kinds_ptr(&self) -> *const u8 {
        self.render.body_kinds.as_ptr()
    }

    pub fn body_kinds_len(&self) -> usize {
        self.render.body_kinds.len()
    }
}

impl Default for WorldCore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
