use wasm_bindgen::prelude::*;

use super::perf_stats::PerfStats;
use super::WorldCore;

/// JS-facing world handle. The host page owns the animation loop and the
/// canvas; per callback it calls `step()`, then `extract_render_frame()`,
/// then draws from the buffer pointers. Stopping the loop is host-side
/// non-rescheduling; there is nothing to cancel in here.
#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create a world running the built-in generated level.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: WorldCore::new(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize { self.core.body_count() }

    #[wasm_bindgen(getter)]
    pub fn obstacle_count(&self) -> usize { self.core.obstacle_count() }

    #[wasm_bindgen(getter)]
    pub fn segment_count(&self) -> usize { self.core.segment_count() }

    /// Replace level + tuning from a JSON bundle, then reset the round.
    pub fn load_level_bundle(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_level_bundle_json(&json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    /// Re-serialize the active level for host-side display.
    pub fn get_level_manifest_json(&self) -> String {
        self.core.level_manifest_json()
    }

    /// Step the simulation forward by one frame.
    pub fn step(&mut self) {
        self.core.step();
    }

    /// Edge-triggered round reset (the host's reset key/button).
    pub fn reset(&mut self) {
        self.core.reset();
    }

    /// Level-triggered movement intents; key handlers only flip these
    /// flags, physics runs in the next `step()`.
    pub fn set_input(&mut self, left: bool, right: bool, jump: bool) {
        self.core.set_input(left, right, jump);
    }

    /// Seed the reset RNG (deterministic rounds for tests/replays).
    pub fn set_seed(&mut self, seed: u32) {
        self.core.set_seed(seed);
    }

    // === TUNING ===

    pub fn set_gravity(&mut self, gravity: f32) {
        self.core.set_gravity(gravity);
    }

    pub fn set_friction(&mut self, friction: f32) {
        self.core.set_friction(friction);
    }

    pub fn set_move_accel(&mut self, move_accel: f32) {
        self.core.set_move_accel(move_accel);
    }

    pub fn set_jump_impulse(&mut self, jump_impulse: f32) {
        self.core.set_jump_impulse(jump_impulse);
    }

    pub fn set_bounce(&mut self, bounce: f32) {
        self.core.set_bounce(bounce);
    }

    #[wasm_bindgen(getter)]
    pub fn gravity(&self) -> f32 { self.core.tuning().gravity }

    #[wasm_bindgen(getter)]
    pub fn friction(&self) -> f32 { self.core.tuning().friction }

    #[wasm_bindgen(getter)]
    pub fn move_accel(&self) -> f32 { self.core.tuning().move_accel }

    #[wasm_bindgen(getter)]
    pub fn jump_impulse(&self) -> f32 { self.core.tuning().jump_impulse }

    #[wasm_bindgen(getter)]
    pub fn bounce(&self) -> f32 { self.core.tuning().bounce }

    // === PLAYER STATE (HUD/debug) ===

    #[wasm_bindgen(getter)]
    pub fn player_x(&self) -> f32 { self.core.player().pos.x }

    #[wasm_bindgen(getter)]
    pub fn player_y(&self) -> f32 { self.core.player().pos.y }

    #[wasm_bindgen(getter)]
    pub fn player_vx(&self) -> f32 { self.core.player().vel.x }

    #[wasm_bindgen(getter)]
    pub fn player_vy(&self) -> f32 { self.core.player().vel.y }

    #[wasm_bindgen(getter)]
    pub fn player_on_ground(&self) -> bool { self.core.player().grounded }

    // === RENDER BUFFERS ===

    /// Refresh the per-frame body buffers; returns the body count.
    pub fn extract_render_frame(&mut self) -> usize {
        self.core.fill_render_buffers()
    }

    /// Get pointer to segment geometry [x1, y1, x2, y2] per segment
    /// (for JS rendering; static per level)
    pub fn segments_ptr(&self) -> *const f32 {
        self.core.segments_ptr()
    }

    pub fn segments_len(&self) -> usize {
        self.core.segments_len()
    }

    /// Get pointer to body rects [x, y, w, h] per body, player first
    pub fn bodies_ptr(&self) -> *const f32 {
        self.core.bodies_ptr()
    }

    pub fn bodies_len(&self) -> usize {
        self.core.bodies_len()
    }

    /// Get pointer to body kinds (0 = player, 1 = obstacle)
    pub fn body_kinds_ptr(&self) -> *const u8 {
        self.core.body_kinds_ptr()
    }

    pub fn body_kinds_len(&self) -> usize {
        self.core.body_kinds_len()
    }

    // === PERF ===

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
