use wasm_bindgen::prelude::*;

/// Per-step timing/count snapshot, populated only while perf metrics are
/// enabled.
#[wasm_bindgen]
#[derive(Clone)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) player_ms: f64,
    pub(super) contacts_ms: f64,
    pub(super) obstacles_ms: f64,
    pub(super) body_count: u32,
    pub(super) segment_count: u32,
    pub(super) contacts_resolved: u32,
    pub(super) max_speed: f32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

impl Default for PerfStats {
    fn default() -> Self {
        PerfStats {
            step_ms: 0.0,
            player_ms: 0.0,
            contacts_ms: 0.0,
            obstacles_ms: 0.0,
            body_count: 0,
            segment_count: 0,
            contacts_resolved: 0,
            max_speed: 0.0,
        }
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn player_ms(&self) -> f64 { self.player_ms }
    #[wasm_bindgen(getter)]
    pub fn contacts_ms(&self) -> f64 { self.contacts_ms }
    #[wasm_bindgen(getter)]
    pub fn obstacles_ms(&self) -> f64 { self.obstacles_ms }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
    #[wasm_bindgen(getter)]
    pub fn segment_count(&self) -> u32 { self.segment_count }
    #[wasm_bindgen(getter)]
    pub fn contacts_resolved(&self) -> u32 { self.contacts_resolved }
    #[wasm_bindgen(getter)]
    pub fn max_speed(&self) -> f32 { self.max_speed }
}
