//! Level bundles: segment geometry, canvas bounds, physics tuning.
//!
//! Levels are data, not code. A bundle is a small camelCase JSON document
//! produced by the level editor; `from_bundle_json` validates it into an
//! immutable `Level`, and `from_generated` provides the built-in default
//! map so the engine runs without any fetch.

use serde::{Deserialize, Serialize};

/// Segments with a horizontal extent below this are treated as walls.
pub const WALL_EPSILON: f32 = 0.01;

/// How a segment participates in collision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentKind {
    /// Near-vertical: blocks horizontal motion across its x position.
    Wall,
    /// Sloped or flat: supports bodies from above along its span.
    Surface,
}

/// An immutable line from (x1, y1) to (x2, y2).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl Segment {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn dx(&self) -> f32 {
        self.x2 - self.x1
    }

    pub fn dy(&self) -> f32 {
        self.y2 - self.y1
    }

    pub fn kind(&self) -> SegmentKind {
        if self.dx().abs() < WALL_EPSILON {
            SegmentKind::Wall
        } else {
            SegmentKind::Surface
        }
    }

    /// Surface height under `x`, or `None` outside the segment's span.
    ///
    /// Interpolation is strictly parametric: no extrapolation past either
    /// endpoint, so a body whose center leaves the span simply falls.
    pub fn surface_y_at(&self, x: f32) -> Option<f32> {
        let min_x = self.x1.min(self.x2);
        let max_x = self.x1.max(self.x2);
        if x < min_x || x > max_x {
            return None;
        }
        let t = (x - self.x1) / self.dx();
        if !(0.0..=1.0).contains(&t) {
            return None;
        }
        Some(self.y1 + self.dy() * t)
    }
}

/// Logical canvas size shared by physics clamping and the host renderer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LevelBounds {
    pub width: f32,
    pub height: f32,
}

impl Default for LevelBounds {
    fn default() -> Self {
        Self { width: 800.0, height: 400.0 }
    }
}

/// World constants, fixed for the lifetime of a loaded level.
///
/// Assumed-valid-configuration precondition: the step itself never checks
/// that `friction` and `bounce` actually dampen. Bundle loading validates
/// ranges once at the content boundary; live setters trust the caller.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Tuning {
    /// Downward acceleration added to vy every frame.
    pub gravity: f32,
    /// Per-frame horizontal velocity decay, 0 < f < 1.
    pub friction: f32,
    /// Horizontal acceleration per held direction key.
    pub move_accel: f32,
    /// vy applied on jump (negative = up).
    pub jump_impulse: f32,
    /// Fraction of velocity retained (sign-flipped) after a collision, 0 <= r < 1.
    pub bounce: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.3,
            friction: 0.9,
            move_accel: 0.3,
            jump_impulse: -8.0,
            bounce: 0.3,
        }
    }
}

/// A validated, immutable level: geometry + bounds + tuning.
#[derive(Clone, Debug)]
pub struct Level {
    bounds: LevelBounds,
    tuning: Tuning,
    segments: Vec<Segment>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BundleRoot {
    format_version: u32,
    #[serde(default)]
    bounds: LevelBounds,
    #[serde(default)]
    tuning: Tuning,
    segments: Vec<Segment>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LevelManifest<'a> {
    format_version: u32,
    bounds: LevelBounds,
    tuning: Tuning,
    segments: &'a [Segment],
}

impl Level {
    pub fn from_bundle_json(json: &str) -> Result<Self, String> {
        let bundle: BundleRoot = serde_json::from_str(json).map_err(|e| e.to_string())?;
        Self::from_bundle(bundle)
    }

    /// The built-in map: two ramps meeting mid-canvas, walled at both ends.
    pub fn from_generated() -> Self {
        Self {
            bounds: LevelBounds::default(),
            tuning: Tuning::default(),
            segments: vec![
                Segment::new(0.0, 400.0, 400.0, 350.0),
                Segment::new(400.0, 350.0, 800.0, 400.0),
                Segment::new(0.0, 0.0, 0.0, 400.0),
                Segment::new(800.0, 0.0, 800.0, 400.0),
            ],
        }
    }

    pub fn bounds(&self) -> LevelBounds {
        self.bounds
    }

    pub fn tuning(&self) -> Tuning {
        self.tuning
    }

    pub fn tuning_mut(&mut self) -> &mut Tuning {
        &mut self.tuning
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Re-serialize the active level for host-side display.
    pub fn manifest_json(&self) -> String {
        let out = LevelManifest {
            format_version: 1,
            bounds: self.bounds,
            tuning: self.tuning,
            segments: &self.segments,
        };
        serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
    }

    fn from_bundle(bundle: BundleRoot) -> Result<Self, String> {
        if bundle.format_version != 1 {
            return Err(format!(
                "unsupported formatVersion: {}",
                bundle.format_version
            ));
        }

        let bounds = bundle.bounds;
        if !(bounds.width.is_finite() && bounds.height.is_finite())
            || bounds.width <= 0.0
            || bounds.height <= 0.0
        {
            return Err(format!(
                "bounds must be positive and finite: {}x{}",
                bounds.width, bounds.height
            ));
        }

        if bundle.segments.is_empty() {
            return Err("level has no segments".to_string());
        }
        for (i, seg) in bundle.segments.iter().enumerate() {
            let finite = seg.x1.is_finite()
                && seg.y1.is_finite()
                && seg.x2.is_finite()
                && seg.y2.is_finite();
            if !finite {
                return Err(format!("segment {} has non-finite coordinates", i));
            }
        }

        let tuning = bundle.tuning;
        if !tuning.gravity.is_finite()
            || !tuning.move_accel.is_finite()
            || !tuning.jump_impulse.is_finite()
        {
            return Err("tuning has non-finite values".to_string());
        }
        if !(0.0..1.0).contains(&tuning.friction) {
            return Err(format!("friction out of range [0, 1): {}", tuning.friction));
        }
        if !(0.0..1.0).contains(&tuning.bounce) {
            return Err(format!("bounce out of range [0, 1): {}", tuning.bounce));
        }

        Ok(Self {
            bounds,
            tuning,
            segments: bundle.segments,
        })
    }
}
