//! Physics System - fixed-step platformer motion
//!
//! Key concepts:
//! - Bodies have velocity (pixels per frame) that persists across frames
//! - Gravity accelerates every body downward each frame
//! - Friction decays horizontal velocity each frame
//! - Segments resolve by pushing the body out and reflecting the velocity
//!   component, attenuated by the bounce factor
//! - One step = one rendered frame: explicit Euler with no delta-time
//!   scaling, assuming a stable display refresh rate
//!
//! All routines are total over finite numeric state; there are no error
//! paths. Tuning constants are assumed valid (see `domain::level::Tuning`).

use crate::domain::level::Level;
use crate::systems::body::{Body, BodyKind};

pub mod contacts;
pub mod forces;
pub mod surfaces;

pub use contacts::{rects_overlap, resolve_contact};
pub use forces::{apply_friction, apply_gravity, apply_input, integrate};
pub use surfaces::{clamp_to_bounds, resolve_segments};

/// Level-triggered movement intents, toggled by the host's key handlers
/// between frames. Reset is edge-triggered and lives on the world, not here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

/// Advance one body by one frame: input (player only), integration,
/// segment resolution, bounds clamp. Mutates in place; never fails.
///
/// Body-body contacts are a separate per-frame pass (`resolve_contact`),
/// run by the world between the player's advance and the obstacles'.
pub fn advance(body: &mut Body, input: &InputState, level: &Level) {
    let tuning = level.tuning();

    if body.kind == BodyKind::Player {
        forces::apply_input(body, input, &tuning);
    }
    forces::integrate(body, &tuning);

    // Grounded is a per-frame observation; the segment pass below re-derives it.
    body.grounded = false;
    surfaces::resolve_segments(body, level.segments(), &tuning);
    surfaces::clamp_to_bounds(body, level.bounds(), &tuning);
}
