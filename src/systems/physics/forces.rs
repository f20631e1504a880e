use crate::domain::level::Tuning;
use crate::systems::body::Body;
use super::InputState;

/// Apply held movement keys to the player's velocity.
///
/// Left and right are additive and may cancel. Jump only fires while the
/// grounded flag from the previous frame's segment pass is still set.
#[inline(always)]
pub fn apply_input(body: &mut Body, input: &InputState, tuning: &Tuning) {
    if input.left {
        body.vel.x -= tuning.move_accel;
    }
    if input.right {
        body.vel.x += tuning.move_accel;
    }
    if input.jump && body.grounded {
        body.vel.y = tuning.jump_impulse;
        body.grounded = false;
    }
}

/// Apply gravity to a body's velocity. Unconditional, every body, every frame.
#[inline(always)]
pub fn apply_gravity(body: &mut Body, tuning: &Tuning) {
    body.vel.y += tuning.gravity;
}

/// Apply horizontal damping. Vertical velocity is left to gravity and bounce.
#[inline(always)]
pub fn apply_friction(body: &mut Body, tuning: &Tuning) {
    body.vel.x *= tuning.friction;
}

/// One explicit Euler step: forces, then position += velocity.
#[inline(always)]
pub fn integrate(body: &mut Body, tuning: &Tuning) {
    apply_gravity(body, tuning);
    apply_friction(body, tuning);
    body.pos += body.vel;
}
