use crate::domain::level::Tuning;

use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn tuning(world: &WorldCore) -> Tuning {
    world.level.tuning()
}

pub(super) fn set_gravity(world: &mut WorldCore, gravity: f32) {
    world.level.tuning_mut().gravity = gravity;
}

pub(super) fn set_friction(world: &mut WorldCore, friction: f32) {
    world.level.tuning_mut().friction = friction;
}

pub(super) fn set_move_accel(world: &mut WorldCore, move_accel: f32) {
    world.level.tuning_mut().move_accel = move_accel;
}

pub(super) fn set_jump_impulse(world: &mut WorldCore, jump_impulse: f32) {
    world.level.tuning_mut().jump_impulse = jump_impulse;
}

pub(super) fn set_bounce(world: &mut WorldCore, bounce: f32) {
    world.level.tuning_mut().bounce = bounce;
}

pub(super) fn set_seed(world: &mut WorldCore, seed: u32) {
    // xorshift32 has a fixed point at zero; fall back to the default seed.
    world.rng_state = if seed == 0 { 12345 } else { seed };
}

pub(super) fn enable_perf_metrics(world: &mut WorldCore, enabled: bool) {
    world.perf_enabled = enabled;
}

pub(super) fn get_perf_stats(world: &WorldCore) -> PerfStats {
    world.perf_stats.clone()
}
