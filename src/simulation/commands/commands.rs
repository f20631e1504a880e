use crate::domain::level::Level;
use crate::systems::body::Body;

use super::{random, render_extract, WorldCore};

/// Re-randomize the round: player near the top-left, 1..=3 obstacles
/// scattered over the lower half. Velocities are cleared; held keys are
/// not, so a reset mid-run keeps the player moving.
pub(super) fn reset(world: &mut WorldCore) {
    let bounds = world.level.bounds();

    let player_x = random::next_unit(&mut world.rng_state) * 100.0 + 50.0;
    world.player = Body::player(player_x, 50.0);

    let count = (random::next_unit(&mut world.rng_state) * 3.0) as u32 + 1;
    world.obstacles.clear();
    for _ in 0..count {
        let x = random::next_unit(&mut world.rng_state) * (bounds.width - 60.0) + 30.0;
        let y = random::next_unit(&mut world.rng_state) * 100.0 + 200.0;
        world.obstacles.push(Body::obstacle(x, y));
    }

    world.frame = 0;
}

pub(super) fn set_input(world: &mut WorldCore, left: bool, right: bool, jump: bool) {
    world.input.left = left;
    world.input.right = right;
    world.input.jump = jump;
}

pub(super) fn load_level_bundle(world: &mut WorldCore, json: &str) -> Result<(), String> {
    world.level = Level::from_bundle_json(json)?;
    render_extract::fill_segment_buffer(world);
    reset(world);
    Ok(())
}
