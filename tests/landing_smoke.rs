//! End-to-end landing scenario through the public API only.

use platforma_engine::WorldCore;

#[test]
fn a_fresh_round_settles_onto_the_map() {
    let mut world = WorldCore::new();
    world.set_seed(3);
    world.reset();

    for _ in 0..600 {
        world.step();
    }

    // The player has come to rest by now - on the ground or on top of an
    // obstacle (only the former sets `grounded`). Either way its height
    // stays put from here on.
    let mut min_y = f32::MAX;
    let mut max_y = f32::MIN;
    for _ in 0..60 {
        world.step();
        min_y = min_y.min(world.player().pos.y);
        max_y = max_y.max(world.player().pos.y);
    }
    assert!(max_y - min_y < 2.0, "player still moving: {}..{}", min_y, max_y);
    assert!(world.player().vel.y.abs() < 1.0);

    // Everything stays inside the canvas.
    let bounds = world.level().bounds();
    let player = world.player();
    assert!(player.pos.x >= 0.0 && player.right() <= bounds.width);
    assert!(player.pos.y >= 0.0 && player.bottom() <= bounds.height);
    for obstacle in world.obstacles() {
        assert!(obstacle.pos.x >= 0.0 && obstacle.right() <= bounds.width);
        assert!(obstacle.pos.y >= 0.0 && obstacle.bottom() <= bounds.height);
    }
}

#[test]
fn resets_between_rounds_respawn_everything() {
    let mut world = WorldCore::new();

    for round in 0..5u32 {
        world.set_seed(round + 1);
        world.reset();

        assert_eq!(world.frame(), 0);
        assert!((50.0..150.0).contains(&world.player().pos.x));
        assert_eq!(world.player().pos.y, 50.0);
        assert!((1..=3).contains(&world.obstacle_count()));

        for _ in 0..30 {
            world.step();
        }
        assert_eq!(world.frame(), 30);
    }
}
