use super::*;
use crate::systems::body::Vec2;
use crate::systems::physics::rects_overlap;

const FLAT_BUNDLE: &str = r#"{
    "formatVersion": 1,
    "segments": [ { "x1": 0, "y1": 300, "x2": 800, "y2": 300 } ]
}"#;

/// A world with no obstacles, so scenarios only exercise the body under test.
fn solo_world() -> WorldCore {
    let mut world = WorldCore::new();
    world.obstacles.clear();
    world
}

fn flat_world() -> WorldCore {
    let mut world = solo_world();
    world
        .load_level_bundle_json(FLAT_BUNDLE)
        .expect("flat bundle should parse");
    world.obstacles.clear();
    world
}

#[test]
fn new_world_spawns_a_round() {
    let world = WorldCore::new();

    assert_eq!(world.frame(), 0);
    assert_eq!(world.segment_count(), 4);
    assert!((1..=3).contains(&world.obstacle_count()));
    assert_eq!(world.body_count(), 1 + world.obstacle_count());

    assert!((50.0..150.0).contains(&world.player().pos.x));
    assert_eq!(world.player().pos.y, 50.0);
    assert_eq!(world.player().vel, Vec2::zero());
}

#[test]
fn reset_ranges_hold_across_seeds() {
    let mut world = WorldCore::new();
    let bounds = world.level().bounds();

    for seed in 1..50u32 {
        world.set_seed(seed);
        world.reset();

        assert!((50.0..150.0).contains(&world.player().pos.x));
        assert_eq!(world.player().pos.y, 50.0);
        assert!((1..=3).contains(&world.obstacle_count()));

        for obstacle in world.obstacles() {
            assert!(obstacle.pos.x >= 30.0);
            assert!(obstacle.pos.x < bounds.width - 30.0);
            assert!((200.0..300.0).contains(&obstacle.pos.y));
            assert_eq!(obstacle.vel, Vec2::zero());
        }
    }
}

#[test]
fn reset_is_deterministic_per_seed() {
    let mut a = WorldCore::new();
    let mut b = WorldCore::new();

    a.set_seed(99);
    a.reset();
    b.set_seed(99);
    b.reset();

    assert_eq!(a.player().pos.x, b.player().pos.x);
    assert_eq!(a.obstacle_count(), b.obstacle_count());
    for (oa, ob) in a.obstacles().iter().zip(b.obstacles()) {
        assert_eq!(oa.pos.x, ob.pos.x);
        assert_eq!(oa.pos.y, ob.pos.y);
    }
}

#[test]
fn body_at_rest_stays_put() {
    let mut world = flat_world();
    // Bottom edge exactly on the surface, no velocity, no input.
    world.player.pos = Vec2::new(100.0, 270.0);
    world.player.vel = Vec2::zero();

    world.step();

    // Gravity pulls it 0.3 below the line, the surface snaps it back.
    assert_eq!(world.player().pos.x, 100.0);
    assert_eq!(world.player().pos.y, 270.0);
    assert!(world.player().grounded);
}

#[test]
fn ground_bounce_attenuates_incoming_velocity() {
    let mut world = flat_world();
    // vy becomes exactly 5.0 after gravity; bottom ends below the line.
    world.player.pos = Vec2::new(100.0, 266.0);
    world.player.vel = Vec2::new(0.0, 4.7);

    world.step();

    assert_eq!(world.player().bottom(), 300.0);
    assert_eq!(world.player().vel.y, -1.5);
    assert!(world.player().grounded);
}

#[test]
fn player_falls_and_settles_on_the_ramp() {
    let mut world = solo_world();
    world.player.pos = Vec2::new(100.0, 50.0);
    world.player.vel = Vec2::zero();

    for _ in 0..300 {
        world.step();
    }

    let player = world.player();
    assert!(player.grounded);

    // Expected height from the level's own interpolation under the
    // player's center (x stays 100 with no input and no obstacles).
    let expected = world
        .level()
        .segments()
        .iter()
        .find_map(|seg| seg.surface_y_at(player.center_x()))
        .expect("player center should sit over a surface");
    assert!((player.bottom() - expected).abs() < 0.01);
    assert!(player.vel.y.abs() < 0.5);
}

#[test]
fn wall_contains_player_and_reflects_velocity() {
    let mut world = solo_world();
    world.player.pos = Vec2::new(1.0, 50.0);
    world.player.vel = Vec2::new(-5.0, 0.0);

    world.step();

    let player = world.player();
    assert!(player.pos.x >= 0.0);
    // Sign flipped, magnitude shrunk: friction (0.9) then bounce (0.3).
    assert!(player.vel.x > 0.0);
    assert!((player.vel.x - 1.35).abs() < 1e-4);
}

#[test]
fn held_direction_accelerates_player() {
    let mut world = solo_world();
    world.player.pos = Vec2::new(100.0, 50.0);
    world.set_input(false, true, false);

    world.step();

    let player = world.player();
    assert!(player.vel.x > 0.0);
    assert!(player.pos.x > 100.0);
}

#[test]
fn jump_fires_only_from_the_ground() {
    let mut world = flat_world();
    world.player.pos = Vec2::new(100.0, 270.0);
    world.player.vel = Vec2::zero();

    // Land once so grounded carries into the next frame.
    world.step();
    assert!(world.player().grounded);

    world.set_input(false, false, true);
    world.step();

    let airborne_y = world.player().pos.y;
    assert!(airborne_y < 270.0);
    assert!(world.player().vel.y < 0.0);
    assert!(!world.player().grounded);

    // Still holding jump mid-air must not double-fire.
    let vy_before = world.player().vel.y;
    world.step();
    assert!(world.player().vel.y > vy_before);
}

#[test]
fn player_obstacle_overlap_is_separated_within_a_step() {
    let mut world = solo_world();
    world.player.pos = Vec2::new(100.0, 100.0);
    world.player.vel = Vec2::zero();
    world.obstacles.push(crate::systems::body::Body::obstacle(105.0, 115.0));

    world.step();

    let player = world.player();
    let obstacle = &world.obstacles()[0];
    assert!(!rects_overlap(player, obstacle));
}

#[test]
fn obstacles_fall_under_gravity_too() {
    let mut world = solo_world();
    world.obstacles.push(crate::systems::body::Body::obstacle(300.0, 100.0));

    world.step();
    world.step();

    let obstacle = &world.obstacles()[0];
    assert!(obstacle.vel.y > 0.0);
    assert!(obstacle.pos.y > 100.0);
    // Obstacles never report grounded even once settled.
    assert!(!obstacle.grounded);
}

#[test]
fn steps_are_deterministic_for_equal_seeds_and_input() {
    let mut a = WorldCore::new();
    let mut b = WorldCore::new();
    a.set_seed(7);
    a.reset();
    b.set_seed(7);
    b.reset();

    for i in 0..120u32 {
        let right = i % 3 == 0;
        a.set_input(false, right, false);
        b.set_input(false, right, false);
        a.step();
        b.step();
    }

    assert_eq!(a.player().pos.x, b.player().pos.x);
    assert_eq!(a.player().pos.y, b.player().pos.y);
    assert_eq!(a.player().vel.x, b.player().vel.x);
    assert_eq!(a.player().vel.y, b.player().vel.y);
}

#[test]
fn load_level_bundle_swaps_geometry_and_resets() {
    let mut world = WorldCore::new();
    for _ in 0..10 {
        world.step();
    }

    world
        .load_level_bundle_json(FLAT_BUNDLE)
        .expect("flat bundle should parse");

    assert_eq!(world.segment_count(), 1);
    assert_eq!(world.frame(), 0);
    assert!((1..=3).contains(&world.obstacle_count()));
    assert_eq!(world.segments_len(), 4);

    // Bad bundles leave the world untouched.
    let before = world.segment_count();
    assert!(world.load_level_bundle_json("not json").is_err());
    assert_eq!(world.segment_count(), before);
}

#[test]
fn render_buffers_mirror_world_state() {
    let mut world = WorldCore::new();

    let count = world.fill_render_buffers();
    assert_eq!(count, world.body_count());
    assert_eq!(world.bodies_len(), 4 * count);
    assert_eq!(world.body_kinds_len(), count);
    assert_eq!(world.segments_len(), 4 * world.segment_count());

    // Player first, obstacles after.
    assert_eq!(world.render.body_kinds[0], 0);
    assert!(world.render.body_kinds[1..].iter().all(|&k| k == 1));
    assert_eq!(world.render.bodies[0], world.player().pos.x);
    assert_eq!(world.render.bodies[1], world.player().pos.y);
}

#[test]
fn perf_stats_populate_when_enabled() {
    let mut world = WorldCore::new();

    world.step();
    assert_eq!(world.get_perf_stats().body_count(), 0);

    world.enable_perf_metrics(true);
    world.step();

    let stats = world.get_perf_stats();
    assert_eq!(stats.body_count(), world.body_count() as u32);
    assert_eq!(stats.segment_count(), world.segment_count() as u32);
    assert!(stats.step_ms() >= 0.0);
    assert!(stats.max_speed() > 0.0);
}
