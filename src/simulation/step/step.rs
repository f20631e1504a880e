use crate::systems::physics::{advance, rects_overlap, resolve_contact};

use super::{PerfTimer, WorldCore};

/// One frame: player advance, player-vs-obstacle contacts, obstacle
/// advances. Contacts resolve against obstacle positions from BEFORE the
/// obstacles' own integration this frame; replays depend on this order.
///
/// Obstacle-obstacle contacts are intentionally not computed.
pub(super) fn step(world: &mut WorldCore) {
    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
        world.perf_stats.body_count = (1 + world.obstacles.len()) as u32;
        world.perf_stats.segment_count = world.level.segment_count() as u32;
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    // === PLAYER ===
    if perf_on {
        let t0 = PerfTimer::start();
        advance(&mut world.player, &world.input, &world.level);
        world.perf_stats.player_ms = t0.elapsed_ms();
    } else {
        advance(&mut world.player, &world.input, &world.level);
    }

    // === CONTACTS ===
    let tuning = world.level.tuning();
    if perf_on {
        let t0 = PerfTimer::start();
        let mut resolved: u32 = 0;
        for obstacle in world.obstacles.iter_mut() {
            if rects_overlap(&world.player, obstacle) {
                resolved += 1;
            }
            resolve_contact(&mut world.player, obstacle, &tuning);
        }
        world.perf_stats.contacts_ms = t0.elapsed_ms();
        world.perf_stats.contacts_resolved = resolved;
    } else {
        for obstacle in world.obstacles.iter_mut() {
            resolve_contact(&mut world.player, obstacle, &tuning);
        }
    }

    // === OBSTACLES ===
    if perf_on {
        let t0 = PerfTimer::start();
        for obstacle in world.obstacles.iter_mut() {
            advance(obstacle, &world.input, &world.level);
        }
        world.perf_stats.obstacles_ms = t0.elapsed_ms();
    } else {
        for obstacle in world.obstacles.iter_mut() {
            advance(obstacle, &world.input, &world.level);
        }
    }

    if perf_on {
        let mut max_speed = world.player.vel.length();
        for obstacle in world.obstacles.iter() {
            max_speed = max_speed.max(obstacle.vel.length());
        }
        world.perf_stats.max_speed = max_speed;
        if let Some(start) = step_start {
            world.perf_stats.step_ms = start.elapsed_ms();
        }
    }

    world.frame += 1;
}
