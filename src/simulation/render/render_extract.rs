//! Render extraction: the engine's half of the renderer contract.
//!
//! The JS host draws segments as strokes and bodies as filled rects from
//! these flat buffers; nothing is ever read back. Segment geometry is
//! static per level, so its buffer is refilled only on load; body data
//! changes every frame.

use crate::systems::body::BodyKind;

use super::WorldCore;

pub(super) fn fill_segment_buffer(world: &mut WorldCore) {
    world.render.segments.clear();
    for seg in world.level.segments() {
        world.render.segments.extend_from_slice(&[seg.x1, seg.y1, seg.x2, seg.y2]);
    }
}

/// Refresh [x, y, w, h] + kind per body, player first. Returns body count.
pub(super) fn fill_body_buffers(world: &mut WorldCore) -> usize {
    world.render.bodies.clear();
    world.render.body_kinds.clear();

    let player = &world.player;
    world.render.bodies.extend_from_slice(&[
        player.pos.x,
        player.pos.y,
        player.size.x,
        player.size.y,
    ]);
    world.render.body_kinds.push(kind_tag(player.kind));

    for obstacle in world.obstacles.iter() {
        world.render.bodies.extend_from_slice(&[
            obstacle.pos.x,
            obstacle.pos.y,
            obstacle.size.x,
            obstacle.size.y,
        ]);
        world.render.body_kinds.push(kind_tag(obstacle.kind));
    }

    world.render.body_kinds.len()
}

fn kind_tag(kind: BodyKind) -> u8 {
    match kind {
        BodyKind::Player => 0,
        BodyKind::Obstacle => 1,
    }
}
