use crate::domain::level::Level;
use crate::systems::body::Body;
use crate::systems::physics::InputState;

use super::perf_stats::PerfStats;
use super::{commands, render_extract, RenderBuffers, WorldCore};

pub(super) fn create_world_core() -> WorldCore {
    let level = Level::from_generated();
    let mut world = WorldCore {
        player: Body::player(100.0, 50.0),
        obstacles: Vec::new(),
        input: InputState::default(),
        frame: 0,
        rng_state: 12345,

        render: RenderBuffers {
            segments: Vec::with_capacity(level.segment_count() * 4),
            bodies: Vec::with_capacity(16),
            body_kinds: Vec::with_capacity(4),
        },
        level,

        perf_enabled: false,
        perf_stats: PerfStats::default(),
    };

    render_extract::fill_segment_buffer(&mut world);
    commands::reset(&mut world);
    world
}
