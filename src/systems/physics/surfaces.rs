//! Segment resolution: walls push sideways, surfaces snap from above,
//! and the canvas bounds catch whatever slips through.

use crate::domain::level::{LevelBounds, Segment, SegmentKind, Tuning};
use crate::systems::body::{Body, BodyKind};

/// Resolve a body against every segment, in level order.
///
/// NOTE: resolution is order-dependent. A later segment's correction can
/// override an earlier one within the same frame; existing levels depend
/// on this, so it is kept as an accepted approximation rather than a
/// contact-solver guarantee. Reordering a level's segment list changes
/// multi-contact frames.
pub fn resolve_segments(body: &mut Body, segments: &[Segment], tuning: &Tuning) {
    for seg in segments {
        match seg.kind() {
            SegmentKind::Wall => resolve_wall(body, seg, tuning),
            SegmentKind::Surface => resolve_surface(body, seg, tuning),
        }
    }
}

/// Push a body out of a near-vertical wall and reflect vx.
///
/// The outward side comes from the sign of the segment's dx: a rising
/// (dx > 0) wall opens to the right, so the body is pushed out to its
/// left; anything else pushes right. Zero-dx walls therefore always push
/// right, and a wall sitting on the canvas's right edge relies on the
/// bounds clamp to recover.
fn resolve_wall(body: &mut Body, seg: &Segment, tuning: &Tuning) {
    let left = seg.x1.min(seg.x2);
    let right = seg.x1.max(seg.x2);

    if body.right() > left && body.left() < right {
        if seg.dx() > 0.0 {
            body.pos.x = left - body.size.x;
        } else {
            body.pos.x = right;
        }
        body.vel.x = -body.vel.x * tuning.bounce;
    }
}

/// Snap a body onto a sloped/flat surface when its bottom edge has sunk
/// below the line under its horizontal center.
fn resolve_surface(body: &mut Body, seg: &Segment, tuning: &Tuning) {
    let Some(line_y) = seg.surface_y_at(body.center_x()) else {
        return;
    };

    if body.bottom() > line_y {
        body.pos.y = line_y - body.size.y;
        body.vel.y = -body.vel.y * tuning.bounce;

        if body.kind == BodyKind::Player {
            body.grounded = true;
        }
    }
}

/// Keep the body inside the logical canvas. Runs after segment resolution;
/// a firing clamp also reflects and attenuates the matching velocity
/// component.
pub fn clamp_to_bounds(body: &mut Body, bounds: LevelBounds, tuning: &Tuning) {
    if body.pos.x < 0.0 {
        body.pos.x = 0.0;
        body.vel.x = -body.vel.x * tuning.bounce;
    }
    if body.right() > bounds.width {
        body.pos.x = bounds.width - body.size.x;
        body.vel.x = -body.vel.x * tuning.bounce;
    }
    if body.pos.y < 0.0 {
        body.pos.y = 0.0;
        body.vel.y = -body.vel.y * tuning.bounce;
    }
    if body.bottom() > bounds.height {
        body.pos.y = bounds.height - body.size.y;
        body.vel.y = -body.vel.y * tuning.bounce;
    }
}
