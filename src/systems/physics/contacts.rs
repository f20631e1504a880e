//! Body-body contacts: AABB overlap plus a minimum-translation-vector
//! split. Only the player is tested against obstacles; obstacle-obstacle
//! pairs are skipped by the world step.

use crate::domain::level::Tuning;
use crate::systems::body::Body;

/// Axis-aligned overlap test. Open intervals: rectangles that merely share
/// an edge do not count as colliding, so one resolution pass separates.
pub fn rects_overlap(a: &Body, b: &Body) -> bool {
    if a.right() <= b.left() {
        return false;
    }
    if a.left() >= b.right() {
        return false;
    }
    if a.bottom() <= b.top() {
        return false;
    }
    if a.top() >= b.bottom() {
        return false;
    }
    true
}

/// Separate two overlapping bodies along the axis of least penetration,
/// half the overlap each, and reflect-attenuate both velocity components
/// on that axis.
pub fn resolve_contact(a: &mut Body, b: &mut Body, tuning: &Tuning) {
    if !rects_overlap(a, b) {
        return;
    }

    // Directional penetration depths; the smaller per-axis minimum picks
    // the separation axis.
    let pen_from_left = a.right() - b.left();
    let pen_from_right = b.right() - a.left();
    let pen_from_above = a.bottom() - b.top();
    let pen_from_below = b.bottom() - a.top();
    let min_x_pen = pen_from_left.min(pen_from_right);
    let min_y_pen = pen_from_above.min(pen_from_below);

    if min_x_pen < min_y_pen {
        let half = min_x_pen * 0.5;
        if a.pos.x < b.pos.x {
            a.pos.x -= half;
            b.pos.x += half;
        } else {
            a.pos.x += half;
            b.pos.x -= half;
        }
        a.vel.x = -a.vel.x * tuning.bounce;
        b.vel.x = -b.vel.x * tuning.bounce;
    } else {
        let half = min_y_pen * 0.5;
        if a.pos.y < b.pos.y {
            a.pos.y -= half;
            b.pos.y += half;
        } else {
            a.pos.y += half;
            b.pos.y -= half;
        }
        a.vel.y = -a.vel.y * tuning.bounce;
        b.vel.y = -b.vel.y * tuning.bounce;
    }
}
