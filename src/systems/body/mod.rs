//! Body - a simulated rectangle with position and velocity
//!
//! Bodies store their top-left corner plus size; all collision math works
//! on that axis-aligned rectangle.

mod body;
mod vec2;

pub use body::{Body, BodyKind, OBSTACLE_MASS, OBSTACLE_SIZE, PLAYER_MASS, PLAYER_SIZE};
pub use vec2::Vec2;
