//! Simulation systems: bodies and the physics that moves them.

pub mod body;
pub mod physics;
