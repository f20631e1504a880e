use super::vec2::Vec2;

/// Player body edge length (square).
pub const PLAYER_SIZE: f32 = 30.0;
/// Player mass. Carried for future contact math; the current resolver
/// splits penetration evenly regardless of mass.
pub const PLAYER_MASS: f32 = 1.0;
/// Obstacle body edge length (square).
pub const OBSTACLE_SIZE: f32 = 40.0;
pub const OBSTACLE_MASS: f32 = 1.5;

/// What a body is to the simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyKind {
    /// Keyboard-controlled; the only body whose `grounded` flag is tracked.
    Player,
    /// Uncontrolled, subject to the same integration and segment collision.
    Obstacle,
}

/// A simulated rectangle participating in physics.
pub struct Body {
    // === Physics State ===
    /// Top-left corner (pixels).
    pub pos: Vec2,
    /// Width/height (positive, fixed per kind).
    pub size: Vec2,
    /// Velocity (pixels per frame).
    pub vel: Vec2,
    /// Mass (unused by the collision math, carried for extension).
    pub mass: f32,
    /// Resting on a surface segment this frame? Recomputed every step;
    /// only ever set for the player.
    pub grounded: bool,

    pub kind: BodyKind,
}

impl Body {
    /// Create the keyboard-controlled player body.
    pub fn player(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(PLAYER_SIZE, PLAYER_SIZE),
            vel: Vec2::zero(),
            mass: PLAYER_MASS,
            grounded: false,
            kind: BodyKind::Player,
        }
    }

    /// Create an uncontrolled obstacle body.
    pub fn obstacle(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(OBSTACLE_SIZE, OBSTACLE_SIZE),
            vel: Vec2::zero(),
            mass: OBSTACLE_MASS,
            grounded: false,
            kind: BodyKind::Obstacle,
        }
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Horizontal center, the x surface collision samples at.
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x * 0.5
    }
}
