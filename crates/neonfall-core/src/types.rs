//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// 2D direction/offset vector in arena space (pixels).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

/// 2D position in arena space (pixels, origin top-left, y grows downward).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

/// 2D velocity (pixels per reference tick).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
}

/// Simulation time tracking. `elapsed` accumulates the (capped) delta
/// multiplier, so it measures reference ticks at 60 fps, not wall time.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of `tick()` calls so far.
    pub tick: u64,
    /// Elapsed time in reference-tick units.
    pub elapsed: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Unit vector in the same direction; the zero vector stays zero
    /// rather than dividing by zero.
    pub fn normalized(&self) -> Vec2 {
        let len = self.length();
        if len == 0.0 {
            Vec2::ZERO
        } else {
            Vec2::new(self.x / len, self.y / len)
        }
    }

    /// Rotate counterclockwise by an angle given in degrees.
    pub fn rotated_deg(&self, angle_deg: f32) -> Vec2 {
        let rad = angle_deg.to_radians();
        let (sin, cos) = rad.sin_cos();
        Vec2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Perpendicular vector (90 degrees counterclockwise).
    pub fn perp(&self) -> Vec2 {
        Vec2::new(-self.y, self.x)
    }

    /// Unit vector at the given absolute angle in radians.
    pub fn from_angle(rad: f32) -> Vec2 {
        let (sin, cos) = rad.sin_cos();
        Vec2::new(cos, sin)
    }

    pub fn scaled(&self, factor: f32) -> Vec2 {
        Vec2::new(self.x * factor, self.y * factor)
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: Position) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Offset vector from `self` to `other`.
    pub fn offset_to(&self, other: Position) -> Vec2 {
        Vec2::new(other.x - self.x, other.y - self.y)
    }

    pub fn translated(&self, offset: Vec2) -> Position {
        Position::new(self.x + offset.x, self.y + offset.y)
    }

    /// Clamp into the arena, keeping a margin of `half` on every side.
    pub fn clamped(&self, half: f32) -> Position {
        Position::new(
            self.x.clamp(half, crate::constants::ARENA_WIDTH - half),
            self.y.clamp(half, crate::constants::ARENA_HEIGHT - half),
        )
    }
}

impl Velocity {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Velocity along a direction at the given speed.
    pub fn along(dir: Vec2, speed: f32) -> Velocity {
        Velocity::new(dir.x * speed, dir.y * speed)
    }
}

impl SimTime {
    /// Advance by one tick worth `delta` reference-tick units.
    pub fn advance(&mut self, delta: f32) {
        self.tick += 1;
        self.elapsed += delta;
    }
}
