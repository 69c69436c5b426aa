//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// 2D position in screen space. Origin top-left, x right, y down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// 2D displacement per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Heading toward another position, in radians (0 = +x, increasing
    /// toward +y, i.e. clockwise on screen).
    pub fn heading_to(&self, other: &Position) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Displacement of `speed` units along `heading`.
    pub fn from_heading(heading: f64, speed: f64) -> Self {
        Self {
            x: speed * heading.cos(),
            y: speed * heading.sin(),
        }
    }

    /// Displacement magnitude (units per tick).
    pub fn speed(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}

/// Playfield extents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenBounds {
    pub width: f64,
    pub height: f64,
}

impl ScreenBounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether `pos` lies inside the screen extended by `margin` on every
    /// side. Strict on the boundary, matching the projectile discard rule.
    pub fn contains_with_margin(&self, pos: &Position, margin: f64) -> bool {
        -margin < pos.x && pos.x < self.width + margin && -margin < pos.y && pos.y < self.height + margin
    }

    /// Clamp a point into the screen rectangle.
    pub fn clamp(&self, pos: Position) -> Position {
        Position::new(pos.x.clamp(0.0, self.width), pos.y.clamp(0.0, self.height))
    }
}

/// The axis-aligned square the player must reach.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GoalRegion {
    pub center: Position,
    pub size: f64,
}

impl GoalRegion {
    pub fn new(center: Position, size: f64) -> Self {
        Self { center, size }
    }

    /// Inclusive containment: points exactly on the boundary count.
    pub fn contains(&self, p: &Position) -> bool {
        let half = self.size / 2.0;
        (self.center.x - half..=self.center.x + half).contains(&p.x)
            && (self.center.y - half..=self.center.y + half).contains(&p.y)
    }
}

/// The player's movement target. Inactive until the input source
/// activates it; deactivated again on arrival.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub active: bool,
    pub position: Position,
}

impl Waypoint {
    pub fn activate(&mut self, x: f64, y: f64) {
        self.active = true;
        self.position = Position::new(x, y);
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }
}

/// The collision contract shared by every enemy and projectile: `point`
/// must be strictly inside the square of side `size` centered at
/// `center`, on both axes. Boundary-exact positions do not hit.
pub fn hits_point(center: &Position, size: f64, point: &Position) -> bool {
    let half = size / 2.0;
    center.x - half < point.x
        && point.x < center.x + half
        && center.y - half < point.y
        && point.y < center.y + half
}
