//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::EnemyKind;
use crate::types::Position;

/// The controllable agent. One per world.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player {
    /// Movement speed (units per tick).
    pub speed: f64,
    /// Facing, kept for the presentation surface.
    pub heading: f64,
}

/// Marks an entity as a hostile agent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy;

/// Per-enemy behavioral state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyAgent {
    pub kind: EnemyKind,
    /// Side of the collision square centered on the enemy.
    pub size: f64,
    /// Movement speed (units per tick), fixed at spawn from the level.
    pub speed: f64,
    /// Current facing in radians.
    pub heading: f64,
    pub behavior: Behavior,
}

/// Kind-specific behavior state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Behavior {
    /// Heading to a random nearby point; retargets on arrival.
    RandomWalk { target: Position },
    /// No state beyond position and heading.
    Chase,
    /// Bounded back-and-forth patrol around `anchor`.
    Fencing { anchor: Position, radius: f64 },
    /// Wander stream seed plus whether the player is currently detected.
    Prowler { wander_seed: u64, alerted: bool },
    /// Tick of the last shot; fires once `interval_ticks` have elapsed.
    Sentry {
        last_fire_tick: u64,
        interval_ticks: u64,
    },
}

/// A sentry round in flight. Heading is fixed at spawn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub heading: f64,
    pub speed: f64,
    pub size: f64,
}
