//! Events emitted by the simulation for the presentation surface.

use serde::{Deserialize, Serialize};

use crate::enums::EnemyKind;

/// One-shot notifications included in the snapshot of the tick they
/// occurred on.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// The scheduler introduced a new enemy.
    EnemySpawned { kind: EnemyKind, level: u32 },
    /// A sentry fired a projectile along `heading`.
    ProjectileFired { heading: f64 },
    /// The player arrived at the waypoint; it is inactive again.
    WaypointCleared,
    /// The goal region was reached and the next level begins.
    LevelComplete { level: u32 },
    /// The final level was won; the game is over.
    GameComplete { level: u32 },
    /// An enemy or projectile caught the player.
    GameLost { level: u32 },
}
