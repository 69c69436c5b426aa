//! Game state snapshot — the complete visible state pushed to the
//! presentation surface each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Position, SimTime};

/// Complete game state broadcast to the host after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    /// Current level (1-indexed).
    pub level: u32,
    pub player: PlayerView,
    pub home: HomeView,
    pub waypoint: WaypointView,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    /// Terminal message, present once the game has ended.
    pub banner: Option<Banner>,
    /// Events that occurred on this tick.
    pub events: Vec<GameEvent>,
}

/// The player's drawable state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub heading: f64,
    pub shape: ShapeKind,
    pub color: DisplayColor,
}

/// The goal region's drawable state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HomeView {
    pub position: Position,
    pub size: f64,
    pub shape: ShapeKind,
}

/// The waypoint marker. `visible` doubles as the active flag.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaypointView {
    pub visible: bool,
    pub position: Position,
    pub shape: ShapeKind,
}

/// One hostile agent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnemyView {
    pub kind: EnemyKind,
    pub position: Position,
    pub heading: f64,
    pub size: f64,
    pub shape: ShapeKind,
    pub color: DisplayColor,
}

/// One projectile in flight.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Position,
    pub heading: f64,
    pub size: f64,
    pub shape: ShapeKind,
    pub color: DisplayColor,
}
