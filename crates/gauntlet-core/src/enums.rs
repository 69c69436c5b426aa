//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// The five hostile agent kinds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Wanders between random nearby target points.
    #[default]
    RandomWalk,
    /// Heads straight for the player every tick.
    Chase,
    /// Patrols a bounded box around an anchor near the goal region.
    Fencing,
    /// Wanders until the player comes close, then closes in slightly slowed.
    Prowler,
    /// Stationary turret that tracks the player and fires projectiles.
    Sentry,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No game in progress.
    #[default]
    Idle,
    /// Ticking; the level is live.
    Running,
    /// Ticking suspended without losing state.
    Paused,
    /// An enemy or projectile reached the player. Terminal.
    Lost,
    /// The final level was won. Terminal.
    GameComplete,
}

/// End-of-game message for the presentation surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Banner {
    YouWin,
    YouLose,
}

/// Shape primitive a view should be drawn with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    #[default]
    Circle,
    Triangle,
    Rect,
    /// Two crossed line segments.
    Cross,
    /// Directional turtle-like icon.
    TurtleIcon,
}

/// Cosmetic display color; never consulted by game logic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayColor {
    #[default]
    Green,
    Blue,
    Red,
    Grey,
    Black,
}
