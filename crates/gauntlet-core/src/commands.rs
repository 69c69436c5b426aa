//! Player commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible host/player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start a fresh game from the configured starting level.
    NewGame,
    /// Point the player at a new movement target.
    SetWaypoint { x: f64, y: f64 },
    /// Suspend ticking without losing state.
    Pause,
    /// Resume ticking.
    Resume,
}
