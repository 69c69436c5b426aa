//! Kind-specific behavioral profiles.
//!
//! Consolidates per-kind parameters: the speed oscillation constants,
//! collision size, and display attributes.

use gauntlet_core::constants::LEVEL_SPEED_PHASE;
use gauntlet_core::enums::{DisplayColor, EnemyKind, ShapeKind};

/// Collision-square side of a sentry projectile.
pub const PROJECTILE_SIZE: f64 = 15.0;

/// Static parameters for an enemy kind.
pub struct BehaviorProfile {
    /// Speed formula base (units per tick).
    pub base_speed: f64,
    /// Speed formula amplitude.
    pub speed_amplitude: f64,
    /// Side of the collision square.
    pub size: f64,
    pub color: DisplayColor,
    pub shape: ShapeKind,
}

/// Get the behavioral profile for a given kind.
pub fn get_profile(kind: EnemyKind) -> BehaviorProfile {
    match kind {
        EnemyKind::RandomWalk => BehaviorProfile {
            base_speed: 10.0,
            speed_amplitude: 3.0,
            size: 50.0,
            color: DisplayColor::Blue,
            shape: ShapeKind::Circle,
        },
        EnemyKind::Chase => BehaviorProfile {
            base_speed: 3.5,
            speed_amplitude: 2.0,
            size: 20.0,
            color: DisplayColor::Red,
            shape: ShapeKind::Circle,
        },
        EnemyKind::Fencing => BehaviorProfile {
            base_speed: 7.0,
            speed_amplitude: 3.0,
            size: 20.0,
            color: DisplayColor::Grey,
            shape: ShapeKind::Circle,
        },
        EnemyKind::Prowler => BehaviorProfile {
            base_speed: 3.5,
            speed_amplitude: 2.0,
            size: 20.0,
            color: DisplayColor::Green,
            shape: ShapeKind::Circle,
        },
        // A sentry never moves; its speed entry keeps the table uniform.
        EnemyKind::Sentry => BehaviorProfile {
            base_speed: 12.0,
            speed_amplitude: 5.0,
            size: 20.0,
            color: DisplayColor::Blue,
            shape: ShapeKind::Triangle,
        },
    }
}

/// Per-level speed: `base + amplitude * sin(level * 0.08)`, a smooth
/// bounded oscillation across levels rather than unbounded growth.
pub fn speed_for_level(kind: EnemyKind, level: u32) -> f64 {
    let profile = get_profile(kind);
    profile.base_speed + profile.speed_amplitude * (level as f64 * LEVEL_SPEED_PHASE).sin()
}

/// Projectile speed follows the same oscillation with its own constants.
pub fn projectile_speed_for_level(level: u32) -> f64 {
    10.0 + 3.0 * (level as f64 * LEVEL_SPEED_PHASE).sin()
}
