//! Simulation constants and tuning parameters.

use crate::enums::EnemyKind;

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- World geometry ---

/// Default playfield width in world units (origin top-left, x right).
pub const SCREEN_WIDTH: f64 = 800.0;

/// Default playfield height in world units (y down).
pub const SCREEN_HEIGHT: f64 = 500.0;

/// Projectiles are discarded once they leave the screen by this margin.
pub const OFFSCREEN_MARGIN: f64 = 10.0;

// --- Levels ---

/// Exclusive level ceiling. Play spans levels 1 through MAX_LEVEL - 1;
/// winning the final level ends the game instead of advancing.
pub const MAX_LEVEL: u32 = 10;

/// Phase factor in the per-level speed oscillation
/// `base + amplitude * sin(level * LEVEL_SPEED_PHASE)`.
pub const LEVEL_SPEED_PHASE: f64 = 0.08;

// --- Player / goal ---

/// Player movement speed (units per tick).
pub const PLAYER_SPEED: f64 = 5.0;

/// Player spawn x coordinate; y is the vertical midline.
pub const PLAYER_SPAWN_X: f64 = 50.0;

/// The goal region sits this far in from the right edge, on the midline.
pub const HOME_INSET_X: f64 = 100.0;

/// Side length of the goal region square.
pub const HOME_SIZE: f64 = 20.0;

// --- Spawn scheduler ---

/// Scheduled enemy count per level, indexed by `level - 1`.
pub const COUNT_PER_LEVEL: [u32; MAX_LEVEL as usize] = [2, 2, 3, 4, 4, 5, 5, 5, 6, 6];

/// Enemy kinds cycled through by the scheduler.
pub const KIND_SEQUENCE: [EnemyKind; 6] = [
    EnemyKind::RandomWalk,
    EnemyKind::RandomWalk,
    EnemyKind::Chase,
    EnemyKind::Fencing,
    EnemyKind::Chase,
    EnemyKind::Sentry,
];

/// Ticks between consecutive scheduled spawns (one second).
pub const SPAWN_INTERVAL_TICKS: u64 = TICK_RATE as u64;

// --- Behavior tuning ---

/// Half-extents of the random-walk retarget window.
pub const RANDOM_WALK_WINDOW_X: f64 = 300.0;
pub const RANDOM_WALK_WINDOW_Y: f64 = 200.0;

/// Fencing patrol half-extent around its anchor.
pub const FENCING_RADIUS: f64 = 50.0;

/// Prowler player-detection radius.
pub const PROWLER_DETECT_RADIUS: f64 = 100.0;

/// Prowler speed factor while alerted.
pub const PROWLER_ALERT_SPEED_FACTOR: f64 = 0.9;

/// Ticks between prowler wander heading re-rolls (~3 seconds).
pub const WANDER_REROLL_TICKS: u64 = 3 * TICK_RATE as u64;

/// Ticks between sentry shots (1.5 seconds).
pub const SENTRY_FIRE_INTERVAL_TICKS: u64 = TICK_RATE as u64 * 3 / 2;
