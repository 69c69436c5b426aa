//! Spawn scheduler — introduces enemies at fixed offsets after level start.
//!
//! The schedule is an explicit table consumed on the tick clock. Every
//! entry carries the epoch it was built for; entries from an ended level
//! no-op once the engine's epoch has moved on, so a stale row can never
//! spawn into the next level's world.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use gauntlet_core::constants::SPAWN_INTERVAL_TICKS;
use gauntlet_core::enums::EnemyKind;
use gauntlet_core::events::GameEvent;
use gauntlet_core::types::{GoalRegion, ScreenBounds};

use crate::world_setup;

/// A single scheduled enemy creation.
#[derive(Debug, Clone)]
pub struct SpawnEntry {
    /// Tick at which this enemy is created.
    pub fire_at_tick: u64,
    pub kind: EnemyKind,
    /// Epoch the entry was scheduled under.
    pub epoch: u64,
    /// Whether this entry has already fired.
    pub spawned: bool,
}

/// The complete spawn schedule for one level.
#[derive(Debug, Clone, Default)]
pub struct SpawnSchedule {
    pub entries: Vec<SpawnEntry>,
}

impl SpawnSchedule {
    /// Build the schedule for a level: `count_per_level[level-1]` entries,
    /// the i-th firing `i` seconds after `start_tick`, cycling through
    /// `kind_sequence`.
    ///
    /// Callers validate the tables up front; see `SimConfig::validate`.
    pub fn for_level(
        level: u32,
        count_per_level: &[u32],
        kind_sequence: &[EnemyKind],
        epoch: u64,
        start_tick: u64,
    ) -> Self {
        let count = count_per_level[(level - 1) as usize];
        let entries = (0..count as usize)
            .map(|i| SpawnEntry {
                fire_at_tick: start_tick + i as u64 * SPAWN_INTERVAL_TICKS,
                kind: kind_sequence[i % kind_sequence.len()],
                epoch,
                spawned: false,
            })
            .collect();
        Self { entries }
    }

    /// Entries that have not fired yet.
    pub fn remaining(&self) -> usize {
        self.entries.iter().filter(|e| !e.spawned).count()
    }
}

/// Check the schedule and spawn any due enemies.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    schedule: &mut SpawnSchedule,
    current_epoch: u64,
    current_tick: u64,
    level: u32,
    bounds: ScreenBounds,
    home: GoalRegion,
    events: &mut Vec<GameEvent>,
) {
    for entry in &mut schedule.entries {
        if entry.spawned || entry.epoch != current_epoch || current_tick < entry.fire_at_tick {
            continue;
        }
        world_setup::spawn_enemy(world, rng, entry.kind, level, bounds, home, current_tick);
        events.push(GameEvent::EnemySpawned {
            kind: entry.kind,
            level,
        });
        log::debug!("spawned {:?} at tick {current_tick} (level {level})", entry.kind);
        entry.spawned = true;
    }
}
