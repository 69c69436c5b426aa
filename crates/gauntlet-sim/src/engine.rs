//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player
//! commands, runs all systems once per tick, and produces
//! `GameStateSnapshot`s. Completely headless, enabling deterministic
//! testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use gauntlet_core::commands::PlayerCommand;
use gauntlet_core::components::{Enemy, Projectile};
use gauntlet_core::constants::{
    COUNT_PER_LEVEL, HOME_INSET_X, HOME_SIZE, KIND_SEQUENCE, MAX_LEVEL, SCREEN_HEIGHT,
    SCREEN_WIDTH,
};
use gauntlet_core::enums::{Banner, EnemyKind, GamePhase};
use gauntlet_core::error::ConfigError;
use gauntlet_core::events::GameEvent;
use gauntlet_core::state::GameStateSnapshot;
use gauntlet_core::types::{GoalRegion, Position, ScreenBounds, SimTime, Waypoint};

use crate::systems;
use crate::systems::spawner::SpawnSchedule;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub screen_width: f64,
    pub screen_height: f64,
    /// Level a new game begins at (1-indexed).
    pub start_level: u32,
    /// Scheduled enemy count per level, indexed by `level - 1`.
    pub count_per_level: Vec<u32>,
    /// Enemy kinds cycled through by the scheduler.
    pub kind_sequence: Vec<EnemyKind>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            start_level: 1,
            count_per_level: COUNT_PER_LEVEL.to_vec(),
            kind_sequence: KIND_SEQUENCE.to_vec(),
        }
    }
}

impl SimConfig {
    /// Reject configurations the scheduler or level machine cannot run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.kind_sequence.is_empty() {
            return Err(ConfigError::EmptyKindSequence);
        }
        let required = (MAX_LEVEL - 1) as usize;
        if self.count_per_level.len() < required {
            return Err(ConfigError::LevelTableTooShort {
                len: self.count_per_level.len(),
                required,
            });
        }
        if self.start_level < 1 || self.start_level > MAX_LEVEL - 1 {
            return Err(ConfigError::StartLevelOutOfRange {
                level: self.start_level,
                max: MAX_LEVEL - 1,
            });
        }
        if self.screen_width <= 0.0 || self.screen_height <= 0.0 {
            return Err(ConfigError::InvalidScreenBounds);
        }
        Ok(())
    }
}

/// The simulation engine. Owns the ECS world and all game state.
pub struct SimulationEngine {
    world: World,
    config: SimConfig,
    bounds: ScreenBounds,
    time: SimTime,
    phase: GamePhase,
    /// Current level, 1-indexed; only ever advances by one, on a win.
    level: u32,
    /// Generation token distinguishing this level's scheduled spawns
    /// from a stale previous level's.
    epoch: u64,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
    schedule: SpawnSchedule,
    home: GoalRegion,
    waypoint: Waypoint,
    banner: Option<Banner>,
}

impl SimulationEngine {
    /// Create a new engine, rejecting invalid configuration outright.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let bounds = ScreenBounds::new(config.screen_width, config.screen_height);
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Ok(Self {
            world: World::new(),
            bounds,
            time: SimTime::default(),
            phase: GamePhase::default(),
            level: config.start_level,
            epoch: 0,
            rng,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            schedule: SpawnSchedule::default(),
            home: GoalRegion::default(),
            waypoint: Waypoint::default(),
            banner: None,
            config,
        })
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Running {
            self.run_systems();
            if self.phase == GamePhase::Running {
                self.time.advance();
            }
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build(
            &self.world,
            &self.time,
            self.phase,
            self.level,
            &self.home,
            &self.waypoint,
            self.banner,
            events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current level (1-indexed).
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get the waypoint state.
    pub fn waypoint(&self) -> &Waypoint {
        &self.waypoint
    }

    /// Get the goal region.
    pub fn home(&self) -> &GoalRegion {
        &self.home
    }

    /// Spawn an additional enemy of the given kind immediately.
    pub fn add_enemy(&mut self, kind: EnemyKind) -> hecs::Entity {
        let entity = world_setup::spawn_enemy(
            &mut self.world,
            &mut self.rng,
            kind,
            self.level,
            self.bounds,
            self.home,
            self.time.tick,
        );
        self.events.push(GameEvent::EnemySpawned {
            kind,
            level: self.level,
        });
        entity
    }

    /// Terminal win handling: clear the level, then either advance or
    /// finish the game. Invoked by the tick pass when the player stands
    /// in the goal region; exposed for hosts driving the lifecycle
    /// directly.
    pub fn game_over_win(&mut self) {
        self.events.push(GameEvent::LevelComplete { level: self.level });
        self.clear_hostiles();
        self.epoch += 1;

        if self.level == MAX_LEVEL - 1 {
            self.phase = GamePhase::GameComplete;
            self.banner = Some(Banner::YouWin);
            self.events.push(GameEvent::GameComplete { level: self.level });
            log::info!("game complete at level {}", self.level);
        } else {
            self.level += 1;
            self.init_level();
            log::info!("advanced to level {}", self.level);
        }
    }

    /// Terminal loss handling. Invoked by the tick pass on a collision;
    /// exposed for hosts driving the lifecycle directly.
    pub fn game_over_lose(&mut self) {
        self.phase = GamePhase::Lost;
        self.banner = Some(Banner::YouLose);
        self.events.push(GameEvent::GameLost { level: self.level });
        log::info!("game lost at level {}", self.level);
    }

    #[cfg(test)]
    pub(crate) fn schedule(&self) -> &SpawnSchedule {
        &self.schedule
    }

    /// Teleport the player (for tests exercising the goal check).
    #[cfg(test)]
    pub(crate) fn place_player(&mut self, x: f64, y: f64) {
        use gauntlet_core::components::Player;
        for (_entity, (_player, pos)) in self.world.query_mut::<(&Player, &mut Position)>() {
            *pos = Position::new(x, y);
        }
    }

    #[cfg(test)]
    pub(crate) fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::NewGame => {
                if matches!(
                    self.phase,
                    GamePhase::Idle | GamePhase::Lost | GamePhase::GameComplete
                ) {
                    self.world.clear();
                    world_setup::spawn_player(&mut self.world, self.bounds);
                    self.time = SimTime::default();
                    self.level = self.config.start_level;
                    self.epoch += 1;
                    self.banner = None;
                    self.init_level();
                    self.phase = GamePhase::Running;
                    log::info!("new game at level {}", self.level);
                }
            }
            PlayerCommand::SetWaypoint { x, y } => {
                self.waypoint.activate(x, y);
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Running {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Running;
                }
            }
        }
    }

    /// Set up the current level: goal region, waypoint, player spawn,
    /// and a fresh spawn schedule based at the current tick.
    fn init_level(&mut self) {
        self.home = GoalRegion::new(
            Position::new(
                self.bounds.width - HOME_INSET_X,
                self.bounds.height / 2.0,
            ),
            HOME_SIZE,
        );
        self.waypoint.deactivate();
        world_setup::reset_player(&mut self.world, self.bounds);
        self.schedule = SpawnSchedule::for_level(
            self.level,
            &self.config.count_per_level,
            &self.config.kind_sequence,
            self.epoch,
            self.time.tick,
        );
    }

    /// Run all systems in order. A terminal signal short-circuits the
    /// remainder of the pass.
    fn run_systems(&mut self) {
        // 1. Scheduled spawns
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.schedule,
            self.epoch,
            self.time.tick,
            self.level,
            self.bounds,
            self.home,
            &mut self.events,
        );

        // 2. Player: goal check, then waypoint motion
        if systems::player::run(
            &mut self.world,
            &mut self.waypoint,
            &self.home,
            &mut self.events,
        ) {
            self.game_over_win();
            return;
        }

        // 3. Enemy behavior decisions (and sentry fire)
        systems::enemy_ai::run(
            &mut self.world,
            &mut self.rng,
            self.bounds,
            self.time.tick,
            self.level,
            &mut self.events,
        );

        // 4. Movement integration
        systems::movement::run(&mut self.world);

        // 5. Collision: any hit ends the game
        if let Some(kind) = systems::collision::run(&self.world) {
            log::info!("player caught by {kind:?}");
            self.game_over_lose();
            return;
        }

        // 6. Off-screen projectile cleanup
        systems::cleanup::run(&mut self.world, self.bounds, &mut self.despawn_buffer);
    }

    /// Despawn every enemy and projectile, releasing the level's
    /// hostile population in one compaction pass.
    fn clear_hostiles(&mut self) {
        self.despawn_buffer.clear();
        for (entity, _enemy) in self.world.query_mut::<&Enemy>() {
            self.despawn_buffer.push(entity);
        }
        for (entity, _projectile) in self.world.query_mut::<&Projectile>() {
            self.despawn_buffer.push(entity);
        }
        for entity in self.despawn_buffer.drain(..) {
            let _ = self.world.despawn(entity);
        }
    }
}
