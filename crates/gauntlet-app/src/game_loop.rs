//! Game loop thread — runs the simulation engine at 30Hz and emits snapshots.
//!
//! The engine is created up front so configuration errors surface before
//! the thread spawns. Commands arrive via `mpsc` channel; snapshots go
//! out over a second channel and are also stored in shared state for
//! synchronous polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use gauntlet_core::constants::TICK_RATE;
use gauntlet_core::error::ConfigError;
use gauntlet_core::state::GameStateSnapshot;
use gauntlet_sim::engine::{SimConfig, SimulationEngine};

use crate::state::GameLoopCommand;

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the host to use.
pub fn spawn_game_loop(
    config: SimConfig,
    snapshot_tx: mpsc::Sender<GameStateSnapshot>,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> Result<mpsc::Sender<GameLoopCommand>, ConfigError> {
    let engine = SimulationEngine::new(config)?;
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    std::thread::Builder::new()
        .name("gauntlet-game-loop".into())
        .spawn(move || {
            run_game_loop(engine, cmd_rx, snapshot_tx, &latest_snapshot);
        })
        .expect("Failed to spawn game loop thread");

    Ok(cmd_tx)
}

/// The game loop. Runs until Shutdown, channel disconnect, or the
/// snapshot receiver going away.
fn run_game_loop(
    mut engine: SimulationEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    snapshot_tx: mpsc::Sender<GameStateSnapshot>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick (the engine handles pause and terminal
        //    phases internally)
        let snapshot = engine.tick();

        // 3. Emit the snapshot to the presentation surface
        if snapshot_tx.send(snapshot.clone()).is_err() {
            return;
        }

        // 4. Store the latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until the next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}
