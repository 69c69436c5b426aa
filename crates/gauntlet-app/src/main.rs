//! Headless demo run: start a game, steer for the goal, and log the
//! outcome. A real frontend would consume the same snapshot stream.

use std::sync::{mpsc, Arc, Mutex};

use gauntlet_app::game_loop;
use gauntlet_app::state::GameLoopCommand;
use gauntlet_core::commands::PlayerCommand;
use gauntlet_core::constants::{HOME_INSET_X, SCREEN_HEIGHT, SCREEN_WIDTH};
use gauntlet_core::enums::GamePhase;
use gauntlet_sim::engine::SimConfig;

fn main() {
    env_logger::init();

    let (snapshot_tx, snapshot_rx) = mpsc::channel();
    let latest_snapshot = Arc::new(Mutex::new(None));
    let cmd_tx = match game_loop::spawn_game_loop(SimConfig::default(), snapshot_tx, latest_snapshot)
    {
        Ok(tx) => tx,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            std::process::exit(1);
        }
    };

    let goal = PlayerCommand::SetWaypoint {
        x: SCREEN_WIDTH - HOME_INSET_X,
        y: SCREEN_HEIGHT / 2.0,
    };

    if cmd_tx
        .send(GameLoopCommand::PlayerCommand(PlayerCommand::NewGame))
        .is_err()
    {
        return;
    }

    for snapshot in snapshot_rx {
        for event in &snapshot.events {
            log::info!("tick {}: {event:?}", snapshot.time.tick);
        }

        match snapshot.phase {
            GamePhase::Lost | GamePhase::GameComplete => {
                println!(
                    "{:?} after {:.1}s on level {}",
                    snapshot.banner, snapshot.time.elapsed_secs, snapshot.level
                );
                break;
            }
            GamePhase::Running if !snapshot.waypoint.visible => {
                // Keep steering straight for the goal region.
                if cmd_tx
                    .send(GameLoopCommand::PlayerCommand(goal.clone()))
                    .is_err()
                {
                    return;
                }
            }
            _ => {}
        }
    }

    let _ = cmd_tx.send(GameLoopCommand::Shutdown);
}
