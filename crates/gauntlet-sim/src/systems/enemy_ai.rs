//! Enemy AI system — evaluates each hostile agent's behavior policy.
//!
//! Calls the decision functions from gauntlet-enemy-ai, then applies
//! the resulting heading/velocity/state updates and spawns any
//! requested projectiles.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use gauntlet_core::components::{Behavior, Enemy, EnemyAgent, Player};
use gauntlet_core::events::GameEvent;
use gauntlet_core::types::{Position, ScreenBounds, Velocity};

use gauntlet_enemy_ai::fsm::{decide, EnemyContext};

use crate::world_setup;

/// Run one decision pass over every live enemy.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    bounds: ScreenBounds,
    current_tick: u64,
    level: u32,
    events: &mut Vec<GameEvent>,
) {
    let Some(player_pos) = player_position(world) else {
        return;
    };

    // Collect updates in buffers to avoid borrow issues with hecs.
    let mut updates: Vec<(hecs::Entity, f64, Velocity, Option<Behavior>)> = Vec::new();
    let mut shots: Vec<(Position, f64)> = Vec::new();

    {
        let mut query = world.query::<(&Enemy, &Position, &EnemyAgent)>();
        for (entity, (_enemy, pos, agent)) in query.iter() {
            let ctx = EnemyContext {
                agent,
                position: *pos,
                player: player_pos,
                bounds,
                current_tick,
            };
            let decision = decide(&ctx, rng);
            updates.push((
                entity,
                decision.heading,
                Velocity::new(decision.step.x, decision.step.y),
                decision.behavior,
            ));
            if decision.fire {
                shots.push((*pos, decision.heading));
            }
        }
    }

    for (entity, heading, velocity, behavior) in updates {
        if let Ok(mut agent) = world.get::<&mut EnemyAgent>(entity) {
            agent.heading = heading;
            if let Some(behavior) = behavior {
                agent.behavior = behavior;
            }
        }
        if let Ok(mut vel) = world.get::<&mut Velocity>(entity) {
            *vel = velocity;
        }
    }

    for (position, heading) in shots {
        world_setup::spawn_projectile(world, position, heading, level);
        events.push(GameEvent::ProjectileFired { heading });
    }
}

fn player_position(world: &World) -> Option<Position> {
    let mut query = world.query::<(&Player, &Position)>();
    query.iter().next().map(|(_, (_, pos))| *pos)
}
