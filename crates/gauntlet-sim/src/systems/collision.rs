//! Collision scan — the enemy side owns the hit check.
//!
//! A hit requires the player's position strictly inside the square of
//! side `size` centered on the enemy or projectile; boundary-exact
//! positions do not count. Any hit ends the game, so scan order only
//! determines which culprit is reported.

use hecs::World;

use gauntlet_core::components::{EnemyAgent, Player, Projectile};
use gauntlet_core::enums::EnemyKind;
use gauntlet_core::types::{hits_point, Position};

/// Check every enemy and projectile against the player. Returns the
/// kind responsible for the first hit found, if any.
pub fn run(world: &World) -> Option<EnemyKind> {
    let player_pos = {
        let mut query = world.query::<(&Player, &Position)>();
        query.iter().next().map(|(_, (_, pos))| *pos)?
    };

    {
        let mut query = world.query::<(&EnemyAgent, &Position)>();
        for (_entity, (agent, pos)) in query.iter() {
            if hits_point(pos, agent.size, &player_pos) {
                return Some(agent.kind);
            }
        }
    }

    let mut query = world.query::<(&Projectile, &Position)>();
    for (_entity, (projectile, pos)) in query.iter() {
        if hits_point(pos, projectile.size, &player_pos) {
            return Some(EnemyKind::Sentry);
        }
    }

    None
}
