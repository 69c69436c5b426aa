//! Kinematic integration system.
//!
//! Velocities are per-tick displacements, so integration is a plain
//! add: position += velocity each tick. The player is moved by its own
//! system; it carries no Velocity component.

use hecs::World;

use gauntlet_core::types::{Position, Velocity};

/// Run kinematic integration for all entities with Position + Velocity.
pub fn run(world: &mut World) {
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        pos.x += vel.x;
        pos.y += vel.y;
    }
}
