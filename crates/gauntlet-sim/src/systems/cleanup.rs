//! Cleanup system: removes projectiles that have left the screen.
//!
//! Removal is a mark-then-compact pass through a pre-allocated buffer —
//! nothing is despawned while a query is live.

use hecs::{Entity, World};

use gauntlet_core::components::Projectile;
use gauntlet_core::constants::OFFSCREEN_MARGIN;
use gauntlet_core::types::{Position, ScreenBounds};

/// Despawn projectiles outside the margin-extended screen bounds.
pub fn run(world: &mut World, bounds: ScreenBounds, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (pos, _projectile)) in world.query_mut::<(&Position, &Projectile)>() {
        if !bounds.contains_with_margin(pos, OFFSCREEN_MARGIN) {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
