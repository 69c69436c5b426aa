//! Player update: goal check, then waypoint-directed motion.

use hecs::World;

use gauntlet_core::components::Player;
use gauntlet_core::events::GameEvent;
use gauntlet_core::types::{GoalRegion, Position, Velocity, Waypoint};

/// Advance the player by one tick. Returns true when the player is
/// inside the goal region (checked before moving), signaling a win.
///
/// While the waypoint is active the player turns to face it and moves
/// one speed step; the waypoint deactivates when the pre-move distance
/// was already within one step. With no active waypoint the player
/// stays put.
pub fn run(
    world: &mut World,
    waypoint: &mut Waypoint,
    home: &GoalRegion,
    events: &mut Vec<GameEvent>,
) -> bool {
    for (_entity, (player, pos)) in world.query_mut::<(&mut Player, &mut Position)>() {
        if home.contains(pos) {
            return true;
        }
        if waypoint.active {
            let distance = pos.distance_to(&waypoint.position);
            let heading = pos.heading_to(&waypoint.position);
            player.heading = heading;
            let step = Velocity::from_heading(heading, player.speed);
            pos.x += step.x;
            pos.y += step.y;
            if distance < player.speed {
                waypoint.deactivate();
                events.push(GameEvent::WaypointCleared);
            }
        }
    }
    false
}
