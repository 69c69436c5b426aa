//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the player, each enemy kind at its spawn rule, and
//! projectiles with appropriate component bundles.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use gauntlet_core::components::{Behavior, Enemy, EnemyAgent, Player, Projectile};
use gauntlet_core::constants::{
    FENCING_RADIUS, PLAYER_SPAWN_X, PLAYER_SPEED, SENTRY_FIRE_INTERVAL_TICKS,
};
use gauntlet_core::enums::EnemyKind;
use gauntlet_core::types::{GoalRegion, Position, ScreenBounds, Velocity};

use gauntlet_enemy_ai::fsm::random_window_point;
use gauntlet_enemy_ai::profiles::{
    get_profile, projectile_speed_for_level, speed_for_level, PROJECTILE_SIZE,
};

/// Spawn the player at the left-middle of the screen.
pub fn spawn_player(world: &mut World, bounds: ScreenBounds) -> hecs::Entity {
    world.spawn((
        Player {
            speed: PLAYER_SPEED,
            heading: 0.0,
        },
        Position::new(PLAYER_SPAWN_X, bounds.height / 2.0),
    ))
}

/// Reset the player to its spawn point for a new level.
pub fn reset_player(world: &mut World, bounds: ScreenBounds) {
    for (_entity, (player, pos)) in world.query_mut::<(&mut Player, &mut Position)>() {
        player.heading = 0.0;
        *pos = Position::new(PLAYER_SPAWN_X, bounds.height / 2.0);
    }
}

/// Spawn a single enemy of the given kind with its level-derived speed
/// and kind-specific placement and behavior state.
pub fn spawn_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    kind: EnemyKind,
    level: u32,
    bounds: ScreenBounds,
    home: GoalRegion,
    current_tick: u64,
) -> hecs::Entity {
    let profile = get_profile(kind);
    let speed = speed_for_level(kind, level);

    let (position, heading, behavior) = match kind {
        EnemyKind::RandomWalk => {
            let position = random_screen_point(rng, bounds);
            let target = random_window_point(position, bounds, rng);
            (
                position,
                position.heading_to(&target),
                Behavior::RandomWalk { target },
            )
        }
        EnemyKind::Chase => (random_screen_point(rng, bounds), 0.0, Behavior::Chase),
        EnemyKind::Fencing => {
            let anchor = Position::new(
                home.center.x - FENCING_RADIUS,
                home.center.y - FENCING_RADIUS,
            );
            (
                anchor,
                0.0,
                Behavior::Fencing {
                    anchor,
                    radius: FENCING_RADIUS,
                },
            )
        }
        EnemyKind::Prowler => (
            random_screen_point(rng, bounds),
            0.0,
            Behavior::Prowler {
                wander_seed: rng.gen(),
                alerted: false,
            },
        ),
        EnemyKind::Sentry => (
            Position::new(bounds.width / 2.0, bounds.height / 2.0),
            std::f64::consts::FRAC_PI_2,
            Behavior::Sentry {
                last_fire_tick: current_tick,
                interval_ticks: SENTRY_FIRE_INTERVAL_TICKS,
            },
        ),
    };

    world.spawn((
        Enemy,
        position,
        Velocity::default(),
        EnemyAgent {
            kind,
            size: profile.size,
            speed,
            heading,
            behavior,
        },
    ))
}

/// Spawn a projectile at the muzzle position, locked to `heading`.
pub fn spawn_projectile(
    world: &mut World,
    position: Position,
    heading: f64,
    level: u32,
) -> hecs::Entity {
    let speed = projectile_speed_for_level(level);
    world.spawn((
        position,
        Velocity::from_heading(heading, speed),
        Projectile {
            heading,
            speed,
            size: PROJECTILE_SIZE,
        },
    ))
}

fn random_screen_point(rng: &mut ChaCha8Rng, bounds: ScreenBounds) -> Position {
    Position::new(
        rng.gen_range(0.0..=bounds.width),
        rng.gen_range(0.0..=bounds.height),
    )
}
