//! Snapshot construction — the only place simulation state is read for
//! the presentation surface. Systems never touch presentation concerns.

use hecs::World;

use gauntlet_core::components::{Behavior, Enemy, EnemyAgent, Player, Projectile};
use gauntlet_core::enums::{Banner, DisplayColor, GamePhase, ShapeKind};
use gauntlet_core::events::GameEvent;
use gauntlet_core::state::{
    EnemyView, GameStateSnapshot, HomeView, PlayerView, ProjectileView, WaypointView,
};
use gauntlet_core::types::{GoalRegion, Position, SimTime, Waypoint};

use gauntlet_enemy_ai::profiles::get_profile;

/// Build the complete visible state for this tick.
pub fn build(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    level: u32,
    home: &GoalRegion,
    waypoint: &Waypoint,
    banner: Option<Banner>,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    let player = {
        let mut query = world.query::<(&Player, &Position)>();
        query
            .iter()
            .next()
            .map(|(_, (player, pos))| PlayerView {
                position: *pos,
                heading: player.heading,
                shape: ShapeKind::TurtleIcon,
                color: DisplayColor::Green,
            })
            .unwrap_or_default()
    };

    let mut enemies = Vec::new();
    {
        let mut query = world.query::<(&Enemy, &Position, &EnemyAgent)>();
        for (_entity, (_enemy, pos, agent)) in query.iter() {
            let profile = get_profile(agent.kind);
            // The prowler advertises its alert state; everything else
            // keeps its profile color.
            let color = match agent.behavior {
                Behavior::Prowler { alerted: true, .. } => DisplayColor::Red,
                Behavior::Prowler { alerted: false, .. } => DisplayColor::Blue,
                _ => profile.color,
            };
            enemies.push(EnemyView {
                kind: agent.kind,
                position: *pos,
                heading: agent.heading,
                size: agent.size,
                shape: profile.shape,
                color,
            });
        }
    }

    let mut projectiles = Vec::new();
    {
        let mut query = world.query::<(&Projectile, &Position)>();
        for (_entity, (projectile, pos)) in query.iter() {
            projectiles.push(ProjectileView {
                position: *pos,
                heading: projectile.heading,
                size: projectile.size,
                shape: ShapeKind::TurtleIcon,
                color: DisplayColor::Black,
            });
        }
    }

    GameStateSnapshot {
        time: *time,
        phase,
        level,
        player,
        home: HomeView {
            position: home.center,
            size: home.size,
            shape: ShapeKind::Rect,
        },
        waypoint: WaypointView {
            visible: waypoint.active,
            position: waypoint.position,
            shape: ShapeKind::Cross,
        },
        enemies,
        projectiles,
        banner,
        events,
    }
}
