//! Behavior decision functions for hostile agents.
//!
//! Pure functions that compute each enemy's new heading, per-tick
//! displacement, and state updates from its current situation.
//! No ECS dependency — operates on plain data.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use gauntlet_core::components::{Behavior, EnemyAgent};
use gauntlet_core::constants::{
    PROWLER_ALERT_SPEED_FACTOR, PROWLER_DETECT_RADIUS, RANDOM_WALK_WINDOW_X,
    RANDOM_WALK_WINDOW_Y, WANDER_REROLL_TICKS,
};
use gauntlet_core::types::{Position, ScreenBounds};

/// Input to the behavior decision for a single enemy.
pub struct EnemyContext<'a> {
    pub agent: &'a EnemyAgent,
    pub position: Position,
    pub player: Position,
    pub bounds: ScreenBounds,
    pub current_tick: u64,
}

/// Output of a behavior decision.
pub struct Decision {
    /// New facing.
    pub heading: f64,
    /// Displacement to apply this tick.
    pub step: DVec2,
    /// Replacement behavior state, present only when it changed.
    pub behavior: Option<Behavior>,
    /// Request to fire a projectile along `heading`.
    pub fire: bool,
}

/// Evaluate the behavior policy for one enemy.
///
/// `rng` is the engine's stream, consumed only by the random-walk
/// retarget draw; the prowler wander uses its own private stream.
pub fn decide(ctx: &EnemyContext, rng: &mut ChaCha8Rng) -> Decision {
    match &ctx.agent.behavior {
        Behavior::RandomWalk { target } => decide_random_walk(ctx, *target, rng),
        Behavior::Chase => decide_chase(ctx),
        Behavior::Fencing { anchor, radius } => decide_fencing(ctx, *anchor, *radius),
        Behavior::Prowler { wander_seed, .. } => decide_prowler(ctx, *wander_seed),
        Behavior::Sentry {
            last_fire_tick,
            interval_ticks,
        } => decide_sentry(ctx, *last_fire_tick, *interval_ticks),
    }
}

fn heading_vec(heading: f64) -> DVec2 {
    DVec2::new(heading.cos(), heading.sin())
}

/// Head for the current target; once the pre-move distance closes within
/// one step, draw a fresh target from the margin window and re-aim.
fn decide_random_walk(ctx: &EnemyContext, target: Position, rng: &mut ChaCha8Rng) -> Decision {
    let speed = ctx.agent.speed;
    let mut target = target;
    let mut behavior = None;
    if ctx.position.distance_to(&target) < speed {
        target = random_window_point(ctx.position, ctx.bounds, rng);
        behavior = Some(Behavior::RandomWalk { target });
    }
    let heading = ctx.position.heading_to(&target);
    Decision {
        heading,
        step: heading_vec(heading) * speed,
        behavior,
        fire: false,
    }
}

/// Uniform point within ±window of `around`, clamped to the screen.
pub fn random_window_point(around: Position, bounds: ScreenBounds, rng: &mut ChaCha8Rng) -> Position {
    let lo = bounds.clamp(Position::new(
        around.x - RANDOM_WALK_WINDOW_X,
        around.y - RANDOM_WALK_WINDOW_Y,
    ));
    let hi = bounds.clamp(Position::new(
        around.x + RANDOM_WALK_WINDOW_X,
        around.y + RANDOM_WALK_WINDOW_Y,
    ));
    Position::new(rng.gen_range(lo.x..=hi.x), rng.gen_range(lo.y..=hi.y))
}

fn decide_chase(ctx: &EnemyContext) -> Decision {
    let heading = ctx.position.heading_to(&ctx.player);
    Decision {
        heading,
        step: heading_vec(heading) * ctx.agent.speed,
        behavior: None,
        fire: false,
    }
}

/// Bounded patrol: while within `radius` of the anchor on both axes,
/// keep going; past the boundary, back up one step, rotate 90°, and
/// continue forward on the new heading.
fn decide_fencing(ctx: &EnemyContext, anchor: Position, radius: f64) -> Decision {
    let speed = ctx.agent.speed;
    let outside = (ctx.position.x - anchor.x).abs() > radius
        || (ctx.position.y - anchor.y).abs() > radius;
    if outside {
        let heading = ctx.agent.heading + std::f64::consts::FRAC_PI_2;
        let step = (heading_vec(heading) - heading_vec(ctx.agent.heading)) * speed;
        Decision {
            heading,
            step,
            behavior: None,
            fire: false,
        }
    } else {
        Decision {
            heading: ctx.agent.heading,
            step: heading_vec(ctx.agent.heading) * speed,
            behavior: None,
            fire: false,
        }
    }
}

/// Close in on a detected player at reduced speed; otherwise wander
/// toward a heading that re-rolls every few seconds.
fn decide_prowler(ctx: &EnemyContext, wander_seed: u64) -> Decision {
    let alerted = ctx.position.distance_to(&ctx.player) < PROWLER_DETECT_RADIUS;
    let (heading, speed) = if alerted {
        (
            ctx.position.heading_to(&ctx.player),
            ctx.agent.speed * PROWLER_ALERT_SPEED_FACTOR,
        )
    } else {
        (
            wander_heading(ctx.position, wander_seed, ctx.current_tick, ctx.bounds),
            ctx.agent.speed,
        )
    };
    let was_alerted = matches!(ctx.agent.behavior, Behavior::Prowler { alerted: true, .. });
    let behavior = (alerted != was_alerted).then_some(Behavior::Prowler {
        wander_seed,
        alerted,
    });
    Decision {
        heading,
        step: heading_vec(heading) * speed,
        behavior,
        fire: false,
    }
}

/// Wander target drawn from a private stream keyed by the instance seed
/// plus a coarse tick window: the heading holds for WANDER_REROLL_TICKS
/// and no shared generator is disturbed.
pub fn wander_heading(from: Position, seed: u64, current_tick: u64, bounds: ScreenBounds) -> f64 {
    let window = current_tick / WANDER_REROLL_TICKS;
    let mut stream = ChaCha8Rng::seed_from_u64(seed.wrapping_add(window));
    let target = Position::new(
        stream.gen_range(bounds.width * 0.1..=bounds.width * 0.9),
        stream.gen_range(bounds.height * 0.1..=bounds.height * 0.9),
    );
    from.heading_to(&target)
}

/// Track the player; fire once the interval has elapsed since the last
/// shot. A sentry never moves.
fn decide_sentry(ctx: &EnemyContext, last_fire_tick: u64, interval_ticks: u64) -> Decision {
    let heading = ctx.position.heading_to(&ctx.player);
    let fire = ctx.current_tick.saturating_sub(last_fire_tick) >= interval_ticks;
    let behavior = fire.then_some(Behavior::Sentry {
        last_fire_tick: ctx.current_tick,
        interval_ticks,
    });
    Decision {
        heading,
        step: DVec2::ZERO,
        behavior,
        fire,
    }
}
