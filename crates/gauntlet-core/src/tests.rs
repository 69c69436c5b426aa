#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::state::GameStateSnapshot;
    use crate::types::{hits_point, GoalRegion, Position, ScreenBounds, SimTime, Velocity};

    /// Verify all enums round-trip through serde_json.
    #[test]
    fn test_enemy_kind_serde() {
        let variants = vec![
            EnemyKind::RandomWalk,
            EnemyKind::Chase,
            EnemyKind::Fencing,
            EnemyKind::Prowler,
            EnemyKind::Sentry,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: EnemyKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_game_phase_serde() {
        let variants = vec![
            GamePhase::Idle,
            GamePhase::Running,
            GamePhase::Paused,
            GamePhase::Lost,
            GamePhase::GameComplete,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::NewGame,
            PlayerCommand::SetWaypoint { x: 120.5, y: 42.0 },
            PlayerCommand::Pause,
            PlayerCommand::Resume,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// Verify GameEvent round-trips through serde.
    #[test]
    fn test_game_event_serde() {
        let events = vec![
            GameEvent::EnemySpawned {
                kind: EnemyKind::Sentry,
                level: 3,
            },
            GameEvent::ProjectileFired { heading: 1.25 },
            GameEvent::WaypointCleared,
            GameEvent::LevelComplete { level: 1 },
            GameEvent::GameComplete { level: 9 },
            GameEvent::GameLost { level: 2 },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let _back: GameEvent = serde_json::from_str(&json).unwrap();
        }
    }

    /// Verify GameStateSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    /// Verify Position geometry calculations.
    #[test]
    fn test_position_distance() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
        assert!((b.distance_to(&a) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_position_heading() {
        let origin = Position::new(0.0, 0.0);

        // Screen-right (+x)
        let right = Position::new(100.0, 0.0);
        assert!(origin.heading_to(&right).abs() < 1e-10);

        // Screen-down (+y)
        let down = Position::new(0.0, 100.0);
        assert!((origin.heading_to(&down) - std::f64::consts::FRAC_PI_2).abs() < 1e-10);
    }

    /// Verify Velocity calculations.
    #[test]
    fn test_velocity_from_heading() {
        let v = Velocity::from_heading(0.0, 5.0);
        assert!((v.x - 5.0).abs() < 1e-10);
        assert!(v.y.abs() < 1e-10);
        assert!((v.speed() - 5.0).abs() < 1e-10);

        let down = Velocity::from_heading(std::f64::consts::FRAC_PI_2, 2.0);
        assert!(down.x.abs() < 1e-10);
        assert!((down.y - 2.0).abs() < 1e-10);
    }

    /// Verify SimTime advancement.
    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        assert_eq!(time.tick, 0);
        assert_eq!(time.elapsed_secs, 0.0);

        for _ in 0..30 {
            time.advance();
        }
        assert_eq!(time.tick, 30);
        // 30 ticks at 30Hz = 1 second
        assert!((time.elapsed_secs - 1.0).abs() < 1e-10);
    }

    /// The goal region is inclusive on its boundary.
    #[test]
    fn test_goal_region_contains_inclusive() {
        let home = GoalRegion::new(Position::new(100.0, 100.0), 20.0);

        assert!(home.contains(&Position::new(100.0, 100.0)));
        assert!(home.contains(&Position::new(110.0, 100.0)), "edge counts");
        assert!(home.contains(&Position::new(90.0, 90.0)), "corner counts");
        assert!(!home.contains(&Position::new(110.1, 100.0)));
        assert!(!home.contains(&Position::new(100.0, 89.9)));
    }

    /// The collision square is strict on its boundary.
    #[test]
    fn test_hits_point_strict() {
        let center = Position::new(50.0, 50.0);

        assert!(hits_point(&center, 20.0, &Position::new(50.0, 50.0)));
        assert!(hits_point(&center, 20.0, &Position::new(59.9, 40.1)));
        // Boundary-exact positions must not hit.
        assert!(!hits_point(&center, 20.0, &Position::new(60.0, 50.0)));
        assert!(!hits_point(&center, 20.0, &Position::new(50.0, 40.0)));
        assert!(!hits_point(&center, 20.0, &Position::new(40.0, 40.0)));
        assert!(!hits_point(&center, 20.0, &Position::new(61.0, 50.0)));
    }

    /// The off-screen margin test is strict, matching the discard rule.
    #[test]
    fn test_screen_bounds_margin() {
        let bounds = ScreenBounds::new(800.0, 500.0);

        assert!(bounds.contains_with_margin(&Position::new(0.0, 0.0), 10.0));
        assert!(bounds.contains_with_margin(&Position::new(809.9, 509.9), 10.0));
        assert!(bounds.contains_with_margin(&Position::new(-9.9, -9.9), 10.0));
        assert!(!bounds.contains_with_margin(&Position::new(-10.0, 0.0), 10.0));
        assert!(!bounds.contains_with_margin(&Position::new(810.0, 0.0), 10.0));
        assert!(!bounds.contains_with_margin(&Position::new(0.0, 510.0), 10.0));
    }

    #[test]
    fn test_screen_bounds_clamp() {
        let bounds = ScreenBounds::new(800.0, 500.0);
        let clamped = bounds.clamp(Position::new(-25.0, 730.0));
        assert_eq!(clamped, Position::new(0.0, 500.0));
    }
}
