#[cfg(test)]
mod tests {
    use glam::Vec2;
    use turf_core::components::Structure;
    use turf_core::constants::{MAP_HEIGHT, MAP_WIDTH};
    use turf_core::enums::{EnemyKind, EnemyState};
    use turf_core::types::Bounds;

    use crate::fsm::*;
    use crate::profiles::get_profile;
    use crate::targeting::*;

    fn structure(id: u32, x: f32, y: f32, critical: bool, near_edge: bool) -> Structure {
        Structure {
            id,
            position: Vec2::new(x, y),
            hp: 100,
            max_hp: 100,
            critical,
            near_edge,
        }
    }

    fn test_map() -> Vec<Structure> {
        vec![
            structure(1, 600.0, 400.0, true, false),
            structure(2, 300.0, 250.0, false, false),
            structure(3, 900.0, 250.0, false, false),
            structure(4, 80.0, 400.0, false, true),
        ]
    }

    fn make_context<'a>(
        kind: EnemyKind,
        position: Vec2,
        player: Vec2,
        target_structure: Option<u32>,
        structures: &'a [Structure],
    ) -> EnemyContext<'a> {
        EnemyContext {
            kind,
            state: EnemyState::Moving,
            aggroed: false,
            target_structure,
            position,
            speed: get_profile(kind).speed,
            slow_factor: 1.0,
            player_position: player,
            structures,
            bounds: Bounds::new(Vec2::ZERO, Vec2::new(MAP_WIDTH, MAP_HEIGHT)),
            dt_secs: 0.05,
        }
    }

    #[test]
    fn test_catalog_values() {
        let tank = get_profile(EnemyKind::Tank);
        assert_eq!(tank.hp, 300);
        assert_eq!(tank.score_value, 50);
        assert!(get_profile(EnemyKind::Shooter).is_ranged);
        assert_eq!(get_profile(EnemyKind::Demolisher).building_damage_multiplier, 3.0);
        for kind in EnemyKind::ALL {
            let p = get_profile(kind);
            assert!(p.hp > 0 && p.speed > 0.0 && p.attack_range > 0.0);
        }
    }

    #[test]
    fn test_aggro_when_player_close() {
        let structures = test_map();
        let ctx = make_context(
            EnemyKind::Thug,
            Vec2::new(100.0, 100.0),
            Vec2::new(200.0, 100.0),
            Some(2),
            &structures,
        );
        let update = evaluate(&ctx);
        assert!(update.aggroed);
        assert_eq!(update.target, Some(TargetRef::Player));
        assert_eq!(update.state, EnemyState::Moving);
        assert!(update.velocity.x > 0.0);
    }

    #[test]
    fn test_no_aggro_outside_radius() {
        let structures = test_map();
        let ctx = make_context(
            EnemyKind::Thug,
            Vec2::new(100.0, 100.0),
            Vec2::new(1000.0, 700.0),
            Some(2),
            &structures,
        );
        let update = evaluate(&ctx);
        assert!(!update.aggroed);
        assert_eq!(update.target, Some(TargetRef::Structure(2)));
    }

    #[test]
    fn test_demolisher_drops_aggro_at_distance() {
        let structures = test_map();
        let mut ctx = make_context(
            EnemyKind::Demolisher,
            Vec2::new(100.0, 100.0),
            Vec2::new(200.0, 100.0),
            Some(2),
            &structures,
        );
        ctx.aggroed = true;
        let update = evaluate(&ctx);
        assert!(!update.aggroed);
        assert_eq!(update.target, Some(TargetRef::Structure(2)));

        // Point-blank keeps it on the player.
        ctx.player_position = Vec2::new(130.0, 100.0);
        assert!(evaluate(&ctx).aggroed);
    }

    #[test]
    fn test_dead_target_reacquires_nearest_inner_structure() {
        let mut structures = test_map();
        structures[1].hp = 0;
        // Closest standing structure is the edge one at (80, 400); it is skipped.
        let ctx = make_context(
            EnemyKind::Thug,
            Vec2::new(150.0, 420.0),
            Vec2::new(1100.0, 750.0),
            Some(2),
            &structures,
        );
        let update = evaluate(&ctx);
        assert_eq!(update.target_structure, Some(1));
        assert_eq!(update.target, Some(TargetRef::Structure(1)));
    }

    #[test]
    fn test_reacquire_falls_back_to_edge_structures() {
        let structures = vec![structure(4, 80.0, 400.0, false, true), {
            let mut s = structure(1, 600.0, 400.0, true, false);
            s.hp = 0;
            s
        }];
        assert_eq!(reacquire(Vec2::new(500.0, 400.0), &structures), Some(4));
        assert_eq!(reacquire(Vec2::ZERO, &[]), None);
    }

    #[test]
    fn test_targets_player_when_nothing_stands() {
        let mut structures = test_map();
        for s in &mut structures {
            s.hp = 0;
        }
        let ctx = make_context(
            EnemyKind::Runner,
            Vec2::new(100.0, 100.0),
            Vec2::new(1000.0, 700.0),
            Some(2),
            &structures,
        );
        let update = evaluate(&ctx);
        assert_eq!(update.target, Some(TargetRef::Player));
        assert_eq!(update.target_structure, None);
    }

    #[test]
    fn test_in_range_halts_and_attacks_building() {
        let structures = test_map();
        let ctx = make_context(
            EnemyKind::Tank,
            Vec2::new(310.0, 250.0),
            Vec2::new(1000.0, 700.0),
            Some(2),
            &structures,
        );
        let update = evaluate(&ctx);
        assert!(update.in_range);
        assert_eq!(update.state, EnemyState::AttackingBuilding);
        assert_eq!(update.velocity, Vec2::ZERO);
        assert_eq!(update.position, ctx.position);
    }

    #[test]
    fn test_movement_scaled_by_slow_and_clamped() {
        let structures = test_map();
        let mut ctx = make_context(
            EnemyKind::Runner,
            Vec2::new(200.0, 250.0),
            Vec2::new(1000.0, 700.0),
            Some(2),
            &structures,
        );
        ctx.slow_factor = 0.3;
        let update = evaluate(&ctx);
        assert!((update.velocity.length() - 110.0 * 0.3).abs() < 1e-3);
        assert!((update.position.x - (200.0 + 110.0 * 0.3 * 0.05)).abs() < 1e-3);

        ctx.position = Vec2::new(-50.0, 250.0);
        let update = evaluate(&ctx);
        assert!(update.position.x >= 0.0);
    }

    #[test]
    fn test_dead_enemy_is_inert() {
        let structures = test_map();
        let mut ctx = make_context(
            EnemyKind::Thug,
            Vec2::new(600.0, 410.0),
            Vec2::new(600.0, 420.0),
            Some(1),
            &structures,
        );
        ctx.state = EnemyState::Dead;
        let update = evaluate(&ctx);
        assert_eq!(update.state, EnemyState::Dead);
        assert_eq!(update.target, None);
        assert!(!update.in_range);
    }

    #[test]
    fn test_attack_damage_and_cooldown() {
        assert_eq!(attack_damage(EnemyKind::Demolisher, true, 1.0), 45);
        assert_eq!(attack_damage(EnemyKind::Demolisher, false, 1.0), 15);
        // 20 * 1.2 = 24
        assert_eq!(attack_damage(EnemyKind::Tank, false, 1.2), 24);
        // 8 * 1.15 = 9.2
        assert_eq!(attack_damage(EnemyKind::Thug, true, 1.15), 9);

        assert!(attack_ready(EnemyKind::Thug, None, 0));
        assert!(!attack_ready(EnemyKind::Thug, Some(1_000), 1_999));
        assert!(attack_ready(EnemyKind::Thug, Some(1_000), 2_000));
    }

    #[test]
    fn test_initial_target_distribution() {
        let structures = test_map();
        // Index 0 is a multiple of three: the base.
        assert_eq!(initial_target(EnemyKind::Thug, 0, &structures), Some(1));
        assert_eq!(initial_target(EnemyKind::Thug, 3, &structures), Some(1));
        let other = initial_target(EnemyKind::Thug, 1, &structures);
        assert!(matches!(other, Some(2) | Some(3) | Some(4)));
        // Demolishers never pick the base while an outlying building stands.
        for i in 0..6 {
            assert_ne!(initial_target(EnemyKind::Demolisher, i, &structures), Some(1));
        }
    }

    #[test]
    fn test_initial_target_fallbacks() {
        let mut structures = test_map();
        for s in structures.iter_mut().filter(|s| !s.critical) {
            s.hp = 0;
        }
        assert_eq!(initial_target(EnemyKind::Demolisher, 1, &structures), Some(1));
        assert_eq!(initial_target(EnemyKind::Runner, 1, &structures), Some(1));

        let single = vec![structure(9, 600.0, 400.0, false, false)];
        assert_eq!(initial_target(EnemyKind::Thug, 2, &single), Some(9));
        assert_eq!(initial_target(EnemyKind::Thug, 2, &[]), None);
    }
}
