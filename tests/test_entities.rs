use neon_shooter::entities::*;

#[test]
fn archetype_table_matches_stat_sheet() {
    let basic = EnemyKind::Basic.archetype();
    assert_eq!(basic.health, 25);
    assert_eq!(basic.shoot_interval_ms, 2000.0);

    let fast = EnemyKind::Fast.archetype();
    assert_eq!(fast.health, 15);
    assert_eq!(fast.shoot_interval_ms, 1500.0);
    assert!(fast.drift > 0.0);

    let heavy = EnemyKind::Heavy.archetype();
    assert_eq!(heavy.health, 50);
    assert_eq!(heavy.shoot_interval_ms, 3000.0);

    // Only the fast archetype weaves
    assert_eq!(basic.drift, 0.0);
    assert_eq!(heavy.drift, 0.0);
}

#[test]
fn vertical_speed_scales_with_level() {
    assert!((EnemyKind::Basic.vertical_speed(1) - 1.2).abs() < 1e-5);
    assert!((EnemyKind::Fast.vertical_speed(2) - 2.6).abs() < 1e-5);
    assert!((EnemyKind::Heavy.vertical_speed(5) - 1.0).abs() < 1e-5);

    for kind in [EnemyKind::Basic, EnemyKind::Fast, EnemyKind::Heavy] {
        assert!(kind.vertical_speed(4) > kind.vertical_speed(3));
    }
}

#[test]
fn bullet_sizes_differ_by_owner() {
    assert_eq!(BulletOwner::Player.size(), (8.0, 20.0));
    assert_eq!(BulletOwner::Enemy.size(), (6.0, 12.0));
}

#[test]
fn run_state_defaults_to_idle() {
    assert_eq!(RunState::default(), RunState::Idle);
    assert_ne!(RunState::Running, RunState::Paused);
}
