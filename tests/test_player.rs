use neon_shooter::config::GameConfig;
use neon_shooter::entities::*;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn make_player() -> Player {
    Player::new(&GameConfig::default()) // 800 x 600 field
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

// ── construction & reset ──────────────────────────────────────────────────────

#[test]
fn new_player_is_centred_at_the_bottom() {
    let p = make_player();
    assert_eq!(p.x, 400.0);
    assert_eq!(p.y, 500.0); // height - 100
    assert_eq!(p.health, 100);
    assert_eq!(p.max_health, 100);
    assert_eq!(p.cooldown_ms, 0.0);
    assert!(!p.is_shooting);
}

#[test]
fn reset_restores_everything() {
    let mut p = make_player();
    let mut rng = seeded_rng();
    p.move_by(-200.0, -200.0);
    p.take_damage(60, &mut rng);
    p.set_shooting(true);
    assert!(p.shoot().is_some());

    p.reset();
    assert_eq!((p.x, p.y), (400.0, 500.0));
    assert_eq!(p.health, 100);
    assert_eq!(p.cooldown_ms, 0.0);
    assert!(!p.is_shooting);
}

// ── movement ──────────────────────────────────────────────────────────────────

#[test]
fn move_translates() {
    let mut p = make_player();
    p.move_by(-5.0, 0.0);
    assert_eq!(p.x, 395.0);
    p.move_by(0.0, -5.0);
    assert_eq!(p.y, 495.0);
}

#[test]
fn move_clamps_to_margin() {
    let mut p = make_player();
    p.move_by(-10_000.0, -10_000.0);
    assert_eq!((p.x, p.y), (30.0, 30.0));
    p.move_by(10_000.0, 10_000.0);
    assert_eq!((p.x, p.y), (770.0, 570.0));
}

#[test]
fn random_walk_never_leaves_the_field() {
    let mut p = make_player();
    let mut rng = seeded_rng();
    for _ in 0..5_000 {
        let dx = rng.gen_range(-40.0..40.0);
        let dy = rng.gen_range(-40.0..40.0);
        p.move_by(dx, dy);
        assert!(p.x >= 30.0 && p.x <= 770.0, "x={}", p.x);
        assert!(p.y >= 30.0 && p.y <= 570.0, "y={}", p.y);
    }
}

#[test]
fn hit_shake_is_pulled_back_by_next_move() {
    let mut p = make_player();
    let mut rng = seeded_rng();
    p.move_by(-10_000.0, 10_000.0); // bottom-left corner
    for _ in 0..20 {
        p.take_damage(0, &mut rng);
    }
    p.move_by(0.0, 0.0);
    assert!(p.x >= 30.0 && p.x <= 770.0);
    assert!(p.y >= 30.0 && p.y <= 570.0);
}

// ── shooting ──────────────────────────────────────────────────────────────────

#[test]
fn shoot_fires_from_the_nose() {
    let mut p = make_player();
    let shot = p.shoot().expect("cooldown starts at zero");
    assert_eq!(shot.x, p.x);
    assert_eq!(shot.y, p.y - 20.0);
    assert_eq!(shot.velocity, Velocity::new(0.0, -10.0));
    assert_eq!(p.cooldown_ms, 150.0);
}

#[test]
fn shoot_is_rate_limited() {
    let mut p = make_player();
    assert!(p.shoot().is_some());
    assert!(p.shoot().is_none());
    p.update(1.0);
    assert!(p.shoot().is_none());
}

#[test]
fn set_shooting_only_latches() {
    let mut p = make_player();
    p.set_shooting(true);
    assert!(p.is_shooting);
    assert_eq!(p.cooldown_ms, 0.0);
    p.set_shooting(false);
    assert!(!p.is_shooting);
}

#[test]
fn update_counts_cooldown_down_in_milliseconds() {
    let mut p = make_player();
    p.shoot();
    p.update(1.0);
    assert!((p.cooldown_ms - (150.0 - MS_PER_FRAME)).abs() < 1e-3);
}

#[test]
fn cooldown_floors_at_zero() {
    let mut p = make_player();
    p.shoot();
    p.update(100.0);
    assert_eq!(p.cooldown_ms, 0.0);
    p.update(1.0);
    assert_eq!(p.cooldown_ms, 0.0);
    assert!(p.shoot().is_some());
}

#[test]
fn nine_frames_cover_one_cooldown() {
    let mut p = make_player();
    p.shoot();
    for _ in 0..8 {
        p.update(1.0);
        assert!(p.shoot().is_none());
    }
    p.update(1.0);
    assert!(p.shoot().is_some());
}

// ── damage ────────────────────────────────────────────────────────────────────

#[test]
fn damage_saturates_at_zero() {
    let mut rng = seeded_rng();
    for d in 0..=150u32 {
        let mut p = make_player();
        p.take_damage(d, &mut rng);
        assert_eq!(p.health, 100u32.saturating_sub(d));
    }
}

#[test]
fn alive_until_health_hits_zero() {
    let mut p = make_player();
    let mut rng = seeded_rng();
    p.take_damage(99, &mut rng);
    assert!(p.is_alive());
    p.take_damage(1, &mut rng);
    assert!(!p.is_alive());
    p.take_damage(10, &mut rng);
    assert_eq!(p.health, 0);
}

#[test]
fn shake_stays_small() {
    let mut p = make_player();
    let mut rng = seeded_rng();
    p.take_damage(10, &mut rng);
    assert!((p.x - 400.0).abs() <= 5.0);
    assert!((p.y - 500.0).abs() <= 5.0);
}
