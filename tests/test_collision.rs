use neon_shooter::collision::*;
use neon_shooter::entities::*;

fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
    Rect { x, y, width: w, height: h }
}

// ── overlaps ──────────────────────────────────────────────────────────────────

#[test]
fn overlapping_rects() {
    assert!(overlaps(&rect(0.0, 0.0, 10.0, 10.0), &rect(5.0, 5.0, 10.0, 10.0)));
    assert!(overlaps(&rect(5.0, 5.0, 10.0, 10.0), &rect(0.0, 0.0, 10.0, 10.0)));
}

#[test]
fn contained_rect_overlaps() {
    assert!(overlaps(&rect(0.0, 0.0, 100.0, 100.0), &rect(40.0, 40.0, 2.0, 2.0)));
}

#[test]
fn touching_edges_do_not_overlap() {
    assert!(!overlaps(&rect(0.0, 0.0, 10.0, 10.0), &rect(10.0, 0.0, 10.0, 10.0)));
    assert!(!overlaps(&rect(0.0, 0.0, 10.0, 10.0), &rect(0.0, 10.0, 10.0, 10.0)));
}

#[test]
fn separated_rects() {
    assert!(!overlaps(&rect(0.0, 0.0, 10.0, 10.0), &rect(50.0, 0.0, 10.0, 10.0)));
    assert!(!overlaps(&rect(0.0, 0.0, 10.0, 10.0), &rect(5.0, 30.0, 10.0, 10.0)));
}

#[test]
fn centered_rect() {
    let r = Rect::centered(100.0, 50.0, 20.0, 10.0);
    assert_eq!(r, rect(90.0, 45.0, 20.0, 10.0));
    assert_eq!(r.center(), (100.0, 50.0));
    assert_eq!(r.right(), 110.0);
    assert_eq!(r.bottom(), 55.0);
}

// ── circles & distance ────────────────────────────────────────────────────────

#[test]
fn circle_overlap_is_strict() {
    assert!(circle_overlap(0.0, 0.0, 5.0, 6.0, 0.0, 2.0));
    // distance 5, radii sum 5 → not overlapping
    assert!(!circle_overlap(0.0, 0.0, 2.0, 3.0, 4.0, 3.0));
    assert!(!circle_overlap(0.0, 0.0, 1.0, 10.0, 10.0, 1.0));
}

#[test]
fn distance_between_centres() {
    let a = rect(0.0, 0.0, 2.0, 2.0); // centre (1, 1)
    let b = rect(3.0, 4.0, 2.0, 2.0); // centre (4, 5)
    assert!((distance(&a, &b) - 5.0).abs() < 1e-5);
}

// ── entity bounds ─────────────────────────────────────────────────────────────

#[test]
fn enemy_bounds_follow_archetype() {
    let enemy = Enemy {
        id: 1,
        x: 100.0,
        y: 100.0,
        velocity: Velocity::default(),
        health: 50,
        max_health: 50,
        kind: EnemyKind::Heavy,
        last_shot_ms: 0.0,
        shoot_interval_ms: 3000.0,
    };
    assert_eq!(enemy.bounds(), rect(88.0, 88.0, 24.0, 24.0));
}

#[test]
fn bullet_meets_enemy() {
    let enemy = Enemy {
        id: 1,
        x: 100.0,
        y: 100.0,
        velocity: Velocity::default(),
        health: 25,
        max_health: 25,
        kind: EnemyKind::Basic,
        last_shot_ms: 0.0,
        shoot_interval_ms: 2000.0,
    };
    let mut bullet = Bullet {
        id: 1,
        x: 104.0,
        y: 120.0,
        velocity: Velocity::new(0.0, -10.0),
        owner: BulletOwner::Player,
    };
    assert!(collides(&bullet, &enemy));

    bullet.x = 130.0;
    assert!(!collides(&bullet, &enemy));
}
