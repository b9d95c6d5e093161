use neon_shooter::progression::*;

#[test]
fn level_is_thousand_point_steps() {
    assert_eq!(level_for_score(0), 1);
    assert_eq!(level_for_score(999), 1);
    assert_eq!(level_for_score(1000), 2);
    assert_eq!(level_for_score(2999), 3);
    assert_eq!(level_for_score(10_000), 11);
}

#[test]
fn level_up_only_on_increase() {
    assert_eq!(level_up(1, 900), None);
    assert_eq!(level_up(1, 1000), Some(2));
    assert_eq!(level_up(2, 1500), None);
    // Jumping several levels at once reports the final one
    assert_eq!(level_up(1, 3000), Some(4));
}

#[test]
fn level_never_decreases_as_score_grows() {
    let mut previous = level_for_score(0);
    for score in (0..20_000).step_by(100) {
        let level = level_for_score(score);
        assert!(level >= previous);
        previous = level;
    }
}
