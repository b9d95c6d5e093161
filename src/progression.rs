//! Score → level mapping.

/// Points required per level step.
pub const POINTS_PER_LEVEL: u32 = 1000;

/// Level is derived, never stored independently: `floor(score / 1000) + 1`.
pub fn level_for_score(score: u32) -> u32 {
    score / POINTS_PER_LEVEL + 1
}

/// The new level when `score` has moved past `previous`, otherwise `None`.
pub fn level_up(previous: u32, score: u32) -> Option<u32> {
    let level = level_for_score(score);
    (level > previous).then_some(level)
}
