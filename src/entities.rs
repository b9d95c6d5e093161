//! All game entity types: plain data plus the per-archetype tables.
//!
//! Behaviour lives in `player`, `enemies` and `bullets`; nothing here mutates.

// ── Timing ────────────────────────────────────────────────────────────────────

/// Length of one reference frame (60 Hz) in milliseconds.  `tick(dt)` takes
/// `dt` in reference frames, so millisecond timers advance by `dt * MS_PER_FRAME`.
pub const MS_PER_FRAME: f32 = 16.67;

// ── Shared value types ────────────────────────────────────────────────────────

/// Per-frame displacement in world units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
}

impl Velocity {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Top-level session state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunState {
    /// Menu; no simulation.
    #[default]
    Idle,
    Running,
    /// Simulation frozen; entities keep their state.
    Paused,
    /// Player health reached zero; awaiting restart.
    Over,
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BulletOwner {
    Player,
    Enemy,
}

impl BulletOwner {
    /// Width and height of the bullet's bounding rectangle.
    pub fn size(&self) -> (f32, f32) {
        match self {
            BulletOwner::Player => (8.0, 20.0),
            BulletOwner::Enemy => (6.0, 12.0),
        }
    }
}

/// A projectile that has been fired but not yet inserted into a collection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shot {
    pub x: f32,
    pub y: f32,
    pub velocity: Velocity,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    /// Assigned by the owning `BulletManager`; never reused.
    pub id: u64,
    pub x: f32,
    pub y: f32,
    pub velocity: Velocity,
    pub owner: BulletOwner,
}

// ── Player ────────────────────────────────────────────────────────────────────

pub const PLAYER_MAX_HEALTH: u32 = 100;

#[derive(Clone, Debug)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub health: u32,
    pub max_health: u32,
    /// Milliseconds until the next shot is allowed.  Never negative.
    pub cooldown_ms: f32,
    /// Minimum milliseconds between shots.
    pub shoot_rate_ms: f32,
    pub is_shooting: bool,
    /// Distance kept from every viewport edge by `move_by`.
    pub margin: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,
}

// ── Enemies ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EnemyKind {
    Basic,
    Fast,
    Heavy,
}

/// Fixed behaviour parameters for one enemy archetype.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Archetype {
    pub health: i32,
    /// Vertical speed is `base_speed + level * speed_per_level`.
    pub base_speed: f32,
    pub speed_per_level: f32,
    /// Spawn-time horizontal velocity is uniform in `[-jitter/2, jitter/2)`.
    pub horizontal_jitter: f32,
    /// Amplitude of the sinusoidal sideways drift (0 = none).
    pub drift: f32,
    pub shoot_interval_ms: f32,
    pub width: f32,
    pub height: f32,
}

const BASIC: Archetype = Archetype {
    health: 25,
    base_speed: 1.0,
    speed_per_level: 0.2,
    horizontal_jitter: 2.0,
    drift: 0.0,
    shoot_interval_ms: 2000.0,
    width: 16.0,
    height: 30.0,
};

const FAST: Archetype = Archetype {
    health: 15,
    base_speed: 2.0,
    speed_per_level: 0.3,
    horizontal_jitter: 4.0,
    drift: 2.0,
    shoot_interval_ms: 1500.0,
    width: 12.0,
    height: 22.0,
};

const HEAVY: Archetype = Archetype {
    health: 50,
    base_speed: 0.5,
    speed_per_level: 0.1,
    horizontal_jitter: 1.0,
    drift: 0.0,
    shoot_interval_ms: 3000.0,
    width: 24.0,
    height: 24.0,
};

impl EnemyKind {
    pub fn archetype(&self) -> &'static Archetype {
        match self {
            EnemyKind::Basic => &BASIC,
            EnemyKind::Fast => &FAST,
            EnemyKind::Heavy => &HEAVY,
        }
    }

    pub fn vertical_speed(&self, level: u32) -> f32 {
        let a = self.archetype();
        a.base_speed + level as f32 * a.speed_per_level
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    /// Assigned by the owning `EnemyManager`; never reused.
    pub id: u64,
    pub x: f32,
    pub y: f32,
    pub velocity: Velocity,
    pub health: i32,
    pub max_health: i32,
    pub kind: EnemyKind,
    /// Manager clock (ms) at the enemy's last shot, or at spawn.
    pub last_shot_ms: f32,
    pub shoot_interval_ms: f32,
}
