/// Enemy spawning, movement, fire and damage.
///
/// The manager keeps its own millisecond clock (sum of all `dt` it has seen
/// since the last reset).  The clock drives the spawner, the fast
/// archetype's sideways drift and enemy fire, so a paused game that stops
/// ticking resumes exactly where it stopped.

use rand::Rng;

use crate::entities::{Enemy, EnemyKind, Shot, Velocity, MS_PER_FRAME};

/// Spawn columns keep this far from the side edges.
const SPAWN_MARGIN: f32 = 30.0;
/// New enemies appear just above the top edge.
const SPAWN_Y: f32 = -30.0;
/// Enemies are dropped once this far below the bottom edge.
const EXIT_MARGIN: f32 = 50.0;
/// Enemy bullets fall at this speed (units per frame).
pub const ENEMY_BULLET_SPEED: f32 = 5.0;

// ── Spawner tables ───────────────────────────────────────────────────────────

/// Effective spawn interval: strictly decreasing in `level`.
pub fn spawn_interval_ms(base_interval_ms: f32, level: u32) -> f32 {
    base_interval_ms / (1.0 + level as f32 * 0.2)
}

/// Level-gated weighted archetype pick for a uniform roll in `[0, 1)`.
pub fn pick_kind(level: u32, roll: f32) -> EnemyKind {
    if level >= 3 && roll < 0.3 {
        EnemyKind::Heavy
    } else if level >= 2 && roll < 0.5 {
        EnemyKind::Fast
    } else {
        EnemyKind::Basic
    }
}

// ── Manager ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct EnemyManager {
    enemies: Vec<Enemy>,
    /// Milliseconds accumulated since the last spawn.
    spawn_timer_ms: f32,
    base_interval_ms: f32,
    clock_ms: f32,
    viewport_width: f32,
    viewport_height: f32,
    fire_enabled: bool,
    next_id: u64,
}

impl EnemyManager {
    pub fn new(
        base_interval_ms: f32,
        viewport_width: f32,
        viewport_height: f32,
        fire_enabled: bool,
    ) -> Self {
        EnemyManager {
            enemies: Vec::new(),
            spawn_timer_ms: 0.0,
            base_interval_ms,
            clock_ms: 0.0,
            viewport_width,
            viewport_height,
            fire_enabled,
            next_id: 0,
        }
    }

    /// Place an enemy of `kind` at `(x, y)` with the archetype's stats for
    /// `level` and no sideways velocity.  Returns its id.
    pub fn spawn_at(&mut self, kind: EnemyKind, x: f32, y: f32, level: u32) -> u64 {
        self.insert(kind, x, y, Velocity::new(0.0, kind.vertical_speed(level)))
    }

    fn insert(&mut self, kind: EnemyKind, x: f32, y: f32, velocity: Velocity) -> u64 {
        let a = kind.archetype();
        self.next_id += 1;
        self.enemies.push(Enemy {
            id: self.next_id,
            x,
            y,
            velocity,
            health: a.health,
            max_health: a.health,
            kind,
            last_shot_ms: self.clock_ms,
            shoot_interval_ms: a.shoot_interval_ms,
        });
        self.next_id
    }

    fn spawn(&mut self, level: u32, rng: &mut impl Rng) {
        let kind = pick_kind(level, rng.gen::<f32>());
        let a = kind.archetype();
        let span = (self.viewport_width - 2.0 * SPAWN_MARGIN).max(0.0);
        let x = rng.gen::<f32>() * span + SPAWN_MARGIN;
        let vx = (rng.gen::<f32>() - 0.5) * a.horizontal_jitter;
        let id = self.insert(kind, x, SPAWN_Y, Velocity::new(vx, kind.vertical_speed(level)));
        tracing::debug!(id, ?kind, x, level, "enemy spawned");
    }

    /// Advance by `dt` frames: maybe spawn, move, prune, then fire.
    /// Returns the shots fired this update.
    pub fn update(&mut self, dt: f32, level: u32, rng: &mut impl Rng) -> Vec<Shot> {
        let elapsed = dt * MS_PER_FRAME;
        self.clock_ms += elapsed;
        self.spawn_timer_ms += elapsed;

        if self.spawn_timer_ms >= spawn_interval_ms(self.base_interval_ms, level) {
            self.spawn(level, rng);
            self.spawn_timer_ms = 0.0;
        }

        let clock = self.clock_ms;
        for (i, e) in self.enemies.iter_mut().enumerate() {
            e.x += e.velocity.x * dt;
            e.y += e.velocity.y * dt;
            let drift = e.kind.archetype().drift;
            if drift != 0.0 {
                e.x += (clock * 0.01 + i as f32).sin() * drift * dt;
            }
        }

        let bottom = self.viewport_height + EXIT_MARGIN;
        let before = self.enemies.len();
        self.enemies.retain(|e| e.y <= bottom);
        if self.enemies.len() < before {
            tracing::trace!(pruned = before - self.enemies.len(), "enemies left the field");
        }

        if !self.fire_enabled {
            return Vec::new();
        }
        let mut shots = Vec::new();
        for e in self.enemies.iter_mut() {
            if e.y >= 0.0 && clock - e.last_shot_ms >= e.shoot_interval_ms {
                e.last_shot_ms = clock;
                shots.push(Shot {
                    x: e.x,
                    y: e.y + e.kind.archetype().height / 2.0,
                    velocity: Velocity::new(0.0, ENEMY_BULLET_SPEED),
                });
            }
        }
        shots
    }

    /// Subtract `amount` from the enemy's health.  Returns `true` when this
    /// destroyed it (it is then removed).  Unknown ids report `false`.
    pub fn damage_enemy(&mut self, id: u64, amount: i32) -> bool {
        let Some(i) = self.enemies.iter().position(|e| e.id == id) else {
            return false;
        };
        self.enemies[i].health -= amount;
        if self.enemies[i].health <= 0 {
            self.enemies.remove(i);
            return true;
        }
        false
    }

    /// Remove an enemy by id.  Absent ids are ignored.
    pub fn remove_enemy(&mut self, id: u64) -> bool {
        match self.enemies.iter().position(|e| e.id == id) {
            Some(i) => {
                self.enemies.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: u64) -> Option<&Enemy> {
        self.enemies.iter().find(|e| e.id == id)
    }

    /// Live enemies in spawn order.
    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn spawn_timer_ms(&self) -> f32 {
        self.spawn_timer_ms
    }

    pub fn reset(&mut self) {
        self.enemies.clear();
        self.spawn_timer_ms = 0.0;
        self.clock_ms = 0.0;
    }
}
