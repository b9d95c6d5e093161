/// Player craft behaviour: movement clamp, rate-limited firing, damage.

use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{Player, Shot, Velocity, MS_PER_FRAME, PLAYER_MAX_HEALTH};

/// Player bullets leave the nose straight up at this speed (units per frame).
pub const PLAYER_BULLET_SPEED: f32 = 10.0;
/// Distance from the craft's centre to its nose.
const NOSE_OFFSET: f32 = 20.0;
/// Spawn height above the bottom edge.
const SPAWN_FROM_BOTTOM: f32 = 100.0;
/// Peak-to-peak positional jitter applied on hit.
const HIT_SHAKE: f32 = 10.0;

impl Player {
    pub fn new(config: &GameConfig) -> Self {
        let mut player = Player {
            x: 0.0,
            y: 0.0,
            health: PLAYER_MAX_HEALTH,
            max_health: PLAYER_MAX_HEALTH,
            cooldown_ms: 0.0,
            shoot_rate_ms: config.player.shoot_rate_ms,
            is_shooting: false,
            margin: config.player.margin,
            viewport_width: config.viewport.width,
            viewport_height: config.viewport.height,
        };
        player.reset();
        player
    }

    /// Translate, then clamp both axes to `[margin, dimension - margin]`.
    pub fn move_by(&mut self, dx: f32, dy: f32) {
        self.x = (self.x + dx).max(self.margin).min(self.viewport_width - self.margin);
        self.y = (self.y + dy).max(self.margin).min(self.viewport_height - self.margin);
    }

    /// Latch the shooting intent; it takes effect on the next tick.
    pub fn set_shooting(&mut self, shooting: bool) {
        self.is_shooting = shooting;
    }

    /// Fire if the cooldown has elapsed.
    pub fn shoot(&mut self) -> Option<Shot> {
        if self.cooldown_ms > 0.0 {
            return None;
        }
        self.cooldown_ms = self.shoot_rate_ms;
        Some(Shot {
            x: self.x,
            y: self.y - NOSE_OFFSET,
            velocity: Velocity::new(0.0, -PLAYER_BULLET_SPEED),
        })
    }

    /// Advance timers by `dt` reference frames.
    pub fn update(&mut self, dt: f32) {
        self.cooldown_ms = (self.cooldown_ms - dt * MS_PER_FRAME).max(0.0);
    }

    /// Apply damage, saturating at zero, and shake the craft.  The shake is
    /// not re-clamped; the next `move_by` pulls it back inside the field.
    pub fn take_damage(&mut self, amount: u32, rng: &mut impl Rng) {
        self.health = self.health.saturating_sub(amount);
        self.x += (rng.gen::<f32>() - 0.5) * HIT_SHAKE;
        self.y += (rng.gen::<f32>() - 0.5) * HIT_SHAKE;
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Full health, centred at the bottom of the field, no cooldown, not shooting.
    pub fn reset(&mut self) {
        self.health = self.max_health;
        self.x = self.viewport_width / 2.0;
        self.y = (self.viewport_height - SPAWN_FROM_BOTTOM)
            .max(self.margin)
            .min(self.viewport_height - self.margin);
        self.cooldown_ms = 0.0;
        self.is_shooting = false;
    }
}
