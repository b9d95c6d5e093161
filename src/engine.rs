/// Frame orchestration and the session state machine.
///
/// The engine never schedules itself: the front end calls `tick` once per
/// rendered frame with the latched input for that frame.  Notifications go
/// out through a `GameListener` the engine owns.

use rand::Rng;

use crate::bullets::BulletManager;
use crate::collision::collides;
use crate::config::GameConfig;
use crate::enemies::EnemyManager;
use crate::entities::{Player, RunState};
use crate::progression::level_up;

/// Damage dealt to an enemy by one player bullet.
pub const PLAYER_BULLET_DAMAGE: i32 = 25;
/// Damage dealt to the player by one enemy bullet.
pub const ENEMY_BULLET_DAMAGE: u32 = 10;
/// Damage dealt to the player when an enemy rams it.
pub const RAM_DAMAGE: u32 = 20;
/// Score per enemy destroyed by gunfire.
pub const KILL_SCORE: u32 = 100;

// ── External interface ───────────────────────────────────────────────────────

/// Input latched by the front end and read once at the start of a tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Intents {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub shoot: bool,
}

/// Fire-and-forget sound cues.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AudioCue {
    EnemyDestroyed,
    PlayerHit,
    LevelUp,
    GameOver,
    MusicStart,
    MusicPause,
    MusicResume,
    MusicStop,
}

/// Presentation-side observer.  Every method defaults to a no-op so a
/// listener only implements what it displays.
pub trait GameListener {
    /// Sent every running tick, changed or not.
    fn score_changed(&mut self, _score: u32) {}
    /// Sent every running tick, changed or not.
    fn health_changed(&mut self, _health: u32) {}
    /// Sent only when the level increases.
    fn level_changed(&mut self, _level: u32) {}
    /// Sent exactly once per Running → Over transition.
    fn game_over(&mut self) {}
    fn audio(&mut self, _cue: AudioCue) {}
}

/// Listener that ignores everything.
impl GameListener for () {}

/// Externally visible state after a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameReport {
    pub score: u32,
    pub health: u32,
    pub level: u32,
    pub state: RunState,
}

// ── Session ──────────────────────────────────────────────────────────────────

/// Counters owned by the engine and reset together.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Session {
    pub score: u32,
    pub level: u32,
    pub state: RunState,
}

impl Default for Session {
    fn default() -> Self {
        Session {
            score: 0,
            level: 1,
            state: RunState::Idle,
        }
    }
}

// ── Engine ───────────────────────────────────────────────────────────────────

pub struct GameEngine<L: GameListener> {
    config: GameConfig,
    player: Player,
    enemies: EnemyManager,
    bullets: BulletManager,
    session: Session,
    listener: L,
}

impl<L: GameListener> GameEngine<L> {
    pub fn new(config: GameConfig, listener: L) -> Self {
        let player = Player::new(&config);
        let enemies = EnemyManager::new(
            config.spawn.base_interval_ms,
            config.viewport.width,
            config.viewport.height,
            config.enemy_fire,
        );
        let bullets = BulletManager::new(config.viewport.height);
        GameEngine {
            config,
            player,
            enemies,
            bullets,
            session: Session::default(),
            listener,
        }
    }

    // ── State machine ────────────────────────────────────────────────────────

    /// Full reset, then Running.  Valid from any state; music already
    /// playing is stopped first.
    pub fn start(&mut self) {
        if matches!(self.session.state, RunState::Running | RunState::Paused) {
            self.listener.audio(AudioCue::MusicStop);
        }
        self.session = Session::default();
        self.player.reset();
        self.enemies.reset();
        self.bullets.reset();
        self.session.state = RunState::Running;
        self.listener.audio(AudioCue::MusicStart);
        tracing::info!("session started");
    }

    /// Running → Paused.  No effect in any other state.
    pub fn pause(&mut self) {
        if self.session.state != RunState::Running {
            return;
        }
        self.session.state = RunState::Paused;
        self.listener.audio(AudioCue::MusicPause);
        tracing::info!(score = self.session.score, "paused");
    }

    /// Paused → Running.  No effect in any other state.
    pub fn resume(&mut self) {
        if self.session.state != RunState::Paused {
            return;
        }
        self.session.state = RunState::Running;
        self.listener.audio(AudioCue::MusicResume);
        tracing::info!("resumed");
    }

    pub fn toggle_pause(&mut self) {
        match self.session.state {
            RunState::Running => self.pause(),
            RunState::Paused => self.resume(),
            RunState::Idle | RunState::Over => {}
        }
    }

    /// Running/Over → Idle → Running.  Idle simply starts; Paused is left
    /// untouched because a paused session never jumps to Idle.
    pub fn restart(&mut self) {
        match self.session.state {
            RunState::Paused => return,
            RunState::Running => self.listener.audio(AudioCue::MusicStop),
            RunState::Idle | RunState::Over => {}
        }
        tracing::info!(from = ?self.session.state, "restarting");
        self.session.state = RunState::Idle;
        self.start();
    }

    /// Over → Idle, for returning to the menu.  No effect in any other state.
    pub fn to_menu(&mut self) {
        if self.session.state != RunState::Over {
            return;
        }
        self.session.state = RunState::Idle;
        tracing::info!(score = self.session.score, "back to menu");
    }

    /// Stop the session for good and hand the listener back.
    pub fn destroy(mut self) -> L {
        if matches!(self.session.state, RunState::Running | RunState::Paused) {
            self.listener.audio(AudioCue::MusicStop);
        }
        tracing::info!(score = self.session.score, "engine destroyed");
        self.listener
    }

    // ── Frame ────────────────────────────────────────────────────────────────

    /// Advance one frame of `dt` reference frames.  A no-op unless Running.
    pub fn tick(&mut self, dt: f32, intents: &Intents, rng: &mut impl Rng) -> FrameReport {
        if self.session.state != RunState::Running {
            return self.report();
        }

        // 1. Movement intents
        let step = self.config.player.move_speed * dt;
        let dx = (intents.right as i8 - intents.left as i8) as f32 * step;
        let dy = (intents.down as i8 - intents.up as i8) as f32 * step;
        if dx != 0.0 || dy != 0.0 {
            self.player.move_by(dx, dy);
        }
        self.player.set_shooting(intents.shoot);

        // 2. Player timers and fire
        self.player.update(dt);
        if self.player.is_shooting {
            if let Some(shot) = self.player.shoot() {
                self.bullets.add_player_bullet(shot);
            }
        }

        // 3. Enemies; their shots join the sweep below
        for shot in self.enemies.update(dt, self.session.level, rng) {
            self.bullets.add_enemy_bullet(shot);
        }

        // 4. Bullets
        self.bullets.update(dt);

        // 5. Collisions; a fatal hit ends only this pass
        self.resolve_collisions(rng);

        // 6. Progression, also on the fatal frame so level tracks score
        if let Some(level) = level_up(self.session.level, self.session.score) {
            self.session.level = level;
            self.listener.audio(AudioCue::LevelUp);
            self.listener.level_changed(level);
            tracing::info!(level, score = self.session.score, "level up");
        }

        // 7. Notify
        self.notify_frame();
        if self.session.state == RunState::Over {
            self.listener.game_over();
        }
        self.report()
    }

    /// Bullets → enemies, enemy bullets → player, enemies → player.
    /// Each bullet resolves against at most one target.  An enemy keeps
    /// absorbing hits within the frame until it is destroyed, after which
    /// it is gone from the collection and later bullets pass through.
    fn resolve_collisions(&mut self, rng: &mut impl Rng) {
        // a. Player bullets vs enemies, enemies in spawn order.
        let mut spent = Vec::new();
        for bullet in self.bullets.player_bullets() {
            let Some(target) = self.enemies.enemies().iter().find(|e| collides(bullet, *e)) else {
                continue;
            };
            let target = target.id;
            spent.push(bullet.id);
            if self.enemies.damage_enemy(target, PLAYER_BULLET_DAMAGE) {
                self.session.score += KILL_SCORE;
                self.listener.audio(AudioCue::EnemyDestroyed);
                tracing::debug!(enemy = target, score = self.session.score, "enemy destroyed");
            }
        }
        for id in spent {
            self.bullets.remove_player_bullet(id);
        }

        // b. Enemy bullets vs player; first hit only.
        let hit = self
            .bullets
            .enemy_bullets()
            .iter()
            .find(|b| collides(*b, &self.player))
            .map(|b| b.id);
        if let Some(id) = hit {
            self.bullets.remove_enemy_bullet(id);
            if self.hurt_player(ENEMY_BULLET_DAMAGE, rng) {
                return;
            }
        }

        // c. Enemies ramming the player; first hit only, no score.
        let ram = self
            .enemies
            .enemies()
            .iter()
            .find(|e| collides(*e, &self.player))
            .map(|e| e.id);
        if let Some(id) = ram {
            self.enemies.remove_enemy(id);
            self.hurt_player(RAM_DAMAGE, rng);
        }
    }

    /// Damage the player; returns `true` if this ended the session.
    fn hurt_player(&mut self, amount: u32, rng: &mut impl Rng) -> bool {
        self.player.take_damage(amount, rng);
        self.listener.audio(AudioCue::PlayerHit);
        tracing::debug!(amount, health = self.player.health, "player hit");
        if self.player.is_alive() {
            return false;
        }
        self.session.state = RunState::Over;
        self.listener.audio(AudioCue::MusicStop);
        self.listener.audio(AudioCue::GameOver);
        tracing::info!(score = self.session.score, level = self.session.level, "game over");
        true
    }

    fn notify_frame(&mut self) {
        self.listener.score_changed(self.session.score);
        self.listener.health_changed(self.player.health);
    }

    pub fn report(&self) -> FrameReport {
        FrameReport {
            score: self.session.score,
            health: self.player.health,
            level: self.session.level,
            state: self.session.state,
        }
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    pub fn state(&self) -> RunState {
        self.session.state
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn enemies(&self) -> &EnemyManager {
        &self.enemies
    }

    pub fn enemies_mut(&mut self) -> &mut EnemyManager {
        &mut self.enemies
    }

    pub fn bullets(&self) -> &BulletManager {
        &self.bullets
    }

    pub fn bullets_mut(&mut self) -> &mut BulletManager {
        &mut self.bullets
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }
}
