/// Projectile bookkeeping.
///
/// Player and enemy bullets live in separate collections: they never change
/// owner, collide with different targets and leave through opposite edges.

use crate::entities::{Bullet, BulletOwner, Shot};

/// Player bullets are dropped once above this y.
const PLAYER_EXIT_Y: f32 = -20.0;
/// Enemy bullets are dropped once this far below the bottom edge.
const ENEMY_EXIT_MARGIN: f32 = 20.0;

#[derive(Clone, Debug)]
pub struct BulletManager {
    player_bullets: Vec<Bullet>,
    enemy_bullets: Vec<Bullet>,
    viewport_height: f32,
    next_id: u64,
}

impl BulletManager {
    pub fn new(viewport_height: f32) -> Self {
        BulletManager {
            player_bullets: Vec::new(),
            enemy_bullets: Vec::new(),
            viewport_height,
            next_id: 0,
        }
    }

    fn track(&mut self, shot: Shot, owner: BulletOwner) -> Bullet {
        self.next_id += 1;
        Bullet {
            id: self.next_id,
            x: shot.x,
            y: shot.y,
            velocity: shot.velocity,
            owner,
        }
    }

    /// Insert a player-fired shot; returns the new bullet's id.
    pub fn add_player_bullet(&mut self, shot: Shot) -> u64 {
        let bullet = self.track(shot, BulletOwner::Player);
        let id = bullet.id;
        self.player_bullets.push(bullet);
        id
    }

    /// Insert an enemy-fired shot; returns the new bullet's id.
    pub fn add_enemy_bullet(&mut self, shot: Shot) -> u64 {
        let bullet = self.track(shot, BulletOwner::Enemy);
        let id = bullet.id;
        self.enemy_bullets.push(bullet);
        id
    }

    /// Move every bullet by `dt` frames of its velocity and drop the ones
    /// that left the field.
    pub fn update(&mut self, dt: f32) {
        for b in self.player_bullets.iter_mut().chain(self.enemy_bullets.iter_mut()) {
            b.x += b.velocity.x * dt;
            b.y += b.velocity.y * dt;
        }

        let before = self.player_bullets.len() + self.enemy_bullets.len();
        let bottom = self.viewport_height + ENEMY_EXIT_MARGIN;
        self.player_bullets.retain(|b| b.y >= PLAYER_EXIT_Y);
        self.enemy_bullets.retain(|b| b.y <= bottom);
        let pruned = before - self.player_bullets.len() - self.enemy_bullets.len();
        if pruned > 0 {
            tracing::trace!(pruned, "bullets left the field");
        }
    }

    /// Remove a player bullet by id.  Absent ids are ignored.
    pub fn remove_player_bullet(&mut self, id: u64) -> bool {
        remove_by_id(&mut self.player_bullets, id)
    }

    /// Remove an enemy bullet by id.  Absent ids are ignored.
    pub fn remove_enemy_bullet(&mut self, id: u64) -> bool {
        remove_by_id(&mut self.enemy_bullets, id)
    }

    pub fn player_bullets(&self) -> &[Bullet] {
        &self.player_bullets
    }

    pub fn enemy_bullets(&self) -> &[Bullet] {
        &self.enemy_bullets
    }

    pub fn reset(&mut self) {
        self.player_bullets.clear();
        self.enemy_bullets.clear();
    }
}

fn remove_by_id(bullets: &mut Vec<Bullet>, id: u64) -> bool {
    match bullets.iter().position(|b| b.id == id) {
        Some(i) => {
            bullets.remove(i);
            true
        }
        None => false,
    }
}
