//! Projectile — a payload flying in a straight line toward a captured
//! target position.
//!
//! Resolution is kinematic: the projectile travels at fixed speed, resolves
//! as a hit on the first live enemy inside the collision radius, and expires
//! once it has covered the distance to the original target. It resolves in
//! bounded time, hits at most one enemy, and never applies damage itself;
//! the owning tower does that with the returned index.

use glam::Vec2;

use bodytd_core::constants::{MIN_SEGMENT_LENGTH, PROJECTILE_COLLISION_RADIUS};

use crate::enemy::Enemy;

#[derive(Debug, Clone)]
pub struct Projectile {
    pub position: Vec2,
    pub damage: f32,
    direction: Vec2,
    speed: f32,
    /// Distance from origin to the captured target; travel stops here.
    max_distance: f32,
    traveled: f32,
    active: bool,
}

impl Projectile {
    pub fn new(origin: Vec2, target: Vec2, damage: f32, speed: f32) -> Self {
        let offset = target - origin;
        let max_distance = offset.length();
        let direction = if max_distance > MIN_SEGMENT_LENGTH {
            offset / max_distance
        } else {
            Vec2::ZERO
        };

        Self {
            position: origin,
            damage,
            direction,
            speed,
            max_distance,
            traveled: 0.0,
            active: true,
        }
    }

    /// Advance one frame. Returns the index of the enemy hit this frame, if
    /// any; the projectile deactivates the frame it hits or expires.
    pub fn update(&mut self, dt: f32, enemies: &[Enemy]) -> Option<usize> {
        if !self.active {
            return None;
        }

        let step = self.speed * dt;
        self.position += self.direction * step;
        self.traveled += step;

        for (index, enemy) in enemies.iter().enumerate() {
            if !enemy.is_alive() {
                continue;
            }
            if self.position.distance(enemy.position) <= PROJECTILE_COLLISION_RADIUS {
                self.active = false;
                return Some(index);
            }
        }

        if self.traveled >= self.max_distance {
            self.active = false;
        }
        None
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}
