//! Enemy actor — a damageable walker interpolating along the waypoint path.

use glam::Vec2;

use bodytd_core::config::EnemySpec;
use bodytd_core::constants::{ANIMATION_RATE_FACTOR, DAMAGE_FLASH_DECAY, DEATH_ANIMATION_SECS};
use bodytd_core::enums::{EnemyKind, EnemyPhase};
use bodytd_core::types::{point_along, segment_length};

/// A single enemy. Stats are copied from the config table at spawn so a
/// mid-session config change never mutates enemies already on the path.
#[derive(Debug, Clone)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub position: Vec2,
    pub health: f32,
    pub max_health: f32,
    pub speed: f32,
    pub phase: EnemyPhase,
    /// Index of the waypoint this enemy is walking away from.
    pub(crate) waypoint_index: usize,
    /// Progress (0..1) toward the next waypoint.
    pub(crate) progress: f32,
    pub(crate) animation_phase: f32,
    pub(crate) damage_flash: f32,
    pub(crate) death_timer: f32,
}

impl Enemy {
    /// Spawn an enemy of `kind` at the given point (normally the first
    /// waypoint).
    pub fn new(kind: EnemyKind, spawn: Vec2, spec: &EnemySpec) -> Self {
        Self {
            kind,
            position: spawn,
            health: spec.max_health,
            max_health: spec.max_health,
            speed: spec.speed,
            phase: EnemyPhase::Alive,
            waypoint_index: 0,
            progress: 0.0,
            animation_phase: 0.0,
            damage_flash: 0.0,
            death_timer: 0.0,
        }
    }

    /// Advance one frame. Returns true exactly once, on the frame this enemy
    /// reaches the last waypoint.
    pub fn update(&mut self, waypoints: &[Vec2], dt: f32) -> bool {
        if matches!(self.phase, EnemyPhase::Dead | EnemyPhase::ReachedEnd) {
            return false;
        }

        self.animation_phase = (self.animation_phase + dt * self.speed * ANIMATION_RATE_FACTOR) % 1.0;
        if self.damage_flash > 0.0 {
            self.damage_flash = (self.damage_flash - dt * DAMAGE_FLASH_DECAY).max(0.0);
        }

        if self.phase == EnemyPhase::Dying {
            self.death_timer = (self.death_timer + dt).min(DEATH_ANIMATION_SECS);
            if self.death_timer >= DEATH_ANIMATION_SECS {
                self.phase = EnemyPhase::Dead;
            }
            return false;
        }

        if waypoints.len() < 2 || self.waypoint_index >= waypoints.len() - 1 {
            self.phase = EnemyPhase::ReachedEnd;
            return true;
        }

        let current = waypoints[self.waypoint_index];
        let next = waypoints[self.waypoint_index + 1];
        self.progress += self.speed * dt / segment_length(current, next);

        if self.progress >= 1.0 {
            self.progress = 0.0;
            self.waypoint_index += 1;
            self.position = next;
            if self.waypoint_index >= waypoints.len() - 1 {
                self.phase = EnemyPhase::ReachedEnd;
                return true;
            }
        } else {
            self.position = point_along(current, next, self.progress);
        }

        false
    }

    /// Apply damage. Returns true exactly once, on the hit that transitions
    /// this enemy from Alive to Dying; idempotent thereafter.
    pub fn take_damage(&mut self, amount: f32) -> bool {
        self.health = (self.health - amount).max(0.0);
        self.damage_flash = 1.0;

        if self.health <= 0.0 && self.phase == EnemyPhase::Alive {
            self.phase = EnemyPhase::Dying;
            return true;
        }
        false
    }

    /// Targetable by towers and hittable by projectiles.
    pub fn is_alive(&self) -> bool {
        self.phase == EnemyPhase::Alive
    }

    /// Death animation finished; remove from the roster and pay the reward.
    pub fn is_dead(&self) -> bool {
        self.phase == EnemyPhase::Dead
    }

    pub fn has_reached_end(&self) -> bool {
        self.phase == EnemyPhase::ReachedEnd
    }

    /// Death animation progress (0..1); 0 while alive.
    pub fn death_progress(&self) -> f32 {
        self.death_timer / DEATH_ANIMATION_SECS
    }

    pub fn damage_flash(&self) -> f32 {
        self.damage_flash
    }
}
