//! Wave scheduler — builds a timed spawn queue per wave with escalating
//! difficulty and banded composition.

use std::collections::VecDeque;

use glam::Vec2;

use bodytd_core::config::GameConfig;
use bodytd_core::constants::{EARLY_WAVE_MAX, MID_WAVE_MAX};
use bodytd_core::enums::EnemyKind;

use crate::enemy::Enemy;

/// Produces the enemies of the active wave, one per spawn interval.
#[derive(Debug, Default)]
pub struct WaveManager {
    current_wave: u32,
    queue: VecDeque<Enemy>,
    spawn_timer: f32,
}

impl WaveManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the next wave's spawn queue. Refuses past the configured final
    /// wave; returns whether a wave was started.
    ///
    /// Wave `n` queues `base + (n - 1) * increment` enemies, all stamped
    /// with the same spawn position. Composition bands: early waves are all
    /// Virus; mid waves interleave Virus and Bacteria evenly with an odd
    /// remainder going to Virus; late waves interleave all three kinds with
    /// the remainder going to Virus, then Bacteria.
    pub fn start_next_wave(&mut self, spawn_point: Vec2, config: &GameConfig) -> bool {
        if self.current_wave >= config.waves.max_wave {
            return false;
        }
        self.current_wave += 1;
        self.queue.clear();
        self.spawn_timer = 0.0;

        let count = config.waves.base_enemy_count
            + (self.current_wave - 1) * config.waves.per_wave_increment;

        let spawn = |kind: EnemyKind| Enemy::new(kind, spawn_point, config.enemies.spec(kind));

        if self.current_wave <= EARLY_WAVE_MAX {
            for _ in 0..count {
                self.queue.push_back(spawn(EnemyKind::Virus));
            }
        } else if self.current_wave <= MID_WAVE_MAX {
            for _ in 0..count / 2 {
                self.queue.push_back(spawn(EnemyKind::Virus));
                self.queue.push_back(spawn(EnemyKind::Bacteria));
            }
            if count % 2 != 0 {
                self.queue.push_back(spawn(EnemyKind::Virus));
            }
        } else {
            for _ in 0..count / 3 {
                self.queue.push_back(spawn(EnemyKind::Virus));
                self.queue.push_back(spawn(EnemyKind::Bacteria));
                self.queue.push_back(spawn(EnemyKind::Parasite));
            }
            let remainder = count % 3;
            if remainder >= 1 {
                self.queue.push_back(spawn(EnemyKind::Virus));
            }
            if remainder >= 2 {
                self.queue.push_back(spawn(EnemyKind::Bacteria));
            }
        }

        true
    }

    /// Accumulate `dt` and release due spawns.
    ///
    /// Catch-up policy: at most one enemy per call. When the accumulator
    /// reaches the interval it resets to zero and exactly one enemy leaves
    /// the queue, so a single huge `dt` still spawns one enemy and drops the
    /// remainder.
    pub fn update(&mut self, dt: f32, spawn_interval: f32) -> Vec<Enemy> {
        let mut spawned = Vec::new();

        if !self.queue.is_empty() {
            self.spawn_timer += dt;
            if self.spawn_timer >= spawn_interval {
                self.spawn_timer = 0.0;
                if let Some(enemy) = self.queue.pop_front() {
                    spawned.push(enemy);
                }
            }
        }

        spawned
    }

    /// The wave is complete exactly when the spawn queue is empty.
    pub fn is_wave_complete(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn current_wave(&self) -> u32 {
        self.current_wave
    }

    pub fn reset(&mut self) {
        self.current_wave = 0;
        self.queue.clear();
        self.spawn_timer = 0.0;
    }

    #[cfg(test)]
    pub(crate) fn queued_kinds(&self) -> Vec<EnemyKind> {
        self.queue.iter().map(|enemy| enemy.kind).collect()
    }
}
