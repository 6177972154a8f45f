//! Session configuration — every tuning knob the simulation recognizes.
//!
//! The engine reads stats exclusively through these tables, so a session can
//! be rebalanced (or a test can pin exact values) without touching code.
//! Defaults come from `constants`.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{EnemyKind, TowerKind};

/// Per-kind tower stats.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TowerSpec {
    /// Placement cost.
    pub cost: i32,
    /// Maximum targeting distance (px).
    pub range: f32,
    /// Damage per projectile.
    pub damage: f32,
    /// Shots per second.
    pub attack_speed: f32,
    /// Upgrade cost base; upgrading at level `n` costs `upgrade_cost * n`.
    pub upgrade_cost: i32,
    pub max_level: u32,
    /// Projectile flight speed (px/s).
    pub projectile_speed: f32,
}

/// Tower stat table, one entry per [`TowerKind`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TowerTable {
    pub basic: TowerSpec,
    pub sniper: TowerSpec,
    pub rapid: TowerSpec,
}

impl TowerTable {
    pub fn spec(&self, kind: TowerKind) -> &TowerSpec {
        match kind {
            TowerKind::Basic => &self.basic,
            TowerKind::Sniper => &self.sniper,
            TowerKind::Rapid => &self.rapid,
        }
    }
}

impl Default for TowerTable {
    fn default() -> Self {
        Self {
            basic: TowerSpec {
                cost: BASIC_TOWER_COST,
                range: BASIC_TOWER_RANGE,
                damage: BASIC_TOWER_DAMAGE,
                attack_speed: BASIC_TOWER_ATTACK_SPEED,
                upgrade_cost: BASIC_TOWER_UPGRADE_COST,
                max_level: TOWER_MAX_LEVEL,
                projectile_speed: PROJECTILE_SPEED,
            },
            sniper: TowerSpec {
                cost: SNIPER_TOWER_COST,
                range: SNIPER_TOWER_RANGE,
                damage: SNIPER_TOWER_DAMAGE,
                attack_speed: SNIPER_TOWER_ATTACK_SPEED,
                upgrade_cost: SNIPER_TOWER_UPGRADE_COST,
                max_level: TOWER_MAX_LEVEL,
                projectile_speed: PROJECTILE_SPEED,
            },
            rapid: TowerSpec {
                cost: RAPID_TOWER_COST,
                range: RAPID_TOWER_RANGE,
                damage: RAPID_TOWER_DAMAGE,
                attack_speed: RAPID_TOWER_ATTACK_SPEED,
                upgrade_cost: RAPID_TOWER_UPGRADE_COST,
                max_level: TOWER_MAX_LEVEL,
                projectile_speed: PROJECTILE_SPEED,
            },
        }
    }
}

/// Per-kind enemy stats.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemySpec {
    pub max_health: f32,
    /// Movement speed along the path (px/s).
    pub speed: f32,
    /// Player health lost when this enemy reaches the path end.
    pub damage: i32,
    /// Money granted on death, before the wave bonus multiplier.
    pub reward: i32,
    /// Score granted each time a projectile hits this enemy.
    pub hit_score: i32,
}

/// Enemy stat table, one entry per [`EnemyKind`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyTable {
    pub virus: EnemySpec,
    pub bacteria: EnemySpec,
    pub parasite: EnemySpec,
}

impl EnemyTable {
    pub fn spec(&self, kind: EnemyKind) -> &EnemySpec {
        match kind {
            EnemyKind::Virus => &self.virus,
            EnemyKind::Bacteria => &self.bacteria,
            EnemyKind::Parasite => &self.parasite,
        }
    }
}

impl Default for EnemyTable {
    fn default() -> Self {
        Self {
            virus: EnemySpec {
                max_health: VIRUS_HEALTH,
                speed: VIRUS_SPEED,
                damage: VIRUS_DAMAGE,
                reward: VIRUS_REWARD,
                hit_score: VIRUS_HIT_SCORE,
            },
            bacteria: EnemySpec {
                max_health: BACTERIA_HEALTH,
                speed: BACTERIA_SPEED,
                damage: BACTERIA_DAMAGE,
                reward: BACTERIA_REWARD,
                hit_score: BACTERIA_HIT_SCORE,
            },
            parasite: EnemySpec {
                max_health: PARASITE_HEALTH,
                speed: PARASITE_SPEED,
                damage: PARASITE_DAMAGE,
                reward: PARASITE_REWARD,
                hit_score: PARASITE_HIT_SCORE,
            },
        }
    }
}

/// Wave scheduling parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveConfig {
    /// Enemy count for wave 1.
    pub base_enemy_count: u32,
    /// Extra enemies per subsequent wave.
    pub per_wave_increment: u32,
    /// Seconds between spawns.
    pub spawn_interval: f32,
    /// Final wave number.
    pub max_wave: u32,
    /// Wave-break duration in seconds.
    pub wave_break_secs: f32,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            base_enemy_count: WAVE_BASE_ENEMY_COUNT,
            per_wave_increment: WAVE_PER_WAVE_INCREMENT,
            spawn_interval: SPAWN_INTERVAL_SECS,
            max_wave: MAX_WAVE,
            wave_break_secs: WAVE_BREAK_SECS,
        }
    }
}

/// Economy bounds and starting values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EconomyConfig {
    pub starting_money: i32,
    pub starting_health: i32,
    pub max_money: i32,
    pub max_health: i32,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            starting_money: STARTING_MONEY,
            starting_health: STARTING_HEALTH,
            max_money: MAX_MONEY,
            max_health: MAX_HEALTH,
        }
    }
}

/// Playfield dimensions. The waypoint path scales with these.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_MAP_WIDTH,
            height: DEFAULT_MAP_HEIGHT,
        }
    }
}

/// Complete configuration for one game session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub towers: TowerTable,
    pub enemies: EnemyTable,
    pub waves: WaveConfig,
    pub economy: EconomyConfig,
    pub map: MapConfig,
}
