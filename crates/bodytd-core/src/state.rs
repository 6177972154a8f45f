//! Game state snapshot — the complete visible state handed to the renderer
//! each frame.
//!
//! Snapshots are plain data: the renderer and input layer never see the
//! live entities.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{EnemyKind, EnemyPhase, GamePhase, TowerKind};
use crate::events::GameEvent;
use crate::types::SimTime;

/// Complete game state published after each frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub money: i32,
    pub health: i32,
    pub score: i32,
    pub best_score: i32,
    pub current_wave: u32,
    /// Fraction of the wave break elapsed (0..1); 0 outside a break.
    pub wave_break_progress: f32,
    /// Tower kind pending placement, if any.
    pub selected_tower_type: Option<TowerKind>,
    pub enemies: Vec<EnemyView>,
    pub towers: Vec<TowerView>,
    pub projectiles: Vec<ProjectileView>,
    /// Events produced this frame, drained from the engine.
    pub events: Vec<GameEvent>,
}

/// A visible enemy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyView {
    pub kind: EnemyKind,
    pub position: Vec2,
    pub health: f32,
    pub max_health: f32,
    pub phase: EnemyPhase,
    /// Idle animation phase (0..1, wrapping); drives pulsation effects.
    pub animation_phase: f32,
    /// Damage flash intensity (1 right after a hit, decaying to 0).
    pub damage_flash: f32,
    /// Death animation progress (0..1); 0 while alive.
    pub death_progress: f32,
}

/// A visible tower.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TowerView {
    pub kind: TowerKind,
    pub position: Vec2,
    pub level: u32,
    /// Selected towers render their range ring.
    pub selected: bool,
}

/// A projectile in flight. The tower kind drives the cosmetic color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Vec2,
    pub kind: TowerKind,
}
