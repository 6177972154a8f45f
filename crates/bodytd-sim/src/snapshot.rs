//! Snapshot builder — flattens the live session into plain view data.
//!
//! Read-only: building a snapshot never modifies the engine.

use bodytd_core::enums::GamePhase;
use bodytd_core::events::GameEvent;
use bodytd_core::state::{EnemyView, GameStateSnapshot, ProjectileView, TowerView};

use crate::engine::GameEngine;

/// Build a complete snapshot of the current session state.
pub fn build_snapshot(engine: &GameEngine, events: Vec<GameEvent>) -> GameStateSnapshot {
    let wave_break_progress = if engine.phase == GamePhase::WaveBreak {
        (engine.wave_break_timer / engine.config.waves.wave_break_secs).clamp(0.0, 1.0)
    } else {
        0.0
    };

    GameStateSnapshot {
        time: engine.time,
        phase: engine.phase,
        money: engine.money,
        health: engine.health,
        score: engine.score,
        best_score: engine.stats.best_score,
        current_wave: engine.waves.current_wave(),
        wave_break_progress,
        selected_tower_type: engine.selected_tower_type,
        enemies: build_enemies(engine),
        towers: build_towers(engine),
        projectiles: build_projectiles(engine),
        events,
    }
}

fn build_enemies(engine: &GameEngine) -> Vec<EnemyView> {
    engine
        .enemies
        .iter()
        .map(|enemy| EnemyView {
            kind: enemy.kind,
            position: enemy.position,
            health: enemy.health,
            max_health: enemy.max_health,
            phase: enemy.phase,
            animation_phase: enemy.animation_phase,
            damage_flash: enemy.damage_flash(),
            death_progress: enemy.death_progress(),
        })
        .collect()
}

fn build_towers(engine: &GameEngine) -> Vec<TowerView> {
    engine
        .towers
        .iter()
        .map(|tower| TowerView {
            kind: tower.kind,
            position: tower.position,
            level: tower.level,
            selected: tower.selected,
        })
        .collect()
}

/// Projectiles are owned by towers; the renderer gets one flat list.
fn build_projectiles(engine: &GameEngine) -> Vec<ProjectileView> {
    engine
        .towers
        .iter()
        .flat_map(|tower| {
            tower.projectiles().iter().map(|projectile| ProjectileView {
                position: projectile.position,
                kind: tower.kind,
            })
        })
        .collect()
}
