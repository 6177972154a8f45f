//! Tests for geometry helpers, config tables, and serde round-trips.

use glam::Vec2;

use crate::commands::PlayerCommand;
use crate::config::GameConfig;
use crate::constants::*;
use crate::enums::{EnemyKind, GamePhase, TowerKind};
use crate::events::GameEvent;
use crate::state::GameStateSnapshot;
use crate::types::{distance_to_path, distance_to_segment, point_along, segment_length, SimTime};

// ---- Geometry ----

#[test]
fn test_segment_length_guards_degenerate_segments() {
    let p = Vec2::new(42.0, 7.0);
    assert_eq!(segment_length(p, p), MIN_SEGMENT_LENGTH);
    assert_eq!(
        segment_length(Vec2::ZERO, Vec2::new(3.0, 4.0)),
        5.0,
        "3-4-5 triangle"
    );
}

#[test]
fn test_point_along_interpolates_and_clamps() {
    let a = Vec2::new(0.0, 0.0);
    let b = Vec2::new(100.0, 0.0);
    assert_eq!(point_along(a, b, 0.5), Vec2::new(50.0, 0.0));
    assert_eq!(point_along(a, b, -1.0), a);
    assert_eq!(point_along(a, b, 2.0), b);
}

#[test]
fn test_distance_to_segment() {
    let a = Vec2::new(0.0, 0.0);
    let b = Vec2::new(100.0, 0.0);
    // Perpendicular to the interior.
    assert!((distance_to_segment(Vec2::new(50.0, 30.0), a, b) - 30.0).abs() < 1e-4);
    // Beyond an endpoint: distance to the endpoint, not the infinite line.
    assert!((distance_to_segment(Vec2::new(130.0, 40.0), a, b) - 50.0).abs() < 1e-4);
    // Degenerate segment falls back to point distance.
    assert!((distance_to_segment(Vec2::new(3.0, 4.0), a, a) - 5.0).abs() < 1e-4);
}

#[test]
fn test_distance_to_path_picks_nearest_segment() {
    let path = [
        Vec2::new(0.0, 0.0),
        Vec2::new(100.0, 0.0),
        Vec2::new(100.0, 100.0),
    ];
    let d = distance_to_path(Vec2::new(90.0, 50.0), &path);
    assert!((d - 10.0).abs() < 1e-4);
    assert_eq!(distance_to_path(Vec2::ZERO, &path[..1]), f32::MAX);
}

#[test]
fn test_sim_time_advance() {
    let mut time = SimTime::default();
    for _ in 0..60 {
        time.advance(DT);
    }
    assert_eq!(time.tick, 60);
    assert!((time.elapsed_secs - 1.0).abs() < 1e-4);
    assert!((time.elapsed_ms() - 1000.0).abs() < 0.5);
}

// ---- Config tables ----

#[test]
fn test_default_config_matches_constants() {
    let config = GameConfig::default();
    assert_eq!(config.towers.spec(TowerKind::Basic).cost, BASIC_TOWER_COST);
    assert_eq!(config.towers.spec(TowerKind::Sniper).range, SNIPER_TOWER_RANGE);
    assert_eq!(
        config.towers.spec(TowerKind::Rapid).attack_speed,
        RAPID_TOWER_ATTACK_SPEED
    );
    assert_eq!(config.enemies.spec(EnemyKind::Virus).max_health, VIRUS_HEALTH);
    assert_eq!(config.enemies.spec(EnemyKind::Parasite).speed, PARASITE_SPEED);
    assert_eq!(config.waves.base_enemy_count, WAVE_BASE_ENEMY_COUNT);
    assert_eq!(config.economy.max_money, MAX_MONEY);
}

#[test]
fn test_tower_kinds_ordered_by_role() {
    let table = GameConfig::default().towers;
    let basic = table.spec(TowerKind::Basic);
    let sniper = table.spec(TowerKind::Sniper);
    let rapid = table.spec(TowerKind::Rapid);
    assert!(sniper.range > basic.range && basic.range > rapid.range);
    assert!(sniper.damage > basic.damage && basic.damage > rapid.damage);
    assert!(rapid.attack_speed > basic.attack_speed && basic.attack_speed > sniper.attack_speed);
}

// ---- Serde round-trips ----

#[test]
fn test_command_serde_round_trip() {
    let commands = vec![
        PlayerCommand::StartGame,
        PlayerCommand::SelectTowerType {
            kind: Some(TowerKind::Sniper),
        },
        PlayerCommand::SelectTowerType { kind: None },
        PlayerCommand::GameAreaTap { x: 120.0, y: 640.0 },
        PlayerCommand::UpgradeSelectedTower,
        PlayerCommand::SkipWaveBreak,
    ];
    for command in commands {
        let json = serde_json::to_string(&command).unwrap();
        let back: PlayerCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(back, command);
    }
}

#[test]
fn test_event_serde_is_tagged() {
    let event = GameEvent::WaveCompleted { wave: 3, bonus: 210 };
    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains("\"type\":\"WaveCompleted\""), "got {json}");
}

#[test]
fn test_snapshot_serde_round_trip() {
    let snapshot = GameStateSnapshot {
        phase: GamePhase::Playing,
        money: 500,
        health: 100,
        current_wave: 1,
        ..Default::default()
    };
    let json = serde_json::to_string(&snapshot).unwrap();
    let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snapshot);
}
