//! Simulation constants and default tuning parameters.
//!
//! These are the defaults behind `config::GameConfig::default()`; gameplay
//! code reads the config, not these constants, so every value here is
//! tunable per session.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick at the nominal rate.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

/// Frames with `dt` above this are rejected outright; a resumed or stalled
/// frame must not turn into a physics blow-up.
pub const MAX_FRAME_DT: f32 = 1.0;

// --- Geometry ---

/// Minimum waypoint segment length; shorter segments are treated as this
/// long so progress math never divides by zero.
pub const MIN_SEGMENT_LENGTH: f32 = 0.001;

// --- Map ---

/// Default playfield size in pixels (portrait, matching the single map).
pub const DEFAULT_MAP_WIDTH: f32 = 1080.0;
pub const DEFAULT_MAP_HEIGHT: f32 = 1920.0;

/// The single scrolling path, as fractions of the playfield size.
pub const WAYPOINT_FRACTIONS: [(f32, f32); 11] = [
    (0.0, 0.5),
    (0.1, 0.4),
    (0.2, 0.6),
    (0.3, 0.3),
    (0.4, 0.7),
    (0.5, 0.4),
    (0.6, 0.6),
    (0.7, 0.3),
    (0.8, 0.5),
    (0.9, 0.4),
    (1.0, 0.5),
];

/// Points closer than this to the path centerline are invalid tower spots.
pub const PATH_CLEARANCE: f32 = 30.0;

/// Minimum tower-to-tower spacing, also used as the screen-edge margin for
/// placement.
pub const MIN_TOWER_DISTANCE: f32 = 80.0;

// --- Economy ---

pub const STARTING_MONEY: i32 = 500;
pub const STARTING_HEALTH: i32 = 100;
pub const MAX_MONEY: i32 = 9999;
pub const MAX_HEALTH: i32 = 100;

// --- Waves ---

/// Enemy count for wave `n` is `base + (n - 1) * increment`.
pub const WAVE_BASE_ENEMY_COUNT: u32 = 12;
pub const WAVE_PER_WAVE_INCREMENT: u32 = 4;

/// Seconds between spawns while a wave queue is non-empty.
pub const SPAWN_INTERVAL_SECS: f32 = 0.7;

/// Final wave number; clearing it wins the game.
pub const MAX_WAVE: u32 = 5;

/// Wave-break duration in seconds.
pub const WAVE_BREAK_SECS: f32 = 10.0;

/// Last wave that spawns only the weakest kind.
pub const EARLY_WAVE_MAX: u32 = 2;

/// Last wave that interleaves two kinds; later waves use all three.
pub const MID_WAVE_MAX: u32 = 4;

/// Wave-completion money bonus is `(base + wave * per_wave) * multiplier`.
pub const WAVE_BONUS_BASE: i32 = 100;
pub const WAVE_BONUS_PER_WAVE: i32 = 25;

/// Per-wave escalation of the money bonus multiplier.
pub const BONUS_MONEY_MULTIPLIER_STEP: f32 = 0.2;

/// Health recovered at the end of a wave break, and its per-wave escalation.
pub const BONUS_HEALTH_REWARD_INITIAL: i32 = 10;
pub const BONUS_HEALTH_REWARD_STEP: i32 = 5;

/// Victory score bonus is `base + remaining_health * per_health`.
pub const VICTORY_BONUS_BASE: i32 = 1000;
pub const VICTORY_BONUS_PER_HEALTH: i32 = 10;

// --- Combat ---

/// Projectile flight speed (px/s), shared by all tower kinds.
pub const PROJECTILE_SPEED: f32 = 1200.0;

/// A projectile within this distance of a live enemy resolves as a hit.
pub const PROJECTILE_COLLISION_RADIUS: f32 = 20.0;

/// Tap-to-select radius around a tower center.
pub const TOWER_PICK_RADIUS: f32 = 40.0;

// --- Tower stats ---

pub const BASIC_TOWER_COST: i32 = 100;
pub const BASIC_TOWER_RANGE: f32 = 200.0;
pub const BASIC_TOWER_DAMAGE: f32 = 20.0;
pub const BASIC_TOWER_ATTACK_SPEED: f32 = 1.5;
pub const BASIC_TOWER_UPGRADE_COST: i32 = 100;

pub const SNIPER_TOWER_COST: i32 = 200;
pub const SNIPER_TOWER_RANGE: f32 = 400.0;
pub const SNIPER_TOWER_DAMAGE: f32 = 50.0;
pub const SNIPER_TOWER_ATTACK_SPEED: f32 = 0.5;
pub const SNIPER_TOWER_UPGRADE_COST: i32 = 200;

pub const RAPID_TOWER_COST: i32 = 150;
pub const RAPID_TOWER_RANGE: f32 = 150.0;
pub const RAPID_TOWER_DAMAGE: f32 = 10.0;
pub const RAPID_TOWER_ATTACK_SPEED: f32 = 5.0;
pub const RAPID_TOWER_UPGRADE_COST: i32 = 150;

pub const TOWER_MAX_LEVEL: u32 = 3;

// --- Enemy stats ---

pub const VIRUS_HEALTH: f32 = 50.0;
pub const VIRUS_SPEED: f32 = 150.0;
pub const VIRUS_DAMAGE: i32 = 1;
pub const VIRUS_REWARD: i32 = 30;
pub const VIRUS_HIT_SCORE: i32 = 2;

pub const BACTERIA_HEALTH: f32 = 100.0;
pub const BACTERIA_SPEED: f32 = 100.0;
pub const BACTERIA_DAMAGE: i32 = 2;
pub const BACTERIA_REWARD: i32 = 25;
pub const BACTERIA_HIT_SCORE: i32 = 3;

pub const PARASITE_HEALTH: f32 = 200.0;
pub const PARASITE_SPEED: f32 = 50.0;
pub const PARASITE_DAMAGE: i32 = 3;
pub const PARASITE_REWARD: i32 = 40;
pub const PARASITE_HIT_SCORE: i32 = 5;

// --- Enemy animation ---

/// Damage flash decay rate (fraction per second).
pub const DAMAGE_FLASH_DECAY: f32 = 2.0;

/// Death animation duration in seconds.
pub const DEATH_ANIMATION_SECS: f32 = 0.5;

/// Idle animation phase advances at `speed * this` per second.
pub const ANIMATION_RATE_FACTOR: f32 = 0.01;
