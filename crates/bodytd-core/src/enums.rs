//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Enemy variant. A closed set; per-kind stats live in the config tables,
/// not in subtypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Fast, fragile. The only kind seen in early waves.
    Virus,
    /// Middling speed and health, joins from wave 3.
    Bacteria,
    /// Slow tank, joins in the final wave.
    Parasite,
}

/// Enemy lifecycle phase.
///
/// `Alive -> Dying -> Dead`, or `Alive -> ReachedEnd`. Nothing transitions
/// out of a terminal phase, and `Dying` never returns to `Alive`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyPhase {
    #[default]
    Alive,
    /// Health reached zero; the death animation is playing.
    Dying,
    /// Death animation finished. Removed from the roster this frame.
    Dead,
    /// Walked off the last waypoint. Terminal, distinct from Dead.
    ReachedEnd,
}

/// Tower variant. A closed set; per-kind stats live in the config tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TowerKind {
    /// Moderate range, damage, and rate. Cheap.
    Basic,
    /// Long range, high damage, slow. Expensive.
    Sniper,
    /// Short range, low damage, very fast. Mid-cost.
    Rapid,
}

impl TowerKind {
    pub const ALL: [TowerKind; 3] = [TowerKind::Basic, TowerKind::Sniper, TowerKind::Rapid];
}

/// Game phase (top-level session state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    NotStarted,
    Playing,
    /// Pause between waves; grants a money bonus and health recovery.
    WaveBreak,
    /// Health hit zero. Terminal until restart.
    GameOver,
    /// Survived the final wave. Terminal until restart.
    Victory,
}

impl GamePhase {
    /// Whether per-frame simulation phases run in this state.
    pub fn is_running(&self) -> bool {
        matches!(self, GamePhase::Playing | GamePhase::WaveBreak)
    }

    /// Whether the session has ended (win or lose).
    pub fn is_over(&self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::Victory)
    }
}
