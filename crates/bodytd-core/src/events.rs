//! Events emitted by the simulation for audio and UI feedback.
//!
//! Events are fire-and-forget: they are drained into each snapshot and a
//! consumer that ignores or drops them cannot affect simulation state.

use serde::{Deserialize, Serialize};

use crate::enums::{EnemyKind, TowerKind};

/// Discrete notifications produced during a frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A new wave began spawning.
    WaveStarted { wave: u32 },
    /// All enemies of the wave are gone; the break has begun.
    WaveCompleted { wave: u32, bonus: i32 },
    /// A projectile connected.
    EnemyHit { kind: EnemyKind, score: i32 },
    /// An enemy finished its death animation and paid out.
    EnemyKilled { kind: EnemyKind, reward: i32 },
    /// An enemy walked off the end of the path.
    EnemyReachedEnd { kind: EnemyKind, damage: i32 },
    /// A tower was placed.
    TowerPlaced { kind: TowerKind },
    /// A tower was upgraded to `level`.
    TowerUpgraded { kind: TowerKind, level: u32 },
    /// Health hit zero.
    GameOver { score: i32 },
    /// The final wave was cleared.
    Victory { score: i32, bonus: i32 },
}
