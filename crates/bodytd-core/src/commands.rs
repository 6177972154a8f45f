//! Player commands sent from the input layer to the simulation.
//!
//! Commands are queued and processed at the next frame boundary, so input
//! never interleaves with a half-finished update.

use serde::{Deserialize, Serialize};

use crate::enums::TowerKind;

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start a new session, or restart after game over / victory.
    StartGame,
    /// Choose the tower kind to place next; `None` cancels the pending
    /// choice. Also clears any selected tower.
    SelectTowerType { kind: Option<TowerKind> },
    /// Tap inside the game area: places the pending tower kind if one is
    /// chosen, otherwise tries to select an existing tower.
    GameAreaTap { x: f32, y: f32 },
    /// Upgrade the currently selected tower, if affordable and below max
    /// level.
    UpgradeSelectedTower,
    /// End the current wave break immediately.
    SkipWaveBreak,
}
