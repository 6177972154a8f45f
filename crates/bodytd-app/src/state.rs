//! Application state shared between the input/UI side and the game loop
//! thread.
//!
//! Input mutations travel through the command channel and are applied at
//! frame boundaries; renderer reads go through the snapshot mutex. Neither
//! side ever touches the live engine, which is owned by the loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use bodytd_core::commands::PlayerCommand;
use bodytd_core::config::GameConfig;
use bodytd_core::state::GameStateSnapshot;

use crate::game_loop;

/// Messages sent from the UI side to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the engine.
    Player(PlayerCommand),
    /// Stop the game loop thread gracefully.
    Shutdown,
}

/// Shared handle to a running (or stopped) game session.
pub struct AppState {
    /// Channel into the game loop; `None` until `start`.
    command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot, updated by the loop thread after each frame.
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    /// Join handle for clean teardown.
    loop_handle: Mutex<Option<JoinHandle<()>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            loop_handle: Mutex::new(None),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn the game loop thread. A second call while running is a no-op.
    pub fn start(&self, config: GameConfig) {
        let mut tx_slot = match self.command_tx.lock() {
            Ok(slot) => slot,
            Err(_) => return,
        };
        if tx_slot.is_some() {
            return;
        }

        let (tx, handle) = game_loop::spawn_game_loop(config, Arc::clone(&self.latest_snapshot));
        *tx_slot = Some(tx);
        if let Ok(mut slot) = self.loop_handle.lock() {
            *slot = Some(handle);
        }
    }

    /// Forward a player command to the loop. Returns false when no loop is
    /// running or the loop has gone away.
    pub fn send(&self, command: PlayerCommand) -> bool {
        match self.command_tx.lock() {
            Ok(slot) => slot
                .as_ref()
                .map(|tx| tx.send(GameLoopCommand::Player(command)).is_ok())
                .unwrap_or(false),
            Err(_) => false,
        }
    }

    /// Latest published snapshot, if any frame has run yet.
    pub fn snapshot(&self) -> Option<GameStateSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|slot| slot.clone())
    }

    /// Cooperative shutdown: signal the loop and join the thread before
    /// returning.
    pub fn stop(&self) {
        if let Ok(mut slot) = self.command_tx.lock() {
            if let Some(tx) = slot.take() {
                let _ = tx.send(GameLoopCommand::Shutdown);
            }
        }
        if let Ok(mut slot) = self.loop_handle.lock() {
            if let Some(handle) = slot.take() {
                let _ = handle.join();
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.command_tx
            .lock()
            .map(|slot| slot.is_some())
            .unwrap_or(false)
    }
}
