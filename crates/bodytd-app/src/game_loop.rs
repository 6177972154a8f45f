//! Game loop thread — runs the engine at 60 Hz and publishes snapshots.
//!
//! The engine is created inside the thread so it has a single owner.
//! Commands arrive via `mpsc` channel and are queued into the engine at the
//! next frame boundary; each frame's snapshot is stored in shared state for
//! the renderer to poll.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use bodytd_core::config::GameConfig;
use bodytd_core::constants::TICK_RATE;
use bodytd_core::state::GameStateSnapshot;
use bodytd_sim::engine::GameEngine;

use crate::state::GameLoopCommand;

/// Nominal duration of one frame.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawn the game loop in a new thread.
///
/// Returns the command sender and the join handle; the owner joins the
/// handle after sending `Shutdown` for a clean teardown.
pub fn spawn_game_loop(
    config: GameConfig,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> (mpsc::Sender<GameLoopCommand>, JoinHandle<()>) {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("bodytd-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_snapshot);
        })
        .expect("failed to spawn game loop thread");

    (cmd_tx, handle)
}

/// The game loop. Runs until a Shutdown command or channel disconnect.
fn run_game_loop(
    config: GameConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let mut engine = GameEngine::new(config);
    let mut next_frame_time = Instant::now();
    let mut last_frame = Instant::now();

    loop {
        // 1. Drain all pending commands.
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(command)) => engine.queue_command(command),
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one frame with the measured dt. The engine clamps
        //    degenerate values itself.
        let now = Instant::now();
        let dt = (now - last_frame).as_secs_f32();
        last_frame = now;
        let snapshot = engine.update(dt);

        // 3. Publish for synchronous polling.
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until the next frame boundary.
        next_frame_time += TICK_DURATION;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > TICK_DURATION * 2 {
            // Too far behind: resync instead of spiraling into catch-up.
            next_frame_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use bodytd_core::commands::PlayerCommand;
    use bodytd_core::enums::GamePhase;

    #[test]
    fn test_tick_duration_constant() {
        // 60 Hz = 16.666ms per frame.
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }

    #[test]
    fn test_loop_runs_and_shuts_down_cleanly() {
        let state = AppState::new();
        state.start(GameConfig::default());
        assert!(state.is_running());
        assert!(state.send(PlayerCommand::StartGame));

        // Give the loop a few frames to process the command.
        let deadline = Instant::now() + Duration::from_secs(2);
        let mut playing = false;
        while Instant::now() < deadline {
            if let Some(snapshot) = state.snapshot() {
                if snapshot.phase == GamePhase::Playing {
                    playing = true;
                    break;
                }
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        assert!(playing, "loop never published a Playing snapshot");

        // stop() joins the thread; sends after shutdown fail.
        state.stop();
        assert!(!state.is_running());
        assert!(!state.send(PlayerCommand::SkipWaveBreak));
    }
}
