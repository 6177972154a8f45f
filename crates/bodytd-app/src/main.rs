//! Headless demo session.
//!
//! Starts the simulation loop, drives it with randomized tower placements
//! the way a frontend would, and logs the outcome. Useful for watching a
//! full session without a renderer attached.

use std::time::{Duration, Instant};

use rand::Rng;

use bodytd_app::state::AppState;
use bodytd_core::commands::PlayerCommand;
use bodytd_core::config::GameConfig;
use bodytd_core::enums::TowerKind;

/// Give up on a session that somehow never terminates.
const DEMO_TIMEOUT: Duration = Duration::from_secs(300);

/// Stop buying towers beyond this many; the map gets crowded anyway.
const DEMO_TOWER_CAP: usize = 12;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GameConfig::default();
    let map = config.map;
    let state = AppState::new();
    state.start(config.clone());
    state.send(PlayerCommand::StartGame);
    log::info!("demo session started");

    let mut rng = rand::thread_rng();
    let started = Instant::now();

    let final_snapshot = loop {
        std::thread::sleep(Duration::from_millis(200));

        let Some(snapshot) = state.snapshot() else {
            continue;
        };
        if snapshot.phase.is_over() || started.elapsed() > DEMO_TIMEOUT {
            break snapshot;
        }

        // Buy a tower whenever we can afford one: pick a kind we have money
        // for and tap a random spot. Invalid spots are simply rejected by
        // the engine, so we just try again next poll.
        if snapshot.towers.len() < DEMO_TOWER_CAP {
            let kind = TowerKind::ALL[rng.gen_range(0..TowerKind::ALL.len())];
            if snapshot.money >= config.towers.spec(kind).cost {
                let x = rng.gen_range(0.1..0.9) * map.width;
                let y = rng.gen_range(0.1..0.9) * map.height;
                state.send(PlayerCommand::SelectTowerType { kind: Some(kind) });
                state.send(PlayerCommand::GameAreaTap { x, y });
            }
        }
    };

    state.stop();
    log::info!(
        "demo finished: {:?} at wave {} with score {} (health {}, money {}, {} towers)",
        final_snapshot.phase,
        final_snapshot.current_wave,
        final_snapshot.score,
        final_snapshot.health,
        final_snapshot.money,
        final_snapshot.towers.len(),
    );
}
