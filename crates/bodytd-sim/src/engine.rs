//! Game engine — the authoritative session state and per-frame update.
//!
//! `GameEngine` processes queued player commands at the frame boundary, runs
//! the frame phases in a fixed order (enemies, towers, wave logic), and
//! produces a `GameStateSnapshot`. It is an explicitly constructed session
//! object: the process entry point owns its lifecycle, and nothing here is
//! global.

use std::collections::VecDeque;
use std::panic::{self, AssertUnwindSafe};

use glam::Vec2;

use bodytd_core::commands::PlayerCommand;
use bodytd_core::config::GameConfig;
use bodytd_core::constants::{
    BONUS_HEALTH_REWARD_INITIAL, BONUS_HEALTH_REWARD_STEP, BONUS_MONEY_MULTIPLIER_STEP,
    MAX_FRAME_DT, TOWER_PICK_RADIUS, VICTORY_BONUS_BASE, VICTORY_BONUS_PER_HEALTH,
    WAVE_BONUS_BASE, WAVE_BONUS_PER_WAVE,
};
use bodytd_core::enums::{EnemyKind, GamePhase, TowerKind};
use bodytd_core::events::GameEvent;
use bodytd_core::state::GameStateSnapshot;
use bodytd_core::types::SimTime;

use crate::enemy::Enemy;
use crate::map::GameMap;
use crate::snapshot;
use crate::tower::Tower;
use crate::waves::WaveManager;

/// Best score and session counters. Kept in memory for the lifetime of the
/// process; only the best score is surfaced to the frontend.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayerStats {
    pub best_score: i32,
    pub games_played: u32,
    pub enemies_killed: u32,
    pub towers_built: u32,
}

impl PlayerStats {
    fn record_final_score(&mut self, score: i32) {
        if score > self.best_score {
            self.best_score = score;
        }
    }
}

/// The simulation engine. Owns all session state.
pub struct GameEngine {
    pub(crate) config: GameConfig,
    pub(crate) map: GameMap,
    pub(crate) waves: WaveManager,
    pub(crate) time: SimTime,
    pub(crate) phase: GamePhase,
    pub(crate) money: i32,
    pub(crate) health: i32,
    pub(crate) score: i32,
    pub(crate) bonus_money_multiplier: f32,
    pub(crate) bonus_health_reward: i32,
    pub(crate) wave_break_timer: f32,
    pub(crate) selected_tower_type: Option<TowerKind>,
    /// Index into `towers`; at most one tower is selected at a time.
    pub(crate) selected_tower: Option<usize>,
    pub(crate) towers: Vec<Tower>,
    pub(crate) enemies: Vec<Enemy>,
    pub(crate) stats: PlayerStats,
    command_queue: VecDeque<PlayerCommand>,
    pub(crate) events: Vec<GameEvent>,
    #[cfg(test)]
    pub(crate) force_panic: bool,
}

impl GameEngine {
    /// Create an engine in the NotStarted phase with the given config.
    pub fn new(config: GameConfig) -> Self {
        let map = GameMap::new(&config.map);
        Self {
            map,
            waves: WaveManager::new(),
            time: SimTime::default(),
            phase: GamePhase::NotStarted,
            money: config.economy.starting_money,
            health: config.economy.starting_health,
            score: 0,
            bonus_money_multiplier: 1.0,
            bonus_health_reward: BONUS_HEALTH_REWARD_INITIAL,
            wave_break_timer: 0.0,
            selected_tower_type: None,
            selected_tower: None,
            towers: Vec::new(),
            enemies: Vec::new(),
            stats: PlayerStats::default(),
            command_queue: VecDeque::new(),
            events: Vec::new(),
            config,
            #[cfg(test)]
            force_panic: false,
        }
    }

    /// Queue a player command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one frame and return the resulting
    /// snapshot.
    ///
    /// The frame phases are skipped when the session is not running or `dt`
    /// is degenerate (non-positive, or over a second — a stalled frame must
    /// not become a physics blow-up). A panic inside a frame phase is caught
    /// here and answered with a full session reset; there is no mid-game
    /// state worth salvaging, and the loop must not crash.
    pub fn update(&mut self, dt: f32) -> GameStateSnapshot {
        self.process_commands();

        if self.phase.is_running() && dt > 0.0 && dt <= MAX_FRAME_DT {
            let frame = AssertUnwindSafe(|| self.advance_frame(dt));
            if panic::catch_unwind(frame).is_err() {
                log::error!("frame update panicked; resetting session");
                self.reset_session();
            }
        }

        let events = std::mem::take(&mut self.events);
        snapshot::build_snapshot(self, events)
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn money(&self) -> i32 {
        self.money
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn current_wave(&self) -> u32 {
        self.waves.current_wave()
    }

    pub fn stats(&self) -> PlayerStats {
        self.stats
    }

    // --- Frame phases ---

    fn advance_frame(&mut self, dt: f32) {
        #[cfg(test)]
        if self.force_panic {
            panic!("injected frame failure");
        }

        self.time.advance(dt);
        self.update_enemies(dt);
        self.update_towers(dt);
        self.update_wave(dt);
    }

    /// Phase 1: advance and prune enemies. Deaths pay out, leaks damage the
    /// player.
    fn update_enemies(&mut self, dt: f32) {
        if self.enemies.is_empty() {
            return;
        }

        let mut removed = Vec::new();
        {
            let GameEngine { enemies, map, .. } = self;
            let waypoints = map.way_points();
            let mut i = 0;
            while i < enemies.len() {
                if enemies[i].is_dead() {
                    removed.push(enemies.remove(i));
                    continue;
                }
                if enemies[i].update(waypoints, dt) {
                    removed.push(enemies.remove(i));
                    continue;
                }
                i += 1;
            }
        }

        for enemy in removed {
            if enemy.has_reached_end() {
                self.handle_enemy_reached_end(&enemy);
            } else {
                self.handle_enemy_death(&enemy);
            }
        }
    }

    /// Phase 2: advance towers. Projectile hits apply damage inside the
    /// tower; the engine scores them here.
    fn update_towers(&mut self, dt: f32) {
        let now_ms = self.time.elapsed_ms();
        let mut hit_kinds = Vec::new();
        {
            let GameEngine {
                towers,
                enemies,
                config,
                ..
            } = self;
            for tower in towers.iter_mut() {
                let spec = config.towers.spec(tower.kind);
                for index in tower.update(now_ms, dt, enemies, spec) {
                    hit_kinds.push(enemies[index].kind);
                }
            }
        }

        for kind in hit_kinds {
            self.handle_enemy_hit(kind);
        }
    }

    /// Phase 3: wave logic. Ticks the break timer or pulls spawns, and
    /// detects wave completion.
    fn update_wave(&mut self, dt: f32) {
        match self.phase {
            GamePhase::WaveBreak => {
                self.wave_break_timer += dt;
                if self.wave_break_timer >= self.config.waves.wave_break_secs {
                    self.end_wave_break();
                }
            }
            GamePhase::Playing => {
                let spawned = self.waves.update(dt, self.config.waves.spawn_interval);
                self.enemies.extend(spawned);

                if self.waves.is_wave_complete() && self.enemies.is_empty() {
                    self.finish_wave();
                }
            }
            _ => {}
        }
    }

    // --- Wave transitions ---

    /// The active wave is fully spawned and cleared: enter the break, or end
    /// the game in victory at the wave cap.
    fn finish_wave(&mut self) {
        let wave = self.waves.current_wave();
        if wave >= self.config.waves.max_wave {
            self.victory();
            return;
        }

        self.phase = GamePhase::WaveBreak;
        self.wave_break_timer = 0.0;

        let bonus = ((WAVE_BONUS_BASE + wave as i32 * WAVE_BONUS_PER_WAVE) as f32
            * self.bonus_money_multiplier) as i32;
        self.add_money(bonus);
        self.events.push(GameEvent::WaveCompleted { wave, bonus });
        log::debug!("wave {wave} complete, bonus {bonus}");
    }

    /// The break timer elapsed (or was skipped): recover health, escalate
    /// the per-wave bonuses, start the next wave.
    fn end_wave_break(&mut self) {
        self.phase = GamePhase::Playing;
        self.health = (self.health + self.bonus_health_reward).min(self.config.economy.max_health);
        self.bonus_money_multiplier += BONUS_MONEY_MULTIPLIER_STEP;
        self.bonus_health_reward += BONUS_HEALTH_REWARD_STEP;

        if self.waves.start_next_wave(self.map.spawn_point(), &self.config) {
            let wave = self.waves.current_wave();
            self.events.push(GameEvent::WaveStarted { wave });
            log::info!("wave {wave} started");
        }
    }

    fn victory(&mut self) {
        let bonus = VICTORY_BONUS_BASE + self.health * VICTORY_BONUS_PER_HEALTH;
        self.score += bonus;
        self.phase = GamePhase::Victory;
        self.stats.record_final_score(self.score);
        self.events.push(GameEvent::Victory {
            score: self.score,
            bonus,
        });
        log::info!("victory with score {} (bonus {bonus})", self.score);
    }

    fn game_over(&mut self) {
        self.phase = GamePhase::GameOver;
        self.stats.record_final_score(self.score);
        self.events.push(GameEvent::GameOver { score: self.score });
        log::info!("game over with score {}", self.score);
    }

    // --- Enemy side effects ---

    fn handle_enemy_death(&mut self, enemy: &Enemy) {
        if self.phase.is_over() {
            return;
        }
        let base = self.config.enemies.spec(enemy.kind).reward;
        let reward = (base as f32 * self.bonus_money_multiplier) as i32;
        self.add_money(reward);
        self.stats.enemies_killed += 1;
        self.events.push(GameEvent::EnemyKilled {
            kind: enemy.kind,
            reward,
        });
        log::debug!("{:?} killed, +{reward} money", enemy.kind);
    }

    fn handle_enemy_reached_end(&mut self, enemy: &Enemy) {
        if self.phase.is_over() {
            return;
        }
        let damage = self.config.enemies.spec(enemy.kind).damage.max(0);
        self.health = (self.health - damage).max(0);
        self.events.push(GameEvent::EnemyReachedEnd {
            kind: enemy.kind,
            damage,
        });
        log::debug!("{:?} reached the end, -{damage} health", enemy.kind);
        if self.health == 0 {
            self.game_over();
        }
    }

    fn handle_enemy_hit(&mut self, kind: EnemyKind) {
        if self.phase.is_over() {
            return;
        }
        let score = self.config.enemies.spec(kind).hit_score;
        self.score += score;
        self.events.push(GameEvent::EnemyHit { kind, score });
    }

    // --- Commands ---

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => self.start_game(),
            PlayerCommand::SelectTowerType { kind } => {
                self.selected_tower_type = kind;
                self.deselect_tower();
            }
            PlayerCommand::GameAreaTap { x, y } => self.handle_game_area_tap(x, y),
            PlayerCommand::UpgradeSelectedTower => self.upgrade_selected_tower(),
            PlayerCommand::SkipWaveBreak => {
                if self.phase == GamePhase::WaveBreak {
                    self.end_wave_break();
                }
            }
        }
    }

    /// Start (or restart) a session: reset every mutable field, clear the
    /// rosters, and kick off wave 1.
    pub fn start_game(&mut self) {
        self.phase = GamePhase::Playing;
        self.time = SimTime::default();
        self.money = self.config.economy.starting_money;
        self.health = self.config.economy.starting_health;
        self.score = 0;
        self.bonus_money_multiplier = 1.0;
        self.bonus_health_reward = BONUS_HEALTH_REWARD_INITIAL;
        self.wave_break_timer = 0.0;
        self.selected_tower_type = None;
        self.selected_tower = None;
        self.towers.clear();
        self.enemies.clear();
        self.map.clear_placements();
        self.waves.reset();
        self.stats.games_played += 1;

        if self.waves.start_next_wave(self.map.spawn_point(), &self.config) {
            let wave = self.waves.current_wave();
            self.events.push(GameEvent::WaveStarted { wave });
        }
        log::info!(
            "session started: money {}, health {}",
            self.money,
            self.health
        );
    }

    /// Recovery path for a panicked frame: back to NotStarted with pristine
    /// session fields.
    fn reset_session(&mut self) {
        self.phase = GamePhase::NotStarted;
        self.time = SimTime::default();
        self.money = self.config.economy.starting_money;
        self.health = self.config.economy.starting_health;
        self.score = 0;
        self.bonus_money_multiplier = 1.0;
        self.bonus_health_reward = BONUS_HEALTH_REWARD_INITIAL;
        self.wave_break_timer = 0.0;
        self.selected_tower_type = None;
        self.selected_tower = None;
        self.towers.clear();
        self.enemies.clear();
        self.map.clear_placements();
        self.waves.reset();
        self.events.clear();
    }

    /// Tap inside the game area: place the pending tower kind, or select an
    /// existing tower.
    fn handle_game_area_tap(&mut self, x: f32, y: f32) {
        if !self.phase.is_running() {
            return;
        }
        if !self.map.contains(x, y) {
            return;
        }

        match self.selected_tower_type {
            Some(kind) => self.try_place_tower(kind, Vec2::new(x, y)),
            None => self.try_select_tower(Vec2::new(x, y)),
        }
    }

    /// Placement requires enough money and a valid location; a rejected
    /// placement changes nothing, not even the pending selection.
    fn try_place_tower(&mut self, kind: TowerKind, point: Vec2) {
        let cost = self.config.towers.spec(kind).cost;
        if self.money < cost || !self.map.is_valid_tower_location(point.x, point.y) {
            log::debug!("rejected {kind:?} placement at {point}");
            return;
        }

        self.money -= cost;
        self.towers.push(Tower::new(kind, point));
        self.map.add_tower_placement(point);
        self.selected_tower_type = None;
        self.stats.towers_built += 1;
        self.events.push(GameEvent::TowerPlaced { kind });
        log::debug!("placed {kind:?} at {point}, -{cost} money");
    }

    /// Select the first tower within the pick radius; tapping the selected
    /// tower again deselects it.
    fn try_select_tower(&mut self, point: Vec2) {
        let tapped = self
            .towers
            .iter()
            .position(|tower| tower.position.distance(point) < TOWER_PICK_RADIUS);

        let Some(index) = tapped else {
            return;
        };

        if self.selected_tower == Some(index) {
            self.towers[index].deselect();
            self.selected_tower = None;
        } else {
            self.deselect_tower();
            self.towers[index].select();
            self.selected_tower = Some(index);
        }
    }

    fn deselect_tower(&mut self) {
        if let Some(index) = self.selected_tower.take() {
            if let Some(tower) = self.towers.get_mut(index) {
                tower.deselect();
            }
        }
    }

    /// Upgrade the selected tower if it is below max level and affordable.
    fn upgrade_selected_tower(&mut self) {
        if self.phase.is_over() {
            return;
        }
        let Some(index) = self.selected_tower else {
            return;
        };
        let spec = *self.config.towers.spec(self.towers[index].kind);
        let tower = &mut self.towers[index];
        let cost = tower.upgrade_cost(&spec);
        if !tower.can_upgrade(&spec) || self.money < cost {
            return;
        }

        self.money -= cost;
        tower.upgrade(&spec);
        self.events.push(GameEvent::TowerUpgraded {
            kind: tower.kind,
            level: tower.level,
        });
        log::debug!("upgraded {:?} to level {}", tower.kind, tower.level);
    }

    // --- Economy ---

    /// Grant money, clamped to the configured cap. A no-op for non-positive
    /// amounts or once the game is over.
    pub fn add_money(&mut self, amount: i32) {
        if amount <= 0 || self.phase.is_over() {
            return;
        }
        self.money = (self.money + amount).clamp(0, self.config.economy.max_money);
    }
}
