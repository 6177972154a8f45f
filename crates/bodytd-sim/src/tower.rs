//! Tower actor — stationary, targets the nearest enemy in range and fires
//! projectiles on a cooldown.

use glam::Vec2;

use bodytd_core::config::TowerSpec;
use bodytd_core::enums::TowerKind;

use crate::enemy::Enemy;
use crate::projectile::Projectile;

#[derive(Debug, Clone)]
pub struct Tower {
    pub kind: TowerKind,
    /// Fixed at placement; towers never move.
    pub position: Vec2,
    pub level: u32,
    pub selected: bool,
    /// Sim-clock reading of the last shot; `None` before the first shot, so
    /// a freshly placed tower fires as soon as a target exists.
    last_attack_ms: Option<f64>,
    pub(crate) projectiles: Vec<Projectile>,
}

impl Tower {
    pub fn new(kind: TowerKind, position: Vec2) -> Self {
        Self {
            kind,
            position,
            level: 1,
            selected: false,
            last_attack_ms: None,
            projectiles: Vec::new(),
        }
    }

    /// Advance one frame: fly owned projectiles (applying damage to any
    /// enemy hit), drop resolved ones, then fire at the nearest enemy in
    /// range once the cooldown has elapsed.
    ///
    /// Returns the roster indices of enemies hit this frame, for the engine
    /// to score.
    pub fn update(
        &mut self,
        now_ms: f64,
        dt: f32,
        enemies: &mut [Enemy],
        spec: &TowerSpec,
    ) -> Vec<usize> {
        let mut hits = Vec::new();

        for projectile in &mut self.projectiles {
            if let Some(index) = projectile.update(dt, enemies) {
                enemies[index].take_damage(projectile.damage);
                hits.push(index);
            }
        }
        self.projectiles.retain(Projectile::is_active);

        let cooldown_ms = 1000.0 / spec.attack_speed as f64;
        let ready = self
            .last_attack_ms
            .map_or(true, |last| now_ms - last >= cooldown_ms);
        if ready {
            if let Some(target) = self.find_nearest_enemy(enemies, spec.range) {
                self.projectiles.push(Projectile::new(
                    self.position,
                    target,
                    spec.damage,
                    spec.projectile_speed,
                ));
                self.last_attack_ms = Some(now_ms);
            }
        }

        hits
    }

    /// Nearest live enemy within `range`; ties go to the first found in
    /// iteration order. Returns the target's current position, captured for
    /// the projectile.
    fn find_nearest_enemy(&self, enemies: &[Enemy], range: f32) -> Option<Vec2> {
        let mut nearest: Option<Vec2> = None;
        let mut min_distance = f32::MAX;

        for enemy in enemies {
            if !enemy.is_alive() {
                continue;
            }
            let distance = self.position.distance(enemy.position);
            if distance <= range && distance < min_distance {
                min_distance = distance;
                nearest = Some(enemy.position);
            }
        }

        nearest
    }

    pub fn can_upgrade(&self, spec: &TowerSpec) -> bool {
        self.level < spec.max_level
    }

    /// Cost of the next upgrade; grows linearly with the current level.
    pub fn upgrade_cost(&self, spec: &TowerSpec) -> i32 {
        spec.upgrade_cost * self.level as i32
    }

    /// Raise the level by one. The engine charges the cost before calling
    /// this; the tower itself never touches money.
    pub fn upgrade(&mut self, spec: &TowerSpec) {
        if self.can_upgrade(spec) {
            self.level += 1;
        }
    }

    pub fn select(&mut self) {
        self.selected = true;
    }

    pub fn deselect(&mut self) {
        self.selected = false;
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }
}
