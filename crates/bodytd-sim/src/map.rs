//! Map collaborator — the waypoint path and tower-placement registry.
//!
//! The engine only ever asks three things of the map: the waypoint
//! sequence, whether a point is a valid tower location, and to record a
//! placement. Path rendering is the frontend's business.

use glam::Vec2;

use bodytd_core::config::MapConfig;
use bodytd_core::constants::{MIN_TOWER_DISTANCE, PATH_CLEARANCE, WAYPOINT_FRACTIONS};
use bodytd_core::types::distance_to_path;

#[derive(Debug, Clone)]
pub struct GameMap {
    width: f32,
    height: f32,
    waypoints: Vec<Vec2>,
    tower_placements: Vec<Vec2>,
}

impl GameMap {
    /// Build the single scrolling path, scaled to the configured playfield.
    pub fn new(config: &MapConfig) -> Self {
        let waypoints = WAYPOINT_FRACTIONS
            .iter()
            .map(|&(fx, fy)| Vec2::new(fx * config.width, fy * config.height))
            .collect();

        Self {
            width: config.width,
            height: config.height,
            waypoints,
            tower_placements: Vec::new(),
        }
    }

    /// Ordered waypoint sequence enemies interpolate along.
    pub fn way_points(&self) -> &[Vec2] {
        &self.waypoints
    }

    /// Where enemies enter the path.
    pub fn spawn_point(&self) -> Vec2 {
        self.waypoints.first().copied().unwrap_or(Vec2::ZERO)
    }

    /// A valid tower location is inside the placement margin, clear of the
    /// path, and not crowding another tower.
    pub fn is_valid_tower_location(&self, x: f32, y: f32) -> bool {
        let point = Vec2::new(x, y);

        let in_bounds = x >= MIN_TOWER_DISTANCE
            && x <= self.width - MIN_TOWER_DISTANCE
            && y >= MIN_TOWER_DISTANCE
            && y <= self.height - MIN_TOWER_DISTANCE;
        if !in_bounds {
            return false;
        }

        if distance_to_path(point, &self.waypoints) < PATH_CLEARANCE {
            return false;
        }

        !self
            .tower_placements
            .iter()
            .any(|placed| placed.distance(point) < MIN_TOWER_DISTANCE)
    }

    /// Record a tower placement so later placements keep their distance.
    pub fn add_tower_placement(&mut self, point: Vec2) {
        self.tower_placements.push(point);
    }

    /// Whether a tap landed inside the playfield at all.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= 0.0 && x <= self.width && y >= 0.0 && y <= self.height
    }

    /// Forget all placements (session reset).
    pub fn clear_placements(&mut self) {
        self.tower_placements.clear();
    }
}
