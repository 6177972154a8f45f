//! Fundamental geometric and simulation types.
//!
//! Positions are 2D screen-space points in pixels (glam `Vec2`). The path
//! helpers here are stateless queries over an ordered waypoint sequence;
//! enemy movement and map placement checks are built on top of them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::MIN_SEGMENT_LENGTH;

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current frame number (increments by 1 each accepted frame).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f32,
}

impl SimTime {
    /// Advance by one frame of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }

    /// Elapsed simulation time in milliseconds (attack cooldowns are
    /// expressed in ms).
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_secs as f64 * 1000.0
    }
}

/// Length of the segment `a -> b`, floored at [`MIN_SEGMENT_LENGTH`] so that
/// progress math over degenerate (duplicated) waypoints never divides by zero.
pub fn segment_length(a: Vec2, b: Vec2) -> f32 {
    a.distance(b).max(MIN_SEGMENT_LENGTH)
}

/// Point at fraction `t` (0..1) along the segment `a -> b`.
pub fn point_along(a: Vec2, b: Vec2, t: f32) -> Vec2 {
    a + (b - a) * t.clamp(0.0, 1.0)
}

/// Shortest distance from `p` to the segment `a -> b`.
pub fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq < MIN_SEGMENT_LENGTH * MIN_SEGMENT_LENGTH {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

/// Shortest distance from `p` to a waypoint polyline.
/// Returns `f32::MAX` for paths with fewer than two points.
pub fn distance_to_path(p: Vec2, waypoints: &[Vec2]) -> f32 {
    waypoints
        .windows(2)
        .map(|seg| distance_to_segment(p, seg[0], seg[1]))
        .fold(f32::MAX, f32::min)
}
