//! Interaction Groups - clusters of humans for a social navigation simulator
//!
//! Core modules:
//! - `sim`: Deterministic simulation (arrangement, group motion, collisions, scene loop)
//! - `settings`: Data-driven group configuration
//! - `error`: Error types shared by the crate

pub mod error;
pub mod settings;
pub mod sim;

pub use error::{GroupError, GroupResult};
pub use settings::GroupConfig;

use glam::Vec2;

/// Simulation configuration constants
pub mod consts {
    use std::f32::consts::PI;

    /// Fixed simulation timestep used by the demo loop (10 Hz, seconds)
    pub const SIM_DT: f32 = 0.1;

    /// Fewest members an interaction group may have
    pub const MIN_GROUP_MEMBERS: usize = 2;

    /// Half-width of the uniform angular jitter applied during arrangement
    pub const ARRANGEMENT_JITTER: f32 = PI / 14.0;

    /// Mean per-member heading change (radians) above which a tick is anomalous
    pub const MAX_ORIENTATION_CHANGE: f32 = PI / 8.0;
    /// Anomalous ticks tolerated before the group waits for a new goal
    pub const MAX_CONSECUTIVE_ANOMALIES: u32 = 5;
    /// Time a waiting group holds still before it gives up (seconds)
    pub const MAX_WAITING_TIME: f32 = 5.0;

    /// Human defaults
    pub const HUMAN_WIDTH: f32 = 0.72;
    pub const MAX_HUMAN_SPEED: f32 = 1.5;
    pub const HUMAN_GOAL_RADIUS: f32 = 0.25;

    /// Scene bounds (goals are sampled inside [-extent, extent]²)
    pub const SCENE_HALF_EXTENT: f32 = 8.0;
}

/// Normalize angle to (-π, π]
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    while angle > PI {
        angle -= TAU;
    }
    while angle <= -PI {
        angle += TAU;
    }
    angle
}

/// Smallest signed rotation taking `from` onto `to`, in (-π, π]
#[inline]
pub fn angle_difference(to: f32, from: f32) -> f32 {
    let delta = to - from;
    delta.sin().atan2(delta.cos())
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Arithmetic mean of a set of points (origin when empty)
pub fn centroid<I>(points: I) -> Vec2
where
    I: IntoIterator<Item = Vec2>,
{
    let (sum, count) = points
        .into_iter()
        .fold((Vec2::ZERO, 0usize), |(sum, n), p| (sum + p, n + 1));
    if count == 0 {
        Vec2::ZERO
    } else {
        sum / count as f32
    }
}
