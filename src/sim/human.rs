//! Individual humans
//!
//! A human is a disc that walks straight along its orientation. Locomotion
//! policies decide its velocity elsewhere; the human only integrates it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Collidable, Footprint};
use crate::normalize_angle;

/// Locomotion policy a human is tagged with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Policy {
    /// Optimal reciprocal collision avoidance
    Orca,
    /// Social force model
    Sfm,
}

impl Policy {
    pub const ALL: [Policy; 2] = [Policy::Orca, Policy::Sfm];

    pub fn as_str(&self) -> &'static str {
        match self {
            Policy::Orca => "orca",
            Policy::Sfm => "sfm",
        }
    }
}

/// A single pedestrian
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Human {
    pub id: u32,
    pub pos: Vec2,
    /// Heading (radians, (-π, π])
    pub orientation: f32,
    pub speed: f32,
    /// Footprint diameter
    pub width: f32,
    pub goal: Option<Vec2>,
    pub goal_radius: Option<f32>,
    pub policy: Policy,
}

impl Human {
    pub fn new(id: u32, speed: f32, width: f32, goal_radius: Option<f32>, policy: Policy) -> Self {
        Self {
            id,
            pos: Vec2::ZERO,
            orientation: 0.0,
            speed,
            width,
            goal: None,
            goal_radius,
            policy,
        }
    }

    pub fn radius(&self) -> f32 {
        self.width / 2.0
    }

    pub fn velocity(&self) -> Vec2 {
        Vec2::from_angle(self.orientation) * self.speed
    }

    pub fn set_goal(&mut self, x: f32, y: f32) {
        self.goal = Some(Vec2::new(x, y));
    }

    pub fn set_orientation(&mut self, orientation: f32) {
        self.orientation = normalize_angle(orientation);
    }

    /// Move along the current heading for `dt`
    pub fn advance(&mut self, dt: f32) {
        self.pos += self.velocity() * dt;
    }

    /// Within `goal_radius + offset` of the goal; false until a goal is set
    pub fn has_reached_goal(&self, offset: Option<f32>) -> bool {
        match self.goal {
            Some(goal) => {
                let reach = self.goal_radius.unwrap_or(0.0) + offset.unwrap_or(0.0);
                self.pos.distance(goal) < reach
            }
            None => false,
        }
    }
}

impl Collidable for Human {
    fn footprint(&self) -> Footprint {
        Footprint::circle(self.pos, self.radius())
    }
}
