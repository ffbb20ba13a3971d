//! Group configuration
//!
//! Loaded from JSON; any field left out falls back to its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{GroupError, GroupResult};

/// Tunables shared by every interaction group in a scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupConfig {
    // === Members ===
    /// Diameter of a member's footprint
    pub human_width: f32,
    /// Upper bound of the shared speed drawn for moving groups
    pub max_human_speed: f32,
    /// Arrival radius handed to every member (None = exact arrival)
    pub goal_radius: Option<f32>,

    // === Motion ===
    /// Variance of the per-axis Gaussian noise added to the commanded velocity
    pub noise_variance: f32,
    /// Reserved for splitting groups apart; no dispersal is performed yet
    pub can_disperse: bool,

    // === Anomaly detection ===
    /// Mean heading change (radians) that marks a tick as anomalous
    pub max_orientation_change: f32,
    /// Anomalous ticks tolerated before waiting for a new goal
    pub max_consecutive_anomalies: u32,
    /// Time spent waiting before the group stops (same unit as dt)
    pub max_waiting_time: f32,

    // === Scene ===
    /// Goals are drawn inside [-extent, extent] on both axes
    pub scene_half_extent: f32,
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            human_width: HUMAN_WIDTH,
            max_human_speed: MAX_HUMAN_SPEED,
            goal_radius: Some(HUMAN_GOAL_RADIUS),

            noise_variance: 0.0,
            can_disperse: true,

            max_orientation_change: MAX_ORIENTATION_CHANGE,
            max_consecutive_anomalies: MAX_CONSECUTIVE_ANOMALIES,
            max_waiting_time: MAX_WAITING_TIME,

            scene_half_extent: SCENE_HALF_EXTENT,
        }
    }
}

impl GroupConfig {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> GroupResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file
    pub fn load(path: impl AsRef<Path>) -> GroupResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded group config from {}", path.display());
        Ok(config)
    }

    pub fn to_json(&self) -> GroupResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values no group could be built or driven with
    pub fn validate(&self) -> GroupResult<()> {
        fn non_negative(name: &str, value: f32) -> GroupResult<()> {
            if value.is_finite() && value >= 0.0 {
                Ok(())
            } else {
                Err(GroupError::invalid(format!(
                    "{name} must be finite and non-negative, got {value}"
                )))
            }
        }

        non_negative("human_width", self.human_width)?;
        non_negative("max_human_speed", self.max_human_speed)?;
        if let Some(radius) = self.goal_radius {
            non_negative("goal_radius", radius)?;
        }
        non_negative("noise_variance", self.noise_variance)?;
        non_negative("max_orientation_change", self.max_orientation_change)?;
        non_negative("max_waiting_time", self.max_waiting_time)?;
        non_negative("scene_half_extent", self.scene_half_extent)?;
        Ok(())
    }
}
