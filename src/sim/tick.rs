//! Fixed timestep simulation tick
//!
//! Hands out goals, asks the locomotion policy for each moving group's
//! velocity, and advances every group.

use glam::Vec2;

use super::group::{GroupKind, InteractionGroup, check_timestep};
use super::state::Scene;
use crate::error::GroupResult;

/// Source of the commanded group velocity
pub trait LocomotionPolicy {
    /// Velocity the group should walk at this tick (None without a goal)
    fn commanded_velocity(&self, group: &InteractionGroup) -> Option<Vec2>;
}

/// Walk the group center straight at the goal
#[derive(Debug, Clone, Copy)]
pub struct StraightLine {
    pub max_speed: f32,
}

impl LocomotionPolicy for StraightLine {
    fn commanded_velocity(&self, group: &InteractionGroup) -> Option<Vec2> {
        let goal = group.goal()?;
        // Slows down over the last meter instead of overshooting
        Some((goal - group.center()).clamp_length_max(self.max_speed))
    }
}

/// Advance the scene by one fixed timestep
pub fn tick<P: LocomotionPolicy + ?Sized>(
    scene: &mut Scene,
    policy: &P,
    dt: f32,
) -> GroupResult<()> {
    check_timestep(dt)?;
    scene.time_ticks += 1;
    scene.clock += f64::from(dt);

    for i in 0..scene.groups.len() {
        let needs_goal = {
            let group = &scene.groups[i];
            group.kind() == GroupKind::Moving
                && (group.goal().is_none() || group.has_reached_goal(Some(group.radius())))
        };
        if needs_goal {
            let goal = scene.random_goal();
            let group = &mut scene.groups[i];
            group.set_goal(goal.x, goal.y);
            log::info!(
                "Group {} heading to ({:.2}, {:.2})",
                group.id,
                goal.x,
                goal.y
            );
        }

        let group = &mut scene.groups[i];
        let command = match group.kind() {
            GroupKind::Moving => policy.commanded_velocity(group),
            GroupKind::Stationary => None,
        };
        group.update(dt, command)?;
    }

    // Ensure deterministic ordering
    scene.normalize_order();
    Ok(())
}
