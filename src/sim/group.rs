//! Human-human interaction groups
//!
//! A group is a ring of humans that either stands and talks (stationary) or
//! walks together toward a shared goal (moving). Moving groups watch their own
//! heading changes: a formation whose members keep swinging around is treated
//! as lost, waits for a new goal, and eventually stops.

use std::str::FromStr;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::arrangement::arrange;
use super::collision::Collidable;
use super::entity::SceneEntity;
use super::human::{Human, Policy};
use crate::consts::MIN_GROUP_MEMBERS;
use crate::error::{GroupError, GroupResult};
use crate::settings::GroupConfig;
use crate::{angle_difference, centroid};

/// Whether members hold their spot or walk together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupKind {
    Stationary,
    Moving,
}

impl GroupKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupKind::Stationary => "stationary",
            GroupKind::Moving => "moving",
        }
    }
}

impl FromStr for GroupKind {
    type Err = GroupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stationary" => Ok(GroupKind::Stationary),
            "moving" => Ok(GroupKind::Moving),
            other => Err(GroupError::invalid(format!(
                "group kind should be \"moving\" or \"stationary\", got \"{other}\""
            ))),
        }
    }
}

/// Behavioral state of a group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupPhase {
    /// Idle; counts as having reached its goal
    Stopped,
    /// Too many abrupt turns, holding still until a new goal arrives
    WaitingForGoal,
    /// Walking normally
    Active,
}

/// Where and how a group is spawned
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupLayout {
    /// Requested center; the real center drifts by the arrangement jitter
    pub center: Vec2,
    pub kind: GroupKind,
    pub members: usize,
    /// Radius of the arrangement circle
    pub radius: f32,
}

/// Reject timesteps that would corrupt the simulated clock
pub fn check_timestep(dt: f32) -> GroupResult<()> {
    if !dt.is_finite() || dt < 0.0 {
        return Err(GroupError::invalid(format!(
            "timestep must be finite and non-negative, got {dt}"
        )));
    }
    Ok(())
}

/// A ring of interacting humans
#[derive(Debug, Clone)]
pub struct InteractionGroup {
    pub id: u32,
    kind: GroupKind,
    radius: f32,
    /// Arrangement order; fixed after construction
    members: Vec<Human>,
    goal: Option<Vec2>,

    stopped: bool,
    waiting_for_goal: bool,
    consecutive_anomalies: u32,
    /// Simulated time of the last tick that moved the members
    last_normal_motion_time: f64,
    /// Simulated time, the sum of every dt fed to `update`
    ///
    /// Kept in f64 so the wait timeout fires after the same number of ticks
    /// however long the group has been running.
    clock: f64,

    noise_variance: f32,
    noise: Normal<f32>,
    can_disperse: bool,
    max_orientation_change: f32,
    max_consecutive_anomalies: u32,
    max_waiting_time: f32,

    rng: Pcg32,
}

impl InteractionGroup {
    /// Spawn a group and arrange its members around `layout.center`
    pub fn new(
        id: u32,
        layout: GroupLayout,
        config: &GroupConfig,
        seed: u64,
    ) -> GroupResult<Self> {
        if layout.members < MIN_GROUP_MEMBERS {
            return Err(GroupError::invalid(format!(
                "need at least {MIN_GROUP_MEMBERS} humans to interact, got {}",
                layout.members
            )));
        }
        if !layout.radius.is_finite() || layout.radius < 0.0 {
            return Err(GroupError::invalid(format!(
                "group radius must be finite and non-negative, got {}",
                layout.radius
            )));
        }
        config.validate()?;

        let noise = Normal::new(0.0, config.noise_variance.sqrt())
            .map_err(|e| GroupError::invalid(format!("velocity noise: {e}")))?;
        let mut rng = Pcg32::seed_from_u64(seed);

        // Moving members share one walking speed
        let shared_speed = rng.random_range(0.0..=config.max_human_speed);
        let speed = match layout.kind {
            GroupKind::Stationary => 0.0,
            GroupKind::Moving => shared_speed,
        };

        let mut members: Vec<Human> = (0..layout.members)
            .map(|i| {
                let policy = Policy::ALL[rng.random_range(0..Policy::ALL.len())];
                Human::new(i as u32, speed, config.human_width, config.goal_radius, policy)
            })
            .collect();

        let center = arrange(&mut members, layout.center, layout.radius, layout.kind, &mut rng);
        log::debug!(
            "Group {} spawned: {} {} members at ({:.2}, {:.2})",
            id,
            members.len(),
            layout.kind.as_str(),
            center.x,
            center.y
        );

        Ok(Self {
            id,
            kind: layout.kind,
            radius: layout.radius,
            members,
            goal: None,
            stopped: true,
            waiting_for_goal: true,
            consecutive_anomalies: 0,
            last_normal_motion_time: 0.0,
            clock: 0.0,
            noise_variance: config.noise_variance,
            noise,
            can_disperse: config.can_disperse,
            max_orientation_change: config.max_orientation_change,
            max_consecutive_anomalies: config.max_consecutive_anomalies,
            max_waiting_time: config.max_waiting_time,
            rng,
        })
    }

    pub fn kind(&self) -> GroupKind {
        self.kind
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn members(&self) -> &[Human] {
        &self.members
    }

    pub fn goal(&self) -> Option<Vec2> {
        self.goal
    }

    pub fn noise_variance(&self) -> f32 {
        self.noise_variance
    }

    pub fn can_disperse(&self) -> bool {
        self.can_disperse
    }

    pub fn consecutive_anomalies(&self) -> u32 {
        self.consecutive_anomalies
    }

    pub fn clock(&self) -> f64 {
        self.clock
    }

    /// Mean of member positions
    pub fn center(&self) -> Vec2 {
        centroid(self.members.iter().map(|h| h.pos))
    }

    pub fn phase(&self) -> GroupPhase {
        if self.stopped {
            GroupPhase::Stopped
        } else if self.waiting_for_goal {
            GroupPhase::WaitingForGoal
        } else {
            GroupPhase::Active
        }
    }

    /// Closed polygon through the members in arrangement order
    pub fn outline(&self) -> Vec<Vec2> {
        let mut points: Vec<Vec2> = self.members.iter().map(|h| h.pos).collect();
        if let Some(&first) = points.first() {
            points.push(first);
        }
        points
    }

    /// Hand the whole group (and every member) a new goal
    pub fn set_goal(&mut self, x: f32, y: f32) {
        self.waiting_for_goal = false;
        self.goal = Some(Vec2::new(x, y));
        for human in &mut self.members {
            human.set_goal(x, y);
        }
    }

    /// A stopped group owes no more motion, so it counts as arrived
    pub fn has_reached_goal(&self, offset: Option<f32>) -> bool {
        self.stopped || self.members.iter().all(|h| h.has_reached_goal(offset))
    }

    /// Advance the group by one tick
    ///
    /// Stationary groups ignore the call. Moving groups need the commanded
    /// group velocity; each member gets it with its own Gaussian noise.
    pub fn update(&mut self, dt: f32, velocity: Option<Vec2>) -> GroupResult<()> {
        check_timestep(dt)?;
        if self.kind == GroupKind::Stationary {
            return Ok(());
        }
        let velocity = velocity.ok_or(GroupError::MissingCommand { group_id: self.id })?;

        self.clock += f64::from(dt);

        let mut commands = Vec::with_capacity(self.members.len());
        let mut total_turn = 0.0;
        for human in &self.members {
            let noisy = velocity
                + Vec2::new(
                    self.noise.sample(&mut self.rng),
                    self.noise.sample(&mut self.rng),
                );
            let heading = noisy.y.atan2(noisy.x);
            total_turn += angle_difference(heading, human.orientation).abs();
            commands.push((noisy.length(), heading));
        }
        let mean_turn = total_turn / self.members.len() as f32;

        // Calm ticks never forgive earlier anomalies; only stopping resets the count
        if !self.waiting_for_goal && mean_turn > self.max_orientation_change {
            self.consecutive_anomalies += 1;
            log::trace!(
                "Group {} anomalous turn {:.3} rad ({} in a row)",
                self.id,
                mean_turn,
                self.consecutive_anomalies
            );
        }

        if self.consecutive_anomalies > self.max_consecutive_anomalies {
            if !self.waiting_for_goal {
                log::debug!("Group {} lost its formation, waiting for a new goal", self.id);
            }
            self.waiting_for_goal = true;

            if self.clock - self.last_normal_motion_time > f64::from(self.max_waiting_time) {
                if !self.stopped {
                    log::debug!("Group {} stopped after waiting {:.1}s", self.id, self.max_waiting_time);
                }
                self.stopped = true;
                self.consecutive_anomalies = 0;
            }
        } else {
            self.last_normal_motion_time = self.clock;
            self.waiting_for_goal = false;
            self.stopped = false;
            for (human, (speed, heading)) in self.members.iter_mut().zip(commands) {
                human.speed = speed;
                human.set_orientation(heading);
                human.advance(dt);
            }
        }

        Ok(())
    }

    /// Check whether any member touches `other`
    pub fn collides(&self, other: &SceneEntity<'_>) -> bool {
        match *other {
            SceneEntity::Group(group) => self
                .members
                .iter()
                .any(|a| group.members.iter().any(|b| a.collides_with(b))),
            SceneEntity::HumanLaptop(pairing) => {
                self.members.iter().any(|a| a.collides_with(&pairing.human))
            }
            SceneEntity::Atomic(entity) => self.members.iter().any(|a| a.collides_with(entity)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::sim::collision::{Collidable, Footprint};
    use crate::sim::entity::{HumanLaptop, Obstacle, ObstacleKind};
    use proptest::prelude::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn layout(kind: GroupKind, members: usize, radius: f32) -> GroupLayout {
        GroupLayout {
            center: Vec2::ZERO,
            kind,
            members,
            radius,
        }
    }

    fn moving(seed: u64) -> InteractionGroup {
        InteractionGroup::new(1, layout(GroupKind::Moving, 3, 1.0), &GroupConfig::default(), seed)
            .unwrap()
    }

    /// Drive a goal-holding group into six anomalous ticks of dt = 1
    fn churn(group: &mut InteractionGroup) {
        group.set_goal(10.0, 0.0);
        // First tick follows the current heading, so it is calm
        let heading = group.members()[0].orientation;
        group.update(1.0, Some(Vec2::from_angle(heading))).unwrap();
        assert_eq!(group.phase(), GroupPhase::Active);
        assert_eq!(group.consecutive_anomalies(), 0);

        // Every following tick is a quarter turn
        for i in 1..=6 {
            let turn = Vec2::from_angle(heading + i as f32 * PI / 2.0);
            group.update(1.0, Some(turn)).unwrap();
        }
    }

    #[test]
    fn test_too_few_members_rejected() {
        let err = InteractionGroup::new(
            1,
            layout(GroupKind::Moving, 1, 1.0),
            &GroupConfig::default(),
            0,
        )
        .unwrap_err();
        assert!(matches!(err, GroupError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!("moving".parse::<GroupKind>().unwrap(), GroupKind::Moving);
        assert_eq!("Stationary".parse::<GroupKind>().unwrap(), GroupKind::Stationary);
        assert!(matches!(
            "dancing".parse::<GroupKind>(),
            Err(GroupError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_initial_state() {
        let group = moving(1);
        assert_eq!(group.phase(), GroupPhase::Stopped);
        assert_eq!(group.goal(), None);
        assert_eq!(group.consecutive_anomalies(), 0);
        let speed = group.members()[0].speed;
        assert!(group.members().iter().all(|h| h.speed == speed));
    }

    #[test]
    fn test_stationary_update_is_noop() {
        let mut group = InteractionGroup::new(
            2,
            layout(GroupKind::Stationary, 4, 1.0),
            &GroupConfig::default(),
            5,
        )
        .unwrap();
        let before: Vec<(Vec2, f32)> = group.members().iter().map(|h| (h.pos, h.orientation)).collect();

        group.update(0.1, None).unwrap();
        group.update(0.1, Some(Vec2::new(3.0, -2.0))).unwrap();

        let after: Vec<(Vec2, f32)> = group.members().iter().map(|h| (h.pos, h.orientation)).collect();
        assert_eq!(before, after);
        assert!(group.members().iter().all(|h| h.speed == 0.0));
    }

    #[test]
    fn test_stationary_pair_faces_each_other() {
        let group = InteractionGroup::new(
            3,
            layout(GroupKind::Stationary, 2, 1.0),
            &GroupConfig::default(),
            17,
        )
        .unwrap();
        let [a, b] = group.members() else {
            panic!("expected two members");
        };
        let apart = angle_difference(a.orientation, b.orientation).abs();
        // Each orientation carries one jitter of at most π/14
        assert!((apart - PI).abs() <= PI / 7.0 + 1e-4);
    }

    #[test]
    fn test_moving_update_requires_command() {
        let mut group = moving(2);
        let err = group.update(0.1, None).unwrap_err();
        assert!(matches!(err, GroupError::MissingCommand { group_id: 1 }));
    }

    #[test]
    fn test_constant_command_aligns_members() {
        let mut group = moving(3);
        let velocity = Vec2::new(0.6, 0.8);
        let start: Vec<Vec2> = group.members().iter().map(|h| h.pos).collect();

        for _ in 0..5 {
            group.update(0.5, Some(velocity)).unwrap();
        }

        let expected = velocity.y.atan2(velocity.x);
        for (h, p0) in group.members().iter().zip(start) {
            assert!((h.orientation - expected).abs() < 1e-5);
            assert!((h.speed - 1.0).abs() < 1e-5);
            assert!((h.pos - (p0 + velocity * 2.5)).length() < 1e-4);
        }
        assert_eq!(group.phase(), GroupPhase::Active);
    }

    #[test]
    fn test_center_follows_members() {
        let mut group = moving(4);
        let before = group.center();
        group.update(1.0, Some(Vec2::new(1.0, 0.0))).unwrap();
        assert!((group.center() - (before + Vec2::new(1.0, 0.0))).length() < 1e-4);
    }

    #[test]
    fn test_anomalies_lead_to_waiting_then_stopped() {
        let mut group = moving(5);
        churn(&mut group);

        // Five anomalies are tolerated, the sixth makes the group wait
        assert_eq!(group.consecutive_anomalies(), 6);
        assert_eq!(group.phase(), GroupPhase::WaitingForGoal);

        // Last normal motion was at t = 6; waiting holds until more than 5s pass
        let frozen: Vec<Vec2> = group.members().iter().map(|h| h.pos).collect();
        for _ in 0..4 {
            group.update(1.0, Some(Vec2::X)).unwrap();
            assert_eq!(group.phase(), GroupPhase::WaitingForGoal);
        }
        let still: Vec<Vec2> = group.members().iter().map(|h| h.pos).collect();
        assert_eq!(frozen, still);

        group.update(1.0, Some(Vec2::X)).unwrap();
        assert_eq!(group.phase(), GroupPhase::Stopped);
        assert_eq!(group.consecutive_anomalies(), 0);
    }

    /// Ticks of SIM_DT between the last moving tick and the stop, after a calm run
    fn ticks_waited_after(calm_ticks: u32) -> u32 {
        let mut group = moving(15);
        group.set_goal(10.0, 0.0);
        let heading = group.members()[0].orientation;
        for _ in 0..=calm_ticks {
            group.update(SIM_DT, Some(Vec2::from_angle(heading))).unwrap();
        }
        assert_eq!(group.phase(), GroupPhase::Active);

        let mut waited = 0;
        for turn in 1..1000 {
            let command = Vec2::from_angle(heading + turn as f32 * FRAC_PI_2);
            group.update(SIM_DT, Some(command)).unwrap();
            match group.phase() {
                GroupPhase::Active => waited = 0,
                GroupPhase::WaitingForGoal => waited += 1,
                GroupPhase::Stopped => return waited + 1,
            }
        }
        panic!("group never stopped");
    }

    #[test]
    fn test_wait_timeout_independent_of_run_length() {
        // 50 ticks of 0.1f32 are just over 5s
        for calm_ticks in [0, 100, 36_000, 100_000] {
            assert_eq!(ticks_waited_after(calm_ticks), 50, "after {calm_ticks} calm ticks");
        }
    }

    #[test]
    fn test_clock_does_not_drift() {
        let mut group = moving(16);
        let heading = group.members()[0].orientation;
        for _ in 0..100_000 {
            group.update(SIM_DT, Some(Vec2::from_angle(heading))).unwrap();
        }
        assert!((group.clock() - 100_000.0 * f64::from(SIM_DT)).abs() < 1e-6);
    }

    #[test]
    fn test_invalid_timestep_rejected() {
        let mut group = moving(17);
        let before: Vec<Vec2> = group.members().iter().map(|h| h.pos).collect();
        for dt in [f32::NAN, f32::INFINITY, -0.1] {
            let err = group.update(dt, Some(Vec2::X)).unwrap_err();
            assert!(matches!(err, GroupError::InvalidConfiguration { .. }));
        }
        let after: Vec<Vec2> = group.members().iter().map(|h| h.pos).collect();
        assert_eq!(before, after);
        assert_eq!(group.clock(), 0.0);

        // A zero step is a valid pause
        group.update(0.0, Some(Vec2::X)).unwrap();
        assert_eq!(group.phase(), GroupPhase::Active);
    }

    #[test]
    fn test_waiting_group_does_not_count_anomalies() {
        let mut group = moving(6);
        churn(&mut group);
        assert_eq!(group.consecutive_anomalies(), 6);

        group.update(1.0, Some(Vec2::NEG_Y)).unwrap();
        group.update(1.0, Some(Vec2::Y)).unwrap();
        assert_eq!(group.consecutive_anomalies(), 6);
    }

    #[test]
    fn test_calm_ticks_do_not_forgive_anomalies() {
        let mut group = moving(7);
        group.set_goal(10.0, 0.0);
        let heading = group.members()[0].orientation;
        group.update(1.0, Some(Vec2::from_angle(heading))).unwrap();
        group.update(1.0, Some(Vec2::from_angle(heading + PI / 2.0))).unwrap();
        assert_eq!(group.consecutive_anomalies(), 1);

        for _ in 0..10 {
            group.update(1.0, Some(Vec2::from_angle(heading + PI / 2.0))).unwrap();
        }
        assert_eq!(group.consecutive_anomalies(), 1);
        assert_eq!(group.phase(), GroupPhase::Active);
    }

    #[test]
    fn test_stopped_group_resumes_on_next_tick() {
        let mut group = moving(8);
        churn(&mut group);
        for _ in 0..5 {
            group.update(1.0, Some(Vec2::X)).unwrap();
        }
        assert_eq!(group.phase(), GroupPhase::Stopped);

        group.set_goal(-5.0, 0.0);
        group.update(1.0, Some(Vec2::NEG_X)).unwrap();
        assert_eq!(group.phase(), GroupPhase::Active);
    }

    #[test]
    fn test_set_goal_propagates() {
        let mut group = moving(9);
        group.set_goal(4.0, -3.0);
        assert_eq!(group.goal(), Some(Vec2::new(4.0, -3.0)));
        assert!(group.members().iter().all(|h| h.goal == Some(Vec2::new(4.0, -3.0))));
        // Still stopped until the next tick
        assert_eq!(group.phase(), GroupPhase::Stopped);
    }

    #[test]
    fn test_stopped_group_has_reached_goal() {
        let mut group = moving(10);
        group.set_goal(100.0, 100.0);
        assert!(group.has_reached_goal(None));
    }

    #[test]
    fn test_active_group_needs_every_member() {
        let mut group = moving(11);
        group.set_goal(0.0, 0.0);
        group.update(0.1, Some(Vec2::ZERO)).unwrap();
        assert_eq!(group.phase(), GroupPhase::Active);

        // Members sit on a circle of radius 1 around the goal
        assert!(!group.has_reached_goal(Some(0.0)));
        assert!(group.has_reached_goal(Some(2.0)));
    }

    #[test]
    fn test_outline_is_closed() {
        let group = moving(12);
        let outline = group.outline();
        assert_eq!(outline.len(), group.members().len() + 1);
        assert_eq!(outline.first(), outline.last());
    }

    #[test]
    fn test_same_seed_same_motion() {
        let config = GroupConfig {
            noise_variance: 0.05,
            ..Default::default()
        };
        let spawn = || {
            InteractionGroup::new(1, layout(GroupKind::Moving, 4, 1.5), &config, 2024).unwrap()
        };
        let mut a = spawn();
        let mut b = spawn();
        for step in 0..20 {
            let v = Vec2::new(1.0, (step as f32 * 0.3).sin());
            a.update(0.1, Some(v)).unwrap();
            b.update(0.1, Some(v)).unwrap();
        }
        for (ha, hb) in a.members().iter().zip(b.members()) {
            assert_eq!(ha.pos, hb.pos);
            assert_eq!(ha.orientation, hb.orientation);
        }
    }

    #[test]
    fn test_noise_spreads_headings() {
        let config = GroupConfig {
            noise_variance: 0.25,
            ..Default::default()
        };
        let mut group =
            InteractionGroup::new(1, layout(GroupKind::Moving, 5, 1.0), &config, 77).unwrap();
        group.update(0.1, Some(Vec2::X)).unwrap();
        let first = group.members()[0].orientation;
        assert!(group.members().iter().any(|h| h.orientation != first));
    }

    #[test]
    fn test_groups_collide_member_wise() {
        let config = GroupConfig::default();
        let a = InteractionGroup::new(1, layout(GroupKind::Stationary, 2, 1.0), &config, 1).unwrap();
        // Same slots, so each member lands within two jitters of its twin
        let b = InteractionGroup::new(2, layout(GroupKind::Stationary, 2, 1.0), &config, 2).unwrap();
        let far = InteractionGroup::new(
            3,
            GroupLayout {
                center: Vec2::new(50.0, 0.0),
                ..layout(GroupKind::Stationary, 2, 1.0)
            },
            &config,
            3,
        )
        .unwrap();

        assert!(a.collides(&SceneEntity::Group(&b)));
        assert!(b.collides(&SceneEntity::Group(&a)));
        assert!(!a.collides(&SceneEntity::Group(&far)));
    }

    #[test]
    fn test_human_laptop_only_human_counts() {
        let group = moving(13);
        let mut human = Human::new(0, 0.0, 0.72, None, Policy::Sfm);
        human.pos = Vec2::new(40.0, 40.0);
        // Laptop sits right on a member, the human is far away
        let laptop = Obstacle::new(0, ObstacleKind::Laptop, Footprint::rect(group.members()[0].pos, 0.4, 0.3, 0.0));
        let pairing = HumanLaptop::new(1, human.clone(), laptop.clone());
        assert!(laptop.collides_with(&group.members()[0]));
        assert!(!group.collides(&SceneEntity::HumanLaptop(&pairing)));

        human.pos = group.members()[1].pos;
        let pairing = HumanLaptop::new(1, human, laptop);
        assert!(group.collides(&SceneEntity::HumanLaptop(&pairing)));
    }

    #[test]
    fn test_atomic_entity_collision() {
        let group = moving(14);
        let plant = Obstacle::new(0, ObstacleKind::Plant, Footprint::circle(group.members()[2].pos, 0.2));
        assert!(group.collides(&SceneEntity::Atomic(&plant)));

        let wall = Obstacle::new(1, ObstacleKind::Wall, Footprint::rect(Vec2::new(0.0, 30.0), 20.0, 0.2, 0.0));
        assert!(!group.collides(&SceneEntity::Atomic(&wall)));
    }

    proptest! {
        #[test]
        fn prop_center_is_member_mean(
            seed in any::<u64>(),
            members in 2usize..10,
            radius in 0.1f32..5.0,
            cx in -20.0f32..20.0,
            cy in -20.0f32..20.0,
            vx in -2.0f32..2.0,
            vy in -2.0f32..2.0,
        ) {
            let config = GroupConfig { noise_variance: 0.1, ..Default::default() };
            let layout = GroupLayout { center: Vec2::new(cx, cy), kind: GroupKind::Moving, members, radius };
            let mut group = InteractionGroup::new(1, layout, &config, seed).unwrap();

            let n = group.members().len() as f32;
            let mean = group.members().iter().fold(Vec2::ZERO, |acc, h| acc + h.pos) / n;
            prop_assert!((group.center() - mean).length() < 1e-3);
            // Jitter only moves members along the circle, so the center stays inside it
            prop_assert!(group.center().distance(Vec2::new(cx, cy)) <= radius + 1e-3);

            group.update(0.1, Some(Vec2::new(vx, vy))).unwrap();
            let mean = group.members().iter().fold(Vec2::ZERO, |acc, h| acc + h.pos) / n;
            prop_assert!((group.center() - mean).length() < 1e-3);
        }
    }
}
