//! Scene state
//!
//! Owns every group and static entity in the simulation plus the scene RNG
//! that seeds them.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{HumanLaptop, Obstacle, SceneEntity};
use super::group::{GroupLayout, InteractionGroup};
use crate::error::GroupResult;
use crate::settings::GroupConfig;

/// A pair of entities found overlapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Contact {
    Groups { a: u32, b: u32 },
    GroupObstacle { group: u32, obstacle: u32 },
    GroupPairing { group: u32, pairing: u32 },
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct Scene {
    /// Run seed for reproducibility
    pub seed: u64,
    pub config: GroupConfig,
    /// Simulated seconds elapsed
    pub clock: f64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Interaction groups (sorted by id)
    pub groups: Vec<InteractionGroup>,
    pub obstacles: Vec<Obstacle>,
    pub pairings: Vec<HumanLaptop>,
    rng: Pcg32,
    /// Next entity ID
    next_id: u32,
}

impl Scene {
    pub fn new(config: GroupConfig, seed: u64) -> GroupResult<Self> {
        config.validate()?;
        Ok(Self {
            seed,
            config,
            clock: 0.0,
            time_ticks: 0,
            groups: Vec::new(),
            obstacles: Vec::new(),
            pairings: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        })
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn a group with a seed drawn from the scene stream
    pub fn spawn_group(&mut self, layout: GroupLayout) -> GroupResult<u32> {
        let seed = self.rng.random::<u64>();
        let id = self.next_entity_id();
        let group = InteractionGroup::new(id, layout, &self.config, seed)?;
        self.groups.push(group);
        Ok(id)
    }

    pub fn add_obstacle(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    pub fn add_pairing(&mut self, pairing: HumanLaptop) {
        self.pairings.push(pairing);
    }

    pub fn group(&self, id: u32) -> Option<&InteractionGroup> {
        self.groups.iter().find(|g| g.id == id)
    }

    /// Uniform point inside the scene bounds
    pub fn random_goal(&mut self) -> Vec2 {
        let extent = self.config.scene_half_extent;
        Vec2::new(
            self.rng.random_range(-extent..=extent),
            self.rng.random_range(-extent..=extent),
        )
    }

    /// Every overlapping group/group, group/obstacle and group/pairing pair
    pub fn collisions(&self) -> Vec<Contact> {
        let mut contacts = Vec::new();

        for (i, group) in self.groups.iter().enumerate() {
            for other in &self.groups[i + 1..] {
                if group.collides(&SceneEntity::Group(other)) {
                    contacts.push(Contact::Groups {
                        a: group.id,
                        b: other.id,
                    });
                }
            }
            for obstacle in &self.obstacles {
                if group.collides(&SceneEntity::Atomic(obstacle)) {
                    contacts.push(Contact::GroupObstacle {
                        group: group.id,
                        obstacle: obstacle.id,
                    });
                }
            }
            for pairing in &self.pairings {
                if group.collides(&SceneEntity::HumanLaptop(pairing)) {
                    contacts.push(Contact::GroupPairing {
                        group: group.id,
                        pairing: pairing.id,
                    });
                }
            }
        }

        contacts
    }

    /// Ensure entities are sorted by ID for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.groups.sort_by_key(|g| g.id);
        self.obstacles.sort_by_key(|o| o.id);
        self.pairings.sort_by_key(|p| p.id);
    }
}
