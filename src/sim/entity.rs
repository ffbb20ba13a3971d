//! Scene entities a group can be tested against

use serde::{Deserialize, Serialize};

use super::collision::{Collidable, Footprint};
use super::group::InteractionGroup;
use super::human::Human;

/// Static furniture and walls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    Wall,
    Table,
    Plant,
    Laptop,
    Chair,
}

/// An atomic static entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub kind: ObstacleKind,
    pub footprint: Footprint,
}

impl Obstacle {
    pub fn new(id: u32, kind: ObstacleKind, footprint: Footprint) -> Self {
        Self {
            id,
            kind,
            footprint,
        }
    }
}

impl Collidable for Obstacle {
    fn footprint(&self) -> Footprint {
        self.footprint
    }
}

/// A human working at a laptop
///
/// Only the human matters to passing groups; the laptop sits on a table the
/// group is already avoiding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HumanLaptop {
    pub id: u32,
    pub human: Human,
    pub laptop: Obstacle,
}

impl HumanLaptop {
    pub fn new(id: u32, human: Human, laptop: Obstacle) -> Self {
        Self { id, human, laptop }
    }
}

/// Discriminator for scene entities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Group,
    HumanLaptop,
    Atomic,
}

/// Borrowed view of anything a group may run into
#[derive(Clone, Copy)]
pub enum SceneEntity<'a> {
    Group(&'a InteractionGroup),
    HumanLaptop(&'a HumanLaptop),
    Atomic(&'a dyn Collidable),
}

impl SceneEntity<'_> {
    pub fn kind(&self) -> EntityKind {
        match self {
            SceneEntity::Group(_) => EntityKind::Group,
            SceneEntity::HumanLaptop(_) => EntityKind::HumanLaptop,
            SceneEntity::Atomic(_) => EntityKind::Atomic,
        }
    }
}

impl<'a> From<&'a InteractionGroup> for SceneEntity<'a> {
    fn from(group: &'a InteractionGroup) -> Self {
        SceneEntity::Group(group)
    }
}

impl<'a> From<&'a HumanLaptop> for SceneEntity<'a> {
    fn from(pairing: &'a HumanLaptop) -> Self {
        SceneEntity::HumanLaptop(pairing)
    }
}

impl<'a> From<&'a Obstacle> for SceneEntity<'a> {
    fn from(obstacle: &'a Obstacle) -> Self {
        SceneEntity::Atomic(obstacle)
    }
}

impl<'a> From<&'a Human> for SceneEntity<'a> {
    fn from(human: &'a Human) -> Self {
        SceneEntity::Atomic(human)
    }
}
