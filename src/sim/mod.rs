//! Deterministic simulation module
//!
//! All group behavior lives here. This module must be pure and deterministic:
//! - Caller-supplied timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod arrangement;
pub mod collision;
pub mod entity;
pub mod group;
pub mod human;
pub mod state;
pub mod tick;

pub use arrangement::arrange;
pub use collision::{Collidable, Footprint};
pub use entity::{EntityKind, HumanLaptop, Obstacle, ObstacleKind, SceneEntity};
pub use group::{GroupKind, GroupLayout, GroupPhase, InteractionGroup};
pub use human::{Human, Policy};
pub use state::{Contact, Scene};
pub use tick::{LocomotionPolicy, StraightLine, tick};
