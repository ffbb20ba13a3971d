//! Collision detection between scene footprints
//!
//! Every scene entity is reduced to a circle or an oriented rectangle. Touching
//! shapes do not collide; overlap has to be strictly positive.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Planar shape occupied by an entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Footprint {
    Circle {
        center: Vec2,
        radius: f32,
    },
    /// Rectangle rotated by `orientation`; `half_extents.x` runs along the heading
    Rect {
        center: Vec2,
        half_extents: Vec2,
        orientation: f32,
    },
}

impl Footprint {
    pub fn circle(center: Vec2, radius: f32) -> Self {
        Footprint::Circle { center, radius }
    }

    /// Rectangle of `length` along the heading and `width` across it
    pub fn rect(center: Vec2, length: f32, width: f32, orientation: f32) -> Self {
        Footprint::Rect {
            center,
            half_extents: Vec2::new(length / 2.0, width / 2.0),
            orientation,
        }
    }

    pub fn center(&self) -> Vec2 {
        match *self {
            Footprint::Circle { center, .. } | Footprint::Rect { center, .. } => center,
        }
    }

    /// Check whether two footprints overlap
    pub fn overlaps(&self, other: &Footprint) -> bool {
        match (*self, *other) {
            (
                Footprint::Circle { center: a, radius: ra },
                Footprint::Circle { center: b, radius: rb },
            ) => circle_circle_overlap(a, ra, b, rb),
            (
                Footprint::Circle { center, radius },
                Footprint::Rect {
                    center: rc,
                    half_extents,
                    orientation,
                },
            )
            | (
                Footprint::Rect {
                    center: rc,
                    half_extents,
                    orientation,
                },
                Footprint::Circle { center, radius },
            ) => circle_rect_overlap(center, radius, rc, half_extents, orientation),
            (
                Footprint::Rect {
                    center: a,
                    half_extents: ha,
                    orientation: oa,
                },
                Footprint::Rect {
                    center: b,
                    half_extents: hb,
                    orientation: ob,
                },
            ) => rect_rect_overlap(a, ha, oa, b, hb, ob),
        }
    }
}

/// Anything that occupies space in the scene
pub trait Collidable {
    fn footprint(&self) -> Footprint;

    fn collides_with(&self, other: &dyn Collidable) -> bool {
        self.footprint().overlaps(&other.footprint())
    }
}

impl Collidable for Footprint {
    fn footprint(&self) -> Footprint {
        *self
    }
}

/// Check whether two discs overlap
pub fn circle_circle_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    a.distance(b) < ra + rb
}

/// Check whether a disc overlaps an oriented rectangle
///
/// The disc center is moved into the rectangle's local frame, where the
/// rectangle is an axis-aligned box and the closest point is a clamp.
pub fn circle_rect_overlap(
    circle: Vec2,
    radius: f32,
    rect_center: Vec2,
    half_extents: Vec2,
    orientation: f32,
) -> bool {
    let local = Vec2::from_angle(-orientation).rotate(circle - rect_center);
    let closest = local.clamp(-half_extents, half_extents);
    local.distance(closest) < radius
}

/// Separating axis test between two oriented rectangles
pub fn rect_rect_overlap(
    a: Vec2,
    half_a: Vec2,
    orientation_a: f32,
    b: Vec2,
    half_b: Vec2,
    orientation_b: f32,
) -> bool {
    let axes_a = (Vec2::from_angle(orientation_a), Vec2::from_angle(orientation_a).perp());
    let axes_b = (Vec2::from_angle(orientation_b), Vec2::from_angle(orientation_b).perp());
    let offset = b - a;

    // Projected half-size of a rectangle onto an axis
    let radius_on = |axis: Vec2, half: Vec2, (u, v): (Vec2, Vec2)| {
        half.x * u.dot(axis).abs() + half.y * v.dot(axis).abs()
    };

    [axes_a.0, axes_a.1, axes_b.0, axes_b.1].into_iter().all(|axis| {
        let separation = offset.dot(axis).abs();
        separation < radius_on(axis, half_a, axes_a) + radius_on(axis, half_b, axes_b)
    })
}
