//! Circular arrangement of group members
//!
//! Members sit in evenly spaced slots around the requested center, each nudged
//! by a small random angle so the circle does not look machine-made.

use std::f32::consts::{PI, TAU};

use glam::Vec2;
use rand::Rng;

use super::group::GroupKind;
use super::human::Human;
use crate::consts::ARRANGEMENT_JITTER;
use crate::{centroid, normalize_angle, polar_to_cartesian};

/// Uniform draw from [-ARRANGEMENT_JITTER, ARRANGEMENT_JITTER]
fn jitter<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.random_range(-ARRANGEMENT_JITTER..=ARRANGEMENT_JITTER)
}

/// Angle of slot `i` out of `n`
#[inline]
pub fn slot_angle(i: usize, n: usize) -> f32 {
    i as f32 * TAU / n as f32
}

/// Place `members` around `center` and return the centroid they end up at
///
/// Stationary members face the center; moving members all share one random
/// heading. The returned centroid drifts from `center` by the jitter.
pub fn arrange<R: Rng + ?Sized>(
    members: &mut [Human],
    center: Vec2,
    radius: f32,
    kind: GroupKind,
    rng: &mut R,
) -> Vec2 {
    let n = members.len();
    let shared_heading = match kind {
        GroupKind::Moving => Some(normalize_angle(rng.random_range(-PI..PI))),
        GroupKind::Stationary => None,
    };

    for (i, human) in members.iter_mut().enumerate() {
        let theta = slot_angle(i, n);
        human.pos = center + polar_to_cartesian(radius, theta + jitter(rng));

        human.orientation = match shared_heading {
            Some(heading) => heading,
            None => normalize_angle(theta - PI + jitter(rng)),
        };
    }

    centroid(members.iter().map(|h| h.pos))
}
