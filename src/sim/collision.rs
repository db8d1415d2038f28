//! Collision and bounds predicates
//!
//! Plain Euclidean-distance circle checks. A single-pass linear scan over
//! the entity lists is adequate at this entity count, so there is no
//! spatial partitioning.

use glam::Vec2;

use crate::{field_bound_radius, field_center};

/// True when two points are closer than `threshold`
#[inline]
pub fn within(a: Vec2, b: Vec2, threshold: f32) -> bool {
    a.distance_squared(b) < threshold * threshold
}

/// True when a position has drifted past the circular field bound
#[inline]
pub fn outside_field(pos: Vec2) -> bool {
    pos.distance(field_center()) > field_bound_radius()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn within_is_strict() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(80.0, 0.0);
        // Exactly at the threshold is a miss
        assert!(!within(a, b, 80.0));
        assert!(within(a, b, 80.1));
    }

    #[test]
    fn within_is_symmetric() {
        let a = Vec2::new(100.0, 200.0);
        let b = Vec2::new(130.0, 240.0);
        assert_eq!(within(a, b, 55.0), within(b, a, 55.0));
    }

    #[test]
    fn field_bound() {
        assert!(!outside_field(field_center()));
        assert!(!outside_field(Vec2::new(0.0, 0.0)));
        // Corner of the field sits exactly on the bound; step past it
        assert!(outside_field(Vec2::new(-1.0, -1.0)));
        assert!(outside_field(Vec2::new(
            crate::consts::FIELD_WIDTH + 10.0,
            crate::consts::FIELD_HEIGHT + 10.0,
        )));
    }
}
