use crate::math::scalar::clamp;
use crate::math::{Matrix3, Vector3};

use super::{Aabb, Interval};

/// An oriented box: center, half extents, and a local-to-world rotation.
///
/// The world-space box axes are the columns of `orientation`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obb {
    pub origin: Vector3,
    pub extents: Vector3,
    pub orientation: Matrix3,
}

impl Obb {
    #[must_use]
    pub const fn new(origin: Vector3, extents: Vector3, orientation: Matrix3) -> Self {
        Self {
            origin,
            extents,
            orientation,
        }
    }

    /// Unrotated box.
    #[must_use]
    pub const fn axis_aligned(origin: Vector3, extents: Vector3) -> Self {
        Self::new(origin, extents, Matrix3::IDENTITY)
    }

    /// World-space unit axes (X, Y, Z of the box).
    #[must_use]
    pub const fn axes(&self) -> [Vector3; 3] {
        self.orientation.columns()
    }

    /// Extents with the sign dropped; a negative component describes the
    /// same slab as its absolute value.
    #[must_use]
    pub fn half_extents(&self) -> Vector3 {
        self.extents.abs()
    }

    #[must_use]
    pub fn contains(&self, point: Vector3) -> bool {
        let d = point - self.origin;
        let extents = self.half_extents();
        self.axes()
            .iter()
            .enumerate()
            .all(|(i, axis)| d.dot(*axis).abs() <= extents[i])
    }

    /// Closest point inside the box, found by clamping in the box frame.
    #[must_use]
    pub fn closest_point(&self, point: Vector3) -> Vector3 {
        let d = point - self.origin;
        let extents = self.half_extents();
        let mut result = self.origin;
        for (i, axis) in self.axes().iter().enumerate() {
            let extent = extents[i];
            let dist = clamp(d.dot(*axis), -extent, extent);
            result += *axis * dist;
        }
        result
    }

    /// The 8 corners.
    #[must_use]
    pub fn vertices(&self) -> [Vector3; 8] {
        let [u0, u1, u2] = self.axes();
        let extents = self.half_extents();
        let e0 = u0 * extents.x;
        let e1 = u1 * extents.y;
        let e2 = u2 * extents.z;
        let c = self.origin;
        [
            c + e0 + e1 + e2,
            c - e0 + e1 + e2,
            c + e0 - e1 + e2,
            c + e0 + e1 - e2,
            c - e0 - e1 - e2,
            c + e0 - e1 - e2,
            c - e0 + e1 - e2,
            c - e0 - e1 + e2,
        ]
    }

    #[must_use]
    pub fn interval(&self, axis: Vector3) -> Interval {
        Interval::of_points(&self.vertices(), axis)
    }
}

impl From<Aabb> for Obb {
    fn from(aabb: Aabb) -> Self {
        Self::axis_aligned(aabb.origin, aabb.extents.abs())
    }
}

impl Default for Obb {
    fn default() -> Self {
        Self::axis_aligned(Vector3::ZERO, Vector3::ONE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn rotated() -> Obb {
        Obb::new(
            Vector3::ZERO,
            Vector3::new(2.0, 1.0, 1.0),
            Matrix3::rotation_z(90.0),
        )
    }

    #[test]
    fn axes_are_rotated_columns() {
        let [x, y, _] = rotated().axes();
        assert_relative_eq!(x, Vector3::Y, epsilon = 1e-6);
        assert_relative_eq!(y, -Vector3::X, epsilon = 1e-6);
    }

    #[test]
    fn contains_follows_orientation() {
        let b = rotated();
        // Long axis now points along world Y.
        assert!(b.contains(Vector3::new(0.0, 1.9, 0.0)));
        assert!(!b.contains(Vector3::new(1.9, 0.0, 0.0)));
    }

    #[test]
    fn closest_point_clamps_in_local_frame() {
        let b = rotated();
        assert_relative_eq!(
            b.closest_point(Vector3::new(5.0, 5.0, 0.0)),
            Vector3::new(1.0, 2.0, 0.0),
            epsilon = 1e-5
        );
        let inside = Vector3::new(0.5, -1.0, 0.2);
        assert_relative_eq!(b.closest_point(inside), inside, epsilon = 1e-6);
    }

    #[test]
    fn vertices_lie_on_box() {
        let b = rotated();
        for v in b.vertices() {
            assert_relative_eq!(b.closest_point(v), v, epsilon = 1e-5);
        }
    }

    #[test]
    fn from_aabb_keeps_geometry() {
        let a = Aabb::new(Vector3::X, Vector3::new(1.0, 2.0, 3.0));
        let o = Obb::from(a);
        assert_eq!(o.closest_point(Vector3::splat(10.0)), a.closest_point(Vector3::splat(10.0)));
    }

    #[test]
    fn negative_extents_describe_the_same_box() {
        let flipped = Obb::axis_aligned(Vector3::ZERO, Vector3::new(1.0, -1.0, 1.0));
        let plain = Obb::axis_aligned(Vector3::ZERO, Vector3::ONE);
        assert!(flipped.contains(Vector3::ZERO));
        assert!(flipped.contains(Vector3::new(0.5, -0.9, 0.5)));
        let far = Vector3::new(3.0, -4.0, 0.5);
        assert_eq!(flipped.closest_point(far), plain.closest_point(far));
        for (a, b) in flipped.vertices().iter().zip(plain.vertices().iter()) {
            assert_eq!(a, b);
        }
    }
}
