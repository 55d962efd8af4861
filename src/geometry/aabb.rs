use crate::math::Vector3;

use super::Interval;

/// An axis-aligned box given by its center and half extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub origin: Vector3,
    pub extents: Vector3,
}

impl Aabb {
    #[must_use]
    pub const fn new(origin: Vector3, extents: Vector3) -> Self {
        Self { origin, extents }
    }

    /// Box spanning two corners, in any order.
    #[must_use]
    pub fn from_min_max(a: Vector3, b: Vector3) -> Self {
        let min = a.min(b);
        let max = a.max(b);
        Self::new((min + max) * 0.5, (max - min) * 0.5)
    }

    #[must_use]
    pub fn min(&self) -> Vector3 {
        let p1 = self.origin + self.extents;
        let p2 = self.origin - self.extents;
        p1.min(p2)
    }

    #[must_use]
    pub fn max(&self) -> Vector3 {
        let p1 = self.origin + self.extents;
        let p2 = self.origin - self.extents;
        p1.max(p2)
    }

    #[must_use]
    pub fn contains(&self, point: Vector3) -> bool {
        let min = self.min();
        let max = self.max();
        (0..3).all(|i| point[i] >= min[i] && point[i] <= max[i])
    }

    /// Clamps `point` into the box. Interior points are returned unchanged.
    #[must_use]
    pub fn closest_point(&self, point: Vector3) -> Vector3 {
        point.max(self.min()).min(self.max())
    }

    /// The 8 corners.
    #[must_use]
    pub fn vertices(&self) -> [Vector3; 8] {
        let min = self.min();
        let max = self.max();
        [
            Vector3::new(min.x, max.y, max.z),
            Vector3::new(min.x, max.y, min.z),
            Vector3::new(min.x, min.y, max.z),
            Vector3::new(min.x, min.y, min.z),
            Vector3::new(max.x, max.y, max.z),
            Vector3::new(max.x, max.y, min.z),
            Vector3::new(max.x, min.y, max.z),
            Vector3::new(max.x, min.y, min.z),
        ]
    }

    #[must_use]
    pub fn interval(&self, axis: Vector3) -> Interval {
        Interval::of_points(&self.vertices(), axis)
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::new(Vector3::ZERO, Vector3::ONE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_max_roundtrip() {
        let b = Aabb::from_min_max(Vector3::new(2.0, 2.0, 2.0), Vector3::new(-2.0, 0.0, 4.0));
        assert_eq!(b.origin, Vector3::new(0.0, 1.0, 3.0));
        assert_eq!(b.extents, Vector3::new(2.0, 1.0, 1.0));
        assert_eq!(b.min(), Vector3::new(-2.0, 0.0, 2.0));
        assert_eq!(b.max(), Vector3::new(2.0, 2.0, 4.0));
    }

    #[test]
    fn closest_point_clamps() {
        let b = Aabb::default();
        assert_eq!(b.closest_point(Vector3::new(5.0, 0.5, -9.0)), Vector3::new(1.0, 0.5, -1.0));
        let inside = Vector3::new(0.2, -0.3, 0.4);
        assert_eq!(b.closest_point(inside), inside);
    }

    #[test]
    fn contains_boundary() {
        let b = Aabb::default();
        assert!(b.contains(Vector3::new(1.0, 1.0, 1.0)));
        assert!(!b.contains(Vector3::new(1.01, 0.0, 0.0)));
    }

    #[test]
    fn negative_extents_are_tolerated() {
        let b = Aabb::new(Vector3::ZERO, Vector3::new(-1.0, 1.0, 1.0));
        assert_eq!(b.min(), Vector3::splat(-1.0));
    }
}
