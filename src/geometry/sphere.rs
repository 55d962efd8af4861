use crate::math::Vector3;

use super::Interval;

/// A solid sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub origin: Vector3,
    pub radius: f32,
}

impl Sphere {
    #[must_use]
    pub const fn new(origin: Vector3, radius: f32) -> Self {
        Self { origin, radius }
    }

    /// True when `point` is inside or on the surface.
    #[must_use]
    pub fn contains(&self, point: Vector3) -> bool {
        (point - self.origin).magnitude_sq() <= self.radius * self.radius
    }

    /// Point on the surface nearest to `point`.
    ///
    /// For `point == origin` every surface point is equally close; the
    /// one along +Z is returned.
    #[must_use]
    pub fn closest_point(&self, point: Vector3) -> Vector3 {
        let dir = (point - self.origin).normalized();
        let dir = if dir.magnitude_sq() == 0.0 { Vector3::Z } else { dir };
        self.origin + dir * self.radius
    }

    #[must_use]
    pub fn interval(&self, axis: Vector3) -> Interval {
        let center = axis.dot(self.origin);
        let r = self.radius * axis.magnitude();
        Interval::new(center - r, center + r)
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self::new(Vector3::ZERO, 1.0)
    }
}
