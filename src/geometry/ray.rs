use crate::math::{near_zero, Vector3};

/// A half-line `origin + t * direction`, `t >= 0`.
///
/// The direction is normalized on construction, so `t` is a distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    origin: Vector3,
    direction: Vector3,
}

impl Ray {
    /// Creates a ray. A zero direction produces a ray that hits nothing
    /// but its own origin.
    #[must_use]
    pub fn new(origin: Vector3, direction: Vector3) -> Self {
        Self {
            origin,
            direction: direction.normalized(),
        }
    }

    /// Ray from `from` toward `to`.
    #[must_use]
    pub fn from_points(from: Vector3, to: Vector3) -> Self {
        Self::new(from, to - from)
    }

    #[must_use]
    pub fn origin(&self) -> Vector3 {
        self.origin
    }

    /// Unit direction (zero for a degenerate ray).
    #[must_use]
    pub fn direction(&self) -> Vector3 {
        self.direction
    }

    #[must_use]
    pub fn point_at(&self, t: f32) -> Vector3 {
        self.origin + self.direction * t
    }

    /// Closest point on the ray to `point`.
    #[must_use]
    pub fn closest_point(&self, point: Vector3) -> Vector3 {
        let t = (point - self.origin).dot(self.direction).max(0.0);
        self.point_at(t)
    }

    #[must_use]
    pub fn contains(&self, point: Vector3) -> bool {
        near_zero((self.closest_point(point) - point).magnitude_sq())
    }
}

impl Default for Ray {
    fn default() -> Self {
        Self::new(Vector3::ZERO, Vector3::Z)
    }
}
