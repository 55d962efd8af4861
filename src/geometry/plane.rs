use crate::math::{near_zero, Vector3};

use super::Triangle;

/// An infinite plane in Hessian normal form: `dot(normal, p) = distance`.
///
/// `normal` is expected to be unit length; [`Plane::new`] does not
/// normalize it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub normal: Vector3,
    pub distance: f32,
}

impl Plane {
    #[must_use]
    pub const fn new(normal: Vector3, distance: f32) -> Self {
        Self { normal, distance }
    }

    /// Plane through `point` with the given normal (normalized here).
    #[must_use]
    pub fn from_point_normal(point: Vector3, normal: Vector3) -> Self {
        let normal = normal.normalized();
        Self::new(normal, normal.dot(point))
    }

    /// Plane of a triangle, normal by the right-hand rule over `a, b, c`.
    ///
    /// A degenerate triangle yields a zero normal.
    #[must_use]
    pub fn from_triangle(triangle: &Triangle) -> Self {
        let normal = triangle.normal();
        Self::new(normal, normal.dot(triangle.a))
    }

    /// Signed distance-like value: `dot(normal, point) - distance`.
    ///
    /// Positive on the normal side, zero on the plane.
    #[must_use]
    pub fn plane_equation(&self, point: Vector3) -> f32 {
        self.normal.dot(point) - self.distance
    }

    /// Orthogonal projection of `point` onto the plane.
    #[must_use]
    pub fn closest_point(&self, point: Vector3) -> Vector3 {
        point - self.normal * self.plane_equation(point)
    }

    #[must_use]
    pub fn contains(&self, point: Vector3) -> bool {
        near_zero(self.plane_equation(point))
    }
}

impl Default for Plane {
    fn default() -> Self {
        Self::new(Vector3::Y, 0.0)
    }
}
