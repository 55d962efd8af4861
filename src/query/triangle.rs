//! Triangle-vs-shape intersection predicates.

use crate::geometry::{Aabb, Obb, Plane, Sphere, Triangle};
use crate::math::{near_zero, Vector3};

use super::sat::{overlap_on_all, triangle_box_axes, triangle_triangle_axes};

/// Side test of all three vertices against the plane.
///
/// A triangle lying in the plane counts as intersecting; one with every
/// vertex strictly on the same side does not.
#[must_use]
pub fn intersects_plane(triangle: &Triangle, plane: &Plane) -> bool {
    let [a, b, c] = triangle.vertices().map(|v| plane.plane_equation(v));

    if near_zero(a) && near_zero(b) && near_zero(c) {
        return true;
    }
    if a > 0.0 && b > 0.0 && c > 0.0 {
        return false;
    }
    if a < 0.0 && b < 0.0 && c < 0.0 {
        return false;
    }
    true
}

#[must_use]
pub fn intersects_sphere(triangle: &Triangle, sphere: &Sphere) -> bool {
    let closest = triangle.closest_point(sphere.origin);
    (closest - sphere.origin).magnitude_sq() <= sphere.radius * sphere.radius
}

/// Separating-axis test over 13 axes.
#[must_use]
pub fn intersects_aabb(triangle: &Triangle, aabb: &Aabb) -> bool {
    let axes = triangle_box_axes(triangle, [Vector3::X, Vector3::Y, Vector3::Z]);
    overlap_on_all(triangle, aabb, axes)
}

#[must_use]
pub fn intersects_obb(triangle: &Triangle, obb: &Obb) -> bool {
    let axes = triangle_box_axes(triangle, obb.axes());
    overlap_on_all(triangle, obb, axes)
}

/// Separating-axis test over the two face normals and nine edge pairs,
/// using parallel-safe edge axes so coplanar triangles are handled.
#[must_use]
pub fn intersects_triangle(t1: &Triangle, t2: &Triangle) -> bool {
    overlap_on_all(t1, t2, triangle_triangle_axes(t1, t2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Matrix3;

    fn tri() -> Triangle {
        Triangle::new(
            Vector3::new(-1.0, -1.0, 0.0),
            Vector3::new(1.0, -1.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
        )
    }

    #[test]
    fn plane_sides() {
        let t = tri();
        assert!(intersects_plane(&t, &Plane::new(Vector3::Z, 0.0)));
        assert!(!intersects_plane(&t, &Plane::new(Vector3::Z, 1.0)));
        assert!(!intersects_plane(&t, &Plane::new(Vector3::Z, -1.0)));
        assert!(intersects_plane(&t, &Plane::new(Vector3::X, 0.0)));
        // Touching at a single vertex.
        assert!(intersects_plane(&t, &Plane::new(Vector3::Y, 1.0)));
    }

    #[test]
    fn sphere_near_edge() {
        let t = tri();
        assert!(intersects_sphere(&t, &Sphere::new(Vector3::new(0.0, -1.5, 0.0), 0.6)));
        assert!(!intersects_sphere(&t, &Sphere::new(Vector3::new(0.0, -1.5, 0.0), 0.4)));
        assert!(intersects_sphere(&t, &Sphere::new(Vector3::new(0.0, 0.0, 0.9), 1.0)));
    }

    #[test]
    fn aabb_cases() {
        let t = tri();
        assert!(intersects_aabb(&t, &Aabb::new(Vector3::ZERO, Vector3::splat(0.1))));
        assert!(intersects_aabb(&t, &Aabb::new(Vector3::new(0.0, 0.0, 0.5), Vector3::splat(0.6))));
        assert!(!intersects_aabb(&t, &Aabb::new(Vector3::new(0.0, 0.0, 2.0), Vector3::splat(0.5))));
        // Beside the slanted edge BC: inside the triangle's bounding box but outside the triangle.
        assert!(!intersects_aabb(&t, &Aabb::new(Vector3::new(0.9, 0.7, 0.0), Vector3::splat(0.1))));
    }

    #[test]
    fn obb_cases() {
        let t = tri();
        let tilted = Obb::new(Vector3::new(0.0, 0.0, 0.8), Vector3::new(1.0, 1.0, 0.1), Matrix3::rotation_x(90.0));
        assert!(intersects_obb(&t, &tilted));
        let above = Obb::new(Vector3::new(0.0, 0.0, 1.5), Vector3::splat(0.5), Matrix3::rotation_z(30.0));
        assert!(!intersects_obb(&t, &above));
    }

    #[test]
    fn crossing_triangles() {
        let t = tri();
        let vertical = Triangle::new(
            Vector3::new(0.0, 0.0, -1.0),
            Vector3::new(0.0, 0.0, 1.0),
            Vector3::new(0.0, 2.0, 0.0),
        );
        assert!(intersects_triangle(&t, &vertical));
        let lifted = Triangle::new(
            Vector3::new(0.0, 0.0, 0.5),
            Vector3::new(0.0, 0.0, 1.0),
            Vector3::new(0.0, 2.0, 0.5),
        );
        assert!(!intersects_triangle(&t, &lifted));
    }

    #[test]
    fn coplanar_triangles() {
        let t = tri();
        let overlapping = Triangle::new(
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(2.0, 0.0, 0.0),
            Vector3::new(2.0, 2.0, 0.0),
        );
        assert!(intersects_triangle(&t, &overlapping));
        let apart = Triangle::new(
            Vector3::new(3.0, 0.0, 0.0),
            Vector3::new(5.0, 0.0, 0.0),
            Vector3::new(5.0, 2.0, 0.0),
        );
        assert!(!intersects_triangle(&t, &apart));
    }
}
