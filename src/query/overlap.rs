//! Boolean overlap tests between spheres, boxes and planes.

use crate::geometry::{Aabb, Obb, Plane, Sphere};
use crate::math::{compare, Vector3};

use super::sat::{box_box_axes, overlap_on_all};

const WORLD_AXES: [Vector3; 3] = [Vector3::X, Vector3::Y, Vector3::Z];

#[must_use]
pub fn sphere_sphere(a: &Sphere, b: &Sphere) -> bool {
    let r = a.radius + b.radius;
    (a.origin - b.origin).magnitude_sq() <= r * r
}

#[must_use]
pub fn sphere_aabb(sphere: &Sphere, aabb: &Aabb) -> bool {
    let closest = aabb.closest_point(sphere.origin);
    (sphere.origin - closest).magnitude_sq() <= sphere.radius * sphere.radius
}

#[must_use]
pub fn sphere_obb(sphere: &Sphere, obb: &Obb) -> bool {
    let closest = obb.closest_point(sphere.origin);
    (sphere.origin - closest).magnitude_sq() <= sphere.radius * sphere.radius
}

#[must_use]
pub fn sphere_plane(sphere: &Sphere, plane: &Plane) -> bool {
    plane.plane_equation(sphere.origin).abs() <= sphere.radius
}

#[must_use]
pub fn aabb_aabb(a: &Aabb, b: &Aabb) -> bool {
    let (a_min, a_max) = (a.min(), a.max());
    let (b_min, b_max) = (b.min(), b.max());
    (0..3).all(|i| a_min[i] <= b_max[i] && a_max[i] >= b_min[i])
}

/// Separating-axis test over the 15 box/box axes.
#[must_use]
pub fn aabb_obb(aabb: &Aabb, obb: &Obb) -> bool {
    overlap_on_all(aabb, obb, box_box_axes(WORLD_AXES, obb.axes()))
}

#[must_use]
pub fn obb_obb(a: &Obb, b: &Obb) -> bool {
    overlap_on_all(a, b, box_box_axes(a.axes(), b.axes()))
}

/// Compares the box's projected radius on the plane normal with the
/// distance of its center from the plane.
#[must_use]
pub fn aabb_plane(aabb: &Aabb, plane: &Plane) -> bool {
    let n = plane.normal;
    let e = aabb.extents.abs();
    let radius = e.x * n.x.abs() + e.y * n.y.abs() + e.z * n.z.abs();
    plane.plane_equation(aabb.origin).abs() <= radius
}

#[must_use]
pub fn obb_plane(obb: &Obb, plane: &Plane) -> bool {
    let n = plane.normal;
    let extents = obb.half_extents();
    let radius: f32 = obb
        .axes()
        .iter()
        .enumerate()
        .map(|(i, axis)| extents[i] * n.dot(*axis).abs())
        .sum();
    plane.plane_equation(obb.origin).abs() <= radius
}

/// Planes intersect unless they are parallel and distinct.
#[must_use]
pub fn plane_plane(a: &Plane, b: &Plane) -> bool {
    let d = a.normal.cross(b.normal);
    if !d.is_near_zero() {
        return true;
    }
    // Parallel: coincident when the offsets agree, accounting for a
    // flipped normal.
    if a.normal.dot(b.normal) >= 0.0 {
        compare(a.distance, b.distance)
    } else {
        compare(a.distance, -b.distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Matrix3;

    #[test]
    fn spheres() {
        let a = Sphere::new(Vector3::ZERO, 1.0);
        assert!(sphere_sphere(&a, &Sphere::new(Vector3::new(2.0, 0.0, 0.0), 1.0)));
        assert!(!sphere_sphere(&a, &Sphere::new(Vector3::new(2.1, 0.0, 0.0), 1.0)));
    }

    #[test]
    fn sphere_vs_boxes() {
        let s = Sphere::new(Vector3::new(0.0, 2.5, 0.0), 1.0);
        let aabb = Aabb::new(Vector3::ZERO, Vector3::new(1.0, 2.0, 1.0));
        assert!(sphere_aabb(&s, &aabb));
        let far = Sphere::new(Vector3::new(0.0, 3.5, 0.0), 1.0);
        assert!(!sphere_aabb(&far, &aabb));

        // Rotating the box puts its long axis along X; the sphere above misses.
        let obb = Obb::new(Vector3::ZERO, Vector3::new(1.0, 2.0, 1.0), Matrix3::rotation_z(90.0));
        assert!(!sphere_obb(&s, &obb));
        assert!(sphere_obb(&Sphere::new(Vector3::new(2.5, 0.0, 0.0), 1.0), &obb));
    }

    #[test]
    fn sphere_vs_plane() {
        let p = Plane::new(Vector3::Y, 0.0);
        assert!(sphere_plane(&Sphere::new(Vector3::new(0.0, -0.5, 0.0), 1.0), &p));
        assert!(!sphere_plane(&Sphere::new(Vector3::new(0.0, 1.5, 0.0), 1.0), &p));
    }

    #[test]
    fn aabbs() {
        let a = Aabb::new(Vector3::ZERO, Vector3::ONE);
        assert!(aabb_aabb(&a, &Aabb::new(Vector3::new(2.0, 2.0, 2.0), Vector3::ONE)));
        assert!(!aabb_aabb(&a, &Aabb::new(Vector3::new(2.1, 0.0, 0.0), Vector3::ONE)));
    }

    #[test]
    fn rotated_box_corner_gap() {
        let a = Aabb::new(Vector3::ZERO, Vector3::ONE);
        // A 45° box whose corner points at `a`; its AABB would overlap but the box doesn't.
        let b = Obb::new(Vector3::new(2.6, 2.6, 0.0), Vector3::ONE, Matrix3::rotation_z(45.0));
        assert!(!aabb_obb(&a, &b));
        let c = Obb::new(Vector3::new(2.3, 0.0, 0.0), Vector3::ONE, Matrix3::rotation_z(45.0));
        assert!(aabb_obb(&a, &c));
    }

    #[test]
    fn obbs() {
        let a = Obb::new(Vector3::ZERO, Vector3::ONE, Matrix3::rotation(Vector3::new(10.0, 20.0, 30.0)));
        let b = Obb::new(Vector3::new(1.5, 0.0, 0.0), Vector3::ONE, Matrix3::IDENTITY);
        assert!(obb_obb(&a, &b));
        let c = Obb::new(Vector3::new(4.0, 0.0, 0.0), Vector3::ONE, Matrix3::IDENTITY);
        assert!(!obb_obb(&a, &c));
    }

    #[test]
    fn boxes_vs_plane() {
        let p = Plane::new(Vector3::Y, 1.5);
        assert!(!aabb_plane(&Aabb::new(Vector3::ZERO, Vector3::ONE), &p));
        assert!(aabb_plane(&Aabb::new(Vector3::Y, Vector3::ONE), &p));
        // A cube rotated 45° about Z reaches sqrt(2) ~ 1.414 < 1.5.
        let obb = Obb::new(Vector3::ZERO, Vector3::ONE, Matrix3::rotation_z(45.0));
        assert!(!obb_plane(&obb, &p));
        assert!(obb_plane(&obb, &Plane::new(Vector3::Y, 1.4)));
        let flipped = Obb::new(Vector3::ZERO, Vector3::new(-1.0, -1.0, 1.0), Matrix3::rotation_z(45.0));
        assert!(obb_plane(&flipped, &Plane::new(Vector3::Y, 1.4)));
    }

    #[test]
    fn planes() {
        let a = Plane::new(Vector3::Y, 0.0);
        assert!(plane_plane(&a, &Plane::new(Vector3::X, 3.0)));
        assert!(!plane_plane(&a, &Plane::new(Vector3::Y, 1.0)));
        assert!(plane_plane(&a, &Plane::new(Vector3::Y, 0.0)));
        let flipped = Plane::new(-Vector3::Y, -2.0);
        assert!(plane_plane(&Plane::new(Vector3::Y, 2.0), &flipped));
    }
}
