use crate::geometry::{Aabb, Obb, Plane, Ray, Sphere, Triangle};
use crate::math::{near_zero, Vector3};

/// Where and how a ray hit a shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastHit {
    /// Hit position in world space.
    pub point: Vector3,
    /// Unit surface normal at the hit, facing back along the ray.
    pub normal: Vector3,
    /// Distance along the ray (the ray direction is unit length).
    pub t: f32,
}

impl RaycastHit {
    fn at(ray: &Ray, t: f32, normal: Vector3) -> Self {
        Self {
            point: ray.point_at(t),
            normal,
            t,
        }
    }
}

/// Ray against a solid sphere. A ray starting inside reports the exit point.
#[must_use]
pub fn raycast_sphere(ray: &Ray, sphere: &Sphere) -> Option<RaycastHit> {
    if ray.direction().magnitude_sq() == 0.0 {
        return None;
    }
    let e = sphere.origin - ray.origin();
    let r_sq = sphere.radius * sphere.radius;
    let e_sq = e.magnitude_sq();
    let a = e.dot(ray.direction());
    let b_sq = e_sq - a * a;
    if r_sq - b_sq < 0.0 {
        return None;
    }
    let f = (r_sq - b_sq).sqrt();

    let t = if e_sq < r_sq {
        a + f
    } else if a - f < 0.0 {
        return None;
    } else {
        a - f
    };

    let point = ray.point_at(t);
    let normal = (point - sphere.origin).normalized();
    Some(RaycastHit { point, normal, t })
}

/// Ray against an axis-aligned box.
#[must_use]
pub fn raycast_aabb(ray: &Ray, aabb: &Aabb) -> Option<RaycastHit> {
    raycast_box(ray, aabb.origin, [Vector3::X, Vector3::Y, Vector3::Z], aabb.extents.abs())
}

/// Ray against an oriented box.
#[must_use]
pub fn raycast_obb(ray: &Ray, obb: &Obb) -> Option<RaycastHit> {
    raycast_box(ray, obb.origin, obb.axes(), obb.half_extents())
}

/// Slab test in the box frame.
///
/// Axes the ray runs parallel to only reject when the origin lies outside
/// that slab. A ray starting inside the box reports the exit face.
fn raycast_box(
    ray: &Ray,
    center: Vector3,
    axes: [Vector3; 3],
    extents: Vector3,
) -> Option<RaycastHit> {
    let dir = ray.direction();
    if dir.magnitude_sq() == 0.0 {
        return None;
    }
    let p = center - ray.origin();

    let mut t_min = f32::NEG_INFINITY;
    let mut t_max = f32::INFINITY;
    let mut enter_normal = Vector3::ZERO;
    let mut exit_normal = Vector3::ZERO;

    for (i, axis) in axes.into_iter().enumerate() {
        let extent = extents[i];
        let e = axis.dot(p);
        let f = axis.dot(dir);

        if near_zero(f) {
            if -e - extent > 0.0 || -e + extent < 0.0 {
                return None;
            }
            continue;
        }

        // Parameters where the ray meets the +extent and -extent faces.
        let t_pos = (e + extent) / f;
        let t_neg = (e - extent) / f;
        let (near, far, near_normal, far_normal) = if t_pos < t_neg {
            (t_pos, t_neg, axis, -axis)
        } else {
            (t_neg, t_pos, -axis, axis)
        };

        if near > t_min {
            t_min = near;
            enter_normal = near_normal;
        }
        if far < t_max {
            t_max = far;
            exit_normal = far_normal;
        }
        if t_min > t_max {
            return None;
        }
    }

    if t_max < 0.0 {
        return None;
    }
    if t_min < 0.0 {
        Some(RaycastHit::at(ray, t_max, exit_normal))
    } else {
        Some(RaycastHit::at(ray, t_min, enter_normal))
    }
}

/// Ray against a two-sided plane. Parallel rays miss.
#[must_use]
pub fn raycast_plane(ray: &Ray, plane: &Plane) -> Option<RaycastHit> {
    let nd = ray.direction().dot(plane.normal);
    if near_zero(nd) {
        return None;
    }
    let pn = ray.origin().dot(plane.normal);
    let t = (plane.distance - pn) / nd;
    if t < 0.0 {
        return None;
    }
    let normal = if nd < 0.0 { plane.normal } else { -plane.normal };
    Some(RaycastHit::at(ray, t, normal))
}

/// Ray against a triangle: plane hit, then a barycentric inside test.
#[must_use]
pub fn raycast_triangle(ray: &Ray, triangle: &Triangle) -> Option<RaycastHit> {
    if triangle.is_degenerate() {
        return None;
    }
    let hit = raycast_plane(ray, &triangle.plane())?;
    let weights = triangle.barycentric(hit.point)?;
    let inside = |w: f32| (w >= 0.0 || near_zero(w)) && (w <= 1.0 || near_zero(w - 1.0));
    if inside(weights.x) && inside(weights.y) && inside(weights.z) {
        Some(hit)
    } else {
        None
    }
}
