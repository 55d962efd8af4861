//! Segment-vs-shape predicates.
//!
//! Box and triangle tests cast a ray from `start` toward `end` and accept
//! the hit when it falls within the segment length. A segment starting
//! inside a box is measured to the exit face.

use crate::geometry::{Aabb, Line, Obb, Plane, Sphere, Triangle};
use crate::math::near_zero;

use super::raycast::{raycast_aabb, raycast_obb, raycast_triangle, RaycastHit};

fn within_segment(line: &Line, hit: Option<RaycastHit>) -> bool {
    hit.is_some_and(|hit| hit.t >= 0.0 && hit.t * hit.t <= line.length_sq())
}

/// True when the segment touches the sphere.
#[must_use]
pub fn test_sphere(line: &Line, sphere: &Sphere) -> bool {
    let closest = line.closest_point(sphere.origin);
    (sphere.origin - closest).magnitude_sq() <= sphere.radius * sphere.radius
}

#[must_use]
pub fn test_aabb(line: &Line, aabb: &Aabb) -> bool {
    within_segment(line, raycast_aabb(&line.to_ray(), aabb))
}

#[must_use]
pub fn test_obb(line: &Line, obb: &Obb) -> bool {
    within_segment(line, raycast_obb(&line.to_ray(), obb))
}

/// True when the segment crosses or touches the plane.
///
/// A segment parallel to the plane never intersects it, including one
/// lying entirely in the plane.
#[must_use]
pub fn test_plane(line: &Line, plane: &Plane) -> bool {
    let ab = line.direction();
    let n_a = plane.normal.dot(line.start);
    let n_ab = plane.normal.dot(ab);
    if near_zero(n_ab) {
        return false;
    }
    let t = (plane.distance - n_a) / n_ab;
    (0.0..=1.0).contains(&t)
}

#[must_use]
pub fn test_triangle(line: &Line, triangle: &Triangle) -> bool {
    within_segment(line, raycast_triangle(&line.to_ray(), triangle))
}

/// True when the two segments touch within tolerance.
#[must_use]
pub fn test_line(a: &Line, b: &Line) -> bool {
    let (s, t) = closest_parameters(a, b);
    let p = a.start + a.direction() * s;
    let q = b.start + b.direction() * t;
    near_zero((p - q).magnitude_sq())
}

/// Parameters `(s, t)` in `[0, 1]` of the closest pair of points on `a`
/// and `b`. Degenerate segments act as points.
#[must_use]
pub fn closest_parameters(a: &Line, b: &Line) -> (f32, f32) {
    let d1 = a.direction();
    let d2 = b.direction();
    let r = a.start - b.start;
    let len1 = d1.magnitude_sq();
    let len2 = d2.magnitude_sq();
    let f = d2.dot(r);

    if len1 == 0.0 && len2 == 0.0 {
        return (0.0, 0.0);
    }
    if len1 == 0.0 {
        return (0.0, (f / len2).clamp(0.0, 1.0));
    }
    let c = d1.dot(r);
    if len2 == 0.0 {
        return ((-c / len1).clamp(0.0, 1.0), 0.0);
    }

    let b12 = d1.dot(d2);
    let denom = len1 * len2 - b12 * b12;
    // Parallel segments: any s works, start from `a.start`.
    let s = if denom == 0.0 {
        0.0
    } else {
        ((b12 * f - c * len2) / denom).clamp(0.0, 1.0)
    };
    let t = (b12 * s + f) / len2;
    if t < 0.0 {
        ((-c / len1).clamp(0.0, 1.0), 0.0)
    } else if t > 1.0 {
        (((b12 - c) / len1).clamp(0.0, 1.0), 1.0)
    } else {
        (s, t)
    }
}
