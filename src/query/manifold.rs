//! Narrow-phase contact generation for sphere pairs.
//!
//! Each routine starts from a reset [`CollisionManifold`] and fills it only
//! when the shapes collide, so a non-colliding result always carries the
//! default normal, an infinite depth and no contacts.

use crate::geometry::{Aabb, Obb, Sphere};
use crate::math::{near_zero, Vector3};

/// Result of a narrow-phase pair test.
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionManifold {
    pub colliding: bool,
    /// Contact normal. Points from the second shape toward the first unless
    /// the producing routine says otherwise.
    pub normal: Vector3,
    /// Penetration depth, meaningful only when `colliding`.
    pub depth: f32,
    pub contacts: Vec<Vector3>,
}

impl CollisionManifold {
    #[must_use]
    pub fn new() -> Self {
        Self {
            colliding: false,
            normal: Vector3::Z,
            depth: f32::INFINITY,
            contacts: Vec::new(),
        }
    }

    /// Restores the non-colliding state, keeping the contact allocation.
    pub fn reset(&mut self) {
        self.colliding = false;
        self.normal = Vector3::Z;
        self.depth = f32::INFINITY;
        self.contacts.clear();
    }

    /// Flips the normal, for callers that swap the shape order.
    #[must_use]
    pub fn flipped(mut self) -> Self {
        if self.colliding {
            self.normal = -self.normal;
        }
        self
    }
}

impl Default for CollisionManifold {
    fn default() -> Self {
        Self::new()
    }
}

/// Contact between two spheres.
///
/// The normal runs from `a` toward `b`. Coincident centers report no
/// collision. The depth is half the gap between the center distance and
/// `a`'s radius, and the single contact lies on that normal.
#[must_use]
pub fn sphere_sphere(a: &Sphere, b: &Sphere) -> CollisionManifold {
    let mut result = CollisionManifold::new();

    let r = a.radius + b.radius;
    let d = b.origin - a.origin;
    let d_sq = d.magnitude_sq();

    if d_sq - r * r > 0.0 {
        return result;
    }
    if near_zero(d_sq) {
        tracing::trace!(origin = ?a.origin, "coincident sphere centers");
        return result;
    }

    let normal = d.normalized();
    let depth = (d.magnitude() - a.radius).abs() * 0.5;
    let contact = a.origin + normal * (a.radius - depth);

    result.colliding = true;
    result.normal = normal;
    result.depth = depth;
    result.contacts.push(contact);
    result
}

/// Contact between a sphere and an axis-aligned box. The normal points
/// from the box toward the sphere.
#[must_use]
pub fn sphere_aabb(sphere: &Sphere, aabb: &Aabb) -> CollisionManifold {
    sphere_box(sphere, aabb.origin, aabb.closest_point(sphere.origin))
}

/// Contact between a sphere and an oriented box. The normal points from
/// the box toward the sphere.
#[must_use]
pub fn sphere_obb(sphere: &Sphere, obb: &Obb) -> CollisionManifold {
    sphere_box(sphere, obb.origin, obb.closest_point(sphere.origin))
}

fn sphere_box(sphere: &Sphere, box_origin: Vector3, closest: Vector3) -> CollisionManifold {
    let mut result = CollisionManifold::new();

    let dist_sq = (closest - sphere.origin).magnitude_sq();
    if dist_sq > sphere.radius * sphere.radius {
        return result;
    }

    let normal = if near_zero(dist_sq) {
        // Center on or inside the box: push out along the center offset.
        let offset = closest - box_origin;
        if near_zero(offset.magnitude_sq()) {
            tracing::debug!(origin = ?sphere.origin, "sphere centered on box, no contact normal");
            return result;
        }
        offset.normalized()
    } else {
        (sphere.origin - closest).normalized()
    };

    let outside = sphere.origin - normal * sphere.radius;
    let distance = (closest - outside).magnitude();

    result.colliding = true;
    result.normal = normal;
    result.depth = distance * 0.5;
    result.contacts.push((closest + outside) * 0.5);
    result
}
