use crate::math::Vector3;
use crate::query::{line, manifold, overlap, triangle, CollisionManifold};

use super::{Aabb, Line, Obb, Plane, Sphere, Triangle};

/// Any primitive that takes part in pairwise queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    Aabb(Aabb),
    Obb(Obb),
    Triangle(Triangle),
    Line(Line),
    Plane(Plane),
}

impl Shape {
    /// Reference point of the shape.
    ///
    /// Triangles report their centroid, lines their midpoint and planes the
    /// point of the plane closest to the world origin.
    #[must_use]
    pub fn origin(&self) -> Vector3 {
        match self {
            Self::Sphere(s) => s.origin,
            Self::Aabb(b) => b.origin,
            Self::Obb(b) => b.origin,
            Self::Triangle(t) => t.centroid(),
            Self::Line(l) => (l.start + l.end) * 0.5,
            Self::Plane(p) => p.normal * p.distance,
        }
    }

    /// Moves the shape so that [`origin`](Self::origin) becomes `origin`.
    /// Planes keep their normal and pass through `origin` afterwards.
    pub fn set_origin(&mut self, origin: Vector3) {
        let delta = origin - self.origin();
        match self {
            Self::Sphere(s) => s.origin = origin,
            Self::Aabb(b) => b.origin = origin,
            Self::Obb(b) => b.origin = origin,
            Self::Triangle(t) => {
                t.a += delta;
                t.b += delta;
                t.c += delta;
            }
            Self::Line(l) => {
                l.start += delta;
                l.end += delta;
            }
            Self::Plane(p) => p.distance = p.normal.dot(origin),
        }
    }

    /// Boolean intersection test for any pair of shapes.
    #[must_use]
    pub fn intersects(&self, other: &Shape) -> bool {
        use Shape as S;
        match (self, other) {
            (S::Sphere(a), S::Sphere(b)) => overlap::sphere_sphere(a, b),
            (S::Sphere(s), S::Aabb(b)) | (S::Aabb(b), S::Sphere(s)) => overlap::sphere_aabb(s, b),
            (S::Sphere(s), S::Obb(b)) | (S::Obb(b), S::Sphere(s)) => overlap::sphere_obb(s, b),
            (S::Sphere(s), S::Plane(p)) | (S::Plane(p), S::Sphere(s)) => overlap::sphere_plane(s, p),
            (S::Sphere(s), S::Triangle(t)) | (S::Triangle(t), S::Sphere(s)) => {
                triangle::intersects_sphere(t, s)
            }
            (S::Sphere(s), S::Line(l)) | (S::Line(l), S::Sphere(s)) => line::test_sphere(l, s),

            (S::Aabb(a), S::Aabb(b)) => overlap::aabb_aabb(a, b),
            (S::Aabb(a), S::Obb(b)) | (S::Obb(b), S::Aabb(a)) => overlap::aabb_obb(a, b),
            (S::Aabb(b), S::Plane(p)) | (S::Plane(p), S::Aabb(b)) => overlap::aabb_plane(b, p),
            (S::Aabb(b), S::Triangle(t)) | (S::Triangle(t), S::Aabb(b)) => {
                triangle::intersects_aabb(t, b)
            }
            (S::Aabb(b), S::Line(l)) | (S::Line(l), S::Aabb(b)) => line::test_aabb(l, b),

            (S::Obb(a), S::Obb(b)) => overlap::obb_obb(a, b),
            (S::Obb(b), S::Plane(p)) | (S::Plane(p), S::Obb(b)) => overlap::obb_plane(b, p),
            (S::Obb(b), S::Triangle(t)) | (S::Triangle(t), S::Obb(b)) => {
                triangle::intersects_obb(t, b)
            }
            (S::Obb(b), S::Line(l)) | (S::Line(l), S::Obb(b)) => line::test_obb(l, b),

            (S::Plane(a), S::Plane(b)) => overlap::plane_plane(a, b),
            (S::Plane(p), S::Triangle(t)) | (S::Triangle(t), S::Plane(p)) => {
                triangle::intersects_plane(t, p)
            }
            (S::Plane(p), S::Line(l)) | (S::Line(l), S::Plane(p)) => line::test_plane(l, p),

            (S::Triangle(a), S::Triangle(b)) => triangle::intersects_triangle(a, b),
            (S::Triangle(t), S::Line(l)) | (S::Line(l), S::Triangle(t)) => line::test_triangle(l, t),

            (S::Line(a), S::Line(b)) => line::test_line(a, b),
        }
    }

    /// Contact manifold between `self` and `other`.
    ///
    /// Sphere/sphere and sphere/box pairs are supported in either order;
    /// swapping a box ahead of the sphere flips the normal. Every other
    /// pair yields a non-colliding manifold.
    #[must_use]
    pub fn find_collision_features(&self, other: &Shape) -> CollisionManifold {
        match (self, other) {
            (Self::Sphere(a), Self::Sphere(b)) => manifold::sphere_sphere(a, b),
            (Self::Sphere(s), Self::Aabb(b)) => manifold::sphere_aabb(s, b),
            (Self::Aabb(b), Self::Sphere(s)) => manifold::sphere_aabb(s, b).flipped(),
            (Self::Sphere(s), Self::Obb(b)) => manifold::sphere_obb(s, b),
            (Self::Obb(b), Self::Sphere(s)) => manifold::sphere_obb(s, b).flipped(),
            _ => CollisionManifold::new(),
        }
    }
}

impl From<Sphere> for Shape {
    fn from(value: Sphere) -> Self {
        Self::Sphere(value)
    }
}

impl From<Aabb> for Shape {
    fn from(value: Aabb) -> Self {
        Self::Aabb(value)
    }
}

impl From<Obb> for Shape {
    fn from(value: Obb) -> Self {
        Self::Obb(value)
    }
}

impl From<Triangle> for Shape {
    fn from(value: Triangle) -> Self {
        Self::Triangle(value)
    }
}

impl From<Line> for Shape {
    fn from(value: Line) -> Self {
        Self::Line(value)
    }
}

impl From<Plane> for Shape {
    fn from(value: Plane) -> Self {
        Self::Plane(value)
    }
}
