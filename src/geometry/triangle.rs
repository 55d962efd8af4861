use crate::math::Vector3;

use super::{Interval, Line, Plane};

/// Squared sine of the smallest corner angle below which a triangle is
/// treated as degenerate.
const DEGENERATE_SIN_SQ: f32 = 1e-10;

/// A triangle with vertices `a`, `b`, `c` (counter-clockwise about the normal).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Triangle {
    pub a: Vector3,
    pub b: Vector3,
    pub c: Vector3,
}

impl Triangle {
    #[must_use]
    pub const fn new(a: Vector3, b: Vector3, c: Vector3) -> Self {
        Self { a, b, c }
    }

    #[must_use]
    pub const fn vertices(&self) -> [Vector3; 3] {
        [self.a, self.b, self.c]
    }

    /// Edges in declaration order: AB, BC, CA.
    #[must_use]
    pub const fn edges(&self) -> [Line; 3] {
        [
            Line::new(self.a, self.b),
            Line::new(self.b, self.c),
            Line::new(self.c, self.a),
        ]
    }

    /// Unnormalized normal `(b - a) × (c - a)`; its length is twice the area.
    #[must_use]
    pub fn scaled_normal(&self) -> Vector3 {
        (self.b - self.a).cross(self.c - self.a)
    }

    /// Unit normal, or zero for a degenerate triangle.
    #[must_use]
    pub fn normal(&self) -> Vector3 {
        self.scaled_normal().normalized()
    }

    #[must_use]
    pub fn area(&self) -> f32 {
        self.scaled_normal().magnitude() * 0.5
    }

    #[must_use]
    pub fn centroid(&self) -> Vector3 {
        (self.a + self.b + self.c) * (1.0 / 3.0)
    }

    /// True when the vertices are (nearly) collinear or coincident.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        let denom = ab.magnitude_sq() * ac.magnitude_sq();
        if denom == 0.0 {
            return true;
        }
        ab.cross(ac).magnitude_sq() / denom <= DEGENERATE_SIN_SQ
    }

    #[must_use]
    pub fn plane(&self) -> Plane {
        Plane::from_triangle(self)
    }

    /// Whether a point in the triangle's plane lies inside or on the boundary.
    ///
    /// The cross products of consecutive vertex vectors (as seen from
    /// `point`) must all face the same half-space. A degenerate triangle
    /// only contains its own vertices.
    #[must_use]
    pub fn contains(&self, point: Vector3) -> bool {
        if self.is_degenerate() {
            tracing::trace!(?point, "containment test against degenerate triangle");
            return self.vertices().contains(&point);
        }

        let a = self.a - point;
        let b = self.b - point;
        let c = self.c - point;

        let n_pbc = b.cross(c);
        let n_pca = c.cross(a);
        let n_pab = a.cross(b);

        n_pbc.dot(n_pca) >= 0.0 && n_pbc.dot(n_pab) >= 0.0 && n_pca.dot(n_pab) >= 0.0
    }

    /// Closest point on the (filled) triangle to `point`.
    ///
    /// Projects onto the plane first; if that lands outside, the answer is
    /// the nearest point on the edges, with ties going to the edge declared
    /// first (AB, BC, CA).
    #[must_use]
    pub fn closest_point(&self, point: Vector3) -> Vector3 {
        let projected = self.plane().closest_point(point);
        if self.contains(projected) {
            return projected;
        }

        let mut best = self.a;
        let mut best_dist = f32::INFINITY;
        for edge in self.edges() {
            let candidate = edge.closest_point(projected);
            let dist = (projected - candidate).magnitude_sq();
            if dist < best_dist {
                best = candidate;
                best_dist = dist;
            }
        }
        best
    }

    /// Barycentric weights `(wa, wb, wc)` of `point` relative to `a, b, c`.
    ///
    /// Each weight comes from projecting onto the direction perpendicular
    /// to the opposite edge. For points in the triangle's plane the weights
    /// sum to 1. Returns `None` for degenerate triangles.
    #[must_use]
    pub fn barycentric(&self, point: Vector3) -> Option<Vector3> {
        if self.is_degenerate() {
            return None;
        }

        let ap = point - self.a;
        let bp = point - self.b;
        let cp = point - self.c;

        let ab = self.b - self.a;
        let ac = self.c - self.a;
        let bc = self.c - self.b;
        let cb = self.b - self.c;
        let ca = self.a - self.c;

        let v = ab.perpendicular(cb);
        let wa = 1.0 - v.dot(ap) / v.dot(ab);

        let v = bc.perpendicular(ac);
        let wb = 1.0 - v.dot(bp) / v.dot(bc);

        let v = ca.perpendicular(ab);
        let wc = 1.0 - v.dot(cp) / v.dot(ca);

        Some(Vector3::new(wa, wb, wc))
    }

    /// Projection of the triangle onto `axis`.
    #[must_use]
    pub fn interval(&self, axis: Vector3) -> Interval {
        Interval::of_points(&self.vertices(), axis)
    }
}
