//! Separating-axis helpers shared by the convex-vs-convex tests.

use crate::geometry::{Aabb, Interval, Obb, Sphere, Triangle};
use crate::math::Vector3;

/// Shapes that can be projected onto an axis.
pub trait Project {
    fn interval(&self, axis: Vector3) -> Interval;
}

impl Project for Triangle {
    fn interval(&self, axis: Vector3) -> Interval {
        Triangle::interval(self, axis)
    }
}

impl Project for Aabb {
    fn interval(&self, axis: Vector3) -> Interval {
        Aabb::interval(self, axis)
    }
}

impl Project for Obb {
    fn interval(&self, axis: Vector3) -> Interval {
        Obb::interval(self, axis)
    }
}

impl Project for Sphere {
    fn interval(&self, axis: Vector3) -> Interval {
        Sphere::interval(self, axis)
    }
}

/// True when the projections of `a` and `b` onto `axis` overlap.
#[must_use]
pub fn overlap_on_axis<A: Project, B: Project>(a: &A, b: &B, axis: Vector3) -> bool {
    a.interval(axis).overlaps(&b.interval(axis))
}

/// True when no axis in `axes` separates `a` from `b`.
///
/// Zero-length axes carry no information and are skipped.
#[must_use]
pub fn overlap_on_all<A, B, I>(a: &A, b: &B, axes: I) -> bool
where
    A: Project,
    B: Project,
    I: IntoIterator<Item = Vector3>,
{
    axes.into_iter()
        .filter(|axis| axis.magnitude_sq() > 0.0)
        .all(|axis| overlap_on_axis(a, b, axis))
}

/// The 15 candidate axes for two boxes: each box's face normals plus the
/// pairwise edge cross products.
#[must_use]
pub fn box_box_axes(a: [Vector3; 3], b: [Vector3; 3]) -> Vec<Vector3> {
    let mut axes = Vec::with_capacity(15);
    axes.extend(a);
    axes.extend(b);
    for ea in a {
        for eb in b {
            axes.push(ea.cross(eb));
        }
    }
    axes
}

/// The 13 candidate axes for a triangle against a box.
#[must_use]
pub fn triangle_box_axes(triangle: &Triangle, box_axes: [Vector3; 3]) -> Vec<Vector3> {
    let edges = [
        triangle.b - triangle.a,
        triangle.c - triangle.b,
        triangle.a - triangle.c,
    ];
    let mut axes = Vec::with_capacity(13);
    axes.extend(box_axes);
    axes.push(edges[0].cross(edges[1]));
    for u in box_axes {
        for f in edges {
            axes.push(u.cross(f));
        }
    }
    axes
}

/// Cross product of edges `ab` and `cd`, robust to parallel edges.
///
/// When the edges are parallel the plain cross product vanishes; in that
/// case the axis perpendicular to `ab` inside the plane spanned by `ab`
/// and `c - a` is used instead. Returns zero when even that is degenerate
/// (collinear edges).
#[must_use]
pub fn cross_edge(a: Vector3, b: Vector3, c: Vector3, d: Vector3) -> Vector3 {
    let ab = b - a;
    let cd = d - c;
    let result = ab.cross(cd);
    if !is_degenerate_cross(result, ab, cd) {
        return result;
    }
    let axis = ab.cross(c - a);
    let result = ab.cross(axis);
    if !is_degenerate_cross(result, ab, axis) {
        return result;
    }
    Vector3::ZERO
}

/// Squared sine below which two directions count as parallel.
const PARALLEL_SIN_SQ: f32 = 1e-10;

fn is_degenerate_cross(cross: Vector3, u: Vector3, v: Vector3) -> bool {
    cross.magnitude_sq() <= PARALLEL_SIN_SQ * u.magnitude_sq() * v.magnitude_sq()
}

/// The 11 robust candidate axes for two triangles.
#[must_use]
pub fn triangle_triangle_axes(t1: &Triangle, t2: &Triangle) -> Vec<Vector3> {
    let mut axes = Vec::with_capacity(11);
    axes.push(cross_edge(t1.a, t1.b, t1.b, t1.c));
    axes.push(cross_edge(t2.a, t2.b, t2.b, t2.c));
    let e1 = t1.edges();
    let e2 = t2.edges();
    for edge2 in e2 {
        for edge1 in e1 {
            axes.push(cross_edge(edge2.start, edge2.end, edge1.start, edge1.end));
        }
    }
    axes
}
