use approx::relative_eq;
use narrow3d::geometry::{Aabb, Line, Sphere, Triangle};
use narrow3d::math::{Matrix4, Quaternion, Vector3};
use narrow3d::query::manifold;
use proptest::prelude::*;

fn vector(range: f32) -> impl Strategy<Value = Vector3> {
    (-range..range, -range..range, -range..range).prop_map(|(x, y, z)| Vector3::new(x, y, z))
}

fn euler() -> impl Strategy<Value = Vector3> {
    (-180.0f32..180.0, -89.0f32..89.0, -180.0f32..180.0).prop_map(|(x, y, z)| Vector3::new(x, y, z))
}

proptest! {
    #[test]
    fn normalized_is_unit_or_zero(v in vector(1000.0)) {
        let n = v.normalized();
        let len = n.magnitude();
        prop_assert!(len == 0.0 || (len - 1.0).abs() < 1e-5, "length {}", len);
    }

    #[test]
    fn trs_inverse_round_trips(
        scale in (0.5f32..2.0, 0.5f32..2.0, 0.5f32..2.0),
        rotation in euler(),
        translation in vector(10.0),
    ) {
        let scale = Vector3::new(scale.0, scale.1, scale.2);
        let m = Matrix4::transform_euler(scale, rotation, translation);
        let inv = m.inverse();
        prop_assert!(inv.is_ok());
        if let Ok(inv) = inv {
            prop_assert!(relative_eq!(m * inv, Matrix4::IDENTITY, epsilon = 1e-3));
        }
    }

    #[test]
    fn slerp_endpoints(a in euler(), b in euler()) {
        let qa = Quaternion::from_euler(a);
        let qb = Quaternion::from_euler(b);
        prop_assert_eq!(qa.slerp(qb, 0.0), qa);
        // The end is `qb` up to the double cover.
        let end = if qa.dot(qb) >= 0.0 { qb } else { -qb };
        prop_assert_eq!(qa.slerp(qb, 1.0), end);
    }

    #[test]
    fn rotation_preserves_length(e in euler(), v in vector(50.0)) {
        let rotated = Quaternion::from_euler(e) * v;
        prop_assert!((rotated.magnitude() - v.magnitude()).abs() <= 1e-3 * v.magnitude().max(1.0));
    }

    #[test]
    fn barycentric_weights_sum_to_one(
        a in vector(10.0),
        b in vector(10.0),
        c in vector(10.0),
        u in -1.0f32..2.0,
        v in -1.0f32..2.0,
    ) {
        let t = Triangle::new(a, b, c);
        prop_assume!(t.area() > 1.0);
        let p = a * u + b * v + c * (1.0 - u - v);
        let w = t.barycentric(p);
        prop_assert!(w.is_some());
        if let Some(w) = w {
            prop_assert!((w.x + w.y + w.z - 1.0).abs() < 1e-3, "weights {:?}", w);
        }
    }

    #[test]
    fn triangle_closest_point_is_no_farther_than_vertices(
        a in vector(10.0),
        b in vector(10.0),
        c in vector(10.0),
        p in vector(20.0),
    ) {
        let t = Triangle::new(a, b, c);
        prop_assume!(t.area() > 1.0);
        let d = t.closest_point(p).distance(p);
        for vertex in t.vertices() {
            prop_assert!(d <= vertex.distance(p) + 1e-2);
        }
    }

    #[test]
    fn line_closest_point_stays_on_segment(
        start in vector(10.0),
        end in vector(10.0),
        p in vector(20.0),
    ) {
        let line = Line::new(start, end);
        let q = line.closest_point(p);
        prop_assert!(q.distance(start) + q.distance(end) <= line.length() + 1e-3);
    }

    #[test]
    fn sphere_manifold_is_consistent(
        a in vector(5.0),
        b in vector(5.0),
        r1 in 0.5f32..3.0,
        r2 in 0.5f32..3.0,
    ) {
        let m = manifold::sphere_sphere(&Sphere::new(a, r1), &Sphere::new(b, r2));
        if m.colliding {
            prop_assert_eq!(m.contacts.len(), 1);
            prop_assert!((m.normal.magnitude() - 1.0).abs() < 1e-4);
            prop_assert!(m.depth >= 0.0);
        } else {
            prop_assert!(m.contacts.is_empty());
            prop_assert!(m.depth.is_infinite());
        }
    }

    #[test]
    fn sphere_box_normal_is_unit(centre in vector(4.0), radius in 0.1f32..3.0) {
        let aabb = Aabb::new(Vector3::ZERO, Vector3::new(1.0, 2.0, 0.5));
        let m = manifold::sphere_aabb(&Sphere::new(centre, radius), &aabb);
        if m.colliding {
            prop_assert!((m.normal.magnitude() - 1.0).abs() < 1e-4);
            prop_assert!(m.depth <= radius + 1e-4);
        }
    }
}
