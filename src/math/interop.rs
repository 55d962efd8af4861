//! Conversions between this crate's algebra types and `nalgebra`.
//!
//! Both sides store matrices column-major, so matrix conversions are a
//! straight element copy.

use super::{Matrix3, Matrix4, Quaternion, Vector2, Vector3, Vector4};

impl From<nalgebra::Vector2<f32>> for Vector2 {
    fn from(v: nalgebra::Vector2<f32>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2> for nalgebra::Vector2<f32> {
    fn from(v: Vector2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<nalgebra::Vector3<f32>> for Vector3 {
    fn from(v: nalgebra::Vector3<f32>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for nalgebra::Vector3<f32> {
    fn from(v: Vector3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<nalgebra::Point3<f32>> for Vector3 {
    fn from(p: nalgebra::Point3<f32>) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

impl From<Vector3> for nalgebra::Point3<f32> {
    fn from(v: Vector3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<nalgebra::Vector4<f32>> for Vector4 {
    fn from(v: nalgebra::Vector4<f32>) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Vector4> for nalgebra::Vector4<f32> {
    fn from(v: Vector4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<nalgebra::Matrix3<f32>> for Matrix3 {
    fn from(m: nalgebra::Matrix3<f32>) -> Self {
        let mut a = [0.0; 9];
        a.copy_from_slice(m.as_slice());
        Self::from_array(a)
    }
}

impl From<Matrix3> for nalgebra::Matrix3<f32> {
    fn from(m: Matrix3) -> Self {
        Self::from_column_slice(&m.as_array())
    }
}

impl From<nalgebra::Matrix4<f32>> for Matrix4 {
    fn from(m: nalgebra::Matrix4<f32>) -> Self {
        let mut a = [0.0; 16];
        a.copy_from_slice(m.as_slice());
        Self::from_array(a)
    }
}

impl From<Matrix4> for nalgebra::Matrix4<f32> {
    fn from(m: Matrix4) -> Self {
        Self::from_column_slice(&m.as_array())
    }
}

impl From<nalgebra::Quaternion<f32>> for Quaternion {
    fn from(q: nalgebra::Quaternion<f32>) -> Self {
        Self::new(q.i, q.j, q.k, q.w)
    }
}

impl From<Quaternion> for nalgebra::Quaternion<f32> {
    fn from(q: Quaternion) -> Self {
        Self::new(q.w, q.x, q.y, q.z)
    }
}

impl From<nalgebra::UnitQuaternion<f32>> for Quaternion {
    fn from(q: nalgebra::UnitQuaternion<f32>) -> Self {
        q.into_inner().into()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn matrix_layout_matches_nalgebra() {
        let m = Matrix3::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        let n: nalgebra::Matrix3<f32> = m.into();
        assert!((n[(0, 2)] - 3.0).abs() < f32::EPSILON);
        assert!((n[(2, 0)] - 7.0).abs() < f32::EPSILON);
        assert_eq!(Matrix3::from(n), m);
    }

    #[test]
    fn inverse_agrees_with_nalgebra() {
        let m = Matrix4::transform_euler(
            Vector3::new(1.5, 0.5, 2.0),
            Vector3::new(20.0, 50.0, -10.0),
            Vector3::new(-3.0, 1.0, 7.0),
        );
        let ours = m.inverse().unwrap();
        let theirs: Matrix4 = nalgebra::Matrix4::<f32>::from(m)
            .try_inverse()
            .unwrap()
            .into();
        assert_relative_eq!(ours, theirs, epsilon = 1e-4);
    }

    #[test]
    fn rotation_agrees_with_nalgebra() {
        let axis = nalgebra::Unit::new_normalize(nalgebra::Vector3::new(1.0_f32, 2.0, -1.0));
        let theirs = nalgebra::UnitQuaternion::from_axis_angle(&axis, 0.7);
        let ours = Quaternion::from_axis_angle(axis.into_inner().into(), 0.7_f32.to_degrees());
        assert_relative_eq!(Quaternion::from(theirs), ours, epsilon = 1e-6);

        let v = nalgebra::Vector3::new(0.3_f32, -4.0, 2.5);
        let expected: Vector3 = (theirs * v).into();
        assert_relative_eq!(ours * Vector3::from(v), expected, epsilon = 1e-5);
    }
}
