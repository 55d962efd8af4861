use std::ops::{Add, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq};

use crate::error::{MathError, Result};

use super::scalar::{compare, near_zero};
use super::{Matrix3, Matrix4, Vector3, EPSILON};

/// A rotation quaternion `(x, y, z)` imaginary, `w` real.
///
/// Rotations are expected to be unit length, but the type does not enforce
/// it. `q` and `-q` describe the same rotation; the interpolation helpers
/// account for that.
#[derive(Debug, Clone, Copy)]
#[repr(C)]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quaternion {
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    #[must_use]
    pub const fn xyz(self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    #[must_use]
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Rotation of `degrees` about `axis`. A zero axis yields the identity.
    #[must_use]
    pub fn from_axis_angle(axis: Vector3, degrees: f32) -> Self {
        let axis = axis.normalized();
        if axis.magnitude_sq() == 0.0 {
            return Self::IDENTITY;
        }
        let (s, c) = (degrees.to_radians() * 0.5).sin_cos();
        Self::new(axis.x * s, axis.y * s, axis.z * s, c)
    }

    /// Axis and angle in degrees. The identity maps to `(Z, 0)`.
    #[must_use]
    pub fn to_axis_angle(self) -> (Vector3, f32) {
        let q = self.normalized();
        let s = (1.0 - q.w * q.w).max(0.0).sqrt();
        if s <= EPSILON {
            return (Vector3::Z, 0.0);
        }
        let angle = 2.0 * q.w.clamp(-1.0, 1.0).acos();
        (q.xyz() * (1.0 / s), angle.to_degrees())
    }

    /// Rotation from Euler angles in degrees, `qz * qy * qx` so that X is
    /// applied first. Consistent with [`Matrix3::rotation`].
    #[must_use]
    pub fn from_euler(euler_degrees: Vector3) -> Self {
        let qx = Self::from_axis_angle(Vector3::X, euler_degrees.x);
        let qy = Self::from_axis_angle(Vector3::Y, euler_degrees.y);
        let qz = Self::from_axis_angle(Vector3::Z, euler_degrees.z);
        qz * qy * qx
    }

    /// Euler angles in degrees, inverse of [`Quaternion::from_euler`].
    ///
    /// Near the gimbal-lock pitch of ±90° the X and Z angles are not unique.
    #[must_use]
    pub fn euler(self) -> Vector3 {
        let Self { x, y, z, w } = self;
        let roll = (2.0 * (w * x + y * z)).atan2(1.0 - 2.0 * (x * x + y * y));
        let pitch = (2.0 * (w * y - x * z)).clamp(-1.0, 1.0).asin();
        let yaw = (2.0 * (w * z + x * y)).atan2(1.0 - 2.0 * (y * y + z * z));
        Vector3::new(roll.to_degrees(), pitch.to_degrees(), yaw.to_degrees())
    }

    /// Converts a rotation matrix into a quaternion.
    #[must_use]
    pub fn from_matrix3(m: &Matrix3) -> Self {
        let trace = m.m11 + m.m22 + m.m33;
        if trace > 0.0 {
            let s = (trace + 1.0).sqrt() * 2.0;
            Self::new(
                (m.m32 - m.m23) / s,
                (m.m13 - m.m31) / s,
                (m.m21 - m.m12) / s,
                0.25 * s,
            )
        } else if m.m11 > m.m22 && m.m11 > m.m33 {
            let s = (1.0 + m.m11 - m.m22 - m.m33).sqrt() * 2.0;
            Self::new(
                0.25 * s,
                (m.m12 + m.m21) / s,
                (m.m13 + m.m31) / s,
                (m.m32 - m.m23) / s,
            )
        } else if m.m22 > m.m33 {
            let s = (1.0 + m.m22 - m.m11 - m.m33).sqrt() * 2.0;
            Self::new(
                (m.m12 + m.m21) / s,
                0.25 * s,
                (m.m23 + m.m32) / s,
                (m.m13 - m.m31) / s,
            )
        } else {
            let s = (1.0 + m.m33 - m.m11 - m.m22).sqrt() * 2.0;
            Self::new(
                (m.m13 + m.m31) / s,
                (m.m23 + m.m32) / s,
                0.25 * s,
                (m.m21 - m.m12) / s,
            )
        }
    }

    #[must_use]
    pub fn to_matrix3(self) -> Matrix3 {
        let Self { x, y, z, w } = self;
        Matrix3::from_rows([
            [
                1.0 - 2.0 * (y * y + z * z),
                2.0 * (x * y - w * z),
                2.0 * (x * z + w * y),
            ],
            [
                2.0 * (x * y + w * z),
                1.0 - 2.0 * (x * x + z * z),
                2.0 * (y * z - w * x),
            ],
            [
                2.0 * (x * z - w * y),
                2.0 * (y * z + w * x),
                1.0 - 2.0 * (x * x + y * y),
            ],
        ])
    }

    #[must_use]
    pub fn to_matrix4(self) -> Matrix4 {
        Matrix4::from_quaternion(self)
    }

    #[inline]
    #[must_use]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    #[must_use]
    pub fn length_sq(self) -> f32 {
        self.dot(self)
    }

    #[must_use]
    pub fn length(self) -> f32 {
        self.length_sq().sqrt()
    }

    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Unit quaternion, or all zeros for a zero quaternion.
    #[must_use]
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len > 0.0 {
            self * (1.0 / len)
        } else {
            Self::new(0.0, 0.0, 0.0, 0.0)
        }
    }

    #[must_use]
    pub const fn conjugate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Multiplicative inverse.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::ZeroLength`] for a (near-)zero quaternion.
    pub fn inverse(self) -> Result<Self> {
        let len_sq = self.length_sq();
        if near_zero(len_sq) {
            return Err(MathError::ZeroLength);
        }
        Ok(self.conjugate() * (1.0 / len_sq))
    }

    /// Componentwise blend with double-cover correction. Not normalized.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let other = if self.dot(other) < 0.0 { -other } else { other };
        self + (other - self) * t
    }

    /// [`Quaternion::lerp`] followed by normalization.
    #[must_use]
    pub fn nlerp(self, other: Self, t: f32) -> Self {
        self.lerp(other, t).normalized()
    }

    /// Spherical interpolation along the shorter arc.
    ///
    /// Falls back to [`Quaternion::lerp`] when the two rotations are
    /// (anti-)parallel, where `sin(angle)` would vanish.
    #[must_use]
    pub fn slerp(self, other: Self, t: f32) -> Self {
        let mut cos = self.dot(other);
        let other = if cos < 0.0 {
            cos = -cos;
            -other
        } else {
            other
        };
        let angle = cos.clamp(-1.0, 1.0).acos();
        let sin = angle.sin();
        if sin <= EPSILON {
            return self.lerp(other, t);
        }
        let wa = ((1.0 - t) * angle).sin() / sin;
        let wb = (t * angle).sin() / sin;
        self * wa + other * wb
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl PartialEq for Quaternion {
    fn eq(&self, other: &Self) -> bool {
        compare(self.x, other.x)
            && compare(self.y, other.y)
            && compare(self.z, other.z)
            && compare(self.w, other.w)
    }
}

impl AbsDiffEq for Quaternion {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Quaternion {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

/// Hamilton product: `a * b` applies `b` first, then `a`.
impl Mul for Quaternion {
    type Output = Self;

    fn mul(self, b: Self) -> Self {
        let a = self;
        Self::new(
            a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
            a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
        )
    }
}

/// Rotates a vector: `v + w*t + q×t` with `t = 2 (q×v)`.
impl Mul<Vector3> for Quaternion {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Vector3 {
        let q = self.xyz();
        let t = q.cross(v) * 2.0;
        v + t * self.w + q.cross(t)
    }
}

impl Mul<f32> for Quaternion {
    type Output = Self;

    fn mul(self, s: f32) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s, self.w * s)
    }
}

impl Add for Quaternion {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.w + rhs.w)
    }
}

impl Sub for Quaternion {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z, self.w - rhs.w)
    }
}

impl Neg for Quaternion {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn identity_is_neutral() {
        let q = Quaternion::from_euler(Vector3::new(10.0, 20.0, 30.0));
        assert_eq!(q * Quaternion::IDENTITY, q);
        assert_eq!(Quaternion::IDENTITY * q, q);
    }

    #[test]
    fn rotates_vector_like_matrix() {
        let e = Vector3::new(30.0, 45.0, 60.0);
        let q = Quaternion::from_euler(e);
        let v = Vector3::new(1.0, -2.0, 0.5);
        assert_relative_eq!(q * v, Matrix3::rotation(e) * v, epsilon = 1e-5);
    }

    #[test]
    fn euler_roundtrip() {
        let e = Vector3::new(30.0, 45.0, 60.0);
        assert_relative_eq!(Quaternion::from_euler(e).euler(), e, epsilon = 1e-3);
    }

    #[test]
    fn from_euler_matches_matrix_rotation() {
        for e in [
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(90.0, 0.0, 0.0),
            Vector3::new(-120.0, 33.0, 170.0),
            Vector3::new(5.0, 89.0, -45.0),
        ] {
            assert_relative_eq!(
                Quaternion::from_euler(e).to_matrix3(),
                Matrix3::rotation(e),
                epsilon = 1e-5
            );
        }
    }

    #[test]
    fn matrix_roundtrip_all_branches() {
        // Each rotation drives a different branch of the trace test.
        for (axis, angle) in [
            (Vector3::Y, 30.0),
            (Vector3::X, 170.0),
            (Vector3::Y, 170.0),
            (Vector3::Z, 170.0),
        ] {
            let q = Quaternion::from_axis_angle(axis, angle);
            let back = Quaternion::from_matrix3(&q.to_matrix3());
            let back = if back.dot(q) < 0.0 { -back } else { back };
            assert_relative_eq!(back, q, epsilon = 1e-5);
        }
    }

    #[test]
    fn axis_angle_roundtrip() {
        let q = Quaternion::from_axis_angle(Vector3::new(0.0, 3.0, 0.0), 72.0);
        let (axis, angle) = q.to_axis_angle();
        assert_relative_eq!(axis, Vector3::Y, epsilon = 1e-5);
        assert_relative_eq!(angle, 72.0, epsilon = 1e-3);
        assert_eq!(Quaternion::IDENTITY.to_axis_angle().1, 0.0);
    }

    #[test]
    fn inverse_undoes_rotation() {
        let q = Quaternion::from_euler(Vector3::new(12.0, -80.0, 33.0));
        assert_relative_eq!(q * q.inverse().unwrap(), Quaternion::IDENTITY, epsilon = 1e-6);
        assert_eq!(
            Quaternion::new(0.0, 0.0, 0.0, 0.0).inverse(),
            Err(MathError::ZeroLength)
        );
    }

    #[test]
    fn slerp_endpoints_and_midpoint() {
        let a = Quaternion::IDENTITY;
        let b = Quaternion::from_axis_angle(Vector3::Z, 90.0);
        assert_eq!(a.slerp(b, 0.0), a);
        assert_eq!(a.slerp(b, 1.0), b);
        assert_relative_eq!(
            a.slerp(b, 0.5),
            Quaternion::from_axis_angle(Vector3::Z, 45.0),
            epsilon = 1e-6
        );
    }

    #[test]
    fn slerp_takes_short_path_for_negated_input() {
        let a = Quaternion::from_axis_angle(Vector3::Z, 10.0);
        let b = -Quaternion::from_axis_angle(Vector3::Z, 30.0);
        let mid = a.slerp(b, 0.5);
        assert_relative_eq!(mid, Quaternion::from_axis_angle(Vector3::Z, 20.0), epsilon = 1e-5);
    }

    #[test]
    fn slerp_parallel_falls_back_to_lerp() {
        let a = Quaternion::from_axis_angle(Vector3::X, 40.0);
        let r = a.slerp(a, 0.3);
        assert!(!r.x.is_nan());
        assert_eq!(r, a);
    }
}
