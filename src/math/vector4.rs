use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq};

use crate::error::{MathError, Result};

use super::scalar::{compare, near_zero};
use super::Vector3;

/// A 4D vector. Used for homogeneous coordinates.
#[derive(Debug, Clone, Copy, Default)]
#[repr(C)]
pub struct Vector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vector4 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Extends a 3D vector with the given `w`.
    #[must_use]
    pub const fn from_vector3(v: Vector3, w: f32) -> Self {
        Self::new(v.x, v.y, v.z, w)
    }

    #[must_use]
    pub const fn xyz(self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    #[inline]
    #[must_use]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Cross product of the xyz parts. The `w` slot of the result is zero.
    #[must_use]
    pub fn cross3(self, other: Self) -> Self {
        Self::from_vector3(self.xyz().cross(other.xyz()), 0.0)
    }

    #[must_use]
    pub fn magnitude_sq(self) -> f32 {
        self.dot(self)
    }

    #[must_use]
    pub fn magnitude(self) -> f32 {
        self.magnitude_sq().sqrt()
    }

    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Unit vector in the same direction, or zero for a zero vector.
    #[must_use]
    pub fn normalized(self) -> Self {
        let len = self.magnitude();
        if len > 0.0 {
            self * (1.0 / len)
        } else {
            Self::ZERO
        }
    }

    /// # Errors
    ///
    /// Returns [`MathError::DivisionByZero`] for a near-zero divisor.
    pub fn checked_div(self, divisor: f32) -> Result<Self> {
        if near_zero(divisor) {
            return Err(MathError::DivisionByZero { divisor });
        }
        Ok(self * (1.0 / divisor))
    }

    /// # Errors
    ///
    /// Returns [`MathError::IndexOutOfRange`] for `index >= 4`.
    pub fn get(&self, index: usize) -> Result<f32> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            3 => Ok(self.w),
            _ => Err(MathError::IndexOutOfRange { index, len: 4 }),
        }
    }
}

impl PartialEq for Vector4 {
    fn eq(&self, other: &Self) -> bool {
        compare(self.x, other.x)
            && compare(self.y, other.y)
            && compare(self.z, other.z)
            && compare(self.w, other.w)
    }
}

impl AbsDiffEq for Vector4 {
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

impl RelativeEq for Vector4 {
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

impl Index<usize> for Vector4 {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("{}", MathError::IndexOutOfRange { index, len: 4 }),
        }
    }
}

impl IndexMut<usize> for Vector4 {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("{}", MathError::IndexOutOfRange { index, len: 4 }),
        }
    }
}

impl Add for Vector4 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.w + rhs.w)
    }
}

impl Sub for Vector4 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z, self.w - rhs.w)
    }
}

impl Mul<f32> for Vector4 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

impl Neg for Vector4 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross3_zeroes_w() {
        let a = Vector4::new(1.0, 0.0, 0.0, 7.0);
        let b = Vector4::new(0.0, 1.0, 0.0, 3.0);
        let c = a.cross3(b);
        assert_eq!(c, Vector4::new(0.0, 0.0, 1.0, 0.0));
    }

    #[test]
    fn normalize_includes_w() {
        let v = Vector4::new(0.0, 0.0, 0.0, 2.0).normalized();
        assert_eq!(v, Vector4::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(Vector4::ZERO.normalized().to_array(), [0.0; 4]);
    }

    #[test]
    fn get_out_of_range() {
        assert!(Vector4::ZERO.get(4).is_err());
        assert!(Vector4::ZERO.get(3).is_ok());
    }
}
