use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq};

use crate::error::{MathError, Result};

use super::scalar::{compare, near_zero};

/// A 3D vector used both for points and directions.
///
/// Equality is tolerance based: each component is compared with
/// [`compare`](super::compare).
#[derive(Debug, Clone, Copy, Default)]
#[repr(C)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    /// `(0, 0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// `(1, 1, 1)`.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    /// Unit X.
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    /// Unit Y.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    /// Unit Z.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    #[must_use]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    #[inline]
    #[must_use]
    pub const fn from_array(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    #[inline]
    #[must_use]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product.
    #[inline]
    #[must_use]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    #[inline]
    #[must_use]
    pub fn magnitude_sq(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    #[must_use]
    pub fn magnitude(self) -> f32 {
        self.magnitude_sq().sqrt()
    }

    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        (self - other).magnitude()
    }

    #[must_use]
    pub fn distance_sq(self, other: Self) -> f32 {
        (self - other).magnitude_sq()
    }

    /// Normalizes in place. A zero vector stays zero.
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Returns the unit vector in the same direction, or [`Vector3::ZERO`]
    /// when the magnitude is zero.
    #[must_use]
    pub fn normalized(self) -> Self {
        let len = self.magnitude();
        if len > 0.0 {
            let inv = 1.0 / len;
            Self::new(self.x * inv, self.y * inv, self.z * inv)
        } else {
            Self::ZERO
        }
    }

    /// Returns true when the squared magnitude is within tolerance of zero.
    #[must_use]
    pub fn is_near_zero(self) -> bool {
        near_zero(self.magnitude_sq())
    }

    /// Angle between two vectors in radians. Zero if either vector is zero.
    #[must_use]
    pub fn angle(self, other: Self) -> f32 {
        let denom = (self.magnitude_sq() * other.magnitude_sq()).sqrt();
        if denom > 0.0 {
            (self.dot(other) / denom).clamp(-1.0, 1.0).acos()
        } else {
            0.0
        }
    }

    /// Component of `self` parallel to `onto`. Zero when `onto` is zero.
    #[must_use]
    pub fn project(self, onto: Self) -> Self {
        let len_sq = onto.magnitude_sq();
        if len_sq > 0.0 {
            onto * (self.dot(onto) / len_sq)
        } else {
            Self::ZERO
        }
    }

    /// Component of `self` perpendicular to `onto`.
    #[must_use]
    pub fn perpendicular(self, onto: Self) -> Self {
        self - self.project(onto)
    }

    /// Reflects `self` about a plane with the given (unit) normal.
    #[must_use]
    pub fn reflect(self, normal: Self) -> Self {
        self - normal * (2.0 * self.dot(normal))
    }

    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }

    #[must_use]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }

    #[must_use]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    /// Divides every component by `divisor`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::DivisionByZero`] when `divisor` is within
    /// tolerance of zero.
    pub fn checked_div(self, divisor: f32) -> Result<Self> {
        if near_zero(divisor) {
            return Err(MathError::DivisionByZero { divisor });
        }
        Ok(Self::new(self.x / divisor, self.y / divisor, self.z / divisor))
    }

    /// Component by index.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::IndexOutOfRange`] for `index >= 3`.
    pub fn get(&self, index: usize) -> Result<f32> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            _ => Err(MathError::IndexOutOfRange { index, len: 3 }),
        }
    }

    /// Sets a component by index.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::IndexOutOfRange`] for `index >= 3`.
    pub fn set(&mut self, index: usize, value: f32) -> Result<()> {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            2 => self.z = value,
            _ => return Err(MathError::IndexOutOfRange { index, len: 3 }),
        }
        Ok(())
    }
}

impl PartialEq for Vector3 {
    fn eq(&self, other: &Self) -> bool {
        compare(self.x, other.x) && compare(self.y, other.y) && compare(self.z, other.z)
    }
}

impl AbsDiffEq for Vector3 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Vector3 {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

impl Index<usize> for Vector3 {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("{}", MathError::IndexOutOfRange { index, len: 3 }),
        }
    }
}

impl IndexMut<usize> for Vector3 {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("{}", MathError::IndexOutOfRange { index, len: 3 }),
        }
    }
}

impl Add for Vector3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vector3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Vector3> for f32 {
    type Output = Vector3;

    #[inline]
    fn mul(self, rhs: Vector3) -> Vector3 {
        rhs * self
    }
}

/// Componentwise (Hadamard) product.
impl Mul for Vector3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl Neg for Vector3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for Vector3 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from(a: [f32; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vector3> for [f32; 3] {
    fn from(v: Vector3) -> Self {
        v.to_array()
    }
}
