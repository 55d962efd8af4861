use std::ops::{Add, Mul, Sub};

use approx::{AbsDiffEq, RelativeEq};

use crate::error::{MathError, Result};

use super::scalar::{compare, near_zero};
use super::Vector3;

/// A 3x3 matrix, column-vector convention (`M * v`).
///
/// Fields are named `m<row><col>` (1-based) and declared in column-major
/// memory order, so the struct is layout compatible with `[f32; 9]` as
/// used by OpenGL-style APIs and `nalgebra`.
#[derive(Debug, Clone, Copy)]
#[repr(C)]
pub struct Matrix3 {
    pub m11: f32,
    pub m21: f32,
    pub m31: f32,
    pub m12: f32,
    pub m22: f32,
    pub m32: f32,
    pub m13: f32,
    pub m23: f32,
    pub m33: f32,
}

impl Matrix3 {
    pub const IDENTITY: Self = Self::from_rows([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
    pub const ZERO: Self = Self::from_rows([[0.0; 3]; 3]);

    #[must_use]
    pub const fn from_rows(r: [[f32; 3]; 3]) -> Self {
        Self {
            m11: r[0][0],
            m21: r[1][0],
            m31: r[2][0],
            m12: r[0][1],
            m22: r[1][1],
            m32: r[2][1],
            m13: r[0][2],
            m23: r[1][2],
            m33: r[2][2],
        }
    }

    #[must_use]
    pub const fn from_columns(c0: Vector3, c1: Vector3, c2: Vector3) -> Self {
        Self::from_rows([[c0.x, c1.x, c2.x], [c0.y, c1.y, c2.y], [c0.z, c1.z, c2.z]])
    }

    /// Builds a matrix from column-major elements.
    #[must_use]
    pub const fn from_array(a: [f32; 9]) -> Self {
        Self {
            m11: a[0],
            m21: a[1],
            m31: a[2],
            m12: a[3],
            m22: a[4],
            m32: a[5],
            m13: a[6],
            m23: a[7],
            m33: a[8],
        }
    }

    /// Elements in column-major order.
    #[must_use]
    pub const fn as_array(&self) -> [f32; 9] {
        [
            self.m11, self.m21, self.m31, self.m12, self.m22, self.m32, self.m13, self.m23,
            self.m33,
        ]
    }

    #[must_use]
    pub const fn to_rows(&self) -> [[f32; 3]; 3] {
        [
            [self.m11, self.m12, self.m13],
            [self.m21, self.m22, self.m23],
            [self.m31, self.m32, self.m33],
        ]
    }

    /// Element at zero-based `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::IndexOutOfRange`] when either index is `>= 3`.
    pub fn get(&self, row: usize, col: usize) -> Result<f32> {
        check_index(row)?;
        check_index(col)?;
        Ok(self.as_array()[col * 3 + row])
    }

    /// Sets the element at zero-based `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::IndexOutOfRange`] when either index is `>= 3`.
    pub fn set(&mut self, row: usize, col: usize, value: f32) -> Result<()> {
        check_index(row)?;
        check_index(col)?;
        let mut a = self.as_array();
        a[col * 3 + row] = value;
        *self = Self::from_array(a);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`MathError::IndexOutOfRange`] for `index >= 3`.
    pub fn row(&self, index: usize) -> Result<Vector3> {
        check_index(index)?;
        Ok(Vector3::from_array(self.to_rows()[index]))
    }

    /// # Errors
    ///
    /// Returns [`MathError::IndexOutOfRange`] for `index >= 3`.
    pub fn column(&self, index: usize) -> Result<Vector3> {
        check_index(index)?;
        Ok(self.columns()[index])
    }

    /// The three columns. For a rotation these are the rotated basis axes.
    #[must_use]
    pub const fn columns(&self) -> [Vector3; 3] {
        [
            Vector3::new(self.m11, self.m21, self.m31),
            Vector3::new(self.m12, self.m22, self.m32),
            Vector3::new(self.m13, self.m23, self.m33),
        ]
    }

    /// Transposes in place.
    pub fn transpose(&mut self) {
        *self = self.transposed();
    }

    #[must_use]
    pub const fn transposed(&self) -> Self {
        Self::from_array([
            self.m11, self.m12, self.m13, self.m21, self.m22, self.m23, self.m31, self.m32,
            self.m33,
        ])
    }

    #[must_use]
    pub fn determinant(&self) -> f32 {
        self.m11 * (self.m22 * self.m33 - self.m23 * self.m32)
            - self.m12 * (self.m21 * self.m33 - self.m23 * self.m31)
            + self.m13 * (self.m21 * self.m32 - self.m22 * self.m31)
    }

    /// Determinant of the 2x2 matrix left after removing `row` and `col`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::IndexOutOfRange`] when either index is `>= 3`.
    pub fn minor(&self, row: usize, col: usize) -> Result<f32> {
        check_index(row)?;
        check_index(col)?;
        Ok(minor_of(&self.to_rows(), row, col))
    }

    /// Matrix of cofactors `(-1)^(r+c) * minor(r, c)`.
    #[must_use]
    pub fn cofactor(&self) -> Self {
        let rows = self.to_rows();
        let mut out = [[0.0; 3]; 3];
        for (r, out_row) in out.iter_mut().enumerate() {
            for (c, cell) in out_row.iter_mut().enumerate() {
                let sign = if (r + c) % 2 == 0 { 1.0 } else { -1.0 };
                *cell = sign * minor_of(&rows, r, c);
            }
        }
        Self::from_rows(out)
    }

    /// Transpose of the cofactor matrix.
    #[must_use]
    pub fn adjugate(&self) -> Self {
        self.cofactor().transposed()
    }

    /// Returns true when `M * Mᵀ` is the identity within tolerance.
    #[must_use]
    pub fn is_orthogonal(&self) -> bool {
        *self * self.transposed() == Self::IDENTITY
    }

    /// Inverse matrix.
    ///
    /// Orthogonal matrices are inverted by transposition; everything else
    /// goes through the adjugate.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::NotInvertible`] when the determinant is within
    /// tolerance of zero.
    pub fn inverse(&self) -> Result<Self> {
        let determinant = self.determinant();
        if near_zero(determinant) {
            tracing::debug!(determinant, "singular 3x3 matrix");
            return Err(MathError::NotInvertible { determinant });
        }
        if self.is_orthogonal() {
            return Ok(self.transposed());
        }
        Ok(self.adjugate() * (1.0 / determinant))
    }

    /// Rotation about +X by `degrees`.
    #[must_use]
    pub fn rotation_x(degrees: f32) -> Self {
        let (s, c) = degrees.to_radians().sin_cos();
        Self::from_rows([[1.0, 0.0, 0.0], [0.0, c, -s], [0.0, s, c]])
    }

    /// Rotation about +Y by `degrees`.
    #[must_use]
    pub fn rotation_y(degrees: f32) -> Self {
        let (s, c) = degrees.to_radians().sin_cos();
        Self::from_rows([[c, 0.0, s], [0.0, 1.0, 0.0], [-s, 0.0, c]])
    }

    /// Rotation about +Z by `degrees`.
    #[must_use]
    pub fn rotation_z(degrees: f32) -> Self {
        let (s, c) = degrees.to_radians().sin_cos();
        Self::from_rows([[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Rotation from Euler angles in degrees, composed as `Rz * Ry * Rx`
    /// (X is applied first).
    #[must_use]
    pub fn rotation(euler_degrees: Vector3) -> Self {
        Self::rotation_z(euler_degrees.z)
            * Self::rotation_y(euler_degrees.y)
            * Self::rotation_x(euler_degrees.x)
    }

    /// Rotation of `degrees` about `axis`. A zero axis yields the identity.
    #[must_use]
    pub fn axis_angle(axis: Vector3, degrees: f32) -> Self {
        let a = axis.normalized();
        if a.magnitude_sq() == 0.0 {
            return Self::IDENTITY;
        }
        let (s, c) = degrees.to_radians().sin_cos();
        let t = 1.0 - c;
        Self::from_rows([
            [t * a.x * a.x + c, t * a.x * a.y - s * a.z, t * a.x * a.z + s * a.y],
            [t * a.x * a.y + s * a.z, t * a.y * a.y + c, t * a.y * a.z - s * a.x],
            [t * a.x * a.z - s * a.y, t * a.y * a.z + s * a.x, t * a.z * a.z + c],
        ])
    }

    /// Non-uniform scale.
    #[must_use]
    pub const fn scale(s: Vector3) -> Self {
        Self::from_rows([[s.x, 0.0, 0.0], [0.0, s.y, 0.0], [0.0, 0.0, s.z]])
    }
}

fn check_index(index: usize) -> Result<()> {
    if index < 3 {
        Ok(())
    } else {
        Err(MathError::IndexOutOfRange { index, len: 3 })
    }
}

fn minor_of(rows: &[[f32; 3]; 3], row: usize, col: usize) -> f32 {
    let mut m = [0.0_f32; 4];
    let mut k = 0;
    for (r, src) in rows.iter().enumerate() {
        if r == row {
            continue;
        }
        for (c, value) in src.iter().enumerate() {
            if c == col {
                continue;
            }
            m[k] = *value;
            k += 1;
        }
    }
    m[0] * m[3] - m[1] * m[2]
}

impl Default for Matrix3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl PartialEq for Matrix3 {
    fn eq(&self, other: &Self) -> bool {
        self.as_array()
            .iter()
            .zip(other.as_array().iter())
            .all(|(a, b)| compare(*a, *b))
    }
}

impl AbsDiffEq for Matrix3 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.as_array()
            .iter()
            .zip(other.as_array().iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Matrix3 {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.as_array()
            .iter()
            .zip(other.as_array().iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl Mul for Matrix3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let a = self.to_rows();
        let b = rhs.to_rows();
        let mut out = [[0.0; 3]; 3];
        for (r, out_row) in out.iter_mut().enumerate() {
            for (c, cell) in out_row.iter_mut().enumerate() {
                *cell = a[r][0] * b[0][c] + a[r][1] * b[1][c] + a[r][2] * b[2][c];
            }
        }
        Self::from_rows(out)
    }
}

impl Mul<Vector3> for Matrix3 {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Vector3 {
        Vector3::new(
            self.m11 * v.x + self.m12 * v.y + self.m13 * v.z,
            self.m21 * v.x + self.m22 * v.y + self.m23 * v.z,
            self.m31 * v.x + self.m32 * v.y + self.m33 * v.z,
        )
    }
}

impl Mul<f32> for Matrix3 {
    type Output = Self;

    fn mul(self, s: f32) -> Self {
        Self::from_array(self.as_array().map(|v| v * s))
    }
}

impl Add for Matrix3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let b = rhs.as_array();
        let mut a = self.as_array();
        for (x, y) in a.iter_mut().zip(b) {
            *x += y;
        }
        Self::from_array(a)
    }
}

impl Sub for Matrix3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let b = rhs.as_array();
        let mut a = self.as_array();
        for (x, y) in a.iter_mut().zip(b) {
            *x -= y;
        }
        Self::from_array(a)
    }
}
