use std::ops::{Add, Mul, Sub};

use approx::{AbsDiffEq, RelativeEq};

use crate::error::{MathError, Result};

use super::scalar::{compare, near_zero};
use super::{Matrix3, Quaternion, Vector3, Vector4};

/// A 4x4 matrix, column-vector convention (`M * v`).
///
/// Fields are named `m<row><col>` (1-based) and declared in column-major
/// memory order. The translation of an affine transform lives in
/// `m14, m24, m34`.
#[derive(Debug, Clone, Copy)]
#[repr(C)]
pub struct Matrix4 {
    pub m11: f32,
    pub m21: f32,
    pub m31: f32,
    pub m41: f32,
    pub m12: f32,
    pub m22: f32,
    pub m32: f32,
    pub m42: f32,
    pub m13: f32,
    pub m23: f32,
    pub m33: f32,
    pub m43: f32,
    pub m14: f32,
    pub m24: f32,
    pub m34: f32,
    pub m44: f32,
}

impl Matrix4 {
    pub const IDENTITY: Self = Self::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);
    pub const ZERO: Self = Self::from_rows([[0.0; 4]; 4]);

    #[must_use]
    pub const fn from_rows(r: [[f32; 4]; 4]) -> Self {
        Self {
            m11: r[0][0],
            m21: r[1][0],
            m31: r[2][0],
            m41: r[3][0],
            m12: r[0][1],
            m22: r[1][1],
            m32: r[2][1],
            m42: r[3][1],
            m13: r[0][2],
            m23: r[1][2],
            m33: r[2][2],
            m43: r[3][2],
            m14: r[0][3],
            m24: r[1][3],
            m34: r[2][3],
            m44: r[3][3],
        }
    }

    /// Builds a matrix from column-major elements.
    #[must_use]
    pub const fn from_array(a: [f32; 16]) -> Self {
        Self::from_rows([
            [a[0], a[4], a[8], a[12]],
            [a[1], a[5], a[9], a[13]],
            [a[2], a[6], a[10], a[14]],
            [a[3], a[7], a[11], a[15]],
        ])
    }

    /// Elements in column-major order.
    #[must_use]
    pub const fn as_array(&self) -> [f32; 16] {
        [
            self.m11, self.m21, self.m31, self.m41, self.m12, self.m22, self.m32, self.m42,
            self.m13, self.m23, self.m33, self.m43, self.m14, self.m24, self.m34, self.m44,
        ]
    }

    #[must_use]
    pub const fn to_rows(&self) -> [[f32; 4]; 4] {
        [
            [self.m11, self.m12, self.m13, self.m14],
            [self.m21, self.m22, self.m23, self.m24],
            [self.m31, self.m32, self.m33, self.m34],
            [self.m41, self.m42, self.m43, self.m44],
        ]
    }

    /// # Errors
    ///
    /// Returns [`MathError::IndexOutOfRange`] when either index is `>= 4`.
    pub fn get(&self, row: usize, col: usize) -> Result<f32> {
        check_index(row)?;
        check_index(col)?;
        Ok(self.to_rows()[row][col])
    }

    /// # Errors
    ///
    /// Returns [`MathError::IndexOutOfRange`] when either index is `>= 4`.
    pub fn set(&mut self, row: usize, col: usize, value: f32) -> Result<()> {
        check_index(row)?;
        check_index(col)?;
        let mut rows = self.to_rows();
        rows[row][col] = value;
        *self = Self::from_rows(rows);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`MathError::IndexOutOfRange`] for `index >= 4`.
    pub fn row(&self, index: usize) -> Result<Vector4> {
        check_index(index)?;
        let r = self.to_rows()[index];
        Ok(Vector4::new(r[0], r[1], r[2], r[3]))
    }

    /// # Errors
    ///
    /// Returns [`MathError::IndexOutOfRange`] for `index >= 4`.
    pub fn column(&self, index: usize) -> Result<Vector4> {
        check_index(index)?;
        let a = self.as_array();
        let i = index * 4;
        Ok(Vector4::new(a[i], a[i + 1], a[i + 2], a[i + 3]))
    }

    pub fn transpose(&mut self) {
        *self = self.transposed();
    }

    #[must_use]
    pub const fn transposed(&self) -> Self {
        Self::from_array([
            self.m11, self.m12, self.m13, self.m14, self.m21, self.m22, self.m23, self.m24,
            self.m31, self.m32, self.m33, self.m34, self.m41, self.m42, self.m43, self.m44,
        ])
    }

    /// Determinant by cofactor expansion along the first row.
    #[must_use]
    pub fn determinant(&self) -> f32 {
        let rows = self.to_rows();
        (0..4)
            .map(|c| rows[0][c] * cofactor_of(&rows, 0, c))
            .sum()
    }

    /// Determinant of the 3x3 matrix left after removing `row` and `col`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::IndexOutOfRange`] when either index is `>= 4`.
    pub fn minor(&self, row: usize, col: usize) -> Result<f32> {
        check_index(row)?;
        check_index(col)?;
        Ok(minor_of(&self.to_rows(), row, col))
    }

    #[must_use]
    pub fn cofactor(&self) -> Self {
        let rows = self.to_rows();
        let mut out = [[0.0; 4]; 4];
        for (r, out_row) in out.iter_mut().enumerate() {
            for (c, cell) in out_row.iter_mut().enumerate() {
                *cell = cofactor_of(&rows, r, c);
            }
        }
        Self::from_rows(out)
    }

    #[must_use]
    pub fn adjugate(&self) -> Self {
        self.cofactor().transposed()
    }

    /// Upper-left 3x3 block.
    #[must_use]
    pub const fn to_matrix3(&self) -> Matrix3 {
        Matrix3::from_rows([
            [self.m11, self.m12, self.m13],
            [self.m21, self.m22, self.m23],
            [self.m31, self.m32, self.m33],
        ])
    }

    /// Translation column of an affine transform.
    #[must_use]
    pub const fn translation_part(&self) -> Vector3 {
        Vector3::new(self.m14, self.m24, self.m34)
    }

    #[must_use]
    pub fn is_orthogonal(&self) -> bool {
        *self * self.transposed() == Self::IDENTITY
    }

    /// True when the matrix only translates.
    #[must_use]
    pub fn is_translation(&self) -> bool {
        self.to_matrix3() == Matrix3::IDENTITY
            && compare(self.m41, 0.0)
            && compare(self.m42, 0.0)
            && compare(self.m43, 0.0)
            && compare(self.m44, 1.0)
    }

    /// Inverse matrix.
    ///
    /// Pure translations negate the translation column, orthogonal matrices
    /// are transposed, and the general case uses the adjugate.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::NotInvertible`] when the determinant is within
    /// tolerance of zero.
    pub fn inverse(&self) -> Result<Self> {
        let determinant = self.determinant();
        if near_zero(determinant) {
            tracing::debug!(determinant, "singular 4x4 matrix");
            return Err(MathError::NotInvertible { determinant });
        }
        if self.is_translation() {
            return Ok(Self::translation(-self.translation_part()));
        }
        if self.is_orthogonal() {
            return Ok(self.transposed());
        }
        Ok(self.adjugate() * (1.0 / determinant))
    }

    #[must_use]
    pub const fn translation(t: Vector3) -> Self {
        Self::from_rows([
            [1.0, 0.0, 0.0, t.x],
            [0.0, 1.0, 0.0, t.y],
            [0.0, 0.0, 1.0, t.z],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    #[must_use]
    pub const fn scale(s: Vector3) -> Self {
        Self::from_rows([
            [s.x, 0.0, 0.0, 0.0],
            [0.0, s.y, 0.0, 0.0],
            [0.0, 0.0, s.z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Embeds a 3x3 linear map; no translation.
    #[must_use]
    pub const fn from_matrix3(m: Matrix3) -> Self {
        Self::from_rows([
            [m.m11, m.m12, m.m13, 0.0],
            [m.m21, m.m22, m.m23, 0.0],
            [m.m31, m.m32, m.m33, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation from Euler angles in degrees (`Rz * Ry * Rx`).
    #[must_use]
    pub fn rotation(euler_degrees: Vector3) -> Self {
        Self::from_matrix3(Matrix3::rotation(euler_degrees))
    }

    #[must_use]
    pub fn from_quaternion(q: Quaternion) -> Self {
        Self::from_matrix3(q.to_matrix3())
    }

    /// `T * R * S`: scale, then rotate, then translate.
    #[must_use]
    pub fn transform(scale: Vector3, rotation: Quaternion, translation: Vector3) -> Self {
        Self::translation(translation) * Self::from_quaternion(rotation) * Self::scale(scale)
    }

    /// [`Matrix4::transform`] with the rotation given as Euler degrees.
    #[must_use]
    pub fn transform_euler(scale: Vector3, euler_degrees: Vector3, translation: Vector3) -> Self {
        Self::translation(translation) * Self::rotation(euler_degrees) * Self::scale(scale)
    }

    /// Transforms a point (`w = 1`).
    #[must_use]
    pub fn transform_point(&self, p: Vector3) -> Vector3 {
        (*self * Vector4::from_vector3(p, 1.0)).xyz()
    }

    /// Transforms a direction (`w = 0`); translation is ignored.
    #[must_use]
    pub fn transform_vector(&self, v: Vector3) -> Vector3 {
        (*self * Vector4::from_vector3(v, 0.0)).xyz()
    }
}

fn check_index(index: usize) -> Result<()> {
    if index < 4 {
        Ok(())
    } else {
        Err(MathError::IndexOutOfRange { index, len: 4 })
    }
}

fn minor_of(rows: &[[f32; 4]; 4], row: usize, col: usize) -> f32 {
    let mut sub = [[0.0_f32; 3]; 3];
    let mut sr = 0;
    for (r, src) in rows.iter().enumerate() {
        if r == row {
            continue;
        }
        let mut sc = 0;
        for (c, value) in src.iter().enumerate() {
            if c == col {
                continue;
            }
            sub[sr][sc] = *value;
            sc += 1;
        }
        sr += 1;
    }
    Matrix3::from_rows(sub).determinant()
}

fn cofactor_of(rows: &[[f32; 4]; 4], row: usize, col: usize) -> f32 {
    let sign = if (row + col) % 2 == 0 { 1.0 } else { -1.0 };
    sign * minor_of(rows, row, col)
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl PartialEq for Matrix4 {
    fn eq(&self, other: &Self) -> bool {
        self.as_array()
            .iter()
            .zip(other.as_array().iter())
            .all(|(a, b)| compare(*a, *b))
    }
}

impl AbsDiffEq for Matrix4 {
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

impl RelativeEq for Matrix4 {
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

impl Mul for Matrix4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let a = self.to_rows();
        let b = rhs.to_rows();
        let mut out = [[0.0; 4]; 4];
        for (r, out_row) in out.iter_mut().enumerate() {
            for (c, cell) in out_row.iter_mut().enumerate() {
                *cell = (0..4).map(|k| a[r][k] * b[k][c]).sum();
            }
        }
        Self::from_rows(out)
    }
}

impl Mul<Vector4> for Matrix4 {
    type Output = Vector4;

    fn mul(self, v: Vector4) -> Vector4 {
        let r = self.to_rows();
        let dot = |row: [f32; 4]| row[0] * v.x + row[1] * v.y + row[2] * v.z + row[3] * v.w;
        Vector4::new(dot(r[0]), dot(r[1]), dot(r[2]), dot(r[3]))
    }
}

impl Mul<f32> for Matrix4 {
    type Output = Self;

    fn mul(self, s: f32) -> Self {
        Self::from_array(self.as_array().map(|v| v * s))
    }
}

impl Add for Matrix4 {
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

impl Sub for Matrix4 {
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
