use std::fmt;
use std::ops::Mul;

use glam::{DMat3, DMat4, DVec3, DVec4};
use serde::{Deserialize, Serialize};

/// 4×4 double-precision homogeneous transform.
///
/// Storage is column-major (the `tileset.json` / glTF convention), so
/// `to_cols_array()[12..15]` is the translation. Every operation returns a
/// new value; nothing mutates in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Matrix4(DMat4);

impl Matrix4 {
    pub const IDENTITY: Self = Self(DMat4::IDENTITY);

    /// Result of inverting a singular or non-finite matrix.
    pub const NAN: Self = Self(DMat4::NAN);

    /// Build from a column-major `[f64; 16]`.
    pub fn from_cols_array(m: &[f64; 16]) -> Self {
        Self(DMat4::from_cols_array(m))
    }

    /// Column-major `[f64; 16]`.
    pub fn to_cols_array(&self) -> [f64; 16] {
        self.0.to_cols_array()
    }

    /// Build from four rows, written the way the matrix reads on paper.
    pub fn from_rows(rows: [[f64; 4]; 4]) -> Self {
        Self(DMat4::from_cols_array_2d(&rows).transpose())
    }

    /// Row-major nested array, the inverse of [`Matrix4::from_rows`].
    pub fn to_rows(&self) -> [[f64; 4]; 4] {
        self.0.transpose().to_cols_array_2d()
    }

    pub fn row(&self, index: usize) -> DVec4 {
        self.0.row(index)
    }

    pub fn col(&self, index: usize) -> DVec4 {
        self.0.col(index)
    }

    pub fn from_translation(t: DVec3) -> Self {
        Self(DMat4::from_translation(t))
    }

    pub fn from_scale(s: DVec3) -> Self {
        Self(DMat4::from_scale(s))
    }

    pub fn from_rotation_x(radians: f64) -> Self {
        Self(DMat4::from_rotation_x(radians))
    }

    pub fn from_rotation_y(radians: f64) -> Self {
        Self(DMat4::from_rotation_y(radians))
    }

    pub fn from_rotation_z(radians: f64) -> Self {
        Self(DMat4::from_rotation_z(radians))
    }

    /// Rotation about a unit `axis`.
    pub fn from_axis_angle(axis: DVec3, radians: f64) -> Self {
        Self(DMat4::from_axis_angle(axis, radians))
    }

    /// Pure rotation whose 3×3 block has the given rows.
    ///
    /// Translation is zero and the bottom row is `(0, 0, 0, 1)`.
    pub fn from_basis_rows(r0: DVec3, r1: DVec3, r2: DVec3) -> Self {
        Self(DMat4::from_mat3(DMat3::from_cols(r0, r1, r2).transpose()))
    }

    /// `a · b`: applied to a point, `b` acts first.
    pub fn multiply(a: &Matrix4, b: &Matrix4) -> Matrix4 {
        Self(a.0 * b.0)
    }

    pub fn transpose(&self) -> Self {
        Self(self.0.transpose())
    }

    pub fn determinant(&self) -> f64 {
        self.0.determinant()
    }

    /// General 4×4 inverse, or `None` when the matrix is singular or holds
    /// non-finite values.
    pub fn try_inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        Some(Self(self.0.inverse()))
    }

    /// General 4×4 inverse.
    ///
    /// Singular or non-finite input yields [`Matrix4::NAN`] rather than a
    /// panic; use [`Matrix4::try_inverse`] to detect that case.
    pub fn inverse(&self) -> Self {
        self.try_inverse().unwrap_or(Self::NAN)
    }

    /// Transform a point (w = 1). Projective matrices divide by w.
    pub fn transform_point3(&self, p: DVec3) -> DVec3 {
        if self.is_affine() {
            self.0.transform_point3(p)
        } else {
            self.0.project_point3(p)
        }
    }

    /// Transform a direction (w = 0); translation is ignored.
    pub fn transform_vector3(&self, v: DVec3) -> DVec3 {
        let r = self.0 * v.extend(0.0);
        r.truncate()
    }

    /// Translation column.
    pub fn translation(&self) -> DVec3 {
        self.0.w_axis.truncate()
    }

    /// Whether the bottom row is exactly `(0, 0, 0, 1)`.
    pub fn is_affine(&self) -> bool {
        self.row(3) == DVec4::W
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    pub fn abs_diff_eq(&self, other: &Matrix4, max_abs_diff: f64) -> bool {
        self.0.abs_diff_eq(other.0, max_abs_diff)
    }

    pub fn as_dmat4(&self) -> &DMat4 {
        &self.0
    }
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<DMat4> for Matrix4 {
    fn from(m: DMat4) -> Self {
        Self(m)
    }
}

impl From<Matrix4> for DMat4 {
    fn from(m: Matrix4) -> Self {
        m.0
    }
}

impl Mul for Matrix4 {
    type Output = Matrix4;

    fn mul(self, rhs: Matrix4) -> Matrix4 {
        Matrix4::multiply(&self, &rhs)
    }
}

impl fmt::Display for Matrix4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.to_rows().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "[{:>20.9} {:>20.9} {:>20.9} {:>20.9}]",
                row[0], row[1], row[2], row[3]
            )?;
        }
        Ok(())
    }
}
