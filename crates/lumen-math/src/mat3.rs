// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use tracing::debug;

use crate::{deg_to_rad, rad_to_deg, Mat4, MathError, Quat, Vec2, Vec3};

/// Column-major 3×3 matrix.
///
/// Serves two roles:
/// - a 2D homogeneous affine transform (translation in the third column), via
///   [`Mat3::transform_point`] / [`Mat3::transform_direction`];
/// - a 3D linear transform, via [`Mat3::transform_vec3`].
///
/// Element `(row, col)` lives at `data[col * 3 + row]`.
///
/// # Examples
/// ```
/// use lumen_math::{Mat3, Vec2};
/// let m = Mat3::translation(2.0, 3.0).rotated(90.0);
/// let p = m.transform_point(&Vec2::new(1.0, 0.0));
/// assert!((p.x() - 2.0).abs() < 1e-6 && (p.y() - 4.0).abs() < 1e-6);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat3 {
    data: [f32; 9],
}

impl Mat3 {
    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, // col 0
                0.0, 1.0, 0.0, // col 1
                0.0, 0.0, 1.0, // col 2
            ],
        }
    }

    /// Creates a matrix from column-major array data.
    pub const fn new(data: [f32; 9]) -> Self {
        Self { data }
    }

    /// Creates a matrix from its three columns.
    pub fn from_cols(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        let [a, b, c] = c0.to_array();
        let [d, e, f] = c1.to_array();
        let [g, h, i] = c2.to_array();
        Self::new([a, b, c, d, e, f, g, h, i])
    }

    /// Returns the matrix as a column-major array.
    pub fn to_array(self) -> [f32; 9] {
        self.data
    }

    /// Element at `row`, `col` (both `0..3`).
    pub fn at(&self, row: usize, col: usize) -> f32 {
        self.data[col * 3 + row]
    }

    /// 2D counter-clockwise rotation about the origin by `degrees`.
    pub fn rotation(degrees: f32) -> Self {
        let (s, c) = deg_to_rad(degrees).sin_cos();
        Self::new([
            c, s, 0.0, //
            -s, c, 0.0, //
            0.0, 0.0, 1.0,
        ])
    }

    /// 3D rotation about `axis` by `degrees` (via [`Quat::from_axis_angle`]).
    pub fn rotation_axis_angle(axis: Vec3, degrees: f32) -> Self {
        Self::from_mat4(&Quat::from_axis_angle(axis, degrees).to_mat4())
    }

    /// 3D rotation taking direction `from` onto direction `to`.
    pub fn rotation_between(from: Vec3, to: Vec3) -> Self {
        Self::from_mat4(&Quat::from_cross(from, to).to_mat4())
    }

    /// 2D translation matrix.
    pub const fn translation(x: f32, y: f32) -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, //
                0.0, 1.0, 0.0, //
                x, y, 1.0,
            ],
        }
    }

    /// 2D non-uniform scale matrix.
    pub const fn scaling(sx: f32, sy: f32) -> Self {
        Self {
            data: [
                sx, 0.0, 0.0, //
                0.0, sy, 0.0, //
                0.0, 0.0, 1.0,
            ],
        }
    }

    /// Upper-left 3×3 block of a 4×4 matrix.
    pub fn from_mat4(m: &Mat4) -> Self {
        let mut out = [0.0; 9];
        for col in 0..3 {
            for row in 0..3 {
                out[col * 3 + row] = m.at(row, col);
            }
        }
        Self::new(out)
    }

    /// Multiplies the matrix with another matrix (`self * rhs`).
    ///
    /// Applying the product to a vector applies `rhs` first.
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = [0.0; 9];
        for row in 0..3 {
            for col in 0..3 {
                let mut sum = 0.0;
                for k in 0..3 {
                    sum += self.at(row, k) * rhs.at(k, col);
                }
                out[col * 3 + row] = sum;
            }
        }
        Self::new(out)
    }

    /// Post-multiplies by a translation (`self * T`).
    pub fn translated(&self, x: f32, y: f32) -> Self {
        self.multiply(&Self::translation(x, y))
    }

    /// Post-multiplies by a 2D rotation (`self * R`).
    pub fn rotated(&self, degrees: f32) -> Self {
        self.multiply(&Self::rotation(degrees))
    }

    /// Post-multiplies by a 2D scale (`self * S`).
    pub fn scaled(&self, sx: f32, sy: f32) -> Self {
        self.multiply(&Self::scaling(sx, sy))
    }

    /// Adds `(x, y)` to the translation column, leaving the rest untouched.
    pub fn with_translation_added(&self, x: f32, y: f32) -> Self {
        let mut data = self.data;
        data[6] += x;
        data[7] += y;
        Self::new(data)
    }

    /// Multiplies `m00` and `m11` by `s`.
    pub fn scale_uniform(&self, s: f32) -> Self {
        let mut data = self.data;
        data[0] *= s;
        data[4] *= s;
        Self::new(data)
    }

    /// Transposed copy.
    pub fn transpose(&self) -> Self {
        let mut out = [0.0; 9];
        for row in 0..3 {
            for col in 0..3 {
                out[row * 3 + col] = self.at(row, col);
            }
        }
        Self::new(out)
    }

    /// Determinant by cofactor expansion along the first row.
    pub fn determinant(&self) -> f32 {
        let m = |r, c| self.at(r, c);
        m(0, 0) * (m(1, 1) * m(2, 2) - m(1, 2) * m(2, 1))
            - m(0, 1) * (m(1, 0) * m(2, 2) - m(1, 2) * m(2, 0))
            + m(0, 2) * (m(1, 0) * m(2, 1) - m(1, 1) * m(2, 0))
    }

    /// Inverse via the adjugate.
    ///
    /// Returns [`MathError::SingularMatrix`] when the determinant is exactly zero.
    #[allow(clippy::float_cmp)]
    pub fn inverse(&self) -> Result<Self, MathError> {
        let det = self.determinant();
        if det == 0.0 {
            debug!(det, "rejecting Mat3 inversion of singular matrix");
            return Err(MathError::SingularMatrix { determinant: det });
        }
        let m = |r, c| self.at(r, c);
        let inv = 1.0 / det;
        // adj[r][c] = cofactor[c][r]
        let adj = [
            m(1, 1) * m(2, 2) - m(1, 2) * m(2, 1),
            m(1, 2) * m(2, 0) - m(1, 0) * m(2, 2),
            m(1, 0) * m(2, 1) - m(1, 1) * m(2, 0),
            m(0, 2) * m(2, 1) - m(0, 1) * m(2, 2),
            m(0, 0) * m(2, 2) - m(0, 2) * m(2, 0),
            m(0, 1) * m(2, 0) - m(0, 0) * m(2, 1),
            m(0, 1) * m(1, 2) - m(0, 2) * m(1, 1),
            m(0, 2) * m(1, 0) - m(0, 0) * m(1, 2),
            m(0, 0) * m(1, 1) - m(0, 1) * m(1, 0),
        ];
        Ok(Self::new(adj.map(|v| v * inv)))
    }

    /// Transforms a 2D point (homogeneous `w = 1`).
    pub fn transform_point(&self, point: &Vec2) -> Vec2 {
        let (x, y) = (point.x(), point.y());
        Vec2::new(
            self.at(0, 0) * x + self.at(0, 1) * y + self.at(0, 2),
            self.at(1, 0) * x + self.at(1, 1) * y + self.at(1, 2),
        )
    }

    /// Transforms a 2D direction (ignores translation).
    pub fn transform_direction(&self, direction: &Vec2) -> Vec2 {
        let (x, y) = (direction.x(), direction.y());
        Vec2::new(
            self.at(0, 0) * x + self.at(0, 1) * y,
            self.at(1, 0) * x + self.at(1, 1) * y,
        )
    }

    /// Full 3×3 product `M * v`.
    pub fn transform_vec3(&self, v: &Vec3) -> Vec3 {
        let [x, y, z] = v.to_array();
        Vec3::new(
            self.at(0, 0) * x + self.at(0, 1) * y + self.at(0, 2) * z,
            self.at(1, 0) * x + self.at(1, 1) * y + self.at(1, 2) * z,
            self.at(2, 0) * x + self.at(2, 1) * y + self.at(2, 2) * z,
        )
    }

    /// 2D translation stored in the third column.
    pub fn extract_translation(&self) -> Vec2 {
        Vec2::new(self.data[6], self.data[7])
    }

    /// 2D rotation angle in degrees, `atan2(m10, m00)`.
    pub fn rotation_degrees(&self) -> f32 {
        rad_to_deg(self.at(1, 0).atan2(self.at(0, 0)))
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[f32; 9]> for Mat3 {
    fn from(value: [f32; 9]) -> Self {
        Self { data: value }
    }
}

impl core::ops::Mul for Mat3 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl core::ops::MulAssign for Mat3 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl core::ops::MulAssign<&Mat3> for Mat3 {
    fn mul_assign(&mut self, rhs: &Mat3) {
        *self = self.multiply(rhs);
    }
}
