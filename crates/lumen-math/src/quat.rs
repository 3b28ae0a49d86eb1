// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use crate::{deg_to_rad, rad_to_deg, Mat4, Tolerance, Vec3, EPSILON, NORMALIZATION_TOLERANCE};

/// Quaternion stored as `(x, y, z, w)`, `w` being the scalar part.
///
/// * All angles are expressed in degrees.
/// * A quaternion represents a rotation when its length is ~1. Normalisation is
///   never automatic; call [`Quat::normalize`] after long multiply chains.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quat {
    data: [f32; 4],
}

impl Quat {
    /// Creates a quaternion from components.
    ///
    /// Callers should provide finite components; use
    /// [`Quat::from_axis_angle`] for axis/angle construction.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Returns the identity quaternion.
    pub const fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Returns the quaternion as an array.
    pub fn to_array(self) -> [f32; 4] {
        self.data
    }

    fn component(&self, idx: usize) -> f32 {
        self.data[idx]
    }

    /// X component of the vector part.
    pub fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y component of the vector part.
    pub fn y(&self) -> f32 {
        self.data[1]
    }

    /// Z component of the vector part.
    pub fn z(&self) -> f32 {
        self.data[2]
    }

    /// Scalar part.
    pub fn w(&self) -> f32 {
        self.data[3]
    }

    /// Four-component dot product.
    pub fn dot(&self, other: &Self) -> f32 {
        self.component(0) * other.component(0)
            + self.component(1) * other.component(1)
            + self.component(2) * other.component(2)
            + self.component(3) * other.component(3)
    }

    /// Squared norm.
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Norm.
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Multiplies every component by `scalar`.
    pub fn scale(&self, scalar: f32) -> Self {
        let [x, y, z, w] = self.data;
        Self::new(x * scalar, y * scalar, z * scalar, w * scalar)
    }

    fn add(&self, other: &Self) -> Self {
        let [ax, ay, az, aw] = self.data;
        let [bx, by, bz, bw] = other.data;
        Self::new(ax + bx, ay + by, az + bz, aw + bw)
    }

    /// Negates all four components (same rotation, opposite hemisphere).
    pub fn negate(&self) -> Self {
        self.scale(-1.0)
    }

    /// Rescales to unit length.
    ///
    /// Quaternions already within [`NORMALIZATION_TOLERANCE`] of unit length,
    /// and the zero quaternion, are returned unchanged.
    #[allow(clippy::float_cmp)]
    pub fn normalize(&self) -> Self {
        let len2 = self.length_squared();
        if len2 != 0.0 && (len2 - 1.0).abs() > NORMALIZATION_TOLERANCE {
            return self.scale(1.0 / len2.sqrt());
        }
        *self
    }

    /// Conjugate `(−x, −y, −z, w)`; the inverse of a unit quaternion.
    pub fn conjugate(&self) -> Self {
        let [x, y, z, w] = self.data;
        Self::new(-x, -y, -z, w)
    }

    /// Hamilton product of two quaternions (`self * other`).
    ///
    /// Operand order matters: applied to a vector, the result rotates by
    /// `other` first and then by `self`, matching `Mat4` composition
    /// (`(a * b).to_mat4() == a.to_mat4() * b.to_mat4()`).
    ///
    /// # Examples
    /// ```
    /// use lumen_math::{Quat, Vec3};
    /// let yaw = Quat::from_axis_angle(Vec3::UNIT_Y, 90.0);
    /// let pitch = Quat::from_axis_angle(Vec3::UNIT_X, 90.0);
    /// // Non-commutative: pitch*yaw is different
    /// assert_ne!(yaw.multiply(&pitch).to_array(), pitch.multiply(&yaw).to_array());
    /// ```
    pub fn multiply(&self, other: &Self) -> Self {
        let ax = self.component(0);
        let ay = self.component(1);
        let az = self.component(2);
        let aw = self.component(3);

        let bx = other.component(0);
        let by = other.component(1);
        let bz = other.component(2);
        let bw = other.component(3);

        Self::new(
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by - ax * bz + ay * bw + az * bx,
            aw * bz + ax * by - ay * bx + az * bw,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }

    /// Constructs a quaternion from a rotation axis and an angle in degrees.
    ///
    /// The axis is normalised internally. Returns the identity quaternion when
    /// the axis length is ≤ `EPSILON`.
    pub fn from_axis_angle(axis: Vec3, degrees: f32) -> Self {
        let len_sq = axis.length_squared();
        if len_sq <= EPSILON * EPSILON {
            return Self::identity();
        }
        let norm_axis = axis.scale(1.0 / len_sq.sqrt());
        let half = deg_to_rad(degrees) * 0.5;
        let (sin_half, cos_half) = half.sin_cos();
        let [x, y, z] = norm_axis.scale(sin_half).to_array();
        Self::new(x, y, z, cos_half)
    }

    /// Builds a rotation from Euler angles in degrees.
    ///
    /// `q = q_yaw(Y) * q_pitch(X) * q_roll(Z)`: roll is applied first, yaw last.
    pub fn from_euler(yaw: f32, pitch: f32, roll: f32) -> Self {
        Self::from_axis_angle(Vec3::UNIT_Y, yaw)
            .multiply(&Self::from_axis_angle(Vec3::UNIT_X, pitch))
            .multiply(&Self::from_axis_angle(Vec3::UNIT_Z, roll))
    }

    /// Builds a rotation from an orthonormal basis given as matrix columns.
    ///
    /// `x_axis`, `y_axis` and `z_axis` are where the rotation sends +X, +Y and
    /// +Z. Uses the trace when it is non-negative, otherwise branches on the
    /// largest diagonal element to stay well-conditioned.
    pub fn from_axes(x_axis: Vec3, y_axis: Vec3, z_axis: Vec3) -> Self {
        let [m00, m10, m20] = x_axis.to_array();
        let [m01, m11, m21] = y_axis.to_array();
        let [m02, m12, m22] = z_axis.to_array();

        let trace = m00 + m11 + m22;
        if trace >= 0.0 {
            let s = (trace + 1.0).sqrt();
            let w = 0.5 * s;
            let s = 0.5 / s;
            Self::new((m21 - m12) * s, (m02 - m20) * s, (m10 - m01) * s, w)
        } else if m00 > m11 && m00 > m22 {
            let s = (1.0 + m00 - m11 - m22).sqrt();
            let x = 0.5 * s;
            let s = 0.5 / s;
            Self::new(x, (m10 + m01) * s, (m02 + m20) * s, (m21 - m12) * s)
        } else if m11 > m22 {
            let s = (1.0 + m11 - m00 - m22).sqrt();
            let y = 0.5 * s;
            let s = 0.5 / s;
            Self::new((m10 + m01) * s, y, (m21 + m12) * s, (m02 - m20) * s)
        } else {
            let s = (1.0 + m22 - m00 - m11).sqrt();
            let z = 0.5 * s;
            let s = 0.5 / s;
            Self::new((m02 + m20) * s, (m21 + m12) * s, z, (m10 - m01) * s)
        }
    }

    /// Extracts the rotation of the upper-left 3×3 block of `m`.
    ///
    /// Basis columns are normalised first, so uniform or non-uniform scale in
    /// `m` does not leak into the result.
    pub fn from_rotation_matrix(m: &Mat4) -> Self {
        let col = |c: usize| Vec3::new(m.at(0, c), m.at(1, c), m.at(2, c)).normalize();
        Self::from_axes(col(0), col(1), col(2))
    }

    /// Shortest-arc rotation taking direction `from` onto direction `to`.
    ///
    /// Inputs need not be unit length. Parallel inputs yield identity;
    /// antiparallel inputs yield a 180° turn about an arbitrary perpendicular
    /// axis.
    pub fn from_cross(from: Vec3, to: Vec3) -> Self {
        let a = from.normalize();
        let b = to.normalize();
        let dot = a.dot(&b).clamp(-1.0, 1.0);
        if dot >= 1.0 - EPSILON {
            return Self::identity();
        }
        if dot <= -1.0 + EPSILON {
            let mut axis = Vec3::UNIT_X.cross(&a);
            if axis.length_squared() < EPSILON {
                axis = Vec3::UNIT_Y.cross(&a);
            }
            return Self::from_axis_angle(axis, 180.0);
        }
        Self::from_axis_angle(a.cross(&b), rad_to_deg(dot.acos()))
    }

    /// Spherical linear interpolation towards `end`.
    ///
    /// * Bit-identical inputs return `self`.
    /// * Takes the shorter arc by negating `end` when the dot product is negative.
    /// * Close orientations (`1 − dot ≤ 0.1`) use normalised linear weights.
    ///
    /// ```
    /// use lumen_math::{Quat, Vec3};
    /// let q = Quat::from_axis_angle(Vec3::UNIT_Z, 30.0);
    /// assert_eq!(q.slerp(&q, 0.7), q);
    /// ```
    pub fn slerp(&self, end: &Self, alpha: f32) -> Self {
        if self.equals_exact(end) {
            return *self;
        }
        let mut dot = self.dot(end);
        let end = if dot < 0.0 {
            dot = -dot;
            end.negate()
        } else {
            *end
        };

        if 1.0 - dot > 0.1 {
            let theta = dot.acos();
            let inv_sin = 1.0 / theta.sin();
            let s0 = ((1.0 - alpha) * theta).sin() * inv_sin;
            let s1 = (alpha * theta).sin() * inv_sin;
            self.scale(s0).add(&end.scale(s1))
        } else {
            self.scale(1.0 - alpha).add(&end.scale(alpha)).normalize()
        }
    }

    /// Rotates `v` by this (unit) quaternion: `q · v · q⁻¹`.
    pub fn rotate_vec3(&self, v: &Vec3) -> Vec3 {
        let u = Vec3::new(self.component(0), self.component(1), self.component(2));
        let t = u.cross(v).scale(2.0);
        v.add(&t.scale(self.component(3))).add(&u.cross(&t))
    }

    /// Converts the quaternion to a rotation matrix (column-major 4×4).
    pub fn to_mat4(&self) -> Mat4 {
        let q = self.normalize();
        let x = q.component(0);
        let y = q.component(1);
        let z = q.component(2);
        let w = q.component(3);

        let xx = x * x;
        let yy = y * y;
        let zz = z * z;
        let xy = x * y;
        let xz = x * z;
        let yz = y * z;
        let wx = w * x;
        let wy = w * y;
        let wz = w * z;

        Mat4::new([
            1.0 - 2.0 * (yy + zz),
            2.0 * (xy + wz),
            2.0 * (xz - wy),
            0.0,
            2.0 * (xy - wz),
            1.0 - 2.0 * (xx + zz),
            2.0 * (yz + wx),
            0.0,
            2.0 * (xz + wy),
            2.0 * (yz - wx),
            1.0 - 2.0 * (xx + yy),
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
        ])
    }

    /// Component-wise `==` on all four values.
    ///
    /// Note `q` and `−q` describe the same rotation but are not equal here.
    #[allow(clippy::float_cmp)]
    pub fn equals_exact(&self, other: &Self) -> bool {
        self.data == other.data
    }

    /// Component-wise comparison under `tolerance`.
    pub fn approx_eq(&self, other: &Self, tolerance: &Tolerance) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| tolerance.approx_eq(*a, *b))
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::identity()
    }
}

/// Converts a 4‑element `[f32; 4]` array `(x, y, z, w)` into a `Quat`.
/// The components are taken verbatim; normalisation is not enforced.
impl From<[f32; 4]> for Quat {
    fn from(value: [f32; 4]) -> Self {
        Self { data: value }
    }
}

impl core::ops::Mul for Quat {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl core::ops::MulAssign for Quat {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl core::ops::MulAssign<&Quat> for Quat {
    fn mul_assign(&mut self, rhs: &Quat) {
        *self = self.multiply(rhs);
    }
}
