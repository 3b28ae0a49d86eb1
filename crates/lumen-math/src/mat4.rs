// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use tracing::debug;

use crate::{deg_to_rad, Mat3, MathError, Quat, Vec3, Vec4};

/// Screen rectangle used by [`Mat4::project`] and [`Mat4::unproject`].
///
/// Window coordinates have their origin at `(x, y)`; depth maps to `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    /// Left edge in window units.
    pub x: f32,
    /// Bottom edge in window units.
    pub y: f32,
    /// Width in window units.
    pub width: f32,
    /// Height in window units.
    pub height: f32,
}

impl Viewport {
    /// Creates a viewport rectangle.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Column‑major 4×4 matrix.
///
/// - Element `(row, col)` lives at `data[col * 4 + row]`; translation occupies
///   the last column.
/// - Column-vector convention: `M * v`, so `(A * B) * v` applies `B` first.
/// - Perspective terms are preserved; [`Mat4::transform_point`] assumes an
///   affine matrix while [`Mat4::project_point`] performs the `w` divide.
///
/// # Examples
/// Basic transformations:
/// ```
/// use lumen_math::{Mat4, Vec3};
/// let t = Mat4::translation(5.0, -3.0, 2.0);
/// let p = Vec3::new(2.0, 4.0, -1.0);
/// assert_eq!(t.transform_point(&p).to_array(), [7.0, 1.0, 1.0]);
/// ```
///
/// # Precision
/// - Uses `f32`; repeated multiplies and transforms will accumulate rounding.
/// - Rotation helpers are consistent with [`Quat`] conversions (`from_quat`).
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat4 {
    data: [f32; 16],
}

impl Mat4 {
    /// Returns the identity matrix.
    ///
    /// Column-major layout with ones on the diagonal.
    pub const fn identity() -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0, // col 0
                0.0, 1.0, 0.0, 0.0, // col 1
                0.0, 0.0, 1.0, 0.0, // col 2
                0.0, 0.0, 0.0, 1.0, // col 3
            ],
        }
    }

    /// Builds a translation matrix.
    ///
    /// Column-major layout: translation occupies the last column.
    pub const fn translation(tx: f32, ty: f32, tz: f32) -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0, // col 0
                0.0, 1.0, 0.0, 0.0, // col 1
                0.0, 0.0, 1.0, 0.0, // col 2
                tx, ty, tz, 1.0, // col 3 (translation)
            ],
        }
    }

    /// Builds a non-uniform scale matrix.
    pub const fn scale(sx: f32, sy: f32, sz: f32) -> Self {
        Self {
            data: [
                sx, 0.0, 0.0, 0.0, // col 0
                0.0, sy, 0.0, 0.0, // col 1
                0.0, 0.0, sz, 0.0, // col 2
                0.0, 0.0, 0.0, 1.0, // col 3
            ],
        }
    }

    /// Scale on the diagonal and translation in the last column.
    ///
    /// Equivalent to `translation(t) * scale(s)`.
    pub fn translation_and_scale(translation: Vec3, scale: Vec3) -> Self {
        let [tx, ty, tz] = translation.to_array();
        let [sx, sy, sz] = scale.to_array();
        Self::new([
            sx, 0.0, 0.0, 0.0, // col 0
            0.0, sy, 0.0, 0.0, // col 1
            0.0, 0.0, sz, 0.0, // col 2
            tx, ty, tz, 1.0, // col 3
        ])
    }

    /// Builds a rotation matrix from an axis and an angle in degrees.
    ///
    /// The axis is normalized internally; a zero-length axis (or zero angle)
    /// yields the identity rotation.
    pub fn rotation_axis_angle(axis: Vec3, degrees: f32) -> Self {
        Self::from_quat(&Quat::from_axis_angle(axis, degrees))
    }

    /// Builds a rotation matrix around the X axis by `degrees`.
    pub fn rotation_x(degrees: f32) -> Self {
        let (s, c) = deg_to_rad(degrees).sin_cos();
        Self::new([
            1.0, 0.0, 0.0, 0.0,
            0.0, c,   s,   0.0,
            0.0, -s,  c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Builds a rotation matrix around the Y axis by `degrees`.
    pub fn rotation_y(degrees: f32) -> Self {
        let (s, c) = deg_to_rad(degrees).sin_cos();
        Self::new([
            c,   0.0, -s,  0.0,
            0.0, 1.0, 0.0, 0.0,
            s,   0.0, c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Builds a rotation matrix around the Z axis by `degrees`.
    pub fn rotation_z(degrees: f32) -> Self {
        let (s, c) = deg_to_rad(degrees).sin_cos();
        Self::new([
            c,   s,   0.0, 0.0,
            -s,  c,   0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Constructs a matrix from a quaternion.
    ///
    /// This simply forwards to [`Quat::to_mat4`].
    pub fn from_quat(q: &Quat) -> Self {
        q.to_mat4()
    }

    /// Builds a rotation matrix from Euler angles in degrees.
    ///
    /// Ordering: `R = R_y(yaw) * R_x(pitch) * R_z(roll)`, matching
    /// [`Quat::from_euler`].
    ///
    /// - `yaw` rotates about +Y
    /// - `pitch` rotates about +X
    /// - `roll` rotates about +Z
    ///
    /// # Examples
    /// ```
    /// use lumen_math::{Mat4, Vec3};
    /// // Yaw=90°: +Z maps to +X
    /// let r = Mat4::rotation_from_euler(90.0, 0.0, 0.0);
    /// let v = r.transform_direction(&Vec3::UNIT_Z);
    /// assert!((v.x() - 1.0).abs() < 1e-6);
    /// ```
    pub fn rotation_from_euler(yaw: f32, pitch: f32, roll: f32) -> Self {
        Self::rotation_y(yaw)
            .multiply(&Self::rotation_x(pitch))
            .multiply(&Self::rotation_z(roll))
    }

    /// Rotation taking direction `from` onto direction `to`.
    pub fn rotation_between(from: Vec3, to: Vec3) -> Self {
        Self::from_quat(&Quat::from_cross(from, to))
    }

    /// Right-handed perspective projection (OpenGL clip conventions).
    ///
    /// `fov_y` is the full vertical field of view in degrees. Points at
    /// `z = -near` map to NDC depth −1 and `z = -far` to +1.
    pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        let f = 1.0 / (deg_to_rad(fov_y) * 0.5).tan();
        let range = near - far;
        Self::new([
            f / aspect, 0.0, 0.0,                      0.0,
            0.0,        f,   0.0,                      0.0,
            0.0,        0.0, (far + near) / range,     -1.0,
            0.0,        0.0, 2.0 * far * near / range, 0.0,
        ])
    }

    /// Orthographic projection (glOrtho).
    pub fn orthographic(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let x = 2.0 / (right - left);
        let y = 2.0 / (top - bottom);
        let z = -2.0 / (far - near);
        let tx = -(right + left) / (right - left);
        let ty = -(top + bottom) / (top - bottom);
        let tz = -(far + near) / (far - near);
        Self::new([
            x,   0.0, 0.0, 0.0,
            0.0, y,   0.0, 0.0,
            0.0, 0.0, z,   0.0,
            tx,  ty,  tz,  1.0,
        ])
    }

    /// 2D orthographic projection over `[x, x + width] × [y, y + height]`
    /// with depth range `[0, 1]`.
    pub fn orthographic_2d(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::orthographic(x, x + width, y, y + height, 0.0, 1.0)
    }

    /// View rotation looking along `direction` with `up` as the approximate up vector.
    ///
    /// Rows are the camera basis `right`, `up`, `−forward`; there is no
    /// translation.
    pub fn look_in_direction(direction: Vec3, up: Vec3) -> Self {
        let z = direction.normalize();
        let x = z.cross(&up).normalize();
        let y = x.cross(&z).normalize();
        let [xx, xy, xz] = x.to_array();
        let [yx, yy, yz] = y.to_array();
        let [zx, zy, zz] = z.to_array();
        Self::new([
            xx,  yx,  -zx, 0.0,
            xy,  yy,  -zy, 0.0,
            xz,  yz,  -zz, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Right-handed view matrix for a camera at `eye` looking at `center`
    /// (gluLookAt).
    pub fn look_at(eye: Vec3, center: Vec3, up: Vec3) -> Self {
        let [ex, ey, ez] = eye.to_array();
        Self::look_in_direction(center.sub(&eye), up).multiply(&Self::translation(-ex, -ey, -ez))
    }

    /// Object-to-world matrix placing an object at `position`, facing
    /// `forward` with `up` as the approximate up vector.
    ///
    /// Columns are `right`, `up`, `−forward`, `position`; this is the inverse of
    /// the equivalent [`Mat4::look_at`] view.
    pub fn world(position: Vec3, forward: Vec3, up: Vec3) -> Self {
        let f = forward.normalize();
        let right = f.cross(&up).normalize();
        let u = right.cross(&f).normalize();
        let back = f.negate();
        Self::from_cols(
            right.extend(0.0),
            u.extend(0.0),
            back.extend(0.0),
            position.extend(1.0),
        )
    }

    /// Creates a matrix from column-major array data.
    ///
    /// Callers must supply 16 finite values already laid out column-major.
    pub const fn new(data: [f32; 16]) -> Self {
        Self { data }
    }

    /// Creates a matrix from its four columns.
    pub fn from_cols(c0: Vec4, c1: Vec4, c2: Vec4, c3: Vec4) -> Self {
        let mut data = [0.0; 16];
        for (i, col) in [c0, c1, c2, c3].iter().enumerate() {
            data[i * 4..i * 4 + 4].copy_from_slice(&col.to_array());
        }
        Self::new(data)
    }

    /// Returns the matrix as a column‑major array.
    pub fn to_array(self) -> [f32; 16] {
        self.data
    }

    /// Element at `row`, `col` (both `0..4`).
    pub fn at(&self, row: usize, col: usize) -> f32 {
        self.data[col * 4 + row]
    }

    /// Multiplies the matrix with another matrix (`self * rhs`).
    ///
    /// Multiplication follows column‑major semantics (`self` on the left,
    /// `rhs` on the right) to mirror GPU‑style transforms.
    ///
    /// # Examples
    /// ```
    /// use lumen_math::Mat4;
    /// let a = Mat4::identity();
    /// let b = Mat4::scale(2.0, 3.0, 4.0);
    /// assert_eq!(a.multiply(&b).to_array(), b.to_array());
    /// ```
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.at(row, k) * rhs.at(k, col);
                }
                out[col * 4 + row] = sum;
            }
        }
        Self::new(out)
    }

    /// Post-multiplies by a translation (`self * T`).
    pub fn translated(&self, x: f32, y: f32, z: f32) -> Self {
        self.multiply(&Self::translation(x, y, z))
    }

    /// Post-multiplies by an axis/angle rotation (`self * R`).
    pub fn rotated(&self, axis: Vec3, degrees: f32) -> Self {
        self.multiply(&Self::rotation_axis_angle(axis, degrees))
    }

    /// Post-multiplies by a scale (`self * S`).
    pub fn scaled(&self, x: f32, y: f32, z: f32) -> Self {
        self.multiply(&Self::scale(x, y, z))
    }

    /// Transposed copy.
    pub fn transpose(&self) -> Self {
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                out[row * 4 + col] = self.at(row, col);
            }
        }
        Self::new(out)
    }

    /// 2×2 minors of the top two rows (`s`) and bottom two rows (`c`).
    fn minors(&self) -> ([f32; 6], [f32; 6]) {
        let a = |row, col| self.at(row, col);
        let s = [
            a(0, 0) * a(1, 1) - a(1, 0) * a(0, 1),
            a(0, 0) * a(1, 2) - a(1, 0) * a(0, 2),
            a(0, 0) * a(1, 3) - a(1, 0) * a(0, 3),
            a(0, 1) * a(1, 2) - a(1, 1) * a(0, 2),
            a(0, 1) * a(1, 3) - a(1, 1) * a(0, 3),
            a(0, 2) * a(1, 3) - a(1, 2) * a(0, 3),
        ];
        let c = [
            a(2, 0) * a(3, 1) - a(3, 0) * a(2, 1),
            a(2, 0) * a(3, 2) - a(3, 0) * a(2, 2),
            a(2, 0) * a(3, 3) - a(3, 0) * a(2, 3),
            a(2, 1) * a(3, 2) - a(3, 1) * a(2, 2),
            a(2, 1) * a(3, 3) - a(3, 1) * a(2, 3),
            a(2, 2) * a(3, 3) - a(3, 2) * a(2, 3),
        ];
        (s, c)
    }

    /// Determinant (Laplace expansion over complementary 2×2 minors; the
    /// full 24-term sum).
    pub fn determinant(&self) -> f32 {
        let (s, c) = self.minors();
        s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
    }

    /// Inverse via the adjugate.
    ///
    /// Every cofactor is computed from the untouched receiver into a scratch
    /// buffer before the result is assembled. Returns
    /// [`MathError::SingularMatrix`] when the determinant is exactly zero.
    ///
    /// ```
    /// use lumen_math::Mat4;
    /// let inv = Mat4::translation(-3.0, 2.2, 15.0).inverse()?;
    /// assert_eq!(inv, Mat4::translation(3.0, -2.2, -15.0));
    /// # Ok::<(), lumen_math::MathError>(())
    /// ```
    #[allow(clippy::float_cmp)]
    pub fn inverse(&self) -> Result<Self, MathError> {
        let (s, c) = self.minors();
        let det = s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1]
            + s[5] * c[0];
        if det == 0.0 {
            debug!(det, "rejecting Mat4 inversion of singular matrix");
            return Err(MathError::SingularMatrix { determinant: det });
        }
        let a = |row, col| self.at(row, col);
        // Row-major adjugate: adj[r][col].
        let adj = [
            [
                a(1, 1) * c[5] - a(1, 2) * c[4] + a(1, 3) * c[3],
                -a(0, 1) * c[5] + a(0, 2) * c[4] - a(0, 3) * c[3],
                a(3, 1) * s[5] - a(3, 2) * s[4] + a(3, 3) * s[3],
                -a(2, 1) * s[5] + a(2, 2) * s[4] - a(2, 3) * s[3],
            ],
            [
                -a(1, 0) * c[5] + a(1, 2) * c[2] - a(1, 3) * c[1],
                a(0, 0) * c[5] - a(0, 2) * c[2] + a(0, 3) * c[1],
                -a(3, 0) * s[5] + a(3, 2) * s[2] - a(3, 3) * s[1],
                a(2, 0) * s[5] - a(2, 2) * s[2] + a(2, 3) * s[1],
            ],
            [
                a(1, 0) * c[4] - a(1, 1) * c[2] + a(1, 3) * c[0],
                -a(0, 0) * c[4] + a(0, 1) * c[2] - a(0, 3) * c[0],
                a(3, 0) * s[4] - a(3, 1) * s[2] + a(3, 3) * s[0],
                -a(2, 0) * s[4] + a(2, 1) * s[2] - a(2, 3) * s[0],
            ],
            [
                -a(1, 0) * c[3] + a(1, 1) * c[1] - a(1, 2) * c[0],
                a(0, 0) * c[3] - a(0, 1) * c[1] + a(0, 2) * c[0],
                -a(3, 0) * s[3] + a(3, 1) * s[1] - a(3, 2) * s[0],
                a(2, 0) * s[3] - a(2, 1) * s[1] + a(2, 2) * s[0],
            ],
        ];
        let inv_det = 1.0 / det;
        let mut out = [0.0; 16];
        for (row, values) in adj.iter().enumerate() {
            for (col, v) in values.iter().enumerate() {
                out[col * 4 + row] = v * inv_det;
            }
        }
        Ok(Self::new(out))
    }

    /// Transforms a point (assumes `w = 1`, no perspective divide).
    ///
    /// Translation components are applied and the resulting vector is returned
    /// with `w` implicitly equal to `1`.
    pub fn transform_point(&self, point: &Vec3) -> Vec3 {
        let x = point.component(0);
        let y = point.component(1);
        let z = point.component(2);
        let w = 1.0;

        let nx = self.at(0, 0) * x + self.at(0, 1) * y + self.at(0, 2) * z + self.at(0, 3) * w;
        let ny = self.at(1, 0) * x + self.at(1, 1) * y + self.at(1, 2) * z + self.at(1, 3) * w;
        let nz = self.at(2, 0) * x + self.at(2, 1) * y + self.at(2, 2) * z + self.at(2, 3) * w;

        Vec3::new(nx, ny, nz)
    }

    /// Transforms a direction vector (ignores translation, `w = 0`).
    ///
    /// All three input components are read before any output is produced.
    pub fn transform_direction(&self, direction: &Vec3) -> Vec3 {
        let x = direction.component(0);
        let y = direction.component(1);
        let z = direction.component(2);

        let nx = self.at(0, 0) * x + self.at(0, 1) * y + self.at(0, 2) * z;
        let ny = self.at(1, 0) * x + self.at(1, 1) * y + self.at(1, 2) * z;
        let nz = self.at(2, 0) * x + self.at(2, 1) * y + self.at(2, 2) * z;

        Vec3::new(nx, ny, nz)
    }

    /// Full homogeneous product `M * v`.
    pub fn transform_vec4(&self, v: &Vec4) -> Vec4 {
        let src = v.to_array();
        let mut out = [0.0; 4];
        for (row, slot) in out.iter_mut().enumerate() {
            *slot = (0..4).map(|k| self.at(row, k) * src[k]).sum();
        }
        Vec4::from(out)
    }

    /// Transforms a point (`w = 1`) and divides by the resulting `w`.
    pub fn project_point(&self, point: &Vec3) -> Vec3 {
        let clip = self.transform_vec4(&point.extend(1.0));
        clip.truncate().scale(1.0 / clip.w())
    }

    /// Maps an object-space point to window coordinates.
    ///
    /// The point goes through `modelview` then `projection`, is divided by the
    /// clip-space `w` (equal to `−z_eye` for a perspective projection), and NDC
    /// is mapped onto `viewport` in x/y and onto `[0, 1]` in depth.
    pub fn project(point: &Vec3, modelview: &Self, projection: &Self, viewport: &Viewport) -> Vec3 {
        let ndc = projection.multiply(modelview).project_point(point);
        Vec3::new(
            viewport.x + (ndc.x() + 1.0) * 0.5 * viewport.width,
            viewport.y + (ndc.y() + 1.0) * 0.5 * viewport.height,
            (ndc.z() + 1.0) * 0.5,
        )
    }

    /// Inverse of [`Mat4::project`]: maps window coordinates back to object space.
    ///
    /// Fails with [`MathError::SingularMatrix`] when `projection * modelview`
    /// cannot be inverted.
    pub fn unproject(
        window: &Vec3,
        modelview: &Self,
        projection: &Self,
        viewport: &Viewport,
    ) -> Result<Vec3, MathError> {
        let inv = projection.multiply(modelview).inverse().map_err(|err| {
            debug!(?err, "unproject failed");
            err
        })?;
        let ndc = Vec3::new(
            (window.x() - viewport.x) / viewport.width * 2.0 - 1.0,
            (window.y() - viewport.y) / viewport.height * 2.0 - 1.0,
            window.z() * 2.0 - 1.0,
        );
        Ok(inv.project_point(&ndc))
    }

    /// Translation stored in the last column.
    pub fn extract_translation(&self) -> Vec3 {
        Vec3::new(self.data[12], self.data[13], self.data[14])
    }

    /// Rotation part as a quaternion (see [`Quat::from_rotation_matrix`]).
    pub fn to_quat(&self) -> Quat {
        Quat::from_rotation_matrix(self)
    }

    /// Upper-left 3×3 block.
    pub fn to_mat3(&self) -> Mat3 {
        Mat3::from_mat4(self)
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[f32; 16]> for Mat4 {
    fn from(value: [f32; 16]) -> Self {
        Self { data: value }
    }
}

impl core::ops::Mul for Mat4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl core::ops::MulAssign for Mat4 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl core::ops::MulAssign<&Mat4> for Mat4 {
    fn mul_assign(&mut self, rhs: &Mat4) {
        *self = self.multiply(rhs);
    }
}
