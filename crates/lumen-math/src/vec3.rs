// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use crate::{Quat, Vec2, Vec4, NORMALIZATION_TOLERANCE};

/// 3D vector used for points, directions, and extents.
///
/// * Components may represent either points or directions depending on the
///   calling context.
/// * Use [`crate::Mat4::transform_point`] for points (homogeneous `w = 1`) and
///   [`crate::Mat4::transform_direction`] for directions (homogeneous `w = 0`).
/// * Operations return new vectors; the receiver is never modified.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    data: [f32; 3],
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { data: [x, y, z] }
    }

    /// Creates a vector with all three components set to `value`.
    pub const fn splat(value: f32) -> Self {
        Self::new(value, value, value)
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f32; 3] {
        self.data
    }

    pub(crate) fn component(&self, idx: usize) -> f32 {
        self.data[idx]
    }

    /// X component.
    pub fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y component.
    pub fn y(&self) -> f32 {
        self.data[1]
    }

    /// Z component.
    pub fn z(&self) -> f32 {
        self.data[2]
    }

    /// Adds two vectors.
    pub fn add(&self, other: &Self) -> Self {
        Self::new(
            self.component(0) + other.component(0),
            self.component(1) + other.component(1),
            self.component(2) + other.component(2),
        )
    }

    /// Subtracts another vector.
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(
            self.component(0) - other.component(0),
            self.component(1) - other.component(1),
            self.component(2) - other.component(2),
        )
    }

    /// Component-wise product.
    pub fn mul(&self, other: &Self) -> Self {
        Self::new(
            self.component(0) * other.component(0),
            self.component(1) * other.component(1),
            self.component(2) * other.component(2),
        )
    }

    /// Component-wise quotient. Zero divisors produce IEEE infinities or NaN.
    pub fn div(&self, other: &Self) -> Self {
        Self::new(
            self.component(0) / other.component(0),
            self.component(1) / other.component(1),
            self.component(2) / other.component(2),
        )
    }

    /// Scales the vector by a scalar.
    pub fn scale(&self, scalar: f32) -> Self {
        Self::new(
            self.component(0) * scalar,
            self.component(1) * scalar,
            self.component(2) * scalar,
        )
    }

    /// Returns the vector pointing the opposite way.
    pub fn negate(&self) -> Self {
        Self::new(-self.component(0), -self.component(1), -self.component(2))
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f32 {
        self.component(0) * other.component(0)
            + self.component(1) * other.component(1)
            + self.component(2) * other.component(2)
    }

    /// Cross product with another vector.
    pub fn cross(&self, other: &Self) -> Self {
        let ax = self.component(0);
        let ay = self.component(1);
        let az = self.component(2);
        let bx = other.component(0);
        let by = other.component(1);
        let bz = other.component(2);
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Vector length (magnitude).
    pub fn length(&self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Squared magnitude of the vector.
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Distance between two points.
    pub fn distance(&self, other: &Self) -> f32 {
        self.sub(other).length()
    }

    /// Squared distance between two points.
    pub fn distance_squared(&self, other: &Self) -> f32 {
        self.sub(other).length_squared()
    }

    /// Returns the unit vector pointing the same way.
    ///
    /// A vector of exactly zero length is returned unchanged, so the zero
    /// vector normalises to zero rather than NaN.
    ///
    /// ```
    /// use lumen_math::Vec3;
    /// assert_eq!(Vec3::ZERO.normalize(), Vec3::ZERO);
    /// assert_eq!(Vec3::new(0.0, 3.0, 0.0).normalize(), Vec3::UNIT_Y);
    /// ```
    #[allow(clippy::float_cmp)]
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len == 0.0 {
            return *self;
        }
        self.scale(1.0 / len)
    }

    /// Shortens the vector to `max_len` if it is longer; otherwise returns it unchanged.
    pub fn limit(&self, max_len: f32) -> Self {
        let len2 = self.length_squared();
        if len2 > max_len * max_len {
            self.scale(max_len / len2.sqrt())
        } else {
            *self
        }
    }

    /// Linear interpolation `self·(1 − alpha) + target·alpha`. `alpha` is not clamped.
    pub fn lerp(&self, target: &Self, alpha: f32) -> Self {
        self.scale(1.0 - alpha).add(&target.scale(alpha))
    }

    /// Spherical interpolation between two unit vectors.
    ///
    /// Nearly parallel (or antiparallel) inputs, `|dot| > 0.9995`, fall back to
    /// a normalised linear interpolation.
    pub fn slerp(&self, target: &Self, alpha: f32) -> Self {
        let dot = self.dot(target);
        if dot.abs() > 0.9995 {
            return self.lerp(target, alpha).normalize();
        }
        let theta = dot.clamp(-1.0, 1.0).acos() * alpha;
        let (st, ct) = theta.sin_cos();
        let ortho = target.sub(&self.scale(dot));
        let len2 = ortho.length_squared();
        let dl = if len2 < 0.0001 { st } else { st / len2.sqrt() };
        self.scale(ct).add(&ortho.scale(dl)).normalize()
    }

    /// Returns `true` when every component is exactly zero.
    #[allow(clippy::float_cmp)]
    pub fn is_zero(&self) -> bool {
        self.data == [0.0; 3]
    }

    /// Returns `true` when the squared length is within
    /// [`NORMALIZATION_TOLERANCE`] of one.
    pub fn is_unit(&self) -> bool {
        (self.length_squared() - 1.0).abs() < NORMALIZATION_TOLERANCE
    }

    /// Reflects the vector about a unit `normal`: `v − 2(v·n)n`.
    pub fn reflect(&self, normal: &Self) -> Self {
        self.sub(&normal.scale(2.0 * self.dot(normal)))
    }

    /// Returns `self` when `normal · incident < 0`, otherwise `−self`.
    ///
    /// Orients a shading normal to face against the incident direction.
    pub fn faceforward(&self, incident: &Self, normal: &Self) -> Self {
        if normal.dot(incident) < 0.0 {
            *self
        } else {
            self.negate()
        }
    }

    /// Rotates the vector by the quaternion `q` (`q · v · q⁻¹`).
    pub fn rotate_by_quat(&self, q: &Quat) -> Self {
        q.rotate_vec3(self)
    }

    /// Drops the Z component.
    pub fn truncate(&self) -> Vec2 {
        Vec2::new(self.component(0), self.component(1))
    }

    /// Appends a W component.
    pub fn extend(&self, w: f32) -> Vec4 {
        Vec4::new(self.component(0), self.component(1), self.component(2), w)
    }
}

/// Converts a 3-element `[f32; 3]` array into a `Vec3` interpreted as `(x, y, z)`.
///
/// # Examples
/// ```
/// use lumen_math::Vec3;
/// let v = Vec3::from([1.0, 2.0, 3.0]);
/// assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
/// ```
impl From<[f32; 3]> for Vec3 {
    fn from(value: [f32; 3]) -> Self {
        Self { data: value }
    }
}
