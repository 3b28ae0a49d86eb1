// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use crate::{deg_to_rad, rad_to_deg, Vec3, NORMALIZATION_TOLERANCE};

/// 2D vector for screen-space points, UVs, and planar directions.
///
/// Angles are measured in degrees, counter-clockwise from the positive X axis.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    data: [f32; 2],
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Unit vector along +X.
    pub const UNIT_X: Self = Self::new(1.0, 0.0);

    /// Unit vector along +Y.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { data: [x, y] }
    }

    /// Creates a vector with both components set to `value`.
    pub const fn splat(value: f32) -> Self {
        Self::new(value, value)
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f32; 2] {
        self.data
    }

    /// X component.
    pub fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y component.
    pub fn y(&self) -> f32 {
        self.data[1]
    }

    /// Adds two vectors.
    pub fn add(&self, other: &Self) -> Self {
        Self::new(self.x() + other.x(), self.y() + other.y())
    }

    /// Subtracts another vector.
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(self.x() - other.x(), self.y() - other.y())
    }

    /// Component-wise product.
    pub fn mul(&self, other: &Self) -> Self {
        Self::new(self.x() * other.x(), self.y() * other.y())
    }

    /// Component-wise quotient. Zero divisors produce IEEE infinities or NaN.
    pub fn div(&self, other: &Self) -> Self {
        Self::new(self.x() / other.x(), self.y() / other.y())
    }

    /// Scales the vector by a scalar.
    pub fn scale(&self, scalar: f32) -> Self {
        Self::new(self.x() * scalar, self.y() * scalar)
    }

    /// Returns the vector pointing the opposite way.
    pub fn negate(&self) -> Self {
        Self::new(-self.x(), -self.y())
    }

    /// Dot product.
    pub fn dot(&self, other: &Self) -> f32 {
        self.x() * other.x() + self.y() * other.y()
    }

    /// Z component of the 3D cross product of `(x, y, 0)` vectors.
    ///
    /// Positive when `other` lies counter-clockwise from `self`.
    pub fn cross(&self, other: &Self) -> f32 {
        self.x() * other.y() - self.y() * other.x()
    }

    /// Vector length.
    pub fn length(&self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Squared length.
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

    /// Unit vector pointing the same way; zero length is returned unchanged.
    #[allow(clippy::float_cmp)]
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len == 0.0 {
            return *self;
        }
        self.scale(1.0 / len)
    }

    /// Shortens the vector to `max_len` if it is longer.
    pub fn limit(&self, max_len: f32) -> Self {
        let len2 = self.length_squared();
        if len2 > max_len * max_len {
            self.scale(max_len / len2.sqrt())
        } else {
            *self
        }
    }

    /// Linear interpolation; `alpha` is not clamped.
    pub fn lerp(&self, target: &Self, alpha: f32) -> Self {
        self.scale(1.0 - alpha).add(&target.scale(alpha))
    }

    /// Angle from the positive X axis in degrees, in `[0, 360)`.
    ///
    /// ```
    /// use lumen_math::Vec2;
    /// assert!((Vec2::new(0.0, -1.0).angle() - 270.0).abs() < 1e-4);
    /// ```
    pub fn angle(&self) -> f32 {
        let angle = rad_to_deg(self.y().atan2(self.x())).rem_euclid(360.0);
        // Tiny negative angles round up to exactly 360 in f32.
        if angle >= 360.0 {
            0.0
        } else {
            angle
        }
    }

    /// Returns a vector with the same length pointing at `degrees`.
    pub fn with_angle(&self, degrees: f32) -> Self {
        Self::new(self.length(), 0.0).rotate(degrees)
    }

    /// Rotates counter-clockwise by `degrees`.
    pub fn rotate(&self, degrees: f32) -> Self {
        let (s, c) = deg_to_rad(degrees).sin_cos();
        Self::new(self.x() * c - self.y() * s, self.x() * s + self.y() * c)
    }

    /// Returns `true` when both components are exactly zero.
    #[allow(clippy::float_cmp)]
    pub fn is_zero(&self) -> bool {
        self.data == [0.0; 2]
    }

    /// Returns `true` when the squared length is within tolerance of one.
    pub fn is_unit(&self) -> bool {
        (self.length_squared() - 1.0).abs() < NORMALIZATION_TOLERANCE
    }

    /// Reflects about a unit `normal`.
    pub fn reflect(&self, normal: &Self) -> Self {
        self.sub(&normal.scale(2.0 * self.dot(normal)))
    }

    /// Returns `self` when `normal · incident < 0`, otherwise `−self`.
    pub fn faceforward(&self, incident: &Self, normal: &Self) -> Self {
        if normal.dot(incident) < 0.0 {
            *self
        } else {
            self.negate()
        }
    }

    /// Appends a Z component.
    pub fn extend(&self, z: f32) -> Vec3 {
        Vec3::new(self.x(), self.y(), z)
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from(value: [f32; 2]) -> Self {
        Self { data: value }
    }
}
