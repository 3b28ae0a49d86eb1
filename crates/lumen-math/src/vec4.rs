// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use crate::{Vec3, NORMALIZATION_TOLERANCE};

/// Homogeneous 4D vector `(x, y, z, w)`.
///
/// Mostly produced by [`crate::Mat4::transform_vec4`] when the `w` term of a
/// projection has to be inspected before the perspective divide.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec4 {
    data: [f32; 4],
}

impl Vec4 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Creates a vector with all components set to `value`.
    pub const fn splat(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f32; 4] {
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

    /// Z component.
    pub fn z(&self) -> f32 {
        self.data[2]
    }

    /// W component.
    pub fn w(&self) -> f32 {
        self.data[3]
    }

    fn zip_with(&self, other: &Self, f: impl Fn(f32, f32) -> f32) -> Self {
        let a = self.data;
        let b = other.data;
        Self::new(f(a[0], b[0]), f(a[1], b[1]), f(a[2], b[2]), f(a[3], b[3]))
    }

    /// Adds two vectors.
    pub fn add(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a + b)
    }

    /// Subtracts another vector.
    pub fn sub(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a - b)
    }

    /// Component-wise product.
    pub fn mul(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a * b)
    }

    /// Component-wise quotient. Zero divisors produce IEEE infinities or NaN.
    pub fn div(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a / b)
    }

    /// Scales every component (including `w`).
    pub fn scale(&self, scalar: f32) -> Self {
        let [x, y, z, w] = self.data;
        Self::new(x * scalar, y * scalar, z * scalar, w * scalar)
    }

    /// Negates every component.
    pub fn negate(&self) -> Self {
        self.scale(-1.0)
    }

    /// Four-component dot product.
    pub fn dot(&self, other: &Self) -> f32 {
        let a = self.data;
        let b = other.data;
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3]
    }

    /// Vector length.
    pub fn length(&self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Squared length.
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
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

    /// Linear interpolation; `alpha` is not clamped.
    pub fn lerp(&self, target: &Self, alpha: f32) -> Self {
        self.scale(1.0 - alpha).add(&target.scale(alpha))
    }

    /// Returns `true` when every component is exactly zero.
    #[allow(clippy::float_cmp)]
    pub fn is_zero(&self) -> bool {
        self.data == [0.0; 4]
    }

    /// Returns `true` when the squared length is within tolerance of one.
    pub fn is_unit(&self) -> bool {
        (self.length_squared() - 1.0).abs() < NORMALIZATION_TOLERANCE
    }

    /// Drops the W component without dividing.
    pub fn truncate(&self) -> Vec3 {
        Vec3::new(self.data[0], self.data[1], self.data[2])
    }
}

impl From<[f32; 4]> for Vec4 {
    fn from(value: [f32; 4]) -> Self {
        Self { data: value }
    }
}

impl From<Vec3> for Vec4 {
    /// Promotes a point (`w = 1`).
    fn from(value: Vec3) -> Self {
        value.extend(1.0)
    }
}
