// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Integer lattice points.
//!
//! Arithmetic is component-wise. `div` follows integer division and panics on
//! a zero component like `i32` does; use `checked_div` when the divisor is
//! untrusted.

use lumen_math::{Vec2, Vec3};

/// Integer point in the plane.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Point {
    /// Creates a point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise sum.
    #[must_use]
    pub const fn add(&self, other: &Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    /// Component-wise difference.
    #[must_use]
    pub const fn sub(&self, other: &Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    /// Component-wise product.
    #[must_use]
    pub const fn mul(&self, other: &Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y)
    }

    /// Component-wise integer quotient.
    #[must_use]
    pub const fn div(&self, other: &Self) -> Self {
        Self::new(self.x / other.x, self.y / other.y)
    }

    /// Component-wise quotient, `None` on a zero divisor or overflow.
    pub fn checked_div(&self, other: &Self) -> Option<Self> {
        Some(Self::new(
            self.x.checked_div(other.x)?,
            self.y.checked_div(other.y)?,
        ))
    }

    /// Converts to a float vector.
    #[allow(clippy::cast_precision_loss)]
    pub fn to_vec2(&self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }
}

/// Integer point in space.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point3 {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
    /// Z coordinate.
    pub z: i32,
}

impl Point3 {
    /// Creates a point.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Component-wise sum.
    #[must_use]
    pub const fn add(&self, other: &Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    /// Component-wise difference.
    #[must_use]
    pub const fn sub(&self, other: &Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    /// Component-wise product.
    #[must_use]
    pub const fn mul(&self, other: &Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    /// Component-wise integer quotient.
    #[must_use]
    pub const fn div(&self, other: &Self) -> Self {
        Self::new(self.x / other.x, self.y / other.y, self.z / other.z)
    }

    /// Component-wise quotient, `None` on a zero divisor or overflow.
    pub fn checked_div(&self, other: &Self) -> Option<Self> {
        Some(Self::new(
            self.x.checked_div(other.x)?,
            self.y.checked_div(other.y)?,
            self.z.checked_div(other.z)?,
        ))
    }

    /// Converts to a float vector.
    #[allow(clippy::cast_precision_loss)]
    pub fn to_vec3(&self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<(i32, i32, i32)> for Point3 {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}
