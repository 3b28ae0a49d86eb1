// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use lumen_math::Vec3;

/// Line segment between two endpoints.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    a: Vec3,
    b: Vec3,
}

impl Segment {
    /// Creates a segment from `a` to `b`.
    pub const fn new(a: Vec3, b: Vec3) -> Self {
        Self { a, b }
    }

    /// Start point.
    pub fn a(&self) -> Vec3 {
        self.a
    }

    /// End point.
    pub fn b(&self) -> Vec3 {
        self.b
    }

    /// Length.
    pub fn length(&self) -> f32 {
        self.a.distance(&self.b)
    }

    /// Squared length.
    pub fn length_squared(&self) -> f32 {
        self.a.distance_squared(&self.b)
    }

    /// Midpoint.
    pub fn midpoint(&self) -> Vec3 {
        self.a.lerp(&self.b, 0.5)
    }
}
