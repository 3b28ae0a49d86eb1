// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use lumen_math::PI;

/// Circle centred at `(x, y)`.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    x: f32,
    y: f32,
    radius: f32,
}

impl Circle {
    /// Creates a circle.
    pub const fn new(x: f32, y: f32, radius: f32) -> Self {
        Self { x, y, radius }
    }

    /// Centre x.
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Centre y.
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Radius.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Returns `true` when `(x, y)` is inside or on the circle.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        let dx = self.x - x;
        let dy = self.y - y;
        dx.mul_add(dx, dy * dy) <= self.radius * self.radius
    }

    /// Returns `true` when the circles intersect; tangent circles do not.
    pub fn overlaps(&self, other: &Self) -> bool {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let reach = self.radius + other.radius;
        dx.mul_add(dx, dy * dy) < reach * reach
    }

    /// Enclosed area.
    pub fn area(&self) -> f32 {
        PI * self.radius * self.radius
    }
}
