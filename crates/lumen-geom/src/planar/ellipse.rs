// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use lumen_math::PI;

/// Axis-aligned ellipse centred at `(x, y)` with full `width` and `height`.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ellipse {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

impl Ellipse {
    /// Creates an ellipse.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Centre x.
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Centre y.
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Full width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Full height.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Returns `true` when `(x, y)` is inside or on the ellipse.
    ///
    /// An ellipse with a non-positive width or height contains nothing.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        if self.width <= 0.0 || self.height <= 0.0 {
            return false;
        }
        let dx = x - self.x;
        let dy = y - self.y;
        let a = self.width * 0.5;
        let b = self.height * 0.5;
        (dx * dx) / (a * a) + (dy * dy) / (b * b) <= 1.0
    }

    /// Enclosed area `π · a · b` over the semi-axes.
    pub fn area(&self) -> f32 {
        PI * (self.width * 0.5) * (self.height * 0.5)
    }
}
