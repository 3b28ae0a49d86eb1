// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use lumen_math::{max, min, Vec2};

/// Axis-aligned rectangle anchored at its minimum corner `(x, y)`.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rectangle {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

impl Rectangle {
    /// Creates a rectangle from its minimum corner and size.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Minimum x.
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Minimum y.
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Extent along x.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Extent along y.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Returns `true` when `other` lies strictly inside `self`.
    ///
    /// Shared edges do not count, so a rectangle does not contain itself.
    pub fn contains_rect(&self, other: &Self) -> bool {
        let inside_x = |v: f32| v > self.x && v < self.x + self.width;
        let inside_y = |v: f32| v > self.y && v < self.y + self.height;
        inside_x(other.x)
            && inside_x(other.x + other.width)
            && inside_y(other.y)
            && inside_y(other.y + other.height)
    }

    /// Returns `true` when `(x, y)` lies strictly inside the rectangle.
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        self.x < x && self.x + self.width > x && self.y < y && self.y + self.height > y
    }

    /// Returns `true` when the rectangles overlap; touching edges count.
    pub fn overlaps(&self, other: &Self) -> bool {
        !(self.x > other.x + other.width
            || self.x + self.width < other.x
            || self.y > other.y + other.height
            || self.y + self.height < other.y)
    }

    /// Smallest rectangle covering both.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        let min_x = min(self.x, other.x);
        let max_x = max(self.x + self.width, other.x + other.width);
        let min_y = min(self.y, other.y);
        let max_y = max(self.y + self.height, other.y + other.height);
        Self::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    /// Width times height.
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Sum of the four sides.
    pub fn perimeter(&self) -> f32 {
        2.0 * (self.width + self.height)
    }

    /// Midpoint.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }
}
