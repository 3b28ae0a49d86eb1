// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Simple polygon with a local vertex list and a cached world transform.
//!
//! Vertices are stored flat as `[x0, y0, x1, y1, ...]`. World vertices are
//! produced by scaling about `origin`, rotating counter-clockwise about
//! `origin` by `rotation` degrees, then translating by `position`. The cache is
//! rebuilt lazily the next time world vertices are requested after any setter.

use lumen_math::{cos_deg, sin_deg, MathError, Vec2};
use tracing::debug;

use super::rectangle::Rectangle;

/// Polygon in the XY plane.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    local: Vec<f32>,
    world: Vec<f32>,
    origin: Vec2,
    position: Vec2,
    rotation: f32,
    scale: Vec2,
    dirty: bool,
}

fn check_vertices(vertices: &[f32]) -> Result<(), MathError> {
    if vertices.len() >= 6 && vertices.len() % 2 == 0 {
        return Ok(());
    }
    debug!(
        shape = "polygon",
        actual = vertices.len(),
        "rejecting vertex list"
    );
    Err(MathError::DegenerateInput {
        shape: "polygon",
        required: "an even number of coordinates describing at least 3 points",
        actual: vertices.len(),
    })
}

impl Polygon {
    /// Creates a polygon with an identity transform.
    ///
    /// Fails with [`MathError::DegenerateInput`] when `vertices` holds fewer
    /// than six coordinates or an odd number of them.
    pub fn new(vertices: Vec<f32>) -> Result<Self, MathError> {
        check_vertices(&vertices)?;
        Ok(Self {
            world: Vec::with_capacity(vertices.len()),
            local: vertices,
            origin: Vec2::ZERO,
            position: Vec2::ZERO,
            rotation: 0.0,
            scale: Vec2::splat(1.0),
            dirty: true,
        })
    }

    /// Untransformed vertices.
    pub fn vertices(&self) -> &[f32] {
        &self.local
    }

    /// Replaces the local vertices; the same validation as [`Polygon::new`] applies.
    pub fn set_vertices(&mut self, vertices: Vec<f32>) -> Result<(), MathError> {
        check_vertices(&vertices)?;
        self.local = vertices;
        self.dirty = true;
        Ok(())
    }

    /// Pivot for scaling and rotation, in local coordinates.
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Translation applied after scale and rotation.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Rotation in degrees, counter-clockwise.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Per-axis scale.
    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    /// Sets the pivot.
    pub fn set_origin(&mut self, origin: Vec2) {
        self.origin = origin;
        self.dirty = true;
    }

    /// Sets the translation.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.dirty = true;
    }

    /// Adds `offset` to the translation.
    pub fn translate(&mut self, offset: Vec2) {
        self.position = self.position.add(&offset);
        self.dirty = true;
    }

    /// Sets the rotation in degrees.
    pub fn set_rotation(&mut self, degrees: f32) {
        self.rotation = degrees;
        self.dirty = true;
    }

    /// Adds `degrees` to the rotation.
    pub fn rotate(&mut self, degrees: f32) {
        self.rotation += degrees;
        self.dirty = true;
    }

    /// Sets the per-axis scale.
    pub fn set_scale(&mut self, scale: Vec2) {
        self.scale = scale;
        self.dirty = true;
    }

    /// Multiplies the current scale by `amount`.
    pub fn scale_by(&mut self, amount: f32) {
        self.scale = self.scale.scale(amount);
        self.dirty = true;
    }

    /// Forces the world vertices to be recomputed on next access.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// World-space vertices, recomputed if any transform input changed.
    pub fn transformed_vertices(&mut self) -> &[f32] {
        if self.dirty {
            self.rebuild_world();
        }
        &self.world
    }

    fn rebuild_world(&mut self) {
        let (cos, sin) = (cos_deg(self.rotation), sin_deg(self.rotation));
        let (ox, oy) = (self.origin.x(), self.origin.y());
        let (sx, sy) = (self.scale.x(), self.scale.y());
        let (px, py) = (self.position.x(), self.position.y());

        self.world.clear();
        for v in self.local.chunks_exact(2) {
            let x = (v[0] - ox) * sx;
            let y = (v[1] - oy) * sy;
            let (x, y) = (cos * x - sin * y, sin * x + cos * y);
            self.world.push(px + x + ox);
            self.world.push(py + y + oy);
        }
        self.dirty = false;
    }

    /// Signed area of the world polygon; positive for counter-clockwise winding.
    pub fn area(&mut self) -> f32 {
        let v = self.transformed_vertices();
        let n = v.len();
        let twice: f32 = (0..n)
            .step_by(2)
            .map(|i| v[i] * v[(i + 3) % n] - v[(i + 2) % n] * v[i + 1])
            .sum();
        twice * 0.5
    }

    /// Axis-aligned bounds of the world polygon.
    pub fn bounding_rectangle(&mut self) -> Rectangle {
        let v = self.transformed_vertices();
        let (mut min_x, mut min_y) = (f32::INFINITY, f32::INFINITY);
        let (mut max_x, mut max_y) = (f32::NEG_INFINITY, f32::NEG_INFINITY);
        for p in v.chunks_exact(2) {
            min_x = min_x.min(p[0]);
            min_y = min_y.min(p[1]);
            max_x = max_x.max(p[0]);
            max_y = max_y.max(p[1]);
        }
        Rectangle::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    /// Even-odd containment test against the world polygon.
    pub fn contains(&mut self, point: &Vec2) -> bool {
        let (x, y) = (point.x(), point.y());
        let v = self.transformed_vertices();
        let n = v.len();
        let crossings = (0..n)
            .step_by(2)
            .filter(|&i| {
                let (x1, y1) = (v[i], v[i + 1]);
                let (x2, y2) = (v[(i + 2) % n], v[(i + 3) % n]);
                let straddles = (y1..y2).contains(&y) || (y2..y1).contains(&y);
                straddles && x < (x2 - x1) / (y2 - y1) * (y - y1) + x1
            })
            .count();
        crossings % 2 == 1
    }
}
