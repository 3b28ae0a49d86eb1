// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Parametric paths and Bezier curves of degree one to three.
//!
//! [`Bezier`] is generic over its control point type through
//! [`ControlPoint`], which `Vec2` and `Vec3` implement. The parameter `t` is
//! expected in `[0, 1]` but is not clamped.

use lumen_math::{clamp, MathError, Vec2, Vec3};
use tracing::debug;

/// Vector operations a Bezier control point needs.
pub trait ControlPoint: Copy {
    /// Component-wise sum.
    fn add(&self, other: &Self) -> Self;
    /// Component-wise difference.
    fn sub(&self, other: &Self) -> Self;
    /// Uniform scale.
    fn scale(&self, scalar: f32) -> Self;
    /// Euclidean distance between two points.
    fn distance(&self, other: &Self) -> f32;
}

impl ControlPoint for Vec2 {
    fn add(&self, other: &Self) -> Self {
        Self::add(self, other)
    }
    fn sub(&self, other: &Self) -> Self {
        Self::sub(self, other)
    }
    fn scale(&self, scalar: f32) -> Self {
        Self::scale(self, scalar)
    }
    fn distance(&self, other: &Self) -> f32 {
        Self::distance(self, other)
    }
}

impl ControlPoint for Vec3 {
    fn add(&self, other: &Self) -> Self {
        Self::add(self, other)
    }
    fn sub(&self, other: &Self) -> Self {
        Self::sub(self, other)
    }
    fn scale(&self, scalar: f32) -> Self {
        Self::scale(self, scalar)
    }
    fn distance(&self, other: &Self) -> f32 {
        Self::distance(self, other)
    }
}

/// A curve evaluated by a scalar parameter in `[0, 1]`.
pub trait Path<P> {
    /// Point on the path at `t`.
    fn value_at(&self, t: f32) -> P;
    /// First derivative (tangent, not normalised) at `t`.
    fn derivative_at(&self, t: f32) -> P;
    /// Approximate parameter of the path point closest to `point`.
    ///
    /// Projects `point` onto the chord between the first and last control
    /// points; the result is clamped to `[0, 1]`.
    fn approximate(&self, point: &P) -> f32;
}

#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
enum Segments<P> {
    Linear([P; 2]),
    Quadratic([P; 3]),
    Cubic([P; 4]),
}

/// Bezier curve with two, three, or four control points.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bezier<P> {
    segments: Segments<P>,
}

/// Planar Bezier curve.
pub type Bezier2 = Bezier<Vec2>;

/// Spatial Bezier curve.
pub type Bezier3 = Bezier<Vec3>;

impl<P: ControlPoint> Bezier<P> {
    /// Builds a curve from 2, 3, or 4 control points.
    ///
    /// Any other count fails with [`MathError::DegenerateInput`].
    pub fn new(points: &[P]) -> Result<Self, MathError> {
        let segments = match *points {
            [p0, p1] => Segments::Linear([p0, p1]),
            [p0, p1, p2] => Segments::Quadratic([p0, p1, p2]),
            [p0, p1, p2, p3] => Segments::Cubic([p0, p1, p2, p3]),
            _ => {
                debug!(
                    shape = "bezier",
                    actual = points.len(),
                    "unsupported control point count"
                );
                return Err(MathError::DegenerateInput {
                    shape: "bezier",
                    required: "2 to 4 control points",
                    actual: points.len(),
                });
            }
        };
        Ok(Self { segments })
    }

    /// Control points in order.
    pub fn points(&self) -> &[P] {
        match &self.segments {
            Segments::Linear(p) => p.as_slice(),
            Segments::Quadratic(p) => p.as_slice(),
            Segments::Cubic(p) => p.as_slice(),
        }
    }

    /// Degree of the curve (one less than the control point count).
    pub fn degree(&self) -> usize {
        self.points().len() - 1
    }
}

impl<P: ControlPoint> Path<P> for Bezier<P> {
    fn value_at(&self, t: f32) -> P {
        match self.segments {
            Segments::Linear([p0, p1]) => linear(t, p0, p1),
            Segments::Quadratic([p0, p1, p2]) => quadratic(t, p0, p1, p2),
            Segments::Cubic([p0, p1, p2, p3]) => cubic(t, p0, p1, p2, p3),
        }
    }

    fn derivative_at(&self, t: f32) -> P {
        let dt = 1.0 - t;
        match self.segments {
            Segments::Linear([p0, p1]) => p1.sub(&p0),
            Segments::Quadratic([p0, p1, p2]) => p1
                .sub(&p0)
                .scale(2.0 * dt)
                .add(&p2.sub(&p1).scale(2.0 * t)),
            Segments::Cubic([p0, p1, p2, p3]) => p1
                .sub(&p0)
                .scale(3.0 * dt * dt)
                .add(&p2.sub(&p1).scale(6.0 * dt * t))
                .add(&p3.sub(&p2).scale(3.0 * t * t)),
        }
    }

    fn approximate(&self, point: &P) -> f32 {
        let points = self.points();
        let (first, last) = (points[0], points[points.len() - 1]);

        // Law of cosines on the triangle (first, last, point).
        let l1 = first.distance(&last);
        if l1 <= 0.0 {
            return 0.0;
        }
        let l2 = point.distance(&last);
        let l3 = point.distance(&first);
        let s = l1.mul_add(l1, l2.mul_add(l2, -l3 * l3)) / (2.0 * l1);
        clamp((l1 - s) / l1, 0.0, 1.0)
    }
}

/// Linear interpolation between two points.
pub fn linear<P: ControlPoint>(t: f32, p0: P, p1: P) -> P {
    p0.scale(1.0 - t).add(&p1.scale(t))
}

/// Quadratic Bezier evaluation.
pub fn quadratic<P: ControlPoint>(t: f32, p0: P, p1: P, p2: P) -> P {
    let dt = 1.0 - t;
    p0.scale(dt * dt)
        .add(&p1.scale(2.0 * dt * t))
        .add(&p2.scale(t * t))
}

/// Cubic Bezier evaluation.
pub fn cubic<P: ControlPoint>(t: f32, p0: P, p1: P, p2: P, p3: P) -> P {
    let dt = 1.0 - t;
    let dt2 = dt * dt;
    let t2 = t * t;
    p0.scale(dt2 * dt)
        .add(&p1.scale(3.0 * dt2 * t))
        .add(&p2.scale(3.0 * dt * t2))
        .add(&p3.scale(t2 * t))
}
