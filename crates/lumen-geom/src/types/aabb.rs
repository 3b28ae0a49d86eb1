// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use lumen_math::{Mat4, MathError, Vec3};
use tracing::debug;

/// Axis-aligned bounding box.
///
/// Invariants:
/// - `min` components are less than or equal to `max` components after every
///   constructor and extension, except for the empty sentinel from
///   [`Aabb::inf`].
/// - The sentinel (`min = f32::MAX`, `max = f32::MIN_POSITIVE` on every axis)
///   is absorbed by the first [`Aabb::extend`] / [`Aabb::extend_by_point`].
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    min: Vec3,
    max: Vec3,
}

fn component_min(a: &Vec3, b: &Vec3) -> Vec3 {
    Vec3::new(a.x().min(b.x()), a.y().min(b.y()), a.z().min(b.z()))
}

fn component_max(a: &Vec3, b: &Vec3) -> Vec3 {
    Vec3::new(a.x().max(b.x()), a.y().max(b.y()), a.z().max(b.z()))
}

impl Aabb {
    /// Constructs an AABB from two corners.
    ///
    /// Components are ordered per axis, so `new(a, b)` and `new(b, a)` build
    /// the same box even when `a` is not the minimum on every axis.
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: component_min(&a, &b),
            max: component_max(&a, &b),
        }
    }

    /// Empty sentinel box, ready to be grown with [`Aabb::extend_by_point`].
    pub const fn inf() -> Self {
        Self {
            min: Vec3::splat(f32::MAX),
            max: Vec3::splat(f32::MIN_POSITIVE),
        }
    }

    /// Returns `true` for the empty sentinel produced by [`Aabb::inf`].
    pub fn is_inf(&self) -> bool {
        *self == Self::inf()
    }

    /// Returns the minimum corner.
    pub fn min(&self) -> Vec3 {
        self.min
    }

    /// Returns the maximum corner.
    pub fn max(&self) -> Vec3 {
        self.max
    }

    /// Builds an AABB centered at `center` with half-extents `hx, hy, hz`.
    pub fn from_center_half_extents(center: Vec3, hx: f32, hy: f32, hz: f32) -> Self {
        let he = Vec3::new(hx, hy, hz);
        Self::new(center.sub(&he), center.add(&he))
    }

    /// Builds the minimal AABB that contains all `points`.
    ///
    /// Returns [`MathError::DegenerateInput`] when `points` is empty.
    pub fn from_points(points: &[Vec3]) -> Result<Self, MathError> {
        let Some((first, rest)) = points.split_first() else {
            debug!(shape = "aabb", actual = 0, "rejecting empty point set");
            return Err(MathError::DegenerateInput {
                shape: "aabb",
                required: "at least 1 point",
                actual: 0,
            });
        };
        Ok(rest
            .iter()
            .fold(Self { min: *first, max: *first }, |acc, p| acc.extend_by_point(p)))
    }

    /// Midpoint of the box.
    pub fn center(&self) -> Vec3 {
        self.min.add(&self.max).scale(0.5)
    }

    /// Size along each axis (`max − min`).
    pub fn dimensions(&self) -> Vec3 {
        self.max.sub(&self.min)
    }

    /// Width along X.
    pub fn dx(&self) -> f32 {
        self.max.x() - self.min.x()
    }

    /// Height along Y.
    pub fn dy(&self) -> f32 {
        self.max.y() - self.min.y()
    }

    /// Depth along Z.
    pub fn dz(&self) -> f32 {
        self.max.z() - self.min.z()
    }

    /// Returns `true` when the box has strictly positive extent on every axis.
    pub fn is_valid(&self) -> bool {
        self.min.x() < self.max.x() && self.min.y() < self.max.y() && self.min.z() < self.max.z()
    }

    /// The eight corners.
    ///
    /// Order: the `min.z` face counter-clockwise from `min`
    /// (`(min,min)`, `(max,min)`, `(max,max)`, `(min,max)` in x/y), then the
    /// same four at `max.z`.
    pub fn corners(&self) -> [Vec3; 8] {
        let [minx, miny, minz] = self.min.to_array();
        let [maxx, maxy, maxz] = self.max.to_array();
        [
            Vec3::new(minx, miny, minz),
            Vec3::new(maxx, miny, minz),
            Vec3::new(maxx, maxy, minz),
            Vec3::new(minx, maxy, minz),
            Vec3::new(minx, miny, maxz),
            Vec3::new(maxx, miny, maxz),
            Vec3::new(maxx, maxy, maxz),
            Vec3::new(minx, maxy, maxz),
        ]
    }

    /// Grows the box to contain `point`.
    pub fn extend_by_point(&self, point: &Vec3) -> Self {
        if self.is_inf() {
            return Self {
                min: *point,
                max: *point,
            };
        }
        Self {
            min: component_min(&self.min, point),
            max: component_max(&self.max, point),
        }
    }

    /// Grows the box to contain `other`.
    pub fn extend(&self, other: &Self) -> Self {
        if self.is_inf() {
            return *other;
        }
        if other.is_inf() {
            return *self;
        }
        Self {
            min: component_min(&self.min, &other.min),
            max: component_max(&self.max, &other.max),
        }
    }

    /// Returns the union of two AABBs (same as [`Aabb::extend`]).
    pub fn union(&self, other: &Self) -> Self {
        self.extend(other)
    }

    /// Inflates the box by a uniform margin `m` in all directions.
    pub fn inflate(&self, m: f32) -> Self {
        let delta = Vec3::splat(m);
        Self::new(self.min.sub(&delta), self.max.add(&delta))
    }

    /// Translates the box by `offset`.
    pub fn offset(&self, offset: &Vec3) -> Self {
        Self {
            min: self.min.add(offset),
            max: self.max.add(offset),
        }
    }

    /// Returns `true` if `point` lies inside or on the boundary.
    pub fn contains_point(&self, point: &Vec3) -> bool {
        (self.min.x()..=self.max.x()).contains(&point.x())
            && (self.min.y()..=self.max.y()).contains(&point.y())
            && (self.min.z()..=self.max.z()).contains(&point.z())
    }

    /// Returns `true` if `other` lies entirely inside this box (shared faces count).
    pub fn contains(&self, other: &Self) -> bool {
        self.contains_point(&other.min) && self.contains_point(&other.max)
    }

    /// Returns `true` if this AABB overlaps another (inclusive on faces).
    ///
    /// Separating-axis test: the boxes are disjoint only when some axis
    /// separates them.
    pub fn overlaps(&self, other: &Self) -> bool {
        let a_min = self.min.to_array();
        let a_max = self.max.to_array();
        let b_min = other.min.to_array();
        let b_max = other.max.to_array();
        (0..3).all(|i| a_min[i] <= b_max[i] && b_min[i] <= a_max[i])
    }

    /// Computes the AABB that bounds this box after transformation by `mat`.
    ///
    /// This evaluates the eight corners under the affine transform and builds a
    /// new axis-aligned box containing them.
    pub fn transformed(&self, mat: &Mat4) -> Self {
        let corners = self.corners();
        let first = mat.transform_point(&corners[0]);
        corners[1..].iter().fold(
            Self {
                min: first,
                max: first,
            },
            |acc, c| acc.extend_by_point(&mat.transform_point(c)),
        )
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::inf()
    }
}
