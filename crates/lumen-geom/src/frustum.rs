// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! View frustum built from a (projection · view) matrix.
//!
//! The eight corners of the NDC cube are pushed through the inverse
//! projection-view matrix and six planes are fitted to them. With a standard
//! right-handed perspective or orthographic projection every plane normal
//! points into the volume, so a point is outside when it lies behind any plane.

use lumen_math::{Mat4, MathError, Vec3};
use tracing::trace;

use crate::{Aabb, Plane, PlaneSide};

/// Corners of the NDC cube in the order the frustum planes index them.
///
/// Near face (`z = −1`) counter-clockwise from `(−1, −1)`, then the far face.
pub const CLIP_SPACE_CORNERS: [Vec3; 8] = [
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(-1.0, -1.0, 1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
];

const NEAR: usize = 0;
const FAR: usize = 1;
const LEFT: usize = 2;
const RIGHT: usize = 3;
const TOP: usize = 4;
const BOTTOM: usize = 5;

/// Six clipping planes plus the world-space corner points they were fitted to.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frustum {
    planes: [Plane; 6],
    corners: [Vec3; 8],
}

impl Frustum {
    /// Builds the frustum from an already inverted projection-view matrix.
    pub fn from_inverse_projection_view(inverse: &Mat4) -> Self {
        let corners = CLIP_SPACE_CORNERS.map(|c| inverse.project_point(&c));
        Self {
            planes: planes_from_corners(&corners),
            corners,
        }
    }

    /// Inverts `projection_view` and builds the frustum.
    ///
    /// Fails with [`MathError::SingularMatrix`] when the matrix cannot be inverted.
    pub fn from_projection_view(projection_view: &Mat4) -> Result<Self, MathError> {
        Ok(Self::from_inverse_projection_view(&projection_view.inverse()?))
    }

    /// Recomputes corners and planes for a new inverse projection-view matrix.
    pub fn update(&mut self, inverse: &Mat4) {
        *self = Self::from_inverse_projection_view(inverse);
        trace!(near = ?self.planes[NEAR], "frustum rebuilt");
    }

    /// All six planes in the order near, far, left, right, top, bottom.
    pub fn planes(&self) -> &[Plane; 6] {
        &self.planes
    }

    /// World-space corners, in [`CLIP_SPACE_CORNERS`] order.
    pub fn corners(&self) -> &[Vec3; 8] {
        &self.corners
    }

    /// Near plane.
    pub fn near(&self) -> &Plane {
        &self.planes[NEAR]
    }

    /// Far plane.
    pub fn far(&self) -> &Plane {
        &self.planes[FAR]
    }

    /// Left plane.
    pub fn left(&self) -> &Plane {
        &self.planes[LEFT]
    }

    /// Right plane.
    pub fn right(&self) -> &Plane {
        &self.planes[RIGHT]
    }

    /// Top plane.
    pub fn top(&self) -> &Plane {
        &self.planes[TOP]
    }

    /// Bottom plane.
    pub fn bottom(&self) -> &Plane {
        &self.planes[BOTTOM]
    }

    /// Returns `true` unless `point` is behind one of the planes.
    pub fn point_in_frustum(&self, point: &Vec3) -> bool {
        self.planes.iter().all(|p| p.side(point) != PlaneSide::Back)
    }

    /// Returns `true` unless the sphere lies completely behind one of the planes.
    pub fn sphere_in_frustum(&self, center: &Vec3, radius: f32) -> bool {
        sphere_passes(&self.planes, center, radius)
    }

    /// Like [`Frustum::sphere_in_frustum`] but ignores the near and far planes.
    pub fn sphere_in_frustum_without_near_far(&self, center: &Vec3, radius: f32) -> bool {
        sphere_passes(&self.planes[LEFT..], center, radius)
    }

    /// Returns `true` unless all eight corners of `bounds` are behind one plane.
    ///
    /// Conservative: boxes near a frustum edge may be accepted while lying
    /// outside.
    pub fn bounds_in_frustum(&self, bounds: &Aabb) -> bool {
        let corners = bounds.corners();
        self.planes
            .iter()
            .all(|plane| corners.iter().any(|c| plane.side(c) != PlaneSide::Back))
    }
}

fn sphere_passes(planes: &[Plane], center: &Vec3, radius: f32) -> bool {
    planes
        .iter()
        .all(|p| p.normal().dot(center) >= -radius - p.d())
}

fn planes_from_corners(p: &[Vec3; 8]) -> [Plane; 6] {
    // Indexed by NEAR, FAR, LEFT, RIGHT, TOP, BOTTOM.
    [
        Plane::from_points(p[1], p[0], p[2]),
        Plane::from_points(p[4], p[5], p[7]),
        Plane::from_points(p[0], p[4], p[3]),
        Plane::from_points(p[5], p[1], p[6]),
        Plane::from_points(p[2], p[3], p[6]),
        Plane::from_points(p[4], p[0], p[1]),
    ]
}
