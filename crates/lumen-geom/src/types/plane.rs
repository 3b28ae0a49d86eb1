// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use lumen_math::Vec3;

/// Which side of a [`Plane`] a point lies on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlaneSide {
    /// Signed distance is exactly zero.
    OnPlane,
    /// Signed distance is negative (opposite the normal).
    Back,
    /// Signed distance is positive (along the normal).
    Front,
}

/// Plane `normal · p + d = 0` with a unit normal.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plane {
    normal: Vec3,
    d: f32,
}

impl Plane {
    /// Creates a plane from a normal (normalised here) and distance term `d`.
    pub fn new(normal: Vec3, d: f32) -> Self {
        Self {
            normal: normal.normalize(),
            d,
        }
    }

    /// Plane through `point` with the given normal.
    pub fn from_normal_and_point(normal: Vec3, point: Vec3) -> Self {
        let normal = normal.normalize();
        Self {
            normal,
            d: -normal.dot(&point),
        }
    }

    /// Plane through three points.
    ///
    /// The normal is `normalize((p1 − p2) × (p2 − p3))`, so winding decides
    /// which side is front. Collinear points produce a zero normal.
    pub fn from_points(p1: Vec3, p2: Vec3, p3: Vec3) -> Self {
        let normal = p1.sub(&p2).cross(&p2.sub(&p3)).normalize();
        Self {
            normal,
            d: -p1.dot(&normal),
        }
    }

    /// Unit normal.
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Distance term.
    pub fn d(&self) -> f32 {
        self.d
    }

    /// Signed distance from the plane to `point`.
    pub fn distance(&self, point: &Vec3) -> f32 {
        self.normal.dot(point) + self.d
    }

    /// Classifies `point`; only an exactly zero distance counts as on-plane.
    ///
    /// ```
    /// use lumen_geom::{Plane, PlaneSide};
    /// use lumen_math::Vec3;
    /// let ground = Plane::new(Vec3::UNIT_Y, 0.0);
    /// assert_eq!(ground.side(&Vec3::new(0.0, 2.0, 0.0)), PlaneSide::Front);
    /// assert_eq!(ground.side(&Vec3::new(5.0, 0.0, 1.0)), PlaneSide::OnPlane);
    /// ```
    pub fn side(&self, point: &Vec3) -> PlaneSide {
        let dist = self.distance(point);
        if dist < 0.0 {
            PlaneSide::Back
        } else if dist > 0.0 {
            PlaneSide::Front
        } else {
            PlaneSide::OnPlane
        }
    }

    /// Returns `true` when a viewer looking along `direction` sees the front
    /// face (`normal · direction ≤ 0`).
    pub fn is_front_facing(&self, direction: &Vec3) -> bool {
        self.normal.dot(direction) <= 0.0
    }
}
