// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use lumen_math::{Vec3, PI};

/// Bounding sphere.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sphere {
    center: Vec3,
    radius: f32,
}

impl Sphere {
    /// Creates a sphere.
    pub const fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Center point.
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Radius.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Returns `true` when the spheres intersect; touching spheres do not.
    ///
    /// ```
    /// use lumen_geom::Sphere;
    /// use lumen_math::Vec3;
    /// let a = Sphere::new(Vec3::new(1.0, -2.0, 0.0), 12.0);
    /// let b = Sphere::new(Vec3::new(0.0, 2.0, 0.0), 30.0);
    /// assert!(a.overlaps(&b));
    /// ```
    pub fn overlaps(&self, other: &Self) -> bool {
        let reach = self.radius + other.radius;
        self.center.distance_squared(&other.center) < reach * reach
    }

    /// Returns `true` when `point` is inside or on the surface.
    pub fn contains_point(&self, point: &Vec3) -> bool {
        self.center.distance_squared(point) <= self.radius * self.radius
    }

    /// Volume `4/3 π r³`.
    pub fn volume(&self) -> f32 {
        4.0 / 3.0 * PI * self.radius * self.radius * self.radius
    }

    /// Surface area `4 π r²`.
    pub fn surface_area(&self) -> f32 {
        4.0 * PI * self.radius * self.radius
    }
}
