// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use lumen_math::{Mat4, MathError, Vec3, Viewport};
use tracing::debug;

/// Half-line from `origin` along `direction`.
///
/// The direction is stored as given; it is not normalised, so
/// [`Ray::end_point`] distances are measured in multiples of its length.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ray {
    origin: Vec3,
    direction: Vec3,
}

impl Ray {
    /// Creates a ray.
    pub const fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Starting point.
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Direction.
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// `origin + direction · distance`.
    pub fn end_point(&self, distance: f32) -> Vec3 {
        self.origin.add(&self.direction.scale(distance))
    }

    /// Transforms the ray by `mat`.
    ///
    /// Both `origin` and `origin + direction` are transformed as points and the
    /// new direction is their difference, so non-uniform scale stretches it.
    pub fn transformed(&self, mat: &Mat4) -> Self {
        let tip = mat.transform_point(&self.origin.add(&self.direction));
        let origin = mat.transform_point(&self.origin);
        Self {
            origin,
            direction: tip.sub(&origin),
        }
    }

    /// Pick ray through window coordinates (`window_x`, `window_y`).
    ///
    /// Unprojects the point at depth 0 (near plane) and depth 1 (far plane);
    /// the resulting ray starts on the near plane with a unit direction.
    pub fn pick(
        window_x: f32,
        window_y: f32,
        modelview: &Mat4,
        projection: &Mat4,
        viewport: &Viewport,
    ) -> Result<Self, MathError> {
        let near = Mat4::unproject(
            &Vec3::new(window_x, window_y, 0.0),
            modelview,
            projection,
            viewport,
        );
        let far = Mat4::unproject(
            &Vec3::new(window_x, window_y, 1.0),
            modelview,
            projection,
            viewport,
        );
        match (near, far) {
            (Ok(near), Ok(far)) => Ok(Self::new(near, far.sub(&near).normalize())),
            (Err(err), _) | (_, Err(err)) => {
                debug!(?err, window_x, window_y, "pick ray unavailable");
                Err(err)
            }
        }
    }
}
