// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use lumen_math::{Mat4, Quat, Vec3};

/// Rigid transform with non-uniform scale, used to assemble model matrices.
///
/// Conventions:
/// - `translation` in world units.
/// - `rotation` as a unit quaternion (normalized when converting).
/// - `scale` is non-uniform and applied before rotation/translation.
///
/// `to_mat4` constructs `M = T * R * S`. Negative scales are supported but
/// flip handedness, which reverses [`crate::Plane::from_points`] winding.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    translation: Vec3,
    rotation: Quat,
    scale: Vec3,
}

impl Transform {
    /// Identity transform (no translation, no rotation, unit scale).
    pub const fn identity() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::identity(),
            scale: Vec3::splat(1.0),
        }
    }

    /// Creates a transform from components.
    pub const fn new(translation: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }

    /// Translation component.
    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    /// Rotation component.
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Scale component.
    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    /// Copy with a new translation.
    pub fn with_translation(&self, translation: Vec3) -> Self {
        Self {
            translation,
            ..*self
        }
    }

    /// Copy with a new rotation.
    pub fn with_rotation(&self, rotation: Quat) -> Self {
        Self { rotation, ..*self }
    }

    /// Copy with a new scale.
    pub fn with_scale(&self, scale: Vec3) -> Self {
        Self { scale, ..*self }
    }

    /// Returns the column-major `Mat4` corresponding to this transform.
    pub fn to_mat4(&self) -> Mat4 {
        // M = T * R * S (column-major)
        let [sx, sy, sz] = self.scale.to_array();
        let [tx, ty, tz] = self.translation.to_array();
        Mat4::translation(tx, ty, tz)
            .multiply(&self.rotation.to_mat4())
            .multiply(&Mat4::scale(sx, sy, sz))
    }

    /// Applies the transform to a point (scale, then rotate, then translate).
    pub fn transform_point(&self, point: &Vec3) -> Vec3 {
        let scaled = point.mul(&self.scale);
        self.rotation.normalize().rotate_vec3(&scaled).add(&self.translation)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
