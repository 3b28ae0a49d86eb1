// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Core 3D geometry types (planes, bounding volumes, rays, transforms).
//!
//! Notes:
//! - `Aabb` overlap and containment are inclusive on faces.
//! - Plane classification uses an exact zero test; callers wanting a slab
//!   should compare [`plane::Plane::distance`] against their own epsilon.

#[doc = "Axis-aligned bounding boxes."]
pub mod aabb;
#[doc = "Planes and side classification."]
pub mod plane;
#[doc = "Rays with origin and direction."]
pub mod ray;
#[doc = "Line segments."]
pub mod segment;
#[doc = "Bounding spheres."]
pub mod sphere;
#[doc = "Rigid transforms with non-uniform scale."]
pub mod transform;
