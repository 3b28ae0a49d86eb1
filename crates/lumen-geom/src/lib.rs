// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![forbid(unsafe_code)]
#![doc = r"Geometry primitives for Lumen.

This crate provides:
- Planes with side classification (`Plane`, `PlaneSide`).
- View-frustum culling (`Frustum`) for points, spheres, and boxes.
- Bounding volumes (`Aabb`, `Sphere`), rays, and segments.
- Rigid transforms (`Transform`).
- Planar shapes (`Rectangle`, `Circle`, `Ellipse`, `Polygon`, `Point`, `Point3`).
- Parametric curves (`Bezier`, `Path`).

Design notes:
- Float32 throughout; all angles are degrees.
- Overlap and containment predicates document whether they are inclusive.
- Fallible constructors return `lumen_math::MathError`.
"]

/// View-frustum construction and culling.
pub mod frustum;
/// Ray and triangle intersection tests.
pub mod intersect;
/// Bezier curves and the `Path` abstraction.
pub mod path;
/// Planar (2D) shapes.
pub mod planar;
/// Foundational geometric types.
pub mod types;

pub use frustum::{Frustum, CLIP_SPACE_CORNERS};
pub use lumen_math::MathError;
pub use path::{Bezier, Bezier2, Bezier3, ControlPoint, Path};
pub use planar::circle::Circle;
pub use planar::ellipse::Ellipse;
pub use planar::point::{Point, Point3};
pub use planar::polygon::Polygon;
pub use planar::rectangle::Rectangle;
pub use types::aabb::Aabb;
pub use types::plane::{Plane, PlaneSide};
pub use types::ray::Ray;
pub use types::segment::Segment;
pub use types::sphere::Sphere;
pub use types::transform::Transform;
