// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Planar shapes in the XY plane.

#[doc = "Circles."]
pub mod circle;
#[doc = "Axis-aligned ellipses."]
pub mod ellipse;
#[doc = "Integer grid points."]
pub mod point;
#[doc = "Transformable polygons."]
pub mod polygon;
#[doc = "Axis-aligned rectangles."]
pub mod rectangle;
