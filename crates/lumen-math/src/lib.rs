// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! lumen-math: single-precision linear algebra for real-time graphics.
//!
//! Scalar helpers, 2D/3D/4D vectors, column-major 3×3 and 4×4 matrices, and
//! quaternions. Every public angle is expressed in degrees; radians only appear
//! in [`deg_to_rad`] / [`rad_to_deg`] and inside the implementation.
//!
//! All types are small `Copy` values. Operations return new values rather than
//! mutating in place; compound assignment (`*=`) is offered for matrix and
//! quaternion chains.
#![forbid(unsafe_code)]

mod error;
mod mat3;
mod mat4;
mod quat;
mod scalar;
mod vec2;
mod vec3;
mod vec4;

pub use error::MathError;
pub use mat3::Mat3;
pub use mat4::{Mat4, Viewport};
pub use quat::Quat;
pub use scalar::{
    clamp, clamp_i32, cos_deg, deg_to_rad, is_power_of_two, max, min, nearly_equal,
    next_power_of_two, rad_to_deg, sin_deg, tan_deg, Tolerance, DEG_TO_RAD, EPSILON,
    NEARLY_EQUAL_RELATIVE, NORMALIZATION_TOLERANCE, PI, PI2, RAD_TO_DEG, SQRT2,
};
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;
