// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scalar constants and helpers shared by every vector and matrix type.
//!
//! Transcendentals use the inherent `f32` methods; the `*_deg` helpers exist
//! because the public API takes degrees everywhere.

/// π in single precision.
pub const PI: f32 = core::f32::consts::PI;

/// 2π in single precision.
pub const PI2: f32 = core::f32::consts::TAU;

/// √2 in single precision.
pub const SQRT2: f32 = core::f32::consts::SQRT_2;

/// Multiply degrees by this to obtain radians.
pub const DEG_TO_RAD: f32 = PI / 180.0;

/// Multiply radians by this to obtain degrees.
pub const RAD_TO_DEG: f32 = 180.0 / PI;

/// Quaternions whose squared length is within this distance of `1.0` are
/// treated as already normalised; also used by the `is_unit` vector checks.
pub const NORMALIZATION_TOLERANCE: f32 = 1e-5;

/// Degeneracy threshold for axis lengths and near-zero denominators.
pub const EPSILON: f32 = 1e-6;

/// Relative error bound used by [`nearly_equal`].
pub const NEARLY_EQUAL_RELATIVE: f32 = 1e-4;

/// Converts degrees to radians.
pub fn deg_to_rad(value: f32) -> f32 {
    value * DEG_TO_RAD
}

/// Converts radians to degrees.
pub fn rad_to_deg(value: f32) -> f32 {
    value * RAD_TO_DEG
}

/// Sine of an angle in degrees.
pub fn sin_deg(degrees: f32) -> f32 {
    deg_to_rad(degrees).sin()
}

/// Cosine of an angle in degrees.
pub fn cos_deg(degrees: f32) -> f32 {
    deg_to_rad(degrees).cos()
}

/// Tangent of an angle in degrees.
pub fn tan_deg(degrees: f32) -> f32 {
    deg_to_rad(degrees).tan()
}

/// Clamps `value` to the inclusive `[min, max]` range.
///
/// The range must be ordered; this is checked in debug builds only.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    debug_assert!(min <= max, "invalid clamp range: {min} > {max}");
    value.max(min).min(max)
}

/// Integer counterpart of [`clamp`].
pub fn clamp_i32(value: i32, min: i32, max: i32) -> i32 {
    debug_assert!(min <= max, "invalid clamp range: {min} > {max}");
    value.max(min).min(max)
}

/// Returns `a` when `a < b`, otherwise `b`.
///
/// Unlike [`f32::min`], a `NaN` in `a` yields `b` and a `NaN` in `b` yields `b`.
pub fn min(a: f32, b: f32) -> f32 {
    if a < b {
        a
    } else {
        b
    }
}

/// Returns `a` when `a > b`, otherwise `b`.
pub fn max(a: f32, b: f32) -> f32 {
    if a > b {
        a
    } else {
        b
    }
}

/// Smallest power of two greater than or equal to `value` (`0` maps to `1`).
///
/// Saturates at `2^31` for inputs above it.
pub fn next_power_of_two(value: u32) -> u32 {
    value.checked_next_power_of_two().unwrap_or(1 << 31)
}

/// Returns `true` when `value` is a non-zero power of two.
pub fn is_power_of_two(value: u32) -> bool {
    value.is_power_of_two()
}

/// Relative float comparison: exact equality, or
/// `|a − b| / (|a| + |b|) <` [`NEARLY_EQUAL_RELATIVE`].
///
/// ```
/// use lumen_math::nearly_equal;
/// assert!(nearly_equal(1.0, 1.00001));
/// assert!(!nearly_equal(1.0, 1.01));
/// assert!(nearly_equal(0.0, 0.0));
/// ```
#[allow(clippy::float_cmp)]
pub fn nearly_equal(a: f32, b: f32) -> bool {
    if a == b {
        return true;
    }
    (a - b).abs() / (a.abs() + b.abs()) < NEARLY_EQUAL_RELATIVE
}

/// Comparison policy combining an absolute floor with a relative bound.
///
/// Two values match when `|actual − expected| ≤ max(absolute, relative·|expected|)`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tolerance {
    /// Absolute error floor.
    pub absolute: f32,
    /// Error bound proportional to the magnitude of the expected value.
    pub relative: f32,
}

impl Tolerance {
    /// Tight tolerance for values computed without accumulation.
    pub const DEFAULT: Self = Self::new(1e-6, 1e-6);

    /// Looser tolerance for trigonometry-heavy results (projection, slerp).
    pub const LOOSE: Self = Self::new(1e-4, 1e-4);

    /// Creates a tolerance from its two bounds.
    pub const fn new(absolute: f32, relative: f32) -> Self {
        Self { absolute, relative }
    }

    /// Maximum error accepted against `reference`.
    pub fn allowed_error(&self, reference: f32) -> f32 {
        self.absolute.max(self.relative * reference.abs())
    }

    /// Returns `true` when `actual` is within tolerance of `expected`.
    pub fn approx_eq(&self, actual: f32, expected: f32) -> bool {
        (actual - expected).abs() <= self.allowed_error(expected)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}
