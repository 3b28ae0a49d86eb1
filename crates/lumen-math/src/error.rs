// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use thiserror::Error;

/// Errors emitted by fallible math and geometry operations.
///
/// Only two conditions are reported; every other operation is total (for
/// example, normalising a zero vector returns zero, and component division by
/// zero yields the IEEE result).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MathError {
    /// A matrix inversion was requested but the determinant is exactly zero.
    #[error("matrix is singular (determinant = {determinant})")]
    SingularMatrix {
        /// Determinant computed for the rejected matrix.
        determinant: f32,
    },
    /// A shape was constructed from too few (or malformed) input points.
    #[error("degenerate {shape}: requires {required}, got {actual}")]
    DegenerateInput {
        /// Name of the shape that rejected the input.
        shape: &'static str,
        /// Human-readable requirement, e.g. `"at least 3 points"`.
        required: &'static str,
        /// Number of values actually supplied.
        actual: usize,
    },
}
