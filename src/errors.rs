// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Error Types** - *Usage Errors for Distribution Kernels*
//!
//! Domain inputs never produce an error: NaN, out-of-range probabilities and degenerate
//! parameters all map to defined sentinel values. The variants below cover mistakes in
//! how a kernel is called, such as pairing containers of different shapes.

use thiserror::Error;

use crate::kernels::scientific::distributions::univariate::common::shape::Shape;

/// Error type for all kernel operations.
///
/// Each variant carries a message naming the kernel function and the offending sizes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KernelError {
    /// Per-element parameters do not have the shape of the input.
    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    /// Buffer or mask length does not match the input length.
    #[error("Length mismatch: {0}")]
    LengthMismatch(String),

    /// Invalid arguments provided to a kernel or solver configuration.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

/// Creates a formatted error message for length mismatches between left-hand side (LHS) and right-hand side (RHS) buffers.
///
/// # Arguments
/// * `fname` - Function name where the mismatch occurred
/// * `lhs` - Length of the left-hand side buffer
/// * `rhs` - Length of the right-hand side buffer
pub fn log_length_mismatch(fname: &str, lhs: usize, rhs: usize) -> String {
    format!("{fname} => Length mismatch: LHS {lhs} RHS {rhs}")
}

/// Creates a formatted error message for an input/parameter shape mismatch.
pub fn log_shape_mismatch(fname: &str, input: Shape, params: Shape) -> String {
    format!("{fname} => input shape {input} but parameter shape {params}")
}
