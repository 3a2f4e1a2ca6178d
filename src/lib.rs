// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under the Mozilla Public License (MPL) 2.0.
// See LICENSE for details.

//! # **Quantile Kernels** - *Inverse CDF evaluation over scalars, arrays and matrices*
//!
//! Density, cumulative distribution and quantile kernels for continuous distributions with
//! non-negative support. The quantile engine is built from four pieces:
//!
//! - **Classification** of the probability and of the distribution parameters
//!   (`shared::classify`).
//! - An **ordered edge-case table** resolving NaN, out-of-range, boundary and degenerate
//!   inputs to fixed sentinels before any search (`shared::edge_rules`).
//! - A **safeguarded Newton/bisection root finder** inverting the forward CDF
//!   (`shared::root_finder`).
//! - **Shape-preserving dispatch** lifting the scalar kernel over slices, `Vec`s,
//!   Arrow `FloatArray`s and `ndarray` matrices, with scalar or per-element parameters
//!   (`univariate::common`).
//!
//! ```rust
//! use quantile_kernels::kernels::scientific::distributions::univariate::chi_squared::{
//!     chi_square_quantile, chi_square_quantile_scalar,
//! };
//!
//! let x = chi_square_quantile_scalar(0.95, 6.0);
//! assert!((x - 12.59159).abs() < 1e-5);
//!
//! let xs = chi_square_quantile(&[0.1, 0.6, 0.95], &6.0).unwrap();
//! assert_eq!(xs.len(), 3);
//! ```

pub mod kernels {
    pub mod scientific {
        pub mod distributions;
    }
}

pub mod config;

pub mod errors;

pub mod utils;
