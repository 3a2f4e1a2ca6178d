// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Statistical Distributions Module** - *Density, CDF and Quantile Kernels*
//!
//! Distribution kernels providing probability density functions (PDFs), cumulative
//! distribution functions (CDFs) and quantile functions for continuous families with
//! support on `[0, ∞)`.
//!
//! ## Quantile Evaluation
//! Every quantile call runs the same pipeline per element:
//! 1. **Classify** `p` (NaN, out of range, `0`, `1`, interior) and the parameters
//!    (NaN, invalid, degenerate at zero, infinite, valid).
//! 2. **Resolve** the pair against an ordered rule table. Most edge cases end here with a
//!    fixed sentinel (`NaN`, `0` or `+∞`).
//! 3. **Search** what is left, either in closed form or by a safeguarded Newton/bisection
//!    inversion of the forward CDF.
//!
//! ## Shapes and Nulls
//! Kernels accept a scalar, a slice or `Vec`, an `ndarray` 1-D or 2-D array, or a Minarrow
//! `FloatArray<f64>`, and return the same shape. Parameters are either a single shared value
//! or a container of exactly the input's shape.
//!
//! ### Null Value Philosophy
//! Rather than assume, we choose to recognise inf and NaN as valid float values
//! (consistent with Apache Arrow semantics), leaving it to the user to subsequently
//! treat them as nulls if they wish. Lanes that are null in a validity mask come back
//! as `NaN` and stay null; values the kernel produces are never turned into nulls.
//!
//! ## Numerical Precision
//! Quantiles are refined until `|F(x) - p|` falls below the configured tolerance scaled by
//! the tail mass, or the Newton step stalls at the relative tolerance. See `./tests` for the
//! reference fixtures.

/// # **Shared Distribution Utilities** - *Common Infrastructure for Distribution Computing*
///
/// ## Modules
/// - **`constants`**: Mathematical constants and precomputed coefficients
/// - **`scalar`**: Special functions (log-gamma, regularised incomplete gamma, inverse normal)
/// - **`classify`**: Probability and parameter classification
/// - **`edge_rules`**: Ordered edge-case table for quantile evaluation
/// - **`root_finder`**: Safeguarded Newton/bisection CDF inversion
pub mod shared {
    pub mod classify;
    pub mod constants;
    pub mod edge_rules;
    pub mod root_finder;
    pub mod scalar;
}

/// # **Univariate Distributions** - *Single-Variable Probability Distributions*
///
/// - **Continuous**: chi-squared, exponential, gamma
/// - **Common utilities**: Shape carriers, element-wise kernels and the quantile pipeline
pub mod univariate {
    // common kernel patterns
    pub mod common;

    // distributions
    pub mod chi_squared;
    /// Exponential distribution kernels - continuous distribution for inter-arrival times.
    pub mod exponential;
    pub mod gamma;
}
