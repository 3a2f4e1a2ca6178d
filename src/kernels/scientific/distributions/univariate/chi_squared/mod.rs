// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Chi-Squared Distribution** - *Critical Values and Goodness-of-Fit Testing*
//!
//! Density, cumulative distribution and quantile functions of the chi-squared
//! distribution, evaluated over scalars, sequences, matrices and Arrow arrays.
//!
//! ### Parameters
//! - **`dof` (degrees of freedom)**: Shape parameter `k ≥ 0`. `k == 0` is a point mass at
//!   the origin, `k == +∞` the limit with no finite mass; negative `k` yields `NaN`.
//!
//! ### Moment Properties
//! - **Mean**: `k`
//! - **Variance**: `2k`
//! - **Skewness**: `sqrt(8/k)`
//! - **Support**: `[0, ∞)`
//!
//! ## Quantile
//! There is no closed form. The quantile inverts `P(k/2, x/2) = p` with the shared root
//! finder, on the survival function `Q(k/2, x/2) = 1 - p` when `p > ½`, seeded by the
//! Wilson–Hilferty approximation (power-law head for very small `k`).
//!
//! ## Applications
//! - **Hypothesis testing**: Chi-squared goodness-of-fit and independence tests
//! - **Confidence intervals**: For variance estimates in normal populations
//! - **Model selection**: Likelihood ratio test statistics
mod std;

pub use self::std::ChiSquared;

use minarrow::Bitmask;

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::root_finder::RootFinder;
use crate::kernels::scientific::distributions::univariate::common::family::{
    cdf, pdf, quantile, quantile_over_params, quantile_to,
};
use crate::kernels::scientific::distributions::univariate::common::shape::{
    ShapeCarrier, Shaped,
};

/// Chi-square quantile of a single probability with the default root finder.
///
/// ```rust
/// use quantile_kernels::kernels::scientific::distributions::univariate::chi_squared::chi_square_quantile_scalar;
///
/// assert!((chi_square_quantile_scalar(0.1, 6.0) - 2.204131).abs() < 1e-5);
/// assert_eq!(chi_square_quantile_scalar(1.0, 0.0), f64::INFINITY);
/// assert!(chi_square_quantile_scalar(1.1, 6.0).is_nan());
/// ```
#[inline(always)]
pub fn chi_square_quantile_scalar(p: f64, dof: f64) -> f64 {
    std::chi_square_quantile_std(p, dof, &RootFinder::default())
}

/// Chi-square quantile function (inverse CDF).
///
/// For each `p` in `p`, returns the value `x` such that `P(X ≤ x) = p` for a chi-square
/// distribution with `dof` degrees of freedom. The result has the shape of `p`. `dof` is
/// either a single value or a container of exactly `p`'s shape.
#[inline(always)]
pub fn chi_square_quantile<I, D>(p: &I, dof: &D) -> Result<I::Output, KernelError>
where
    I: ShapeCarrier<f64> + ?Sized,
    D: Shaped<f64> + ?Sized,
{
    quantile::<ChiSquared, I, D>(p, dof, &RootFinder::default(), "chi_square_quantile")
}

/// As `chi_square_quantile`, with explicit tolerances and iteration cap.
#[inline(always)]
pub fn chi_square_quantile_with<I, D>(
    p: &I,
    dof: &D,
    finder: &RootFinder,
) -> Result<I::Output, KernelError>
where
    I: ShapeCarrier<f64> + ?Sized,
    D: Shaped<f64> + ?Sized,
{
    quantile::<ChiSquared, I, D>(p, dof, finder, "chi_square_quantile_with")
}

/// Chi-square quantile of one probability across a container of degrees of freedom.
/// The result has the shape of `dof`.
#[inline(always)]
pub fn chi_square_quantile_over_dof<D>(p: f64, dof: &D) -> Result<D::Output, KernelError>
where
    D: ShapeCarrier<f64> + ?Sized,
{
    quantile_over_params::<ChiSquared, D>(
        p,
        dof,
        &RootFinder::default(),
        "chi_square_quantile_over_dof",
    )
}

/// Chi-square quantile (zero-allocation variant).
///
/// Writes directly to caller-provided output buffer.
#[inline(always)]
pub fn chi_square_quantile_to(
    p: &[f64],
    dof: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    quantile_to::<ChiSquared>(
        p,
        dof,
        output,
        null_mask,
        null_count,
        &RootFinder::default(),
        "chi_square_quantile_to",
    )
}

/// Chi-square CDF: F(x; k) = P(k/2, x/2)
#[inline(always)]
pub fn chi_square_cdf_scalar(x: f64, dof: f64) -> f64 {
    std::chi_square_cdf_std(x, dof)
}

/// Chi-square PDF: f(x; k) = 1/(2^{k/2} Γ(k/2)) x^{k/2-1} e^{-x/2}
#[inline(always)]
pub fn chi_square_pdf_scalar(x: f64, dof: f64) -> f64 {
    std::chi_square_pdf_std(x, dof)
}

/// Chi-square CDF over any supported shape.
#[inline(always)]
pub fn chi_square_cdf<I, D>(x: &I, dof: &D) -> Result<I::Output, KernelError>
where
    I: ShapeCarrier<f64> + ?Sized,
    D: Shaped<f64> + ?Sized,
{
    cdf::<ChiSquared, I, D>(x, dof, "chi_square_cdf")
}

/// Chi-square PDF over any supported shape.
#[inline(always)]
pub fn chi_square_pdf<I, D>(x: &I, dof: &D) -> Result<I::Output, KernelError>
where
    I: ShapeCarrier<f64> + ?Sized,
    D: Shaped<f64> + ?Sized,
{
    pdf::<ChiSquared, I, D>(x, dof, "chi_square_pdf")
}
