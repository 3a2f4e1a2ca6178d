// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Gamma Distribution
//!
//! The gamma distribution is a two-parameter continuous probability distribution widely used in
//! statistical modelling, particularly for positive-valued random variables. It generalises both
//! the exponential and the chi-squared distributions.
//!
//! ## Mathematical Definition
//!
//! Parameterised by a shape α and a rate β:
//!
//! - **PDF**: f(x; α, β) = β^α x^(α-1) exp(-βx) / Γ(α) for x ≥ 0
//! - **CDF**: F(x; α, β) = P(α, βx)
//! - **Quantile**: x such that F(x) = p
//!
//! Where P is the regularised lower incomplete gamma function.
//!
//! ## Degenerate Parameters
//!
//! Shape `0` or rate `+∞` put all the mass at the origin. Shape `+∞` or rate `0` leave no
//! finite mass. Negative or NaN parameters give `NaN`.
//!
//! ## Common Applications
//!
//! - **Reliability engineering**: Time-to-failure analysis
//! - **Queuing theory**: Waiting time for the α-th event of a Poisson process
//! - **Bayesian statistics**: Conjugate prior for precision parameters

mod std;

pub use self::std::{Gamma, GammaParams};

use minarrow::Bitmask;

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::root_finder::RootFinder;
use crate::kernels::scientific::distributions::univariate::common::family::{
    cdf, pdf, quantile, quantile_over_params, quantile_to,
};
use crate::kernels::scientific::distributions::univariate::common::shape::{
    ShapeCarrier, Shaped,
};

/// Gamma quantile of a single probability with the default root finder.
///
/// ```rust
/// use quantile_kernels::kernels::scientific::distributions::univariate::gamma::gamma_quantile_scalar;
///
/// // Gamma(1, 1) is the unit exponential
/// let x = gamma_quantile_scalar(0.5, 1.0, 1.0);
/// assert!((x - std::f64::consts::LN_2).abs() < 1e-12);
/// ```
#[inline(always)]
pub fn gamma_quantile_scalar(p: f64, shape: f64, rate: f64) -> f64 {
    std::gamma_quantile_std(p, GammaParams::new(shape, rate), &RootFinder::default())
}

/// Gamma quantile function over any supported shape.
///
/// `params` is a single `GammaParams` or a container of them with exactly `p`'s shape.
#[inline(always)]
pub fn gamma_quantile<I, D>(p: &I, params: &D) -> Result<I::Output, KernelError>
where
    I: ShapeCarrier<f64> + ?Sized,
    D: Shaped<GammaParams> + ?Sized,
{
    quantile::<Gamma, I, D>(p, params, &RootFinder::default(), "gamma_quantile")
}

/// As `gamma_quantile`, with explicit tolerances and iteration cap.
#[inline(always)]
pub fn gamma_quantile_with<I, D>(
    p: &I,
    params: &D,
    finder: &RootFinder,
) -> Result<I::Output, KernelError>
where
    I: ShapeCarrier<f64> + ?Sized,
    D: Shaped<GammaParams> + ?Sized,
{
    quantile::<Gamma, I, D>(p, params, finder, "gamma_quantile_with")
}

/// Gamma quantile of one probability across a container of parameter sets.
#[inline(always)]
pub fn gamma_quantile_over_params<D>(p: f64, params: &D) -> Result<D::Output, KernelError>
where
    D: ShapeCarrier<GammaParams> + ?Sized,
{
    quantile_over_params::<Gamma, D>(
        p,
        params,
        &RootFinder::default(),
        "gamma_quantile_over_params",
    )
}

/// Gamma quantile into a caller-provided buffer.
#[inline(always)]
pub fn gamma_quantile_to(
    p: &[f64],
    shape: f64,
    rate: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    quantile_to::<Gamma>(
        p,
        GammaParams::new(shape, rate),
        output,
        null_mask,
        null_count,
        &RootFinder::default(),
        "gamma_quantile_to",
    )
}

#[inline(always)]
pub fn gamma_cdf_scalar(x: f64, shape: f64, rate: f64) -> f64 {
    std::gamma_cdf_std(x, GammaParams::new(shape, rate))
}

#[inline(always)]
pub fn gamma_pdf_scalar(x: f64, shape: f64, rate: f64) -> f64 {
    std::gamma_pdf_std(x, GammaParams::new(shape, rate))
}

/// Gamma CDF over any supported shape.
#[inline(always)]
pub fn gamma_cdf<I, D>(x: &I, params: &D) -> Result<I::Output, KernelError>
where
    I: ShapeCarrier<f64> + ?Sized,
    D: Shaped<GammaParams> + ?Sized,
{
    cdf::<Gamma, I, D>(x, params, "gamma_cdf")
}

/// Gamma PDF over any supported shape.
#[inline(always)]
pub fn gamma_pdf<I, D>(x: &I, params: &D) -> Result<I::Output, KernelError>
where
    I: ShapeCarrier<f64> + ?Sized,
    D: Shaped<GammaParams> + ?Sized,
{
    pdf::<Gamma, I, D>(x, params, "gamma_pdf")
}
