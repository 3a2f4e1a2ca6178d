// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

mod std;

pub use self::std::Exponential;

use minarrow::Bitmask;

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::root_finder::RootFinder;
use crate::kernels::scientific::distributions::univariate::common::family::{
    cdf, pdf, quantile, quantile_over_params, quantile_to,
};
use crate::kernels::scientific::distributions::univariate::common::shape::{
    ShapeCarrier, Shaped,
};

/// Exponential quantile (inverse CDF): Q(p|λ) = –ln(1–p)/λ
#[inline(always)]
pub fn exponential_quantile_scalar(p: f64, lambda: f64) -> f64 {
    std::exponential_quantile_std(p, lambda, &RootFinder::default())
}

/// Exponential quantile over any supported shape, with `lambda` shared or per element.
#[inline(always)]
pub fn exponential_quantile<I, D>(p: &I, lambda: &D) -> Result<I::Output, KernelError>
where
    I: ShapeCarrier<f64> + ?Sized,
    D: Shaped<f64> + ?Sized,
{
    quantile::<Exponential, I, D>(p, lambda, &RootFinder::default(), "exponential_quantile")
}

/// As `exponential_quantile`. The closed form ignores `finder`; the signature matches the
/// searched families.
#[inline(always)]
pub fn exponential_quantile_with<I, D>(
    p: &I,
    lambda: &D,
    finder: &RootFinder,
) -> Result<I::Output, KernelError>
where
    I: ShapeCarrier<f64> + ?Sized,
    D: Shaped<f64> + ?Sized,
{
    quantile::<Exponential, I, D>(p, lambda, finder, "exponential_quantile_with")
}

#[inline(always)]
pub fn exponential_quantile_over_rate<D>(p: f64, lambda: &D) -> Result<D::Output, KernelError>
where
    D: ShapeCarrier<f64> + ?Sized,
{
    quantile_over_params::<Exponential, D>(
        p,
        lambda,
        &RootFinder::default(),
        "exponential_quantile_over_rate",
    )
}

/// Exponential quantile (zero-allocation variant).
///
/// Writes directly to caller-provided output buffer.
#[inline(always)]
pub fn exponential_quantile_to(
    p: &[f64],
    lambda: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    quantile_to::<Exponential>(
        p,
        lambda,
        output,
        null_mask,
        null_count,
        &RootFinder::default(),
        "exponential_quantile_to",
    )
}

/// Exponential CDF: F(x|λ) = 1 – exp(–λ·x) for x ≥ 0, 0 otherwise.
#[inline(always)]
pub fn exponential_cdf_scalar(x: f64, lambda: f64) -> f64 {
    std::exponential_cdf_std(x, lambda)
}

/// Exponential PDF: f(x|λ) = λ·exp(-λ·x) for x ≥ 0, 0 otherwise.
#[inline(always)]
pub fn exponential_pdf_scalar(x: f64, lambda: f64) -> f64 {
    std::exponential_pdf_std(x, lambda)
}

#[inline(always)]
pub fn exponential_cdf<I, D>(x: &I, lambda: &D) -> Result<I::Output, KernelError>
where
    I: ShapeCarrier<f64> + ?Sized,
    D: Shaped<f64> + ?Sized,
{
    cdf::<Exponential, I, D>(x, lambda, "exponential_cdf")
}

#[inline(always)]
pub fn exponential_pdf<I, D>(x: &I, lambda: &D) -> Result<I::Output, KernelError>
where
    I: ShapeCarrier<f64> + ?Sized,
    D: Shaped<f64> + ?Sized,
{
    pdf::<Exponential, I, D>(x, lambda, "exponential_pdf")
}
