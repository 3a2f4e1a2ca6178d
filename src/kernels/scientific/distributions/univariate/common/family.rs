// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Quantile Families** - *One Scalar Kernel per Family, Lifted over Shapes*
//!
//! A family supplies its parameter classification, its forward CDF, survival function and
//! density on valid parameters, and a starting guess. `QuantileFamily` turns that into a
//! complete scalar quantile, and the free functions below lift any scalar kernel over the
//! containers in `shape`.

use minarrow::Bitmask;

use crate::errors::{KernelError, log_length_mismatch};
use crate::kernels::scientific::distributions::shared::classify::{
    ParamClass, classify_probability,
};
use crate::kernels::scientific::distributions::shared::edge_rules::{
    EdgeRule, NON_NEGATIVE_SUPPORT_RULES, Outcome, resolve,
};
use crate::kernels::scientific::distributions::shared::root_finder::RootFinder;
use crate::kernels::scientific::distributions::univariate::common::shape::{
    ShapeCarrier, Shaped, broadcast_params,
};
use crate::kernels::scientific::distributions::univariate::common::std::{
    dense_univariate_kernel_std_to, masked_univariate_kernel_std_to,
};
use crate::utils::{confirm_mask_capacity, has_nulls, merge_bitmasks_to_new};

/// A continuous distribution on `[0, ∞)` whose quantile is found by the shared pipeline.
pub trait QuantileFamily {
    type Params: Copy + Send + Sync;

    fn classify(params: Self::Params) -> ParamClass;

    /// `F(x)` for `ParamClass::Valid` parameters and `x >= 0`.
    fn cdf_valid(x: f64, params: Self::Params) -> f64;

    /// `1 - F(x)` for `ParamClass::Valid` parameters and `x >= 0`, without cancellation.
    fn sf_valid(x: f64, params: Self::Params) -> f64;

    /// `f(x)` for `ParamClass::Valid` parameters and `x >= 0`.
    fn density_valid(x: f64, params: Self::Params) -> f64;

    /// Starting point for the root finder, for `0 < p < 1`. Returning `0` reports that the
    /// quantile underflows. The default NaN leaves the seed to the root finder.
    #[inline(always)]
    fn initial_guess(_p: f64, _params: Self::Params) -> f64 {
        f64::NAN
    }

    /// Exact quantile, for families that have one.
    #[inline(always)]
    fn closed_form(_p: f64, _params: Self::Params) -> Option<f64> {
        None
    }

    #[inline(always)]
    fn rules() -> &'static [EdgeRule] {
        NON_NEGATIVE_SUPPORT_RULES
    }

    /// CDF over every parameter class.
    fn cdf(x: f64, params: Self::Params) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        match Self::classify(params) {
            ParamClass::NotANumber | ParamClass::Invalid => f64::NAN,
            _ if x < 0.0 => 0.0,
            ParamClass::DegenerateZero => 1.0,
            ParamClass::Infinite => if x == f64::INFINITY { 1.0 } else { 0.0 },
            ParamClass::Valid => Self::cdf_valid(x, params),
        }
    }

    /// Survival function over every parameter class.
    fn sf(x: f64, params: Self::Params) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        match Self::classify(params) {
            ParamClass::NotANumber | ParamClass::Invalid => f64::NAN,
            _ if x < 0.0 => 1.0,
            ParamClass::DegenerateZero => 0.0,
            ParamClass::Infinite => if x == f64::INFINITY { 0.0 } else { 1.0 },
            ParamClass::Valid => Self::sf_valid(x, params),
        }
    }

    /// Density over every parameter class. A point mass at the origin is reported as an
    /// infinite density at `0`.
    fn density(x: f64, params: Self::Params) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        match Self::classify(params) {
            ParamClass::NotANumber | ParamClass::Invalid => f64::NAN,
            _ if x < 0.0 => 0.0,
            ParamClass::DegenerateZero if x == 0.0 => f64::INFINITY,
            ParamClass::DegenerateZero | ParamClass::Infinite => 0.0,
            ParamClass::Valid => Self::density_valid(x, params),
        }
    }

    /// Quantile of a single probability: classify, resolve against `rules`, then search.
    fn quantile_scalar(p: f64, params: Self::Params, finder: &RootFinder) -> f64 {
        match resolve(Self::rules(), classify_probability(p), Self::classify(params)) {
            Outcome::Fixed(v) => v,
            Outcome::Search => Self::search(p, params, finder),
        }
    }

    /// Quantile for `0 < p < 1` and valid parameters.
    fn search(p: f64, params: Self::Params, finder: &RootFinder) -> f64 {
        if let Some(x) = Self::closed_form(p, params) {
            return x;
        }
        let x0 = Self::initial_guess(p, params);
        if x0 == 0.0 {
            return 0.0;
        }
        let density = |x: f64| Self::density_valid(x, params);
        let est = if p <= 0.5 {
            let cdf = |x: f64| Self::cdf_valid(x, params);
            finder.invert_cdf(p, x0, 0.0, f64::INFINITY, cdf, density)
        } else {
            let sf = |x: f64| Self::sf_valid(x, params);
            finder.invert_sf(1.0 - p, x0, 0.0, f64::INFINITY, sf, density)
        };
        est.x
    }
}

/// Applies `kernel(x, params)` element-wise, returning a result of the input's shape.
///
/// `params` is either scalar-shaped (shared by every element) or has exactly the input's
/// shape. Lanes null in either the input's or the parameters' validity come back `NaN`.
pub fn map_elementwise<I, D, P, K>(
    input: &I,
    params: &D,
    fname: &str,
    kernel: K,
) -> Result<I::Output, KernelError>
where
    I: ShapeCarrier<f64> + ?Sized,
    D: Shaped<P> + ?Sized,
    P: Copy + Send + Sync,
    K: Fn(f64, P) -> f64 + Sync,
{
    let shape = input.shape();
    let bcast = broadcast_params(params, shape, fname)?;
    let xs = input.elements();
    let len = xs.len();

    let lhs = input.validity();
    let rhs = params.validity();
    confirm_mask_capacity(fname, len, lhs)?;
    confirm_mask_capacity(fname, len, rhs)?;
    let validity = merge_bitmasks_to_new(lhs, rhs, len);

    let mut out = vec![0.0; len];
    let body = |i: usize, x: f64| kernel(x, bcast.get(i));
    match validity.as_ref() {
        Some(mask) => masked_univariate_kernel_std_to(&*xs, mask, &mut out, body),
        None => dense_univariate_kernel_std_to(&*xs, &mut out, body),
    }
    input.rebuild(out, validity)
}

/// Applies `kernel(x, params)` for one shared `x` across a container of parameters; the
/// result takes the parameter container's shape.
pub fn map_over_params<D, P, K>(
    x: f64,
    params: &D,
    fname: &str,
    kernel: K,
) -> Result<D::Output, KernelError>
where
    D: ShapeCarrier<P> + ?Sized,
    P: Copy + Send + Sync,
    K: Fn(f64, P) -> f64 + Sync,
{
    let ps = params.elements();
    let len = ps.len();
    let validity = params.validity();
    confirm_mask_capacity(fname, len, validity)?;

    let mut out = vec![0.0; len];
    let body = |_: usize, prm: P| kernel(x, prm);
    match validity {
        Some(mask) => masked_univariate_kernel_std_to(&*ps, mask, &mut out, body),
        None => dense_univariate_kernel_std_to(&*ps, &mut out, body),
    }
    params.rebuild(out, validity.cloned())
}

/// Applies `kernel(x)` over a plain slice into a caller-provided buffer.
///
/// `output` must match `x` in length. With nulls signalled by `null_count` or `null_mask`,
/// null lanes receive `NaN`.
pub fn map_slice_to<K>(
    x: &[f64],
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
    fname: &str,
    kernel: K,
) -> Result<(), KernelError>
where
    K: Fn(f64) -> f64 + Sync,
{
    if output.len() != x.len() {
        return Err(KernelError::LengthMismatch(log_length_mismatch(
            fname,
            x.len(),
            output.len(),
        )));
    }
    if x.is_empty() {
        return Ok(());
    }

    let body = |_: usize, xi: f64| kernel(xi);
    if !has_nulls(null_count, null_mask) {
        dense_univariate_kernel_std_to(x, output, body);
        return Ok(());
    }

    let mask = null_mask.ok_or_else(|| {
        KernelError::InvalidArguments(format!("{fname} => null_count > 0 requires null_mask"))
    })?;
    confirm_mask_capacity(fname, x.len(), Some(mask))?;
    masked_univariate_kernel_std_to(x, mask, output, body);
    Ok(())
}

/// Shape-preserving quantile for family `F`.
#[inline]
pub fn quantile<F, I, D>(
    p: &I,
    params: &D,
    finder: &RootFinder,
    fname: &str,
) -> Result<I::Output, KernelError>
where
    F: QuantileFamily,
    I: ShapeCarrier<f64> + ?Sized,
    D: Shaped<F::Params> + ?Sized,
{
    map_elementwise(p, params, fname, |pi, prm| {
        F::quantile_scalar(pi, prm, finder)
    })
}

/// Quantile of one probability across a container of parameters.
#[inline]
pub fn quantile_over_params<F, D>(
    p: f64,
    params: &D,
    finder: &RootFinder,
    fname: &str,
) -> Result<D::Output, KernelError>
where
    F: QuantileFamily,
    D: ShapeCarrier<F::Params> + ?Sized,
{
    map_over_params(p, params, fname, |pi, prm| {
        F::quantile_scalar(pi, prm, finder)
    })
}

/// Quantile into a caller-provided buffer with shared parameters.
#[inline]
pub fn quantile_to<F: QuantileFamily>(
    p: &[f64],
    params: F::Params,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
    finder: &RootFinder,
    fname: &str,
) -> Result<(), KernelError> {
    map_slice_to(p, output, null_mask, null_count, fname, |pi| {
        F::quantile_scalar(pi, params, finder)
    })
}

/// Shape-preserving CDF for family `F`.
#[inline]
pub fn cdf<F, I, D>(x: &I, params: &D, fname: &str) -> Result<I::Output, KernelError>
where
    F: QuantileFamily,
    I: ShapeCarrier<f64> + ?Sized,
    D: Shaped<F::Params> + ?Sized,
{
    map_elementwise(x, params, fname, F::cdf)
}

/// Shape-preserving density for family `F`.
#[inline]
pub fn pdf<F, I, D>(x: &I, params: &D, fname: &str) -> Result<I::Output, KernelError>
where
    F: QuantileFamily,
    I: ShapeCarrier<f64> + ?Sized,
    D: Shaped<F::Params> + ?Sized,
{
    map_elementwise(x, params, fname, F::density)
}
