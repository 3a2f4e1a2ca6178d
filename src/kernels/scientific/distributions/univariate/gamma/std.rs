// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

use crate::impl_scalar_shape;
use crate::kernels::scientific::distributions::shared::classify::{
    ParamClass, classify_rate, classify_shape, combine_classes,
};
use crate::kernels::scientific::distributions::shared::root_finder::RootFinder;
use crate::kernels::scientific::distributions::shared::scalar::*;
use crate::kernels::scientific::distributions::univariate::common::QuantileFamily;

/// Shape α and rate β of a gamma distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GammaParams {
    pub shape: f64,
    pub rate: f64,
}

impl GammaParams {
    #[inline]
    pub fn new(shape: f64, rate: f64) -> Self {
        Self { shape, rate }
    }
}

impl_scalar_shape!(GammaParams);

/// Gamma family in rate parameterisation.
///
/// The quantile is searched on the unit-rate distribution and scaled by `1/β`, so extreme
/// rates cannot push the search outside the representable range.
#[derive(Debug, Clone, Copy, Default)]
pub struct Gamma;

/// Unit-rate gamma, parameterised by its shape alone.
#[derive(Debug, Clone, Copy, Default)]
struct StandardGamma;

impl QuantileFamily for StandardGamma {
    type Params = f64;

    #[inline(always)]
    fn classify(shape: f64) -> ParamClass {
        classify_shape(shape)
    }

    #[inline(always)]
    fn cdf_valid(x: f64, shape: f64) -> f64 {
        reg_lower_gamma(shape, x)
    }

    #[inline(always)]
    fn sf_valid(x: f64, shape: f64) -> f64 {
        reg_upper_gamma(shape, x)
    }

    #[inline(always)]
    fn density_valid(x: f64, shape: f64) -> f64 {
        unit_gamma_pdf(shape, x)
    }

    #[inline(always)]
    fn initial_guess(p: f64, shape: f64) -> f64 {
        gamma_quantile_guess(shape, p)
    }
}

impl QuantileFamily for Gamma {
    type Params = GammaParams;

    /// Shape `0` or rate `+∞` collapse onto the origin; shape `+∞` or rate `0` escape.
    #[inline(always)]
    fn classify(params: GammaParams) -> ParamClass {
        combine_classes(&[classify_shape(params.shape), classify_rate(params.rate)])
    }

    /// F(x; α, β) = P(α, βx)
    #[inline(always)]
    fn cdf_valid(x: f64, params: GammaParams) -> f64 {
        reg_lower_gamma(params.shape, params.rate * x)
    }

    #[inline(always)]
    fn sf_valid(x: f64, params: GammaParams) -> f64 {
        reg_upper_gamma(params.shape, params.rate * x)
    }

    /// f(x; α, β) = β^α x^(α-1) exp(-βx) / Γ(α)
    #[inline(always)]
    fn density_valid(x: f64, params: GammaParams) -> f64 {
        params.rate * unit_gamma_pdf(params.shape, params.rate * x)
    }

    /// Searched at unit rate, seeded by `StandardGamma::initial_guess`, then rescaled.
    fn search(p: f64, params: GammaParams, finder: &RootFinder) -> f64 {
        StandardGamma::search(p, params.shape, finder) / params.rate
    }
}

/// Gamma quantile of one probability.
#[inline(always)]
pub fn gamma_quantile_std(p: f64, params: GammaParams, finder: &RootFinder) -> f64 {
    Gamma::quantile_scalar(p, params, finder)
}

/// Gamma CDF at one point.
#[inline(always)]
pub fn gamma_cdf_std(x: f64, params: GammaParams) -> f64 {
    Gamma::cdf(x, params)
}

/// Gamma density at one point.
#[inline(always)]
pub fn gamma_pdf_std(x: f64, params: GammaParams) -> f64 {
    Gamma::density(x, params)
}
