// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

use crate::kernels::scientific::distributions::shared::classify::{ParamClass, classify_rate};
use crate::kernels::scientific::distributions::shared::root_finder::RootFinder;
use crate::kernels::scientific::distributions::univariate::common::QuantileFamily;

/// Exponential family with rate `λ`. The quantile is exact, so the root finder is never used.
#[derive(Debug, Clone, Copy, Default)]
pub struct Exponential;

impl QuantileFamily for Exponential {
    type Params = f64;

    #[inline(always)]
    fn classify(lambda: f64) -> ParamClass {
        classify_rate(lambda)
    }

    /// F(x; λ) = 1 - exp(-λx), without cancellation near 0
    #[inline(always)]
    fn cdf_valid(x: f64, lambda: f64) -> f64 {
        -(-lambda * x).exp_m1()
    }

    #[inline(always)]
    fn sf_valid(x: f64, lambda: f64) -> f64 {
        (-lambda * x).exp()
    }

    #[inline(always)]
    fn density_valid(x: f64, lambda: f64) -> f64 {
        lambda * (-lambda * x).exp()
    }

    /// Q(p; λ) = -ln(1 - p) / λ
    #[inline(always)]
    fn closed_form(p: f64, lambda: f64) -> Option<f64> {
        Some(-(-p).ln_1p() / lambda)
    }
}

#[inline(always)]
pub fn exponential_quantile_std(p: f64, lambda: f64, finder: &RootFinder) -> f64 {
    Exponential::quantile_scalar(p, lambda, finder)
}

#[inline(always)]
pub fn exponential_cdf_std(x: f64, lambda: f64) -> f64 {
    Exponential::cdf(x, lambda)
}

#[inline(always)]
pub fn exponential_pdf_std(x: f64, lambda: f64) -> f64 {
    Exponential::density(x, lambda)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::scientific::distributions::univariate::common::assert_close;

    #[test]
    fn closed_form_quantile() {
        let rf = RootFinder::default();
        assert_close(exponential_quantile_std(0.5, 2.0, &rf), 0.5 * ::std::f64::consts::LN_2, 1e-15);
        // no cancellation for tiny p
        assert_close(exponential_quantile_std(1e-18, 1.0, &rf) / 1e-18, 1.0, 1e-12);
        assert_close(exponential_quantile_std(0.95, 0.5, &rf), 2.0 * 20.0_f64.ln(), 1e-13);
    }

    #[test]
    fn rate_limits() {
        let rf = RootFinder::default();
        assert_eq!(exponential_quantile_std(0.5, 0.0, &rf), f64::INFINITY);
        assert_eq!(exponential_quantile_std(0.5, f64::INFINITY, &rf), 0.0);
        assert!(exponential_quantile_std(0.5, -2.0, &rf).is_nan());
        assert_eq!(exponential_quantile_std(0.0, 3.0, &rf), 0.0);
        assert_eq!(exponential_quantile_std(1.0, 3.0, &rf), f64::INFINITY);
        assert!(exponential_quantile_std(-0.5, 3.0, &rf).is_nan());
    }

    #[test]
    fn forward_functions() {
        assert_close(exponential_pdf_std(0.0, 2.0), 2.0, 1e-15);
        assert_close(exponential_pdf_std(1.0, 2.0), 2.0 * (-2.0_f64).exp(), 1e-15);
        assert_eq!(exponential_pdf_std(-1.0, 2.0), 0.0);
        assert_close(exponential_cdf_std(1e-20, 1.0), 1e-20, 1e-35);
        assert_close(exponential_cdf_std(1.0, 1.0), 1.0 - (-1.0_f64).exp(), 1e-15);
        assert_eq!(exponential_cdf_std(-1.0, 1.0), 0.0);
        assert!(exponential_cdf_std(f64::NAN, 1.0).is_nan());
    }

    crate::quantile_family_tests!(exponential_common, Exponential, 1.5);
}
