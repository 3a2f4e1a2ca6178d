// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

use crate::kernels::scientific::distributions::shared::classify::{ParamClass, classify_shape};
use crate::kernels::scientific::distributions::shared::root_finder::RootFinder;
use crate::kernels::scientific::distributions::shared::scalar::*;
use crate::kernels::scientific::distributions::univariate::common::QuantileFamily;

/// Chi-squared family with `k` degrees of freedom: a gamma with shape `k/2` and scale `2`.
///
/// `k == 0` is the point mass at the origin and `k == +∞` the limit with no finite mass.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChiSquared;

impl QuantileFamily for ChiSquared {
    type Params = f64;

    #[inline(always)]
    fn classify(dof: f64) -> ParamClass {
        classify_shape(dof)
    }

    /// F(x; k) = P(k/2, x/2)
    #[inline(always)]
    fn cdf_valid(x: f64, dof: f64) -> f64 {
        reg_lower_gamma(0.5 * dof, 0.5 * x)
    }

    /// S(x; k) = Q(k/2, x/2)
    #[inline(always)]
    fn sf_valid(x: f64, dof: f64) -> f64 {
        reg_upper_gamma(0.5 * dof, 0.5 * x)
    }

    /// f(x; k) = 1/(2^{k/2} Γ(k/2)) x^{k/2-1} e^{-x/2}
    #[inline(always)]
    fn density_valid(x: f64, dof: f64) -> f64 {
        0.5 * unit_gamma_pdf(0.5 * dof, 0.5 * x)
    }

    #[inline(always)]
    fn initial_guess(p: f64, dof: f64) -> f64 {
        2.0 * gamma_quantile_guess(0.5 * dof, p)
    }
}

/// Chi-square quantile of one probability.
#[inline(always)]
pub fn chi_square_quantile_std(p: f64, dof: f64, finder: &RootFinder) -> f64 {
    ChiSquared::quantile_scalar(p, dof, finder)
}

/// Chi-square CDF at one point.
#[inline(always)]
pub fn chi_square_cdf_std(x: f64, dof: f64) -> f64 {
    ChiSquared::cdf(x, dof)
}

/// Chi-square density at one point.
#[inline(always)]
pub fn chi_square_pdf_std(x: f64, dof: f64) -> f64 {
    ChiSquared::density(x, dof)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::scientific::distributions::univariate::common::assert_close;

    fn rel_err(a: f64, b: f64) -> f64 {
        ((a - b) / b).abs()
    }

    // scipy.stats.chi2
    #[test]
    fn forward_reference_values() {
        assert_close(chi_square_pdf_std(1.0, 1.0), 0.24197072451914337, 1e-15);
        assert_close(chi_square_pdf_std(0.5, 2.0), 0.38940039153570244, 1e-15);
        assert_close(chi_square_pdf_std(0.0, 2.0), 0.5, 1e-15);
        assert_eq!(chi_square_pdf_std(0.0, 1.0), f64::INFINITY);
        assert_close(chi_square_cdf_std(1.0, 1.0), 0.6826894921370859, 1e-14);
        assert_close(chi_square_cdf_std(2.0, 2.0), 0.6321205588285577, 1e-15);
        assert_close(chi_square_cdf_std(12.59158724, 6.0), 0.95, 1e-9);
    }

    #[test]
    fn forward_degenerate_parameters() {
        assert!(chi_square_cdf_std(1.0, -1.0).is_nan());
        assert!(chi_square_pdf_std(1.0, f64::NAN).is_nan());
        assert_eq!(chi_square_cdf_std(0.0, 0.0), 1.0);
        assert_eq!(chi_square_pdf_std(0.0, 0.0), f64::INFINITY);
        assert_eq!(chi_square_cdf_std(1e10, f64::INFINITY), 0.0);
        assert_eq!(chi_square_cdf_std(-1.0, 3.0), 0.0);
        assert_eq!(chi_square_cdf_std(f64::INFINITY, 3.0), 1.0);
    }

    #[test]
    fn quantile_dof_6() {
        let rf = RootFinder::default();
        assert_close(chi_square_quantile_std(0.1, 6.0, &rf), 2.204130656498, 1e-9);
        assert_close(chi_square_quantile_std(0.6, 6.0, &rf), 6.210757194474, 1e-9);
        assert_close(chi_square_quantile_std(0.95, 6.0, &rf), 12.591587243744, 1e-9);
    }

    #[test]
    fn quantile_inverts_the_cdf() {
        let rf = RootFinder::default();
        for &dof in &[0.01, 0.5, 1.0, 2.0, 3.0, 6.0, 30.0, 1000.0, 1e5] {
            for &p in &[1e-200, 1e-20, 1e-6, 0.01, 0.3, 0.5] {
                let x = chi_square_quantile_std(p, dof, &rf);
                if x == 0.0 {
                    // below the smallest positive double
                    continue;
                }
                assert!(rel_err(ChiSquared::cdf_valid(x, dof), p) < 1e-9, "dof={dof} p={p} x={x}");
            }
            for &q in &[0.4, 0.05, 1e-6, 1e-14] {
                let x = chi_square_quantile_std(1.0 - q, dof, &rf);
                assert!(x.is_finite() && x > 0.0);
                // 1 - p carries the rounding of p itself
                let q_eff = 1.0 - (1.0 - q);
                assert!(rel_err(ChiSquared::sf_valid(x, dof), q_eff) < 1e-9, "dof={dof} q={q} x={x}");
            }
        }
    }

    #[test]
    fn quantile_large_dof() {
        // Φ⁻¹(p); Wilson–Hilferty is exact to ~1e-11 relative once dof ≥ 1e8
        const Z: [(f64, f64); 5] = [
            (1e-10, -6.361340902404056),
            (0.05, -1.6448536269514722),
            (0.5, 0.0),
            (0.95, 1.6448536269514722),
            (1.0 - 1e-10, 6.361340902404056),
        ];
        let rf = RootFinder::default();
        for &dof in &[1e8, 1e10, 1e12, 1e14] {
            let c = 2.0 / (9.0 * dof);
            let mut prev = 0.0;
            for &(p, z) in &Z {
                let x = chi_square_quantile_std(p, dof, &rf);
                let wh = dof * (1.0 - c + z * c.sqrt()).powi(3);
                assert!(rel_err(x, wh) < 1e-10, "dof={dof} p={p} x={x} wh={wh}");
                assert!(x > prev, "dof={dof} p={p}: {x} <= {prev}");
                prev = x;

                // at dof = 1e14 one ulp of x moves F by ~4e-10
                let spacing = ChiSquared::density_valid(x, dof) * x * f64::EPSILON;
                let mass = p.min(1.0 - p);
                let back = if p <= 0.5 {
                    (ChiSquared::cdf_valid(x, dof) - p).abs()
                } else {
                    (ChiSquared::sf_valid(x, dof) - mass).abs()
                };
                assert!(
                    back <= 2.0 * spacing + 1e-11 * mass,
                    "dof={dof} p={p} x={x} residual={back} spacing={spacing}"
                );
            }
            // either side of the lower/upper tail switch
            let below = chi_square_quantile_std(0.5 - 1e-7, dof, &rf);
            let mid = chi_square_quantile_std(0.5, dof, &rf);
            let above = chi_square_quantile_std(0.5 + 1e-7, dof, &rf);
            assert!(below <= mid && mid <= above, "dof={dof}: {below} {mid} {above}");
        }
    }

    #[test]
    fn quantile_underflow_is_zero() {
        let rf = RootFinder::default();
        // x ≈ (p Γ(1.25) 2^0.25)^4 is far below f64::MIN_POSITIVE
        assert_eq!(chi_square_quantile_std(1e-300, 0.5, &rf), 0.0);
        assert_eq!(chi_square_quantile_std(0.3, 1e-300, &rf), 0.0);
    }

    #[test]
    fn quantile_edge_table() {
        let rf = RootFinder::default();
        let q = |p, k| chi_square_quantile_std(p, k, &rf);
        assert!(q(f64::NAN, 3.0).is_nan());
        assert!(q(0.5, f64::NAN).is_nan());
        assert!(q(f64::NAN, f64::NAN).is_nan());
        assert!(q(-0.1, 6.0).is_nan());
        assert!(q(1.1, 6.0).is_nan());
        assert_eq!(q(0.0, 0.0), 0.0);
        assert_eq!(q(1.0, 0.0), f64::INFINITY);
        assert_eq!(q(0.5, 0.0), 0.0);
        assert!(q(1.0, -1.0).is_nan());
        assert!(q(1.0, f64::NEG_INFINITY).is_nan());
        assert_eq!(q(0.0, f64::INFINITY), 0.0);
        assert_eq!(q(1.0, f64::INFINITY), f64::INFINITY);
        assert_eq!(q(0.5, f64::INFINITY), f64::INFINITY);
        assert_eq!(q(0.0, 6.0), 0.0);
        assert_eq!(q(1.0, 6.0), f64::INFINITY);
    }

    crate::quantile_family_tests!(chi_squared_common, ChiSquared, 6.0);
    crate::quantile_family_tests!(chi_squared_small_dof_common, ChiSquared, 0.3);
}
