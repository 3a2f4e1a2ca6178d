//! Property-based tests for the chi-squared quantile.

use proptest::prelude::*;
use statrs::distribution::{ChiSquared as RefChiSquared, ContinuousCDF};

use quantile_kernels::kernels::scientific::distributions::univariate::chi_squared::{
    chi_square_cdf_scalar, chi_square_pdf_scalar, chi_square_quantile,
    chi_square_quantile_scalar,
};

/// Strategy: valid finite degrees of freedom, spanning tiny to large.
fn dof_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![0.05f64..1.0, 1.0f64..50.0, 50.0f64..2000.0]
}

/// Strategy: degrees of freedom between 1e8 and 1e14, log-uniform.
fn large_dof_strategy() -> impl Strategy<Value = f64> {
    (8.0f64..14.0).prop_map(|e| 10f64.powf(e))
}

/// Strategy: probability strictly inside (0, 1).
fn prob_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![1e-10f64..1e-3, 1e-3f64..0.999, 0.999f64..(1.0 - 1e-10)]
}

proptest! {
    // 1. The quantile never decreases in p
    #[test]
    fn monotone_in_p(dof in dof_strategy(), a in prob_strategy(), b in prob_strategy()) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        // probabilities closer than the solver tolerance may tie either way
        prop_assume!(hi - lo > 1e-6 * lo.min(1.0 - hi));
        let xl = chi_square_quantile_scalar(lo, dof);
        let xh = chi_square_quantile_scalar(hi, dof);
        prop_assert!(xl <= xh, "dof={dof}: q({lo})={xl} > q({hi})={xh}");
    }

    // 2. Interior quantiles are finite and non-negative
    #[test]
    fn interior_quantile_in_support(dof in dof_strategy(), p in prob_strategy()) {
        let x = chi_square_quantile_scalar(p, dof);
        prop_assert!(x.is_finite() && x >= 0.0, "dof={dof} p={p} x={x}");
    }

    // 3. cdf(quantile(p)) recovers p
    #[test]
    fn round_trip_own_cdf(dof in dof_strategy(), p in prob_strategy()) {
        let x = chi_square_quantile_scalar(p, dof);
        prop_assume!(x > 0.0);
        let back = chi_square_cdf_scalar(x, dof);
        prop_assert!((back - p).abs() <= 1e-9, "dof={dof} p={p} x={x} back={back}");
    }

    // 4. Cross-check against an independent CDF implementation
    #[test]
    fn round_trip_reference_cdf(dof in 0.5f64..200.0, p in 1e-4f64..(1.0 - 1e-4)) {
        let x = chi_square_quantile_scalar(p, dof);
        let reference = RefChiSquared::new(dof).unwrap();
        prop_assert!((reference.cdf(x) - p).abs() <= 1e-7, "dof={dof} p={p} x={x}");
    }

    // 5. Bulk evaluation equals the scalar kernel lane by lane
    #[test]
    fn elementwise_equivalence(
        dof in dof_strategy(),
        ps in prop::collection::vec(prop_oneof![Just(0.0), Just(1.0), prob_strategy()], 0..64),
    ) {
        let bulk = chi_square_quantile(&ps, &dof).unwrap();
        prop_assert_eq!(bulk.len(), ps.len());
        for (x, &p) in bulk.iter().zip(ps.iter()) {
            prop_assert_eq!(*x, chi_square_quantile_scalar(p, dof));
        }
    }

    // 6. Large dof: the quantile sits within a few σ of the mean and recovers p
    #[test]
    fn large_dof_round_trip(dof in large_dof_strategy(), p in 1e-6f64..0.5) {
        let x = chi_square_quantile_scalar(p, dof);
        let sigma = (2.0 * dof).sqrt();
        prop_assert!(x < dof && dof - x < 6.0 * sigma, "dof={dof} p={p} x={x}");
        // the spacing of doubles near x limits how closely F(x) can match p
        let spacing = chi_square_pdf_scalar(x, dof) * x * f64::EPSILON;
        let back = chi_square_cdf_scalar(x, dof);
        prop_assert!((back - p).abs() <= 2.0 * spacing + 1e-11 * p,
            "dof={dof} p={p} x={x} back={back}");
    }

    // 7. Large dof: monotone across the lower/upper tail switch at p = ½
    #[test]
    fn large_dof_monotone(dof in large_dof_strategy(), a in 0.01f64..0.99, b in 0.01f64..0.99) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assume!(hi - lo > 1e-7);
        let xl = chi_square_quantile_scalar(lo, dof);
        let xh = chi_square_quantile_scalar(hi, dof);
        prop_assert!(xl <= xh, "dof={dof}: q({lo})={xl} > q({hi})={xh}");
    }

    // 8. Anything outside [0, 1] is NaN whatever the dof
    #[test]
    fn out_of_range_is_nan(dof in prop_oneof![dof_strategy(), Just(0.0), Just(f64::INFINITY)],
                           p in prop_oneof![-1e6f64..-1e-12, (1.0 + 1e-12)..1e6f64]) {
        prop_assert!(chi_square_quantile_scalar(p, dof).is_nan());
    }
}
