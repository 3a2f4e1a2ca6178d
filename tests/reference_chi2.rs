// Reference quantiles and edge cases for the chi-squared distribution.
//
// Expected values come from scipy.stats.chi2.ppf; sentinels follow the edge-case table.

mod util;

mod reference_chi2_tests {
    use super::util::{assert_close, assert_slice_close};
    use minarrow::{FloatArray, vec64};
    use ndarray::array;
    use quantile_kernels::kernels::scientific::distributions::univariate::chi_squared::{
        chi_square_cdf_scalar, chi_square_quantile, chi_square_quantile_scalar,
    };

    const INF: f64 = f64::INFINITY;
    const NAN: f64 = f64::NAN;

    #[test]
    fn chi2_quantile_dof_6() {
        assert_close(chi_square_quantile_scalar(0.1, 6.0), 2.204131, 1e-5);
        assert_close(chi_square_quantile_scalar(0.6, 6.0), 6.210757, 1e-5);
        assert_close(chi_square_quantile_scalar(0.95, 6.0), 12.59159, 1e-5);
    }

    #[test]
    fn chi2_quantile_dof_6_vector() {
        let p = vec64![0.1, 0.6, 0.95];
        let got = chi_square_quantile(&p[..], &6.0).unwrap();
        assert_slice_close(&got, &[2.204131, 6.210757, 12.59159], 1e-5);
    }

    #[test]
    fn chi2_quantile_dof_6_matrix() {
        let p = array![[0.1, 0.6, 0.95], [0.95, 0.6, 0.1]];
        let got = chi_square_quantile(&p, &6.0).unwrap();
        assert_eq!(got.dim(), (2, 3));
        let expect = [2.204131, 6.210757, 12.59159, 12.59159, 6.210757, 2.204131];
        assert_slice_close(got.as_slice().unwrap(), &expect, 1e-5);
    }

    #[test]
    fn chi2_quantile_other_dof() {
        // scipy.stats.chi2.ppf
        assert_close(chi_square_quantile_scalar(0.5, 1.0), 0.454936423119572, 1e-9);
        assert_close(chi_square_quantile_scalar(0.95, 1.0), 3.841458820694124, 1e-9);
        assert_close(chi_square_quantile_scalar(0.99, 10.0), 23.209251158954356, 1e-9);
        assert_close(chi_square_quantile_scalar(0.05, 2.0), 0.10258658877510107, 1e-9);
        assert_close(chi_square_quantile_scalar(0.5, 2.0), 2.0 * std::f64::consts::LN_2, 1e-12);
    }

    #[test]
    fn chi2_quantile_nan_propagation() {
        assert!(chi_square_quantile_scalar(NAN, 6.0).is_nan());
        assert!(chi_square_quantile_scalar(0.5, NAN).is_nan());
        assert!(chi_square_quantile_scalar(NAN, NAN).is_nan());
        assert!(chi_square_quantile_scalar(NAN, 0.0).is_nan());
        assert!(chi_square_quantile_scalar(NAN, INF).is_nan());
        assert!(chi_square_quantile_scalar(2.0, NAN).is_nan());
    }

    #[test]
    fn chi2_quantile_range_rejection() {
        assert!(chi_square_quantile_scalar(-0.1, 6.0).is_nan());
        assert!(chi_square_quantile_scalar(1.1, 6.0).is_nan());
        assert!(chi_square_quantile_scalar(-INF, 6.0).is_nan());
        assert!(chi_square_quantile_scalar(INF, 6.0).is_nan());
        // out of range wins over a degenerate dof
        assert!(chi_square_quantile_scalar(1.1, 0.0).is_nan());
        assert!(chi_square_quantile_scalar(-0.1, INF).is_nan());
    }

    #[test]
    fn chi2_quantile_degenerate_dof() {
        assert_eq!(chi_square_quantile_scalar(0.0, 0.0), 0.0);
        assert_eq!(chi_square_quantile_scalar(1.0, 0.0), INF);
        assert_eq!(chi_square_quantile_scalar(0.3, 0.0), 0.0);
    }

    #[test]
    fn chi2_quantile_negative_dof() {
        assert!(chi_square_quantile_scalar(1.0, -1.0).is_nan());
        assert!(chi_square_quantile_scalar(1.0, -INF).is_nan());
        assert!(chi_square_quantile_scalar(0.0, -1.0).is_nan());
        assert!(chi_square_quantile_scalar(0.5, -1e-300).is_nan());
    }

    #[test]
    fn chi2_quantile_infinite_dof() {
        assert_eq!(chi_square_quantile_scalar(0.0, INF), 0.0);
        assert_eq!(chi_square_quantile_scalar(1.0, INF), INF);
        assert_eq!(chi_square_quantile_scalar(0.3, INF), INF);
    }

    #[test]
    fn chi2_quantile_boundaries() {
        assert_eq!(chi_square_quantile_scalar(0.0, 6.0), 0.0);
        assert_eq!(chi_square_quantile_scalar(1.0, 6.0), INF);
    }

    #[test]
    fn chi2_quantile_sentinels_in_a_vector() {
        let p = [NAN, -0.1, 1.1, 0.0, 1.0, 0.5];
        let dof = [6.0, 6.0, 6.0, 0.0, INF, -1.0];
        let got = chi_square_quantile(&p, &dof).unwrap();
        assert_slice_close(&got, &[NAN, NAN, NAN, 0.0, INF, NAN], 0.0);
    }

    #[test]
    fn chi2_quantile_round_trip() {
        for &dof in &[0.5, 1.0, 2.0, 6.0, 25.0, 200.0] {
            for &p in &[1e-8, 0.01, 0.25, 0.5, 0.75, 0.99, 1.0 - 1e-8] {
                let x = chi_square_quantile_scalar(p, dof);
                assert_close(chi_square_cdf_scalar(x, dof), p, 1e-10);
            }
        }
    }

    #[test]
    fn chi2_quantile_float_array() {
        let p = FloatArray::from_slice(&vec64![0.1, 0.6, 0.95]);
        let got = chi_square_quantile(&p, &6.0).unwrap();
        assert!(got.null_mask.is_none());
        assert_slice_close(&got.data[..], &[2.204131, 6.210757, 12.59159], 1e-5);
    }
}
