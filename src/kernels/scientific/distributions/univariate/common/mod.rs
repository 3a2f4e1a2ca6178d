// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Common Distribution Utilities** - *Shapes, Element-wise Kernels and the Quantile Pipeline*
//!
//! Shared machinery behind every univariate family:
//! - **`shape`**: the containers kernels accept (`Shaped`) and return (`ShapeCarrier`),
//!   plus parameter broadcasting.
//! - **`std`**: dense and null-masked element-wise loops writing into pre-sized buffers.
//! - **`family`**: the `QuantileFamily` trait and the generic shape-preserving front doors.
//!
//! ## Test Macros
//! The `quantile_family_tests!` macro generates the standard checks every family must pass
//! (empty input, bulk-vs-scalar consistency, mask propagation, monotonicity).

pub mod family;
pub mod shape;
/// Scalar element-wise loops.
pub mod std;

pub use family::QuantileFamily;
pub use shape::{Broadcast, Shape, ShapeCarrier, Shaped};

#[cfg(test)]
use minarrow::Bitmask;

// Common test helpers

/// Test Helper: create a mask of given length with exactly the lane `idx` null.
#[cfg(test)]
pub(crate) fn single_null_mask(len: usize, idx: usize) -> Bitmask {
    let mut m = Bitmask::new_set_all(len, true);
    m.set(idx, false);
    m
}

/// Test Helper: assert absolute difference ≤ `tol`.
#[cfg(test)]
pub(crate) fn assert_close(a: f64, b: f64, tol: f64) {
    assert!(
        (a - b).abs() < tol,
        "assert_close failed: {} vs {} (tol={})",
        a,
        b,
        tol
    );
}

/// Generate the common tests (empty input, bulk-vs-scalar, mask propagation,
/// monotonicity) for a `QuantileFamily` at one valid parameter set.
///
/// Usage:
/// ```ignore
/// quantile_family_tests!(chi_squared_common, ChiSquared, 6.0);
/// ```
#[macro_export]
macro_rules! quantile_family_tests {
    // $name   – a unique test-group prefix
    // $family – type implementing `QuantileFamily`
    // $params – valid parameter set
    ($name:ident, $family:ty, $params:expr) => {
        mod $name {
            use super::*;
            use $crate::kernels::scientific::distributions::shared::root_finder::RootFinder;
            use $crate::kernels::scientific::distributions::univariate::common::family::{
                QuantileFamily, quantile, quantile_to,
            };
            use $crate::kernels::scientific::distributions::univariate::common::single_null_mask;
            use minarrow::FloatArray;

            #[test]
            fn empty_input() {
                let rf = RootFinder::default();
                let empty: [f64; 0] = [];
                let out = quantile::<$family, _, _>(&empty[..], &$params, &rf, "q").unwrap();
                assert!(out.is_empty());
                let mut buf: [f64; 0] = [];
                quantile_to::<$family>(&empty, $params, &mut buf, None, None, &rf, "q").unwrap();
            }

            #[test]
            fn bulk_vs_scalar_consistency() {
                let rf = RootFinder::default();
                let ps = [0.0, 1e-9, 0.1, 0.5, 0.9, 1.0 - 1e-9, 1.0];
                let bulk = quantile::<$family, _, _>(&ps, &$params, &rf, "q").unwrap();
                for (i, &p) in ps.iter().enumerate() {
                    let scalar = <$family>::quantile_scalar(p, $params, &rf);
                    assert!(bulk[i] == scalar, "lane {i}: {} vs {}", bulk[i], scalar);
                }
            }

            #[test]
            fn mask_propagation() {
                let rf = RootFinder::default();
                let mut arr = FloatArray::from_slice(&[0.2, 0.4, 0.6]);
                arr.null_mask = Some(single_null_mask(3, 1));
                let out = quantile::<$family, _, _>(&arr, &$params, &rf, "q").unwrap();
                // lane 1 -> NaN + null
                assert!(!out.null_mask.as_ref().unwrap().get(1));
                assert!(out.data[1].is_nan());
                assert!(out.data[0].is_finite() && out.data[2].is_finite());
            }

            #[test]
            fn monotone_in_p() {
                let rf = RootFinder::default();
                let mut prev = 0.0;
                for i in 0..=200 {
                    let p = i as f64 / 200.0;
                    let x = <$family>::quantile_scalar(p, $params, &rf);
                    assert!(x >= prev, "p={p}: {x} < {prev}");
                    prev = x;
                }
            }
        }
    };
}
