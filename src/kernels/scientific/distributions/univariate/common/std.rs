// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

use minarrow::Bitmask;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[cfg(feature = "parallel")]
use crate::config::PARALLEL_MIN_LEN;

/// Dense kernel helper (zero-allocation).
///
/// Writes `scalar_body(i, x[i])` into `output[i]` for every lane. `output` must have the
/// length of `x`.
///
/// ### Null handling
/// - Any `NaN` or `inf` values generated in the kernel function
/// are kept verbatim, without `nulling` them in the (optional)
/// mask, given that:
/// 1. These values can represent additional data signal.
/// 2. Handling them requires additional CPU cycles on the hot path.
///
/// Therefore, one can treat them further if needed.
#[inline(always)]
pub fn dense_univariate_kernel_std_to<T, FScalar>(
    x: &[T],
    output: &mut [f64],
    scalar_body: FScalar,
) where
    T: Copy + Sync,
    FScalar: Fn(usize, T) -> f64 + Sync,
{
    debug_assert_eq!(x.len(), output.len());

    #[cfg(feature = "parallel")]
    {
        if x.len() >= PARALLEL_MIN_LEN {
            output
                .par_iter_mut()
                .zip(x.par_iter())
                .enumerate()
                .for_each(|(i, (o, &xi))| *o = scalar_body(i, xi));
            return;
        }
    }

    for (i, (o, &xi)) in output.iter_mut().zip(x).enumerate() {
        *o = scalar_body(i, xi);
    }
}

/// Null-aware masked kernel helper (zero-allocation).
///
/// Lanes cleared in `mask` receive `NaN`; the rest are evaluated as in the dense path.
/// The caller keeps the mask, so nulls stay nulls and nothing new becomes null.
///
/// # Safety
/// Uses unchecked mask access; callers confirm `mask.len() >= x.len()` beforehand.
#[inline(always)]
pub fn masked_univariate_kernel_std_to<T, FScalar>(
    x: &[T],
    mask: &Bitmask,
    output: &mut [f64],
    scalar_body: FScalar,
) where
    T: Copy + Sync,
    FScalar: Fn(usize, T) -> f64 + Sync,
{
    debug_assert_eq!(x.len(), output.len());
    debug_assert!(mask.len() >= x.len());

    let lane = |i: usize, xi: T| {
        if unsafe { mask.get_unchecked(i) } {
            scalar_body(i, xi)
        } else {
            f64::NAN
        }
    };

    #[cfg(feature = "parallel")]
    {
        if x.len() >= PARALLEL_MIN_LEN {
            output
                .par_iter_mut()
                .zip(x.par_iter())
                .enumerate()
                .for_each(|(i, (o, &xi))| *o = lane(i, xi));
            return;
        }
    }

    for (i, (o, &xi)) in output.iter_mut().zip(x).enumerate() {
        *o = lane(i, xi);
    }
}
