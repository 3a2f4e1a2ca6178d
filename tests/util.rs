#![allow(unused)]

/// Asserts `a` matches `e`, treating NaN and signed infinities as exact sentinels.
///
/// Finite values are compared with `tol` scaled by `max(1, |e|)`.
pub fn assert_close(a: f64, e: f64, tol: f64) {
    if e.is_nan() {
        assert!(a.is_nan(), "expected NaN, got {a}");
        return;
    }
    if e.is_infinite() {
        assert_eq!(a, e, "expected {e}, got {a}");
        return;
    }
    let scale = 1.0_f64.max(e.abs());
    assert!(
        (a - e).abs() <= tol * scale,
        "mismatch: got {a}, expect {e} (tol={tol})"
    );
}

pub fn assert_slice_close(a: &[f64], e: &[f64], tol: f64) {
    assert_eq!(a.len(), e.len(), "len mismatch");
    for (i, (&ai, &ei)) in a.iter().zip(e.iter()).enumerate() {
        if ei.is_nan() {
            assert!(ai.is_nan(), "idx {i}: expected NaN, got {ai}");
            continue;
        }
        if ei.is_infinite() {
            assert_eq!(ai, ei, "idx {i}: expected {ei}, got {ai}");
            continue;
        }
        let scale = 1.0_f64.max(ei.abs());
        assert!(
            (ai - ei).abs() <= tol * scale,
            "idx {i}: got {ai}, expect {ei} (tol={tol})"
        );
    }
}

/// Element-wise equality including NaN lanes; used where bulk output must equal the
/// scalar kernel bit for bit.
pub fn assert_same_values(a: &[f64], e: &[f64]) {
    assert_eq!(a.len(), e.len(), "len mismatch");
    for (i, (&ai, &ei)) in a.iter().zip(e.iter()).enumerate() {
        assert!(
            ai == ei || (ai.is_nan() && ei.is_nan()),
            "idx {i}: got {ai}, expect {ei}"
        );
    }
}
