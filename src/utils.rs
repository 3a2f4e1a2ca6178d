// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Utility Functions** - *Null Mask Helpers*
//!
//! Validity-mask plumbing shared by the element-wise kernels.

use minarrow::Bitmask;

use crate::errors::{KernelError, log_length_mismatch};

/// Determines whether nulls are present given an optional null count and mask reference.
/// Avoids computing mask cardinality to preserve performance guarantees.
#[inline(always)]
pub fn has_nulls(null_count: Option<usize>, mask: Option<&Bitmask>) -> bool {
    match null_count {
        Some(n) => n > 0,
        None => mask.is_some(),
    }
}

/// Merge two optional Bitmasks into a new output mask, computing per-row AND.
/// Returns None if both inputs are None (output is dense).
#[inline]
pub fn merge_bitmasks_to_new(
    lhs: Option<&Bitmask>,
    rhs: Option<&Bitmask>,
    len: usize,
) -> Option<Bitmask> {
    match (lhs, rhs) {
        (None, None) => None,
        (Some(l), None) | (None, Some(l)) => {
            debug_assert!(l.len() >= len, "Bitmask too short in merge");
            let mut out = Bitmask::new_set_all(len, true);
            for i in 0..len {
                out.set(i, l.get(i));
            }
            Some(out)
        }
        (Some(l), Some(r)) => {
            debug_assert!(l.len() >= len, "Left Bitmask too short in merge");
            debug_assert!(r.len() >= len, "Right Bitmask too short in merge");
            let mut out = Bitmask::new_set_all(len, true);
            for i in 0..len {
                out.set(i, l.get(i) && r.get(i));
            }
            Some(out)
        }
    }
}

/// Checks the mask covers every input lane.
/// Used so the masked kernels can skip bounds checks in the hot loop.
#[inline(always)]
pub fn confirm_mask_capacity(
    fname: &str,
    cmp_len: usize,
    mask: Option<&Bitmask>,
) -> Result<(), KernelError> {
    match mask {
        Some(m) if m.len() < cmp_len => Err(KernelError::LengthMismatch(log_length_mismatch(
            fname,
            cmp_len,
            m.len(),
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_nulls_prefers_the_count() {
        let m = Bitmask::new_set_all(3, true);
        assert!(!has_nulls(Some(0), Some(&m)));
        assert!(has_nulls(None, Some(&m)));
        assert!(has_nulls(Some(2), None));
        assert!(!has_nulls(None, None));
    }

    #[test]
    fn merge_is_per_row_and() {
        let mut l = Bitmask::new_set_all(4, true);
        l.set(1, false);
        let mut r = Bitmask::new_set_all(4, true);
        r.set(3, false);

        let merged = merge_bitmasks_to_new(Some(&l), Some(&r), 4).unwrap();
        let bits: Vec<bool> = (0..4).map(|i| merged.get(i)).collect();
        assert_eq!(bits, vec![true, false, true, false]);

        let single = merge_bitmasks_to_new(None, Some(&r), 4).unwrap();
        assert!(!single.get(3));
        assert!(merge_bitmasks_to_new(None, None, 4).is_none());
    }

    #[test]
    fn short_mask_is_rejected() {
        let m = Bitmask::new_set_all(2, true);
        assert!(confirm_mask_capacity("k", 2, Some(&m)).is_ok());
        assert!(matches!(
            confirm_mask_capacity("k", 3, Some(&m)),
            Err(KernelError::LengthMismatch(_))
        ));
        assert!(confirm_mask_capacity("k", 3, None).is_ok());
    }
}
