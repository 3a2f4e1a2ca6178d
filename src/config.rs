// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

// These parameters should rarely need adjustment.

//! # **Configuration Constants** - *Runtime Behaviour Parameters*
//!
//! Defaults for the quantile root finder and the element-wise dispatch thresholds.
//! Per-call overrides go through `RootFinder::new`.

/// Default residual tolerance relative to the matched tail mass.
///
/// The root finder accepts `x` once `|mass(x) - m| <= DEFAULT_MASS_REL_TOL * m`, where
/// `m = min(p, 1 - p)`. Since `m <= 0.5`, this also bounds the absolute residual `|F(x) - p|`.
pub const DEFAULT_MASS_REL_TOL: f64 = 1e-12;

/// Default relative tolerance on the Newton step and on the width of the bracket.
pub const DEFAULT_REL_TOL: f64 = 1e-13;

/// Default iteration cap for a single inversion.
///
/// Reaching the cap is not an error: the best bracketed estimate is returned.
pub const DEFAULT_MAX_ITER: usize = 200;

/// Minimum input length before the `parallel` feature hands evaluation to rayon.
/// Shorter inputs run sequentially.
pub const PARALLEL_MIN_LEN: usize = 4096;
