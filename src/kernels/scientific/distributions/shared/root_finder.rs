// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Root Finder** - *Safeguarded Newton/Bisection CDF Inversion*
//!
//! Solves `F(x) = p` for a monotone CDF `F` with known density `f`. The search works on
//! whichever tail holds less mass: `F(x) = p` when `p ≤ ½`, otherwise `S(x) = 1 - p` on
//! the survival function, so probabilities next to `1` keep their precision.
//!
//! Each iteration keeps a bracket `[lo, hi]` around the root (initially the support,
//! `hi` may be `+∞`) and takes one of:
//! - a Newton step on `ln(mass)`, taken in `ln(x)` on the lower tail, which converges in a
//!   handful of steps even when the target mass is `1e-300`;
//! - a bisection step, geometric when the bracket spans more than a factor of four,
//!   whenever Newton leaves the bracket, fails to halve the step, or stops improving;
//! - an expansion step `max(2x, x + 1)` while the bracket is still unbounded above.
//!
//! The search stops when the residual falls below `mass_rel_tol` times the target mass (a
//! tolerance relative to the tail mass, so `1e-300` targets are matched to full precision),
//! when the bracket shrinks below `rel_tol` relative to `x`, one evaluated step after the
//! Newton step does, or at `max_iter`. At the cap the best estimate seen is returned, never
//! an error.

use crate::config::{DEFAULT_MASS_REL_TOL, DEFAULT_MAX_ITER, DEFAULT_REL_TOL};
use crate::errors::KernelError;

/// Which tail mass is being matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tail {
    /// `F(x) = p`
    Lower,
    /// `S(x) = q`
    Upper,
}

/// Result of a single inversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    /// Best root estimate.
    pub x: f64,
    /// Absolute residual of the matched tail mass at `x`.
    pub residual: f64,
    /// Iterations used.
    pub iterations: usize,
    /// `false` when the iteration cap was hit or the mass function returned NaN.
    pub converged: bool,
}

/// Tolerances and iteration cap for CDF inversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootFinder {
    mass_rel_tol: f64,
    rel_tol: f64,
    max_iter: usize,
}

impl Default for RootFinder {
    fn default() -> Self {
        Self {
            mass_rel_tol: DEFAULT_MASS_REL_TOL,
            rel_tol: DEFAULT_REL_TOL,
            max_iter: DEFAULT_MAX_ITER,
        }
    }
}

impl RootFinder {
    /// Builds a root finder, rejecting non-positive or non-finite tolerances and a zero
    /// iteration cap.
    pub fn new(mass_rel_tol: f64, rel_tol: f64, max_iter: usize) -> Result<Self, KernelError> {
        if !(mass_rel_tol.is_finite() && mass_rel_tol > 0.0) {
            return Err(KernelError::InvalidArguments(format!(
                "RootFinder::new => mass_rel_tol must be finite and positive, got {mass_rel_tol}"
            )));
        }
        if !(rel_tol.is_finite() && rel_tol > 0.0) {
            return Err(KernelError::InvalidArguments(format!(
                "RootFinder::new => rel_tol must be finite and positive, got {rel_tol}"
            )));
        }
        if max_iter == 0 {
            return Err(KernelError::InvalidArguments(
                "RootFinder::new => max_iter must be at least 1".into(),
            ));
        }
        Ok(Self {
            mass_rel_tol,
            rel_tol,
            max_iter,
        })
    }

    /// Residual tolerance as a fraction of the matched tail mass.
    #[inline]
    pub fn mass_rel_tol(&self) -> f64 {
        self.mass_rel_tol
    }

    #[inline]
    pub fn rel_tol(&self) -> f64 {
        self.rel_tol
    }

    #[inline]
    pub fn max_iter(&self) -> usize {
        self.max_iter
    }

    /// Solves `cdf(x) = p` on `[lower, upper]` starting from `x0`.
    ///
    /// `x0` outside the bracket or non-finite is replaced by the midpoint (finite bracket)
    /// or `lower + 1`.
    #[inline]
    pub fn invert_cdf<C, D>(
        &self,
        p: f64,
        x0: f64,
        lower: f64,
        upper: f64,
        cdf: C,
        density: D,
    ) -> Estimate
    where
        C: Fn(f64) -> f64,
        D: Fn(f64) -> f64,
    {
        self.solve(Tail::Lower, p, x0, lower, upper, cdf, density)
    }

    /// Solves `sf(x) = q` on `[lower, upper]` starting from `x0`.
    #[inline]
    pub fn invert_sf<S, D>(
        &self,
        q: f64,
        x0: f64,
        lower: f64,
        upper: f64,
        sf: S,
        density: D,
    ) -> Estimate
    where
        S: Fn(f64) -> f64,
        D: Fn(f64) -> f64,
    {
        self.solve(Tail::Upper, q, x0, lower, upper, sf, density)
    }

    fn solve<M, D>(
        &self,
        tail: Tail,
        target: f64,
        x0: f64,
        lower: f64,
        upper: f64,
        mass: M,
        density: D,
    ) -> Estimate
    where
        M: Fn(f64) -> f64,
        D: Fn(f64) -> f64,
    {
        let tol = (self.mass_rel_tol * target).max(f64::EPSILON * target);
        let (mut lo, mut hi) = (lower, upper);
        let mut x = seed(x0, lo, hi);

        let mut best = Estimate {
            x,
            residual: f64::INFINITY,
            iterations: 0,
            converged: false,
        };
        let mut prev_residual = f64::INFINITY;
        let mut took_newton = false;
        let mut dx_old = f64::INFINITY;
        let mut polishing = false;

        for it in 1..=self.max_iter {
            let m = mass(x);
            if m.is_nan() {
                log::debug!("RootFinder => tail mass is NaN at x = {x}, stopping after {it} iterations");
                best.iterations = it;
                return best;
            }
            // increasing in x on both tails
            let fx = match tail {
                Tail::Lower => m - target,
                Tail::Upper => target - m,
            };
            let r = fx.abs();
            if r < best.residual {
                best.x = x;
                best.residual = r;
            }
            best.iterations = it;
            if r <= tol {
                return converged(x, r, it);
            }
            if polishing {
                best.converged = true;
                return best;
            }

            if fx < 0.0 {
                lo = lo.max(x);
            } else {
                hi = hi.min(x);
            }
            if hi.is_finite() && hi - lo <= self.rel_tol * hi {
                best.converged = true;
                return best;
            }

            let stalled = took_newton && r > prev_residual;
            let mut newton = None;
            if !stalled && m > 0.0 {
                let d = density(x);
                if d.is_finite() && d > 0.0 {
                    // Newton on ln(mass)
                    let g = match tail {
                        Tail::Lower => log_ratio(m, target, fx),
                        Tail::Upper => log_ratio(target, m, fx),
                    };
                    let step = g * m / d;
                    // lower tail steps in ln(x), so the power-law head never crosses zero
                    let (cand, halves) = match tail {
                        Tail::Lower if x > 0.0 => (x * (-step / x).exp(), true),
                        _ => (x - step, !(hi.is_finite() && (2.0 * step).abs() > dx_old)),
                    };
                    if step.abs() <= self.rel_tol * x.abs() {
                        if !(cand.is_finite() && cand > lo && cand < hi) || cand == x {
                            return converged(x, r, it);
                        }
                        // one last evaluated step: rel_tol can be far coarser than the ulp of x
                        polishing = true;
                        x = cand;
                        continue;
                    }
                    if cand.is_finite() && cand > lo && cand < hi && halves {
                        newton = Some(cand);
                    }
                }
            }

            let next = match newton {
                Some(cand) => cand,
                None if hi.is_finite() => {
                    if lo > 0.0 && hi > 4.0 * lo {
                        lo.sqrt() * hi.sqrt()
                    } else {
                        0.5 * (lo + hi)
                    }
                }
                None => (2.0 * x).max(x + 1.0),
            };
            dx_old = (next - x).abs();
            prev_residual = r;
            took_newton = newton.is_some();
            x = next;
        }

        if polishing {
            best.converged = true;
            return best;
        }
        log::debug!(
            "RootFinder => no convergence after {} iterations (target {target}, best x {}, residual {})",
            self.max_iter,
            best.x,
            best.residual
        );
        best
    }
}

#[inline(always)]
fn seed(x0: f64, lo: f64, hi: f64) -> f64 {
    if x0.is_finite() && x0 > lo && x0 < hi {
        x0
    } else if hi.is_finite() {
        0.5 * (lo + hi)
    } else {
        lo + 1.0
    }
}

/// `ln(num / den)` given `diff = num - den`, using `ln_1p` near `num == den`.
#[inline(always)]
fn log_ratio(num: f64, den: f64, diff: f64) -> f64 {
    if diff.abs() < 0.5 * den {
        (diff / den).ln_1p()
    } else {
        (num / den).ln()
    }
}

#[inline(always)]
fn converged(x: f64, residual: f64, iterations: usize) -> Estimate {
    Estimate {
        x,
        residual,
        iterations,
        converged: true,
    }
}
