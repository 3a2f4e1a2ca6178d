// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Input Classification** - *Probability and Parameter Classes*
//!
//! Reduces a probability and a parameter set to small enums so that the edge-case table in
//! `edge_rules` can be written as data. None of the classes is an error: zero and infinite
//! parameters describe limiting distributions that have well-defined quantiles.

use core::fmt;

/// Class of a probability argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbClass {
    /// `p` is NaN.
    NotANumber,
    /// `p < 0` or `p > 1`, including `±∞`.
    OutOfRange,
    /// `p == 0` (either sign of zero).
    Zero,
    /// `p == 1`.
    One,
    /// `0 < p < 1`.
    Interior,
}

/// Class of a distribution's parameter set.
///
/// The class names the limiting distribution, not the raw number: an exponential with
/// `rate == 0` is `Infinite` because its mass escapes to `+∞`, while `rate == +∞` is
/// `DegenerateZero` because every draw is `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamClass {
    /// Some parameter is NaN.
    NotANumber,
    /// Outside the parameter space, e.g. negative degrees of freedom (including `-∞`).
    Invalid,
    /// Point mass at the origin, e.g. `dof == 0`.
    DegenerateZero,
    /// Mass escapes to `+∞`, e.g. `dof == +∞`.
    Infinite,
    /// Finite, strictly positive parameters.
    Valid,
}

/// Classifies a probability.
#[inline(always)]
pub fn classify_probability(p: f64) -> ProbClass {
    if p.is_nan() {
        ProbClass::NotANumber
    } else if !(0.0..=1.0).contains(&p) {
        ProbClass::OutOfRange
    } else if p == 0.0 {
        ProbClass::Zero
    } else if p == 1.0 {
        ProbClass::One
    } else {
        ProbClass::Interior
    }
}

/// Classifies a single shape-like parameter where `0` is a point mass at the origin and
/// `+∞` sends the mass to infinity (degrees of freedom, gamma shape).
#[inline(always)]
pub fn classify_shape(v: f64) -> ParamClass {
    if v.is_nan() {
        ParamClass::NotANumber
    } else if v < 0.0 {
        ParamClass::Invalid
    } else if v == 0.0 {
        ParamClass::DegenerateZero
    } else if v == f64::INFINITY {
        ParamClass::Infinite
    } else {
        ParamClass::Valid
    }
}

/// Classifies a rate parameter, the reciprocal of a scale: `0` sends the mass to infinity
/// and `+∞` collapses it onto the origin.
#[inline(always)]
pub fn classify_rate(v: f64) -> ParamClass {
    match classify_shape(v) {
        ParamClass::DegenerateZero => ParamClass::Infinite,
        ParamClass::Infinite => ParamClass::DegenerateZero,
        other => other,
    }
}

/// Combines the classes of several parameters into the class of the whole set.
///
/// NaN dominates, then invalid, then a collapse onto the origin, then escape to infinity.
pub fn combine_classes(classes: &[ParamClass]) -> ParamClass {
    const PRECEDENCE: [ParamClass; 4] = [
        ParamClass::NotANumber,
        ParamClass::Invalid,
        ParamClass::DegenerateZero,
        ParamClass::Infinite,
    ];
    PRECEDENCE
        .into_iter()
        .find(|c| classes.contains(c))
        .unwrap_or(ParamClass::Valid)
}

impl fmt::Display for ProbClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProbClass::NotANumber => "NaN",
            ProbClass::OutOfRange => "outside [0, 1]",
            ProbClass::Zero => "0",
            ProbClass::One => "1",
            ProbClass::Interior => "(0, 1)",
        };
        f.write_str(s)
    }
}

impl fmt::Display for ParamClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ParamClass::NotANumber => "NaN",
            ParamClass::Invalid => "invalid",
            ParamClass::DegenerateZero => "degenerate at zero",
            ParamClass::Infinite => "infinite",
            ParamClass::Valid => "valid",
        };
        f.write_str(s)
    }
}
