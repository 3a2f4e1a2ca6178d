// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Quantile Edge Rules** - *Ordered Special-Case Table*
//!
//! Before any search, a quantile request is matched against an ordered list of rules.
//! The first rule whose probability and parameter conditions both match decides the
//! result. Order matters: a NaN probability paired with a NaN parameter must be caught by
//! the NaN rules, never by the range check below them.
//!
//! | # | probability | parameters | result |
//! |---|---|---|---|
//! | 1 | NaN | any | NaN |
//! | 1 | any | NaN | NaN |
//! | 2 | outside `[0, 1]` | any | NaN |
//! | 3 | any | invalid | NaN |
//! | 4 | `0` | degenerate at zero | `0` |
//! | 5 | `1` | degenerate at zero | `+∞` |
//! | 6 | `(0, 1)` | degenerate at zero | `0` |
//! | 7 | `0` | infinite | `0` |
//! | 8 | `1` | infinite | `+∞` |
//! | 9 | `(0, 1)` | infinite | `+∞` |
//! | 10 | `0` | any | `0` |
//! | 11 | `1` | any | `+∞` |
//! | 12 | otherwise | | search |
//!
//! Rule 6 follows from the CDF of a point mass at the origin, which is `1` on `[0, ∞)`, so
//! the smallest `x` with `F(x) ≥ p` is `0`. Rule 9 follows from the limiting CDF being `0`
//! at every finite `x`.

use super::classify::{ParamClass, ProbClass};

/// What a rule decides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// The quantile is this value; no search is needed.
    Fixed(f64),
    /// Hand over to the closed form or the root finder.
    Search,
}

/// One row of the edge-case table. `None` matches every class.
#[derive(Debug, Clone, Copy)]
pub struct EdgeRule {
    pub label: &'static str,
    pub prob: Option<ProbClass>,
    pub params: Option<ParamClass>,
    pub outcome: Outcome,
}

impl EdgeRule {
    const fn new(
        label: &'static str,
        prob: Option<ProbClass>,
        params: Option<ParamClass>,
        outcome: Outcome,
    ) -> Self {
        Self {
            label,
            prob,
            params,
            outcome,
        }
    }

    /// True when both conditions accept the given classes.
    #[inline(always)]
    pub fn matches(&self, prob: ProbClass, params: ParamClass) -> bool {
        self.prob.map_or(true, |c| c == prob) && self.params.map_or(true, |c| c == params)
    }
}

/// Rules shared by every family with support `[0, ∞)`.
pub const NON_NEGATIVE_SUPPORT_RULES: &[EdgeRule] = &[
    EdgeRule::new(
        "nan probability",
        Some(ProbClass::NotANumber),
        None,
        Outcome::Fixed(f64::NAN),
    ),
    EdgeRule::new(
        "nan parameter",
        None,
        Some(ParamClass::NotANumber),
        Outcome::Fixed(f64::NAN),
    ),
    EdgeRule::new(
        "probability outside [0, 1]",
        Some(ProbClass::OutOfRange),
        None,
        Outcome::Fixed(f64::NAN),
    ),
    EdgeRule::new(
        "invalid parameter",
        None,
        Some(ParamClass::Invalid),
        Outcome::Fixed(f64::NAN),
    ),
    EdgeRule::new(
        "point mass, p = 0",
        Some(ProbClass::Zero),
        Some(ParamClass::DegenerateZero),
        Outcome::Fixed(0.0),
    ),
    EdgeRule::new(
        "point mass, p = 1",
        Some(ProbClass::One),
        Some(ParamClass::DegenerateZero),
        Outcome::Fixed(f64::INFINITY),
    ),
    EdgeRule::new(
        "point mass, 0 < p < 1",
        Some(ProbClass::Interior),
        Some(ParamClass::DegenerateZero),
        Outcome::Fixed(0.0),
    ),
    EdgeRule::new(
        "escaping mass, p = 0",
        Some(ProbClass::Zero),
        Some(ParamClass::Infinite),
        Outcome::Fixed(0.0),
    ),
    EdgeRule::new(
        "escaping mass, p = 1",
        Some(ProbClass::One),
        Some(ParamClass::Infinite),
        Outcome::Fixed(f64::INFINITY),
    ),
    EdgeRule::new(
        "escaping mass, 0 < p < 1",
        Some(ProbClass::Interior),
        Some(ParamClass::Infinite),
        Outcome::Fixed(f64::INFINITY),
    ),
    EdgeRule::new(
        "lower end of support",
        Some(ProbClass::Zero),
        None,
        Outcome::Fixed(0.0),
    ),
    EdgeRule::new(
        "upper end of support",
        Some(ProbClass::One),
        None,
        Outcome::Fixed(f64::INFINITY),
    ),
];

/// Returns the first matching rule, if any.
#[inline(always)]
pub fn first_match(
    rules: &'static [EdgeRule],
    prob: ProbClass,
    params: ParamClass,
) -> Option<&'static EdgeRule> {
    rules.iter().find(|r| r.matches(prob, params))
}

/// Resolves a classified request against `rules`; unmatched requests go to the search.
#[inline(always)]
pub fn resolve(rules: &'static [EdgeRule], prob: ProbClass, params: ParamClass) -> Outcome {
    first_match(rules, prob, params).map_or(Outcome::Search, |r| r.outcome)
}
