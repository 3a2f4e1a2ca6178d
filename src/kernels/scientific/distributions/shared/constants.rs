// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Mathematical Constants Module** - *Coefficients for the Special Functions*
//!
//! Hard-coded constants used by the log-gamma, incomplete gamma and inverse-normal
//! approximations that seed and drive the quantile search.

/// Natural logarithm of π.
pub(crate) const LN_PI: f64 = 1.144_729_885_849_400_2;

/// ½·ln(2π), the constant term of Stirling-type expansions.
pub(crate) const HALF_LN_TWO_PI: f64 = 0.918_938_533_204_672_7;

/// Lanczos auxiliary parameter `g`.
pub(crate) const LANCZOS_G: f64 = 7.0;

/// Lanczos approximation coefficients for `g = 7`, `n = 9`.
///
/// Near machine precision for `x ≥ 0.5`; smaller arguments go through reflection.
pub(crate) const LANCZOS_COEFFS: [f64; 9] = [
    0.999_999_999_999_809_93,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_13,
    -176.615_029_162_140_59,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_571_6e-6,
    1.505_632_735_149_311_6e-7,
];

/// Acklam's inverse normal approximation, central region numerator.
pub(crate) const ACKLAM_A: [f64; 6] = [
    -3.969683028665376e+01,
    2.209460984245205e+02,
    -2.759285104469687e+02,
    1.383577518672690e+02,
    -3.066479806614716e+01,
    2.506628277459239e+00,
];

/// Acklam's inverse normal approximation, central region denominator.
pub(crate) const ACKLAM_B: [f64; 5] = [
    -5.447609879822406e+01,
    1.615858368580409e+02,
    -1.556989798598866e+02,
    6.680131188771972e+01,
    -1.328068155288572e+01,
];

/// Acklam's inverse normal approximation, tail numerator.
pub(crate) const ACKLAM_C: [f64; 6] = [
    -7.784894002430293e-03,
    -3.223964580411365e-01,
    -2.400758277161838e+00,
    -2.549732539343734e+00,
    4.374664141464968e+00,
    2.938163982698783e+00,
];

/// Acklam's inverse normal approximation, tail denominator.
pub(crate) const ACKLAM_D: [f64; 4] = [
    7.784695709041462e-03,
    3.224671290700398e-01,
    2.445134137142996e+00,
    3.754408661907416e+00,
];

/// Breakpoint between Acklam's tail and central regions (≈ -2σ).
pub(crate) const ACKLAM_P_LOW: f64 = 0.02425;

/// Floor used by Lentz's continued fraction to avoid division by zero.
pub(crate) const LENTZ_TINY: f64 = 1e-300;

/// Term cap for the incomplete gamma series and continued fraction.
///
/// The series needs roughly `O(√a)` terms near `x ≈ a`; shapes that would need more are
/// routed to the uniform asymptotic expansion long before the cap matters.
pub(crate) const INCOMPLETE_GAMMA_MAX_TERMS: usize = 100_000;

/// Shape above which the incomplete gamma prefix `xᵃ e⁻ˣ / Γ(a)` is assembled from Stirling's
/// series instead of `a ln x - x - ln Γ(a)`, whose terms cancel when `x ≈ a`.
pub(crate) const STIRLING_MIN_SHAPE: f64 = 15.0;

/// Stirling series for `ln Γ(a + 1) - (a + ½) ln a + a - ½ ln(2π)`, in powers of `1/a²`:
/// `1/12, 1/360, 1/1260, 1/1680, 1/1188` with alternating signs applied by the caller.
pub(crate) const STIRLING_SERIES: [f64; 5] = [
    0.083_333_333_333_333_33,
    0.002_777_777_777_777_778,
    0.000_793_650_793_650_793_7,
    0.000_595_238_095_238_095_3,
    0.000_841_750_841_750_841_7,
];

/// Shape at which the incomplete gamma switches to Temme's uniform asymptotic expansion.
///
/// Two correction terms leave an error of order `a⁻³` relative to the density, and the
/// series/continued fraction below it need at most a few thousand terms.
pub(crate) const UNIFORM_ASYMPTOTIC_MIN_SHAPE: f64 = 1.0e6;

/// Below this `|η|` the Temme coefficients come from their Taylor series; the closed forms
/// cancel catastrophically near `η = 0`.
pub(crate) const TEMME_SERIES_ETA: f64 = 0.25;

/// Taylor coefficients of Temme's `c₀(η) = 1/(λ - 1) - 1/η`, highest power first.
pub(crate) const TEMME_C0: [f64; 13] = [
    1.026_180_978_424_030_9e-8,
    6.707_853_543_401_498e-9,
    -1.766_595_273_682_607_8e-7,
    8.296_711_340_953_087e-7,
    -1.854_062_210_715_16e-6,
    -2.185_448_510_679_992e-6,
    3.919_263_178_522_438e-5,
    -1.787_551_440_329_218e-4,
    3.527_336_860_670_194e-4,
    1.157_407_407_407_407_3e-3,
    -1.481_481_481_481_481_5e-2,
    8.333_333_333_333_333e-2,
    -3.333_333_333_333_333e-1,
];

/// Taylor coefficients of Temme's
/// `c₁(η) = 1/η³ - 1/(λ - 1)³ - 1/(λ - 1)² - 1/(12(λ - 1))`, highest power first.
pub(crate) const TEMME_C1: [f64; 8] = [
    7.649_160_916_081_11e-6,
    -1.809_855_033_448_997_7e-5,
    -4.018_775_720_164_609e-7,
    2.057_613_168_724_279_8e-4,
    -9.902_263_374_485_596e-4,
    2.645_502_645_502_645_4e-3,
    -3.472_222_222_222_222e-3,
    -1.851_851_851_851_852e-3,
];
