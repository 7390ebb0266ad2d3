//! Standard normal distribution helpers.

/// Standard normal cumulative distribution function Φ(x).
///
/// Evaluates `0.5 * (1 + erf(x / sqrt(2)))` through `libm::erf`, accurate to
/// double precision across the |x| range encountered in option pricing.
/// Non-finite inputs follow IEEE-754 semantics: NaN stays NaN and the
/// infinities map to 0 and 1.
pub fn cdf(x: f64) -> f64 {
    0.5 * (1.0 + libm::erf(x / (2.0_f64).sqrt()))
}
