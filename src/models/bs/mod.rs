// The Black-Scholes call and put pricing helpers that form the core of
// blackscholes-lib.  Implied-volatility and Greeks are intentionally
// omitted to keep the lightweight closed-form focus.

pub mod broadcast;

use crate::math::normal;

/// Price of a European call option under Black-Scholes assumptions.
///
/// Inputs are spot `S`, strike `K`, continuously-compounded risk-free rate
/// `r`, annualized volatility `sigma`, continuously-compounded dividend
/// yield `q`, and time to maturity `T` in years.
///
/// `sigma == 0.0` (exact representational equality, not a tolerance band)
/// prices a deterministic underlying: the discounted intrinsic value
/// `max(S*e^(-qT) - K*e^(-rT), 0)` with no optionality premium.  Every
/// other input flows through the general formula, so `T == 0` with
/// positive `sigma` divides by zero inside `d1` and the result propagates
/// as NaN or a signed infinity per IEEE-754 rather than raising.  Inputs
/// are not validated; callers own domain checks such as `S > 0`, `K > 0`.
#[allow(non_snake_case)]
pub fn bs_call_price(S: f64, K: f64, r: f64, sigma: f64, q: f64, T: f64) -> f64 {
    if sigma == 0.0 {
        return (S * (-q * T).exp() - K * (-r * T).exp()).max(0.0);
    }
    let d1 = ((S / K).ln() + (r - q + 0.5 * sigma.powi(2)) * T) / (sigma * T.sqrt());
    let d2 = d1 - sigma * T.sqrt();
    S * (-q * T).exp() * normal::cdf(d1) - K * (-r * T).exp() * normal::cdf(d2)
}

/// Price of a European put option under Black-Scholes assumptions.
///
/// Mirrors [`bs_call_price`]: the `sigma == 0.0` branch returns
/// `max(K*e^(-rT) - S*e^(-qT), 0)`, and the general branch evaluates
/// `Phi(-d2)` / `Phi(-d1)` with the same `d1`, `d2` definitions as the
/// call.  The `T == 0`, `sigma > 0` singularity behaves as for the call.
#[allow(non_snake_case)]
pub fn bs_put_price(S: f64, K: f64, r: f64, sigma: f64, q: f64, T: f64) -> f64 {
    if sigma == 0.0 {
        return (K * (-r * T).exp() - S * (-q * T).exp()).max(0.0);
    }
    let d1 = ((S / K).ln() + (r - q + 0.5 * sigma.powi(2)) * T) / (sigma * T.sqrt());
    let d2 = d1 - sigma * T.sqrt();
    K * (-r * T).exp() * normal::cdf(-d2) - S * (-q * T).exp() * normal::cdf(-d1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atm_reference_value() {
        // S=100, K=100, r=q=0, sigma=0.2, T=1: both legs reduce to
        // 100 * (2*Phi(0.1) - 1)
        let call = bs_call_price(100.0, 100.0, 0.0, 0.2, 0.0, 1.0);
        let put = bs_put_price(100.0, 100.0, 0.0, 0.2, 0.0, 1.0);
        assert!((call - 7.965_567_455).abs() < 1e-6, "call={}", call);
        assert!((put - 7.965_567_455).abs() < 1e-6, "put={}", put);
    }

    #[test]
    fn test_zero_volatility_branch() {
        let s = 110.0;
        let k = 100.0;
        let r = 0.05;
        let q = 0.01;
        let t = 0.5;

        let call = bs_call_price(s, k, r, 0.0, q, t);
        let expected = (s * (-q * t).exp() - k * (-r * t).exp()).max(0.0);
        assert!((call - expected).abs() < 1e-12);

        // Out-of-the-money side clamps to zero
        let put = bs_put_price(s, k, r, 0.0, q, t);
        assert!((put - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_expired_with_zero_volatility_is_intrinsic() {
        // sigma = 0 and T = 0 with r = q = 0 reduces to undiscounted
        // intrinsic value
        assert!((bs_call_price(105.0, 100.0, 0.0, 0.0, 0.0, 0.0) - 5.0).abs() < 1e-12);
        assert!((bs_put_price(105.0, 100.0, 0.0, 0.0, 0.0, 0.0) - 0.0).abs() < 1e-12);
        assert!((bs_put_price(95.0, 100.0, 0.0, 0.0, 0.0, 0.0) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_expiry_singularity_propagates_nan() {
        // T = 0 with positive sigma divides by zero inside d1; at the money
        // this is 0/0 and the price is NaN, never a panic
        assert!(bs_call_price(100.0, 100.0, 0.0, 0.2, 0.0, 0.0).is_nan());
        assert!(bs_put_price(100.0, 100.0, 0.0, 0.2, 0.0, 0.0).is_nan());
    }

    #[test]
    fn test_non_finite_inputs_propagate() {
        assert!(bs_call_price(f64::NAN, 100.0, 0.0, 0.2, 0.0, 1.0).is_nan());
        assert!(bs_put_price(100.0, f64::NAN, 0.0, 0.2, 0.0, 1.0).is_nan());
        // Negative spot makes ln(S/K) NaN and flows through unvalidated
        assert!(bs_call_price(-100.0, 100.0, 0.0, 0.2, 0.0, 1.0).is_nan());
    }

    #[test]
    fn test_deep_moneyness_boundaries() {
        let far_otm_call = bs_call_price(1.0, 1000.0, 0.01, 0.2, 0.0, 1.0);
        assert!(far_otm_call >= 0.0);
        assert!(far_otm_call < 1e-12, "got {}", far_otm_call);

        let far_otm_put = bs_put_price(1000.0, 1.0, 0.01, 0.2, 0.0, 1.0);
        assert!(far_otm_put >= 0.0);
        assert!(far_otm_put < 1e-12, "got {}", far_otm_put);
    }
}
