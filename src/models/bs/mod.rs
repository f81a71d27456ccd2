// Black-Scholes closed-form pricing for European calls and puts, plus the
// trivially derivable Greeks (delta, gamma).  Implied-volatility solving is
// intentionally omitted to keep the lightweight focus of heatmap-lib.

use statrs::distribution::{Continuous, ContinuousCDF, Normal};

use crate::error::Result;
use crate::params::OptionParameters;

/// Standard normal CDF Φ(x).
fn norm_cdf(x: f64) -> f64 {
    let normal = Normal::new(0.0, 1.0).unwrap();
    normal.cdf(x)
}

/// Shared Black-Scholes intermediates:
///
/// ```text
/// d1 = ( ln(s/k) + (r - d + σ²/2) t ) / ( σ √t )
/// d2 = d1 - σ √t
/// ```
///
/// Both price formulas and all Greeks consume this one helper so the two
/// near-duplicate formulas cannot drift apart. Callers must have validated
/// the parameters first.
fn d1_d2(p: &OptionParameters) -> (f64, f64) {
    let sqrt_t = p.time_to_maturity.sqrt();
    let d1 = ((p.spot / p.strike).ln()
        + (p.risk_free_rate - p.dividend_yield + 0.5 * p.volatility * p.volatility)
            * p.time_to_maturity)
        / (p.volatility * sqrt_t);
    let d2 = d1 - p.volatility * sqrt_t;
    (d1, d2)
}

/// Round a theoretical price to 2-decimal display precision.
pub(crate) fn round_price(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Price of a European call option under Black-Scholes assumptions,
/// rounded to 2 decimals:
///
/// ```text
/// C = s Φ(d1) e^(-d t) - k Φ(d2) e^(-r t)
/// ```
pub fn call_price(params: &OptionParameters) -> Result<f64> {
    params.validate()?;
    let (d1, d2) = d1_d2(params);
    let discounted_spot = params.spot * (-params.dividend_yield * params.time_to_maturity).exp();
    let discounted_strike =
        params.strike * (-params.risk_free_rate * params.time_to_maturity).exp();
    Ok(round_price(
        discounted_spot * norm_cdf(d1) - discounted_strike * norm_cdf(d2),
    ))
}

/// Price of a European put option under Black-Scholes assumptions,
/// rounded to 2 decimals:
///
/// ```text
/// P = k Φ(-d2) e^(-r t) - s Φ(-d1) e^(-d t)
/// ```
pub fn put_price(params: &OptionParameters) -> Result<f64> {
    params.validate()?;
    let (d1, d2) = d1_d2(params);
    let discounted_spot = params.spot * (-params.dividend_yield * params.time_to_maturity).exp();
    let discounted_strike =
        params.strike * (-params.risk_free_rate * params.time_to_maturity).exp();
    Ok(round_price(
        discounted_strike * norm_cdf(-d2) - discounted_spot * norm_cdf(-d1),
    ))
}

/// Spot delta of a call, `e^(-d t) Φ(d1)`, with the dividend-yield discount
/// factor applied. Unrounded: deltas feed further analytics, not displays.
pub fn call_delta(params: &OptionParameters) -> Result<f64> {
    params.validate()?;
    let (d1, _) = d1_d2(params);
    let fwd_factor = (-params.dividend_yield * params.time_to_maturity).exp();
    Ok(fwd_factor * norm_cdf(d1))
}

/// Spot delta of a put, `e^(-d t) (Φ(d1) - 1)`.
pub fn put_delta(params: &OptionParameters) -> Result<f64> {
    params.validate()?;
    let (d1, _) = d1_d2(params);
    let fwd_factor = (-params.dividend_yield * params.time_to_maturity).exp();
    Ok(fwd_factor * (norm_cdf(d1) - 1.0))
}

/// Gamma, `e^(-d t) φ(d1) / (s σ √t)`, identical for calls and puts.
pub fn gamma(params: &OptionParameters) -> Result<f64> {
    params.validate()?;
    let (d1, _) = d1_d2(params);
    let normal = Normal::new(0.0, 1.0).unwrap();
    let fwd_factor = (-params.dividend_yield * params.time_to_maturity).exp();
    Ok(fwd_factor * normal.pdf(d1)
        / (params.spot * params.volatility * params.time_to_maturity.sqrt()))
}
