//! Option Greeks under Black-Scholes-Merton.
//!
//! Scaling follows the usual desk conventions: vega and rho per one percentage
//! point, theta per calendar day (365-day year).

use crate::error::DomainResult;
use crate::models::bs::d1_d2;
use crate::models::utils::{norm_cdf, norm_pdf};
use crate::types::{GreeksSet, MarketParameters};

const DAYS_PER_YEAR: f64 = 365.0;
const PER_PERCENT: f64 = 100.0;

/// Computes the eight Greeks for a validated parameter set.
pub fn greeks(params: &MarketParameters) -> DomainResult<GreeksSet> {
    params.validate()?;
    let (d1, d2) = d1_d2(params);
    let greeks = greeks_from_terms(params, d1, d2);
    greeks.ensure_finite()?;
    Ok(greeks)
}

#[allow(non_snake_case)]
pub(crate) fn greeks_from_terms(p: &MarketParameters, d1: f64, d2: f64) -> GreeksSet {
    let S = p.spot;
    let K = p.strike;
    let T = p.time_to_expiry;
    let r = p.risk_free_rate;
    let sigma = p.volatility;

    let sqrt_t = T.sqrt();
    let df = p.discount_factor();
    let pdf_d1 = norm_pdf(d1);
    let cdf_d1 = norm_cdf(d1);
    let cdf_d2 = norm_cdf(d2);
    let cdf_neg_d2 = norm_cdf(-d2);

    // Shared by both thetas
    let decay = -S * pdf_d1 * sigma / (2.0 * sqrt_t);

    GreeksSet {
        delta_call: cdf_d1,
        delta_put: cdf_d1 - 1.0,
        gamma: pdf_d1 / (S * sigma * sqrt_t),
        vega: S * pdf_d1 * sqrt_t / PER_PERCENT,
        theta_call: (decay - r * K * df * cdf_d2) / DAYS_PER_YEAR,
        theta_put: (decay + r * K * df * cdf_neg_d2) / DAYS_PER_YEAR,
        rho_call: K * T * df * cdf_d2 / PER_PERCENT,
        rho_put: -K * T * df * cdf_neg_d2 / PER_PERCENT,
    }
}
