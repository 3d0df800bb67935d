//! Black-Scholes-Merton pricing kernel for European options.
//!
//! Two entry points share the same formula functions:
//!
//! - [`price`] for a single contract, returning both prices and the intermediate terms
//! - [`price_array`] for elementwise evaluation over equally-shaped `ndarray` views,
//!   used by the surface generator
//!
//! Because both paths call [`d1_d2`], [`call_from_terms`] and [`put_from_terms`],
//! a cell evaluated through the array path is bit-identical to the scalar result.

use ndarray::{Array, ArrayView, Dimension, Zip};

use crate::error::{ensure_finite, DomainError, DomainResult};
use crate::models::utils::norm_cdf;
use crate::types::{IntermediateTerms, MarketParameters, OptionPrices, OptionType};

/// d1 and d2 for already validated parameters.
#[allow(non_snake_case)]
pub(crate) fn d1_d2(p: &MarketParameters) -> (f64, f64) {
    let S = p.spot;
    let K = p.strike;
    let T = p.time_to_expiry;
    let r = p.risk_free_rate;

    // ½σ²T is folded in as ½σ√T so very large σ never forms σ²
    let vol_sqrt_t = p.vol_sqrt_time();
    let d1 = ((S / K).ln() + r * T) / vol_sqrt_t + 0.5 * vol_sqrt_t;
    let d2 = d1 - vol_sqrt_t;
    (d1, d2)
}

#[allow(non_snake_case)]
fn call_from_terms(p: &MarketParameters, d1: f64, d2: f64) -> f64 {
    let S = p.spot;
    let K = p.strike;
    S * norm_cdf(d1) - K * p.discount_factor() * norm_cdf(d2)
}

#[allow(non_snake_case)]
fn put_from_terms(p: &MarketParameters, d1: f64, d2: f64) -> f64 {
    let S = p.spot;
    let K = p.strike;
    K * p.discount_factor() * norm_cdf(-d2) - S * norm_cdf(-d1)
}

fn price_from_terms(option_type: OptionType, p: &MarketParameters, d1: f64, d2: f64) -> f64 {
    match option_type {
        OptionType::Call => call_from_terms(p, d1, d2),
        OptionType::Put => put_from_terms(p, d1, d2),
    }
}

/// Computes d1, d2, Φ(d1) and Φ(d2).
pub fn d_terms(params: &MarketParameters) -> DomainResult<IntermediateTerms> {
    params.validate()?;
    Ok(terms_unchecked(params))
}

pub(crate) fn terms_unchecked(params: &MarketParameters) -> IntermediateTerms {
    let (d1, d2) = d1_d2(params);
    IntermediateTerms {
        d1,
        d2,
        cdf_d1: norm_cdf(d1),
        cdf_d2: norm_cdf(d2),
    }
}

pub(crate) fn prices_unchecked(params: &MarketParameters, d1: f64, d2: f64) -> OptionPrices {
    OptionPrices {
        call: call_from_terms(params, d1, d2),
        put: put_from_terms(params, d1, d2),
    }
}

/// Prices a European call and put with identical parameters.
///
/// # Errors
///
/// [`DomainError`] if spot, strike, time, volatility or σ√T is not strictly
/// positive, if any input is not finite, or if a price overflows (for instance
/// through `e^(-rT)`).
pub fn price(params: &MarketParameters) -> DomainResult<(OptionPrices, IntermediateTerms)> {
    params.validate()?;
    let terms = terms_unchecked(params);
    let prices = prices_unchecked(params, terms.d1, terms.d2);
    prices.ensure_finite()?;
    Ok((prices, terms))
}

/// Price of a European call under Black-Scholes assumptions.
pub fn call_price(params: &MarketParameters) -> DomainResult<f64> {
    price_single(OptionType::Call, params)
}

/// Price of a European put under Black-Scholes assumptions.
pub fn put_price(params: &MarketParameters) -> DomainResult<f64> {
    price_single(OptionType::Put, params)
}

pub fn price_single(option_type: OptionType, params: &MarketParameters) -> DomainResult<f64> {
    params.validate()?;
    let (d1, d2) = d1_d2(params);
    let value = price_from_terms(option_type, params, d1, d2);
    ensure_finite(price_label(option_type), value)?;
    Ok(value)
}

fn price_label(option_type: OptionType) -> &'static str {
    match option_type {
        OptionType::Call => "call price",
        OptionType::Put => "put price",
    }
}

/// Equally-shaped views over the five pricing inputs.
///
/// Scalars held fixed across a grid are expected to be broadcast by the caller
/// (for instance with `Array::from_elem`) before building the views.
#[derive(Debug, Clone)]
pub struct MarketArrays<'a, D: Dimension> {
    pub spot: ArrayView<'a, f64, D>,
    pub strike: ArrayView<'a, f64, D>,
    pub time_to_expiry: ArrayView<'a, f64, D>,
    pub risk_free_rate: ArrayView<'a, f64, D>,
    pub volatility: ArrayView<'a, f64, D>,
}

impl<'a, D: Dimension> MarketArrays<'a, D> {
    /// Bundles the views, rejecting any whose shape differs from `spot`.
    pub fn new(
        spot: ArrayView<'a, f64, D>,
        strike: ArrayView<'a, f64, D>,
        time_to_expiry: ArrayView<'a, f64, D>,
        risk_free_rate: ArrayView<'a, f64, D>,
        volatility: ArrayView<'a, f64, D>,
    ) -> DomainResult<Self> {
        let expected = spot.shape();
        for (name, found) in [
            ("strike", strike.shape()),
            ("time_to_expiry", time_to_expiry.shape()),
            ("risk_free_rate", risk_free_rate.shape()),
            ("volatility", volatility.shape()),
        ] {
            if found != expected {
                return Err(DomainError::ShapeMismatch {
                    name,
                    expected: expected.to_vec(),
                    found: found.to_vec(),
                });
            }
        }

        Ok(Self {
            spot,
            strike,
            time_to_expiry,
            risk_free_rate,
            volatility,
        })
    }

    pub fn shape(&self) -> &[usize] {
        self.spot.shape()
    }

    pub fn len(&self) -> usize {
        self.spot.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spot.is_empty()
    }

    /// Per-element parameters in logical (row-major) order.
    fn element_iter(&self) -> impl Iterator<Item = MarketParameters> + '_ {
        self.spot
            .iter()
            .zip(self.strike.iter())
            .zip(self.time_to_expiry.iter())
            .zip(self.risk_free_rate.iter())
            .zip(self.volatility.iter())
            .map(|((((&spot, &strike), &time_to_expiry), &risk_free_rate), &volatility)| {
                MarketParameters {
                    spot,
                    strike,
                    time_to_expiry,
                    risk_free_rate,
                    volatility,
                }
            })
    }

    /// Validates every element; the error carries the flat index of the first bad one.
    pub fn validate(&self) -> DomainResult<()> {
        for (index, params) in self.element_iter().enumerate() {
            params.validate().map_err(|e| e.at_element(index))?;
        }
        Ok(())
    }
}

/// Prices one option type elementwise over [`MarketArrays`].
///
/// All elements are validated before any output is produced, and an element whose
/// price overflows fails the whole array, so the call either returns a fully
/// populated finite array or an error.
pub fn price_array<D: Dimension>(
    option_type: OptionType,
    inputs: &MarketArrays<'_, D>,
) -> DomainResult<Array<f64, D>> {
    inputs.validate()?;

    let prices = Zip::from(&inputs.spot)
        .and(&inputs.strike)
        .and(&inputs.time_to_expiry)
        .and(&inputs.risk_free_rate)
        .and(&inputs.volatility)
        .map_collect(|&spot, &strike, &time_to_expiry, &risk_free_rate, &volatility| {
            let p = MarketParameters {
                spot,
                strike,
                time_to_expiry,
                risk_free_rate,
                volatility,
            };
            let (d1, d2) = d1_d2(&p);
            price_from_terms(option_type, &p, d1, d2)
        });

    let label = price_label(option_type);
    for (index, &value) in prices.iter().enumerate() {
        ensure_finite(label, value).map_err(|e| e.at_element(index))?;
    }
    Ok(prices)
}
