//! # bsm-surface: Black-Scholes-Merton Pricing, Greeks and Price Surfaces
//!
//! `bsm-surface` prices European calls and puts with the closed-form
//! Black-Scholes-Merton model, reports the standard Greeks, and evaluates prices
//! across a strike × volatility grid for heatmap-style rendering.
//!
//! ## Core Features
//!
//! - **Pricing kernel**: `d1`, `d2`, call and put prices, scalar or elementwise over `ndarray` views
//! - **Greeks**: delta (call/put), gamma, vega, theta (call/put), rho (call/put)
//! - **Surfaces**: call and put price matrices over strike and volatility ranges
//! - **Typed validation**: degenerate inputs fail with [`DomainError`] instead of yielding NaN
//!
//! ## Quick Start
//!
//! ```rust
//! use bsm_surface::{build_surface, default_configs, price, valuate, MarketParameters};
//!
//! let params = MarketParameters::new(100.0, 100.0, 1.0, 0.05, 0.2)?;
//!
//! let (prices, terms) = price(&params)?;
//! assert!((prices.call - 10.4506).abs() < 1e-4);
//! assert!((terms.d1 - 0.35).abs() < 1e-12);
//!
//! let valuation = valuate(&params)?;
//! assert_eq!(valuation.greeks.delta_call - valuation.greeks.delta_put, 1.0);
//!
//! let request = default_configs::standard();
//! let grid = build_surface(&params, request.strike_range(), request.vol_range_percent(), request.resolution)?;
//! assert_eq!(grid.shape(), (50, 50));
//! # Ok::<(), bsm_surface::DomainError>(())
//! ```
//!
//! ## Units
//!
//! - Time to expiry in years, rate and volatility as decimals (0.05, 0.2)
//! - Surface volatility bounds in percent (10.0 = 10%)
//! - Vega and rho per one percentage point, theta per calendar day

// ================================================================================================
// MODULES
// ================================================================================================

#[cfg(feature = "serde")]
pub mod config;
pub mod error;
pub mod models;
pub mod surface;
pub mod types;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use error::{DomainError, DomainResult};

pub use types::{
    GreeksSet, IntermediateTerms, MarketParameters, OptionPrices, OptionType, Valuation,
};

pub use models::bs::{call_price, d_terms, price, price_array, put_price, MarketArrays};
pub use models::greeks::greeks;

pub use surface::{
    build_surface, build_surface_from_request, SensitivityGrid, SurfaceRequest,
    DEFAULT_RESOLUTION, MIN_RESOLUTION,
};

#[cfg(feature = "serde")]
pub use config::ValuationRequest;

use models::bs::{prices_unchecked, terms_unchecked};
use models::greeks::greeks_from_terms;

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured surface requests.
///
/// - [`standard()`]: the input form's default sliders, 50 × 50
/// - [`coarse()`]: same bounds, 20 × 20, for quick previews
/// - [`fine()`]: same bounds, 200 × 200, for smooth contours
/// - [`wide()`]: the widest bounds the form allows
pub mod default_configs {
    use crate::surface::SurfaceRequest;

    /// Strikes 80-120, volatility 10-60%, 50 points per axis.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bsm_surface::default_configs;
    ///
    /// let request = default_configs::standard();
    /// assert_eq!(request.strike_range(), (80.0, 120.0));
    /// ```
    pub fn standard() -> SurfaceRequest {
        SurfaceRequest::standard()
    }

    pub fn coarse() -> SurfaceRequest {
        SurfaceRequest::coarse()
    }

    pub fn fine() -> SurfaceRequest {
        SurfaceRequest::fine()
    }

    /// Strikes 50-200, volatility 1-300%.
    pub fn wide() -> SurfaceRequest {
        SurfaceRequest::wide()
    }
}

/// Prices, intermediate terms and Greeks for one contract.
///
/// Equivalent to calling [`price`] and [`greeks`] separately, but `d1` and `d2`
/// are evaluated once.
///
/// # Errors
///
/// [`DomainError`] under the same conditions as [`price`].
///
/// # Example
///
/// ```rust
/// use bsm_surface::{valuate, MarketParameters};
///
/// let v = valuate(&MarketParameters::default())?;
/// for (name, value) in v.greeks.entries() {
///     println!("{name}: {value:.4}");
/// }
/// assert!(v.prices.parity_gap(&v.params).abs() < 1e-10);
/// # Ok::<(), bsm_surface::DomainError>(())
/// ```
pub fn valuate(params: &MarketParameters) -> DomainResult<Valuation> {
    params.validate()?;
    let terms = terms_unchecked(params);
    let prices = prices_unchecked(params, terms.d1, terms.d2);
    prices.ensure_finite()?;
    let greeks = greeks_from_terms(params, terms.d1, terms.d2);
    greeks.ensure_finite()?;

    Ok(Valuation {
        params: *params,
        prices,
        terms,
        greeks,
    })
}
