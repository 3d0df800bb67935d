//! Strike/volatility price surfaces.
//!
//! The generator lays the two axes out as a meshgrid, broadcasts spot, time and
//! rate to the same shape and hands the whole grid to the pricing kernel once per
//! option type.

use ndarray::{Array1, Array2};
use tracing::debug;

use super::types::*;
use crate::error::DomainResult;
use crate::models::bs::{price_array, MarketArrays};
use crate::models::utils::linspace;
use crate::types::{MarketParameters, OptionType};

/// Builds `(strikes, volatilities)` coordinate matrices of shape
/// `(volatility_axis.len(), strike_axis.len())`.
pub fn meshgrid(
    strike_axis: &Array1<f64>,
    volatility_axis: &Array1<f64>,
) -> (Array2<f64>, Array2<f64>) {
    let shape = (volatility_axis.len(), strike_axis.len());
    let strikes = Array2::from_shape_fn(shape, |(_, j)| strike_axis[j]);
    let volatilities = Array2::from_shape_fn(shape, |(i, _)| volatility_axis[i]);
    (strikes, volatilities)
}

/// Evaluates call and put prices over a `resolution × resolution` grid.
///
/// `strike_range` is `(min, max)` in price units, `vol_range_percent` is
/// `(min, max)` in percent. The strike and volatility stored in `base` are
/// ignored; its spot, time and rate are held fixed.
///
/// # Errors
///
/// [`crate::DomainError`] if `base` is invalid, a range is not `0 < min < max`,
/// or `resolution < 2`.
///
/// # Example
///
/// ```rust
/// use bsm_surface::{build_surface, MarketParameters, OptionType};
///
/// let base = MarketParameters::default();
/// let grid = build_surface(&base, (80.0, 120.0), (10.0, 60.0), 50)?;
/// assert_eq!(grid.shape(), (50, 50));
/// let (lo, hi) = grid.value_range(OptionType::Call);
/// assert!(lo < hi);
/// # Ok::<(), bsm_surface::DomainError>(())
/// ```
pub fn build_surface(
    base: &MarketParameters,
    strike_range: (f64, f64),
    vol_range_percent: (f64, f64),
    resolution: usize,
) -> DomainResult<SensitivityGrid> {
    let request = SurfaceRequest::new(strike_range, vol_range_percent, resolution)?;
    build_surface_from_request(base, &request)
}

/// Same as [`build_surface`], taking the bounds from a [`SurfaceRequest`].
pub fn build_surface_from_request(
    base: &MarketParameters,
    request: &SurfaceRequest,
) -> DomainResult<SensitivityGrid> {
    base.validate()?;
    request.validate()?;

    let n = request.resolution;
    let strike_axis = Array1::from(linspace(request.strike_min, request.strike_max, n));
    let volatility_axis = Array1::from(linspace(
        request.vol_min_percent / 100.0,
        request.vol_max_percent / 100.0,
        n,
    ));

    debug!(
        resolution = n,
        strike_min = request.strike_min,
        strike_max = request.strike_max,
        vol_min = volatility_axis[0],
        vol_max = volatility_axis[n - 1],
        "building price surface"
    );

    let (strikes, volatilities) = meshgrid(&strike_axis, &volatility_axis);
    let shape = strikes.raw_dim();
    let spot = Array2::from_elem(shape, base.spot);
    let time_to_expiry = Array2::from_elem(shape, base.time_to_expiry);
    let risk_free_rate = Array2::from_elem(shape, base.risk_free_rate);

    let inputs = MarketArrays::new(
        spot.view(),
        strikes.view(),
        time_to_expiry.view(),
        risk_free_rate.view(),
        volatilities.view(),
    )?;

    let call_surface = price_array(OptionType::Call, &inputs)?;
    let put_surface = price_array(OptionType::Put, &inputs)?;

    Ok(SensitivityGrid {
        base: *base,
        strike_axis,
        volatility_axis,
        call_surface,
        put_surface,
    })
}
