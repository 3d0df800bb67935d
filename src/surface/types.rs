use ndarray::{Array1, Array2};

use crate::error::{DomainError, DomainResult};
use crate::types::{MarketParameters, OptionType};

/// Number of points per axis when the caller does not choose one.
pub const DEFAULT_RESOLUTION: usize = 50;

/// Smallest grid that still has two distinct points per axis.
pub const MIN_RESOLUTION: usize = 2;

/// Strike and volatility bounds for a price surface.
///
/// Volatility bounds are in percent (10.0 = 10%); the generator converts them to
/// fractions when it builds the axis.
///
/// # Example
///
/// ```rust
/// # use bsm_surface::SurfaceRequest;
/// let request = SurfaceRequest {
///     strike_min: 90.0,
///     strike_max: 110.0,
///     ..Default::default()
/// };
/// assert_eq!(request.resolution, 50);
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SurfaceRequest {
    /// Lowest strike on the grid
    pub strike_min: f64,
    /// Highest strike on the grid
    pub strike_max: f64,
    /// Lowest volatility, in percent
    pub vol_min_percent: f64,
    /// Highest volatility, in percent
    pub vol_max_percent: f64,
    /// Points per axis
    pub resolution: usize,
}

impl Default for SurfaceRequest {
    fn default() -> Self {
        Self {
            strike_min: 80.0,
            strike_max: 120.0,
            vol_min_percent: 10.0,
            vol_max_percent: 60.0,
            resolution: DEFAULT_RESOLUTION,
        }
    }
}

impl SurfaceRequest {
    /// Slider defaults: strikes 80-120, volatility 10-60%, 50 points.
    pub fn standard() -> Self {
        Self::default()
    }

    /// Same bounds as [`SurfaceRequest::standard`] on a 20-point grid.
    pub fn coarse() -> Self {
        Self {
            resolution: 20,
            ..Self::default()
        }
    }

    /// Same bounds as [`SurfaceRequest::standard`] on a 200-point grid.
    pub fn fine() -> Self {
        Self {
            resolution: 200,
            ..Self::default()
        }
    }

    /// Widest bounds the input form allows: strikes 50-200, volatility 1-300%.
    pub fn wide() -> Self {
        Self {
            strike_min: 50.0,
            strike_max: 200.0,
            vol_min_percent: 1.0,
            vol_max_percent: 300.0,
            resolution: DEFAULT_RESOLUTION,
        }
    }

    pub fn new(
        strike_range: (f64, f64),
        vol_range_percent: (f64, f64),
        resolution: usize,
    ) -> DomainResult<Self> {
        let request = Self {
            strike_min: strike_range.0,
            strike_max: strike_range.1,
            vol_min_percent: vol_range_percent.0,
            vol_max_percent: vol_range_percent.1,
            resolution,
        };
        request.validate()?;
        Ok(request)
    }

    pub fn strike_range(&self) -> (f64, f64) {
        (self.strike_min, self.strike_max)
    }

    pub fn vol_range_percent(&self) -> (f64, f64) {
        (self.vol_min_percent, self.vol_max_percent)
    }

    pub fn validate(&self) -> DomainResult<()> {
        validate_range("strike", self.strike_range())?;
        validate_range("volatility_percent", self.vol_range_percent())?;
        if self.resolution < MIN_RESOLUTION {
            return Err(DomainError::ResolutionTooSmall {
                resolution: self.resolution,
                minimum: MIN_RESOLUTION,
            });
        }
        Ok(())
    }
}

fn validate_range(name: &'static str, (min, max): (f64, f64)) -> DomainResult<()> {
    let ordered = min.is_finite() && max.is_finite() && min > 0.0 && min < max;
    if ordered {
        Ok(())
    } else {
        Err(DomainError::invalid_range(name, min, max))
    }
}

/// Call and put prices over a (volatility × strike) grid.
///
/// Rows follow `volatility_axis`, columns follow `strike_axis`, so
/// `call_surface[[i, j]]` is the call price at `volatility_axis[i]` and
/// `strike_axis[j]`. Spot, time and rate come from `base`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensitivityGrid {
    /// Parameters held fixed for every cell (its strike and volatility are ignored)
    pub base: MarketParameters,
    /// Strictly increasing strikes (columns)
    pub strike_axis: Array1<f64>,
    /// Strictly increasing volatilities as fractions (rows)
    pub volatility_axis: Array1<f64>,
    pub call_surface: Array2<f64>,
    pub put_surface: Array2<f64>,
}

impl SensitivityGrid {
    /// (rows, columns) = (volatility points, strike points)
    pub fn shape(&self) -> (usize, usize) {
        self.call_surface.dim()
    }

    pub fn surface(&self, option_type: OptionType) -> &Array2<f64> {
        match option_type {
            OptionType::Call => &self.call_surface,
            OptionType::Put => &self.put_surface,
        }
    }

    /// Price at volatility row `i`, strike column `j`.
    pub fn cell(&self, option_type: OptionType, i: usize, j: usize) -> Option<f64> {
        self.surface(option_type).get((i, j)).copied()
    }

    /// Full parameter set that produced cell `(i, j)`.
    pub fn params_at(&self, i: usize, j: usize) -> Option<MarketParameters> {
        let volatility = *self.volatility_axis.get(i)?;
        let strike = *self.strike_axis.get(j)?;
        Some(self.base.with_strike(strike).with_volatility(volatility))
    }

    /// Volatility axis in percent, as plotted.
    pub fn volatility_axis_percent(&self) -> Array1<f64> {
        self.volatility_axis.mapv(|v| v * 100.0)
    }

    /// (min, max) over one surface, for colour scaling.
    pub fn value_range(&self, option_type: OptionType) -> (f64, f64) {
        self.surface(option_type)
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }
}
