//! TOML-backed valuation requests.
//!
//! A request file mirrors the two input panels of a pricing front end: the five
//! market parameters and the surface bounds. Any missing field falls back to the
//! defaults of [`MarketParameters`] and [`SurfaceRequest`].
//!
//! ```toml
//! [market]
//! spot = 105.0
//! volatility = 0.25
//!
//! [surface]
//! strike_min = 90.0
//! strike_max = 130.0
//! resolution = 40
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::DomainResult;
use crate::surface::{build_surface_from_request, SensitivityGrid, SurfaceRequest};
use crate::types::{MarketParameters, Valuation};

/// Market inputs plus surface bounds for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValuationRequest {
    pub market: MarketParameters,
    pub surface: SurfaceRequest,
}

impl ValuationRequest {
    /// Parses and validates a request from TOML text.
    ///
    /// Domain violations come back as a [`crate::DomainError`] inside the
    /// `anyhow::Error`, so callers can `downcast_ref` to tell bad input from bad syntax.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let request: Self = toml::from_str(text).context("failed to parse valuation request")?;
        request.validate()?;
        debug!(?request, "loaded valuation request");
        Ok(request)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("invalid request in {}", path.display()))
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).context("failed to serialize valuation request")
    }

    pub fn validate(&self) -> DomainResult<()> {
        self.market.validate()?;
        self.surface.validate()
    }

    /// Prices and Greeks for the market section.
    pub fn valuate(&self) -> DomainResult<Valuation> {
        crate::valuate(&self.market)
    }

    /// Price surface for the market section over the surface bounds.
    pub fn build_surface(&self) -> DomainResult<SensitivityGrid> {
        build_surface_from_request(&self.market, &self.surface)
    }
}
