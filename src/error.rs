//! Error types for the pricing kernels.
//!
//! Every failure the kernels can report is caused by invalid input, so a single
//! [`DomainError`] enum covers the whole core. Callers that mix kernel calls with
//! configuration loading usually work in `anyhow::Result` and let `?` convert.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("{name} must be > 0, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("{name} range must satisfy 0 < min < max, got [{min}, {max}]")]
    InvalidRange {
        name: &'static str,
        min: f64,
        max: f64,
    },

    #[error("resolution must be >= {minimum}, got {resolution}")]
    ResolutionTooSmall { resolution: usize, minimum: usize },

    #[error("{name} has shape {found:?}, expected {expected:?}")]
    ShapeMismatch {
        name: &'static str,
        expected: Vec<usize>,
        found: Vec<usize>,
    },

    #[error("invalid parameters at element {index}: {source}")]
    InvalidElement {
        index: usize,
        #[source]
        source: Box<DomainError>,
    },

    #[error("unknown option type: {0:?} (expected \"call\" or \"put\")")]
    UnknownOptionType(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    pub fn non_positive(name: &'static str, value: f64) -> Self {
        Self::NonPositive { name, value }
    }

    pub fn non_finite(name: &'static str, value: f64) -> Self {
        Self::NonFinite { name, value }
    }

    pub fn invalid_range(name: &'static str, min: f64, max: f64) -> Self {
        Self::InvalidRange { name, min, max }
    }

    /// Tags a scalar validation error with the flat index of the array element
    /// that produced it.
    pub fn at_element(self, index: usize) -> Self {
        Self::InvalidElement {
            index,
            source: Box::new(self),
        }
    }
}

/// Rejects NaN/inf before checking the sign, so a NaN never reports as "must be > 0".
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> DomainResult<()> {
    if !value.is_finite() {
        return Err(DomainError::non_finite(name, value));
    }
    if value <= 0.0 {
        return Err(DomainError::non_positive(name, value));
    }
    Ok(())
}

pub(crate) fn ensure_finite(name: &'static str, value: f64) -> DomainResult<()> {
    if !value.is_finite() {
        return Err(DomainError::non_finite(name, value));
    }
    Ok(())
}
