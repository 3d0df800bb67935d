use std::fmt;
use std::str::FromStr;

use crate::error::{ensure_finite, ensure_positive, DomainError, DomainResult};

/// Option type: European call or put.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    pub const ALL: [OptionType; 2] = [OptionType::Call, OptionType::Put];

    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            _ => Err(DomainError::UnknownOptionType(s.to_string())),
        }
    }
}

/// The five Black-Scholes-Merton inputs for a single contract.
///
/// Struct literals are allowed, but every kernel calls [`MarketParameters::validate`]
/// before touching the numbers, so an invalid value never leaks out as NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct MarketParameters {
    /// Current price of the underlying
    pub spot: f64,
    /// Exercise price
    pub strike: f64,
    /// Remaining contract life in years
    pub time_to_expiry: f64,
    /// Continuously compounded annual rate (may be zero or negative)
    pub risk_free_rate: f64,
    /// Annualized volatility as a decimal (0.2 = 20%)
    pub volatility: f64,
}

impl Default for MarketParameters {
    fn default() -> Self {
        Self {
            spot: 100.0,
            strike: 100.0,
            time_to_expiry: 1.0,
            risk_free_rate: 0.05,
            volatility: 0.2,
        }
    }
}

impl MarketParameters {
    /// Creates validated market parameters.
    pub fn new(
        spot: f64,
        strike: f64,
        time_to_expiry: f64,
        risk_free_rate: f64,
        volatility: f64,
    ) -> DomainResult<Self> {
        let params = Self {
            spot,
            strike,
            time_to_expiry,
            risk_free_rate,
            volatility,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> DomainResult<()> {
        ensure_positive("spot", self.spot)?;
        ensure_positive("strike", self.strike)?;
        ensure_positive("time_to_expiry", self.time_to_expiry)?;
        ensure_finite("risk_free_rate", self.risk_free_rate)?;
        ensure_positive("volatility", self.volatility)?;
        // Tiny T with tiny σ can underflow the d1 denominator to zero
        ensure_positive("volatility_sqrt_time", self.vol_sqrt_time())?;
        Ok(())
    }

    pub fn with_strike(self, strike: f64) -> Self {
        Self { strike, ..self }
    }

    pub fn with_volatility(self, volatility: f64) -> Self {
        Self { volatility, ..self }
    }

    pub fn with_spot(self, spot: f64) -> Self {
        Self { spot, ..self }
    }

    /// Discount factor e^(-rT).
    pub fn discount_factor(&self) -> f64 {
        (-self.risk_free_rate * self.time_to_expiry).exp()
    }

    /// Total volatility over the contract life, σ√T.
    pub fn vol_sqrt_time(&self) -> f64 {
        self.volatility * self.time_to_expiry.sqrt()
    }
}

/// Standardized intermediate variables of the closed-form solution.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntermediateTerms {
    pub d1: f64,
    pub d2: f64,
    /// Φ(d1)
    pub cdf_d1: f64,
    /// Φ(d2)
    pub cdf_d2: f64,
}

/// Call and put prices for the same contract parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionPrices {
    pub call: f64,
    pub put: f64,
}

impl OptionPrices {
    pub fn get(&self, option_type: OptionType) -> f64 {
        match option_type {
            OptionType::Call => self.call,
            OptionType::Put => self.put,
        }
    }

    /// Deviation from put-call parity: (C - P) - (S - K e^(-rT)).
    pub fn parity_gap(&self, params: &MarketParameters) -> f64 {
        (self.call - self.put) - (params.spot - params.strike * params.discount_factor())
    }

    pub(crate) fn ensure_finite(&self) -> DomainResult<()> {
        ensure_finite("call price", self.call)?;
        ensure_finite("put price", self.put)
    }
}

/// The eight first/second-order sensitivities reported for a contract.
///
/// Vega and rho are per one percentage point, theta is per calendar day.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreeksSet {
    pub delta_call: f64,
    pub delta_put: f64,
    pub gamma: f64,
    pub vega: f64,
    pub theta_call: f64,
    pub theta_put: f64,
    pub rho_call: f64,
    pub rho_put: f64,
}

impl GreeksSet {
    /// Labelled values in display order.
    pub fn entries(&self) -> [(&'static str, f64); 8] {
        [
            ("Delta (Call)", self.delta_call),
            ("Delta (Put)", self.delta_put),
            ("Gamma", self.gamma),
            ("Vega", self.vega),
            ("Theta (Call)", self.theta_call),
            ("Theta (Put)", self.theta_put),
            ("Rho (Call)", self.rho_call),
            ("Rho (Put)", self.rho_put),
        ]
    }

    pub(crate) fn ensure_finite(&self) -> DomainResult<()> {
        for (name, value) in self.entries() {
            ensure_finite(name, value)?;
        }
        Ok(())
    }

    pub fn delta(&self, option_type: OptionType) -> f64 {
        match option_type {
            OptionType::Call => self.delta_call,
            OptionType::Put => self.delta_put,
        }
    }

    pub fn theta(&self, option_type: OptionType) -> f64 {
        match option_type {
            OptionType::Call => self.theta_call,
            OptionType::Put => self.theta_put,
        }
    }

    pub fn rho(&self, option_type: OptionType) -> f64 {
        match option_type {
            OptionType::Call => self.rho_call,
            OptionType::Put => self.rho_put,
        }
    }
}

/// Everything a single "calculate" request produces.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Valuation {
    pub params: MarketParameters,
    pub prices: OptionPrices,
    pub terms: IntermediateTerms,
    pub greeks: GreeksSet,
}
