//! Input parameter types for pricing and heatmap construction.
//!
//! All of these are plain value types: the UI layer constructs a fresh
//! snapshot on every parameter change and passes it by value into the pure
//! entry points. Nothing here carries identity or is mutated after
//! construction.

use crate::error::{PricingError, Result};

/// European option side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    Call,
    Put,
}

/// A fully specified European option pricing scenario.
///
/// Invariant: `spot`, `strike`, `volatility` and `time_to_maturity` must be
/// strictly positive for the closed-form formulas to be defined; the rate
/// and dividend yield may be any finite real.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionParameters {
    /// Current market price of the underlying asset
    pub spot: f64,
    /// Fixed price at which the option can be exercised
    pub strike: f64,
    /// Annualized volatility of log returns (decimal, e.g. 0.20)
    pub volatility: f64,
    /// Time remaining until expiration, in years
    pub time_to_maturity: f64,
    /// Continuously-compounded risk-free rate
    pub risk_free_rate: f64,
    /// Continuous dividend yield of the underlying
    pub dividend_yield: f64,
}

fn validate_positive(name: &str, value: f64) -> Result<()> {
    if value <= 0.0 || !value.is_finite() {
        return Err(PricingError::Domain {
            message: format!("{} ({}) must be > 0 and finite", name, value),
        });
    }
    Ok(())
}

fn validate_finite(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(PricingError::Domain {
            message: format!("{} ({}) must be finite", name, value),
        });
    }
    Ok(())
}

impl OptionParameters {
    /// Creates a parameter set, rejecting values outside the pricing domain.
    pub fn new(
        spot: f64,
        strike: f64,
        volatility: f64,
        time_to_maturity: f64,
        risk_free_rate: f64,
        dividend_yield: f64,
    ) -> Result<Self> {
        let params = Self {
            spot,
            strike,
            volatility,
            time_to_maturity,
            risk_free_rate,
            dividend_yield,
        };
        params.validate()?;
        Ok(params)
    }

    /// Validates the current parameter set against the pricing domain.
    pub fn validate(&self) -> Result<()> {
        validate_positive("spot", self.spot)?;
        validate_positive("strike", self.strike)?;
        validate_positive("volatility", self.volatility)?;
        validate_positive("time to maturity", self.time_to_maturity)?;
        validate_finite("risk-free rate", self.risk_free_rate)?;
        validate_finite("dividend yield", self.dividend_yield)?;
        Ok(())
    }
}

/// The parameters held fixed while a heatmap sweeps spot and volatility:
/// strike, time to maturity, risk-free rate and dividend yield.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioParameters {
    pub strike: f64,
    pub time_to_maturity: f64,
    pub risk_free_rate: f64,
    pub dividend_yield: f64,
}

impl ScenarioParameters {
    /// Completes the scenario with a sampled spot and volatility, yielding a
    /// full parameter set for one grid cell.
    pub fn with_spot_and_volatility(&self, spot: f64, volatility: f64) -> OptionParameters {
        OptionParameters {
            spot,
            strike: self.strike,
            volatility,
            time_to_maturity: self.time_to_maturity,
            risk_free_rate: self.risk_free_rate,
            dividend_yield: self.dividend_yield,
        }
    }
}

impl From<OptionParameters> for ScenarioParameters {
    fn from(p: OptionParameters) -> Self {
        Self {
            strike: p.strike,
            time_to_maturity: p.time_to_maturity,
            risk_free_rate: p.risk_free_rate,
            dividend_yield: p.dividend_yield,
        }
    }
}

/// Axis bounds for a sensitivity heatmap: spot on the x axis, volatility on
/// the y axis. `min < max` is expected on both axes and checked by
/// [`validate`](GridBounds::validate) before any sweep work happens.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridBounds {
    pub min_spot: f64,
    pub max_spot: f64,
    pub min_volatility: f64,
    pub max_volatility: f64,
}

impl GridBounds {
    /// Rejects degenerate axes. A zero- or negative-width axis would make
    /// the whole grid meaningless, so bounds problems fail the request up
    /// front rather than surfacing per cell.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("min spot", self.min_spot),
            ("max spot", self.max_spot),
            ("min volatility", self.min_volatility),
            ("max volatility", self.max_volatility),
        ] {
            if !value.is_finite() {
                return Err(PricingError::InvalidBounds {
                    message: format!("{} ({}) must be finite", name, value),
                });
            }
        }
        if self.min_spot >= self.max_spot {
            return Err(PricingError::InvalidBounds {
                message: format!(
                    "spot axis is degenerate: min ({}) >= max ({})",
                    self.min_spot, self.max_spot
                ),
            });
        }
        if self.min_volatility >= self.max_volatility {
            return Err(PricingError::InvalidBounds {
                message: format!(
                    "volatility axis is degenerate: min ({}) >= max ({})",
                    self.min_volatility, self.max_volatility
                ),
            });
        }
        Ok(())
    }
}
