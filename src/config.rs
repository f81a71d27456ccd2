//! Scenario configuration.
//!
//! The inputs the presentation layer collects from the user, with sensible
//! dashboard defaults, deserializable from TOML so demos and harnesses can
//! describe a scenario in a file instead of code.

use serde::{Deserialize, Serialize};

use crate::params::{GridBounds, OptionParameters, ScenarioParameters};

/// Optional heatmap axis overrides. Unset fields fall back to ranges
/// derived from the headline scenario (spot ±20%, volatility ×0.5..×1.5).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatmapConfig {
    pub min_spot: Option<f64>,
    pub max_spot: Option<f64>,
    pub min_volatility: Option<f64>,
    pub max_volatility: Option<f64>,
}

/// A full pricing scenario: the six headline inputs plus heatmap bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub spot: f64,
    pub strike: f64,
    pub volatility: f64,
    pub time_to_maturity: f64,
    pub risk_free_rate: f64,
    pub dividend_yield: f64,
    pub heatmap: HeatmapConfig,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            spot: 100.0,
            strike: 95.0,
            volatility: 0.20,
            time_to_maturity: 0.50,
            risk_free_rate: 0.05,
            dividend_yield: 0.01,
            heatmap: HeatmapConfig::default(),
        }
    }
}

impl ScenarioConfig {
    /// Parses a scenario from TOML text. Every field is optional; missing
    /// fields take the defaults above.
    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// The headline single-point pricing parameters.
    pub fn params(&self) -> OptionParameters {
        OptionParameters {
            spot: self.spot,
            strike: self.strike,
            volatility: self.volatility,
            time_to_maturity: self.time_to_maturity,
            risk_free_rate: self.risk_free_rate,
            dividend_yield: self.dividend_yield,
        }
    }

    /// The parameters held fixed during the heatmap sweep.
    pub fn scenario_params(&self) -> ScenarioParameters {
        ScenarioParameters::from(self.params())
    }

    /// Heatmap axis bounds, with unset overrides derived from the headline
    /// spot and volatility.
    pub fn grid_bounds(&self) -> GridBounds {
        GridBounds {
            min_spot: self.heatmap.min_spot.unwrap_or(self.spot * 0.8),
            max_spot: self.heatmap.max_spot.unwrap_or(self.spot * 1.2),
            min_volatility: self.heatmap.min_volatility.unwrap_or(self.volatility * 0.5),
            max_volatility: self.heatmap.max_volatility.unwrap_or(self.volatility * 1.5),
        }
    }
}
