//! # Heatmap-Lib: Black-Scholes Pricing and Sensitivity Heatmaps
//!
//! `heatmap-lib` computes European option prices (calls and puts) under the
//! Black-Scholes model and builds 10×10 spot/volatility sensitivity grids
//! for heatmap display. It is the computational core behind an interactive
//! pricing dashboard: the surrounding UI layer supplies raw numeric input
//! and receives scalars and matrices back for display.
//!
//! ## Core Features
//!
//! - **Closed-form pricing**: call and put prices from the Black-Scholes
//!   formulas with dividend yield, sharing one `d1`/`d2` helper
//! - **Sensitivity grids**: endpoint-inclusive 10×10 sweeps over spot and
//!   volatility, with rounded axis labels ready for annotation
//! - **Explicit domain validation**: non-positive spot, strike, volatility
//!   or maturity fail with a typed error instead of propagating NaN
//! - **Scenario configuration**: TOML-deserializable scenario files with
//!   the reference defaults (behind the default `serde` feature)
//!
//! ## Quick Start
//!
//! ```rust
//! use heatmap_lib::{
//!     build_sensitivity_grid, price, GridBounds, OptionParameters, OptionType,
//!     ScenarioParameters,
//! };
//!
//! let params = OptionParameters {
//!     spot: 100.0,
//!     strike: 95.0,
//!     volatility: 0.20,
//!     time_to_maturity: 0.5,
//!     risk_free_rate: 0.05,
//!     dividend_yield: 0.01,
//! };
//!
//! // Headline prices for the metric tiles
//! let call = price(OptionType::Call, &params)?;
//! let put = price(OptionType::Put, &params)?;
//! assert!(call > put);
//!
//! // Sensitivity grids for the heatmaps
//! let bounds = GridBounds {
//!     min_spot: 80.0,
//!     max_spot: 120.0,
//!     min_volatility: 0.10,
//!     max_volatility: 0.30,
//! };
//! let grid = build_sensitivity_grid(&bounds, &ScenarioParameters::from(params))?;
//! assert_eq!(grid.call_values.len(), 10);
//! assert_eq!(grid.x_labels[0], 80.0);
//! # Ok::<(), heatmap_lib::PricingError>(())
//! ```

// ================================================================================================
// MODULES
// ================================================================================================

#[cfg(feature = "serde")]
pub mod config;
pub mod error;
pub mod grid;
pub mod models;
pub mod params;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

#[cfg(feature = "serde")]
pub use config::{HeatmapConfig, ScenarioConfig};
pub use error::{PricingError, Result};
pub use grid::{build_sensitivity_grid, SensitivityGrid, NUM_STEPS};
pub use models::bs::{call_delta, call_price, gamma, put_delta, put_price};
pub use params::{GridBounds, OptionParameters, OptionType, ScenarioParameters};

// ================================================================================================
// TOP-LEVEL API
// ================================================================================================

/// Theoretical fair value of a European option, rounded to 2 decimals.
///
/// Dispatches to [`call_price`] or [`put_price`] according to
/// `option_type`.
///
/// # Errors
///
/// [`PricingError::Domain`] if the parameters violate the positivity
/// constraints (spot, strike, volatility, time to maturity must be > 0).
pub fn price(option_type: OptionType, params: &OptionParameters) -> Result<f64> {
    match option_type {
        OptionType::Call => call_price(params),
        OptionType::Put => put_price(params),
    }
}
