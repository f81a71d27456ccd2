//! Sensitivity-grid construction.
//!
//! Sweeps spot price (columns) and volatility (rows) over a regular 10×10
//! grid, holding strike, time to maturity, rate and dividend yield fixed,
//! and prices a call and a put at every cell. The whole sweep is 100
//! evaluations of each pricing function, so no caching is needed.

use crate::error::Result;
use crate::models::bs;
use crate::params::{GridBounds, ScenarioParameters};

/// Number of samples along each axis of the heatmap.
pub const NUM_STEPS: usize = 10;

/// Call and put prices swept over spot price and volatility.
///
/// Row index = volatility sample, column index = spot-price sample. The
/// stepping is endpoint-inclusive: the first label on each axis equals the
/// min bound and the last equals the max bound. Labels and cell values are
/// rounded to 2 decimals. Produced fresh on every parameter change and
/// never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensitivityGrid {
    /// Spot-price axis labels (columns)
    pub x_labels: Vec<f64>,
    /// Volatility axis labels (rows)
    pub y_labels: Vec<f64>,
    /// Call prices, indexed `[volatility][spot]`
    pub call_values: Vec<Vec<f64>>,
    /// Put prices, indexed `[volatility][spot]`
    pub put_values: Vec<Vec<f64>>,
}

/// Builds the 10×10 call and put sensitivity grids for a scenario.
///
/// Fails with [`PricingError::InvalidBounds`](crate::PricingError) if the
/// bounds are degenerate, and with
/// [`PricingError::Domain`](crate::PricingError) propagated from the first
/// failing cell (a partially filled heatmap would be misleading, so the
/// whole sweep aborts).
pub fn build_sensitivity_grid(
    bounds: &GridBounds,
    scenario: &ScenarioParameters,
) -> Result<SensitivityGrid> {
    bounds.validate()?;

    // Dividing by NUM_STEPS - 1 makes the samples span [min, max]
    // inclusive at both ends.
    let spot_step = (bounds.max_spot - bounds.min_spot) / (NUM_STEPS - 1) as f64;
    let vol_step = (bounds.max_volatility - bounds.min_volatility) / (NUM_STEPS - 1) as f64;

    let mut call_values = Vec::with_capacity(NUM_STEPS);
    let mut put_values = Vec::with_capacity(NUM_STEPS);

    for y in 0..NUM_STEPS {
        let volatility = bounds.min_volatility + vol_step * y as f64;
        let mut call_row = Vec::with_capacity(NUM_STEPS);
        let mut put_row = Vec::with_capacity(NUM_STEPS);

        for x in 0..NUM_STEPS {
            let spot = bounds.min_spot + spot_step * x as f64;
            let params = scenario.with_spot_and_volatility(spot, volatility);
            call_row.push(bs::call_price(&params)?);
            put_row.push(bs::put_price(&params)?);
        }

        call_values.push(call_row);
        put_values.push(put_row);
    }

    let x_labels = (0..NUM_STEPS)
        .map(|x| bs::round_price(bounds.min_spot + spot_step * x as f64))
        .collect();
    let y_labels = (0..NUM_STEPS)
        .map(|y| bs::round_price(bounds.min_volatility + vol_step * y as f64))
        .collect();

    Ok(SensitivityGrid {
        x_labels,
        y_labels,
        call_values,
        put_values,
    })
}
