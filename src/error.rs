//! Error types for the heatmap-lib crate.
//!
//! All fallible operations return `Result<T, PricingError>` rather than
//! letting NaN or Infinity from a logarithm, division, or square root of a
//! non-positive argument leak silently into a price or a display grid.

use thiserror::Error;

/// Convenience type alias for results in this crate.
pub type Result<T> = std::result::Result<T, PricingError>;

/// Errors raised by pricing evaluations and grid construction.
///
/// Both kinds are raised at the point of detection and propagate uncaught to
/// the presentation boundary. No error is ever downgraded to a default or
/// sentinel value.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum PricingError {
    /// A pricing input violated the domain of the closed-form formulas:
    /// spot, strike, volatility and time to maturity must all be strictly
    /// positive (and every input finite).
    #[error("domain error: {message}")]
    Domain { message: String },

    /// Heatmap axis bounds are degenerate (min >= max on the spot or
    /// volatility axis, or a non-finite bound).
    #[error("invalid bounds: {message}")]
    InvalidBounds { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_message() {
        let err = PricingError::Domain {
            message: "volatility (0) must be > 0 and finite".into(),
        };
        assert!(format!("{err}").contains("volatility"));

        let err2 = PricingError::InvalidBounds {
            message: "spot axis: min (100) >= max (100)".into(),
        };
        assert!(format!("{err2}").starts_with("invalid bounds"));
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PricingError>();
    }
}
