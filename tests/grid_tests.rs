use heatmap_lib::{
    build_sensitivity_grid, call_price, put_price, GridBounds, PricingError, ScenarioParameters,
    NUM_STEPS,
};

fn reference_scenario() -> ScenarioParameters {
    ScenarioParameters {
        strike: 95.0,
        time_to_maturity: 0.50,
        risk_free_rate: 0.05,
        dividend_yield: 0.01,
    }
}

fn reference_bounds() -> GridBounds {
    GridBounds {
        min_spot: 80.0,
        max_spot: 120.0,
        min_volatility: 0.10,
        max_volatility: 0.30,
    }
}

/// Both matrices are exactly 10x10 regardless of bound magnitudes.
#[test]
fn test_grid_shape() {
    let bounds_cases = [
        reference_bounds(),
        GridBounds {
            min_spot: 0.5,
            max_spot: 1.5,
            min_volatility: 0.01,
            max_volatility: 0.02,
        },
        GridBounds {
            min_spot: 1_000.0,
            max_spot: 90_000.0,
            min_volatility: 0.10,
            max_volatility: 2.50,
        },
    ];

    for bounds in bounds_cases {
        let grid = build_sensitivity_grid(&bounds, &reference_scenario())
            .expect("grid construction failed");

        assert_eq!(grid.x_labels.len(), NUM_STEPS);
        assert_eq!(grid.y_labels.len(), NUM_STEPS);
        assert_eq!(grid.call_values.len(), NUM_STEPS);
        assert_eq!(grid.put_values.len(), NUM_STEPS);
        for row in grid.call_values.iter().chain(grid.put_values.iter()) {
            assert_eq!(row.len(), NUM_STEPS);
        }
    }
}

/// The first label on each axis equals the min bound and the last equals
/// the max bound, rounded to 2 decimals.
#[test]
fn test_grid_endpoint_inclusion() {
    let grid = build_sensitivity_grid(&reference_bounds(), &reference_scenario()).unwrap();

    assert_eq!(grid.x_labels[0], 80.0);
    assert_eq!(grid.x_labels[NUM_STEPS - 1], 120.0);
    assert_eq!(grid.y_labels[0], 0.10);
    assert_eq!(grid.y_labels[NUM_STEPS - 1], 0.30);

    // Bounds that need the label rounding
    let bounds = GridBounds {
        min_spot: 80.123456,
        max_spot: 119.987654,
        min_volatility: 0.1234,
        max_volatility: 0.4321,
    };
    let grid = build_sensitivity_grid(&bounds, &reference_scenario()).unwrap();
    assert_eq!(grid.x_labels[0], 80.12);
    assert_eq!(grid.x_labels[NUM_STEPS - 1], 119.99);
    assert_eq!(grid.y_labels[0], 0.12);
    assert_eq!(grid.y_labels[NUM_STEPS - 1], 0.43);
}

/// Axis labels are strictly increasing.
#[test]
fn test_grid_labels_increasing() {
    let grid = build_sensitivity_grid(&reference_bounds(), &reference_scenario()).unwrap();

    for labels in [&grid.x_labels, &grid.y_labels] {
        for pair in labels.windows(2) {
            assert!(
                pair[0] < pair[1],
                "labels not increasing: {} then {}",
                pair[0],
                pair[1]
            );
        }
    }
}

/// Every cell agrees with a direct single-point evaluation at the sampled
/// (spot, volatility) coordinates.
#[test]
fn test_grid_cells_match_single_point_pricing() {
    let bounds = reference_bounds();
    let scenario = reference_scenario();
    let grid = build_sensitivity_grid(&bounds, &scenario).unwrap();

    let spot_step = (bounds.max_spot - bounds.min_spot) / (NUM_STEPS - 1) as f64;
    let vol_step = (bounds.max_volatility - bounds.min_volatility) / (NUM_STEPS - 1) as f64;

    for (y, x) in [(0, 0), (3, 7), (9, 9), (5, 0)] {
        let spot = bounds.min_spot + spot_step * x as f64;
        let volatility = bounds.min_volatility + vol_step * y as f64;
        let params = scenario.with_spot_and_volatility(spot, volatility);

        assert_eq!(grid.call_values[y][x], call_price(&params).unwrap());
        assert_eq!(grid.put_values[y][x], put_price(&params).unwrap());
    }
}

/// Along each row call prices rise with spot and put prices fall; down each
/// column both rise with volatility.
#[test]
fn test_grid_monotonicity() {
    let grid = build_sensitivity_grid(&reference_bounds(), &reference_scenario()).unwrap();

    for y in 0..NUM_STEPS {
        for x in 1..NUM_STEPS {
            assert!(
                grid.call_values[y][x] >= grid.call_values[y][x - 1] - 1e-9,
                "call not non-decreasing in spot at ({}, {})",
                y,
                x
            );
            assert!(
                grid.put_values[y][x] <= grid.put_values[y][x - 1] + 1e-9,
                "put not non-increasing in spot at ({}, {})",
                y,
                x
            );
        }
    }

    for x in 0..NUM_STEPS {
        for y in 1..NUM_STEPS {
            assert!(
                grid.call_values[y][x] >= grid.call_values[y - 1][x] - 1e-9,
                "call not non-decreasing in volatility at ({}, {})",
                y,
                x
            );
        }
    }
}

/// All cells are finite, non-negative, and rounded to cents.
#[test]
fn test_grid_values_well_formed() {
    let grid = build_sensitivity_grid(&reference_bounds(), &reference_scenario()).unwrap();

    for &value in grid.call_values.iter().chain(grid.put_values.iter()).flatten() {
        assert!(value.is_finite());
        assert!(value >= 0.0);
        let cents = value * 100.0;
        assert!((cents - cents.round()).abs() < 1e-9);
    }
}

/// Identical inputs produce identical grids.
#[test]
fn test_grid_determinism() {
    let first = build_sensitivity_grid(&reference_bounds(), &reference_scenario()).unwrap();
    let second = build_sensitivity_grid(&reference_bounds(), &reference_scenario()).unwrap();
    assert_eq!(first, second);
}

/// Degenerate bounds are rejected before any cell is evaluated.
#[test]
fn test_invalid_bounds() {
    let scenario = reference_scenario();

    let cases = [
        GridBounds {
            min_spot: 100.0,
            max_spot: 100.0,
            min_volatility: 0.1,
            max_volatility: 0.3,
        },
        GridBounds {
            min_spot: 120.0,
            max_spot: 80.0,
            min_volatility: 0.1,
            max_volatility: 0.3,
        },
        GridBounds {
            min_spot: 80.0,
            max_spot: 120.0,
            min_volatility: 0.3,
            max_volatility: 0.1,
        },
        GridBounds {
            min_spot: f64::NAN,
            max_spot: 120.0,
            min_volatility: 0.1,
            max_volatility: 0.3,
        },
    ];

    for bounds in cases {
        let err = build_sensitivity_grid(&bounds, &scenario).expect_err("expected bounds error");
        assert!(
            matches!(err, PricingError::InvalidBounds { .. }),
            "unexpected error kind for {:?}: {}",
            bounds,
            err
        );
    }
}

/// A cell outside the pricing domain aborts the whole sweep with a domain
/// error rather than returning a partial grid.
#[test]
fn test_domain_failure_aborts_sweep() {
    let scenario = reference_scenario();

    // Ordered bounds, but the low end of the spot axis is non-positive
    let bounds = GridBounds {
        min_spot: -10.0,
        max_spot: 120.0,
        min_volatility: 0.1,
        max_volatility: 0.3,
    };
    let err = build_sensitivity_grid(&bounds, &scenario).expect_err("expected domain error");
    assert!(matches!(err, PricingError::Domain { .. }));

    // Fixed parameters outside the domain fail the same way
    let mut bad_scenario = scenario;
    bad_scenario.time_to_maturity = 0.0;
    let err = build_sensitivity_grid(&reference_bounds(), &bad_scenario)
        .expect_err("expected domain error");
    assert!(matches!(err, PricingError::Domain { .. }));
}
