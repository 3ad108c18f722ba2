//! Tests for sensitivity sweeps

use crate::analysis::{SensitivityParameter, SweepConfig, sensitivity_analysis, sweep};

use super::fixtures::{TOLERANCE, assert_close, sample_dataset, single_row, zero_revenue_dataset};

#[test]
fn test_price_sweep_shape() {
    let dataset = single_row();
    let points = sensitivity_analysis(&dataset, "price", (-20.0, 20.0), 9);

    assert_eq!(points.len(), 9);
    let values: Vec<f64> = points.iter().map(|p| p.parameter_value).collect();
    assert_eq!(
        values,
        vec![-20.0, -15.0, -10.0, -5.0, 0.0, 5.0, 10.0, 15.0, 20.0]
    );

    // Price changes leave costs alone, so profit tracks revenue
    assert_close(points[0].profit, 200.0, TOLERANCE);
    assert_close(points[4].profit, 400.0, TOLERANCE);
    assert_close(points[8].profit, 600.0, TOLERANCE);
    assert_close(points[8].revenue, 1200.0, TOLERANCE);
    assert_close(points[8].margin, 0.5, TOLERANCE);
    assert!(points.windows(2).all(|w| w[0].profit < w[1].profit));
}

#[test]
fn test_zero_point_matches_base() {
    let dataset = sample_dataset();
    let base_profit = dataset.total_profit();

    for parameter in SensitivityParameter::ALL {
        let points = sweep(&dataset, parameter, &SweepConfig::default());
        let zero = points
            .iter()
            .find(|p| p.parameter_value == 0.0)
            .expect("default sweep includes zero");
        assert_close(zero.profit, base_profit, 1e-6);
    }
}

#[test]
fn test_cost_sweep_is_decreasing() {
    let points = sensitivity_analysis(&sample_dataset(), "cost", (-10.0, 10.0), 5);
    assert_eq!(points.len(), 5);
    assert!(points.windows(2).all(|w| w[0].profit > w[1].profit));
    // Revenue does not move with costs
    for point in &points {
        assert_close(point.revenue, points[0].revenue, 1e-6);
    }
}

#[test]
fn test_efficiency_sweep_uses_absolute_value() {
    let points = sensitivity_analysis(&single_row(), "efficiency", (-10.0, 10.0), 3);

    assert_eq!(points.len(), 3);
    assert_eq!(points[0].parameter_value, -10.0);
    assert_close(points[0].profit, points[2].profit, TOLERANCE);
    assert_close(points[0].profit, 1000.0 - 540.0, TOLERANCE);
    assert_close(points[1].profit, 400.0, TOLERANCE);
}

#[test]
fn test_unknown_parameter_yields_nothing() {
    let dataset = sample_dataset();
    assert!(sensitivity_analysis(&dataset, "expansion", (-20.0, 20.0), 9).is_empty());
    assert!(sensitivity_analysis(&dataset, "Price", (-20.0, 20.0), 9).is_empty());
    assert!(sensitivity_analysis(&dataset, "", (-20.0, 20.0), 9).is_empty());
}

#[test]
fn test_zero_revenue_margin_is_zero() {
    let points = sensitivity_analysis(&zero_revenue_dataset(), "volume", (-20.0, 20.0), 5);
    assert_eq!(points.len(), 5);
    for point in &points {
        assert_eq!(point.revenue, 0.0);
        assert_eq!(point.margin, 0.0);
        assert!(point.profit < 0.0);
    }
}

#[test]
fn test_degenerate_step_counts() {
    let dataset = single_row();
    assert!(sensitivity_analysis(&dataset, "price", (-20.0, 20.0), 0).is_empty());

    let single = sensitivity_analysis(&dataset, "price", (-20.0, 20.0), 1);
    assert_eq!(single.len(), 1);
    assert_eq!(single[0].parameter_value, -20.0);
    assert_close(single[0].profit, 200.0, TOLERANCE);
}
