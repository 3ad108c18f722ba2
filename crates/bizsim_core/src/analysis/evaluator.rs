//! Sweep evaluation

use crate::model::{Dataset, SensitivityPoint, margin};

use super::{SensitivityParameter, SweepConfig};

/// Evaluate one sweep point
fn evaluate_point(
    dataset: &Dataset,
    parameter: SensitivityParameter,
    value: f64,
) -> SensitivityPoint {
    let scenario = parameter.apply(dataset, value);
    let profit = scenario.total_profit();
    let revenue = scenario.total_revenue();
    tracing::trace!(%parameter, value, profit, "sweep point");

    SensitivityPoint {
        parameter_value: value,
        profit,
        revenue,
        margin: margin(profit, revenue),
    }
}

/// Sweep a known lever across the configured range.
pub fn sweep(
    dataset: &Dataset,
    parameter: SensitivityParameter,
    config: &SweepConfig,
) -> Vec<SensitivityPoint> {
    let values = config.sweep_values();
    tracing::debug!(%parameter, points = values.len(), "running sensitivity sweep");

    values
        .into_iter()
        .map(|value| evaluate_point(dataset, parameter, value))
        .collect()
}

/// Sweep the lever named `parameter` over `range_pct` in `steps` points.
///
/// Unknown parameter names produce no points instead of an error.
pub fn sensitivity_analysis(
    dataset: &Dataset,
    parameter: &str,
    range_pct: (f64, f64),
    steps: usize,
) -> Vec<SensitivityPoint> {
    let Some(parameter) = SensitivityParameter::from_name(parameter) else {
        tracing::debug!(parameter, "unknown sensitivity parameter, skipping sweep");
        return Vec::new();
    };

    sweep(
        dataset,
        parameter,
        &SweepConfig::new(range_pct.0, range_pct.1, steps),
    )
}
