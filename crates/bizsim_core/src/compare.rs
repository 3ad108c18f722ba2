//! Base vs scenario comparison

use crate::model::{Dataset, Recommendation, ScenarioComparison, margin};

/// Percentage change from `base` to `new`, defined as 0 when `base <= 0`.
#[inline]
pub fn pct_change(new: f64, base: f64) -> f64 {
    if base > 0.0 {
        (new - base) / base * 100.0
    } else {
        0.0
    }
}

/// Compare aggregate revenue, profit and margin of `scenario` against `base`.
///
/// Profit is summed from each dataset's profit column, so a base dataset with
/// an independently supplied profit column is compared as given.
pub fn compare_scenarios(base: &Dataset, scenario: &Dataset, name: &str) -> ScenarioComparison {
    let base_revenue = base.total_revenue();
    let base_profit = base.total_profit();
    let base_margin = margin(base_profit, base_revenue);

    let scenario_revenue = scenario.total_revenue();
    let scenario_profit = scenario.total_profit();
    let scenario_margin = margin(scenario_profit, scenario_revenue);

    let revenue_change_pct = pct_change(scenario_revenue, base_revenue);
    let profit_change_pct = pct_change(scenario_profit, base_profit);
    let margin_change_pct = pct_change(scenario_margin, base_margin);

    let recommendation = Recommendation::from_changes(profit_change_pct, margin_change_pct);
    tracing::debug!(
        scenario = name,
        profit_change_pct,
        margin_change_pct,
        recommendation = recommendation.label(),
        "compared scenario"
    );

    ScenarioComparison {
        scenario_name: name.to_string(),
        base_revenue,
        scenario_revenue,
        revenue_change_pct,
        base_profit,
        scenario_profit,
        profit_change_pct,
        base_margin,
        scenario_margin,
        margin_change_pct,
        recommendation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pct_change_guards_denominator() {
        assert_eq!(pct_change(150.0, 100.0), 50.0);
        assert_eq!(pct_change(150.0, 0.0), 0.0);
        assert_eq!(pct_change(150.0, -20.0), 0.0);
    }
}
