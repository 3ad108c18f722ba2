//! Terminal rendering of simulation results

use std::fmt::Write;

use bizsim_core::analysis::SensitivityParameter;
use bizsim_core::config::PlausibilityWarning;
use bizsim_core::model::{MonteCarloSummary, RegionTotals, SensitivityPoint, Totals};
use bizsim_core::report::{format_change, format_currency, format_ratio};
use serde::Serialize;

/// Pretty-printed JSON for `--json` output
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

/// Dataset overview: overall totals followed by one line per region
pub fn format_summary(totals: &Totals, regions: &[RegionTotals]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Observations: {}", totals.observations);
    let _ = writeln!(out, "Revenue:      {}", format_currency(totals.revenue));
    let _ = writeln!(out, "Costs:        {}", format_currency(totals.costs));
    let _ = writeln!(out, "Profit:       {}", format_currency(totals.profit));
    let _ = writeln!(out, "Margin:       {}", format_ratio(totals.margin()));
    let _ = writeln!(out, "Units sold:   {:.0}", totals.units_sold);

    if !regions.is_empty() {
        out.push('\n');
        let _ = writeln!(
            out,
            "{:<12} {:>14} {:>14} {:>8}",
            "Region", "Revenue", "Profit", "Margin"
        );
        for region in regions {
            let _ = writeln!(
                out,
                "{:<12} {:>14} {:>14} {:>8}",
                region.region,
                format_currency(region.totals.revenue),
                format_currency(region.totals.profit),
                format_ratio(region.totals.margin())
            );
        }
    }
    out
}

pub fn format_monte_carlo(summary: &MonteCarloSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Monte Carlo Risk Analysis ({} iterations)",
        summary.iterations
    );
    let _ = writeln!(
        out,
        "  Revenue:          {} (std {})",
        format_currency(summary.mean_revenue),
        format_currency(summary.std_revenue)
    );
    let _ = writeln!(
        out,
        "  Profit:           {} (std {})",
        format_currency(summary.mean_profit),
        format_currency(summary.std_profit)
    );
    let _ = writeln!(
        out,
        "  Mean margin:      {}",
        format_ratio(summary.mean_margin)
    );
    let _ = writeln!(
        out,
        "  5th percentile:   {}",
        format_currency(summary.profit_5th_percentile)
    );
    let _ = writeln!(
        out,
        "  95th percentile:  {}",
        format_currency(summary.profit_95th_percentile)
    );
    let _ = writeln!(
        out,
        "  P(profitable):    {}",
        format_ratio(summary.probability_profitable)
    );
    let _ = writeln!(
        out,
        "  Value at risk 5%: {}",
        format_currency(summary.value_at_risk_5pct)
    );
    out
}

pub fn format_sensitivity(parameter: SensitivityParameter, points: &[SensitivityPoint]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Sensitivity to {parameter}");
    let _ = writeln!(
        out,
        "{:>8} {:>14} {:>14} {:>8}",
        "Change", "Revenue", "Profit", "Margin"
    );
    for point in points {
        let _ = writeln!(
            out,
            "{:>8} {:>14} {:>14} {:>8}",
            format_change(point.parameter_value),
            format_currency(point.revenue),
            format_currency(point.profit),
            format_ratio(point.margin)
        );
    }
    out
}

pub fn format_warnings(warnings: &[PlausibilityWarning]) -> String {
    warnings.iter().map(|w| format!("Warning: {w}\n")).collect()
}
