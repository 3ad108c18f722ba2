//! Plain-text scenario analysis report

use std::fmt::Write;

use crate::model::ScenarioComparison;

const RULE_WIDTH: usize = 64;

fn group_thousands(whole: u64) -> String {
    let digits = whole.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format a currency value rounded to whole dollars, e.g. `-$1,234`
pub fn format_currency(value: f64) -> String {
    let dollars = group_thousands(value.abs().round() as u64);
    if value < 0.0 && value.round() != 0.0 {
        format!("-${dollars}")
    } else {
        format!("${dollars}")
    }
}

/// Format a ratio as a percentage with one decimal, e.g. `0.125` -> `12.5%`
pub fn format_ratio(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

/// Format an already-scaled percentage change with an explicit sign, e.g. `+4.2%`
pub fn format_change(pct: f64) -> String {
    format!("{pct:+.1}%")
}

fn write_section(out: &mut String, title: &str, base: &str, scenario: &str, change: f64) {
    // Writing to a String cannot fail
    let _ = writeln!(out, "{title}:");
    let _ = writeln!(out, "  Base: {base}");
    let _ = writeln!(out, "  Scenario: {scenario}");
    let _ = writeln!(out, "  Change: {}", format_change(change));
    out.push('\n');
}

/// Render comparisons as a boxed text report, one block per scenario.
pub fn generate_scenario_report(comparisons: &[ScenarioComparison]) -> String {
    let heavy = "═".repeat(RULE_WIDTH);
    let rule = "━".repeat(RULE_WIDTH);

    let mut out = String::new();
    let _ = writeln!(out, "╔{heavy}╗");
    let _ = writeln!(
        out,
        "║{:^width$}║",
        "SCENARIO ANALYSIS REPORT",
        width = RULE_WIDTH
    );
    let _ = writeln!(out, "╚{heavy}╝");
    out.push('\n');

    for comp in comparisons {
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out, "{}", comp.scenario_name);
        let _ = writeln!(out, "{rule}");
        out.push('\n');

        write_section(
            &mut out,
            "Revenue Impact",
            &format_currency(comp.base_revenue),
            &format_currency(comp.scenario_revenue),
            comp.revenue_change_pct,
        );
        write_section(
            &mut out,
            "Profit Impact",
            &format_currency(comp.base_profit),
            &format_currency(comp.scenario_profit),
            comp.profit_change_pct,
        );
        write_section(
            &mut out,
            "Margin",
            &format_ratio(comp.base_margin),
            &format_ratio(comp.scenario_margin),
            comp.margin_change_pct,
        );

        let _ = writeln!(out, "{}", comp.recommendation);
        out.push('\n');
    }

    out
}
