//! Result records handed to the presentation layer
//!
//! All of these are created once per operation and never mutated afterwards.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Qualitative verdict attached to a scenario comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recommendation {
    HighlyRecommended,
    Recommended,
    Consider,
    Caution,
    NotRecommended,
}

impl Recommendation {
    /// Ordered cascade over percentage changes; the first matching tier wins.
    pub fn from_changes(profit_change_pct: f64, margin_change_pct: f64) -> Self {
        if profit_change_pct > 10.0 && margin_change_pct > 5.0 {
            Self::HighlyRecommended
        } else if profit_change_pct > 5.0 {
            Self::Recommended
        } else if profit_change_pct > 0.0 {
            Self::Consider
        } else if profit_change_pct > -5.0 {
            Self::Caution
        } else {
            Self::NotRecommended
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::HighlyRecommended => "Highly Recommended",
            Self::Recommended => "Recommended",
            Self::Consider => "Consider",
            Self::Caution => "Caution",
            Self::NotRecommended => "Not Recommended",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::HighlyRecommended => "Significant profit and margin improvement",
            Self::Recommended => "Positive profit impact",
            Self::Consider => "Modest improvement",
            Self::Caution => "Minimal negative impact",
            Self::NotRecommended => "Significant negative impact",
        }
    }

    /// Whether the scenario improves profit at all
    pub fn is_positive(&self) -> bool {
        matches!(
            self,
            Self::HighlyRecommended | Self::Recommended | Self::Consider
        )
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.label(), self.description())
    }
}

/// Base vs scenario aggregates for one what-if run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioComparison {
    pub scenario_name: String,
    pub base_revenue: f64,
    pub scenario_revenue: f64,
    pub revenue_change_pct: f64,
    pub base_profit: f64,
    pub scenario_profit: f64,
    pub profit_change_pct: f64,
    pub base_margin: f64,
    pub scenario_margin: f64,
    pub margin_change_pct: f64,
    pub recommendation: Recommendation,
}

/// Distribution summary of one Monte Carlo run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonteCarloSummary {
    pub iterations: usize,
    pub mean_revenue: f64,
    /// Sample standard deviation (n - 1)
    pub std_revenue: f64,
    pub mean_profit: f64,
    /// Sample standard deviation (n - 1)
    pub std_profit: f64,
    pub mean_margin: f64,
    pub profit_5th_percentile: f64,
    pub profit_95th_percentile: f64,
    /// Fraction of trials with profit > 0
    pub probability_profitable: f64,
    /// 5th percentile profit minus the actual base profit (revenue - costs)
    pub value_at_risk_5pct: f64,
}

/// One point on a sensitivity curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensitivityPoint {
    pub parameter_value: f64,
    pub profit: f64,
    pub revenue: f64,
    pub margin: f64,
}
