//! Soft bounds on lever magnitudes.
//!
//! Extreme levers are legal inputs. The range only produces warnings that a
//! front-end can surface next to the (possibly nonsensical) results.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::scenario::{CustomScenario, Lever};

fn default_min_pct() -> f64 {
    -100.0
}

fn default_max_pct() -> f64 {
    100.0
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlausibilityRange {
    #[serde(default = "default_min_pct")]
    pub min_pct: f64,
    #[serde(default = "default_max_pct")]
    pub max_pct: f64,
}

impl Default for PlausibilityRange {
    fn default() -> Self {
        Self {
            min_pct: default_min_pct(),
            max_pct: default_max_pct(),
        }
    }
}

/// A lever value outside the plausibility range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlausibilityWarning {
    pub lever: Lever,
    pub value: f64,
    pub range: PlausibilityRange,
}

impl fmt::Display for PlausibilityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} change of {}% is outside the plausible range [{}%, {}%]",
            self.lever, self.value, self.range.min_pct, self.range.max_pct
        )
    }
}

impl PlausibilityRange {
    /// Check one lever value. Region counts (market expansion) are not percentages
    /// and are never flagged. Efficiency gains of 100% or more always warn since
    /// they drive costs to zero or below.
    pub fn check(&self, lever: Lever, value: f64) -> Option<PlausibilityWarning> {
        if !lever.is_percentage() {
            return None;
        }
        let out_of_range = value < self.min_pct
            || value > self.max_pct
            || (lever == Lever::Efficiency && value >= 100.0);

        if out_of_range {
            tracing::warn!(%lever, value, "lever outside plausible range");
            Some(PlausibilityWarning {
                lever,
                value,
                range: *self,
            })
        } else {
            None
        }
    }

    /// Check every non-zero lever of a custom scenario
    pub fn check_scenario(&self, scenario: &CustomScenario) -> Vec<PlausibilityWarning> {
        scenario
            .steps()
            .into_iter()
            .filter_map(|(lever, value)| self.check(lever, value))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range_values_pass() {
        let range = PlausibilityRange::default();
        assert!(range.check(Lever::Price, 25.0).is_none());
        assert!(range.check(Lever::Cost, -100.0).is_none());
        assert!(range.check(Lever::MarketExpansion, 500.0).is_none());
    }

    #[test]
    fn test_extremes_warn() {
        let range = PlausibilityRange::default();
        let warning = range.check(Lever::Cost, -150.0).unwrap();
        assert_eq!(warning.lever, Lever::Cost);
        assert_eq!(warning.value, -150.0);
        assert!(range.check(Lever::Efficiency, 100.0).is_some());
    }

    #[test]
    fn test_check_scenario_collects_all_warnings() {
        let range = PlausibilityRange {
            min_pct: -30.0,
            max_pct: 30.0,
        };
        let scenario = CustomScenario {
            price_change: 40.0,
            cost_change: -50.0,
            volume_change: 10.0,
            efficiency_gain: 0.0,
        };
        let warnings = range.check_scenario(&scenario);
        let levers: Vec<Lever> = warnings.iter().map(|w| w.lever).collect();
        assert_eq!(levers, vec![Lever::Price, Lever::Cost]);
    }
}
