//! Canned quick scenarios

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::compare::compare_scenarios;
use crate::error::SimulationError;
use crate::model::{Dataset, ScenarioComparison};

use super::transform::Lever;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScenarioPreset {
    PriceIncrease,
    CostReduction,
    VolumeIncrease,
    Expansion,
}

impl ScenarioPreset {
    pub const ALL: [ScenarioPreset; 4] = [
        ScenarioPreset::PriceIncrease,
        ScenarioPreset::CostReduction,
        ScenarioPreset::VolumeIncrease,
        ScenarioPreset::Expansion,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ScenarioPreset::PriceIncrease => "price-increase",
            ScenarioPreset::CostReduction => "cost-reduction",
            ScenarioPreset::VolumeIncrease => "volume-increase",
            ScenarioPreset::Expansion => "expansion",
        }
    }

    /// Display name used in comparisons and reports
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioPreset::PriceIncrease => "10% Price Increase",
            ScenarioPreset::CostReduction => "5% Cost Reduction",
            ScenarioPreset::VolumeIncrease => "15% Volume Increase",
            ScenarioPreset::Expansion => "Expand to 2 New Regions",
        }
    }

    /// The lever and magnitude this preset pulls
    pub fn lever(&self) -> (Lever, f64) {
        match self {
            ScenarioPreset::PriceIncrease => (Lever::Price, 10.0),
            ScenarioPreset::CostReduction => (Lever::Cost, -5.0),
            ScenarioPreset::VolumeIncrease => (Lever::Volume, 15.0),
            ScenarioPreset::Expansion => (Lever::MarketExpansion, 2.0),
        }
    }

    pub fn apply(&self, dataset: &Dataset) -> Dataset {
        let (lever, value) = self.lever();
        lever.apply(dataset, value)
    }

    /// Apply the preset and compare it against the untouched dataset
    pub fn compare(&self, dataset: &Dataset) -> ScenarioComparison {
        compare_scenarios(dataset, &self.apply(dataset), self.name())
    }
}

impl fmt::Display for ScenarioPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScenarioPreset {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ScenarioPreset::ALL
            .into_iter()
            .find(|p| {
                p.key().eq_ignore_ascii_case(needle) || p.name().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| SimulationError::UnknownScenario(s.to_string()))
    }
}

/// Run each preset against `dataset`, in the order given.
pub fn run_quick_scenarios(
    dataset: &Dataset,
    presets: &[ScenarioPreset],
) -> Vec<ScenarioComparison> {
    presets
        .iter()
        .map(|preset| preset.compare(dataset))
        .collect()
}
