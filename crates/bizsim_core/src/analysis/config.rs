//! Configuration types for sensitivity sweeps.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::model::Dataset;
use crate::scenario::{
    simulate_cost_change, simulate_efficiency_improvement, simulate_price_change,
    simulate_volume_change,
};

/// Lever that can be swept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensitivityParameter {
    Price,
    Cost,
    Volume,
    /// Swept by absolute value; efficiency gains are never negative
    Efficiency,
}

impl SensitivityParameter {
    pub const ALL: [SensitivityParameter; 4] = [
        SensitivityParameter::Price,
        SensitivityParameter::Cost,
        SensitivityParameter::Volume,
        SensitivityParameter::Efficiency,
    ];

    /// Look up a parameter by its exact name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "price" => Some(Self::Price),
            "cost" => Some(Self::Cost),
            "volume" => Some(Self::Volume),
            "efficiency" => Some(Self::Efficiency),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::Cost => "cost",
            Self::Volume => "volume",
            Self::Efficiency => "efficiency",
        }
    }

    /// Apply the matching transformer at `value` percent
    pub fn apply(&self, dataset: &Dataset, value: f64) -> Dataset {
        match self {
            Self::Price => simulate_price_change(dataset, value),
            Self::Cost => simulate_cost_change(dataset, value),
            Self::Volume => simulate_volume_change(dataset, value),
            Self::Efficiency => simulate_efficiency_improvement(dataset, value.abs()),
        }
    }
}

impl fmt::Display for SensitivityParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SensitivityParameter {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| SimulationError::UnknownScenario(s.to_string()))
    }
}

fn default_min_pct() -> f64 {
    -20.0
}

fn default_max_pct() -> f64 {
    20.0
}

fn default_steps() -> usize {
    9
}

/// Range and resolution of a sweep, in percent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    #[serde(default = "default_min_pct")]
    pub min_pct: f64,
    #[serde(default = "default_max_pct")]
    pub max_pct: f64,
    /// Number of points, endpoints included
    #[serde(default = "default_steps")]
    pub steps: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            min_pct: default_min_pct(),
            max_pct: default_max_pct(),
            steps: default_steps(),
        }
    }
}

impl SweepConfig {
    pub fn new(min_pct: f64, max_pct: f64, steps: usize) -> Self {
        Self {
            min_pct,
            max_pct,
            steps,
        }
    }

    /// Evenly spaced values across the inclusive range.
    ///
    /// Zero steps give no values and one step gives just the lower bound.
    pub fn sweep_values(&self) -> Vec<f64> {
        match self.steps {
            0 => Vec::new(),
            1 => vec![self.min_pct],
            n => {
                let step_size = (self.max_pct - self.min_pct) / (n - 1) as f64;
                (0..n)
                    .map(|i| {
                        if i == n - 1 {
                            self.max_pct
                        } else {
                            self.min_pct + step_size * i as f64
                        }
                    })
                    .collect()
            }
        }
    }
}
