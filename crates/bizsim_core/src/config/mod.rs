//! Simulator configuration
//!
//! `SimulatorConfig` bundles the tunable defaults of every operation. All
//! fields have serde defaults so partial configuration files are accepted.

mod plausibility;

pub use plausibility::{PlausibilityRange, PlausibilityWarning};

use serde::{Deserialize, Serialize};

pub use crate::analysis::SweepConfig;

fn default_iterations() -> usize {
    1000
}

fn default_revenue_volatility() -> f64 {
    0.10
}

fn default_cost_volatility() -> f64 {
    0.05
}

/// Monte Carlo run parameters
///
/// Volatilities are standard deviations of the multiplicative factors drawn
/// around 1.0. They are not validated; negative values are passed straight
/// into the sampler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonteCarloConfig {
    #[serde(default = "default_iterations")]
    pub iterations: usize,
    #[serde(default = "default_revenue_volatility")]
    pub revenue_volatility: f64,
    #[serde(default = "default_cost_volatility")]
    pub cost_volatility: f64,
    /// Seed for reproducible runs (None = fresh entropy per run)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            iterations: default_iterations(),
            revenue_volatility: default_revenue_volatility(),
            cost_volatility: default_cost_volatility(),
            seed: None,
        }
    }
}

impl MonteCarloConfig {
    #[must_use]
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    #[must_use]
    pub fn with_volatility(mut self, revenue: f64, cost: f64) -> Self {
        self.revenue_volatility = revenue;
        self.cost_volatility = cost;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Complete simulator configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    pub monte_carlo: MonteCarloConfig,
    pub sensitivity: SweepConfig,
    pub plausibility: PlausibilityRange,
}
