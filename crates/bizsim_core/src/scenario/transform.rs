//! Single-lever scenario transformers.
//!
//! Each function takes the dataset by reference and returns a new one with
//! profit recomputed. Lever values are percentages (10.0 means +10%) and are
//! deliberately not range-checked: -150% cost changes or 120% efficiency gains
//! flow through arithmetically.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::model::Dataset;

/// Demand response to price: a 1% price rise loses 0.5% of volume
pub const DEMAND_ELASTICITY: f64 = -0.5;

/// Revenue and volume uplift per newly entered region
pub const EXPANSION_UPLIFT_PER_REGION: f64 = 0.3;

/// New markets carry 10% more cost per unit of revenue
pub const EXPANSION_COST_PREMIUM: f64 = 1.1;

#[inline]
fn pct_factor(pct: f64) -> f64 {
    1.0 + pct / 100.0
}

/// Scale revenue by the price change and units by the elastic demand response.
pub fn simulate_price_change(dataset: &Dataset, price_change_pct: f64) -> Dataset {
    tracing::trace!(price_change_pct, rows = dataset.len(), "simulating price change");
    let revenue_factor = pct_factor(price_change_pct);
    let demand_factor = pct_factor(price_change_pct * DEMAND_ELASTICITY);

    dataset.map_rows(|obs| {
        obs.revenue *= revenue_factor;
        obs.units_sold *= demand_factor;
    })
}

/// Scale costs only.
pub fn simulate_cost_change(dataset: &Dataset, cost_change_pct: f64) -> Dataset {
    tracing::trace!(cost_change_pct, rows = dataset.len(), "simulating cost change");
    let factor = pct_factor(cost_change_pct);
    dataset.map_rows(|obs| obs.costs *= factor)
}

/// Scale units, revenue and costs together (fully variable costs).
pub fn simulate_volume_change(dataset: &Dataset, volume_change_pct: f64) -> Dataset {
    tracing::trace!(volume_change_pct, rows = dataset.len(), "simulating volume change");
    let factor = pct_factor(volume_change_pct);
    dataset.map_rows(|obs| {
        obs.units_sold *= factor;
        obs.revenue *= factor;
        obs.costs *= factor;
    })
}

/// Grow revenue and units by 30% per new region; costs grow 10% faster.
pub fn simulate_market_expansion(dataset: &Dataset, new_regions: u32) -> Dataset {
    tracing::trace!(new_regions, rows = dataset.len(), "simulating market expansion");
    let factor = 1.0 + f64::from(new_regions) * EXPANSION_UPLIFT_PER_REGION;
    let cost_factor = factor * EXPANSION_COST_PREMIUM;

    dataset.map_rows(|obs| {
        obs.revenue *= factor;
        obs.costs *= cost_factor;
        obs.units_sold *= factor;
    })
}

/// Reduce costs by the efficiency gain. Gains of 100% or more leave zero or
/// negative costs.
pub fn simulate_efficiency_improvement(dataset: &Dataset, efficiency_gain_pct: f64) -> Dataset {
    tracing::trace!(efficiency_gain_pct, rows = dataset.len(), "simulating efficiency gain");
    let factor = 1.0 - efficiency_gain_pct / 100.0;
    dataset.map_rows(|obs| obs.costs *= factor)
}

/// A business lever that a scenario can pull
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lever {
    Price,
    Cost,
    Volume,
    Efficiency,
    MarketExpansion,
}

impl Lever {
    pub const ALL: [Lever; 5] = [
        Lever::Price,
        Lever::Cost,
        Lever::Volume,
        Lever::Efficiency,
        Lever::MarketExpansion,
    ];

    /// Key used on the command line and in configuration files
    pub fn key(&self) -> &'static str {
        match self {
            Lever::Price => "price",
            Lever::Cost => "cost",
            Lever::Volume => "volume",
            Lever::Efficiency => "efficiency",
            Lever::MarketExpansion => "expansion",
        }
    }

    /// Whether `value` is a percentage (as opposed to a region count)
    pub fn is_percentage(&self) -> bool {
        !matches!(self, Lever::MarketExpansion)
    }

    /// Apply this lever with the given magnitude.
    ///
    /// Market expansion takes a region count; fractional or negative values
    /// are rounded and floored at zero.
    pub fn apply(&self, dataset: &Dataset, value: f64) -> Dataset {
        match self {
            Lever::Price => simulate_price_change(dataset, value),
            Lever::Cost => simulate_cost_change(dataset, value),
            Lever::Volume => simulate_volume_change(dataset, value),
            Lever::Efficiency => simulate_efficiency_improvement(dataset, value),
            Lever::MarketExpansion => {
                simulate_market_expansion(dataset, value.max(0.0).round() as u32)
            }
        }
    }
}

impl fmt::Display for Lever {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Lever {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Lever::ALL
            .into_iter()
            .find(|lever| lever.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SimulationError::UnknownScenario(s.to_string()))
    }
}
