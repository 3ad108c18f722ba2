//! Business scenario simulation library
//!
//! This crate models what-if changes to a sales dataset and quantifies risk:
//! - Single-lever transformers (price with demand elasticity, cost, volume,
//!   market expansion, efficiency)
//! - Custom multi-lever scenarios composed in a fixed order
//! - Base vs scenario comparison with a recommendation tier
//! - Monte Carlo simulation of revenue/cost shocks with percentile and VaR metrics
//! - Sensitivity sweeps of a single lever
//!
//! # Example
//!
//! ```ignore
//! use bizsim_core::scenario::simulate_custom_scenario;
//! use bizsim_core::compare::compare_scenarios;
//!
//! let scenario = simulate_custom_scenario(&dataset, 10.0, -5.0, 0.0, 0.0);
//! let comparison = compare_scenarios(&dataset, &scenario, "Custom Scenario");
//! println!("{}", comparison.recommendation);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod compare;
pub mod error;
pub mod report;
pub mod scenario;
pub mod simulation;
pub mod simulator;
pub mod stats;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use analysis::{SensitivityParameter, SweepConfig, sensitivity_analysis, sweep};
pub use compare::compare_scenarios;
pub use config::{MonteCarloConfig, PlausibilityRange, SimulatorConfig};
pub use error::{Result, SimulationError};
pub use model::{
    Dataset, MonteCarloSummary, Observation, Recommendation, ScenarioComparison, SensitivityPoint,
    Totals,
};
pub use report::generate_scenario_report;
pub use scenario::{CustomScenario, Lever, ScenarioPreset, simulate_custom_scenario};
pub use simulation::{monte_carlo_simulate, run_monte_carlo_simulation};
pub use simulator::BusinessSimulator;
