//! Stateful front door over the scenario engine.
//!
//! `BusinessSimulator` remembers a base dataset and any named scenarios that
//! were built from it, so a presentation layer can run several what-ifs and
//! compare them without threading datasets around itself. Every stored
//! dataset is an owned copy.

use std::collections::BTreeMap;

use crate::analysis::{SensitivityParameter, sweep};
use crate::compare::compare_scenarios;
use crate::config::{PlausibilityWarning, SimulatorConfig};
use crate::error::{Result, SimulationError};
use crate::model::{Dataset, MonteCarloSummary, ScenarioComparison, SensitivityPoint};
use crate::scenario::{CustomScenario, ScenarioPreset};
use crate::simulation::monte_carlo_simulate;

#[derive(Debug, Clone, Default)]
pub struct BusinessSimulator {
    config: SimulatorConfig,
    base: Option<Dataset>,
    scenarios: BTreeMap<String, Dataset>,
}

impl BusinessSimulator {
    pub fn new(config: SimulatorConfig) -> Self {
        Self {
            config,
            base: None,
            scenarios: BTreeMap::new(),
        }
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Store a copy of `dataset` as the base for every comparison.
    pub fn set_base_scenario(&mut self, dataset: &Dataset) {
        tracing::debug!(observations = dataset.len(), "base scenario set");
        self.base = Some(dataset.clone());
    }

    pub fn base_scenario(&self) -> Option<&Dataset> {
        self.base.as_ref()
    }

    fn base(&self) -> Result<&Dataset> {
        self.base.as_ref().ok_or(SimulationError::EmptyDataset)
    }

    /// Store a named scenario, replacing any previous one with the same name.
    pub fn store_scenario(&mut self, name: impl Into<String>, dataset: Dataset) {
        self.scenarios.insert(name.into(), dataset);
    }

    pub fn scenario(&self, name: &str) -> Option<&Dataset> {
        self.scenarios.get(name)
    }

    /// Stored scenario names in sorted order
    pub fn scenario_names(&self) -> impl Iterator<Item = &str> {
        self.scenarios.keys().map(String::as_str)
    }

    /// Compare a stored scenario against the base.
    pub fn compare_to_base(&self, name: &str) -> Result<ScenarioComparison> {
        let base = self.base()?;
        let scenario = self
            .scenarios
            .get(name)
            .ok_or_else(|| SimulationError::ScenarioNotFound(name.to_string()))?;
        Ok(compare_scenarios(base, scenario, name))
    }

    /// Levers in `scenario` that fall outside the configured plausibility range
    pub fn plausibility_warnings(&self, scenario: &CustomScenario) -> Vec<PlausibilityWarning> {
        self.config.plausibility.check_scenario(scenario)
    }

    /// Build a custom scenario from the base, store it under `name` and compare.
    pub fn run_custom(
        &mut self,
        name: &str,
        scenario: &CustomScenario,
    ) -> Result<ScenarioComparison> {
        let result = scenario.apply(self.base()?);
        self.store_scenario(name, result);
        self.compare_to_base(name)
    }

    /// Run quick presets against the base, storing each result under its display name.
    pub fn run_presets(&mut self, presets: &[ScenarioPreset]) -> Result<Vec<ScenarioComparison>> {
        let base = self.base()?.clone();
        let mut comparisons = Vec::with_capacity(presets.len());
        for preset in presets {
            let result = preset.apply(&base);
            comparisons.push(compare_scenarios(&base, &result, preset.name()));
            self.store_scenario(preset.name(), result);
        }
        Ok(comparisons)
    }

    /// Monte Carlo risk run over the base using the configured parameters.
    pub fn monte_carlo(&self) -> Result<MonteCarloSummary> {
        monte_carlo_simulate(self.base()?, &self.config.monte_carlo)
    }

    /// Sensitivity sweep over the base using the configured range.
    pub fn sensitivity(&self, parameter: SensitivityParameter) -> Result<Vec<SensitivityPoint>> {
        Ok(sweep(self.base()?, parameter, &self.config.sensitivity))
    }
}
