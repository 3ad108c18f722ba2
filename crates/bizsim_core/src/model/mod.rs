mod records;
mod results;

pub use records::{Dataset, Observation, RegionTotals, Totals, margin};
pub use results::{MonteCarloSummary, Recommendation, ScenarioComparison, SensitivityPoint};
