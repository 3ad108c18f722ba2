//! What-if scenario modelling
//!
//! - `transform` - single-lever transformations (price, cost, volume, expansion, efficiency)
//! - `compose` - multi-lever custom scenarios applied in a fixed order
//! - `presets` - the canned quick scenarios offered to users

mod compose;
mod presets;
mod transform;

pub use compose::{CustomScenario, simulate_custom_scenario};
pub use presets::{ScenarioPreset, run_quick_scenarios};
pub use transform::{
    DEMAND_ELASTICITY, EXPANSION_COST_PREMIUM, EXPANSION_UPLIFT_PER_REGION, Lever,
    simulate_cost_change, simulate_efficiency_improvement, simulate_market_expansion,
    simulate_price_change, simulate_volume_change,
};
