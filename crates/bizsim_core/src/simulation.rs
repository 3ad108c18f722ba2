//! Monte Carlo risk simulation
//!
//! Each trial draws independent revenue and cost multipliers around 1.0 and
//! applies them to the dataset's aggregate totals. The resulting profit
//! distribution is summarised; individual trials are never reported, so the
//! order in which they are produced does not matter.

use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_distr::{Distribution, StandardNormal};
#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::config::MonteCarloConfig;
use crate::error::{Result, SimulationError};
use crate::model::{Dataset, MonteCarloSummary, margin};
use crate::stats::{SampleStats, fraction_above, mean, sample_std_dev};

/// Trials per independently seeded batch
pub(crate) const MAX_BATCH_SIZE: usize = 100;

/// Aggregate inputs shared by every trial
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseTotals {
    pub revenue: f64,
    pub costs: f64,
}

impl BaseTotals {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        Self {
            revenue: dataset.total_revenue(),
            costs: dataset.total_costs(),
        }
    }

    /// Actual profit of the base data (revenue - costs)
    pub fn profit(&self) -> f64 {
        self.revenue - self.costs
    }
}

/// Outcome of a single trial
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trial {
    pub revenue: f64,
    pub costs: f64,
    pub profit: f64,
    pub margin: f64,
}

/// Draw a factor distributed as Normal(1, volatility).
///
/// Sampling goes through the standard normal so negative volatilities are
/// accepted as given instead of being rejected by a distribution constructor.
#[inline]
fn draw_factor<R: Rng + ?Sized>(volatility: f64, rng: &mut R) -> f64 {
    let z: f64 = StandardNormal.sample(rng);
    1.0 + volatility * z
}

/// Run one trial. The revenue factor is drawn before the cost factor.
pub fn draw_trial<R: Rng + ?Sized>(
    base: BaseTotals,
    config: &MonteCarloConfig,
    rng: &mut R,
) -> Trial {
    let revenue_factor = draw_factor(config.revenue_volatility, rng);
    let cost_factor = draw_factor(config.cost_volatility, rng);

    let revenue = base.revenue * revenue_factor;
    let costs = base.costs * cost_factor;
    let profit = revenue - costs;

    Trial {
        revenue,
        costs,
        profit,
        margin: margin(profit, revenue),
    }
}

fn validate(config: &MonteCarloConfig) -> Result<()> {
    if config.iterations == 0 {
        return Err(SimulationError::InvalidIterations(config.iterations));
    }
    Ok(())
}

/// Run the simulation sequentially with a caller-supplied random source.
///
/// This is the entry point for reproducible tests: the same seeded generator
/// always yields the same summary.
pub fn run_monte_carlo_simulation<R: Rng + ?Sized>(
    dataset: &Dataset,
    config: &MonteCarloConfig,
    rng: &mut R,
) -> Result<MonteCarloSummary> {
    validate(config)?;
    let base = BaseTotals::from_dataset(dataset);

    let trials: Vec<Trial> = (0..config.iterations)
        .map(|_| draw_trial(base, config, rng))
        .collect();

    Ok(summarize(base, &trials))
}

/// Run the simulation in independently seeded batches.
///
/// Batch seeds are derived from `config.seed` (or fresh entropy when unset),
/// so a seeded run gives the same summary whether or not the `parallel`
/// feature is enabled.
pub fn monte_carlo_simulate(
    dataset: &Dataset,
    config: &MonteCarloConfig,
) -> Result<MonteCarloSummary> {
    validate(config)?;
    let base = BaseTotals::from_dataset(dataset);

    let seed = config.seed.unwrap_or_else(rand::random);
    let num_batches = config.iterations.div_ceil(MAX_BATCH_SIZE);

    let mut seeder = SmallRng::seed_from_u64(seed);
    let batch_seeds: Vec<(usize, u64)> = (0..num_batches)
        .map(|i| (i, seeder.next_u64()))
        .collect();

    tracing::debug!(
        iterations = config.iterations,
        batches = num_batches,
        seed,
        "running monte carlo simulation"
    );

    let run_batch = |(i, batch_seed): (usize, u64)| {
        let mut rng = SmallRng::seed_from_u64(batch_seed);
        let batch_size = if i == num_batches - 1 {
            config.iterations - i * MAX_BATCH_SIZE
        } else {
            MAX_BATCH_SIZE
        };
        (0..batch_size)
            .map(|_| draw_trial(base, config, &mut rng))
            .collect::<Vec<_>>()
    };

    #[cfg(feature = "parallel")]
    let trials: Vec<Trial> = batch_seeds.into_par_iter().flat_map(run_batch).collect();

    #[cfg(not(feature = "parallel"))]
    let trials: Vec<Trial> = batch_seeds.into_iter().flat_map(run_batch).collect();

    Ok(summarize(base, &trials))
}

/// Reduce trials to distribution statistics.
pub(crate) fn summarize(base: BaseTotals, trials: &[Trial]) -> MonteCarloSummary {
    let revenues: Vec<f64> = trials.iter().map(|t| t.revenue).collect();
    let profits: Vec<f64> = trials.iter().map(|t| t.profit).collect();
    let margins: Vec<f64> = trials.iter().map(|t| t.margin).collect();

    let profit_stats = SampleStats::from_samples(&profits);

    MonteCarloSummary {
        iterations: trials.len(),
        mean_revenue: mean(&revenues),
        std_revenue: sample_std_dev(&revenues),
        mean_profit: profit_stats.mean,
        std_profit: profit_stats.std_dev,
        mean_margin: mean(&margins),
        profit_5th_percentile: profit_stats.p5,
        profit_95th_percentile: profit_stats.p95,
        probability_profitable: fraction_above(&profits, 0.0),
        value_at_risk_5pct: profit_stats.p5 - base.profit(),
    }
}
