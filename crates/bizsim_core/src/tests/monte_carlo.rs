//! Tests for Monte Carlo risk simulation
//!
//! These tests verify that:
//! - Zero volatility collapses the distribution onto the actual base profit
//! - Percentiles bracket the mean
//! - Seeded runs are reproducible, batched or not
//! - Sampled moments match the configured volatilities

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

use crate::config::MonteCarloConfig;
use crate::error::SimulationError;
use crate::model::{Dataset, MonteCarloSummary};
use crate::simulation::{
    BaseTotals, MAX_BATCH_SIZE, draw_trial, monte_carlo_simulate, run_monte_carlo_simulation,
    summarize,
};

use super::fixtures::{assert_close, observation, sample_dataset, zero_revenue_dataset};

fn run_seeded(dataset: &Dataset, config: &MonteCarloConfig, seed: u64) -> MonteCarloSummary {
    let mut rng = SmallRng::seed_from_u64(seed);
    run_monte_carlo_simulation(dataset, config, &mut rng).unwrap()
}

#[test]
fn test_zero_volatility_converges_to_base_profit() {
    let dataset = sample_dataset();
    let expected = dataset.total_revenue() - dataset.total_costs();
    let config = MonteCarloConfig::default()
        .with_iterations(500)
        .with_volatility(0.0, 0.0);
    let mut rng = SmallRng::seed_from_u64(42);

    let summary = run_monte_carlo_simulation(&dataset, &config, &mut rng).unwrap();

    assert_eq!(summary.iterations, 500);
    assert_close(summary.mean_profit, expected, 1e-6);
    assert_close(summary.std_profit, 0.0, 1e-6);
    assert_close(summary.profit_5th_percentile, expected, 1e-9);
    assert_close(summary.profit_95th_percentile, expected, 1e-9);
    assert_close(summary.value_at_risk_5pct, 0.0, 1e-9);
    assert_eq!(summary.probability_profitable, 1.0);
    assert_close(summary.mean_revenue, dataset.total_revenue(), 1e-6);
    assert_close(summary.std_revenue, 0.0, 1e-6);
}

#[test]
fn test_value_at_risk_ignores_supplied_profit_column() {
    let mut row = observation("North", 1000.0, 600.0, 10.0);
    row.profit = 50.0;
    let dataset = Dataset::new(vec![row]);
    let config = MonteCarloConfig::default()
        .with_iterations(10)
        .with_volatility(0.0, 0.0);
    let mut rng = SmallRng::seed_from_u64(7);

    let summary = run_monte_carlo_simulation(&dataset, &config, &mut rng).unwrap();

    assert_close(summary.mean_profit, 400.0, 1e-9);
    assert_close(summary.value_at_risk_5pct, 0.0, 1e-9);
}

#[test]
fn test_percentiles_bracket_mean() {
    let dataset = sample_dataset();
    let config = MonteCarloConfig::default().with_iterations(2000);

    for seed in [1, 2, 3, 99] {
        let mut rng = SmallRng::seed_from_u64(seed);
        let summary = run_monte_carlo_simulation(&dataset, &config, &mut rng).unwrap();
        assert!(summary.profit_5th_percentile <= summary.mean_profit);
        assert!(summary.mean_profit <= summary.profit_95th_percentile);
        assert!(summary.value_at_risk_5pct < 0.0);
        assert!(summary.probability_profitable > 0.0 && summary.probability_profitable <= 1.0);
    }
}

#[test]
fn test_same_seed_same_summary() {
    let dataset = sample_dataset();
    let config = MonteCarloConfig::default().with_iterations(300);

    let a = run_seeded(&dataset, &config, 5);
    let b = run_seeded(&dataset, &config, 5);
    let c = run_seeded(&dataset, &config, 6);

    assert_eq!(a, b);
    assert_ne!(a.mean_profit, c.mean_profit);
}

#[test]
fn test_batched_run_is_reproducible_with_seed() {
    let dataset = sample_dataset();
    // Not a multiple of the batch size, so the last batch is short
    let config = MonteCarloConfig::default()
        .with_iterations(1_050)
        .with_seed(2024);

    let a = monte_carlo_simulate(&dataset, &config).unwrap();
    let b = monte_carlo_simulate(&dataset, &config).unwrap();

    assert_eq!(a.iterations, 1_050);
    assert_close(a.mean_profit, b.mean_profit, 1e-6);
    assert_eq!(a.profit_5th_percentile, b.profit_5th_percentile);
    assert_eq!(a.profit_95th_percentile, b.profit_95th_percentile);
    assert_eq!(a.probability_profitable, b.probability_profitable);
}

#[test]
fn test_batched_run_matches_sequential_batches() {
    let dataset = sample_dataset();
    let config = MonteCarloConfig::default()
        .with_iterations(1_050)
        .with_seed(2024);

    // Rebuild the batches one after another on this thread
    let base = BaseTotals::from_dataset(&dataset);
    let mut seeder = SmallRng::seed_from_u64(2024);
    let mut trials = Vec::with_capacity(config.iterations);
    let mut remaining = config.iterations;
    while remaining > 0 {
        let mut rng = SmallRng::seed_from_u64(seeder.next_u64());
        let batch_size = remaining.min(MAX_BATCH_SIZE);
        trials.extend((0..batch_size).map(|_| draw_trial(base, &config, &mut rng)));
        remaining -= batch_size;
    }

    let expected = summarize(base, &trials);
    assert_eq!(expected.iterations, 1_050);
    assert_eq!(monte_carlo_simulate(&dataset, &config).unwrap(), expected);
}

#[test]
fn test_batched_small_run() {
    let dataset = sample_dataset();
    let config = MonteCarloConfig::default().with_iterations(1).with_seed(1);

    let summary = monte_carlo_simulate(&dataset, &config).unwrap();

    assert_eq!(summary.iterations, 1);
    assert_eq!(summary.std_profit, 0.0);
    assert_eq!(
        summary.profit_5th_percentile,
        summary.profit_95th_percentile
    );
}

#[test]
fn test_sampled_moments_match_volatility() {
    let dataset = sample_dataset();
    let revenue = dataset.total_revenue();
    let costs = dataset.total_costs();
    let config = MonteCarloConfig::default().with_iterations(20_000);
    let mut rng = SmallRng::seed_from_u64(11);

    let summary = run_monte_carlo_simulation(&dataset, &config, &mut rng).unwrap();

    let expected_std = ((revenue * 0.10).powi(2) + (costs * 0.05).powi(2)).sqrt();
    assert!(
        (summary.std_profit - expected_std).abs() / expected_std < 0.05,
        "std {} vs expected {}",
        summary.std_profit,
        expected_std
    );
    assert!(
        (summary.mean_profit - (revenue - costs)).abs() < 6.0 * expected_std / (20_000f64).sqrt(),
        "mean {} vs expected {}",
        summary.mean_profit,
        revenue - costs
    );
    assert!((summary.std_revenue - revenue * 0.10).abs() / (revenue * 0.10) < 0.05);
}

#[test]
fn test_negative_volatility_is_accepted() {
    let dataset = sample_dataset();
    let config = MonteCarloConfig::default()
        .with_iterations(200)
        .with_volatility(-0.1, -0.05);
    let mut rng = SmallRng::seed_from_u64(3);

    let summary = run_monte_carlo_simulation(&dataset, &config, &mut rng).unwrap();
    assert_eq!(summary.iterations, 200);
    assert!(summary.std_profit > 0.0);
}

#[test]
fn test_zero_revenue_margin_is_zero() {
    let dataset = zero_revenue_dataset();
    let config = MonteCarloConfig::default().with_iterations(100);
    let mut rng = SmallRng::seed_from_u64(9);

    let summary = run_monte_carlo_simulation(&dataset, &config, &mut rng).unwrap();

    assert_eq!(summary.mean_margin, 0.0);
    assert_eq!(summary.probability_profitable, 0.0);
}

#[test]
fn test_zero_iterations_is_invalid() {
    let config = MonteCarloConfig::default().with_iterations(0).with_seed(1);
    assert_eq!(
        monte_carlo_simulate(&sample_dataset(), &config),
        Err(SimulationError::InvalidIterations(0))
    );
}
