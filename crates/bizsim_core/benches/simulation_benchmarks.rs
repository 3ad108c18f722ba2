//! Criterion benchmarks for bizsim_core
//!
//! Run with: cargo bench -p bizsim_core

use bizsim_core::analysis::{SensitivityParameter, SweepConfig, sweep};
use bizsim_core::config::MonteCarloConfig;
use bizsim_core::model::{Dataset, Observation};
use bizsim_core::scenario::simulate_custom_scenario;
use bizsim_core::simulation::monte_carlo_simulate;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

const REGIONS: [&str; 4] = ["North", "South", "East", "West"];
const CATEGORIES: [&str; 3] = ["Electronics", "Clothing", "Home"];

/// Deterministic sales rows, one per day
fn create_dataset(rows: usize) -> Dataset {
    let start = jiff::civil::date(2024, 1, 1);
    (0..rows)
        .map(|i| {
            let revenue = 5_000.0 + (i % 37) as f64 * 250.0;
            let costs = revenue * (0.55 + (i % 11) as f64 * 0.02);
            Observation {
                date: start
                    .checked_add(jiff::Span::new().days(i as i64))
                    .unwrap_or(start),
                region: REGIONS[i % REGIONS.len()].to_string(),
                product_category: CATEGORIES[i % CATEGORIES.len()].to_string(),
                revenue,
                costs,
                profit: revenue - costs,
                units_sold: revenue / 50.0,
                customer_satisfaction: 3.5 + (i % 5) as f64 * 0.3,
            }
        })
        .collect()
}

fn bench_custom_scenario(c: &mut Criterion) {
    let dataset = create_dataset(1_000);
    c.bench_function("custom_scenario_1000_rows", |b| {
        b.iter(|| {
            simulate_custom_scenario(
                black_box(&dataset),
                black_box(10.0),
                black_box(-5.0),
                black_box(15.0),
                black_box(8.0),
            )
        })
    });
}

fn bench_monte_carlo(c: &mut Criterion) {
    let mut group = c.benchmark_group("monte_carlo");
    let data = create_dataset(365);

    for iterations in [100, 1_000, 10_000].iter() {
        let config = MonteCarloConfig::default()
            .with_iterations(*iterations)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new("iterations", iterations),
            iterations,
            |b, _| b.iter(|| monte_carlo_simulate(black_box(&data), black_box(&config))),
        );
    }

    group.finish();
}

fn bench_sensitivity(c: &mut Criterion) {
    let mut group = c.benchmark_group("sensitivity");
    let dataset = create_dataset(365);
    let config = SweepConfig::new(-50.0, 50.0, 21);

    for parameter in SensitivityParameter::ALL {
        group.bench_function(parameter.name(), |b| {
            b.iter(|| sweep(black_box(&dataset), parameter, black_box(&config)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_custom_scenario,
    bench_monte_carlo,
    bench_sensitivity,
);
criterion_main!(benches);
