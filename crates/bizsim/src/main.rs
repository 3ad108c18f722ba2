use std::path::PathBuf;

use bizsim::output::{
    format_monte_carlo, format_sensitivity, format_summary, format_warnings, to_json,
};
use bizsim::{default_data_dir, init_logging, load_config, load_dataset};
use bizsim_core::analysis::SensitivityParameter;
use bizsim_core::config::SimulatorConfig;
use bizsim_core::error::SimulationError;
use bizsim_core::report::generate_scenario_report;
use bizsim_core::scenario::{CustomScenario, ScenarioPreset};
use bizsim_core::simulator::BusinessSimulator;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "bizsim")]
#[command(about = "Business what-if scenarios and risk simulation over sales data")]
struct Args {
    /// Sales CSV to use as the base scenario
    #[arg(long, default_value = "data/sample_sales.csv")]
    data: PathBuf,

    /// Path to the data directory (default: ~/.bizsim/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Configuration file (default: <data_dir>/config.yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run canned what-if scenarios (all of them by default)
    Scenarios {
        /// price-increase, cost-reduction, volume-increase or expansion
        #[arg(long = "preset", value_delimiter = ',')]
        presets: Vec<ScenarioPreset>,
    },
    /// Combine several levers into one scenario
    Custom {
        #[arg(long, default_value = "Custom Scenario")]
        name: String,
        /// Price change in percent
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        price: f64,
        /// Cost change in percent
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        cost: f64,
        /// Volume change in percent
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        volume: f64,
        /// Efficiency gain in percent
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        efficiency: f64,
    },
    /// Simulate revenue and cost uncertainty
    MonteCarlo {
        #[arg(short, long)]
        iterations: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, allow_hyphen_values = true)]
        revenue_volatility: Option<f64>,
        #[arg(long, allow_hyphen_values = true)]
        cost_volatility: Option<f64>,
    },
    /// Sweep one lever and report profit at each point
    Sensitivity {
        /// price, cost, volume or efficiency
        #[arg(short, long)]
        parameter: SensitivityParameter,
        #[arg(long, allow_hyphen_values = true)]
        min: Option<f64>,
        #[arg(long, allow_hyphen_values = true)]
        max: Option<f64>,
        #[arg(long)]
        steps: Option<usize>,
    },
    /// Totals of the loaded dataset, overall and per region
    Summary,
}

impl Command {
    /// Fold command-line overrides into the file configuration
    fn apply_overrides(&self, config: &mut SimulatorConfig) {
        match self {
            Command::MonteCarlo {
                iterations,
                seed,
                revenue_volatility,
                cost_volatility,
            } => {
                let mc = &mut config.monte_carlo;
                if let Some(iterations) = iterations {
                    mc.iterations = *iterations;
                }
                if seed.is_some() {
                    mc.seed = *seed;
                }
                if let Some(vol) = revenue_volatility {
                    mc.revenue_volatility = *vol;
                }
                if let Some(vol) = cost_volatility {
                    mc.cost_volatility = *vol;
                }
            }
            Command::Sensitivity {
                min,
                max,
                steps,
                ..
            } => {
                let sweep = &mut config.sensitivity;
                if let Some(min) = min {
                    sweep.min_pct = *min;
                }
                if let Some(max) = max {
                    sweep.max_pct = *max;
                }
                if let Some(steps) = steps {
                    sweep.steps = *steps;
                }
            }
            _ => {}
        }
    }
}

fn run(command: Command, simulator: &mut BusinessSimulator, json: bool) -> color_eyre::Result<()> {
    match command {
        Command::Scenarios { presets } => {
            let presets = if presets.is_empty() {
                ScenarioPreset::ALL.to_vec()
            } else {
                presets
            };
            let comparisons = simulator.run_presets(&presets)?;
            if json {
                println!("{}", to_json(&comparisons)?);
            } else {
                print!("{}", generate_scenario_report(&comparisons));
            }
        }
        Command::Custom {
            name,
            price,
            cost,
            volume,
            efficiency,
        } => {
            let scenario = CustomScenario {
                price_change: price,
                cost_change: cost,
                volume_change: volume,
                efficiency_gain: efficiency,
            };
            let warnings = simulator.plausibility_warnings(&scenario);
            let comparison = simulator.run_custom(&name, &scenario)?;
            if json {
                println!("{}", to_json(&comparison)?);
            } else {
                eprint!("{}", format_warnings(&warnings));
                print!(
                    "{}",
                    generate_scenario_report(std::slice::from_ref(&comparison))
                );
            }
        }
        Command::MonteCarlo { .. } => {
            let summary = simulator.monte_carlo()?;
            if json {
                println!("{}", to_json(&summary)?);
            } else {
                print!("{}", format_monte_carlo(&summary));
            }
        }
        Command::Sensitivity { parameter, .. } => {
            let points = simulator.sensitivity(parameter)?;
            if json {
                println!("{}", to_json(&points)?);
            } else {
                print!("{}", format_sensitivity(parameter, &points));
            }
        }
        Command::Summary => {
            let base = simulator
                .base_scenario()
                .ok_or(SimulationError::EmptyDataset)?;
            let totals = base.totals();
            let regions = base.totals_by_region();
            if json {
                println!(
                    "{}",
                    to_json(&serde_json::json!({ "totals": totals, "regions": regions }))?
                );
            } else {
                print!("{}", format_summary(&totals, &regions));
            }
        }
    }
    Ok(())
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    let config_path = args.config.unwrap_or_else(|| data_dir.join("config.yaml"));
    let mut config = load_config(&config_path)?;
    args.command.apply_overrides(&mut config);

    let dataset = load_dataset(&args.data)?;

    let mut simulator = BusinessSimulator::new(config);
    simulator.set_base_scenario(&dataset);

    run(args.command, &mut simulator, args.json)?;

    tracing::info!("Done");
    Ok(())
}
