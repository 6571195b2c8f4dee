use clap::Parser;
use std::path::PathBuf;

use nestegg_core::{PortfolioWeights, ReturnSampler};

mod data;
mod logging;
mod report;
mod scenario;

use crate::scenario::Scenario;

#[derive(Parser, Debug)]
#[command(name = "nestegg")]
#[command(about = "A Monte Carlo retirement simulator over historical returns")]
struct Args {
    /// Path to a YAML scenario file (built-in defaults when omitted)
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// CSV of monthly returns: date column, then one column per asset
    #[arg(short, long)]
    returns: PathBuf,

    /// Treat the returns file as price levels and convert to returns
    #[arg(long)]
    prices: bool,

    /// Portfolio weights as a comma-separated list, e.g. "0.6,0.2,0.2"
    #[arg(short, long)]
    weights: Option<String>,

    /// Simulated paths per strategy (overrides the scenario)
    #[arg(long)]
    sims: Option<usize>,

    /// Seed for the random stream; same seed, same ensembles
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Write final assets per strategy to this CSV
    #[arg(short, long)]
    export: Option<PathBuf>,

    /// Print a JSON summary instead of the text report
    #[arg(long)]
    json: bool,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    logging::init_logging(&args.log_level);

    let mut scenario = match &args.scenario {
        Some(path) => Scenario::load(path)?,
        None => Scenario::default(),
    };
    if let Some(weights) = &args.weights {
        scenario.weights = scenario::parse_weights(weights)?;
    }
    if let Some(sims) = args.sims {
        scenario.n_sims = sims;
    }

    let history = data::load_history(&args.returns, args.prices)?;
    tracing::info!(
        "Loaded {} months of returns for {} assets",
        history.len(),
        history.columns()
    );

    let weights = PortfolioWeights::new(scenario.weights.clone())?;
    let sampler = ReturnSampler::build(&history, &weights)?;

    let config = scenario.config();
    tracing::debug!(
        "Running {} paths x {} years per strategy, seed {}",
        config.n_sims,
        config.years,
        args.seed
    );
    let summary = nestegg_core::simulation::run(&config, &sampler, args.seed)?;

    if args.json {
        println!("{}", report::render_json(&config, &summary, args.seed)?);
    } else {
        print!(
            "{}",
            report::render_report(&config, &history, &weights, &summary)
        );
    }

    if let Some(path) = &args.export {
        report::export_final_assets(path, &summary)?;
        tracing::info!("Wrote final assets to {}", path.display());
    }

    Ok(())
}
