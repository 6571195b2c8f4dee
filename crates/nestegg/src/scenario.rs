//! Scenario files: run parameters plus the portfolio allocation
//!
//! A scenario is a flat YAML document; every field is optional and falls
//! back to the baseline defaults. Weights can also be supplied on the
//! command line as a comma-separated list, which takes precedence.

use std::path::Path;

use color_eyre::eyre::eyre;
use serde::{Deserialize, Serialize};

use nestegg_core::SimulationConfig;

/// One saved simulation setup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    /// Allocation across the return table's asset columns, in column order
    pub weights: Vec<f64>,
    /// Horizon in years
    pub years: usize,
    /// Starting portfolio balance
    pub initial_assets: f64,
    /// First-year spending for the fixed-real strategy
    pub annual_spending: f64,
    /// Annual inflation applied to fixed-real spending
    pub inflation_rate: f64,
    /// Annual fraction taken by the fixed-percentage strategy
    pub withdrawal_rate: f64,
    /// Simulated paths per strategy
    pub n_sims: usize,
}

impl Default for Scenario {
    fn default() -> Self {
        let config = SimulationConfig::default();
        Self {
            weights: vec![0.6, 0.2, 0.2],
            years: config.years,
            initial_assets: config.initial_assets,
            annual_spending: config.annual_spending,
            inflation_rate: config.inflation_rate,
            withdrawal_rate: config.withdrawal_rate,
            n_sims: config.n_sims,
        }
    }
}

impl Scenario {
    /// Load a scenario from a YAML file.
    pub fn load(path: &Path) -> color_eyre::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| eyre!("Failed to read scenario {}: {e}", path.display()))?;
        serde_saphyr::from_str(&content)
            .map_err(|e| eyre!("Failed to parse scenario {}: {e}", path.display()))
    }

    /// Engine parameters carried by this scenario. Validation happens in the
    /// engine, not here.
    #[must_use]
    pub fn config(&self) -> SimulationConfig {
        SimulationConfig {
            years: self.years,
            initial_assets: self.initial_assets,
            annual_spending: self.annual_spending,
            inflation_rate: self.inflation_rate,
            withdrawal_rate: self.withdrawal_rate,
            n_sims: self.n_sims,
        }
    }
}

/// Parse a comma-separated weight list like "0.6,0.2,0.2".
pub fn parse_weights(input: &str) -> color_eyre::Result<Vec<f64>> {
    input
        .split(',')
        .map(|piece| {
            piece
                .trim()
                .parse::<f64>()
                .map_err(|_| eyre!("Invalid weight {piece:?} in {input:?}"))
        })
        .collect()
}
