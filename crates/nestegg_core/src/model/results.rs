//! Ensemble outputs and per-strategy aggregates
//!
//! One [`SimulationOutcome`] per simulated path, collected into a
//! [`StrategyResult`] per withdrawal strategy, paired into a
//! [`SimulationSummary`] for a full run. Outcomes are never mutated after
//! creation; every statistic is derived on demand.

use serde::{Deserialize, Serialize};

use crate::stats;
use crate::strategy::WithdrawalStrategy;

/// Asset balance observed at the end of each simulated year, starting with
/// the initial balance. A depleted path ends with an exact `0.0`.
pub type AssetPath = Vec<f64>;

/// Terminal state and full trajectory of one simulated path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// Last value of `path`; zero when the portfolio ran out
    pub final_assets: f64,
    pub path: AssetPath,
}

/// All outcomes for one strategy, in simulation-index order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyResult {
    pub strategy: WithdrawalStrategy,
    pub outcomes: Vec<SimulationOutcome>,
}

impl StrategyResult {
    /// Percentage of paths that end with a positive balance, in [0, 100]
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        stats::success_rate(&self.outcomes)
    }

    /// Median terminal balance across the ensemble
    #[must_use]
    pub fn median_final_assets(&self) -> f64 {
        let mut values = self.final_assets();
        stats::median(&mut values)
    }

    /// Interpolated percentile of terminal balances, `pct` in [0, 100]
    #[must_use]
    pub fn final_assets_percentile(&self, pct: f64) -> f64 {
        let mut values = self.final_assets();
        stats::percentile(&mut values, pct)
    }

    /// Terminal balances in simulation-index order
    #[must_use]
    pub fn final_assets(&self) -> Vec<f64> {
        self.outcomes.iter().map(|o| o.final_assets).collect()
    }

    /// Leading trajectories, for plotting. Statistics always use the full
    /// outcome set; this prefix is only a display sample.
    #[must_use]
    pub fn sample_paths(&self, count: usize) -> &[SimulationOutcome] {
        &self.outcomes[..count.min(self.outcomes.len())]
    }
}

/// Results for both strategies over a shared configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub fixed_real: StrategyResult,
    pub fixed_percentage: StrategyResult,
}

impl SimulationSummary {
    /// Both strategy results, in report order
    #[must_use]
    pub fn strategies(&self) -> [&StrategyResult; 2] {
        [&self.fixed_real, &self.fixed_percentage]
    }

    /// Terminal balances paired by simulation index, fixed-real first.
    /// Strategies at the same index are independent simulations; pairing is
    /// positional, for tabular export.
    #[must_use]
    pub fn final_assets_rows(&self) -> Vec<(f64, f64)> {
        self.fixed_real
            .final_assets()
            .into_iter()
            .zip(self.fixed_percentage.final_assets())
            .collect()
    }
}
