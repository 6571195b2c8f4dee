//! Simulation configuration
//!
//! `SimulationConfig` carries every parameter shared by the simulated paths.
//! It is validated once, up front, and treated as immutable for the run; the
//! engine never reads ambient state.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_years() -> usize {
    30
}

fn default_initial_assets() -> f64 {
    1_000_000.0
}

fn default_annual_spending() -> f64 {
    40_000.0
}

fn default_inflation_rate() -> f64 {
    0.02
}

fn default_withdrawal_rate() -> f64 {
    0.04
}

fn default_n_sims() -> usize {
    5_000
}

/// Withdrawal-phase parameters for one ensemble run
///
/// Defaults describe a common baseline: a 30-year horizon, $1M starting
/// balance, $40k first-year spending at 2% inflation, and the 4% rule for
/// the percentage strategy, at 5000 simulations per strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Horizon in years
    #[serde(default = "default_years")]
    pub years: usize,

    /// Starting portfolio balance
    #[serde(default = "default_initial_assets")]
    pub initial_assets: f64,

    /// First-year spending for the fixed-real strategy, base-year dollars.
    /// Zero is allowed and means no withdrawals under that strategy.
    #[serde(default = "default_annual_spending")]
    pub annual_spending: f64,

    /// Annual inflation applied to fixed-real spending
    #[serde(default = "default_inflation_rate")]
    pub inflation_rate: f64,

    /// Annual fraction of current assets taken by the fixed-percentage strategy
    #[serde(default = "default_withdrawal_rate")]
    pub withdrawal_rate: f64,

    /// Number of simulated paths per strategy
    #[serde(default = "default_n_sims")]
    pub n_sims: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            years: default_years(),
            initial_assets: default_initial_assets(),
            annual_spending: default_annual_spending(),
            inflation_rate: default_inflation_rate(),
            withdrawal_rate: default_withdrawal_rate(),
            n_sims: default_n_sims(),
        }
    }
}

impl SimulationConfig {
    /// Reject out-of-range parameters before any path runs.
    ///
    /// The engine calls this at every entry point, so callers that build a
    /// config by hand get the same fail-fast behavior as scenario files.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.years == 0 {
            return Err(ConfigError::ZeroYears);
        }
        check_finite("initial_assets", self.initial_assets)?;
        if self.initial_assets <= 0.0 {
            return Err(ConfigError::NonPositiveInitialAssets(self.initial_assets));
        }
        check_finite("annual_spending", self.annual_spending)?;
        if self.annual_spending < 0.0 {
            return Err(ConfigError::NegativeSpending(self.annual_spending));
        }
        check_finite("inflation_rate", self.inflation_rate)?;
        if self.inflation_rate < 0.0 {
            return Err(ConfigError::NegativeInflation(self.inflation_rate));
        }
        check_finite("withdrawal_rate", self.withdrawal_rate)?;
        if self.withdrawal_rate <= 0.0 || self.withdrawal_rate > 1.0 {
            return Err(ConfigError::WithdrawalRateOutOfRange(self.withdrawal_rate));
        }
        if self.n_sims == 0 {
            return Err(ConfigError::ZeroSimulations);
        }
        Ok(())
    }
}

fn check_finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { field, value })
    }
}
