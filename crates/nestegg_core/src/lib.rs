//! Monte Carlo retirement simulation library
//!
//! This crate estimates how likely a retirement portfolio is to survive a
//! fixed withdrawal horizon by bootstrap-resampling historical monthly
//! returns instead of fitting a parametric model. It provides:
//! - Weighted blending of a multi-asset return table into one portfolio
//!   return population
//! - I.i.d. bootstrap draws with replacement from that population
//! - A yearly path engine with two withdrawal strategies (fixed real
//!   spending, fixed percentage of assets) and absorbing depletion at zero
//! - Seeded, reproducible ensembles, parallelized with rayon behind the
//!   `parallel` feature (on by default)
//! - Success-rate, median, and percentile aggregates over the ensemble
//!
//! # Example
//!
//! ```ignore
//! use nestegg_core::{
//!     HistoricalReturnSeries, PortfolioWeights, ReturnSampler, SimulationConfig,
//! };
//!
//! let history = HistoricalReturnSeries::new(names, monthly_returns)?;
//! let weights = PortfolioWeights::new(vec![0.6, 0.2, 0.2])?;
//! let sampler = ReturnSampler::build(&history, &weights)?;
//!
//! let summary = nestegg_core::simulation::run(&SimulationConfig::default(), &sampler, 42)?;
//! println!("success rate: {:.2}%", summary.fixed_real.success_rate());
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod error;
pub mod sampler;
pub mod simulation;
pub mod stats;
pub mod strategy;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::SimulationConfig;
pub use error::{ConfigError, SamplerError, SimulationError};
pub use model::{
    AssetPath, HistoricalReturnSeries, PortfolioWeights, SimulationOutcome, SimulationSummary,
    StrategyResult,
};
pub use sampler::{PortfolioReturnSeries, ReturnSampler};
pub use strategy::WithdrawalStrategy;
