//! Integration tests for the retirement simulation engine
//!
//! Tests are organized by topic:
//! - `paths` - Path shape, clamping, and the absorbing zero state
//! - `strategies` - Withdrawal semantics for both strategies
//! - `determinism` - Seed reproducibility of full ensembles
//! - `aggregates` - Success rate, median, and ensemble bookkeeping


use crate::model::{HistoricalReturnSeries, PortfolioWeights};
use crate::sampler::ReturnSampler;

/// Single-asset sampler over the given monthly returns.
pub(crate) fn single_asset_sampler(returns: &[f64]) -> ReturnSampler {
    let rows = returns.iter().map(|&r| vec![r]).collect();
    let history = HistoricalReturnSeries::new(vec!["A".to_string()], rows).unwrap();
    let weights = PortfolioWeights::new(vec![1.0]).unwrap();
    ReturnSampler::build(&history, &weights).unwrap()
}
