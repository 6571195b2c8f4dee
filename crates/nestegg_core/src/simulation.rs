//! Year-by-year path stepping and the Monte Carlo ensemble runner
//!
//! A path advances one year at a time: draw a monthly return, compound it to
//! an annual rate, grow the balance, withdraw per strategy, stop early if the
//! balance hits zero. The ensemble runner repeats this `n_sims` times per
//! strategy with an independent seeded generator per path.

use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};

#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::config::SimulationConfig;
use crate::error::{SamplerError, SimulationError};
use crate::model::{SimulationOutcome, SimulationSummary, StrategyResult};
use crate::sampler::ReturnSampler;
use crate::strategy::WithdrawalStrategy;

/// Sampled returns are monthly; the step is yearly. A fixed exponent, not a
/// derived value.
const MONTHS_PER_YEAR: i32 = 12;

/// Paths per seeding batch in the ensemble runner
const MAX_BATCH_SIZE: usize = 100;

/// Compound one monthly return to a yearly rate.
///
/// A single draw stands in for the whole year: it is re-exponentiated, not
/// compounded from twelve independent draws.
#[must_use]
#[inline]
pub fn annualized_rate(monthly_return: f64) -> f64 {
    (1.0 + monthly_return).powi(MONTHS_PER_YEAR) - 1.0
}

/// Advance one path from the initial balance until the horizon ends or the
/// balance is depleted.
///
/// Each year grows the balance by an annualized bootstrap draw, then
/// subtracts the strategy's withdrawal (computed on the post-growth balance).
/// A year that drives the balance to or below zero records exactly `0.0` and
/// stops: zero is absorbing, with no further growth or withdrawals. The
/// returned path starts at `initial_assets` and holds between 2 and
/// `years + 1` entries.
pub fn simulate_path<R: Rng + ?Sized>(
    config: &SimulationConfig,
    strategy: WithdrawalStrategy,
    sampler: &ReturnSampler,
    rng: &mut R,
) -> SimulationOutcome {
    let mut assets = config.initial_assets;
    let mut path = Vec::with_capacity(config.years + 1);
    path.push(assets);

    for year in 0..config.years {
        let annual_rate = annualized_rate(sampler.draw(rng));
        assets *= 1.0 + annual_rate;
        assets -= strategy.withdrawal(config, year, assets);

        if assets <= 0.0 {
            assets = 0.0;
            path.push(assets);
            break;
        }
        path.push(assets);
    }

    SimulationOutcome {
        final_assets: assets,
        path,
    }
}

/// Run `n_sims` independent paths for one strategy.
///
/// Fails fast with `InvalidConfig`-class errors from
/// [`SimulationConfig::validate`] or with [`SamplerError::EmptySeries`]
/// before any path runs; there is no partial-success mode.
pub fn run_strategy(
    config: &SimulationConfig,
    strategy: WithdrawalStrategy,
    sampler: &ReturnSampler,
    seed: u64,
) -> Result<StrategyResult, SimulationError> {
    config.validate()?;
    if sampler.series().is_empty() {
        return Err(SamplerError::EmptySeries.into());
    }
    Ok(StrategyResult {
        strategy,
        outcomes: run_ensemble(config, strategy, sampler, seed),
    })
}

/// Run the full two-strategy ensemble over one sampler.
///
/// Both strategies use the same seed schedule, so they see identical draw
/// sequences at each simulation index and differ only in withdrawals.
pub fn run(
    config: &SimulationConfig,
    sampler: &ReturnSampler,
    seed: u64,
) -> Result<SimulationSummary, SimulationError> {
    Ok(SimulationSummary {
        fixed_real: run_strategy(config, WithdrawalStrategy::FixedReal, sampler, seed)?,
        fixed_percentage: run_strategy(
            config,
            WithdrawalStrategy::FixedPercentage,
            sampler,
            seed,
        )?,
    })
}

/// Paths are seeded in fixed-size batches: batch `i` seeds a generator from
/// `seed + i`, which hands one seed to each path in the batch. The schedule
/// is identical with and without the `parallel` feature, so a given seed
/// produces bit-identical ensembles either way.
fn run_ensemble(
    config: &SimulationConfig,
    strategy: WithdrawalStrategy,
    sampler: &ReturnSampler,
    seed: u64,
) -> Vec<SimulationOutcome> {
    let num_batches = config.n_sims.div_ceil(MAX_BATCH_SIZE);

    let run_batch = |batch: usize| -> Vec<SimulationOutcome> {
        let mut seeder = SmallRng::seed_from_u64(seed.wrapping_add(batch as u64));
        let batch_size = if batch == num_batches - 1 {
            config.n_sims - batch * MAX_BATCH_SIZE
        } else {
            MAX_BATCH_SIZE
        };
        (0..batch_size)
            .map(|_| {
                let mut rng = SmallRng::seed_from_u64(seeder.next_u64());
                simulate_path(config, strategy, sampler, &mut rng)
            })
            .collect()
    };

    #[cfg(feature = "parallel")]
    {
        (0..num_batches).into_par_iter().flat_map(run_batch).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        (0..num_batches).flat_map(run_batch).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{HistoricalReturnSeries, PortfolioWeights};

    fn single_asset_sampler(returns: &[f64]) -> ReturnSampler {
        let rows = returns.iter().map(|&r| vec![r]).collect();
        let history = HistoricalReturnSeries::new(vec!["A".to_string()], rows).unwrap();
        let weights = PortfolioWeights::new(vec![1.0]).unwrap();
        ReturnSampler::build(&history, &weights).unwrap()
    }

    #[test]
    fn test_annualized_rate_compounds_twelve_periods() {
        let annual = annualized_rate(0.01);
        let expected = 1.01_f64.powi(12) - 1.0;
        assert!((annual - expected).abs() < 1e-12);

        // Zero monthly return annualizes to zero
        assert_eq!(annualized_rate(0.0), 0.0);
    }

    #[test]
    fn test_annualized_rate_negative_draw() {
        let annual = annualized_rate(-0.01);
        assert!(annual < 0.0);
        assert!((annual - (0.99_f64.powi(12) - 1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_ensemble_covers_partial_final_batch() {
        // 250 paths = two full batches of 100 plus a remainder of 50
        let config = SimulationConfig {
            n_sims: 250,
            years: 3,
            ..Default::default()
        };
        let sampler = single_asset_sampler(&[0.004]);

        let result =
            run_strategy(&config, WithdrawalStrategy::FixedReal, &sampler, 42).unwrap();
        assert_eq!(result.outcomes.len(), 250);
    }

    #[test]
    fn test_run_produces_both_strategies() {
        let config = SimulationConfig {
            n_sims: 20,
            years: 5,
            ..Default::default()
        };
        let sampler = single_asset_sampler(&[0.01, -0.01, 0.004]);

        let summary = run(&config, &sampler, 42).unwrap();
        assert_eq!(summary.fixed_real.strategy, WithdrawalStrategy::FixedReal);
        assert_eq!(
            summary.fixed_percentage.strategy,
            WithdrawalStrategy::FixedPercentage
        );
        assert_eq!(summary.fixed_real.outcomes.len(), 20);
        assert_eq!(summary.fixed_percentage.outcomes.len(), 20);
    }

    #[test]
    fn test_invalid_config_rejected_before_running() {
        let config = SimulationConfig {
            years: 0,
            ..Default::default()
        };
        let sampler = single_asset_sampler(&[0.01]);

        let err = run_strategy(&config, WithdrawalStrategy::FixedReal, &sampler, 42).unwrap_err();
        assert!(matches!(err, SimulationError::Config(_)));
    }
}
