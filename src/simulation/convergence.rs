//! Convergence comparison between the two rolling strategies.
//!
//! Runs repeated independent seeded trials of each strategy and aggregates
//! each trial's maximum absolute per-sum deviation. The headline check: at
//! the same roll count, the balanced strategy's worst observed deviation
//! should not exceed the standard strategy's.

use serde::Serialize;

use crate::error::DiceError;
use crate::simulation::engine::simulate_batch;
use crate::simulation::statistics::aggregate_statistics;
use crate::simulation::strategy::Strategy;

/// Aggregate of per-trial maximum deviations for one strategy.
#[derive(Serialize)]
pub struct StrategyConvergence {
    pub strategy: String,
    pub mean_max_deviation: f64,
    pub min_max_deviation: f64,
    pub max_max_deviation: f64,
    pub mean_chi_square: f64,
}

/// Two-arm comparison at one roll count.
#[derive(Serialize)]
pub struct ConvergenceReport {
    pub num_rolls: u64,
    pub num_trials: usize,
    pub seed: u64,
    pub standard: StrategyConvergence,
    pub balanced: StrategyConvergence,
}

/// Run `num_trials` trials of each strategy and aggregate their deviations.
///
/// The two arms draw from disjoint seed streams derived from `seed`, so
/// growing the trial count never reuses a seed across arms. `num_trials`
/// must be at least 1 (`InvalidTrialCount` otherwise).
pub fn compare_strategies(
    num_rolls: u64,
    num_trials: usize,
    seed: u64,
) -> Result<ConvergenceReport, DiceError> {
    if num_trials == 0 {
        return Err(DiceError::InvalidTrialCount(num_trials.to_string()));
    }
    let standard = run_trials(Strategy::Standard, num_rolls, num_trials, seed)?;
    let balanced = run_trials(
        Strategy::Balanced,
        num_rolls,
        num_trials,
        seed.wrapping_add(num_trials as u64),
    )?;

    Ok(ConvergenceReport {
        num_rolls,
        num_trials,
        seed,
        standard,
        balanced,
    })
}

fn run_trials(
    strategy: Strategy,
    num_rolls: u64,
    num_trials: usize,
    seed: u64,
) -> Result<StrategyConvergence, DiceError> {
    let results = simulate_batch(strategy, num_rolls, num_trials, seed)?;
    let n = results.len() as f64;

    let deviations: Vec<f64> = results.iter().map(|r| r.max_abs_deviation()).collect();
    let mean_max_deviation = deviations.iter().sum::<f64>() / n;
    let min_max_deviation = deviations.iter().copied().fold(f64::INFINITY, f64::min);
    let max_max_deviation = deviations.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let mean_chi_square = results
        .iter()
        .map(|r| aggregate_statistics(r).chi_square)
        .sum::<f64>()
        / n;

    Ok(StrategyConvergence {
        strategy: strategy.name().to_string(),
        mean_max_deviation,
        min_max_deviation,
        max_max_deviation,
        mean_chi_square,
    })
}
