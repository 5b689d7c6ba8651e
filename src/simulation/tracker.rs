//! Running distribution tracking for a single run.
//!
//! The tracker is the sole writer of a run's [`OutcomeCounts`]: every
//! produced roll passes through [`DistributionTracker::record`] exactly once,
//! in roll order, which keeps the pair and sum tables in lockstep with the
//! roll total.

use crate::constants::{pair_index, sum_index};
use crate::error::DiceError;
use crate::simulation::strategy::Strategy;
use crate::types::{OutcomeCounts, Roll, RunResult};

/// Owns the outcome counts for one run and serves the balancing decision.
#[derive(Clone, Debug)]
pub struct DistributionTracker {
    counts: OutcomeCounts,
}

impl DistributionTracker {
    /// Fresh tracker with all counts at zero.
    pub fn new() -> Self {
        DistributionTracker {
            counts: OutcomeCounts::new(),
        }
    }

    /// Record one roll, bumping its pair count and sum count together.
    ///
    /// The faces are re-validated here even though producers only emit valid
    /// rolls; an out-of-range face means a broken producer and the run stops.
    pub fn record(&mut self, roll: Roll) -> Result<(), DiceError> {
        roll.validate()?;
        self.counts.pair_counts[pair_index(roll.die1, roll.die2)] += 1;
        self.counts.sum_counts[sum_index(roll.sum())] += 1;
        self.counts.total_rolls += 1;
        Ok(())
    }

    /// Read access to the running counts.
    pub fn counts(&self) -> &OutcomeCounts {
        &self.counts
    }

    /// Rolls recorded so far.
    pub fn num_rolls(&self) -> u64 {
        self.counts.total_rolls
    }

    /// Immutable snapshot of the current counts.
    pub fn snapshot(&self, strategy: Strategy) -> RunResult {
        RunResult {
            strategy,
            num_rolls: self.counts.total_rolls,
            pair_counts: self.counts.pair_counts,
            sum_counts: self.counts.sum_counts,
        }
    }
}

impl Default for DistributionTracker {
    fn default() -> Self {
        Self::new()
    }
}
