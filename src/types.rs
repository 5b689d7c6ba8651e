//! Core data types: rolls, outcome counts, and immutable run snapshots.

use crate::constants::{
    pair_index, sum_index, theoretical_probability, MAX_FACE, MAX_SUM, MIN_FACE, MIN_SUM,
    NUM_PAIRS, NUM_SUMS,
};
use crate::error::DiceError;
use crate::simulation::strategy::Strategy;

/// One roll of two dice, in roll order (die1 first).
///
/// Fields are public so presentation code can destructure freely; anything
/// that feeds counts re-validates via [`Roll::validate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Roll {
    pub die1: u8,
    pub die2: u8,
}

impl Roll {
    /// Validating constructor.
    pub fn new(die1: u8, die2: u8) -> Result<Self, DiceError> {
        let roll = Roll { die1, die2 };
        roll.validate()?;
        Ok(roll)
    }

    /// Check that both faces are in 1..=6.
    pub fn validate(&self) -> Result<(), DiceError> {
        if !(MIN_FACE..=MAX_FACE).contains(&self.die1)
            || !(MIN_FACE..=MAX_FACE).contains(&self.die2)
        {
            return Err(DiceError::InvalidRoll {
                die1: self.die1,
                die2: self.die2,
            });
        }
        Ok(())
    }

    /// Sum of the two faces, in 2..=12 for a valid roll.
    #[inline(always)]
    pub fn sum(&self) -> u8 {
        self.die1 + self.die2
    }
}

/// Running outcome counts for one run.
///
/// `pair_counts` is indexed by [`pair_index`], `sum_counts` by [`sum_index`].
/// Both are bumped together, once per recorded roll, so Σ sum_counts ==
/// total_rolls and each sum bucket equals the total over its pair family.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutcomeCounts {
    pub pair_counts: [u64; NUM_PAIRS],
    pub sum_counts: [u64; NUM_SUMS],
    pub total_rolls: u64,
}

impl OutcomeCounts {
    /// Empty counts, as at the start of a run.
    pub fn new() -> Self {
        OutcomeCounts {
            pair_counts: [0; NUM_PAIRS],
            sum_counts: [0; NUM_SUMS],
            total_rolls: 0,
        }
    }

    /// Count recorded for one ordered pair.
    #[inline(always)]
    pub fn pair_count(&self, die1: u8, die2: u8) -> u64 {
        self.pair_counts[pair_index(die1, die2)]
    }

    /// Count recorded for one sum in 2..=12.
    #[inline(always)]
    pub fn sum_count(&self, sum: u8) -> u64 {
        self.sum_counts[sum_index(sum)]
    }
}

impl Default for OutcomeCounts {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable end-of-run snapshot: strategy, roll count, and final counts.
///
/// Snapshots are plain copies; retaining one across further recording is
/// safe and it never changes underneath the holder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunResult {
    pub strategy: Strategy,
    pub num_rolls: u64,
    pub pair_counts: [u64; NUM_PAIRS],
    pub sum_counts: [u64; NUM_SUMS],
}

impl RunResult {
    /// Fraction of rolls that produced `sum` (0.0 for an empty run).
    pub fn empirical_probability(&self, sum: u8) -> f64 {
        if self.num_rolls == 0 {
            return 0.0;
        }
        self.sum_counts[sum_index(sum)] as f64 / self.num_rolls as f64
    }

    /// Signed gap between the empirical and theoretical probability of
    /// `sum` (0.0 for an empty run).
    pub fn deviation(&self, sum: u8) -> f64 {
        if self.num_rolls == 0 {
            return 0.0;
        }
        self.empirical_probability(sum) - theoretical_probability(sum)
    }

    /// Largest absolute per-sum deviation across all 11 sums.
    pub fn max_abs_deviation(&self) -> f64 {
        (MIN_SUM..=MAX_SUM)
            .map(|sum| self.deviation(sum).abs())
            .fold(0.0, f64::max)
    }
}
