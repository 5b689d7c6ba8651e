//! Strategy selection and run-parameter parsing.
//!
//! A [`Strategy`] is chosen once per run and fixed for the run's duration.
//! CLI front-ends hand spec strings to [`Strategy::from_spec`] and raw roll
//! or trial counts to [`parse_roll_count`] / [`parse_trial_count`]; all
//! reject bad input with the typed errors instead of clamping or defaulting.

use crate::error::DiceError;

/// How each roll of a run is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Both dice drawn independently and uniformly; memoryless.
    Standard,
    /// Deficit-greedy selection over the 36 ordered pairs: always roll a
    /// pair whose observed count trails its expected share the most.
    Balanced,
}

impl Strategy {
    /// Parse a strategy from a CLI spec string.
    ///
    /// Supported specs (case-insensitive):
    /// - `"standard"` / `"s"`: independent uniform rolling
    /// - `"balanced"` / `"b"`: deficit-greedy rolling
    pub fn from_spec(spec: &str) -> Result<Self, DiceError> {
        match spec.trim().to_ascii_lowercase().as_str() {
            "standard" | "s" => Ok(Strategy::Standard),
            "balanced" | "b" => Ok(Strategy::Balanced),
            _ => Err(DiceError::InvalidStrategy(spec.to_string())),
        }
    }

    /// Short name used in reports and JSON output.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Standard => "standard",
            Strategy::Balanced => "balanced",
        }
    }

    /// The other strategy, for overlay comparisons.
    pub fn other(&self) -> Strategy {
        match self {
            Strategy::Standard => Strategy::Balanced,
            Strategy::Balanced => Strategy::Standard,
        }
    }
}

/// Parse a requested roll count from CLI input.
///
/// Accepts positive integers only; anything else (zero, negatives,
/// fractions, garbage) is an `InvalidRollCount`.
pub fn parse_roll_count(spec: &str) -> Result<u64, DiceError> {
    match spec.trim().parse::<i64>() {
        Ok(n) if n > 0 => Ok(n as u64),
        _ => Err(DiceError::InvalidRollCount(spec.to_string())),
    }
}

/// Parse a requested trial count from CLI input.
///
/// Same contract as [`parse_roll_count`]: positive integers only.
pub fn parse_trial_count(spec: &str) -> Result<usize, DiceError> {
    match spec.trim().parse::<i64>() {
        Ok(n) if n > 0 => Ok(n as usize),
        _ => Err(DiceError::InvalidTrialCount(spec.to_string())),
    }
}
