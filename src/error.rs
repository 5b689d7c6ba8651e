//! Error types for strategy parsing, run configuration, and roll recording.

use thiserror::Error;

/// Validation failures raised by the simulation layer.
///
/// All variants are local, synchronous failures surfaced immediately to the
/// caller; nothing is clamped or retried. `InvalidRoll` signals an internal
/// bug in a roll producer and callers treat it as fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiceError {
    /// The strategy spec string did not name a known strategy.
    #[error("unknown strategy spec '{0}' (expected standard, balanced, s, or b)")]
    InvalidStrategy(String),

    /// The requested roll count was not a positive integer.
    #[error("number of rolls must be a positive integer, got '{0}'")]
    InvalidRollCount(String),

    /// The requested trial count was not a positive integer.
    #[error("number of trials must be a positive integer, got '{0}'")]
    InvalidTrialCount(String),

    /// A roll carried a die face outside 1..=6.
    #[error("die faces ({die1}, {die2}) out of range 1..=6")]
    InvalidRoll { die1: u8, die2: u8 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_offending_input() {
        let err = DiceError::InvalidStrategy("weighted".to_string());
        assert!(err.to_string().contains("'weighted'"));

        let err = DiceError::InvalidRollCount("-3".to_string());
        assert!(err.to_string().contains("'-3'"));

        let err = DiceError::InvalidTrialCount("0".to_string());
        assert!(err.to_string().contains("'0'"));

        let err = DiceError::InvalidRoll { die1: 0, die2: 9 };
        assert!(err.to_string().contains("(0, 9)"));
    }
}
