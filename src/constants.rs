//! Dice constants and outcome-indexing functions.
//!
//! The outcome space is the 36 ordered pairs of two six-sided dice, indexed
//! row-major: `pair_index(d1, d2) = (d1-1)·6 + (d2-1)`. Sums 2..=12 map to
//! the 11 buckets `sum_index(s) = s - 2`, ascending.

/// Faces per die.
pub const NUM_FACES: usize = 6;

/// Lowest and highest face value.
pub const MIN_FACE: u8 = 1;
pub const MAX_FACE: u8 = 6;

/// Number of ordered (die1, die2) outcomes: 6 × 6.
pub const NUM_PAIRS: usize = NUM_FACES * NUM_FACES;

/// Lowest and highest two-die sum.
pub const MIN_SUM: u8 = 2;
pub const MAX_SUM: u8 = 12;

/// Number of distinct sums: 2..=12.
pub const NUM_SUMS: usize = (MAX_SUM - MIN_SUM + 1) as usize;

/// Ordered pairs producing each sum 2..=12: sum s has `6 - |s - 7|` pairs.
pub const SUM_COMBINATIONS: [u64; NUM_SUMS] = [1, 2, 3, 4, 5, 6, 5, 4, 3, 2, 1];

/// Map an ordered pair of faces to its flat index in [0, 36).
#[inline(always)]
pub fn pair_index(die1: u8, die2: u8) -> usize {
    (die1 as usize - 1) * NUM_FACES + (die2 as usize - 1)
}

/// Inverse of [`pair_index`]: recover the (die1, die2) faces.
#[inline(always)]
pub fn pair_from_index(index: usize) -> (u8, u8) {
    ((index / NUM_FACES) as u8 + 1, (index % NUM_FACES) as u8 + 1)
}

/// Map a sum in 2..=12 to its bucket index in [0, 11).
#[inline(always)]
pub fn sum_index(sum: u8) -> usize {
    (sum - MIN_SUM) as usize
}

/// Theoretical probability of rolling `sum` with two fair dice.
#[inline(always)]
pub fn theoretical_probability(sum: u8) -> f64 {
    SUM_COMBINATIONS[sum_index(sum)] as f64 / NUM_PAIRS as f64
}
