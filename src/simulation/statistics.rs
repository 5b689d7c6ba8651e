//! Per-sum statistics aggregation from run snapshots.
//!
//! Turns a [`RunResult`] into a serializable report: one row per sum 2..=12
//! with count, empirical probability, theoretical probability, and signed
//! deviation, plus the maximum absolute deviation and a χ² goodness-of-fit
//! statistic over the 11 sum buckets.

use serde::Serialize;

use crate::constants::{sum_index, theoretical_probability, MAX_SUM, MIN_SUM, NUM_SUMS};
use crate::types::RunResult;

// ── Report structs ──────────────────────────────────────────────────

/// One sum bucket of the frequency report.
#[derive(Serialize)]
pub struct SumRow {
    pub sum: u8,
    pub count: u64,
    pub empirical: f64,
    pub theoretical: f64,
    pub deviation: f64,
}

/// Full per-run statistics, ready for JSON export.
#[derive(Serialize)]
pub struct RunStatistics {
    pub strategy: String,
    pub num_rolls: u64,
    /// Rows for sums 2..=12, ascending; zero-count buckets included.
    pub rows: Vec<SumRow>,
    pub max_abs_deviation: f64,
    /// Σ (observed − expected)²/expected over the 11 sums; 0 for empty runs.
    pub chi_square: f64,
}

// ── Aggregation ─────────────────────────────────────────────────────

/// Build the per-sum statistics for one run snapshot.
pub fn aggregate_statistics(result: &RunResult) -> RunStatistics {
    let n = result.num_rolls as f64;
    let mut rows = Vec::with_capacity(NUM_SUMS);
    let mut chi_square = 0.0f64;

    for sum in MIN_SUM..=MAX_SUM {
        let count = result.sum_counts[sum_index(sum)];
        let theoretical = theoretical_probability(sum);
        let empirical = result.empirical_probability(sum);

        if result.num_rolls > 0 {
            let expected = n * theoretical;
            chi_square += (count as f64 - expected).powi(2) / expected;
        }

        rows.push(SumRow {
            sum,
            count,
            empirical,
            theoretical,
            deviation: result.deviation(sum),
        });
    }

    RunStatistics {
        strategy: result.strategy.name().to_string(),
        num_rolls: result.num_rolls,
        rows,
        max_abs_deviation: result.max_abs_deviation(),
        chi_square,
    }
}

/// Save aggregated statistics as JSON.
pub fn save_statistics(stats: &RunStatistics, path: &str) {
    if let Some(parent) = std::path::Path::new(path).parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let json = serde_json::to_string_pretty(stats).expect("Failed to serialize statistics");
    std::fs::write(path, json).expect("Failed to write statistics file");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{NUM_PAIRS, SUM_COMBINATIONS};
    use crate::simulation::strategy::Strategy;

    fn make_uniform_result(blocks: u64) -> RunResult {
        // `blocks` full passes over the outcome space.
        let mut sum_counts = [0u64; NUM_SUMS];
        for (i, &c) in SUM_COMBINATIONS.iter().enumerate() {
            sum_counts[i] = c * blocks;
        }
        RunResult {
            strategy: Strategy::Balanced,
            num_rolls: NUM_PAIRS as u64 * blocks,
            pair_counts: [blocks; NUM_PAIRS],
            sum_counts,
        }
    }

    #[test]
    fn test_aggregate_rows_complete_and_ascending() {
        let stats = aggregate_statistics(&make_uniform_result(10));
        assert_eq!(stats.rows.len(), NUM_SUMS);
        for (i, row) in stats.rows.iter().enumerate() {
            assert_eq!(row.sum as usize, i + MIN_SUM as usize);
            assert_eq!(row.count, SUM_COMBINATIONS[i] * 10);
        }
        assert_eq!(stats.num_rolls, 360);
        assert_eq!(stats.strategy, "balanced");
    }

    #[test]
    fn test_aggregate_exact_distribution_has_zero_error() {
        let stats = aggregate_statistics(&make_uniform_result(5));
        assert!(stats.max_abs_deviation < 1e-12);
        assert!(stats.chi_square < 1e-12);
        let total_empirical: f64 = stats.rows.iter().map(|r| r.empirical).sum();
        assert!((total_empirical - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_aggregate_skewed_distribution_flags_deviation() {
        // All 100 rolls landed on (1, 1).
        let mut pair_counts = [0u64; NUM_PAIRS];
        pair_counts[0] = 100;
        let mut sum_counts = [0u64; NUM_SUMS];
        sum_counts[0] = 100;
        let result = RunResult {
            strategy: Strategy::Standard,
            num_rolls: 100,
            pair_counts,
            sum_counts,
        };

        let stats = aggregate_statistics(&result);
        // Sum 2 sits at 1.0 against a theoretical 1/36.
        assert!((stats.max_abs_deviation - (1.0 - 1.0 / 36.0)).abs() < 1e-12);
        assert!(stats.chi_square > 100.0);
    }

    #[test]
    fn test_aggregate_zero_rolls() {
        let result = RunResult {
            strategy: Strategy::Standard,
            num_rolls: 0,
            pair_counts: [0; NUM_PAIRS],
            sum_counts: [0; NUM_SUMS],
        };
        let stats = aggregate_statistics(&result);
        assert_eq!(stats.num_rolls, 0);
        assert_eq!(stats.chi_square, 0.0);
        assert_eq!(stats.max_abs_deviation, 0.0);
        assert!(stats
            .rows
            .iter()
            .all(|r| r.count == 0 && r.empirical == 0.0 && r.deviation == 0.0));
    }

    #[test]
    fn test_save_load_json() {
        let stats = aggregate_statistics(&make_uniform_result(2));
        let path = "/tmp/dice_test_stats.json";
        save_statistics(&stats, path);

        let content = std::fs::read_to_string(path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed["num_rolls"], 72);
        assert_eq!(parsed["strategy"], "balanced");
        assert_eq!(parsed["rows"].as_array().unwrap().len(), NUM_SUMS);

        let _ = std::fs::remove_file(path);
    }
}
