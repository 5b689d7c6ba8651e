//! Roll simulation and statistics.
//!
//! - [`strategy`]: Strategy selection and CLI-spec parsing
//! - [`engine`]: Core roll generation (standard and balanced)
//! - [`tracker`]: Running outcome counts for a single run
//! - [`statistics`]: Per-sum statistics from run snapshots
//! - [`convergence`]: Repeated-trial comparison of the two strategies

pub mod convergence;
pub mod engine;
pub mod statistics;
pub mod strategy;
pub mod tracker;

// Re-export commonly used items
pub use convergence::{compare_strategies, ConvergenceReport, StrategyConvergence};
pub use engine::{pair_deficits, roll_once, simulate_batch, simulate_run};
pub use statistics::{aggregate_statistics, save_statistics, RunStatistics, SumRow};
pub use strategy::{parse_roll_count, parse_trial_count, Strategy};
pub use tracker::DistributionTracker;
