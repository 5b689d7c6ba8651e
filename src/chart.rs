//! Text bar charts for sum-distribution snapshots.
//!
//! Renders one labelled bar per sum 2..=12 per series, ascending, with
//! zero-count buckets included. Bars scale against the largest count across
//! all series; overlaid series use distinct fill glyphs and get a legend.

use std::fmt::Write;

use crate::constants::{sum_index, MAX_SUM, MIN_SUM};
use crate::types::RunResult;

/// Width of the longest bar, in glyphs.
const BAR_WIDTH: u64 = 40;

/// Fill glyphs, one per overlaid series.
const FILL_GLYPHS: [char; 2] = ['█', '░'];

/// Render a bar chart of the per-sum counts for one or more runs.
pub fn render_distribution(series: &[(&str, &RunResult)]) -> String {
    let max_count = series
        .iter()
        .flat_map(|(_, result)| result.sum_counts.iter().copied())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for sum in MIN_SUM..=MAX_SUM {
        for (si, (_, result)) in series.iter().enumerate() {
            let count = result.sum_counts[sum_index(sum)];
            let len = if max_count == 0 {
                0
            } else {
                count * BAR_WIDTH / max_count
            };
            let glyph = FILL_GLYPHS[si % FILL_GLYPHS.len()];
            let bar = glyph.to_string().repeat(len as usize);
            if si == 0 {
                let _ = writeln!(
                    out,
                    "  {:>2} │{:<width$} {:>8}",
                    sum,
                    bar,
                    count,
                    width = BAR_WIDTH as usize
                );
            } else {
                let _ = writeln!(
                    out,
                    "     │{:<width$} {:>8}",
                    bar,
                    count,
                    width = BAR_WIDTH as usize
                );
            }
        }
    }

    if series.len() > 1 {
        let legend: Vec<String> = series
            .iter()
            .enumerate()
            .map(|(si, (label, _))| format!("{} {}", FILL_GLYPHS[si % FILL_GLYPHS.len()], label))
            .collect();
        let _ = writeln!(out);
        let _ = writeln!(out, "  {}", legend.join("   "));
    }

    out
}
