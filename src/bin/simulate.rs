use std::time::Instant;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use balanced_dice::chart::render_distribution;
use balanced_dice::simulation::{
    aggregate_statistics, parse_roll_count, save_statistics, simulate_run, RunStatistics, Strategy,
};
use balanced_dice::types::RunResult;

struct Args {
    num_rolls: u64,
    strategy: Strategy,
    overlay: bool,
    seed: u64,
    output: Option<String>,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut num_rolls = 1000u64;
    let mut strategy = Strategy::Standard;
    let mut overlay = false;
    let mut seed = 42u64;
    let mut output: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--rolls" => {
                i += 1;
                if i < args.len() {
                    num_rolls = parse_roll_count(&args[i]).unwrap_or_else(|e| {
                        eprintln!("{}", e);
                        std::process::exit(1);
                    });
                }
            }
            "--strategy" => {
                i += 1;
                if i < args.len() {
                    strategy = Strategy::from_spec(&args[i]).unwrap_or_else(|e| {
                        eprintln!("{}", e);
                        std::process::exit(1);
                    });
                }
            }
            "--overlay" => {
                overlay = true;
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    seed = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --seed value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--output" => {
                i += 1;
                if i < args.len() {
                    output = Some(args[i].clone());
                }
            }
            "--help" | "-h" => {
                println!(
                    "Usage: dice-simulate [--rolls N] [--strategy SPEC] [--overlay] [--seed S] [--output DIR]"
                );
                println!();
                println!("Options:");
                println!("  --rolls N        Number of rolls (default: 1000)");
                println!("  --strategy SPEC  standard | balanced | s | b (default: standard)");
                println!("  --overlay        Also run the other strategy and overlay the charts");
                println!("  --seed S         RNG seed (default: 42)");
                println!("  --output DIR     Write per-run statistics JSON to DIR");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!(
                    "Usage: dice-simulate [--rolls N] [--strategy SPEC] [--overlay] [--seed S] [--output DIR]"
                );
                std::process::exit(1);
            }
        }
        i += 1;
    }

    Args {
        num_rolls,
        strategy,
        overlay,
        seed,
        output,
    }
}

fn run(strategy: Strategy, num_rolls: u64, seed: u64) -> RunResult {
    let mut rng = SmallRng::seed_from_u64(seed);
    simulate_run(strategy, num_rolls, &mut rng).unwrap_or_else(|e| {
        eprintln!("Simulation failed: {}", e);
        std::process::exit(1);
    })
}

fn section(title: &str) {
    println!("── {} {}", title, "─".repeat(46usize.saturating_sub(title.len())));
}

fn print_frequency_table(stats: &RunStatistics) {
    println!("  Sum    Count  Empirical  Theoretical  Deviation");
    println!("  {}", "─".repeat(48));
    for row in &stats.rows {
        println!(
            "  {:>3} {:>8}     {:.4}       {:.4}    {:+.4}",
            row.sum, row.count, row.empirical, row.theoretical, row.deviation
        );
    }
    println!("  {}", "─".repeat(48));
    println!("  Max |deviation|: {:.5}", stats.max_abs_deviation);
    println!("  χ² (10 df):      {:.2}", stats.chi_square);
}

fn main() {
    let args = parse_args();

    println!(
        "Dice Roll Simulation ({} rolls, {} strategy)",
        args.num_rolls,
        args.strategy.name()
    );
    println!("  Seed: {}", args.seed);
    println!();

    let t0 = Instant::now();
    let result = run(args.strategy, args.num_rolls, args.seed);
    let elapsed = t0.elapsed();

    let per_roll_us = elapsed.as_secs_f64() * 1e6 / args.num_rolls as f64;
    println!("  Elapsed:   {:.1} ms", elapsed.as_secs_f64() * 1000.0);
    println!("  Per roll:  {:.2} \u{00b5}s", per_roll_us);
    println!();

    let stats = aggregate_statistics(&result);
    section(&format!("{} run", args.strategy.name()));
    print_frequency_table(&stats);
    println!();

    // Overlay: the same roll count under the other strategy, same seed.
    let overlay_result = if args.overlay {
        let other = run(args.strategy.other(), args.num_rolls, args.seed);
        let other_stats = aggregate_statistics(&other);
        section(&format!("{} run (overlay)", other.strategy.name()));
        print_frequency_table(&other_stats);
        println!();
        Some(other)
    } else {
        None
    };

    let mut series: Vec<(&str, &RunResult)> = vec![(args.strategy.name(), &result)];
    if let Some(ref other) = overlay_result {
        series.push((other.strategy.name(), other));
    }
    section("Sum distribution");
    println!("{}", render_distribution(&series));

    if let Some(ref output_dir) = args.output {
        let path = format!("{}/run_statistics.json", output_dir);
        save_statistics(&stats, &path);
        println!("  Statistics saved: {}", path);
        if let Some(ref other) = overlay_result {
            let overlay_path = format!("{}/overlay_statistics.json", output_dir);
            save_statistics(&aggregate_statistics(other), &overlay_path);
            println!("  Overlay saved:    {}", overlay_path);
        }
    }
}
