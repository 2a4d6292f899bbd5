//! divisor-timing: average wall-clock time of the naive and sqrt-bounded
//! divisor enumerators over fixed inputs.
//!
//! Usage:
//!   divisor-timing [--runs=<N>] [--json=<path>] [--skip-naive]

use std::io;

use divisor_bench::analysis::{estimate_linear, SECONDS_PER_YEAR};
use divisor_bench::config::TimingConfig;
use divisor_bench::harness::{run_series, Progress, Series};
use divisor_bench::report::{
    format_fixed, format_row, format_scientific, save_json, write_progress, TimingReport,
};
use divisor_bench::{BenchError, ESTIMATE_TARGET};
use divisor_core::Strategy;

const RULE: &str = "========================================";

fn main() {
    env_logger::init();

    let config = match TimingConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            eprintln!("Usage: divisor-timing [--runs=<N>] [--json=<path>] [--skip-naive]");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&config) {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(config: &TimingConfig) -> Result<(), BenchError> {
    let naive = if config.skip_naive {
        None
    } else {
        print_section("(a) NAIVE ALGORITHM MEASUREMENTS");
        Some(timed_series(Strategy::Naive, &config.naive_inputs, config.runs)?)
    };

    if let Some(series) = &naive {
        print_estimate(series);
    }

    println!();
    print_section("(b) OPTIMIZED ALGORITHM MEASUREMENTS");
    let optimized = timed_series(Strategy::SqrtBounded, &config.optimized_inputs, config.runs)?;

    let report = TimingReport::build(config.runs, naive, optimized);

    println!();
    print_analysis(&report);

    if let Some(path) = &config.json_path {
        save_json(path, &report)?;
        println!("\nReport written to {}", path.display());
    }

    Ok(())
}

fn print_section(title: &str) {
    println!("{}", RULE);
    println!("{}", title);
    println!("{}", RULE);
}

/// Measure one series, printing a progress line that each result row
/// overwrites.
fn timed_series(strategy: Strategy, inputs: &[u64], runs: usize) -> Result<Series, BenchError> {
    println!("\nn (value)\t\tExecution time (s)");
    println!("------------------------------------------------");

    run_series(strategy, inputs, runs, |event| match event {
        Progress::Started(n) => write_progress(&mut io::stdout(), n),
        Progress::Finished(m) => println!("\r{}", format_row(m)),
    })
}

fn print_estimate(series: &Series) {
    println!("\n--- Time Estimation for 1×10^18 ---");
    println!("Based on linear relationship (O(n)):");
    println!("If 1×10^9 takes t seconds,");
    println!("then 1×10^18 would take approximately 10^9 × t seconds");
    println!(
        "Example: if 1e9 takes 1 second, 1e18 would take ~{:.1} years",
        1.0e9 / SECONDS_PER_YEAR
    );

    let largest = series.measurements.iter().max_by_key(|m| m.n);
    if let Some(m) = largest {
        let estimate = estimate_linear(m, ESTIMATE_TARGET);
        println!(
            "Measured: {} took {} s, so 1×10^18 would take ~{:.3e} s (~{:.1} years)",
            format_scientific(estimate.from_n),
            format_fixed(estimate.from_secs),
            estimate.seconds,
            estimate.years
        );
    }
}

fn print_analysis(report: &TimingReport) {
    print_section("ANALYSIS");
    println!("Naive Algorithm: O(n) - Linear complexity");
    println!("  Time grows proportionally with n");
    if let Some(k) = report.naive_exponent {
        println!("  Measured growth exponent: {:.3}", k);
    }
    println!("\nOptimized Algorithm: O(√n) - Square root complexity");
    println!("  Time grows proportionally with √n");
    println!("  Much more efficient for large values!");
    if let Some(k) = report.optimized_exponent {
        println!("  Measured growth exponent: {:.3}", k);
    }

    if !report.cross_checks.is_empty() {
        println!();
        for check in &report.cross_checks {
            let verdict = if check.agrees() { "agree" } else { "DISAGREE" };
            println!(
                "  d({}) naive={} optimized={} [{}]",
                format_scientific(check.n),
                check.naive_count,
                check.optimized_count,
                verdict
            );
        }
        if !report.consistent() {
            log::warn!("naive and optimized divisor counts differ");
        }
    }
}
