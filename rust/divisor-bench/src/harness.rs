//! Repeated wall-clock measurement of a single enumerator.

use std::hint::black_box;
use std::time::Instant;

use divisor_core::{Enumerator, Strategy};
use serde::{Deserialize, Serialize};

use crate::BenchError;

/// Averaged timing of one enumerator on one input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// The input that was enumerated.
    pub n: u64,
    /// Number of timed calls.
    pub runs: usize,
    /// Mean wall-clock time per call (seconds).
    pub mean_secs: f64,
    /// Fastest call (seconds).
    pub min_secs: f64,
    /// Slowest call (seconds).
    pub max_secs: f64,
    /// d(n) as returned by the last call.
    pub divisor_count: usize,
}

impl Measurement {
    /// Summarise per-run times. `times_secs` must be non-empty.
    fn from_times(n: u64, times_secs: &[f64], divisor_count: usize) -> Self {
        let runs = times_secs.len();
        let total: f64 = times_secs.iter().sum();
        let min_secs = times_secs.iter().copied().fold(f64::INFINITY, f64::min);
        let max_secs = times_secs.iter().copied().fold(0.0, f64::max);
        Measurement {
            n,
            runs,
            mean_secs: total / runs as f64,
            min_secs,
            max_secs,
            divisor_count,
        }
    }
}

/// All measurements for one strategy, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub strategy: Strategy,
    pub measurements: Vec<Measurement>,
}

/// Time `runs` independent calls of `enumerator(n)` and average them.
///
/// Every call builds its own divisor list; the input and the result both go
/// through `black_box` so repeated identical calls are not folded away.
pub fn measure_time(
    enumerator: Enumerator,
    n: u64,
    runs: usize,
) -> Result<Measurement, BenchError> {
    if runs == 0 {
        return Err(BenchError::InvalidConfig(
            "runs must be at least 1".to_string(),
        ));
    }

    let mut times_secs = Vec::with_capacity(runs);
    let mut divisor_count = 0;

    for run in 0..runs {
        let start = Instant::now();
        let result = enumerator(black_box(n))?;
        let elapsed = start.elapsed().as_secs_f64();

        divisor_count = black_box(result).len();
        times_secs.push(elapsed);
        log::debug!("n={} run {}/{}: {:.6}s", n, run + 1, runs, elapsed);
    }

    Ok(Measurement::from_times(n, &times_secs, divisor_count))
}

/// Event passed to the `run_series` callback.
#[derive(Debug, Clone, Copy)]
pub enum Progress<'a> {
    /// About to time this input.
    Started(u64),
    /// Finished timing an input.
    Finished(&'a Measurement),
}

/// Measure `strategy` on each input in turn, reporting progress.
pub fn run_series(
    strategy: Strategy,
    inputs: &[u64],
    runs: usize,
    mut on_progress: impl FnMut(Progress<'_>),
) -> Result<Series, BenchError> {
    let enumerator = strategy.enumerator();
    let mut measurements = Vec::with_capacity(inputs.len());

    for &n in inputs {
        on_progress(Progress::Started(n));
        let m = measure_time(enumerator, n, runs)?;
        on_progress(Progress::Finished(&m));
        log::info!(
            "{} n={} mean={:.6}s over {} runs (d(n)={})",
            strategy,
            n,
            m.mean_secs,
            m.runs,
            m.divisor_count
        );
        measurements.push(m);
    }

    Ok(Series {
        strategy,
        measurements,
    })
}
