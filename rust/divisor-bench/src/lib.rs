//! divisor-bench: wall-clock timing of the naive and sqrt-bounded divisor
//! enumerators over a fixed set of inputs.
//!
//! The library half holds the measurement loop, the derived analysis
//! (linear extrapolation, empirical exponents, cross-checks) and the JSON
//! report; `divisor-timing` prints it all.

pub mod analysis;
pub mod config;
pub mod harness;
pub mod report;

use divisor_core::DivisorError;

/// Inputs timed with the linear scan.
pub const NAIVE_INPUTS: [u64; 4] = [1_000_000, 10_000_000, 100_000_000, 1_000_000_000];

/// Inputs timed with the sqrt-bounded scan.
pub const OPTIMIZED_INPUTS: [u64; 5] = [
    100_000_000,
    1_000_000_000,
    1_000_000_000_000,
    100_000_000_000_000_000,
    1_000_000_000_000_000_000,
];

/// Repetitions averaged per input.
pub const DEFAULT_RUNS: usize = 10;

/// Input the naive timings are extrapolated to.
pub const ESTIMATE_TARGET: u64 = 1_000_000_000_000_000_000;

/// Errors that can occur while timing or reporting.
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    #[error(transparent)]
    Divisor(#[from] DivisorError),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
