//! Harness configuration parsed from `--key=value` arguments.
//!
//! Options:
//!   --runs=<N>        Timed calls averaged per input (default: 10)
//!   --json=<path>     Also write the report as pretty JSON
//!   --skip-naive      Skip the O(n) series and its extrapolation
//!
//! The benchmarked inputs themselves are fixed.

use std::path::PathBuf;

use crate::{BenchError, DEFAULT_RUNS, NAIVE_INPUTS, OPTIMIZED_INPUTS};

#[derive(Debug, Clone, PartialEq)]
pub struct TimingConfig {
    pub runs: usize,
    pub naive_inputs: Vec<u64>,
    pub optimized_inputs: Vec<u64>,
    pub json_path: Option<PathBuf>,
    pub skip_naive: bool,
}

impl Default for TimingConfig {
    fn default() -> Self {
        TimingConfig {
            runs: DEFAULT_RUNS,
            naive_inputs: NAIVE_INPUTS.to_vec(),
            optimized_inputs: OPTIMIZED_INPUTS.to_vec(),
            json_path: None,
            skip_naive: false,
        }
    }
}

impl TimingConfig {
    /// Parse from an argument list that excludes the program name.
    pub fn from_args<I>(args: I) -> Result<Self, BenchError>
    where
        I: IntoIterator<Item = String>,
    {
        let args: Vec<String> = args.into_iter().collect();
        let mut config = TimingConfig::default();

        if let Some(value) = args.iter().find_map(|a| a.strip_prefix("--runs=")) {
            config.runs = value
                .parse::<usize>()
                .map_err(|e| BenchError::InvalidConfig(format!("--runs={}: {}", value, e)))?;
            if config.runs == 0 {
                return Err(BenchError::InvalidConfig(
                    "--runs must be at least 1".to_string(),
                ));
            }
        }

        config.json_path = args
            .iter()
            .find_map(|a| a.strip_prefix("--json="))
            .map(PathBuf::from);

        config.skip_naive = args.iter().any(|a| a == "--skip-naive");

        for arg in &args {
            let known = arg.starts_with("--runs=")
                || arg.starts_with("--json=")
                || arg == "--skip-naive";
            if !known {
                log::warn!("ignoring unrecognised argument {:?}", arg);
            }
        }

        Ok(config)
    }
}
