//! Timing report: formatting helpers and JSON persistence.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::analysis::{cross_check, empirical_exponent, estimate_linear, CrossCheck, Estimate};
use crate::harness::{Measurement, Series};
use crate::{BenchError, ESTIMATE_TARGET};

/// Everything one run of the harness measured and derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingReport {
    /// Timed calls averaged per input.
    pub runs: usize,
    pub naive: Option<Series>,
    pub optimized: Series,
    /// Extrapolation of the largest naive input to 10^18.
    pub estimate: Option<Estimate>,
    pub naive_exponent: Option<f64>,
    pub optimized_exponent: Option<f64>,
    pub cross_checks: Vec<CrossCheck>,
}

impl TimingReport {
    /// Derive the analysis fields from the measured series.
    pub fn build(runs: usize, naive: Option<Series>, optimized: Series) -> Self {
        let estimate = naive.as_ref().and_then(|s| {
            s.measurements
                .iter()
                .max_by_key(|m| m.n)
                .map(|m| estimate_linear(m, ESTIMATE_TARGET))
        });
        let naive_exponent = naive.as_ref().and_then(|s| empirical_exponent(&s.measurements));
        let optimized_exponent = empirical_exponent(&optimized.measurements);
        let cross_checks = naive
            .as_ref()
            .map(|s| cross_check(&s.measurements, &optimized.measurements))
            .unwrap_or_default();

        TimingReport {
            runs,
            naive,
            optimized,
            estimate,
            naive_exponent,
            optimized_exponent,
            cross_checks,
        }
    }

    /// True when every input measured by both strategies got the same d(n).
    pub fn consistent(&self) -> bool {
        self.cross_checks.iter().all(CrossCheck::agrees)
    }
}

/// Write any serializable value as pretty JSON.
pub fn save_json<T: Serialize>(path: &Path, data: &T) -> Result<(), BenchError> {
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    log::info!("wrote {}", path.display());
    Ok(())
}

pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, BenchError> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// Scientific notation with six mantissa digits and a signed two-digit
/// exponent, e.g. `1.000000e+06`.
pub fn format_scientific(n: u64) -> String {
    let raw = format!("{:.6e}", n as f64);
    match raw.split_once('e') {
        Some((mantissa, exp)) => {
            let exp: i32 = exp.parse().unwrap_or(0);
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exp.abs())
        }
        None => raw,
    }
}

/// Fixed notation with six decimals.
pub fn format_fixed(secs: f64) -> String {
    format!("{:.6}", secs)
}

/// One table row: n as a plain integer, then the mean time.
pub fn format_row(m: &Measurement) -> String {
    format!("{}\t\t{}", m.n, format_fixed(m.mean_secs))
}

/// Print the progress line for `n` without a newline and flush it.
///
/// The row printed after measuring starts with `\r` and overwrites it. A
/// failed flush only delays the line, so it is logged and not returned.
pub fn write_progress(out: &mut impl Write, n: u64) {
    if let Err(e) = write!(out, "Testing n = {}...", n).and_then(|_| out.flush()) {
        log::debug!("progress line for n={} not flushed: {}", n, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use divisor_core::Strategy;
    use std::io;

    fn measurement(n: u64, mean_secs: f64, divisor_count: usize) -> Measurement {
        Measurement {
            n,
            runs: 2,
            mean_secs,
            min_secs: mean_secs,
            max_secs: mean_secs,
            divisor_count,
        }
    }

    #[test]
    fn test_format_scientific() {
        assert_eq!(format_scientific(1_000_000), "1.000000e+06");
        assert_eq!(format_scientific(100_000_000_000_000_000), "1.000000e+17");
        assert_eq!(format_scientific(1_000_000_000_000_000_000), "1.000000e+18");
        assert_eq!(format_scientific(28), "2.800000e+01");
        assert_eq!(format_scientific(1), "1.000000e+00");
    }

    #[test]
    fn test_format_fixed() {
        assert_eq!(format_fixed(0.0000123), "0.000012");
        assert_eq!(format_fixed(1.5), "1.500000");
    }

    #[test]
    fn test_build_without_naive() {
        let optimized = Series {
            strategy: Strategy::SqrtBounded,
            measurements: vec![measurement(100, 1e-6, 9)],
        };
        let report = TimingReport::build(2, None, optimized);
        assert!(report.estimate.is_none());
        assert!(report.naive_exponent.is_none());
        assert!(report.optimized_exponent.is_none());
        assert!(report.cross_checks.is_empty());
        assert!(report.consistent());
    }

    #[test]
    fn test_build_extrapolates_largest_naive_input() {
        let naive = Series {
            strategy: Strategy::Naive,
            measurements: vec![measurement(1_000_000, 0.001, 49), measurement(100_000_000, 0.1, 81)],
        };
        let optimized = Series {
            strategy: Strategy::SqrtBounded,
            measurements: vec![measurement(100_000_000, 0.00001, 81)],
        };
        let report = TimingReport::build(2, Some(naive), optimized);
        let estimate = report.estimate.as_ref().unwrap();
        assert_eq!(estimate.from_n, 100_000_000);
        assert_eq!(estimate.target_n, ESTIMATE_TARGET);
        assert!((report.naive_exponent.unwrap() - 1.0).abs() < 1e-9);
        assert_eq!(report.cross_checks.len(), 1);
        assert!(report.consistent());
    }

    #[test]
    fn test_format_row_prints_plain_integer() {
        assert_eq!(format_row(&measurement(1_000_000, 0.00123449, 49)), "1000000\t\t0.001234");
        assert_eq!(
            format_row(&measurement(1_000_000_000_000_000_000, 2.5, 361)),
            "1000000000000000000\t\t2.500000"
        );
    }

    #[test]
    fn test_write_progress() {
        let mut out = Vec::new();
        write_progress(&mut out, 100_000_000);
        assert_eq!(String::from_utf8(out).unwrap(), "Testing n = 100000000...");
    }

    struct FailingFlush(Vec<u8>);

    impl Write for FailingFlush {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_write_progress_survives_flush_error() {
        let mut out = FailingFlush(Vec::new());
        write_progress(&mut out, 28);
        assert_eq!(out.0, b"Testing n = 28...");
    }
}
