//! Numbers derived from the raw timings.

use serde::{Deserialize, Serialize};

use crate::harness::Measurement;

/// 365-day year in seconds.
pub const SECONDS_PER_YEAR: f64 = 365.0 * 24.0 * 3600.0;

/// Linear extrapolation of a measured time to a larger input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    /// Input the extrapolation starts from.
    pub from_n: u64,
    /// Mean time measured at `from_n` (seconds).
    pub from_secs: f64,
    /// Input extrapolated to.
    pub target_n: u64,
    /// Predicted time at `target_n` (seconds).
    pub seconds: f64,
    /// The same prediction in years.
    pub years: f64,
}

/// Scale a measurement by target_n / n, as an O(n) algorithm would.
pub fn estimate_linear(measurement: &Measurement, target_n: u64) -> Estimate {
    let factor = target_n as f64 / measurement.n as f64;
    let seconds = measurement.mean_secs * factor;
    Estimate {
        from_n: measurement.n,
        from_secs: measurement.mean_secs,
        target_n,
        seconds,
        years: seconds / SECONDS_PER_YEAR,
    }
}

/// Least-squares slope of ln(mean time) against ln(n).
///
/// An O(n^k) algorithm should show a slope near k. Points with a zero time
/// are skipped; returns `None` with fewer than two usable points or when
/// every point has the same n.
pub fn empirical_exponent(measurements: &[Measurement]) -> Option<f64> {
    let points: Vec<(f64, f64)> = measurements
        .iter()
        .filter(|m| m.n > 0 && m.mean_secs > 0.0)
        .map(|m| ((m.n as f64).ln(), m.mean_secs.ln()))
        .collect();

    if points.len() < 2 {
        return None;
    }

    let count = points.len() as f64;
    let mean_x = points.iter().map(|p| p.0).sum::<f64>() / count;
    let mean_y = points.iter().map(|p| p.1).sum::<f64>() / count;

    let mut cov = 0.0;
    let mut var = 0.0;
    for &(x, y) in &points {
        cov += (x - mean_x) * (y - mean_y);
        var += (x - mean_x) * (x - mean_x);
    }

    if var == 0.0 {
        return None;
    }
    Some(cov / var)
}

/// Divisor counts reported by both series for the same input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossCheck {
    pub n: u64,
    pub naive_count: usize,
    pub optimized_count: usize,
}

impl CrossCheck {
    pub fn agrees(&self) -> bool {
        self.naive_count == self.optimized_count
    }
}

/// Pair up inputs measured by both strategies.
pub fn cross_check(naive: &[Measurement], optimized: &[Measurement]) -> Vec<CrossCheck> {
    naive
        .iter()
        .filter_map(|a| {
            optimized.iter().find(|b| b.n == a.n).map(|b| CrossCheck {
                n: a.n,
                naive_count: a.divisor_count,
                optimized_count: b.divisor_count,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn synthetic(n: u64, mean_secs: f64, divisor_count: usize) -> Measurement {
        Measurement {
            n,
            runs: 1,
            mean_secs,
            min_secs: mean_secs,
            max_secs: mean_secs,
            divisor_count,
        }
    }

    #[test]
    fn test_estimate_linear() {
        let m = synthetic(1_000_000_000, 2.0, 100);
        let est = estimate_linear(&m, 1_000_000_000_000_000_000);
        assert!((est.seconds - 2.0e9).abs() < 1.0);
        assert!((est.years - 2.0e9 / SECONDS_PER_YEAR).abs() < 1e-6);
        assert_eq!(est.from_n, 1_000_000_000);
        assert_eq!(est.target_n, 1_000_000_000_000_000_000);
    }

    #[test]
    fn test_one_second_at_1e9_is_about_31_7_years() {
        let m = synthetic(1_000_000_000, 1.0, 100);
        let est = estimate_linear(&m, 1_000_000_000_000_000_000);
        assert!((est.years - 31.71).abs() < 0.01, "years = {}", est.years);
        assert_eq!(format!("{:.1}", est.years), "31.7");
    }

    #[test]
    fn test_exponent_linear() {
        let data: Vec<Measurement> = [1e6, 1e7, 1e8, 1e9]
            .iter()
            .map(|&n| synthetic(n as u64, n * 3e-9, 1))
            .collect();
        let k = empirical_exponent(&data).unwrap();
        assert!((k - 1.0).abs() < 1e-9, "slope = {}", k);
    }

    #[test]
    fn test_exponent_square_root() {
        let data: Vec<Measurement> = [1e8, 1e9, 1e12, 1e17, 1e18]
            .iter()
            .map(|&n: &f64| synthetic(n as u64, n.sqrt() * 1e-9, 1))
            .collect();
        let k = empirical_exponent(&data).unwrap();
        assert!((k - 0.5).abs() < 1e-9, "slope = {}", k);
    }

    #[test]
    fn test_exponent_needs_two_points() {
        assert_eq!(empirical_exponent(&[]), None);
        assert_eq!(empirical_exponent(&[synthetic(10, 1.0, 4)]), None);
        assert_eq!(
            empirical_exponent(&[synthetic(10, 1.0, 4), synthetic(10, 2.0, 4)]),
            None
        );
        // zero timings are dropped before fitting
        assert_eq!(
            empirical_exponent(&[synthetic(10, 0.0, 4), synthetic(100, 1.0, 9)]),
            None
        );
    }

    #[test]
    fn test_cross_check() {
        let naive = vec![synthetic(1_000_000, 0.1, 49), synthetic(100_000_000, 1.0, 81)];
        let optimized = vec![synthetic(100_000_000, 0.001, 81), synthetic(1_000_000_000_000, 0.01, 169)];
        let checks = cross_check(&naive, &optimized);
        assert_eq!(checks.len(), 1);
        assert_eq!(checks[0].n, 100_000_000);
        assert!(checks[0].agrees());

        let mismatch = CrossCheck {
            n: 4,
            naive_count: 3,
            optimized_count: 4,
        };
        assert!(!mismatch.agrees());
    }
}
