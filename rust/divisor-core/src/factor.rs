//! Prime factorization by trial division, and divisor generation from it.
//!
//! This path never scans all of 1..=n, so it serves as an independent
//! reference for inputs where the naive scan is out of reach (10^18 and up).

use serde::{Deserialize, Serialize};

use crate::{require_positive, DivisorError, DivisorSet};

/// A prime and the exponent with which it divides n.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimePower {
    pub prime: u64,
    pub exponent: u32,
}

/// Trial division by 2, then odd candidates up to sqrt of the cofactor.
///
/// Returns prime powers in ascending prime order; n = 1 has none.
pub fn factorize(n: u64) -> Result<Vec<PrimePower>, DivisorError> {
    let mut remaining = require_positive(n)?;
    let mut factors = Vec::new();

    let twos = remaining.trailing_zeros();
    if twos > 0 {
        factors.push(PrimePower {
            prime: 2,
            exponent: twos,
        });
        remaining >>= twos;
    }

    let mut divisor = 3u64;
    // divisor <= remaining / divisor keeps divisor^2 from overflowing
    while divisor <= remaining / divisor {
        let mut exponent = 0u32;
        while remaining % divisor == 0 {
            remaining /= divisor;
            exponent += 1;
        }
        if exponent > 0 {
            factors.push(PrimePower {
                prime: divisor,
                exponent,
            });
        }
        divisor += 2;
    }

    if remaining > 1 {
        factors.push(PrimePower {
            prime: remaining,
            exponent: 1,
        });
    }

    Ok(factors)
}

/// d(n) = product of (e + 1) over the prime powers of n.
pub fn divisor_count(n: u64) -> Result<u64, DivisorError> {
    Ok(factorize(n)?
        .iter()
        .map(|pp| u64::from(pp.exponent) + 1)
        .product())
}

/// All divisors of n built as products of its prime powers, sorted.
pub fn divisors_from_factorization(n: u64) -> Result<DivisorSet, DivisorError> {
    let factors = factorize(n)?;

    let mut divisors = vec![1u64];
    for pp in &factors {
        let existing = divisors.len();
        let mut power = 1u64;
        for _ in 0..pp.exponent {
            // every product here divides n, so it cannot overflow
            power *= pp.prime;
            for idx in 0..existing {
                divisors.push(divisors[idx] * power);
            }
        }
    }
    divisors.sort_unstable();

    log::debug!(
        "n={} has {} prime factor(s), {} divisors",
        n,
        factors.len(),
        divisors.len()
    );
    Ok(DivisorSet::from_sorted(n, divisors))
}
