//! The two enumeration routines.
//!
//! Both return a fresh [`DivisorSet`] on every call and keep no state
//! between calls.

use num_integer::Integer;

use crate::bound::sqrt_bound;
use crate::{require_positive, DivisorError, DivisorSet};

/// Linear scan: test every candidate in 1..=n.
///
/// Candidates are visited in increasing order, so hits come out ascending.
/// O(n) divisions; impractical much beyond 10^9.
pub fn naive_divisors(n: u64) -> Result<DivisorSet, DivisorError> {
    let n = require_positive(n)?;

    let mut divisors = Vec::new();
    for i in 1..=n {
        if n % i == 0 {
            divisors.push(i);
        }
    }

    Ok(DivisorSet::from_sorted(n, divisors))
}

/// Square-root-bounded scan.
///
/// For each divisor i <= floor(sqrt(n)) the complement n / i is also a
/// divisor. Small divisors arrive ascending and complements descending, so
/// the result is `small` followed by `large` reversed. A perfect square's
/// root is its own complement and is emitted once.
///
/// O(sqrt(n)) divisions plus O(d(n)) to join the halves.
pub fn optimized_divisors(n: u64) -> Result<DivisorSet, DivisorError> {
    let n = require_positive(n)?;
    let bound = sqrt_bound(n);

    let mut small = Vec::new();
    let mut large = Vec::new();
    for i in 1..=bound {
        let (quotient, remainder) = n.div_rem(&i);
        if remainder == 0 {
            small.push(i);
            if i != quotient {
                large.push(quotient);
            }
        }
    }

    small.reserve(large.len());
    small.extend(large.into_iter().rev());

    Ok(DivisorSet::from_sorted(n, small))
}
