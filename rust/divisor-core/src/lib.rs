//! Divisor enumeration: a linear scan over 1..=n and a scan bounded by
//! floor(sqrt(n)) that pairs each small divisor with its complement.
//!
//! Both algorithms share one signature, `fn(u64) -> Result<DivisorSet, DivisorError>`,
//! so callers can pick one through [`Strategy`] or pass the function directly.

pub mod bound;
pub mod enumerate;
pub mod factor;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use bound::sqrt_bound;
pub use enumerate::{naive_divisors, optimized_divisors};
pub use factor::{divisor_count, divisors_from_factorization, factorize, PrimePower};

/// Errors produced at the enumeration boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DivisorError {
    #[error("divisor enumeration is undefined for n = {0}")]
    InvalidArgument(i64),
}

/// Common signature of every enumeration routine.
pub type Enumerator = fn(u64) -> Result<DivisorSet, DivisorError>;

/// Ascending, duplicate-free list of all positive divisors of `n`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DivisorSet {
    n: u64,
    divisors: Vec<u64>,
}

impl DivisorSet {
    /// Wrap a list the caller has already produced in ascending order.
    pub(crate) fn from_sorted(n: u64, divisors: Vec<u64>) -> Self {
        debug_assert!(
            divisors.windows(2).all(|w| w[0] < w[1]),
            "divisors of {} are not strictly ascending",
            n
        );
        DivisorSet { n, divisors }
    }

    /// The number whose divisors these are.
    pub fn n(&self) -> u64 {
        self.n
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.divisors
    }

    /// d(n).
    pub fn len(&self) -> usize {
        self.divisors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.divisors.is_empty()
    }

    /// Membership test by binary search.
    pub fn contains(&self, d: u64) -> bool {
        self.divisors.binary_search(&d).is_ok()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, u64> {
        self.divisors.iter()
    }

    pub fn into_vec(self) -> Vec<u64> {
        self.divisors
    }
}

impl<'a> IntoIterator for &'a DivisorSet {
    type Item = &'a u64;
    type IntoIter = std::slice::Iter<'a, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.divisors.iter()
    }
}

/// The available enumeration algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Test every candidate in 1..=n.
    Naive,
    /// Test candidates up to floor(sqrt(n)) and emit complementary divisors.
    SqrtBounded,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Naive, Strategy::SqrtBounded];

    /// Asymptotic number of divisions performed.
    pub fn complexity(self) -> &'static str {
        match self {
            Strategy::Naive => "O(n)",
            Strategy::SqrtBounded => "O(√n)",
        }
    }

    /// The plain function implementing this strategy.
    pub fn enumerator(self) -> Enumerator {
        match self {
            Strategy::Naive => naive_divisors,
            Strategy::SqrtBounded => optimized_divisors,
        }
    }

    pub fn enumerate(self, n: u64) -> Result<DivisorSet, DivisorError> {
        (self.enumerator())(n)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Naive => write!(f, "Naive"),
            Strategy::SqrtBounded => write!(f, "Optimized (sqrt-bounded)"),
        }
    }
}

/// Accept a signed value from an untrusted boundary.
///
/// Divisors are only defined here for n >= 1; zero and negative values are
/// rejected rather than passed to the remainder operator.
pub fn validate_input(n: i64) -> Result<u64, DivisorError> {
    if n <= 0 {
        return Err(DivisorError::InvalidArgument(n));
    }
    Ok(n as u64)
}

/// Reject zero for the unsigned entry points.
pub(crate) fn require_positive(n: u64) -> Result<u64, DivisorError> {
    if n == 0 {
        return Err(DivisorError::InvalidArgument(0));
    }
    Ok(n)
}
