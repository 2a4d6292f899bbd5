//! Exact floor square root for the sqrt-bounded scan.

use num_traits::ToPrimitive;

/// floor(sqrt(n)) for any `u64`.
///
/// The f64 estimate loses precision above 2^53, so it can land one above or
/// below the true root near perfect squares (and rounds up to 2^32 at
/// `u64::MAX`). The estimate is corrected until s² <= n < (s+1)².
pub fn sqrt_bound(n: u64) -> u64 {
    let estimate = n.to_f64().map_or(0, |x| x.sqrt() as u64);
    let mut s = estimate;

    while !square_at_most(s, n) {
        s -= 1;
    }
    while square_at_most(s + 1, n) {
        s += 1;
    }

    if s != estimate {
        log::trace!("sqrt estimate for n={} corrected from {} to {}", n, estimate, s);
    }
    s
}

/// s * s <= n, treating an overflowing square as larger than any `u64`.
fn square_at_most(s: u64, n: u64) -> bool {
    s.checked_mul(s).is_some_and(|sq| sq <= n)
}
