//! # Prime-Based Capacity Sizing
//!
//! Trial-division primality testing and the smallest-prime-at-least search
//! used to size the backing array of
//! [`DedupSet`](crate::hashing::dedup::DedupSet). A prime slot count makes
//! the double-hashing probe stride coprime to the table size, so every
//! probe sequence visits every slot before repeating.
//!
//! Note: the primality test here treats every candidate up to 3 as prime,
//! **including 1**. The sizing search depends on that rule; it is not a
//! general-purpose number-theory routine.

use crate::error::{Error, Result};

/// Returns `true` if `n` is prime under trial division.
///
/// Candidates `<= 3` are all accepted, including 1. Callers that need
/// mathematical primality must reject 1 themselves.
///
/// # Examples
/// ```
/// use lcs_all::hashing::primes::is_prime;
///
/// assert!(is_prime(2));
/// assert!(is_prime(13));
/// assert!(!is_prime(15));
/// ```
pub fn is_prime(n: usize) -> bool {
    if n <= 3 {
        return true;
    }
    let mut divisor = 2;
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 1;
    }
    true
}

/// Returns the smallest `m` with `m >= ceil(n / load_factor)` that
/// [`is_prime`] accepts.
///
/// `n` is the number of entries the caller wants room for and
/// `load_factor` the target occupancy ratio.
///
/// # Panics
///
/// Panics if `n == 0` or `load_factor` is outside `(0.0, 1.0]`.
///
/// # Errors
///
/// Returns [`Error::Overflow`] if the scaled request `n / load_factor`
/// does not fit in a `usize`, or if the upward search for a prime would
/// run past `usize::MAX`.
///
/// # Examples
/// ```
/// use lcs_all::hashing::primes::smallest_prime_at_least;
///
/// assert_eq!(smallest_prime_at_least(8, 1.0).unwrap(), 11);
/// assert_eq!(smallest_prime_at_least(10, 0.5).unwrap(), 23);
/// ```
pub fn smallest_prime_at_least(n: usize, load_factor: f64) -> Result<usize> {
    assert!(n >= 1, "capacity request must be at least 1");
    assert!(
        load_factor > 0.0 && load_factor <= 1.0,
        "load factor must be in (0, 1]"
    );

    let scaled = (n as f64 / load_factor).ceil();
    if !scaled.is_finite() || scaled >= usize::MAX as f64 {
        return Err(Error::overflow("scaling capacity by the load factor"));
    }

    let mut candidate = scaled as usize;
    loop {
        if is_prime(candidate) {
            return Ok(candidate);
        }
        candidate = candidate
            .checked_add(1)
            .ok_or_else(|| Error::overflow("searching for the next prime capacity"))?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_prime::nt_funcs::is_prime64;

    #[test]
    fn candidates_up_to_three_are_accepted() {
        assert!(is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(is_prime(5));
        assert!(!is_prime(9));
    }

    #[test]
    fn trial_division_matches_reference_above_three() {
        for n in 4..5000usize {
            assert_eq!(is_prime(n), is_prime64(n as u64), "disagreement at {n}");
        }
    }

    #[test]
    fn returns_the_smallest_qualifying_candidate() {
        assert_eq!(smallest_prime_at_least(1, 1.0).unwrap(), 1);
        assert_eq!(smallest_prime_at_least(4, 1.0).unwrap(), 5);
        assert_eq!(smallest_prime_at_least(14, 1.0).unwrap(), 17);
        assert_eq!(smallest_prime_at_least(9, 0.75).unwrap(), 13);
        for n in 1..200usize {
            let m = smallest_prime_at_least(n, 1.0).unwrap();
            assert!(m >= n);
            for skipped in n..m {
                assert!(!is_prime(skipped), "{skipped} was skipped for n = {n}");
            }
        }
    }

    #[test]
    fn load_factor_scales_the_request() {
        // 10 entries at half occupancy need at least 20 slots.
        let m = smallest_prime_at_least(10, 0.5).unwrap();
        assert_eq!(m, 23);
        assert!(is_prime64(m as u64));
    }

    #[test]
    fn oversized_requests_error_instead_of_wrapping() {
        let err = smallest_prime_at_least(usize::MAX, 0.5).unwrap_err();
        assert!(matches!(err, Error::Overflow(_)));
    }

    #[test]
    #[should_panic(expected = "load factor")]
    fn rejects_a_zero_load_factor() {
        let _ = smallest_prime_at_least(10, 0.0);
    }

    #[test]
    #[should_panic(expected = "at least 1")]
    fn rejects_an_empty_request() {
        let _ = smallest_prime_at_least(0, 1.0);
    }
}
