//! Primality testing and small-integer factoring.
//!
//! This module provides:
//! - Deterministic Miller-Rabin primality testing over `u64`
//! - Distinct prime divisors of a machine-sized integer (used by the Rabin
//!   irreducibility criterion)

use super::mod_pow;

/// Test if a number is prime using the Miller-Rabin primality test.
///
/// For n < 2^64, this is deterministic (no false positives) using the
/// first twelve primes as witnesses.
///
/// # Examples
///
/// ```
/// use gfcalc::utils::is_prime;
///
/// assert!(is_prime(2));
/// assert!(is_prime(3));
/// assert!(!is_prime(4));
/// assert!(is_prime(7));
/// assert!(!is_prime(9));
/// assert!(is_prime(97));
/// assert!(!is_prime(100));
/// ```
#[must_use]
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 || n == 3 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    if n < 9 {
        return true;
    }
    if n % 3 == 0 {
        return false;
    }

    let witnesses: &[u64] = &[2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

    // Write n-1 as 2^r * d where d is odd
    let n_minus_1 = n - 1;
    let r = n_minus_1.trailing_zeros();
    let d = n_minus_1 >> r;
    let wide_n = u128::from(n);

    'witness: for &a in witnesses {
        if a >= n {
            continue;
        }

        let mut x = mod_pow(a, d, n);

        if x == 1 || x == n_minus_1 {
            continue 'witness;
        }

        for _ in 0..(r - 1) {
            x = (u128::from(x) * u128::from(x) % wide_n) as u64;
            if x == n_minus_1 {
                continue 'witness;
            }
        }

        return false;
    }

    true
}

/// Distinct prime divisors of `n` in increasing order.
///
/// Returns an empty list for n < 2.
#[must_use]
pub(crate) fn prime_divisors(mut n: usize) -> Vec<usize> {
    let mut primes = Vec::new();
    let mut d = 2;

    while d <= n / d {
        if n % d == 0 {
            primes.push(d);
            while n % d == 0 {
                n /= d;
            }
        }
        d += 1;
    }

    if n > 1 {
        primes.push(n);
    }

    primes
}
