//! Utility functions for primality testing, modular arithmetic, and input parsing.
//!
//! This module provides fundamental helpers used throughout the library,
//! particularly for validating characteristics and turning user-entered text
//! into coefficient lists.

mod primality;

pub use primality::is_prime;
pub(crate) use primality::prime_divisors;

use crate::error::{Error, Result};

/// Compute the power of a base modulo a modulus using binary exponentiation.
///
/// Computes `base^exp mod modulus` in O(log exp) time. Intermediate products
/// are widened to 128 bits, so any `u64` modulus is safe.
///
/// # Panics
///
/// Panics if `modulus` is 0.
///
/// # Examples
///
/// ```
/// use gfcalc::utils::mod_pow;
///
/// assert_eq!(mod_pow(2, 10, 1000), 24);  // 2^10 = 1024, 1024 mod 1000 = 24
/// assert_eq!(mod_pow(3, 5, 7), 5);       // 3^5 = 243, 243 mod 7 = 5
/// ```
#[must_use]
pub fn mod_pow(base: u64, mut exp: u64, modulus: u64) -> u64 {
    assert!(modulus > 0, "modulus must be positive");

    if modulus == 1 {
        return 0;
    }

    let m = u128::from(modulus);
    let mut result = 1u128;
    let mut base = u128::from(base) % m;

    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % m;
        }
        exp >>= 1;
        base = base * base % m;
    }

    result as u64
}

/// Parse a comma-separated list of integer coefficients.
///
/// Whitespace around each token is ignored. Coefficients may be negative;
/// they are reduced into the field later.
///
/// # Errors
///
/// Returns [`Error::MalformedInput`] echoing the raw input if the list is
/// empty or any token is not an integer.
///
/// # Examples
///
/// ```
/// use gfcalc::utils::parse_coefficients;
///
/// assert_eq!(parse_coefficients("1, 0, -1").unwrap(), vec![1, 0, -1]);
/// assert!(parse_coefficients("1, x, 1").is_err());
/// ```
pub fn parse_coefficients(input: &str) -> Result<Vec<i64>> {
    if input.trim().is_empty() {
        return Err(Error::malformed_input(input, "no coefficients given"));
    }

    input
        .split(',')
        .map(|token| {
            let token = token.trim();
            token.parse::<i64>().map_err(|_| {
                Error::malformed_input(input, format!("`{token}` is not an integer"))
            })
        })
        .collect()
}

/// Parse a single integer value.
///
/// # Errors
///
/// Returns [`Error::MalformedInput`] if the text is not an integer.
pub fn parse_value(input: &str) -> Result<i64> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| Error::malformed_input(input, "expected a single integer"))
}
