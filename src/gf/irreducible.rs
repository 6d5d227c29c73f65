//! Irreducibility testing over GF(p).
//!
//! [`is_irreducible`] implements Ben-Or's test: a polynomial f of degree n
//! is irreducible if and only if gcd(f, x^(p^i) - x) = 1 for every
//! 1 ≤ i ≤ ⌊n/2⌋. It is used to validate extension moduli and drives the
//! irreducible polynomial search.
//!
//! [`is_irreducible_rabin`] is an independent check based on Rabin's
//! criterion:
//! 1. x^(p^n) ≡ x (mod f)
//! 2. gcd(x^(p^(n/q)) - x, f) = 1 for each prime divisor q of n
//!
//! Both accept coefficients from the highest degree down, already reduced
//! into [0, p).

use super::exp::pow_mod;
use super::reduce::{gcd, monic};
use super::ring::{degree, is_zero, reduce_coefficients, sub};
use crate::utils::prime_divisors;

const X: [u64; 2] = [1, 0];

/// Test whether a polynomial is irreducible over GF(p) using Ben-Or's algorithm.
///
/// Returns `false` for zero and constant polynomials. Linear polynomials are
/// always irreducible. A polynomial of degree > 1 with zero constant term is
/// divisible by x and rejected immediately.
///
/// # Example
///
/// ```
/// use gfcalc::gf::is_irreducible;
///
/// assert!(is_irreducible(2, &[1, 0, 1, 1]));  // x^3 + x + 1
/// assert!(!is_irreducible(2, &[1, 0, 0, 1])); // x^3 + 1 = (x + 1)(x^2 + x + 1)
/// assert!(is_irreducible(3, &[1, 0, 1]));     // x^2 + 1
/// assert!(!is_irreducible(5, &[1, 0, 1]));    // x^2 + 1 = (x + 2)(x + 3)
/// ```
#[must_use]
pub fn is_irreducible(p: u64, coeffs: &[u64]) -> bool {
    let f = reduce_coefficients(coeffs, p);
    if is_zero(&f) {
        return false;
    }

    let n = degree(&f);
    match n {
        0 => return false,
        1 => return true,
        _ => {}
    }
    if f[n] == 0 {
        return false;
    }

    // h = x^(p^i) mod f, computed as successive p-th powers
    let mut h = X.to_vec();
    for _ in 1..=n / 2 {
        h = match pow_mod(&h, u128::from(p), &f, p) {
            Ok(h) => h,
            Err(_) => return false,
        };

        let diff = sub(&h, &X, p);
        if is_zero(&diff) {
            return false;
        }
        if degree(&gcd(&f, &diff, p)) > 0 {
            return false;
        }
    }

    true
}

/// Test whether a polynomial is irreducible over GF(p) using Rabin's criterion.
///
/// Agrees with [`is_irreducible`] on every input; kept as an independent
/// implementation of the same predicate.
#[must_use]
pub fn is_irreducible_rabin(p: u64, coeffs: &[u64]) -> bool {
    let f = monic(coeffs, p);
    if is_zero(&f) {
        return false;
    }

    let n = degree(&f);
    match n {
        0 => return false,
        1 => return true,
        _ => {}
    }

    let divisors = prime_divisors(n);
    let mut h = X.to_vec();

    for i in 1..=n {
        h = match pow_mod(&h, u128::from(p), &f, p) {
            Ok(h) => h,
            Err(_) => return false,
        };

        if divisors.iter().any(|&q| i * q == n) {
            let g = gcd(&sub(&h, &X, p), &f, p);
            if degree(&g) != 0 {
                return false;
            }
        }
    }

    is_zero(&sub(&h, &X, p))
}
