//! Polynomial long division and reduction over GF(p).
//!
//! [`divide`] is the single division routine; [`mod_polynomial`] and [`gcd`]
//! are built on it.

use super::ring::{is_zero, mul_mod, reduce_coefficients, scalar_mul, sub_mod, trim};
use crate::error::{Error, Result};
use crate::utils::mod_pow;

/// Divide `dividend` by `divisor` over GF(p), returning `(quotient, remainder)`.
///
/// Both operands are reduced mod p first, so the quotient and remainder are
/// always in [0, p). The remainder has degree strictly less than the divisor. Each step uses
/// the inverse of the divisor's leading coefficient, computed with Fermat's
/// little theorem.
///
/// # Errors
///
/// Returns [`Error::DivisionByZero`] if `divisor` is the zero polynomial.
///
/// # Example
///
/// ```
/// use gfcalc::gf::reduce::divide;
///
/// // (x^2 + 2x + 1) / (x + 1) = x + 1, remainder 0 over GF(5)
/// let (q, r) = divide(&[1, 2, 1], &[1, 1], 5).unwrap();
/// assert_eq!(q, vec![1, 1]);
/// assert_eq!(r, vec![0]);
/// ```
pub fn divide(dividend: &[u64], divisor: &[u64], p: u64) -> Result<(Vec<u64>, Vec<u64>)> {
    let divisor = reduce_coefficients(divisor, p);
    if is_zero(&divisor) {
        return Err(Error::DivisionByZero { characteristic: p });
    }
    Ok(long_division(reduce_coefficients(dividend, p), &divisor, p))
}

/// Long division by a trimmed, nonzero divisor.
fn long_division(mut rem: Vec<u64>, divisor: &[u64], p: u64) -> (Vec<u64>, Vec<u64>) {
    if rem.len() < divisor.len() {
        return (vec![0], rem);
    }

    let inv_lead = mod_pow(divisor[0], p - 2, p);
    let q_len = rem.len() - divisor.len() + 1;
    let mut quotient = vec![0u64; q_len];

    for i in 0..q_len {
        let coeff = mul_mod(rem[i], inv_lead, p);
        quotient[i] = coeff;
        if coeff == 0 {
            continue;
        }
        for (j, &d) in divisor.iter().enumerate() {
            rem[i + j] = sub_mod(rem[i + j], mul_mod(d, coeff, p), p);
        }
    }

    let remainder = rem.split_off(q_len);
    (trim(quotient), trim(remainder))
}

/// Remainder of `dividend` modulo `divisor` over GF(p).
///
/// # Errors
///
/// Returns [`Error::DivisionByZero`] if `divisor` is the zero polynomial.
pub fn mod_polynomial(dividend: &[u64], divisor: &[u64], p: u64) -> Result<Vec<u64>> {
    divide(dividend, divisor, p).map(|(_, r)| r)
}

/// Remainder modulo a modulus already known to be reduced, trimmed and nonzero.
pub(crate) fn reduce_by(dividend: &[u64], modulus: &[u64], p: u64) -> Vec<u64> {
    long_division(reduce_coefficients(dividend, p), modulus, p).1
}

/// Greatest common divisor over GF(p) by the Euclidean algorithm.
///
/// The result is monic, except that `gcd(0, 0)` is the zero polynomial.
#[must_use]
pub fn gcd(a: &[u64], b: &[u64], p: u64) -> Vec<u64> {
    let mut a = reduce_coefficients(a, p);
    let mut b = reduce_coefficients(b, p);

    while !is_zero(&b) {
        let (_, r) = long_division(a, &b, p);
        a = std::mem::replace(&mut b, r);
    }

    monic(&a, p)
}

/// Scale a polynomial so its leading coefficient is 1.
///
/// The zero polynomial is returned unchanged.
#[must_use]
pub fn monic(a: &[u64], p: u64) -> Vec<u64> {
    let a = reduce_coefficients(a, p);
    if a[0] == 0 {
        return a;
    }
    scalar_mul(&a, mod_pow(a[0], p - 2, p), p)
}
