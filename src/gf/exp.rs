//! Exponentiation and multiplicative inversion.
//!
//! Inversion in GF(p) uses Fermat's little theorem, a^(-1) = a^(p-2).
//! Inversion in GF(p^n) uses the same identity in the multiplicative group
//! of order q - 1 where q = p^n: a^(-1) = a^(q-2).

use super::multiply::{MulStrategy, Multiplier};
use super::reduce::mod_polynomial;
use super::ring::{degree, is_zero, trim};
use crate::error::{Error, Result};
use crate::utils::mod_pow;

/// Compute p^degree, the number of elements of GF(p^degree).
///
/// Returns `None` if the result does not fit in a `u128`.
#[must_use]
pub fn field_order(p: u64, degree: usize) -> Option<u128> {
    let exp = u32::try_from(degree).ok()?;
    u128::from(p).checked_pow(exp)
}

/// Multiplicative inverse of `value` in GF(p).
///
/// # Errors
///
/// Returns [`Error::DivisionByZero`] if `value ≡ 0 (mod p)`.
///
/// # Example
///
/// ```
/// use gfcalc::gf::exp::inverse_in_field;
///
/// assert_eq!(inverse_in_field(3, 7).unwrap(), 5); // 3 * 5 = 15 ≡ 1 (mod 7)
/// assert!(inverse_in_field(0, 7).is_err());
/// ```
pub fn inverse_in_field(value: u64, p: u64) -> Result<u64> {
    let value = value % p;
    if value == 0 {
        return Err(Error::DivisionByZero { characteristic: p });
    }
    Ok(mod_pow(value, p - 2, p))
}

/// Raise `base` to `exponent` modulo `modulus` over GF(p) by square-and-multiply.
///
/// Unlike [`mod_pow_polynomial`], the exponent is used as given, so the
/// modulus does not need to be irreducible.
///
/// # Errors
///
/// Returns [`Error::DivisionByZero`] if `modulus` is the zero polynomial.
pub fn pow_mod(base: &[u64], exponent: u128, modulus: &[u64], p: u64) -> Result<Vec<u64>> {
    pow_mod_with(base, exponent, modulus, p, &MulStrategy::default())
}

/// [`pow_mod`] with an explicit multiplication strategy.
///
/// # Errors
///
/// Returns [`Error::DivisionByZero`] if `modulus` is the zero polynomial.
pub fn pow_mod_with(
    base: &[u64],
    mut exponent: u128,
    modulus: &[u64],
    p: u64,
    mul: &dyn Multiplier,
) -> Result<Vec<u64>> {
    let mut square = mod_polynomial(base, modulus, p)?;
    let mut result = mod_polynomial(&[1], modulus, p)?;

    while exponent > 0 {
        if exponent & 1 == 1 {
            result = mod_polynomial(&mul.multiply(&result, &square, p), modulus, p)?;
        }
        exponent >>= 1;
        if exponent > 0 {
            square = mod_polynomial(&mul.multiply(&square, &square, p), modulus, p)?;
        }
    }

    Ok(result)
}

/// Raise `base` to `exponent` in the field GF(p)[x] / (modulus).
///
/// The exponent is first reduced modulo p^deg(modulus) - 1, the order of the
/// multiplicative group. An exponent that reduces to 0 yields `[1]`. When
/// p^deg(modulus) does not fit in a `u128` the exponent is already smaller
/// than the group order and is used as given.
///
/// # Errors
///
/// Returns [`Error::DivisionByZero`] if `modulus` is the zero polynomial.
///
/// # Example
///
/// ```
/// use gfcalc::gf::exp::mod_pow_polynomial;
///
/// // In GF(2^3) with x^3 + x + 1, x^7 = 1
/// assert_eq!(mod_pow_polynomial(&[1, 0], 7, 2, &[1, 0, 1, 1]).unwrap(), vec![1]);
/// // x^3 = x + 1
/// assert_eq!(mod_pow_polynomial(&[1, 0], 3, 2, &[1, 0, 1, 1]).unwrap(), vec![1, 1]);
/// ```
pub fn mod_pow_polynomial(base: &[u64], exponent: u128, p: u64, modulus: &[u64]) -> Result<Vec<u64>> {
    mod_pow_polynomial_with(base, exponent, p, modulus, &MulStrategy::default())
}

/// [`mod_pow_polynomial`] with an explicit multiplication strategy.
///
/// # Errors
///
/// Returns [`Error::DivisionByZero`] if `modulus` is the zero polynomial.
pub fn mod_pow_polynomial_with(
    base: &[u64],
    exponent: u128,
    p: u64,
    modulus: &[u64],
    mul: &dyn Multiplier,
) -> Result<Vec<u64>> {
    let modulus = trim(modulus.to_vec());
    if is_zero(&modulus) {
        return Err(Error::DivisionByZero { characteristic: p });
    }

    let mut exponent = exponent;
    let deg = degree(&modulus);
    if deg >= 1 {
        if let Some(order) = field_order(p, deg) {
            exponent %= order - 1;
        }
    }

    if exponent == 0 {
        return Ok(vec![1]);
    }

    pow_mod_with(base, exponent, &modulus, p, mul)
}

/// Multiplicative inverse of `poly` in GF(p)[x] / (modulus).
///
/// Constants are inverted in GF(p) directly; anything else is raised to
/// p^deg(modulus) - 2.
///
/// # Errors
///
/// - [`Error::DivisionByZero`] if `poly` is zero modulo `modulus`, or the modulus is zero
/// - [`Error::FieldTooLarge`] if p^deg(modulus) does not fit in a `u128`
///
/// # Example
///
/// ```
/// use gfcalc::gf::exp::inverse_polynomial;
///
/// // (x^2 + x + 1)^(-1) = x^2 in GF(2^3) with x^3 + x + 1
/// let inv = inverse_polynomial(&[1, 1, 1], 2, &[1, 0, 1, 1]).unwrap();
/// assert_eq!(inv, vec![1, 0, 0]);
/// ```
pub fn inverse_polynomial(poly: &[u64], p: u64, modulus: &[u64]) -> Result<Vec<u64>> {
    inverse_polynomial_with(poly, p, modulus, &MulStrategy::default())
}

/// [`inverse_polynomial`] with an explicit multiplication strategy.
///
/// # Errors
///
/// See [`inverse_polynomial`].
pub fn inverse_polynomial_with(
    poly: &[u64],
    p: u64,
    modulus: &[u64],
    mul: &dyn Multiplier,
) -> Result<Vec<u64>> {
    let poly = mod_polynomial(poly, modulus, p)?;

    if poly.len() == 1 {
        return Ok(vec![inverse_in_field(poly[0], p)?]);
    }

    let deg = degree(&trim(modulus.to_vec()));
    let order = field_order(p, deg).ok_or(Error::FieldTooLarge {
        characteristic: p,
        degree: deg,
    })?;

    mod_pow_polynomial_with(&poly, order - 2, p, modulus, mul)
}
