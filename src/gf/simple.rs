//! The prime field GF(p), its elements, and polynomials over it.

use std::fmt;

use log::debug;

use super::exp::inverse_in_field;
use super::multiply::{MulStrategy, Multiplier};
use super::reduce::divide;
use super::ring::{self, add_mod, format_polynomial, mul_mod, normalize, normalize_value, sub_mod};
use super::{Evaluate, FieldElement};
use crate::error::{Error, Result};
use crate::utils::{is_prime, mod_pow, parse_coefficients, parse_value};

/// The prime field GF(p).
///
/// Holds only the characteristic. Elements and polynomials created through
/// the field carry p themselves, so the field value can be dropped freely.
///
/// # Example
///
/// ```
/// use gfcalc::gf::SimpleField;
///
/// let gf7 = SimpleField::new(7).unwrap();
/// let a = gf7.element(3);
/// let b = gf7.element(5);
///
/// assert_eq!((a + b).value(), 1); // 3 + 5 = 8 ≡ 1 (mod 7)
/// assert!(SimpleField::new(6).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SimpleField {
    p: u64,
}

impl SimpleField {
    /// Create GF(p).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCharacteristic`] if `p` is not prime.
    pub fn new(p: u64) -> Result<Self> {
        if !is_prime(p) {
            debug!("rejected characteristic {p}: not prime");
            return Err(Error::InvalidCharacteristic(p));
        }
        debug!("constructed GF({p})");
        Ok(Self { p })
    }

    /// Get the field characteristic p.
    #[must_use]
    pub fn characteristic(&self) -> u64 {
        self.p
    }

    /// Get the field order (number of elements), equal to p.
    #[must_use]
    pub fn order(&self) -> u64 {
        self.p
    }

    /// Create an element, reducing `value` into [0, p).
    #[must_use]
    pub fn element(&self, value: i64) -> SimpleElement {
        SimpleElement {
            value: normalize_value(value, self.p),
            p: self.p,
        }
    }

    /// Parse an element from text such as `"-3"`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedInput`] if the text is not an integer.
    pub fn parse_element(&self, input: &str) -> Result<SimpleElement> {
        Ok(self.element(parse_value(input)?))
    }

    /// Get the zero element (additive identity).
    #[must_use]
    pub fn zero(&self) -> SimpleElement {
        self.element(0)
    }

    /// Get the one element (multiplicative identity).
    #[must_use]
    pub fn one(&self) -> SimpleElement {
        self.element(1)
    }

    /// Create a polynomial from coefficients, highest degree first.
    #[must_use]
    pub fn polynomial(&self, coeffs: &[i64]) -> SimplePolynomial {
        SimplePolynomial {
            coeffs: normalize(coeffs, self.p),
            p: self.p,
        }
    }

    /// Parse a polynomial from comma-separated coefficients, highest degree first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedInput`] if any coefficient is not an integer.
    pub fn parse_polynomial(&self, input: &str) -> Result<SimplePolynomial> {
        Ok(self.polynomial(&parse_coefficients(input)?))
    }

    /// Iterate over all elements of the field.
    pub fn elements(&self) -> impl Iterator<Item = SimpleElement> {
        let p = self.p;
        (0..p).map(move |value| SimpleElement { value, p })
    }

    /// Iterate over all non-zero elements of the field.
    pub fn units(&self) -> impl Iterator<Item = SimpleElement> {
        let p = self.p;
        (1..p).map(move |value| SimpleElement { value, p })
    }
}

impl fmt::Display for SimpleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GF({})", self.p)
    }
}

/// An element of GF(p).
///
/// Holds the value in [0, p) and the characteristic. Arithmetic is only
/// defined between elements with the same p.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SimpleElement {
    value: u64,
    p: u64,
}

impl SimpleElement {
    /// Get the integer representation of this element.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Get the characteristic of this element's field.
    #[must_use]
    pub fn characteristic(&self) -> u64 {
        self.p
    }

    /// Get the field this element belongs to.
    #[must_use]
    pub fn field(&self) -> SimpleField {
        SimpleField { p: self.p }
    }

    /// Check if this element is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// Check if this element is one.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.value == 1
    }

    fn with_value(&self, value: u64) -> Self {
        Self { value, p: self.p }
    }

    fn check_field(&self, rhs: &Self) -> Result<()> {
        if self.p == rhs.p {
            Ok(())
        } else {
            Err(Error::cross_field(self.field(), rhs.field()))
        }
    }

    /// Field addition.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CrossFieldOperation`] if `rhs` is from another field.
    pub fn checked_add(&self, rhs: &Self) -> Result<Self> {
        self.check_field(rhs)?;
        Ok(self.with_value(add_mod(self.value, rhs.value, self.p)))
    }

    /// Field subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CrossFieldOperation`] if `rhs` is from another field.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self> {
        self.check_field(rhs)?;
        Ok(self.with_value(sub_mod(self.value, rhs.value, self.p)))
    }

    /// Field multiplication.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CrossFieldOperation`] if `rhs` is from another field.
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self> {
        self.check_field(rhs)?;
        Ok(self.with_value(mul_mod(self.value, rhs.value, self.p)))
    }

    /// Field division.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CrossFieldOperation`] if `rhs` is from another field,
    /// or [`Error::DivisionByZero`] if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self> {
        self.check_field(rhs)?;
        let inv = rhs.inverse()?;
        Ok(self.with_value(mul_mod(self.value, inv.value, self.p)))
    }

    /// Multiplicative inverse via Fermat's little theorem.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] if called on zero.
    pub fn inverse(&self) -> Result<Self> {
        Ok(self.with_value(inverse_in_field(self.value, self.p)?))
    }

    /// Exponentiation by squaring.
    #[must_use]
    pub fn pow(&self, exp: u64) -> Self {
        self.with_value(mod_pow(self.value, exp, self.p))
    }
}

impl FieldElement for SimpleElement {
    fn characteristic(&self) -> u64 {
        self.p
    }

    fn zero_like(&self) -> Self {
        self.with_value(0)
    }

    fn one_like(&self) -> Self {
        self.with_value(1)
    }

    fn is_zero(&self) -> bool {
        SimpleElement::is_zero(self)
    }

    fn is_one(&self) -> bool {
        SimpleElement::is_one(self)
    }

    fn negate(&self) -> Self {
        self.with_value(sub_mod(0, self.value, self.p))
    }

    fn checked_add(&self, rhs: &Self) -> Result<Self> {
        SimpleElement::checked_add(self, rhs)
    }

    fn checked_sub(&self, rhs: &Self) -> Result<Self> {
        SimpleElement::checked_sub(self, rhs)
    }

    fn checked_mul(&self, rhs: &Self) -> Result<Self> {
        SimpleElement::checked_mul(self, rhs)
    }

    fn inverse(&self) -> Result<Self> {
        SimpleElement::inverse(self)
    }

    fn checked_div(&self, rhs: &Self) -> Result<Self> {
        SimpleElement::checked_div(self, rhs)
    }
}

impl fmt::Debug for SimpleElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GF({})[{}]", self.p, self.value)
    }
}

impl fmt::Display for SimpleElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

// Standard operators panic where the checked forms return an error.
impl std::ops::Add for SimpleElement {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(&rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl std::ops::Sub for SimpleElement {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(&rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl std::ops::Mul for SimpleElement {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(&rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl std::ops::Div for SimpleElement {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(&rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl std::ops::Neg for SimpleElement {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

/// A polynomial over GF(p), independent of any modulus.
///
/// Coefficients are stored highest degree first, reduced and trimmed.
///
/// # Example
///
/// ```
/// use gfcalc::gf::{Evaluate, SimpleField};
///
/// let gf5 = SimpleField::new(5).unwrap();
/// let f = gf5.polynomial(&[1, 0, 1]);  // x^2 + 1
/// let g = gf5.polynomial(&[1, 2]);     // x + 2
///
/// assert_eq!((f.clone() * g.clone()).to_string(), "x^3 + 2x^2 + x + 2");
/// assert_eq!(f.calculate_value(&gf5.element(2)).unwrap().value(), 0);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SimplePolynomial {
    coeffs: Vec<u64>,
    p: u64,
}

impl SimplePolynomial {
    /// Get the coefficients, highest degree first.
    #[must_use]
    pub fn coefficients(&self) -> &[u64] {
        &self.coeffs
    }

    /// Get the degree. The zero polynomial reports degree 0.
    #[must_use]
    pub fn degree(&self) -> usize {
        ring::degree(&self.coeffs)
    }

    /// Get the characteristic of the coefficient field.
    #[must_use]
    pub fn characteristic(&self) -> u64 {
        self.p
    }

    /// Check if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        ring::is_zero(&self.coeffs)
    }

    /// Check whether this polynomial is irreducible over GF(p).
    #[must_use]
    pub fn is_irreducible(&self) -> bool {
        super::is_irreducible(self.p, &self.coeffs)
    }

    fn with_coeffs(&self, coeffs: Vec<u64>) -> Self {
        Self { coeffs, p: self.p }
    }

    fn check_field(&self, rhs: &Self) -> Result<()> {
        if self.p == rhs.p {
            Ok(())
        } else {
            Err(Error::cross_field(
                SimpleField { p: self.p },
                SimpleField { p: rhs.p },
            ))
        }
    }

    /// Polynomial addition.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CrossFieldOperation`] if `rhs` is over another field.
    pub fn checked_add(&self, rhs: &Self) -> Result<Self> {
        self.check_field(rhs)?;
        Ok(self.with_coeffs(ring::add(&self.coeffs, &rhs.coeffs, self.p)))
    }

    /// Polynomial subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CrossFieldOperation`] if `rhs` is over another field.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self> {
        self.check_field(rhs)?;
        Ok(self.with_coeffs(ring::sub(&self.coeffs, &rhs.coeffs, self.p)))
    }

    /// Polynomial multiplication using Karatsuba.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CrossFieldOperation`] if `rhs` is over another field.
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self> {
        self.mul_with(rhs, &MulStrategy::default())
    }

    /// Polynomial multiplication with an explicit strategy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CrossFieldOperation`] if `rhs` is over another field.
    pub fn mul_with(&self, rhs: &Self, mul: &dyn Multiplier) -> Result<Self> {
        self.check_field(rhs)?;
        Ok(self.with_coeffs(mul.multiply(&self.coeffs, &rhs.coeffs, self.p)))
    }

    /// Division with remainder, returning `(quotient, remainder)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CrossFieldOperation`] if `rhs` is over another field,
    /// or [`Error::DivisionByZero`] if `rhs` is the zero polynomial.
    pub fn div_rem(&self, rhs: &Self) -> Result<(Self, Self)> {
        self.check_field(rhs)?;
        let (q, r) = divide(&self.coeffs, &rhs.coeffs, self.p)?;
        Ok((self.with_coeffs(q), self.with_coeffs(r)))
    }
}

impl Evaluate<SimpleElement> for SimplePolynomial {
    type Output = SimpleElement;

    /// Horner evaluation at `point`.
    fn calculate_value(&self, point: &SimpleElement) -> Result<SimpleElement> {
        if point.p != self.p {
            return Err(Error::cross_field(SimpleField { p: self.p }, point.field()));
        }

        let value = self.coeffs.iter().fold(0, |acc, &c| {
            add_mod(mul_mod(acc, point.value, self.p), c, self.p)
        });
        Ok(point.with_value(value))
    }
}

impl fmt::Debug for SimplePolynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GF({})[{}]", self.p, format_polynomial(&self.coeffs))
    }
}

impl fmt::Display for SimplePolynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_polynomial(&self.coeffs))
    }
}

impl std::ops::Add for SimplePolynomial {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(&rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl std::ops::Sub for SimplePolynomial {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(&rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl std::ops::Mul for SimplePolynomial {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(&rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

/// Quotient of polynomial division.
impl std::ops::Div for SimplePolynomial {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        self.div_rem(&rhs).unwrap_or_else(|e| panic!("{e}")).0
    }
}

/// Remainder of polynomial division.
impl std::ops::Rem for SimplePolynomial {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self::Output {
        self.div_rem(&rhs).unwrap_or_else(|e| panic!("{e}")).1
    }
}

impl std::ops::Neg for SimplePolynomial {
    type Output = Self;

    fn neg(self) -> Self::Output {
        let coeffs = ring::neg(&self.coeffs, self.p);
        self.with_coeffs(coeffs)
    }
}
