//! Extension fields GF(p^n) = GF(p)[x] / (f) and their elements.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use log::debug;

use super::exp::{field_order, inverse_polynomial_with};
use super::irreducible::is_irreducible;
use super::multiply::{MulStrategy, Multiplier};
use super::reduce::reduce_by;
use super::ring::{self, format_polynomial, normalize, scalar_mul};
use super::{Evaluate, FieldElement};
use crate::error::{Error, Result};
use crate::utils::{is_prime, parse_coefficients};

/// Shared state of an extension field.
#[derive(Clone)]
struct ExtensionContext {
    p: u64,
    modulus: Vec<u64>,
    order: u128,
    strategy: MulStrategy,
}

/// The extension field GF(p^n) defined by an irreducible modulus of degree n.
///
/// The modulus is validated once at construction and shared by every element
/// minted from the field. Cloning is cheap.
///
/// # Example
///
/// ```
/// use gfcalc::gf::FieldExtension;
///
/// // GF(3^2) with modulus x^2 + 1
/// let gf9 = FieldExtension::new(3, &[1, 0, 1]).unwrap();
/// let a = gf9.element(&[1, 1]);
///
/// assert_eq!((a.clone() + a).coefficients(), &[2, 2]);
/// assert_eq!(gf9.order(), 9);
///
/// // x^2 + 2 = (x + 1)(x + 2) over GF(3) is rejected
/// assert!(FieldExtension::new(3, &[1, 0, 2]).is_err());
/// ```
#[derive(Clone)]
pub struct FieldExtension {
    ctx: Arc<ExtensionContext>,
}

impl FieldExtension {
    /// Create GF(p^n) from a modulus given highest degree first.
    ///
    /// Coefficients may be negative or exceed p; they are reduced first.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `p` is not prime ([`Error::InvalidCharacteristic`])
    /// - the modulus has degree below 2 or is reducible ([`Error::InvalidModulus`])
    /// - p^n does not fit in 128 bits ([`Error::FieldTooLarge`])
    pub fn new(p: u64, modulus: &[i64]) -> Result<Self> {
        if !is_prime(p) {
            debug!("rejected characteristic {p}: not prime");
            return Err(Error::InvalidCharacteristic(p));
        }

        let modulus = normalize(modulus, p);
        let degree = ring::degree(&modulus);
        if degree < 2 {
            debug!("rejected modulus {} over GF({p}): degree {degree}", format_polynomial(&modulus));
            return Err(Error::invalid_modulus(
                p,
                format_polynomial(&modulus),
                "degree must be at least 2",
            ));
        }

        if !is_irreducible(p, &modulus) {
            debug!("rejected modulus {} over GF({p}): reducible", format_polynomial(&modulus));
            return Err(Error::invalid_modulus(
                p,
                format_polynomial(&modulus),
                "polynomial is reducible",
            ));
        }

        let order = field_order(p, degree).ok_or(Error::FieldTooLarge {
            characteristic: p,
            degree,
        })?;

        debug!("constructed GF({p}^{degree}) with modulus {}", format_polynomial(&modulus));
        Ok(Self {
            ctx: Arc::new(ExtensionContext {
                p,
                modulus,
                order,
                strategy: MulStrategy::default(),
            }),
        })
    }

    /// Use a different multiplication strategy for elements of this field.
    ///
    /// Elements minted before and after remain interoperable; only the
    /// algorithm used for their products changes.
    #[must_use]
    pub fn with_strategy(self, strategy: MulStrategy) -> Self {
        let mut ctx = (*self.ctx).clone();
        ctx.strategy = strategy;
        Self { ctx: Arc::new(ctx) }
    }

    /// Get the multiplication strategy.
    #[must_use]
    pub fn strategy(&self) -> MulStrategy {
        self.ctx.strategy
    }

    /// Get the field characteristic p.
    #[must_use]
    pub fn characteristic(&self) -> u64 {
        self.ctx.p
    }

    /// Get the extension degree n.
    #[must_use]
    pub fn degree(&self) -> usize {
        ring::degree(&self.ctx.modulus)
    }

    /// Get the field order p^n.
    #[must_use]
    pub fn order(&self) -> u128 {
        self.ctx.order
    }

    /// Get the modulus coefficients, highest degree first.
    #[must_use]
    pub fn modulus(&self) -> &[u64] {
        &self.ctx.modulus
    }

    /// Create an element from coefficients, highest degree first.
    ///
    /// The coefficients are reduced mod p and the polynomial is reduced
    /// modulo the field's modulus, so any input maps to a valid element.
    #[must_use]
    pub fn element(&self, coeffs: &[i64]) -> ExtensionElement {
        let coeffs = normalize(coeffs, self.ctx.p);
        self.from_reduced(self.reduce(&coeffs))
    }

    /// Parse an element from comma-separated coefficients, highest degree first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedInput`] if any coefficient is not an integer.
    pub fn parse_element(&self, input: &str) -> Result<ExtensionElement> {
        Ok(self.element(&parse_coefficients(input)?))
    }

    /// Get the zero element (additive identity).
    #[must_use]
    pub fn zero(&self) -> ExtensionElement {
        self.from_reduced(vec![0])
    }

    /// Get the one element (multiplicative identity).
    #[must_use]
    pub fn one(&self) -> ExtensionElement {
        self.from_reduced(vec![1])
    }

    /// Get the generator candidate x.
    #[must_use]
    pub fn x(&self) -> ExtensionElement {
        self.from_reduced(vec![1, 0])
    }

    /// Iterate over all p^n elements, in the order of their base-p digits.
    pub fn elements(&self) -> impl Iterator<Item = ExtensionElement> + '_ {
        (0..self.order()).map(move |index| self.element_at(index))
    }

    /// The element whose base-p digits of `index` are its coefficients.
    fn element_at(&self, mut index: u128) -> ExtensionElement {
        let p = u128::from(self.ctx.p);
        let mut coeffs = vec![0u64; self.degree()];
        for c in coeffs.iter_mut().rev() {
            *c = (index % p) as u64;
            index /= p;
        }
        self.from_reduced(ring::trim(coeffs))
    }

    fn from_reduced(&self, coeffs: Vec<u64>) -> ExtensionElement {
        ExtensionElement {
            coeffs,
            field: self.clone(),
        }
    }

    fn reduce(&self, coeffs: &[u64]) -> Vec<u64> {
        reduce_by(coeffs, &self.ctx.modulus, self.ctx.p)
    }

    fn mul_reduce(&self, a: &[u64], b: &[u64]) -> Vec<u64> {
        let product = self.ctx.strategy.multiply(a, b, self.ctx.p);
        self.reduce(&product)
    }

    /// Whether two handles describe the same field.
    fn same_field(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.ctx, &other.ctx)
            || (self.ctx.p == other.ctx.p && self.ctx.modulus == other.ctx.modulus)
    }
}

impl PartialEq for FieldExtension {
    fn eq(&self, other: &Self) -> bool {
        self.same_field(other)
    }
}

impl Eq for FieldExtension {}

impl fmt::Debug for FieldExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mod ({})", self, format_polynomial(&self.ctx.modulus))
    }
}

impl fmt::Display for FieldExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GF({}^{})", self.ctx.p, self.degree())
    }
}

/// An element of GF(p^n): a polynomial of degree below n, reduced modulo
/// the field's modulus.
#[derive(Clone)]
pub struct ExtensionElement {
    coeffs: Vec<u64>,
    field: FieldExtension,
}

impl ExtensionElement {
    /// Get the coefficients, highest degree first.
    #[must_use]
    pub fn coefficients(&self) -> &[u64] {
        &self.coeffs
    }

    /// Get the field this element belongs to.
    #[must_use]
    pub fn field(&self) -> &FieldExtension {
        &self.field
    }

    /// Check if this element is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        ring::is_zero(&self.coeffs)
    }

    /// Check if this element is one.
    #[must_use]
    pub fn is_one(&self) -> bool {
        ring::is_one(&self.coeffs)
    }

    fn check_field(&self, rhs: &Self) -> Result<()> {
        if self.field.same_field(&rhs.field) {
            Ok(())
        } else {
            Err(Error::cross_field(
                format!("{:?}", self.field),
                format!("{:?}", rhs.field),
            ))
        }
    }

    /// Field addition.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CrossFieldOperation`] if `rhs` is from another field.
    pub fn checked_add(&self, rhs: &Self) -> Result<Self> {
        self.check_field(rhs)?;
        let sum = ring::add(&self.coeffs, &rhs.coeffs, self.field.ctx.p);
        Ok(self.field.from_reduced(sum))
    }

    /// Field subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CrossFieldOperation`] if `rhs` is from another field.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self> {
        self.check_field(rhs)?;
        let diff = ring::sub(&self.coeffs, &rhs.coeffs, self.field.ctx.p);
        Ok(self.field.from_reduced(diff))
    }

    /// Field multiplication: polynomial product reduced modulo the modulus.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CrossFieldOperation`] if `rhs` is from another field.
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self> {
        self.check_field(rhs)?;
        let product = self.field.mul_reduce(&self.coeffs, &rhs.coeffs);
        Ok(self.field.from_reduced(product))
    }

    /// Field division, `self * rhs.inverse()`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CrossFieldOperation`] if `rhs` is from another field,
    /// or [`Error::DivisionByZero`] if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self> {
        self.check_field(rhs)?;
        self.checked_mul(&rhs.inverse()?)
    }

    /// Multiplicative inverse, a^(p^n - 2).
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] if called on zero.
    pub fn inverse(&self) -> Result<Self> {
        let ctx = &self.field.ctx;
        let inv = inverse_polynomial_with(&self.coeffs, ctx.p, &ctx.modulus, &ctx.strategy)?;
        Ok(self.field.from_reduced(inv))
    }

    /// Exponentiation by squaring.
    ///
    /// The exponent is reduced modulo p^n - 1 first, and an exponent that
    /// reduces to 0 yields one. This holds for zero as well, so
    /// `zero.pow(p^n - 1)` is one.
    #[must_use]
    pub fn pow(&self, exp: u128) -> Self {
        let mut exp = exp % (self.field.order() - 1);
        let mut result = vec![1];
        let mut square = self.coeffs.clone();

        while exp > 0 {
            if exp & 1 == 1 {
                result = self.field.mul_reduce(&result, &square);
            }
            exp >>= 1;
            if exp > 0 {
                square = self.field.mul_reduce(&square, &square);
            }
        }

        self.field.from_reduced(result)
    }
}

impl FieldElement for ExtensionElement {
    fn characteristic(&self) -> u64 {
        self.field.characteristic()
    }

    fn zero_like(&self) -> Self {
        self.field.zero()
    }

    fn one_like(&self) -> Self {
        self.field.one()
    }

    fn is_zero(&self) -> bool {
        ExtensionElement::is_zero(self)
    }

    fn is_one(&self) -> bool {
        ExtensionElement::is_one(self)
    }

    fn negate(&self) -> Self {
        let neg = ring::neg(&self.coeffs, self.field.ctx.p);
        self.field.from_reduced(neg)
    }

    fn checked_add(&self, rhs: &Self) -> Result<Self> {
        ExtensionElement::checked_add(self, rhs)
    }

    fn checked_sub(&self, rhs: &Self) -> Result<Self> {
        ExtensionElement::checked_sub(self, rhs)
    }

    fn checked_mul(&self, rhs: &Self) -> Result<Self> {
        ExtensionElement::checked_mul(self, rhs)
    }

    fn inverse(&self) -> Result<Self> {
        ExtensionElement::inverse(self)
    }

    fn checked_div(&self, rhs: &Self) -> Result<Self> {
        ExtensionElement::checked_div(self, rhs)
    }
}

impl Evaluate<ExtensionElement> for ExtensionElement {
    type Output = ExtensionElement;

    /// Treat this element's coefficients as a polynomial over GF(p) and
    /// evaluate it at `point` as the sum of c_k * point^k, reducing after
    /// every product.
    fn calculate_value(&self, point: &ExtensionElement) -> Result<ExtensionElement> {
        self.check_field(point)?;
        let p = self.field.ctx.p;

        let mut value = vec![0];
        let mut power = vec![1];
        for &c in self.coeffs.iter().rev() {
            if c != 0 {
                value = ring::add(&value, &scalar_mul(&power, c, p), p);
            }
            power = self.field.mul_reduce(&power, &point.coeffs);
        }

        Ok(self.field.from_reduced(value))
    }
}

impl PartialEq for ExtensionElement {
    fn eq(&self, other: &Self) -> bool {
        self.coeffs == other.coeffs && self.field.same_field(&other.field)
    }
}

impl Eq for ExtensionElement {}

impl Hash for ExtensionElement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coeffs.hash(state);
        self.field.ctx.p.hash(state);
        self.field.ctx.modulus.hash(state);
    }
}

impl fmt::Debug for ExtensionElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.field, format_polynomial(&self.coeffs))
    }
}

impl fmt::Display for ExtensionElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_polynomial(&self.coeffs))
    }
}

// Standard operators panic where the checked forms return an error.
impl std::ops::Add for ExtensionElement {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if the operands belong to different fields.
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(&rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl std::ops::Sub for ExtensionElement {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if the operands belong to different fields.
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(&rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl std::ops::Mul for ExtensionElement {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if the operands belong to different fields.
    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(&rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl std::ops::Div for ExtensionElement {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if the operands belong to different fields or `rhs` is zero.
    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(&rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl std::ops::Neg for ExtensionElement {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gf8() -> FieldExtension {
        FieldExtension::new(2, &[1, 0, 1, 1]).unwrap()
    }

    fn gf9() -> FieldExtension {
        FieldExtension::new(3, &[1, 0, 1]).unwrap()
    }

    #[test]
    fn test_field_creation() {
        let field = gf8();
        assert_eq!(field.characteristic(), 2);
        assert_eq!(field.degree(), 3);
        assert_eq!(field.order(), 8);
        assert_eq!(field.modulus(), &[1, 0, 1, 1]);
        assert_eq!(field.to_string(), "GF(2^3)");
        assert_eq!(format!("{field:?}"), "GF(2^3) mod (x^3 + x + 1)");
    }

    #[test]
    fn test_modulus_normalization() {
        // -2x^2 + 4 ≡ x^2 + 1 over GF(3)
        let field = FieldExtension::new(3, &[0, -2, 0, 4]).unwrap();
        assert_eq!(field.modulus(), &[1, 0, 1]);
        assert_eq!(field, gf9());
    }

    #[test]
    fn test_rejects_non_prime_characteristic() {
        assert_eq!(
            FieldExtension::new(4, &[1, 1, 1]).unwrap_err(),
            Error::InvalidCharacteristic(4)
        );
    }

    #[test]
    fn test_rejects_low_degree_modulus() {
        for modulus in [&[1, 1][..], &[3][..], &[0, 0][..], &[2, 2][..]] {
            assert!(matches!(
                FieldExtension::new(2, modulus),
                Err(Error::InvalidModulus { .. })
            ));
        }
    }

    #[test]
    fn test_rejects_reducible_modulus() {
        let cases: [(u64, &[i64]); 5] = [
            (2, &[1, 0, 1]),       // (x + 1)^2
            (2, &[1, 0, 0, 1]),    // (x + 1)(x^2 + x + 1)
            (2, &[1, 0, 0, 0]),    // x^3
            (3, &[1, 0, 2]),       // (x + 1)(x + 2)
            (5, &[1, 0, 1]),       // (x + 2)(x + 3)
        ];
        for (p, modulus) in cases {
            match FieldExtension::new(p, modulus) {
                Err(Error::InvalidModulus { reason, .. }) => assert!(reason.contains("reducible")),
                other => panic!("expected InvalidModulus for p={p}, {modulus:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_reducible_modulus_reported_before_size() {
        // x^128 over GF(2) is reducible and also too large for u128
        let mut modulus = vec![0i64; 129];
        modulus[0] = 1;
        match FieldExtension::new(2, &modulus).unwrap_err() {
            Error::InvalidModulus { reason, .. } => assert!(reason.contains("reducible")),
            other => panic!("expected InvalidModulus, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_field_too_large() {
        // x^128 + x^7 + x^2 + x + 1 is irreducible, but 2^128 overflows u128
        let mut modulus = vec![0i64; 129];
        for power in [128usize, 7, 2, 1, 0] {
            modulus[128 - power] = 1;
        }
        assert_eq!(
            FieldExtension::new(2, &modulus).unwrap_err(),
            Error::FieldTooLarge {
                characteristic: 2,
                degree: 128
            }
        );
    }

    #[test]
    fn test_gf9_scenario() {
        let field = gf9();
        let a = field.element(&[1, 1]);
        let sum = a.clone() + a;
        assert_eq!(sum.coefficients(), &[2, 2]);
        assert_eq!(sum.to_string(), "2x + 2");
    }

    #[test]
    fn test_gf8_inverse_scenario() {
        let field = gf8();
        let a = field.element(&[1, 1, 1]);
        let inv = a.inverse().unwrap();
        assert_eq!(inv.coefficients(), &[1, 0, 0]);
        assert_eq!((a * inv).coefficients(), &[1]);
    }

    #[test]
    fn test_element_reduction() {
        let field = gf8();
        // x^3 ≡ x + 1
        assert_eq!(field.element(&[1, 0, 0, 0]).coefficients(), &[1, 1]);
        // x^4 ≡ x^2 + x
        assert_eq!(field.element(&[1, 0, 0, 0, 0]).coefficients(), &[1, 1, 0]);
        // -1 ≡ 1, and empty input is zero
        assert_eq!(field.element(&[-1]).coefficients(), &[1]);
        assert!(field.element(&[]).is_zero());
    }

    #[test]
    fn test_multiplication() {
        let field = gf8();
        let x = field.x();
        // x * x^2 = x^3 = x + 1
        let x2 = field.element(&[1, 0, 0]);
        assert_eq!((x.clone() * x2).coefficients(), &[1, 1]);
        // x has order 7 in GF(8)*
        let mut power = field.one();
        for _ in 0..7 {
            power = power * x.clone();
        }
        assert!(power.is_one());
    }

    #[test]
    fn test_strategies_agree() {
        let karatsuba = gf9();
        let schoolbook = gf9().with_strategy(MulStrategy::Schoolbook);
        assert_eq!(schoolbook.strategy(), MulStrategy::Schoolbook);
        assert_eq!(karatsuba.strategy(), MulStrategy::Karatsuba);

        for a in karatsuba.elements() {
            for b in schoolbook.elements() {
                let left = a.checked_mul(&b).unwrap();
                let right = b.checked_mul(&a).unwrap();
                assert_eq!(left, right);
            }
        }
    }

    #[test]
    fn test_every_nonzero_element_is_invertible() {
        for field in [gf8(), gf9(), FieldExtension::new(5, &[1, 0, 2]).unwrap()] {
            for a in field.elements().filter(|a| !a.is_zero()) {
                let inv = a.inverse().unwrap();
                assert!(a.checked_mul(&inv).unwrap().is_one(), "{a:?}");
            }
        }
    }

    #[test]
    fn test_division() {
        let field = gf9();
        let a = field.element(&[2, 1]);
        let b = field.element(&[1, 2]);
        let q = a.checked_div(&b).unwrap();
        assert_eq!(q * b, a);
    }

    #[test]
    fn test_division_by_zero() {
        let field = gf8();
        let a = field.element(&[1, 1]);
        assert_eq!(
            a.checked_div(&field.zero()),
            Err(Error::DivisionByZero { characteristic: 2 })
        );
        assert!(field.zero().inverse().is_err());
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn test_division_operator_panics_on_zero() {
        let field = gf8();
        let _ = field.one() / field.zero();
    }

    #[test]
    fn test_power() {
        let field = gf8();
        let x = field.x();
        assert!(x.pow(0).is_one());
        assert_eq!(x.pow(1), x);
        assert_eq!(x.pow(3).coefficients(), &[1, 1]);
        assert!(x.pow(7).is_one());
        // 2^100 ≡ 2 (mod 7)
        assert_eq!(x.pow(1u128 << 100).coefficients(), &[1, 0, 0]);
        // inverse agrees with a^(q - 2)
        let a = field.element(&[1, 0, 1]);
        assert_eq!(a.pow(6), a.inverse().unwrap());
    }

    #[test]
    fn test_negation() {
        let field = gf9();
        let a = field.element(&[1, 2]);
        assert_eq!((-a.clone()).coefficients(), &[2, 1]);
        assert!((a.clone() + (-a)).is_zero());
    }

    #[test]
    fn test_cross_field_operations() {
        let a = gf8().one();
        let b = FieldExtension::new(2, &[1, 1, 0, 1]).unwrap().one();
        let c = gf9().one();

        let err = a.checked_add(&b).unwrap_err();
        match err {
            Error::CrossFieldOperation { left, right } => {
                assert!(left.contains("x^3 + x + 1"));
                assert!(right.contains("x^3 + x^2 + 1"));
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(a.checked_mul(&c).is_err());
        assert!(a.checked_div(&b).is_err());
        assert_ne!(a, b);
    }

    #[test]
    fn test_separately_built_fields_interoperate() {
        let a = gf8().element(&[1, 0]);
        let b = gf8().element(&[1, 0]);
        assert_eq!(a, b);
        assert_eq!((a * b).coefficients(), &[1, 0, 0]);
    }

    #[test]
    fn test_elements_enumeration() {
        let field = gf9();
        let all: Vec<_> = field.elements().collect();
        assert_eq!(all.len(), 9);
        assert!(all[0].is_zero());
        assert!(all[1].is_one());
        assert_eq!(all[3].coefficients(), &[1, 0]);
        assert_eq!(all[8].coefficients(), &[2, 2]);
    }

    #[test]
    fn test_calculate_value() {
        let field = gf8();
        let a = field.element(&[1, 0, 1]); // x^2 + 1

        // at x: the element itself
        assert_eq!(a.calculate_value(&field.x()).unwrap(), a);
        // at 1: 1 + 1 = 0
        assert!(a.calculate_value(&field.one()).unwrap().is_zero());
        // at x + 1: (x + 1)^2 + 1 = x^2
        let point = field.element(&[1, 1]);
        assert_eq!(a.calculate_value(&point).unwrap().coefficients(), &[1, 0, 0]);
        // cross-field points are rejected
        assert!(a.calculate_value(&gf9().one()).is_err());
    }

    #[test]
    fn test_parse_and_display() {
        let field = gf9();
        let a = field.parse_element("1, -1").unwrap();
        assert_eq!(a.coefficients(), &[1, 2]);
        assert_eq!(a.to_string(), "x + 2");
        assert_eq!(format!("{a:?}"), "GF(3^2)[x + 2]");
        assert!(matches!(
            field.parse_element("1,,2"),
            Err(Error::MalformedInput { .. })
        ));
    }
}
