//! Galois field (finite field) arithmetic.
//!
//! This module provides exact arithmetic in prime fields GF(p) and their
//! extensions GF(p^n) = GF(p)[x] / (f) for an irreducible modulus f.
//!
//! ## Overview
//!
//! - [`SimpleField`]: the prime field GF(p), minting [`SimpleElement`] and [`SimplePolynomial`]
//! - [`FieldExtension`]: GF(p^n) for a validated modulus, minting [`ExtensionElement`]
//! - [`FieldElement`]: arithmetic shared by both element types
//! - [`Evaluate`]: evaluating a polynomial at a field element
//!
//! The polynomial machinery underneath is exposed as plain functions over
//! coefficient slices (highest degree first):
//!
//! - [`ring`]: coefficient-wise primitives and formatting
//! - [`multiply`]: schoolbook and Karatsuba multiplication
//! - [`reduce`]: long division, remainder and gcd
//! - [`exp`]: modular exponentiation and inversion
//! - [`irreducible`]: Ben-Or and Rabin irreducibility tests
//!
//! ## Example
//!
//! ```
//! use gfcalc::gf::{FieldExtension, SimpleField};
//!
//! // GF(5)
//! let gf5 = SimpleField::new(5).unwrap();
//! let a = gf5.element(3);
//! let b = gf5.element(4);
//! assert_eq!((a + b).value(), 2);
//! assert_eq!((a * b).value(), 2);
//!
//! // GF(2^3) with modulus x^3 + x + 1
//! let gf8 = FieldExtension::new(2, &[1, 0, 1, 1]).unwrap();
//! let a = gf8.element(&[1, 1, 1]);
//! let inv = a.inverse().unwrap();
//! assert!((a * inv).is_one());
//! ```

pub mod exp;
mod extension;
pub mod irreducible;
pub mod multiply;
pub mod reduce;
pub mod ring;
mod simple;

pub use extension::{ExtensionElement, FieldExtension};
pub use irreducible::{is_irreducible, is_irreducible_rabin};
pub use multiply::{Karatsuba, MulStrategy, Multiplier, Schoolbook};
pub use simple::{SimpleElement, SimpleField, SimplePolynomial};

use std::fmt::{Debug, Display};

use crate::error::Result;

/// Core trait for finite field elements.
///
/// Implemented by [`SimpleElement`] and [`ExtensionElement`]. Elements carry
/// their field context, so binary operations fail with
/// [`Error::CrossFieldOperation`](crate::Error::CrossFieldOperation) when the
/// operands come from different fields.
///
/// # Field Axioms
///
/// Implementations satisfy:
/// - **Associativity**: (a + b) + c = a + (b + c), (a * b) * c = a * (b * c)
/// - **Commutativity**: a + b = b + a, a * b = b * a
/// - **Identity**: a + 0 = a, a * 1 = a
/// - **Inverse**: a + (-a) = 0, a * a^(-1) = 1 (for a ≠ 0)
/// - **Distributivity**: a * (b + c) = a * b + a * c
pub trait FieldElement: Clone + PartialEq + Debug + Display + Send + Sync + Sized {
    /// The characteristic p of the field.
    fn characteristic(&self) -> u64;

    /// The additive identity of this element's field.
    #[must_use]
    fn zero_like(&self) -> Self;

    /// The multiplicative identity of this element's field.
    #[must_use]
    fn one_like(&self) -> Self;

    /// Check if this element is zero.
    fn is_zero(&self) -> bool;

    /// Check if this element is one.
    fn is_one(&self) -> bool;

    /// Additive inverse (-a).
    #[must_use]
    fn negate(&self) -> Self;

    /// Field addition.
    ///
    /// # Errors
    ///
    /// Fails if the operands belong to different fields.
    fn checked_add(&self, rhs: &Self) -> Result<Self>;

    /// Field subtraction.
    ///
    /// # Errors
    ///
    /// Fails if the operands belong to different fields.
    fn checked_sub(&self, rhs: &Self) -> Result<Self>;

    /// Field multiplication.
    ///
    /// # Errors
    ///
    /// Fails if the operands belong to different fields.
    fn checked_mul(&self, rhs: &Self) -> Result<Self>;

    /// Multiplicative inverse (a^(-1)).
    ///
    /// # Errors
    ///
    /// Fails with `DivisionByZero` if called on zero.
    fn inverse(&self) -> Result<Self>;

    /// Field division, defined as `self * rhs.inverse()`.
    ///
    /// # Errors
    ///
    /// Fails with `CrossFieldOperation` if the operands belong to different
    /// fields, even when `rhs` is zero, and with `DivisionByZero` otherwise
    /// if `rhs` is zero.
    fn checked_div(&self, rhs: &Self) -> Result<Self> {
        // field mismatch takes precedence over a zero divisor
        self.checked_sub(&rhs.zero_like())?;
        let inv = rhs.inverse()?;
        self.checked_mul(&inv)
    }
}

/// Evaluate a polynomial-like value at a point.
pub trait Evaluate<Point> {
    /// The type of the value at a point.
    type Output;

    /// Compute the value at `point`.
    ///
    /// # Errors
    ///
    /// Fails if `point` belongs to a different field.
    fn calculate_value(&self, point: &Point) -> Result<Self::Output>;
}
