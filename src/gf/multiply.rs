//! Polynomial multiplication over GF(p).
//!
//! Two interchangeable strategies produce identical coefficient sequences:
//!
//! | Strategy | Complexity | Notes |
//! |----------|------------|-------|
//! | [`Schoolbook`] | O(n·m) | Direct convolution |
//! | [`Karatsuba`] | O(n^1.58) | Divide and conquer, schoolbook at single coefficients |
//!
//! Both implement the [`Multiplier`] trait. [`MulStrategy`] is the `Copy`
//! selector stored by extension fields.
//!
//! ```
//! use gfcalc::gf::multiply::{karatsuba_multiply, multiply_naive};
//!
//! // (x + 1)(x + 2) = x^2 + 3x + 2 = x^2 + 2 over GF(3)
//! assert_eq!(multiply_naive(&[1, 1], &[1, 2], 3), vec![1, 0, 2]);
//! assert_eq!(karatsuba_multiply(&[1, 1], &[1, 2], 3), vec![1, 0, 2]);
//! ```

use super::ring::{add_mod, mul_mod, sub_mod, trim};

/// Trait for polynomial multiplication algorithms.
///
/// Operands and results use the high-to-low coefficient order of
/// [`ring`](super::ring). Results are reduced mod p and trimmed.
pub trait Multiplier: Send + Sync {
    /// Get the name of this multiplication algorithm.
    fn name(&self) -> &'static str;

    /// Multiply two polynomials over GF(p).
    fn multiply(&self, a: &[u64], b: &[u64], p: u64) -> Vec<u64>;
}

/// Schoolbook O(n·m) convolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Schoolbook;

/// Karatsuba divide-and-conquer multiplication.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Karatsuba;

impl Multiplier for Schoolbook {
    fn name(&self) -> &'static str {
        "schoolbook"
    }

    fn multiply(&self, a: &[u64], b: &[u64], p: u64) -> Vec<u64> {
        multiply_naive(a, b, p)
    }
}

impl Multiplier for Karatsuba {
    fn name(&self) -> &'static str {
        "karatsuba"
    }

    fn multiply(&self, a: &[u64], b: &[u64], p: u64) -> Vec<u64> {
        karatsuba_multiply(a, b, p)
    }
}

/// Selects a multiplication strategy at runtime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MulStrategy {
    /// Use [`Schoolbook`].
    Schoolbook,
    /// Use [`Karatsuba`].
    #[default]
    Karatsuba,
}

impl Multiplier for MulStrategy {
    fn name(&self) -> &'static str {
        match self {
            Self::Schoolbook => Schoolbook.name(),
            Self::Karatsuba => Karatsuba.name(),
        }
    }

    fn multiply(&self, a: &[u64], b: &[u64], p: u64) -> Vec<u64> {
        match self {
            Self::Schoolbook => multiply_naive(a, b, p),
            Self::Karatsuba => karatsuba_multiply(a, b, p),
        }
    }
}

/// Schoolbook multiplication of two high-to-low polynomials over GF(p).
#[must_use]
pub fn multiply_naive(a: &[u64], b: &[u64], p: u64) -> Vec<u64> {
    if a.is_empty() || b.is_empty() {
        return vec![0];
    }

    let mut result = vec![0u64; a.len() + b.len() - 1];
    for (i, &ai) in a.iter().enumerate() {
        if ai == 0 {
            continue;
        }
        for (j, &bj) in b.iter().enumerate() {
            result[i + j] = add_mod(result[i + j], mul_mod(ai, bj, p), p);
        }
    }

    trim(result)
}

/// Karatsuba multiplication of two high-to-low polynomials over GF(p).
///
/// The recursion works on low-to-high copies of the operands, splitting at
/// half the longer length and combining
/// `z0 + (z1 - z0 - z2)·x^m + z2·x^(2m)`.
#[must_use]
pub fn karatsuba_multiply(a: &[u64], b: &[u64], p: u64) -> Vec<u64> {
    if a.is_empty() || b.is_empty() {
        return vec![0];
    }

    let n = a.len().max(b.len());
    let mut low_a: Vec<u64> = a.iter().rev().copied().collect();
    let mut low_b: Vec<u64> = b.iter().rev().copied().collect();
    low_a.resize(n, 0);
    low_b.resize(n, 0);

    let mut product = karatsuba_low(&low_a, &low_b, p);
    product.reverse();
    trim(product)
}

/// Karatsuba on equal-length low-to-high slices.
///
/// Returns exactly `2 * len - 1` coefficients, untrimmed.
fn karatsuba_low(a: &[u64], b: &[u64], p: u64) -> Vec<u64> {
    let n = a.len();
    debug_assert_eq!(n, b.len());

    if n == 1 {
        return vec![mul_mod(a[0], b[0], p)];
    }

    let m = n / 2;
    let (a0, a1) = a.split_at(m);
    let (b0, b1) = b.split_at(m);

    let z0 = karatsuba_low(a0, b0, p);
    let z2 = karatsuba_low(a1, b1, p);

    // a1 and b1 are at least as long as a0 and b0
    let mut sum_a = a1.to_vec();
    let mut sum_b = b1.to_vec();
    for (i, (&x, &y)) in a0.iter().zip(b0).enumerate() {
        sum_a[i] = add_mod(sum_a[i], x, p);
        sum_b[i] = add_mod(sum_b[i], y, p);
    }
    let mut z1 = karatsuba_low(&sum_a, &sum_b, p);

    for (i, &c) in z0.iter().enumerate() {
        z1[i] = sub_mod(z1[i], c, p);
    }
    for (i, &c) in z2.iter().enumerate() {
        z1[i] = sub_mod(z1[i], c, p);
    }

    let mut result = vec![0u64; 2 * n - 1];
    for (i, c) in z0.into_iter().enumerate() {
        result[i] = c;
    }
    for (i, c) in z1.into_iter().enumerate() {
        result[i + m] = add_mod(result[i + m], c, p);
    }
    for (i, c) in z2.into_iter().enumerate() {
        result[i + 2 * m] = add_mod(result[i + 2 * m], c, p);
    }

    result
}
