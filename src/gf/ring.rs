//! Polynomial primitives over the integers mod p.
//!
//! A polynomial is a coefficient slice ordered from the highest degree down
//! to the constant term, so `[1, 0, 2]` is x^2 + 2. Every function here that
//! produces coefficients returns them reduced into [0, p) and trimmed: the
//! leading coefficient is nonzero, except for the zero polynomial which is
//! always `[0]`. Input coefficients of p or more are accepted and reduced.

/// (a + b) mod p.
#[inline]
#[must_use]
pub fn add_mod(a: u64, b: u64, p: u64) -> u64 {
    ((u128::from(a) + u128::from(b)) % u128::from(p)) as u64
}

/// (a - b) mod p, always in [0, p).
#[inline]
#[must_use]
pub fn sub_mod(a: u64, b: u64, p: u64) -> u64 {
    let (a, b) = (a % p, b % p);
    if a >= b {
        a - b
    } else {
        p - (b - a)
    }
}

/// (a * b) mod p using a 128-bit intermediate.
#[inline]
#[must_use]
pub fn mul_mod(a: u64, b: u64, p: u64) -> u64 {
    (u128::from(a) * u128::from(b) % u128::from(p)) as u64
}

/// Reduce a signed integer into [0, p).
#[inline]
#[must_use]
pub fn normalize_value(value: i64, p: u64) -> u64 {
    i128::from(value).rem_euclid(i128::from(p)) as u64
}

/// Reduce signed caller-supplied coefficients into [0, p) and trim.
///
/// An empty slice yields the zero polynomial `[0]`.
#[must_use]
pub fn normalize(coeffs: &[i64], p: u64) -> Vec<u64> {
    trim(coeffs.iter().map(|&c| normalize_value(c, p)).collect())
}

/// Reduce unsigned coefficients into [0, p) and trim.
#[must_use]
pub fn reduce_coefficients(coeffs: &[u64], p: u64) -> Vec<u64> {
    trim(coeffs.iter().map(|&c| c % p).collect())
}

/// Remove leading zero coefficients, leaving at least one coefficient.
#[must_use]
pub fn trim(mut coeffs: Vec<u64>) -> Vec<u64> {
    let first_nonzero = coeffs.iter().position(|&c| c != 0);
    match first_nonzero {
        Some(0) => coeffs,
        Some(i) => {
            coeffs.drain(..i);
            coeffs
        }
        None => vec![0],
    }
}

/// Check whether every coefficient is zero.
#[must_use]
pub fn is_zero(coeffs: &[u64]) -> bool {
    coeffs.iter().all(|&c| c == 0)
}

/// Degree of a trimmed polynomial. The zero polynomial reports degree 0.
#[must_use]
pub fn degree(coeffs: &[u64]) -> usize {
    coeffs.len().saturating_sub(1)
}

/// Check whether a trimmed polynomial is the constant 1.
#[must_use]
pub fn is_one(coeffs: &[u64]) -> bool {
    coeffs == [1]
}

/// Combine two polynomials coefficient-wise after aligning their constant terms.
fn zip_with(a: &[u64], b: &[u64], f: impl Fn(u64, u64) -> u64) -> Vec<u64> {
    let len = a.len().max(b.len());
    let pad_a = len - a.len();
    let pad_b = len - b.len();

    let result = (0..len)
        .map(|i| {
            let ai = if i < pad_a { 0 } else { a[i - pad_a] };
            let bi = if i < pad_b { 0 } else { b[i - pad_b] };
            f(ai, bi)
        })
        .collect();

    trim(result)
}

/// Add two polynomials over GF(p).
///
/// # Example
///
/// ```
/// use gfcalc::gf::ring;
///
/// // (x + 1) + (x + 1) = 2x + 2 over GF(3)
/// assert_eq!(ring::add(&[1, 1], &[1, 1], 3), vec![2, 2]);
/// ```
#[must_use]
pub fn add(a: &[u64], b: &[u64], p: u64) -> Vec<u64> {
    zip_with(a, b, |x, y| add_mod(x, y, p))
}

/// Subtract `b` from `a` over GF(p).
#[must_use]
pub fn sub(a: &[u64], b: &[u64], p: u64) -> Vec<u64> {
    zip_with(a, b, |x, y| sub_mod(x, y, p))
}

/// Negate a polynomial over GF(p).
#[must_use]
pub fn neg(a: &[u64], p: u64) -> Vec<u64> {
    trim(a.iter().map(|&c| sub_mod(0, c, p)).collect())
}

/// Multiply every coefficient by a scalar.
#[must_use]
pub fn scalar_mul(a: &[u64], c: u64, p: u64) -> Vec<u64> {
    trim(a.iter().map(|&x| mul_mod(x, c, p)).collect())
}

/// Render a polynomial as human-readable text such as `2x^2 + x + 1`.
///
/// Unit coefficients are elided on non-constant terms and zero terms are
/// skipped. The zero polynomial renders as `0`.
///
/// # Example
///
/// ```
/// use gfcalc::gf::ring::format_polynomial;
///
/// assert_eq!(format_polynomial(&[1, 0, 1, 1]), "x^3 + x + 1");
/// assert_eq!(format_polynomial(&[2, 3]), "2x + 3");
/// assert_eq!(format_polynomial(&[0]), "0");
/// ```
#[must_use]
pub fn format_polynomial(coeffs: &[u64]) -> String {
    let deg = degree(coeffs);
    let terms: Vec<String> = coeffs
        .iter()
        .enumerate()
        .filter(|&(_, &c)| c != 0)
        .map(|(i, &c)| {
            let power = deg - i;
            let coef = if c == 1 && power != 0 {
                String::new()
            } else {
                c.to_string()
            };
            match power {
                0 => coef,
                1 => format!("{coef}x"),
                _ => format!("{coef}x^{power}"),
            }
        })
        .collect();

    if terms.is_empty() {
        "0".to_string()
    } else {
        terms.join(" + ")
    }
}
