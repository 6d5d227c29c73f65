//! # gfcalc
//!
//! Exact arithmetic over finite fields: prime fields GF(p) and their
//! extensions GF(p^n), with polynomial multiplication, reduction,
//! exponentiation, inversion and irreducibility testing.
//!
//! ## Overview
//!
//! This library provides:
//! - Prime fields with any `u64` prime characteristic ([`gf::SimpleField`])
//! - Extension fields defined by a caller-supplied modulus, validated with
//!   Ben-Or's irreducibility test ([`gf::FieldExtension`])
//! - Schoolbook and Karatsuba polynomial multiplication behind one trait
//! - A resumable, parallel batch search for irreducible polynomials
//!   ([`search::IrreducibleSearch`])
//!
//! ## Quick Start
//!
//! ```rust
//! use gfcalc::prelude::*;
//!
//! // GF(5)
//! let gf5 = SimpleField::new(5).unwrap();
//! assert_eq!((gf5.element(3) + gf5.element(4)).value(), 2);
//!
//! // GF(2^3) with modulus x^3 + x + 1
//! let gf8 = FieldExtension::new(2, &[1, 0, 1, 1]).unwrap();
//! let a = gf8.element(&[1, 1, 1]);
//! assert_eq!(a.inverse().unwrap().to_string(), "x^2");
//!
//! // Reducible moduli are rejected
//! assert!(FieldExtension::new(2, &[1, 0, 0, 1]).is_err());
//! ```
//!
//! Searching for irreducible polynomials:
//!
//! ```rust
//! use gfcalc::search::IrreducibleSearch;
//!
//! let found = IrreducibleSearch::new(2, 3).unwrap().find_all().unwrap();
//! assert_eq!(found, vec![vec![1, 0, 1, 1], vec![1, 1, 0, 1]]);
//! ```
//!
//! ## Representation
//!
//! Polynomials are coefficient vectors ordered from the highest degree down,
//! reduced into [0, p) and trimmed of leading zeros. The zero polynomial is
//! `[0]`.
//!
//! ## Features
//!
//! - `parallel` (default): scan search batches in parallel using rayon
//! - `serde`: Enable serialization of search results and stores

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod gf;
pub mod search;
pub mod utils;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::gf::{
        is_irreducible, Evaluate, ExtensionElement, FieldElement, FieldExtension, MulStrategy,
        Multiplier, SimpleElement, SimpleField, SimplePolynomial,
    };
    pub use crate::search::{
        IrreducibleSearch, MemoryStore, PolynomialStore, SearchBatch, SearchConfig,
    };
    pub use crate::utils::{is_prime, parse_coefficients, parse_value};
}

// Re-export commonly used items at crate root
pub use error::{Error, Result};
pub use gf::{ExtensionElement, FieldElement, FieldExtension, SimpleElement, SimpleField};
pub use utils::is_prime;
