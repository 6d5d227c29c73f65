//! Error types for the gfcalc library.
//!
//! This module provides comprehensive error handling using the `thiserror` crate,
//! with specific error variants for field construction, element arithmetic,
//! input parsing, and irreducible polynomial search.

use thiserror::Error;

/// The main error type for the gfcalc library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // ============ Field Construction Errors ============
    /// The characteristic is not a prime number.
    #[error("characteristic {0} is not prime")]
    InvalidCharacteristic(u64),

    /// The modulus polynomial cannot define an extension field.
    #[error("modulus {modulus} cannot define an extension of GF({characteristic}): {reason}")]
    InvalidModulus {
        /// The characteristic of the base field.
        characteristic: u64,
        /// The rejected modulus, formatted as a polynomial.
        modulus: String,
        /// Why the modulus was rejected.
        reason: String,
    },

    /// The field order p^n does not fit in 128 bits.
    #[error("GF({characteristic}^{degree}) is too large: p^n must fit in 128 bits")]
    FieldTooLarge {
        /// The characteristic of the base field.
        characteristic: u64,
        /// The extension degree.
        degree: usize,
    },

    // ============ Arithmetic Errors ============
    /// Operands belong to different fields.
    #[error("cannot combine an element of {left} with an element of {right}")]
    CrossFieldOperation {
        /// Description of the left operand's field.
        left: String,
        /// Description of the right operand's field.
        right: String,
    },

    /// Attempted division by the additive identity.
    #[error("division by zero in GF({characteristic})")]
    DivisionByZero {
        /// The characteristic of the field where division by zero occurred.
        characteristic: u64,
    },

    // ============ Input Errors ============
    /// Caller-supplied text could not be parsed.
    #[error("malformed input {input:?}: {message}")]
    MalformedInput {
        /// The raw input, echoed back for diagnosis.
        input: String,
        /// Description of what could not be parsed.
        message: String,
    },

    /// Invalid search parameters.
    #[error("invalid parameters: {message}")]
    InvalidParams {
        /// Description of what is invalid.
        message: String,
    },
}

/// A specialized `Result` type for gfcalc operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Create a new `InvalidParams` error.
    #[must_use]
    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::InvalidParams {
            message: message.into(),
        }
    }

    /// Create a new `InvalidModulus` error.
    #[must_use]
    pub fn invalid_modulus(
        characteristic: u64,
        modulus: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidModulus {
            characteristic,
            modulus: modulus.into(),
            reason: reason.into(),
        }
    }

    /// Create a new `MalformedInput` error.
    #[must_use]
    pub fn malformed_input(input: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedInput {
            input: input.into(),
            message: message.into(),
        }
    }

    /// Create a new `CrossFieldOperation` error from two field descriptions.
    #[must_use]
    pub fn cross_field(left: impl ToString, right: impl ToString) -> Self {
        Self::CrossFieldOperation {
            left: left.to_string(),
            right: right.to_string(),
        }
    }
}
