//! Error types shared by every module of the crate.
//!
//! All validation is eager: constructors and operations check their inputs
//! before doing any work, so a returned error never leaves a half-built value
//! behind.

use thiserror::Error;

/// The error type for algebrix operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // ============ Argument Errors ============
    /// Malformed input: empty coefficient lists, wrong lengths, bad radix digits.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Description of what is invalid.
        message: String,
    },

    /// Operation combined values from incompatible structures.
    #[error("type mismatch: {message}")]
    TypeMismatch {
        /// Description of the two structures involved.
        message: String,
    },

    // ============ Arithmetic Errors ============
    /// The modular inverse does not exist because the gcd is not a unit.
    #[error("{value} has no inverse modulo {modulus}")]
    NoInverse {
        /// The value that was inverted, rendered for display.
        value: String,
        /// The modulus, rendered for display.
        modulus: String,
    },

    /// Division by (or inversion of) a zero element.
    #[error("division by zero")]
    DivisionByZero,

    // ============ Construction Errors ============
    /// A prime field modulus that is not a prime >= 2.
    #[error("modulus {modulus} is not a prime >= 2")]
    InvalidModulus {
        /// The rejected modulus, rendered for display.
        modulus: String,
    },

    /// A finite field size that is not a prime power.
    #[error("size {size} is not a prime power (must be p^n for prime p and n >= 1)")]
    InvalidSize {
        /// The rejected size, rendered for display.
        size: String,
    },

    /// A characteristic polynomial that factors over the prime field.
    #[error("characteristic {characteristic} is reducible over GF({prime})")]
    ReducibleCharacteristic {
        /// The rejected polynomial, rendered for display.
        characteristic: String,
        /// The prime of the base field.
        prime: String,
    },
}

/// A specialized `Result` type for algebrix operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Create a new `InvalidArgument` error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a new `TypeMismatch` error.
    #[must_use]
    pub fn type_mismatch(message: impl Into<String>) -> Self {
        Self::TypeMismatch {
            message: message.into(),
        }
    }

    /// Create a new `NoInverse` error from anything displayable.
    #[must_use]
    pub fn no_inverse(value: impl ToString, modulus: impl ToString) -> Self {
        Self::NoInverse {
            value: value.to_string(),
            modulus: modulus.to_string(),
        }
    }
}
