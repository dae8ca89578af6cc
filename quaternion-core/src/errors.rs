//! Error types for vector and quaternion algebra.
//!
//! This module provides a unified error type [`AlgebraError`] covering the ways an
//! algebra call can be misused: wrong operand types, out-of-range component indices,
//! values that are not numbers, wrong-arity sequences, and divisions by a zero
//! length or magnitude.
//!
//! # Error Categories
//!
//! | Variant | Kind name | Raised by |
//! |---------|-----------|-----------|
//! | [`TypeMismatch`](AlgebraError::TypeMismatch) | `TypeKind` | operand dispatch (`add_operand`, `mul_operand`, ...) |
//! | [`IndexOutOfRange`](AlgebraError::IndexOutOfRange) | `IndexKind` | checked `get`/`set` |
//! | [`NumericConversion`](AlgebraError::NumericConversion) | `NumericConversionKind` | component coercion and parsing |
//! | [`InvalidLength`](AlgebraError::InvalidLength) | `LengthKind` | sequences that are not exactly 3 long |
//! | [`MathError`](AlgebraError::MathError) | `DivisionByZeroKind` | `unit`, `reciprocal`, point transforms |
//!
//! None of these are recoverable: every one is a programmer error at the call site
//! and is returned to the caller unchanged.
//!
//! ```
//! use quaternion_core::{AlgebraError, MathErrorKind};
//!
//! fn safe_divide(a: f64, b: f64) -> Result<f64, AlgebraError> {
//!     if b == 0.0 {
//!         return Err(AlgebraError::math_error(
//!             "safe_divide",
//!             MathErrorKind::DivisionByZero,
//!             "divisor is zero",
//!         ));
//!     }
//!     Ok(a / b)
//! }
//! ```

use thiserror::Error;

/// Classification of mathematical errors.
///
/// Used with [`AlgebraError::MathError`] to distinguish numerical failure modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathErrorKind {
    /// Attempted division by a zero length or magnitude.
    DivisionByZero,
}

/// Unified error type for vector and quaternion operations.
///
/// Use the constructor methods ([`type_mismatch`](Self::type_mismatch),
/// [`index_out_of_range`](Self::index_out_of_range), etc.) for consistent creation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AlgebraError {
    /// An operand is not one of the types the operation accepts.
    #[error("Type mismatch in {operation}: expected {expected}, found {found}")]
    TypeMismatch {
        operation: String,
        expected: String,
        found: String,
    },

    /// Component index outside the valid range.
    #[error(
        "Index error in {operation}: index {index} out of bounds (valid range: 0-{max_index})"
    )]
    IndexOutOfRange {
        operation: String,
        index: usize,
        max_index: usize,
    },

    /// A component value could not be converted to `f64`.
    #[error("Numeric conversion error for {input:?}: {message}")]
    NumericConversion { input: String, message: String },

    /// A sequence did not have the required number of components.
    #[error(
        "Length error in {operation}: expected {expected} components, found {actual}"
    )]
    InvalidLength {
        operation: String,
        expected: usize,
        actual: usize,
    },

    /// Numerical computation failure.
    #[error("Math error in {operation} ({kind:?}): {message}")]
    MathError {
        operation: String,
        kind: MathErrorKind,
        message: String,
    },
}

/// Convenience alias for `Result<T, AlgebraError>`.
pub type AlgebraResult<T> = Result<T, AlgebraError>;

impl AlgebraError {
    /// Creates a [`TypeMismatch`](Self::TypeMismatch) error.
    pub fn type_mismatch(operation: &str, expected: &str, found: &str) -> Self {
        tracing::trace!(operation, expected, found, "operand type mismatch");
        Self::TypeMismatch {
            operation: operation.to_string(),
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates an [`IndexOutOfRange`](Self::IndexOutOfRange) error for a container of `len` components.
    pub fn index_out_of_range(operation: &str, index: usize, len: usize) -> Self {
        Self::IndexOutOfRange {
            operation: operation.to_string(),
            index,
            max_index: len.saturating_sub(1),
        }
    }

    /// Creates a [`NumericConversion`](Self::NumericConversion) error.
    pub fn numeric_conversion(input: &str, reason: &str) -> Self {
        Self::NumericConversion {
            input: input.to_string(),
            message: reason.to_string(),
        }
    }

    /// Creates an [`InvalidLength`](Self::InvalidLength) error.
    pub fn invalid_length(operation: &str, expected: usize, actual: usize) -> Self {
        Self::InvalidLength {
            operation: operation.to_string(),
            expected,
            actual,
        }
    }

    /// Creates a [`MathError`](Self::MathError) with the given kind.
    pub fn math_error(operation: &str, kind: MathErrorKind, reason: &str) -> Self {
        tracing::debug!(operation, ?kind, reason, "rejected math operation");
        Self::MathError {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }

    /// Returns the taxonomy name of this error.
    ///
    /// Lets callers classify failures without matching on variant fields.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::TypeMismatch { .. } => "TypeKind",
            Self::IndexOutOfRange { .. } => "IndexKind",
            Self::NumericConversion { .. } => "NumericConversionKind",
            Self::InvalidLength { .. } => "LengthKind",
            Self::MathError {
                kind: MathErrorKind::DivisionByZero,
                ..
            } => "DivisionByZeroKind",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_mismatch_error() {
        let err = AlgebraError::type_mismatch("Vector3::add", "Vector3", "f64");
        assert_eq!(
            err.to_string(),
            "Type mismatch in Vector3::add: expected Vector3, found f64"
        );
        assert_eq!(err.kind_name(), "TypeKind");
    }

    #[test]
    fn test_index_error() {
        let err = AlgebraError::index_out_of_range("Quaternion::get", 7, 4);
        assert_eq!(
            err.to_string(),
            "Index error in Quaternion::get: index 7 out of bounds (valid range: 0-3)"
        );
        assert_eq!(err.kind_name(), "IndexKind");
    }

    #[test]
    fn test_numeric_conversion_error() {
        let err = AlgebraError::numeric_conversion("abc", "invalid float literal");
        assert!(err.to_string().contains("\"abc\""));
        assert!(err.to_string().contains("invalid float literal"));
        assert_eq!(err.kind_name(), "NumericConversionKind");
    }

    #[test]
    fn test_invalid_length_error() {
        let err = AlgebraError::invalid_length("Quaternion::transform_sequence", 3, 2);
        assert!(err.to_string().contains("expected 3 components, found 2"));
        assert_eq!(err.kind_name(), "LengthKind");
    }

    #[test]
    fn test_math_error_with_kind() {
        let err = AlgebraError::math_error(
            "Vector3::unit",
            MathErrorKind::DivisionByZero,
            "vector has zero length",
        );
        assert!(err.to_string().contains("Math error"));
        assert!(err.to_string().contains("DivisionByZero"));
        assert_eq!(err.kind_name(), "DivisionByZeroKind");
    }

    #[test]
    fn test_kind_names_cover_taxonomy() {
        let errors = [
            AlgebraError::type_mismatch("op", "Vector3", "scalar"),
            AlgebraError::index_out_of_range("op", 9, 3),
            AlgebraError::numeric_conversion("x", "bad"),
            AlgebraError::invalid_length("op", 3, 1),
            AlgebraError::math_error("op", MathErrorKind::DivisionByZero, "zero"),
        ];
        let names: Vec<&str> = errors.iter().map(AlgebraError::kind_name).collect();
        assert_eq!(
            names,
            [
                "TypeKind",
                "IndexKind",
                "NumericConversionKind",
                "LengthKind",
                "DivisionByZeroKind"
            ]
        );
    }

    #[test]
    fn test_send_sync() {
        fn _assert_send<T: Send>() {}
        fn _assert_sync<T: Sync>() {}
        _assert_send::<AlgebraError>();
        _assert_sync::<AlgebraError>();
    }
}
