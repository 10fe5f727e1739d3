//! Error types for the frame and ephemeris providers.
//!
//! The numerical astrometry pipeline itself never fails: it clamps, floors and
//! reports through warning flags. Errors only come from the places that can
//! genuinely refuse a request, such as a model asked for a date outside its
//! validity window or handed a non-finite epoch.
//!
//! | Variant | Use Case | Recoverable? |
//! |---------|----------|--------------|
//! | [`InvalidDate`](AstroError::InvalidDate) | Non-finite or unusable two-part Julian date | No |
//! | [`MathError`](AstroError::MathError) | Division by zero, out-of-range input | No |
//! | [`DataError`](AstroError::DataError) | Caller-supplied model or ephemeris unavailable | Yes |
//! | [`CalculationError`](AstroError::CalculationError) | Date outside a series' validity window | No |
//!
//! ```
//! use celestial_core::{AstroError, MathErrorKind};
//!
//! fn inverse_distance(r: f64) -> Result<f64, AstroError> {
//!     if r == 0.0 {
//!         return Err(AstroError::math_error(
//!             "inverse_distance",
//!             MathErrorKind::DivisionByZero,
//!             "distance is zero",
//!         ));
//!     }
//!     Ok(1.0 / r)
//! }
//! ```

use thiserror::Error;

/// Classification of mathematical errors.
#[derive(Debug, Clone, PartialEq)]
pub enum MathErrorKind {
    /// Attempted division by zero or near-zero value.
    DivisionByZero,
    /// Input value is invalid for the operation.
    InvalidInput,
    /// Value outside valid domain (e.g., latitude > 90°).
    OutOfRange,
}

/// Unified error type for the astrometry workspace.
#[derive(Error, Debug)]
pub enum AstroError {
    /// Two-part Julian date that cannot be used (NaN, infinite).
    #[error("Invalid date {jd1} + {jd2}: {message}")]
    InvalidDate { jd1: f64, jd2: f64, message: String },

    /// Numerical computation failure.
    #[error("Math error in {operation} ({kind:?}): {message}")]
    MathError {
        operation: String,
        kind: MathErrorKind,
        message: String,
    },

    /// A caller-provided data source could not answer.
    ///
    /// The only recoverable variant; a different provider may succeed.
    #[error("Data error ({source_name} - {operation}): {message}")]
    DataError {
        source_name: String,
        operation: String,
        message: String,
    },

    /// Algorithm or calculation failure.
    #[error("Calculation error in {context}: {message}")]
    CalculationError { context: String, message: String },
}

/// Convenience alias for `Result<T, AstroError>`.
pub type AstroResult<T> = Result<T, AstroError>;

impl AstroError {
    pub fn invalid_date(jd1: f64, jd2: f64, reason: &str) -> Self {
        Self::InvalidDate {
            jd1,
            jd2,
            message: reason.to_string(),
        }
    }

    pub fn math_error(operation: &str, kind: MathErrorKind, reason: &str) -> Self {
        Self::MathError {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }

    pub fn data_error(source_name: &str, operation: &str, reason: &str) -> Self {
        Self::DataError {
            source_name: source_name.to_string(),
            operation: operation.to_string(),
            message: reason.to_string(),
        }
    }

    pub fn calculation_error(context: &str, reason: &str) -> Self {
        Self::CalculationError {
            context: context.to_string(),
            message: reason.to_string(),
        }
    }

    /// Returns `true` if a fallback provider might succeed.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::DataError { .. })
    }
}
