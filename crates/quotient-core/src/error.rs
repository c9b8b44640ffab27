//! Error type shared by every fallible fraction operation.

use thiserror::Error;

/// Errors raised by fraction construction, arithmetic and parsing.
///
/// The two arithmetic kinds are always distinguishable so callers can
/// report them separately.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FractionError {
    /// A zero denominator was requested, or zero was inverted.
    #[error("division by zero")]
    DivisionByZero,

    /// An intermediate or final value does not fit in an `i64`.
    #[error("arithmetic overflow in {operation}")]
    ArithmeticOverflow {
        /// The primitive step that overflowed.
        operation: &'static str,
    },

    /// Text could not be read as `n` or `n/d`.
    #[error("invalid fraction literal: {0}")]
    Parse(String),
}

impl FractionError {
    /// Shorthand for an overflow in the named step.
    #[must_use]
    pub const fn overflow(operation: &'static str) -> Self {
        Self::ArithmeticOverflow { operation }
    }

    /// Returns true for [`FractionError::DivisionByZero`].
    #[must_use]
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::DivisionByZero)
    }

    /// Returns true for [`FractionError::ArithmeticOverflow`].
    #[must_use]
    pub fn is_overflow(&self) -> bool {
        matches!(self, Self::ArithmeticOverflow { .. })
    }
}
