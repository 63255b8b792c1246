// ============================================================================
// Numeric Errors
// Error types for argument validation and numeric coercion
// ============================================================================

use std::fmt;

/// Broad classification of a [`NumericError`].
///
/// Every failure in this crate is an invalid argument; the variant of
/// [`NumericError`] carries the specific cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The caller supplied an argument the operation cannot accept
    InvalidArgument,
}

/// Errors that can occur while coercing operands or evaluating an operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input string is not a valid decimal number (holds the offending input)
    InvalidNumber(String),
    /// Divisor was exactly zero
    DivideByZero,
    /// Base was zero and exponent was zero or negative
    ZeroToNonPositivePower,
    /// Square root requested for a negative value
    NegativeSquareRoot,
    /// Exponent was infinite
    NonFiniteExponent,
    /// Operation cannot be evaluated with the supplied number of operands
    UnsupportedOperation(&'static str),
}

impl NumericError {
    /// The error kind. Always [`ErrorKind::InvalidArgument`].
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidArgument
    }

    /// Shorthand for `self.kind() == ErrorKind::InvalidArgument`.
    #[inline]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidArgument)
    }
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidNumber(input) => {
                write!(f, "invalid argument: invalid string input {:?}", input)
            },
            NumericError::DivideByZero => write!(f, "invalid argument: cannot divide by zero"),
            NumericError::ZeroToNonPositivePower => write!(
                f,
                "invalid argument: 0 cannot be raised to a non-positive power"
            ),
            NumericError::NegativeSquareRoot => write!(
                f,
                "invalid argument: square root of a negative number is not defined"
            ),
            NumericError::NonFiniteExponent => {
                write!(f, "invalid argument: exponent must be finite")
            },
            NumericError::UnsupportedOperation(name) => {
                write!(f, "invalid argument: {} is not a binary operation", name)
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
