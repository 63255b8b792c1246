// ============================================================================
// Operand Coercion
// Uniform conversion of integer, float and string inputs to f64
// ============================================================================

use super::errors::NumericResult;
use super::parse::parse_number;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Declared kind of an operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OperandKind {
    /// Native integer, widened losslessly (i32) or nearest (i64) to f64
    Integer,
    /// Native f64
    Float,
    /// Numeric string, parsed with [`parse_number`]
    Text,
}

impl fmt::Display for OperandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperandKind::Integer => write!(f, "integer"),
            OperandKind::Float => write!(f, "float"),
            OperandKind::Text => write!(f, "string"),
        }
    }
}

/// A value that can take part in an arithmetic operation.
///
/// Operations are generic over a single `T: Operand`, so both sides of a
/// binary operation always share the same declared kind. Only the string
/// implementations can fail.
pub trait Operand {
    /// Coerce to `f64`.
    fn to_f64(&self) -> NumericResult<f64>;

    /// The declared kind of this operand.
    fn kind(&self) -> OperandKind;
}

impl Operand for i32 {
    #[inline]
    fn to_f64(&self) -> NumericResult<f64> {
        Ok(f64::from(*self))
    }

    #[inline]
    fn kind(&self) -> OperandKind {
        OperandKind::Integer
    }
}

impl Operand for i64 {
    #[inline]
    fn to_f64(&self) -> NumericResult<f64> {
        // Rounds to nearest above 2^53
        Ok(*self as f64)
    }

    #[inline]
    fn kind(&self) -> OperandKind {
        OperandKind::Integer
    }
}

impl Operand for f64 {
    #[inline]
    fn to_f64(&self) -> NumericResult<f64> {
        Ok(*self)
    }

    #[inline]
    fn kind(&self) -> OperandKind {
        OperandKind::Float
    }
}

impl Operand for &str {
    #[inline]
    fn to_f64(&self) -> NumericResult<f64> {
        parse_number(self)
    }

    #[inline]
    fn kind(&self) -> OperandKind {
        OperandKind::Text
    }
}

impl Operand for String {
    #[inline]
    fn to_f64(&self) -> NumericResult<f64> {
        parse_number(self)
    }

    #[inline]
    fn kind(&self) -> OperandKind {
        OperandKind::Text
    }
}
