// ============================================================================
// Basic Arithmetic
// Add, subtract, multiply and divide over any operand kind
// ============================================================================

use crate::numeric::{NumericError, NumericResult, Operand};

/// Sum of two operands of the same kind.
///
/// # Errors
/// Returns `InvalidNumber` if a string operand does not parse.
///
/// # Example
/// ```
/// use math_library::ops::add;
///
/// assert_eq!(add(2, 3).unwrap(), 5.0);
/// assert_eq!(add("2", "3").unwrap(), 5.0);
/// ```
#[inline]
pub fn add<T: Operand>(a: T, b: T) -> NumericResult<f64> {
    let (a, b) = coerce_pair(&a, &b)?;
    Ok(a + b)
}

/// Difference `a - b` of two operands of the same kind.
///
/// # Errors
/// Returns `InvalidNumber` if a string operand does not parse.
#[inline]
pub fn subtract<T: Operand>(a: T, b: T) -> NumericResult<f64> {
    let (a, b) = coerce_pair(&a, &b)?;
    Ok(a - b)
}

/// Product of two operands of the same kind.
///
/// Integers are widened before multiplying, so `multiply(i32::MAX, 2)` does
/// not overflow.
///
/// # Errors
/// Returns `InvalidNumber` if a string operand does not parse.
#[inline]
pub fn multiply<T: Operand>(a: T, b: T) -> NumericResult<f64> {
    let (a, b) = coerce_pair(&a, &b)?;
    Ok(a * b)
}

/// Quotient `dividend / divisor` using floating-point division.
///
/// Integer operands are widened first: `divide(7, 2)` is `3.5`.
///
/// # Errors
/// - `InvalidNumber` if a string operand does not parse
/// - `DivideByZero` if the divisor is exactly zero (either sign)
///
/// # Example
/// ```
/// use math_library::ops::divide;
///
/// assert_eq!(divide(7, 2).unwrap(), 3.5);
/// assert!(divide(1.0, 0.0).is_err());
/// ```
pub fn divide<T: Operand>(dividend: T, divisor: T) -> NumericResult<f64> {
    let (dividend, divisor) = coerce_pair(&dividend, &divisor)?;

    if divisor == 0.0 {
        tracing::debug!(dividend, "rejected division by zero");
        return Err(NumericError::DivideByZero);
    }

    Ok(dividend / divisor)
}

/// Coerce both operands, left first.
#[inline]
pub(crate) fn coerce_pair<T: Operand>(a: &T, b: &T) -> NumericResult<(f64, f64)> {
    Ok((a.to_f64()?, b.to_f64()?))
}
