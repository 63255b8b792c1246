// ============================================================================
// Power
// Exponentiation by repeated multiplication
// ============================================================================

use super::arithmetic::coerce_pair;
use crate::numeric::{NumericError, NumericResult, Operand};

/// Raise `base` to `exponent` by repeated multiplication.
///
/// The accumulator starts at 1 and is multiplied by `base` once for every
/// integer counter value `i = 0, 1, 2, ...` with `i < |exponent|`. For a
/// positive exponent the product is returned, otherwise its reciprocal.
///
/// This is not a real-valued power. A fractional exponent multiplies
/// `ceil(|exponent|)` times, so `power(4.0, 0.5)` is `4.0`, not `2.0`.
/// Running time is linear in `|exponent|`.
///
/// # Errors
/// - `InvalidNumber` if a string operand does not parse
/// - `ZeroToNonPositivePower` if `base == 0` and `exponent <= 0`
/// - `NonFiniteExponent` if `exponent` is infinite
///
/// # Example
/// ```
/// use math_library::ops::power;
///
/// assert_eq!(power(2, 3).unwrap(), 8.0);
/// assert_eq!(power(2, -2).unwrap(), 0.25);
/// assert!(power(0, 0).is_err());
/// ```
pub fn power<T: Operand>(base: T, exponent: T) -> NumericResult<f64> {
    let (base, exponent) = coerce_pair(&base, &exponent)?;
    power_f64(base, exponent)
}

fn power_f64(base: f64, exponent: f64) -> NumericResult<f64> {
    if base == 0.0 && exponent <= 0.0 {
        tracing::debug!(exponent, "rejected zero base with non-positive exponent");
        return Err(NumericError::ZeroToNonPositivePower);
    }

    if exponent.is_infinite() {
        return Err(NumericError::NonFiniteExponent);
    }

    let magnitude = exponent.abs();
    let mut result = 1.0;
    let mut i: u64 = 0;
    while (i as f64) < magnitude {
        result *= base;
        i += 1;
    }

    tracing::trace!(base, exponent, iterations = i, result, "power");

    Ok(if exponent > 0.0 { result } else { 1.0 / result })
}
