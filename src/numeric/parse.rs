// ============================================================================
// Numeric Parser
// Strict decimal grammar on top of the standard float parser
// ============================================================================

use super::errors::{NumericError, NumericResult};

/// Parse a decimal number string into an `f64`.
///
/// Accepted grammar (after trimming surrounding whitespace):
///
/// ```text
/// number   := sign? mantissa exponent?
/// mantissa := digits ('.' digits?)? | '.' digits
/// exponent := ('e' | 'E') sign? digits
/// sign     := '+' | '-'
/// ```
///
/// Words the standard library would accept (`inf`, `NaN`, `infinity`) are
/// rejected. Magnitudes beyond `f64::MAX` parse to an infinity.
///
/// # Errors
/// Returns `InvalidNumber` carrying the original input when the string does
/// not match the grammar.
///
/// # Example
/// ```
/// use math_library::numeric::parse_number;
///
/// assert_eq!(parse_number("-1.5e2").unwrap(), -150.0);
/// assert!(parse_number("1,5").is_err());
/// ```
pub fn parse_number(input: &str) -> NumericResult<f64> {
    let trimmed = input.trim();

    if !is_decimal_literal(trimmed) {
        tracing::debug!(input, "rejected numeric string");
        return Err(NumericError::InvalidNumber(input.to_string()));
    }

    trimmed
        .parse::<f64>()
        .map_err(|_| NumericError::InvalidNumber(input.to_string()))
}

/// Check `s` against the decimal grammar without allocating.
fn is_decimal_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        frac_digits = count_digits(&bytes[pos..]);
        pos += frac_digits;
    }

    // Mantissa needs at least one digit on either side of the point
    if int_digits + frac_digits == 0 {
        return false;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        let exp_digits = count_digits(&bytes[pos..]);
        if exp_digits == 0 {
            return false;
        }
        pos += exp_digits;
    }

    pos == bytes.len()
}

#[inline]
fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
