// ============================================================================
// Square Root
// Newton-Raphson (Heron) iteration with an absolute tolerance
// ============================================================================

use crate::domain::SqrtConfig;
use crate::numeric::{NumericError, NumericResult, Operand};

/// Outcome of an iterative square root run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SqrtApproximation {
    /// The returned root
    pub value: f64,
    /// Number of Newton steps taken
    pub iterations: u32,
    /// Whether two successive guesses came within tolerance
    pub converged: bool,
}

/// Square root with the default tolerance (1e-6) and iteration cap (1000).
///
/// # Errors
/// - `InvalidNumber` if a string operand does not parse
/// - `NegativeSquareRoot` if the value is negative
///
/// # Example
/// ```
/// use math_library::ops::sqrt;
///
/// assert_eq!(sqrt(0).unwrap(), 0.0);
/// assert!((sqrt("16").unwrap() - 4.0).abs() < 1e-6);
/// assert!(sqrt(-1.0).is_err());
/// ```
#[inline]
pub fn sqrt<T: Operand>(value: T) -> NumericResult<f64> {
    sqrt_with(value, &SqrtConfig::default())
}

/// Square root with caller-supplied convergence parameters.
pub fn sqrt_with<T: Operand>(value: T, config: &SqrtConfig) -> NumericResult<f64> {
    approximate_sqrt(value.to_f64()?, config).map(|approx| approx.value)
}

/// Run the Newton-Raphson loop and report how it ended.
///
/// Starting from `value / 2`, each step computes
/// `next = 0.5 * (guess + value / guess)`. The loop stops as soon as
/// `|next - guess| < tolerance` and returns `next`. If `max_iterations` steps
/// pass without that happening, the last computed guess is returned with
/// `converged == false`.
///
/// Zero short-circuits to exactly `0.0` with no iterations.
///
/// # Errors
/// Returns `NegativeSquareRoot` if `value < 0`.
pub fn approximate_sqrt(value: f64, config: &SqrtConfig) -> NumericResult<SqrtApproximation> {
    if value < 0.0 {
        tracing::debug!(value, "rejected square root of negative value");
        return Err(NumericError::NegativeSquareRoot);
    }

    if value == 0.0 {
        return Ok(SqrtApproximation {
            value: 0.0,
            iterations: 0,
            converged: true,
        });
    }

    let mut guess = value / 2.0;

    for step in 1..=config.max_iterations {
        let next = 0.5 * (guess + value / guess);
        if (next - guess).abs() < config.tolerance {
            tracing::trace!(value, root = next, iterations = step, "sqrt converged");
            return Ok(SqrtApproximation {
                value: next,
                iterations: step,
                converged: true,
            });
        }
        guess = next;
    }

    tracing::debug!(
        value,
        last_guess = guess,
        max_iterations = config.max_iterations,
        "sqrt did not converge"
    );

    Ok(SqrtApproximation {
        value: guess,
        iterations: config.max_iterations,
        converged: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_sqrt_zero_is_exact() {
        assert_eq!(sqrt(0).unwrap(), 0.0);
        assert_eq!(sqrt(0.0).unwrap(), 0.0);
        assert_eq!(sqrt("0").unwrap(), 0.0);
        // -0.0 is not negative
        assert_eq!(sqrt(-0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_sqrt_negative() {
        assert_eq!(sqrt(-1), Err(NumericError::NegativeSquareRoot));
        assert_eq!(sqrt(-1e-300), Err(NumericError::NegativeSquareRoot));
        assert_eq!(sqrt("-4"), Err(NumericError::NegativeSquareRoot));
    }

    #[test]
    fn test_sqrt_invalid_string() {
        assert_eq!(
            sqrt("four"),
            Err(NumericError::InvalidNumber("four".to_string()))
        );
    }

    #[test]
    fn test_sqrt_known_values() {
        assert_eq!(sqrt(4).unwrap(), 2.0);
        assert!((sqrt(2).unwrap() - std::f64::consts::SQRT_2).abs() < 1e-6);
        assert!((sqrt("16").unwrap() - 4.0).abs() < 1e-6);
        assert!((sqrt(1e10).unwrap() - 1e5).abs() < 1e-6);
        assert_eq!(sqrt(9.0).unwrap(), 3.0);
    }

    #[test]
    fn test_sqrt_iteration_count() {
        let approx = approximate_sqrt(4.0, &SqrtConfig::default()).unwrap();
        assert_eq!(approx.value, 2.0);
        assert_eq!(approx.iterations, 1);
        assert!(approx.converged);

        let approx = approximate_sqrt(0.0, &SqrtConfig::default()).unwrap();
        assert_eq!(approx.iterations, 0);
    }

    #[test]
    fn test_sqrt_returns_last_guess_when_not_converged() {
        // 16 -> guess 8 -> 5 -> 4.1
        let one_step = SqrtConfig::default().with_max_iterations(1);
        let approx = approximate_sqrt(16.0, &one_step).unwrap();
        assert_eq!(approx.value, 5.0);
        assert_eq!(approx.iterations, 1);
        assert!(!approx.converged);

        let two_steps = SqrtConfig::default().with_max_iterations(2);
        assert_eq!(sqrt_with(16, &two_steps).unwrap(), 4.1);
    }

    // Current (possibly unintended) behaviour: the tolerance is absolute, so
    // roots smaller than the tolerance are far from exact.
    #[test]
    fn test_sqrt_tiny_value_uses_absolute_tolerance() {
        let root = sqrt(1e-12).unwrap();
        assert!(root > 1.2e-6 && root < 1.3e-6);

        let precise = sqrt_with(1e-12, &SqrtConfig::precise()).unwrap();
        assert!((precise - 1e-6).abs() < 1e-9);
    }

    #[test]
    fn test_sqrt_non_finite_input() {
        // inf / inf is NaN, so the loop never converges
        let approx = approximate_sqrt(f64::INFINITY, &SqrtConfig::default()).unwrap();
        assert!(approx.value.is_nan());
        assert!(!approx.converged);

        assert!(sqrt(f64::NAN).unwrap().is_nan());
    }

    proptest! {
        #[test]
        fn prop_sqrt_squares_back(value in 1e-3f64..1e6) {
            let root = sqrt(value).unwrap();
            prop_assert!((root - value.sqrt()).abs() < 1e-6);
        }
    }
}
