// ============================================================================
// Calculator
// Configured front end over the pure operations with event reporting
// ============================================================================

use crate::domain::{Operation, SqrtConfig};
use crate::interfaces::{CalculationEvent, EventHandler, NoOpEventHandler};
use crate::numeric::{NumericError, NumericResult, Operand};
use crate::ops;
use chrono::Utc;
use std::sync::Arc;

/// Stateless calculator holding square-root settings and an event handler.
///
/// Every call is forwarded to the functions in [`crate::ops`]; the result is
/// returned unchanged and an event describing it is sent to the handler.
pub struct Calculator {
    /// Convergence parameters for `sqrt`
    sqrt_config: SqrtConfig,

    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,
}

impl Calculator {
    /// Create a new calculator
    pub fn new(sqrt_config: SqrtConfig, event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            sqrt_config,
            event_handler,
        }
    }

    /// Square root settings in use
    pub fn sqrt_config(&self) -> &SqrtConfig {
        &self.sqrt_config
    }

    /// Evaluate a binary operation.
    ///
    /// # Errors
    /// Whatever the underlying operation returns, plus `UnsupportedOperation`
    /// when `operation` is [`Operation::Sqrt`].
    pub fn evaluate<T: Operand>(&self, operation: Operation, a: T, b: T) -> NumericResult<f64> {
        let operand_kind = a.kind();

        let result = match operation {
            Operation::Add => ops::add(a, b),
            Operation::Subtract => ops::subtract(a, b),
            Operation::Multiply => ops::multiply(a, b),
            Operation::Divide => ops::divide(a, b),
            Operation::Power => ops::power(a, b),
            Operation::Sqrt => Err(NumericError::UnsupportedOperation(operation.name())),
        };

        let event = match &result {
            Ok(value) => CalculationEvent::Evaluated {
                operation,
                operand_kind,
                result: *value,
                timestamp: Utc::now(),
            },
            Err(err) => CalculationEvent::Rejected {
                operation,
                operand_kind,
                reason: err.to_string(),
                timestamp: Utc::now(),
            },
        };
        self.event_handler.on_event(event);

        result
    }

    pub fn add<T: Operand>(&self, a: T, b: T) -> NumericResult<f64> {
        self.evaluate(Operation::Add, a, b)
    }

    pub fn subtract<T: Operand>(&self, a: T, b: T) -> NumericResult<f64> {
        self.evaluate(Operation::Subtract, a, b)
    }

    pub fn multiply<T: Operand>(&self, a: T, b: T) -> NumericResult<f64> {
        self.evaluate(Operation::Multiply, a, b)
    }

    pub fn divide<T: Operand>(&self, dividend: T, divisor: T) -> NumericResult<f64> {
        self.evaluate(Operation::Divide, dividend, divisor)
    }

    pub fn power<T: Operand>(&self, base: T, exponent: T) -> NumericResult<f64> {
        self.evaluate(Operation::Power, base, exponent)
    }

    /// Square root using the configured tolerance and iteration cap.
    ///
    /// A run that exhausts its iterations still returns `Ok` with the last
    /// guess, and additionally emits `SqrtNotConverged`.
    pub fn sqrt<T: Operand>(&self, value: T) -> NumericResult<f64> {
        let operand_kind = value.kind();

        let approx = value
            .to_f64()
            .and_then(|v| ops::approximate_sqrt(v, &self.sqrt_config).map(|a| (v, a)));

        let mut events = Vec::with_capacity(2);
        let result = match approx {
            Ok((input, approx)) => {
                if !approx.converged {
                    events.push(CalculationEvent::SqrtNotConverged {
                        value: input,
                        last_guess: approx.value,
                        iterations: approx.iterations,
                        timestamp: Utc::now(),
                    });
                }
                events.push(CalculationEvent::Evaluated {
                    operation: Operation::Sqrt,
                    operand_kind,
                    result: approx.value,
                    timestamp: Utc::now(),
                });
                Ok(approx.value)
            },
            Err(err) => {
                events.push(CalculationEvent::Rejected {
                    operation: Operation::Sqrt,
                    operand_kind,
                    reason: err.to_string(),
                    timestamp: Utc::now(),
                });
                Err(err)
            },
        };

        self.event_handler.on_events(events);
        result
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(SqrtConfig::default(), Arc::new(NoOpEventHandler))
    }
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating calculators with fluent API
///
/// # Example
/// ```
/// use math_library::prelude::*;
/// use std::sync::Arc;
///
/// let calculator = CalculatorBuilder::new()
///     .with_tolerance(1e-9)
///     .with_max_iterations(200)
///     .build(Arc::new(NoOpEventHandler))
///     .unwrap();
///
/// assert!((calculator.sqrt(2).unwrap() - 1.414213562).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CalculatorBuilder {
    sqrt_config: SqrtConfig,
}

impl CalculatorBuilder {
    /// Create a new builder with default square root settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the square root settings wholesale
    pub fn with_sqrt_config(mut self, config: SqrtConfig) -> Self {
        self.sqrt_config = config;
        self
    }

    /// Set the convergence tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.sqrt_config.tolerance = tolerance;
        self
    }

    /// Set the iteration cap
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.sqrt_config.max_iterations = max_iterations;
        self
    }

    /// Validate the settings and build the calculator
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> Result<Calculator, String> {
        self.sqrt_config.validate()?;
        Ok(Calculator::new(self.sqrt_config, event_handler))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::OperandKind;
    use std::sync::Mutex;

    /// Records every event for inspection
    #[derive(Default)]
    struct RecordingHandler {
        events: Mutex<Vec<CalculationEvent>>,
    }

    impl RecordingHandler {
        fn take(&self) -> Vec<CalculationEvent> {
            std::mem::take(&mut *self.events.lock().unwrap())
        }
    }

    impl EventHandler for RecordingHandler {
        fn on_event(&self, event: CalculationEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    fn recording_calculator(config: SqrtConfig) -> (Calculator, Arc<RecordingHandler>) {
        let handler = Arc::new(RecordingHandler::default());
        let calculator = Calculator::new(config, handler.clone());
        (calculator, handler)
    }

    #[test]
    fn test_evaluate_dispatch() {
        let calculator = Calculator::default();

        assert_eq!(calculator.evaluate(Operation::Add, 2, 3).unwrap(), 5.0);
        assert_eq!(calculator.evaluate(Operation::Subtract, 2.0, 3.0).unwrap(), -1.0);
        assert_eq!(calculator.evaluate(Operation::Multiply, "4", "5").unwrap(), 20.0);
        assert_eq!(calculator.evaluate(Operation::Divide, 7, 2).unwrap(), 3.5);
        assert_eq!(calculator.evaluate(Operation::Power, 2, 10).unwrap(), 1024.0);
    }

    #[test]
    fn test_evaluate_rejects_sqrt() {
        let calculator = Calculator::default();
        let err = calculator.evaluate(Operation::Sqrt, 4, 0).unwrap_err();
        assert_eq!(err, NumericError::UnsupportedOperation("sqrt"));
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_events_for_success_and_failure() {
        let (calculator, handler) = recording_calculator(SqrtConfig::default());

        calculator.add("2", "3").unwrap();
        assert!(calculator.divide(1, 0).is_err());

        let events = handler.take();
        assert_eq!(events.len(), 2);
        assert!(matches!(
            events[0],
            CalculationEvent::Evaluated {
                operation: Operation::Add,
                operand_kind: OperandKind::Text,
                result,
                ..
            } if result == 5.0
        ));
        assert!(matches!(
            &events[1],
            CalculationEvent::Rejected {
                operation: Operation::Divide,
                operand_kind: OperandKind::Integer,
                reason,
                ..
            } if reason.contains("divide by zero")
        ));
    }

    #[test]
    fn test_sqrt_uses_configured_iterations() {
        let (calculator, handler) =
            recording_calculator(SqrtConfig::default().with_max_iterations(1));

        assert_eq!(calculator.sqrt(16).unwrap(), 5.0);

        let events = handler.take();
        assert_eq!(events.len(), 2);
        assert!(matches!(
            events[0],
            CalculationEvent::SqrtNotConverged {
                last_guess,
                iterations: 1,
                ..
            } if last_guess == 5.0
        ));
        assert_eq!(events[1].operation(), Operation::Sqrt);
    }

    #[test]
    fn test_sqrt_rejections() {
        let (calculator, handler) = recording_calculator(SqrtConfig::default());

        assert_eq!(calculator.sqrt(-4), Err(NumericError::NegativeSquareRoot));
        assert!(calculator.sqrt("nope").is_err());

        let events = handler.take();
        assert_eq!(events.len(), 2);
        assert!(events
            .iter()
            .all(|e| matches!(e, CalculationEvent::Rejected { .. })));
    }

    #[test]
    fn test_builder_validates() {
        assert!(CalculatorBuilder::new()
            .with_tolerance(0.0)
            .build(Arc::new(NoOpEventHandler))
            .is_err());

        let calculator = CalculatorBuilder::new()
            .with_sqrt_config(SqrtConfig::precise())
            .build(Arc::new(NoOpEventHandler))
            .unwrap();
        assert_eq!(calculator.sqrt_config(), &SqrtConfig::precise());
    }

    #[test]
    fn test_calculator_is_shareable() {
        let calculator = Arc::new(Calculator::default());

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let calculator = Arc::clone(&calculator);
                std::thread::spawn(move || calculator.multiply(i, i).unwrap())
            })
            .collect();

        let results: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results, vec![0.0, 1.0, 4.0, 9.0]);
    }
}
