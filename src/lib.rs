// ============================================================================
// Math Library
// Arithmetic over integers, floats and numeric strings
// ============================================================================

//! # Math Library
//!
//! Addition, subtraction, multiplication, division, exponentiation and square
//! root over integers, floating-point values and numeric strings. Every
//! operation returns an `f64`.
//!
//! ## Features
//!
//! - **One function per operation**, generic over the [`numeric::Operand`] kind
//! - **Strict numeric string parsing** with a single `InvalidArgument` error family
//! - **Iterative algorithms**: repeated-multiplication power and Newton-Raphson
//!   square root with configurable tolerance
//! - **Event reporting** through a pluggable [`interfaces::EventHandler`]
//!
//! ## Example
//!
//! ```rust
//! use math_library::prelude::*;
//!
//! assert_eq!(add("2", "3").unwrap(), 5.0);
//! assert_eq!(divide(7, 2).unwrap(), 3.5);
//! assert_eq!(power(2, -2).unwrap(), 0.25);
//! assert!((sqrt(2).unwrap() - 1.41421356).abs() < 1e-6);
//!
//! let err = subtract("x", "3").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidArgument);
//!
//! let calculator = Calculator::default();
//! assert_eq!(calculator.evaluate(Operation::Multiply, 4.0, 2.5).unwrap(), 10.0);
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod ops;

/// Install a `tracing` subscriber filtered by `RUST_LOG` (default `info`).
///
/// Intended for binaries and demos; returns quietly if a global subscriber is
/// already set.
#[cfg(feature = "logging")]
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{Operation, SqrtConfig};
    pub use crate::engine::{Calculator, CalculatorBuilder};
    pub use crate::interfaces::{
        CalculationEvent, EventHandler, LoggingEventHandler, NoOpEventHandler,
    };
    pub use crate::numeric::{
        parse_number, ErrorKind, NumericError, NumericResult, Operand, OperandKind,
    };
    pub use crate::ops::{
        add, approximate_sqrt, divide, multiply, power, sqrt, sqrt_with, subtract,
        SqrtApproximation,
    };
}
