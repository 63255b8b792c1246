// ============================================================================
// Engine Module
// Configured calculator facade over the pure operations
// ============================================================================

mod calculator;

pub use calculator::{Calculator, CalculatorBuilder};
