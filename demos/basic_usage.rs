// ============================================================================
// Basic Usage Example
// ============================================================================

use math_library::prelude::*;
use std::sync::Arc;

fn main() {
    #[cfg(feature = "logging")]
    math_library::init_logging();

    println!("=== Math Library Example ===\n");

    println!("Integers:");
    println!("  7 + 2 = {:?}", add(7, 2));
    println!("  7 / 2 = {:?}", divide(7, 2));
    println!("  2 ^ 10 = {:?}", power(2, 10));

    println!("\nFloats:");
    println!("  1.5 * 4.0 = {:?}", multiply(1.5, 4.0));
    println!("  2.0 ^ -2.0 = {:?}", power(2.0, -2.0));
    println!("  sqrt(2.0) = {:?}", sqrt(2.0));

    println!("\nStrings:");
    println!("  \"2\" + \"3\" = {:?}", add("2", "3"));
    println!("  sqrt(\"16\") = {:?}", sqrt("16"));
    println!("  \"x\" - \"3\" = {:?}", subtract("x", "3"));

    println!("\n=== Rejected Arguments ===");
    for err in [
        divide(1, 0).unwrap_err(),
        power(0, -1).unwrap_err(),
        sqrt(-1).unwrap_err(),
    ] {
        println!("  {:?}: {}", err.kind(), err);
    }

    println!("\n=== Calculator With Logging ===");
    let calculator = CalculatorBuilder::new()
        .with_max_iterations(3)
        .build(Arc::new(LoggingEventHandler))
        .expect("valid configuration");

    // Three iterations are not enough for 1e6; the last guess comes back
    let approx = calculator.sqrt(1e6);
    println!("  sqrt(1e6) with 3 iterations = {:?}", approx);

    for op in Operation::ALL.iter().filter(|op| op.is_binary()) {
        println!("  {} (9, 3) = {:?}", op, calculator.evaluate(*op, 9, 3));
    }
}
