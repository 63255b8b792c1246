// ============================================================================
// Operations Module
// Pure arithmetic functions over integer, float and string operands
// ============================================================================

mod arithmetic;
mod power;
mod sqrt;

pub use arithmetic::{add, divide, multiply, subtract};
pub use power::power;
pub use sqrt::{approximate_sqrt, sqrt, sqrt_with, SqrtApproximation};
