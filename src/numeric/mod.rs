// ============================================================================
// Numeric Module
// Operand coercion and error types shared by every operation
// ============================================================================
//
// This module provides:
// - parse_number: strict decimal string parser
// - Operand: integer / float / string coercion to f64
// - NumericError: the single InvalidArgument error family
//
// Design principles:
// - All coercions return Result (no panics)
// - Only string operands can fail to coerce

mod errors;
mod operand;
mod parse;

pub use errors::{ErrorKind, NumericError, NumericResult};
pub use operand::{Operand, OperandKind};
pub use parse::parse_number;
