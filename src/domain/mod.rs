// ============================================================================
// Domain Models Module
// Operation selector and algorithm configuration
// ============================================================================

pub mod config;
pub mod operation;

pub use config::{SqrtConfig, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};
pub use operation::Operation;
