// ============================================================================
// Square Root Configuration
// Convergence parameters for the Newton-Raphson square root
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default convergence tolerance
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Default iteration cap
pub const DEFAULT_MAX_ITERATIONS: u32 = 1000;

/// Convergence parameters for the iterative square root
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SqrtConfig {
    /// Stop once two successive guesses differ by less than this
    pub tolerance: f64,

    /// Give up after this many iterations and return the last guess
    pub max_iterations: u32,
}

impl SqrtConfig {
    /// Create a new configuration
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Builder method: Set convergence tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Builder method: Set iteration cap
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err("Tolerance must be a finite positive number".to_string());
        }

        if self.max_iterations == 0 {
            return Err("Max iterations must be at least 1".to_string());
        }

        Ok(())
    }
}

impl Default for SqrtConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TOLERANCE, DEFAULT_MAX_ITERATIONS)
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl SqrtConfig {
    /// Tight tolerance for callers that need close to full f64 precision
    /// - Tolerance: 1e-12
    /// - Max iterations: 10 000
    pub fn precise() -> Self {
        Self::new(1e-12, 10_000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SqrtConfig::default();
        assert_eq!(config.tolerance, 1e-6);
        assert_eq!(config.max_iterations, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = SqrtConfig::default()
            .with_tolerance(1e-9)
            .with_max_iterations(50);

        assert_eq!(config.tolerance, 1e-9);
        assert_eq!(config.max_iterations, 50);
    }

    #[test]
    fn test_validation() {
        assert!(SqrtConfig::default().with_tolerance(0.0).validate().is_err());
        assert!(SqrtConfig::default().with_tolerance(-1.0).validate().is_err());
        assert!(SqrtConfig::default()
            .with_tolerance(f64::NAN)
            .validate()
            .is_err());
        assert!(SqrtConfig::default()
            .with_max_iterations(0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_preset_configs() {
        let precise = SqrtConfig::precise();
        assert!(precise.tolerance < SqrtConfig::default().tolerance);
        assert!(precise.validate().is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let config = SqrtConfig::precise();
        let json = serde_json::to_string(&config).unwrap();
        let restored: SqrtConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, config);
    }
}
