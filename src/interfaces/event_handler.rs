// ============================================================================
// Event Handler Interface
// Defines the contract for observing calculator activity
// ============================================================================

use crate::domain::Operation;
use crate::numeric::OperandKind;
use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by the calculator
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalculationEvent {
    /// Operation produced a result
    Evaluated {
        operation: Operation,
        operand_kind: OperandKind,
        result: f64,
        timestamp: DateTime<Utc>,
    },

    /// Operation rejected an argument
    Rejected {
        operation: Operation,
        operand_kind: OperandKind,
        reason: String,
        timestamp: DateTime<Utc>,
    },

    /// Square root hit the iteration cap and returned its last guess
    SqrtNotConverged {
        value: f64,
        last_guess: f64,
        iterations: u32,
        timestamp: DateTime<Utc>,
    },
}

impl CalculationEvent {
    /// The operation this event refers to
    pub fn operation(&self) -> Operation {
        match self {
            CalculationEvent::Evaluated { operation, .. }
            | CalculationEvent::Rejected { operation, .. } => *operation,
            CalculationEvent::SqrtNotConverged { .. } => Operation::Sqrt,
        }
    }
}

/// Event handler trait for processing calculator events
/// Implementations can handle logging, metrics, auditing, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a calculation event
    fn on_event(&self, event: CalculationEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<CalculationEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: CalculationEvent) {}
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: CalculationEvent) {
        match &event {
            CalculationEvent::Rejected {
                operation, reason, ..
            } => tracing::debug!(%operation, reason = %reason, "calculation rejected"),
            _ => tracing::debug!("Calculator event: {:?}", event),
        }
    }
}
