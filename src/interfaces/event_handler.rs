// ============================================================================
// Event Handler Interface
// Defines the contract for observing calculator outcomes
// ============================================================================

use crate::domain::{Calculation, Operation};
use crate::numeric::{OperandPosition, ParseErrorKind};
use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by the calculator
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalculationEvent {
    /// An operand failed to parse; no further work was done
    OperandRejected {
        position: OperandPosition,
        kind: ParseErrorKind,
        timestamp: DateTime<Utc>,
    },

    /// Both operands parsed but the result left the permitted range
    RangeExceeded {
        operation: Operation,
        timestamp: DateTime<Utc>,
    },

    /// Calculation succeeded
    Completed { calculation: Calculation },
}

/// Event handler trait for processing calculator events
/// Implementations can handle logging, metrics, history, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a calculator event
    fn on_event(&self, event: CalculationEvent);
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: CalculationEvent) {}
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: CalculationEvent) {
        match &event {
            CalculationEvent::Completed { calculation } => {
                tracing::debug!(equation = %calculation.equation(), "Calculation completed");
            },
            _ => tracing::debug!("Calculator event: {:?}", event),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_handler() {
        let handler = NoOpEventHandler;
        handler.on_event(CalculationEvent::OperandRejected {
            position: OperandPosition::First,
            kind: ParseErrorKind::EmptyInput,
            timestamp: Utc::now(),
        });
    }

    #[test]
    fn test_logging_handler() {
        let handler = LoggingEventHandler;
        handler.on_event(CalculationEvent::RangeExceeded {
            operation: Operation::Add,
            timestamp: Utc::now(),
        });
    }
}
