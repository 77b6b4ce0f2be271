// ============================================================================
// Calculator
// Parses two raw operands, computes, and formats the result
// ============================================================================

use super::{arithmetic, parser};
use crate::domain::{Calculation, CalculatorConfig, Operation};
use crate::interfaces::{CalculationEvent, EventHandler, NoOpEventHandler};
use crate::numeric::{CalculationError, OperandPosition, ScaledAmount};
use chrono::Utc;
use std::sync::Arc;

/// Stateless calculator over raw operand text.
///
/// Every call to [`evaluate`](Calculator::evaluate) is independent; the only
/// thing a calculator holds is its configuration and event handler.
pub struct Calculator {
    config: CalculatorConfig,
    event_handler: Arc<dyn EventHandler>,
}

impl Calculator {
    /// Create a calculator from an already-validated configuration.
    ///
    /// `config` is used as given; a non-positive bound makes every
    /// evaluation fail with `RangeOverflow`. Use [`create_from_config`] or
    /// [`CalculatorBuilder`] to validate first.
    pub fn new(config: CalculatorConfig, event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            config,
            event_handler,
        }
    }

    /// Calculator with the default bound and no event handling
    pub fn with_defaults() -> Self {
        Self::new(CalculatorConfig::default(), Arc::new(NoOpEventHandler))
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Parse both operands, apply `op`, and format the result.
    ///
    /// The first operand is parsed before the second and the first failure
    /// is returned.
    ///
    /// # Example
    /// ```
    /// use fincalc::prelude::*;
    ///
    /// let calc = Calculator::with_defaults();
    /// let done = calc.evaluate("1234567890,123456", "-987654321,654321", Operation::Add).unwrap();
    /// assert_eq!(done.text, "246913568.469135");
    /// ```
    pub fn evaluate(
        &self,
        lhs: &str,
        rhs: &str,
        op: Operation,
    ) -> Result<Calculation, CalculationError> {
        let lhs = self.parse_operand(lhs, OperandPosition::First)?;
        let rhs = self.parse_operand(rhs, OperandPosition::Second)?;

        let result = match arithmetic::compute_within(&lhs, &rhs, op, &self.config.max_abs) {
            Ok(result) => result,
            Err(err) => {
                tracing::debug!(operation = %op, "Result out of range");
                self.event_handler.on_event(CalculationEvent::RangeExceeded {
                    operation: op,
                    timestamp: Utc::now(),
                });
                return Err(err.into());
            },
        };

        let calculation = Calculation::new(lhs, rhs, op, result);
        self.event_handler.on_event(CalculationEvent::Completed {
            calculation: calculation.clone(),
        });
        Ok(calculation)
    }

    fn parse_operand(
        &self,
        raw: &str,
        position: OperandPosition,
    ) -> Result<ScaledAmount, CalculationError> {
        parser::parse(raw).map_err(|kind| {
            tracing::debug!(%position, kind = kind.kind_id(), "Operand rejected");
            self.event_handler.on_event(CalculationEvent::OperandRejected {
                position,
                kind,
                timestamp: Utc::now(),
            });
            CalculationError::InvalidOperand { position, kind }
        })
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a calculator from configuration
///
/// # Example
/// ```
/// use fincalc::prelude::*;
/// use std::sync::Arc;
///
/// let config = CalculatorConfig::new().with_max_abs_units(1_000_000);
/// let calc = create_from_config(config, Arc::new(NoOpEventHandler)).unwrap();
/// assert!(calc.evaluate("999999", "2", Operation::Add).is_err());
/// ```
pub fn create_from_config(
    config: CalculatorConfig,
    event_handler: Arc<dyn EventHandler>,
) -> Result<Calculator, String> {
    config.validate()?;
    Ok(Calculator::new(config, event_handler))
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating calculators with fluent API
///
/// # Example
/// ```
/// use fincalc::prelude::*;
/// use std::sync::Arc;
///
/// let calc = CalculatorBuilder::new()
///     .with_max_abs_units(100)
///     .with_event_handler(Arc::new(LoggingEventHandler))
///     .build()
///     .unwrap();
/// assert_eq!(calc.config().max_abs.to_string(), "100.000000");
/// ```
pub struct CalculatorBuilder {
    config: CalculatorConfig,
    event_handler: Arc<dyn EventHandler>,
}

impl CalculatorBuilder {
    pub fn new() -> Self {
        Self {
            config: CalculatorConfig::default(),
            event_handler: Arc::new(NoOpEventHandler),
        }
    }

    /// Set the result bound
    pub fn with_max_abs(mut self, max_abs: ScaledAmount) -> Self {
        self.config = self.config.with_max_abs(max_abs);
        self
    }

    /// Set the result bound in whole units
    pub fn with_max_abs_units(mut self, units: i64) -> Self {
        self.config = self.config.with_max_abs_units(units);
        self
    }

    /// Set the event handler
    pub fn with_event_handler(mut self, event_handler: Arc<dyn EventHandler>) -> Self {
        self.event_handler = event_handler;
        self
    }

    /// Build the calculator
    pub fn build(self) -> Result<Calculator, String> {
        create_from_config(self.config, self.event_handler)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &CalculatorConfig {
        &self.config
    }
}

impl Default for CalculatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
