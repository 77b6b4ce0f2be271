// ============================================================================
// Calculator Configuration
// Range bound applied to calculation results
// ============================================================================

use crate::numeric::{ScaledAmount, MAX_ABS_UNITS};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a [`Calculator`](crate::engine::Calculator).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculatorConfig {
    /// Largest permitted result magnitude (inclusive).
    /// Defaults to `MAX_ABS_MICROS`; may only be tightened.
    pub max_abs: ScaledAmount,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            max_abs: ScaledAmount::max_abs(),
        }
    }
}

impl CalculatorConfig {
    /// Create a configuration with the default bound
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: Set the result bound
    pub fn with_max_abs(mut self, max_abs: ScaledAmount) -> Self {
        self.max_abs = max_abs;
        self
    }

    /// Builder method: Set the result bound in whole units
    pub fn with_max_abs_units(self, units: i64) -> Self {
        self.with_max_abs(ScaledAmount::from_integer(units))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.max_abs.is_positive() {
            return Err("Range bound must be positive".to_string());
        }

        if !self.max_abs.is_within_range() {
            return Err(format!(
                "Range bound cannot exceed {} units",
                MAX_ABS_UNITS
            ));
        }

        Ok(())
    }
}
