// ============================================================================
// Calculation Domain Model
// ============================================================================

use super::Operation;
use crate::numeric::ScaledAmount;
use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A completed, range-checked calculation
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Calculation {
    /// First operand as parsed
    pub lhs: ScaledAmount,

    /// Second operand as parsed
    pub rhs: ScaledAmount,

    /// Applied operation
    pub operation: Operation,

    /// Exact result
    pub result: ScaledAmount,

    /// Canonical text of `result`, ready to display or copy
    pub text: String,

    /// When the calculation completed
    pub timestamp: DateTime<Utc>,
}

impl Calculation {
    pub fn new(
        lhs: ScaledAmount,
        rhs: ScaledAmount,
        operation: Operation,
        result: ScaledAmount,
    ) -> Self {
        let text = result.to_string();
        Self {
            lhs,
            rhs,
            operation,
            result,
            text,
            timestamp: Utc::now(),
        }
    }

    /// Human-readable equation, e.g. `1.500000 + 2.000000 = 3.500000`
    pub fn equation(&self) -> String {
        format!(
            "{} {} {} = {}",
            self.lhs,
            self.operation.symbol(),
            self.rhs,
            self.text
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculation_creation() {
        let calc = Calculation::new(
            ScaledAmount::from_micros(1_500_000),
            ScaledAmount::from_integer(2),
            Operation::Subtract,
            ScaledAmount::from_micros(-500_000),
        );

        assert_eq!(calc.text, "-0.500000");
        assert_eq!(calc.equation(), "1.500000 - 2.000000 = -0.500000");
    }
}
