// ============================================================================
// Operation
// The binary operations a calculation can apply
// ============================================================================

use crate::numeric::UnknownOperation;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Binary operation selected by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operation {
    /// a + b
    #[default]
    Add,
    /// a - b
    Subtract,
}

impl Operation {
    /// Operator symbol (`+` or `-`)
    pub const fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Add => write!(f, "add"),
            Operation::Subtract => write!(f, "subtract"),
        }
    }
}

impl FromStr for Operation {
    type Err = UnknownOperation;

    /// Accepts `+`, `-`, `add`, `subtract` (case-insensitive, surrounding
    /// whitespace ignored).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed {
            "+" => Ok(Operation::Add),
            "-" => Ok(Operation::Subtract),
            _ if trimmed.eq_ignore_ascii_case("add") => Ok(Operation::Add),
            _ if trimmed.eq_ignore_ascii_case("subtract") => Ok(Operation::Subtract),
            _ => Err(UnknownOperation(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("+".parse::<Operation>(), Ok(Operation::Add));
        assert_eq!(" - ".parse::<Operation>(), Ok(Operation::Subtract));
        assert_eq!("ADD".parse::<Operation>(), Ok(Operation::Add));
        assert_eq!("Subtract".parse::<Operation>(), Ok(Operation::Subtract));
        assert_eq!(
            "*".parse::<Operation>(),
            Err(UnknownOperation("*".to_string()))
        );
    }

    #[test]
    fn test_symbol_and_display() {
        assert_eq!(Operation::Add.symbol(), '+');
        assert_eq!(Operation::Subtract.symbol(), '-');
        assert_eq!(Operation::Subtract.to_string(), "subtract");
        assert_eq!(Operation::default(), Operation::Add);
    }
}
