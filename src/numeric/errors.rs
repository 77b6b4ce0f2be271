// ============================================================================
// Numeric Errors
// Closed error taxonomy shared by the parser, arithmetic and calculator
// ============================================================================

use super::ScaledAmount;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Reasons a decimal string can be rejected by the parser.
///
/// The set is closed; callers match on the variant (or on [`kind_id`]) and
/// render their own user-facing text.
///
/// [`kind_id`]: ParseErrorKind::kind_id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ParseErrorKind {
    /// Nothing left after normalization
    EmptyInput,
    /// Input contains an exponent marker (`e` or `E`)
    UnsupportedNotation,
    /// Only a sign character was given
    MissingDigits,
    /// More than one decimal point
    InvalidFormat,
    /// Integer segment contains a non-digit
    InvalidIntegerPart,
    /// Fractional segment contains a non-digit
    InvalidFractionalPart,
}

impl ParseErrorKind {
    /// Stable identifier of the error kind.
    pub const fn kind_id(self) -> &'static str {
        match self {
            ParseErrorKind::EmptyInput => "EmptyInput",
            ParseErrorKind::UnsupportedNotation => "UnsupportedNotation",
            ParseErrorKind::MissingDigits => "MissingDigits",
            ParseErrorKind::InvalidFormat => "InvalidFormat",
            ParseErrorKind::InvalidIntegerPart => "InvalidIntegerPart",
            ParseErrorKind::InvalidFractionalPart => "InvalidFractionalPart",
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::EmptyInput => write!(f, "empty input"),
            ParseErrorKind::UnsupportedNotation => {
                write!(f, "exponential notation is not supported")
            },
            ParseErrorKind::MissingDigits => write!(f, "no digits after sign"),
            ParseErrorKind::InvalidFormat => write!(f, "invalid number format"),
            ParseErrorKind::InvalidIntegerPart => write!(f, "invalid integer part"),
            ParseErrorKind::InvalidFractionalPart => write!(f, "invalid fractional part"),
        }
    }
}

impl std::error::Error for ParseErrorKind {}

/// Arithmetic failure: the result left the permitted range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OverflowError {
    /// |result| exceeded the configured bound
    RangeOverflow,
}

impl OverflowError {
    /// Stable identifier of the error kind.
    pub const fn kind_id(self) -> &'static str {
        match self {
            OverflowError::RangeOverflow => "RangeOverflow",
        }
    }
}

impl fmt::Display for OverflowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverflowError::RangeOverflow => {
                write!(f, "range overflow: result exceeds the permitted bound")
            },
        }
    }
}

impl std::error::Error for OverflowError {}

/// Which operand of a binary calculation an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OperandPosition {
    First,
    Second,
}

impl fmt::Display for OperandPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperandPosition::First => write!(f, "first operand"),
            OperandPosition::Second => write!(f, "second operand"),
        }
    }
}

/// Failure of a full parse-compute-format calculation.
///
/// Operands are parsed in order and the first failure wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalculationError {
    /// An operand could not be parsed
    InvalidOperand {
        position: OperandPosition,
        kind: ParseErrorKind,
    },
    /// The result left the permitted range
    RangeOverflow,
}

impl CalculationError {
    /// Stable identifier of the underlying error kind.
    pub const fn kind_id(self) -> &'static str {
        match self {
            CalculationError::InvalidOperand { kind, .. } => kind.kind_id(),
            CalculationError::RangeOverflow => OverflowError::RangeOverflow.kind_id(),
        }
    }
}

impl fmt::Display for CalculationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalculationError::InvalidOperand { position, kind } => {
                write!(f, "error in {}: {}", position, kind)
            },
            CalculationError::RangeOverflow => write!(f, "{}", OverflowError::RangeOverflow),
        }
    }
}

impl std::error::Error for CalculationError {}

impl From<OverflowError> for CalculationError {
    fn from(err: OverflowError) -> Self {
        match err {
            OverflowError::RangeOverflow => CalculationError::RangeOverflow,
        }
    }
}

/// Text could not be interpreted as an [`Operation`](crate::domain::Operation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOperation(pub String);

impl fmt::Display for UnknownOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown operation: {:?}", self.0)
    }
}

impl std::error::Error for UnknownOperation {}

/// Result of parsing a decimal string
pub type ParseResult = Result<ScaledAmount, ParseErrorKind>;

/// Result of a range-checked addition or subtraction
pub type ComputeResult = Result<ScaledAmount, OverflowError>;
