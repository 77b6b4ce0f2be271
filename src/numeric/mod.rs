// ============================================================================
// Numeric Module
// Fixed-point amounts in micro-units and the shared error taxonomy
// ============================================================================
//
// This module provides:
// - ScaledAmount: arbitrary-precision integer scaled by 10^6
// - ParseErrorKind / OverflowError / CalculationError: closed error kinds
// - ParseResult / ComputeResult: tagged results for each stage
//
// Design principles:
// - No floating-point operations
// - All fallible operations return Result (no panics)
// - Fixed scale of 6 fractional digits

mod errors;
mod scaled_amount;

pub use errors::{
    CalculationError, ComputeResult, OperandPosition, OverflowError, ParseErrorKind, ParseResult,
    UnknownOperation,
};
pub use scaled_amount::{ScaledAmount, FRACTION_DIGITS, MAX_ABS_MICROS, MAX_ABS_UNITS, SCALE};
