// ============================================================================
// Financial Calculator Library
// Exact fixed-point decimal parsing, arithmetic and formatting
// ============================================================================

//! # fincalc
//!
//! Exact decimal arithmetic for financial input forms.
//!
//! Amounts are held as integer counts of micro-units (value × 10^6) backed
//! by arbitrary-precision integers, so addition and subtraction never pick
//! up binary floating-point error.
//!
//! ## Pipeline
//!
//! - [`normalize`]: drop whitespace, read `,` as the decimal point
//! - [`parse`]: validate and scale to micro-units, rounding on the 7th digit
//! - [`compute`]: exact add/subtract with a `±10^12` whole-unit range check
//! - [`format`]: canonical `sign int.frac` text with six fraction digits
//!
//! ## Example
//!
//! ```rust
//! use fincalc::{compute, format, parse};
//! use fincalc::domain::Operation;
//!
//! let a = parse("1 234,5").unwrap();
//! let b = parse("-0.0000005").unwrap(); // rounds to -0.000001
//! let sum = compute(&a, &b, Operation::Add).unwrap();
//! assert_eq!(format(&sum), "1234.499999");
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

pub use engine::{compute, format, normalize, parse};
pub use numeric::{ComputeResult, OverflowError, ParseErrorKind, ParseResult, ScaledAmount};

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{Calculation, CalculatorConfig, Operation};
    pub use crate::engine::{
        compute, create_from_config, format, normalize, parse, Calculator, CalculatorBuilder,
    };
    pub use crate::interfaces::{
        CalculationEvent, EventHandler, LoggingEventHandler, NoOpEventHandler,
    };
    pub use crate::numeric::{
        CalculationError, ComputeResult, OperandPosition, OverflowError, ParseErrorKind,
        ParseResult, ScaledAmount,
    };
}
