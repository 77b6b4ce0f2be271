// ============================================================================
// Engine Module
// Normalizer -> Parser -> Arithmetic -> Formatter, plus the calculator service
// ============================================================================

pub(crate) mod arithmetic;
pub(crate) mod formatter;
pub(crate) mod normalizer;
pub(crate) mod parser;

pub mod calculator;

pub use arithmetic::{compute, compute_within};
pub use calculator::{create_from_config, Calculator, CalculatorBuilder};
pub use formatter::format;
pub use normalizer::normalize;
pub use parser::parse;
