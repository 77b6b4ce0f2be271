// ============================================================================
// Domain Models Module
// Operations, calculation records and calculator configuration
// ============================================================================

pub mod calculation;
pub mod config;
pub mod operation;

pub use calculation::Calculation;
pub use config::CalculatorConfig;
pub use operation::Operation;
