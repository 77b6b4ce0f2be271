// ============================================================================
// Arithmetic
// Exact addition/subtraction with symmetric range check
// ============================================================================

use crate::domain::Operation;
use crate::numeric::{ComputeResult, ScaledAmount};

/// Add or subtract two parsed amounts and enforce `|result| <= MAX_ABS_MICROS`.
///
/// Operands are exact integers, so the result carries no rounding error.
/// Operands themselves may lie outside the range; only the result is checked.
///
/// # Errors
/// Returns `RangeOverflow` if the result's magnitude exceeds the bound.
///
/// # Example
/// ```
/// use fincalc::{compute, format, parse, domain::Operation};
///
/// let a = parse("0.1").unwrap();
/// let b = parse("0.2").unwrap();
/// assert_eq!(format(&compute(&a, &b, Operation::Add).unwrap()), "0.300000");
/// ```
pub fn compute(a: &ScaledAmount, b: &ScaledAmount, op: Operation) -> ComputeResult {
    compute_within(a, b, op, &ScaledAmount::max_abs())
}

/// Like [`compute`], with a caller-supplied magnitude bound.
pub fn compute_within(
    a: &ScaledAmount,
    b: &ScaledAmount,
    op: Operation,
    bound: &ScaledAmount,
) -> ComputeResult {
    match op {
        Operation::Add => a.checked_add_within(b, bound),
        Operation::Subtract => a.checked_sub_within(b, bound),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::parser::parse;
    use crate::numeric::OverflowError;

    fn amount(s: &str) -> ScaledAmount {
        parse(s).unwrap()
    }

    #[test]
    fn test_exact_decimal_addition() {
        let sum = compute(&amount("0.1"), &amount("0.2"), Operation::Add).unwrap();
        assert_eq!(sum, amount("0.3"));
        assert_eq!(sum.to_string(), "0.300000");
    }

    #[test]
    fn test_subtraction() {
        let diff = compute(&amount("1"), &amount("1.000001"), Operation::Subtract).unwrap();
        assert_eq!(diff.to_string(), "-0.000001");
    }

    #[test]
    fn test_overflow_just_past_bound() {
        let result = compute(
            &amount("1000000000000.000000"),
            &amount("0.000001"),
            Operation::Add,
        );
        assert_eq!(result, Err(OverflowError::RangeOverflow));

        let result = compute(
            &amount("-1000000000000"),
            &amount("0.000001"),
            Operation::Subtract,
        );
        assert_eq!(result, Err(OverflowError::RangeOverflow));
    }

    #[test]
    fn test_bound_is_inclusive() {
        let result = compute(&amount("999999999999.999999"), &amount("0.000001"), Operation::Add);
        assert_eq!(result, Ok(ScaledAmount::max_abs()));
    }

    #[test]
    fn test_out_of_range_operands() {
        let huge = amount("5000000000000");
        let result = compute(&huge, &amount("4999999999999.5"), Operation::Subtract).unwrap();
        assert_eq!(result.to_string(), "0.500000");
    }

    #[test]
    fn test_compute_within() {
        let bound = ScaledAmount::from_integer(100);
        assert_eq!(
            compute_within(&amount("60"), &amount("41"), Operation::Add, &bound),
            Err(OverflowError::RangeOverflow)
        );
        assert_eq!(
            compute_within(&amount("60"), &amount("40"), Operation::Add, &bound),
            Ok(bound)
        );
    }
}
