// ============================================================================
// Formatter
// Micro-unit amounts to canonical `sign int.frac` text
// ============================================================================

use crate::numeric::{ScaledAmount, FRACTION_DIGITS, SCALE};
use num_traits::Signed;
use std::fmt;

/// Render an amount as canonical decimal text.
///
/// Output is `{sign}{integer}.{fraction}`: a `-` only for negative values,
/// the integer without leading zeros, and exactly six fraction digits. No
/// exponent form and no trimming of trailing zeros.
///
/// # Example
/// ```
/// use fincalc::{format, numeric::ScaledAmount};
///
/// assert_eq!(format(&ScaledAmount::from_micros(-1)), "-0.000001");
/// assert_eq!(format(&ScaledAmount::from_integer(42)), "42.000000");
/// ```
pub fn format(value: &ScaledAmount) -> String {
    value.to_string()
}

/// Write the canonical text form of `value` into `out`.
pub(crate) fn write_canonical<W: fmt::Write>(out: &mut W, value: &ScaledAmount) -> fmt::Result {
    let sign = if value.is_negative() { "-" } else { "" };
    let magnitude = value.micros().abs();
    let integer = &magnitude / SCALE;
    let fraction = &magnitude % SCALE;
    write!(
        out,
        "{}{}.{:0>width$}",
        sign,
        integer,
        fraction,
        width = FRACTION_DIGITS
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::parser::parse;
    use crate::numeric::MAX_ABS_MICROS;
    use proptest::prelude::*;

    #[test]
    fn test_zero() {
        assert_eq!(format(&ScaledAmount::zero()), "0.000000");
        assert_eq!(format(&-ScaledAmount::zero()), "0.000000");
    }

    #[test]
    fn test_padding() {
        assert_eq!(format(&ScaledAmount::from_micros(1)), "0.000001");
        assert_eq!(format(&ScaledAmount::from_micros(100_000)), "0.100000");
        assert_eq!(format(&ScaledAmount::from_micros(123_456_000)), "123.456000");
    }

    #[test]
    fn test_negative() {
        assert_eq!(format(&ScaledAmount::from_micros(-100_000)), "-0.100000");
        assert_eq!(format(&ScaledAmount::from_micros(-5_500_000)), "-5.500000");
    }

    #[test]
    fn test_bounds() {
        assert_eq!(
            format(&ScaledAmount::max_abs()),
            "1000000000000.000000"
        );
        assert_eq!(
            format(&-ScaledAmount::max_abs()),
            "-1000000000000.000000"
        );
    }

    #[test]
    fn test_canonicalizes_typed_input() {
        let cases = [
            ("1,5", "1.500000"),
            ("+007", "7.000000"),
            (".25", "0.250000"),
            ("-0", "0.000000"),
            (" 1 000 000 , 01 ", "1000000.010000"),
        ];
        for (input, expected) in cases {
            assert_eq!(format(&parse(input).unwrap()), expected, "input {:?}", input);
        }
    }

    proptest! {
        #[test]
        fn prop_round_trip(micros in -MAX_ABS_MICROS..=MAX_ABS_MICROS) {
            let value = ScaledAmount::from_micros(micros);
            let text = format(&value);
            prop_assert_eq!(parse(&text), Ok(value));
        }

        #[test]
        fn prop_typed_text_canonicalizes(
            sign in "[+-]?",
            int in "[0-9]{1,13}",
            frac in proptest::option::of(("[.,]", "[0-9]{0,6}")),
        ) {
            let input = match &frac {
                Some((sep, digits)) => format!("{}{}{}{}", sign, int, sep, digits),
                None => format!("{}{}", sign, int),
            };

            let int_trimmed = int.trim_start_matches('0');
            let int_canon = if int_trimmed.is_empty() { "0" } else { int_trimmed };
            let frac_digits = frac.as_ref().map(|(_, digits)| digits.as_str()).unwrap_or("");
            let frac_canon = format!("{:0<6}", frac_digits);
            let is_zero = int_canon == "0" && frac_canon.bytes().all(|b| b == b'0');
            let sign_canon = if sign == "-" && !is_zero { "-" } else { "" };
            let expected = format!("{}{}.{}", sign_canon, int_canon, frac_canon);

            prop_assert_eq!(format(&parse(&input).unwrap()), expected);
        }

        #[test]
        fn prop_always_six_fraction_digits(micros in any::<i64>()) {
            let text = format(&ScaledAmount::from_micros(micros));
            let (_, fraction) = text.split_once('.').unwrap();
            prop_assert_eq!(fraction.len(), 6);
            prop_assert!(fraction.bytes().all(|b| b.is_ascii_digit()));
        }
    }
}
