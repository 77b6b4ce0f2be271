// ============================================================================
// Parser
// Decimal text to micro-unit amounts with 7th-digit half-up rounding
// ============================================================================

use super::normalizer::normalize;
use crate::numeric::{ParseErrorKind, ParseResult, ScaledAmount, FRACTION_DIGITS, SCALE};
use num_bigint::BigInt;

/// Parse a decimal string into a [`ScaledAmount`].
///
/// The input is normalized first (whitespace dropped, commas read as the
/// decimal point). Accepted shape: optional `+`/`-`, integer digits (may be
/// empty), optional `.` followed by fraction digits.
///
/// Fractions longer than six digits are rounded on the seventh digit only:
/// a seventh digit of 5 or more adds one micro-unit, and anything past the
/// seventh digit is dropped without affecting the result. `"0.12345649"`
/// therefore parses exactly like `"0.1234564"`.
///
/// The integer part is not bounded here; range checks happen in arithmetic.
///
/// # Errors
/// Checks run in this order and the first failure is returned:
/// `EmptyInput`, `UnsupportedNotation`, `MissingDigits`, `InvalidFormat`,
/// `InvalidIntegerPart`, `InvalidFractionalPart`.
///
/// # Example
/// ```
/// use fincalc::{parse, ParseErrorKind};
///
/// assert_eq!(parse("1,5").unwrap().to_string(), "1.500000");
/// assert_eq!(parse("0.9999995").unwrap().to_string(), "1.000000");
/// assert_eq!(parse("1e5"), Err(ParseErrorKind::UnsupportedNotation));
/// ```
pub fn parse(raw: &str) -> ParseResult {
    let normalized = normalize(raw);
    if normalized.is_empty() {
        return Err(ParseErrorKind::EmptyInput);
    }

    if normalized.contains(|c: char| c == 'e' || c == 'E') {
        return Err(ParseErrorKind::UnsupportedNotation);
    }

    let (negative, unsigned) = split_sign(&normalized);
    if unsigned.is_empty() {
        return Err(ParseErrorKind::MissingDigits);
    }

    let mut segments = unsigned.split('.');
    let int_digits = segments.next().unwrap_or("");
    let frac_digits = segments.next().unwrap_or("");
    if segments.next().is_some() {
        return Err(ParseErrorKind::InvalidFormat);
    }

    let int_digits = if int_digits.is_empty() { "0" } else { int_digits };
    if !is_ascii_digits(int_digits) {
        return Err(ParseErrorKind::InvalidIntegerPart);
    }
    if !frac_digits.is_empty() && !is_ascii_digits(frac_digits) {
        return Err(ParseErrorKind::InvalidFractionalPart);
    }

    let mut integer =
        BigInt::parse_bytes(int_digits.as_bytes(), 10).ok_or(ParseErrorKind::InvalidIntegerPart)?;
    let (fraction, carry) = scale_fraction(frac_digits);
    if carry {
        integer += 1u32;
    }

    let magnitude = integer * SCALE + fraction;
    Ok(ScaledAmount::from_micros(if negative { -magnitude } else { magnitude }))
}

/// Split off one optional leading sign character.
fn split_sign(s: &str) -> (bool, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        (false, rest)
    } else {
        (false, s)
    }
}

fn is_ascii_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Scale validated fraction digits to exactly `FRACTION_DIGITS` digits.
///
/// Returns the fraction in micro-units and whether rounding carried into the
/// integer part (in which case the fraction is zero).
fn scale_fraction(digits: &str) -> (u32, bool) {
    let bytes = digits.as_bytes();
    let kept_len = bytes.len().min(FRACTION_DIGITS);

    let kept = bytes[..kept_len]
        .iter()
        .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'));
    // right-pad short fractions with zeros
    let kept = kept * 10u32.pow((FRACTION_DIGITS - kept_len) as u32);

    match bytes.get(FRACTION_DIGITS) {
        Some(&seventh) if seventh >= b'5' => {
            let rounded = kept + 1;
            if i64::from(rounded) >= SCALE {
                (0, true)
            } else {
                (rounded, false)
            }
        },
        _ => (kept, false),
    }
}
