// ============================================================================
// Scaled Amount
// Exact decimal value stored as an integer count of micro-units
// ============================================================================

use super::errors::{ComputeResult, OverflowError, ParseResult};
use crate::engine::{formatter, parser};
use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};
use std::fmt;
use std::ops::Neg;

/// Number of fractional digits carried by every amount
pub const FRACTION_DIGITS: usize = 6;

/// The scale factor (10^FRACTION_DIGITS)
pub const SCALE: i64 = 1_000_000;

/// Largest permitted magnitude in whole units
pub const MAX_ABS_UNITS: i64 = 1_000_000_000_000;

/// Largest permitted magnitude in micro-units (MAX_ABS_UNITS × SCALE)
pub const MAX_ABS_MICROS: i64 = MAX_ABS_UNITS * SCALE;

/// Decimal value multiplied by 10^6, held as an arbitrary-precision integer.
///
/// Amounts come out of the parser or out of range-checked arithmetic. The
/// parser does not bound the integer part, so a freshly parsed amount may lie
/// outside `±MAX_ABS_MICROS`; the bound is enforced by [`checked_add`] and
/// [`checked_sub`].
///
/// # Example
/// ```
/// use fincalc::numeric::ScaledAmount;
///
/// let a: ScaledAmount = "0.1".parse().unwrap();
/// let b: ScaledAmount = "0,2".parse().unwrap();
/// assert_eq!(a.checked_add(&b).unwrap().to_string(), "0.300000");
/// ```
///
/// [`checked_add`]: ScaledAmount::checked_add
/// [`checked_sub`]: ScaledAmount::checked_sub
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScaledAmount(BigInt);

impl ScaledAmount {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a raw count of micro-units.
    #[inline]
    pub fn from_micros(micros: impl Into<BigInt>) -> Self {
        Self(micros.into())
    }

    /// Create from a whole number of units.
    #[inline]
    pub fn from_integer(units: impl Into<BigInt>) -> Self {
        let units: BigInt = units.into();
        Self(units * SCALE)
    }

    /// Zero value
    #[inline]
    pub fn zero() -> Self {
        Self(BigInt::zero())
    }

    /// The default range bound, `MAX_ABS_MICROS` micro-units.
    #[inline]
    pub fn max_abs() -> Self {
        Self(BigInt::from(MAX_ABS_MICROS))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Raw micro-unit count.
    #[inline]
    pub fn micros(&self) -> &BigInt {
        &self.0
    }

    /// Consume and return the raw micro-unit count.
    #[inline]
    pub fn into_micros(self) -> BigInt {
        self.0
    }

    /// Integer part, truncated toward zero.
    pub fn integer_part(&self) -> BigInt {
        &self.0 / SCALE
    }

    /// Fractional part in micro-units, in `0..SCALE`.
    pub fn fractional_part(&self) -> BigInt {
        self.0.abs() % SCALE
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0.is_positive()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Whether `|self| <= bound`.
    pub fn is_within(&self, bound: &ScaledAmount) -> bool {
        self.0.abs() <= bound.0
    }

    /// Whether `|self| <= MAX_ABS_MICROS`.
    pub fn is_within_range(&self) -> bool {
        self.is_within(&Self::max_abs())
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Range-checked addition against the default bound.
    ///
    /// # Errors
    /// Returns `RangeOverflow` if `|self + rhs|` exceeds `MAX_ABS_MICROS`.
    pub fn checked_add(&self, rhs: &ScaledAmount) -> ComputeResult {
        self.checked_add_within(rhs, &Self::max_abs())
    }

    /// Range-checked subtraction against the default bound.
    ///
    /// # Errors
    /// Returns `RangeOverflow` if `|self - rhs|` exceeds `MAX_ABS_MICROS`.
    pub fn checked_sub(&self, rhs: &ScaledAmount) -> ComputeResult {
        self.checked_sub_within(rhs, &Self::max_abs())
    }

    /// Addition that rejects results whose magnitude exceeds `bound`.
    pub fn checked_add_within(&self, rhs: &ScaledAmount, bound: &ScaledAmount) -> ComputeResult {
        Self(&self.0 + &rhs.0).bounded(bound)
    }

    /// Subtraction that rejects results whose magnitude exceeds `bound`.
    pub fn checked_sub_within(&self, rhs: &ScaledAmount, bound: &ScaledAmount) -> ComputeResult {
        Self(&self.0 - &rhs.0).bounded(bound)
    }

    fn bounded(self, bound: &ScaledAmount) -> ComputeResult {
        if self.is_within(bound) {
            Ok(self)
        } else {
            Err(OverflowError::RangeOverflow)
        }
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Neg for ScaledAmount {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &ScaledAmount {
    type Output = ScaledAmount;

    #[inline]
    fn neg(self) -> Self::Output {
        ScaledAmount(-&self.0)
    }
}

impl fmt::Debug for ScaledAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScaledAmount({}, micros={})", self, self.0)
    }
}

impl fmt::Display for ScaledAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter::write_canonical(f, self)
    }
}

impl std::str::FromStr for ScaledAmount {
    type Err = super::ParseErrorKind;

    fn from_str(s: &str) -> ParseResult {
        parser::parse(s)
    }
}

// ============================================================================
// Conversion to/from rust_decimal (for API boundaries)
// ============================================================================

impl ScaledAmount {
    /// Convert to `rust_decimal::Decimal` with scale 6.
    ///
    /// Returns `None` when the amount does not fit a 96-bit mantissa, which
    /// cannot happen for amounts within `MAX_ABS_MICROS`.
    pub fn to_decimal(&self) -> Option<rust_decimal::Decimal> {
        let raw = self.0.to_i128()?;
        rust_decimal::Decimal::try_from_i128_with_scale(raw, FRACTION_DIGITS as u32).ok()
    }

    /// Convert from `rust_decimal::Decimal`.
    ///
    /// The decimal's text form goes through the regular parser, so digits
    /// beyond the sixth are rounded exactly as typed input would be.
    pub fn from_decimal(d: rust_decimal::Decimal) -> ParseResult {
        parser::parse(&d.to_string())
    }
}

// ============================================================================
// Serde (canonical text form)
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for ScaledAmount {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ScaledAmount {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        parser::parse(&text).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
