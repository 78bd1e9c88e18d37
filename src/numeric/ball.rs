// ============================================================================
// Ball Value
// Midpoint-radius enclosure of a real number
// ============================================================================

use super::big_float::BigFloat;
use super::errors::{ParseError, ParseResult};
use super::rounding::RoundingMode;
use crate::context::Context;
use crate::parser::{self, DecimalLiteral};
use num_bigint::{BigInt, BigUint};
use num_traits::{Pow, Signed};
use std::fmt;

/// Significant digits used when a ball is displayed without an explicit precision.
pub const DEFAULT_DISPLAY_DIGITS: usize = 20;

/// Significant digits shown for the radius in range displays.
pub const RADIUS_DISPLAY_DIGITS: usize = 3;

/// A real number enclosed as `[mid - rad, mid + rad]`.
///
/// The radius is never negative; a zero radius means `mid` is exact.
/// Precision is not part of the value: it is supplied through a [`Context`]
/// whenever a ball is created.
///
/// # Example
/// ```
/// use ball_decimal::prelude::*;
///
/// let ctx = Context::new(64).unwrap();
/// let x = Ball::parse("0.1", &ctx).unwrap();
/// assert!(!x.is_exact());
/// assert_eq!(x.to_decimal_string(10), "0.1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Ball {
    mid: BigFloat,
    rad: BigFloat,
}

impl Ball {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Build from a midpoint and radius. A negative radius is replaced by its magnitude.
    pub fn new(mid: BigFloat, rad: BigFloat) -> Self {
        Self { mid, rad: rad.abs() }
    }

    /// Exact ball with zero radius.
    #[inline]
    pub fn exact(mid: BigFloat) -> Self {
        Self {
            mid,
            rad: BigFloat::zero(),
        }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::default()
    }

    #[inline]
    pub fn one() -> Self {
        Self::from_integer(1)
    }

    /// Exact integer ball. Every `i64` is representable without rounding.
    pub fn from_integer(value: i64) -> Self {
        Self::exact(BigFloat::from_integer(value))
    }

    /// Parse a decimal literal at the context precision.
    pub fn parse(input: &str, ctx: &Context) -> ParseResult<Self> {
        parser::parse(input, ctx)
    }

    /// Parse into `self`. On error `self` is left untouched.
    pub fn set_str(&mut self, input: &str, ctx: &Context) -> ParseResult<()> {
        *self = parser::parse(input, ctx)?;
        Ok(())
    }

    /// Enclose a `rust_decimal::Decimal` at the context precision.
    pub fn from_decimal(value: rust_decimal::Decimal, ctx: &Context) -> ParseResult<Self> {
        let literal = DecimalLiteral::from_parts(
            value.is_sign_negative(),
            BigUint::from(value.mantissa().unsigned_abs()),
            -i64::from(value.scale()),
        );
        parser::literal_to_ball(&literal, ctx)
    }

    /// Enclose a finite `f64` at the context precision.
    ///
    /// # Errors
    /// Returns `NonFinite` for NaN and infinities.
    pub fn from_f64(value: f64, ctx: &Context) -> ParseResult<Self> {
        ctx.validate()?;
        let exact = BigFloat::from_f64(value).ok_or(ParseError::NonFinite)?;
        Ok(Self::from_big_float(&exact, ctx))
    }

    /// Round an exact binary value into a ball.
    pub fn from_big_float(value: &BigFloat, ctx: &Context) -> Self {
        let (mid, inexact) = value.round(ctx.precision(), ctx.rounding());
        if !inexact {
            return Self::exact(mid);
        }
        // Exact difference: for a p-bit rounding it is within one ulp.
        let rad = mid.sub_exact(value).abs();
        Self { mid, rad }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn mid(&self) -> &BigFloat {
        &self.mid
    }

    #[inline]
    pub fn rad(&self) -> &BigFloat {
        &self.rad
    }

    /// True when the radius is zero.
    #[inline]
    pub fn is_exact(&self) -> bool {
        self.rad.is_zero()
    }

    /// True for the exact zero ball.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.mid.is_zero() && self.rad.is_zero()
    }

    /// Lower endpoint `mid - rad`, exact.
    pub fn lower(&self) -> BigFloat {
        self.mid.sub_exact(&self.rad)
    }

    /// Upper endpoint `mid + rad`, exact.
    pub fn upper(&self) -> BigFloat {
        self.mid.add_exact(&self.rad)
    }

    /// Whether the exact value of `literal` lies inside the ball.
    pub fn contains_literal(&self, literal: &DecimalLiteral) -> bool {
        // Scale everything by 2^a · 10^b so all three quantities are integers.
        let k = literal.exponent();
        let b = (-k).max(0) as u64;
        let a = (-self.mid.exponent()).max(-self.rad.exponent()).max(0);

        let ten = BigUint::from(10u32);
        let pow10_b: BigUint = Pow::pow(&ten, b);

        let mut value = BigInt::from(literal.digits().clone()) << a as u64;
        value *= BigInt::from(Pow::pow(&ten, (k + b as i64) as u64));
        if literal.is_negative() {
            value = -value;
        }

        let scale_binary = |x: &BigFloat| {
            let shifted = x.signed_mantissa() << (x.exponent() + a) as u64;
            shifted * BigInt::from(pow10_b.clone())
        };
        let mid = scale_binary(&self.mid);
        let rad = scale_binary(&self.rad);

        (value - mid).abs() <= rad
    }

    /// Whether `other` lies entirely inside this ball.
    pub fn contains(&self, other: &Ball) -> bool {
        self.lower() <= other.lower() && other.upper() <= self.upper()
    }

    // ========================================================================
    // Display
    // ========================================================================

    /// Midpoint rounded to `digits` significant digits; the radius is omitted.
    pub fn to_decimal_string(&self, digits: usize) -> String {
        self.mid.to_decimal_string(digits, RoundingMode::Nearest)
    }

    /// `[mid +/- rad]` with the radius rounded upward, or just `mid` when exact.
    pub fn to_range_string(&self, digits: usize) -> String {
        let mid = self.to_decimal_string(digits);
        if self.is_exact() {
            return mid;
        }
        let rad = self
            .rad
            .to_decimal_string(RADIUS_DISPLAY_DIGITS, RoundingMode::Up);
        format!("[{} +/- {}]", mid, rad)
    }
}

impl fmt::Display for Ball {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = f.precision().unwrap_or(DEFAULT_DISPLAY_DIGITS);
        if f.alternate() {
            f.write_str(&self.to_range_string(digits))
        } else {
            f.write_str(&self.to_decimal_string(digits))
        }
    }
}

impl std::str::FromStr for Ball {
    type Err = ParseError;

    /// Parse at the default context precision.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, &Context::default())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(bits: u64) -> Context {
        Context::new(bits).unwrap()
    }

    #[test]
    fn test_default_is_exact_zero() {
        let b = Ball::default();
        assert!(b.is_zero());
        assert!(b.is_exact());
        assert_eq!(b.to_decimal_string(20), "0");
    }

    #[test]
    fn test_from_integer() {
        let b = Ball::from_integer(-123);
        assert!(b.is_exact());
        assert_eq!(b.to_string(), "-123");
        assert_eq!(Ball::one().to_string(), "1");
    }

    #[test]
    fn test_new_takes_radius_magnitude() {
        let b = Ball::new(BigFloat::from_integer(1), BigFloat::from_integer(-2));
        assert_eq!(b.rad(), &BigFloat::from_integer(2));
        assert_eq!(b.lower(), BigFloat::from_integer(-1));
        assert_eq!(b.upper(), BigFloat::from_integer(3));
    }

    #[test]
    fn test_set_str_keeps_value_on_error() {
        let mut b = Ball::from_integer(7);
        let err = b.set_str("1.2.3", &ctx(64)).unwrap_err();
        assert!(matches!(err, ParseError::MalformedLiteral { .. }));
        assert_eq!(b, Ball::from_integer(7));

        b.set_str("2.5", &ctx(64)).unwrap();
        assert_eq!(b.to_string(), "2.5");
        assert!(b.is_exact());
    }

    #[test]
    fn test_from_decimal() {
        use rust_decimal::Decimal;

        let b = Ball::from_decimal(Decimal::new(-12345, 2), &ctx(128)).unwrap();
        assert_eq!(b.to_decimal_string(10), "-123.45");
        let lit: DecimalLiteral = "-123.45".parse().unwrap();
        assert!(b.contains_literal(&lit));

        let exact = Ball::from_decimal(Decimal::new(375, 2), &ctx(16)).unwrap();
        assert!(exact.is_exact());
    }

    #[test]
    fn test_from_f64() {
        let b = Ball::from_f64(0.1, &ctx(53)).unwrap();
        assert!(b.is_exact());

        let narrow = Ball::from_f64(0.1, &ctx(8)).unwrap();
        assert!(!narrow.is_exact());
        let original = Ball::exact(BigFloat::from_f64(0.1).unwrap());
        assert!(narrow.contains(&original));

        assert_eq!(
            Ball::from_f64(f64::NAN, &ctx(53)),
            Err(ParseError::NonFinite)
        );
    }

    #[test]
    fn test_contains_literal() {
        let b = Ball::parse("0.1", &ctx(32)).unwrap();
        let inside: DecimalLiteral = "0.1".parse().unwrap();
        let outside: DecimalLiteral = "0.1000001".parse().unwrap();
        assert!(b.contains_literal(&inside));
        assert!(!b.contains_literal(&outside));
    }

    #[test]
    fn test_range_string() {
        let exact = Ball::from_integer(5);
        assert_eq!(exact.to_range_string(10), "5");

        let b = Ball::new(BigFloat::from_integer(3), BigFloat::pow2(-3));
        assert_eq!(b.to_range_string(5), "[3 +/- 0.125]");
        assert_eq!(format!("{:#.5}", b), "[3 +/- 0.125]");
        assert_eq!(format!("{:.5}", b), "3");
    }

    #[test]
    fn test_from_str_uses_default_context() {
        let b: Ball = "1e3".parse().unwrap();
        assert_eq!(b, Ball::from_integer(1000));
    }
}
