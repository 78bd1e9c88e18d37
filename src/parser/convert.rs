// ============================================================================
// Literal Conversion
// Exact decimal -> rounded binary midpoint plus error radius
// ============================================================================

use super::literal::DecimalLiteral;
use crate::context::Context;
use crate::numeric::{round_magnitude, Ball, BigFloat, ParseResult, RoundingMode};
use num_bigint::BigUint;
use num_traits::Pow;

/// Binary midpoint and error exponent produced by rounding a literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RoundedLiteral {
    pub mid: BigFloat,
    /// `Some(e)` when rounding was inexact: the error is at most `2^e`
    pub error_exponent: Option<i64>,
}

/// Round the exact value of `literal` to `precision` bits.
pub(crate) fn round_literal(
    literal: &DecimalLiteral,
    precision: u32,
    mode: RoundingMode,
) -> RoundedLiteral {
    if literal.is_zero() {
        return RoundedLiteral {
            mid: BigFloat::zero(),
            error_exponent: None,
        };
    }

    let negative = literal.is_negative();
    let ten = BigUint::from(10u32);
    let k = literal.exponent();

    let rounded = if k >= 0 {
        let n = literal.digits() * Pow::pow(&ten, k as u64);
        round_magnitude(n, 0, false, negative, precision, mode)
    } else {
        // digits / 10^m = digits / (5^m · 2^m): divide by 5^m, then scale the
        // quotient so it carries at least precision + 2 bits.
        let m = (-k) as u64;
        let five = BigUint::from(5u32);
        let den: BigUint = Pow::pow(&five, m);
        let num = literal.digits();

        let shift = i64::from(precision) + 2 + den.bits() as i64 - num.bits() as i64;
        let (a, b) = if shift >= 0 {
            (num << shift as u64, den)
        } else {
            (num.clone(), den << (-shift) as u64)
        };
        let q = &a / &b;
        let sticky = &q * &b != a;
        round_magnitude(q, -(m as i64) - shift, sticky, negative, precision, mode)
    };

    let error_exponent = rounded
        .inexact
        .then(|| mode.error_exponent(rounded.ulp_exponent));
    RoundedLiteral {
        mid: BigFloat::from_parts(negative, rounded.mantissa, rounded.exponent),
        error_exponent,
    }
}

/// Build the ball for `literal` at the context precision.
pub fn literal_to_ball(literal: &DecimalLiteral, ctx: &Context) -> ParseResult<Ball> {
    ctx.validate()?;
    let rounded = round_literal(literal, ctx.precision(), ctx.rounding());
    Ok(match rounded.error_exponent {
        Some(e) => Ball::new(rounded.mid, BigFloat::pow2(e)),
        None => Ball::exact(rounded.mid),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rounded(s: &str, bits: u32, mode: RoundingMode) -> RoundedLiteral {
        round_literal(&s.parse().unwrap(), bits, mode)
    }

    #[test]
    fn test_exact_integers() {
        let r = rounded("1024", 2, RoundingMode::Nearest);
        assert_eq!(r.mid, BigFloat::pow2(10));
        assert_eq!(r.error_exponent, None);

        let r = rounded("-12345678901234567890", 128, RoundingMode::Nearest);
        assert_eq!(r.error_exponent, None);
        assert!(r.mid.is_negative());
    }

    #[test]
    fn test_exact_binary_fractions() {
        let r = rounded("0.375", 4, RoundingMode::Nearest);
        assert_eq!(r.mid, BigFloat::from_f64(0.375).unwrap());
        assert_eq!(r.error_exponent, None);
    }

    #[test]
    fn test_one_tenth_matches_f64() {
        // 0.1 at 53 bits must agree with the platform's correctly rounded parse
        let r = rounded("0.1", 53, RoundingMode::Nearest);
        assert_eq!(r.mid, BigFloat::from_f64(0.1).unwrap());
        // 0.1 lies in [2^-4, 2^-3): ulp = 2^-56, half ulp = 2^-57
        assert_eq!(r.error_exponent, Some(-57));
    }

    #[test]
    fn test_large_integer_rounding_matches_f64() {
        let r = rounded("123456789012345678901234567890", 53, RoundingMode::Nearest);
        assert_eq!(r.mid, BigFloat::from_f64(123456789012345678901234567890.0).unwrap());
        assert!(r.error_exponent.is_some());
    }

    #[test]
    fn test_directed_error_is_full_ulp() {
        let down = rounded("0.1", 53, RoundingMode::Down);
        let up = rounded("0.1", 53, RoundingMode::Up);
        assert_eq!(down.error_exponent, Some(-56));
        assert!(down.mid < up.mid);
        assert_eq!(up.mid.sub_exact(&down.mid), BigFloat::pow2(-56));
    }

    #[test]
    fn test_floor_and_ceiling_follow_sign() {
        let floor = rounded("-0.1", 24, RoundingMode::Floor);
        let ceil = rounded("-0.1", 24, RoundingMode::Ceiling);
        assert!(floor.mid < ceil.mid);
        let exact = BigFloat::from_f64(-0.1).unwrap();
        assert!(floor.mid < exact && exact < ceil.mid);
    }

    #[test]
    fn test_literal_to_ball_validates_context() {
        let lit: DecimalLiteral = "1".parse().unwrap();
        let ctx = Context::default();
        assert!(literal_to_ball(&lit, &ctx).unwrap().is_exact());
    }
}
