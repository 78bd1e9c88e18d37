// ============================================================================
// Parser Module
// Decimal string -> ball conversion at a caller-chosen precision
// ============================================================================

mod convert;
mod literal;

pub use convert::literal_to_ball;
pub use literal::{scan, DecimalLiteral, MAX_DECIMAL_EXPONENT};

use crate::context::Context;
use crate::numeric::{Ball, BigFloat, ParseError, ParseResult, RoundingMode};
use convert::round_literal;

/// Precision in bits of radii written in midpoint-radius literals.
pub const RADIUS_PRECISION: u32 = 30;

/// Parse a decimal literal into a ball at the context precision.
///
/// The returned ball always contains the exact value of the literal. Its
/// radius is half an ulp of the midpoint under round-to-nearest, a full ulp
/// under directed rounding, and zero when the value is representable.
///
/// # Example
/// ```
/// use ball_decimal::prelude::*;
///
/// let ctx = Context::new(256).unwrap();
/// let x = parse("1.23456864936982369264298462339e11", &ctx).unwrap();
/// assert_eq!(x.to_decimal_string(20), "123456864936.98236926");
/// ```
pub fn parse(input: &str, ctx: &Context) -> ParseResult<Ball> {
    ctx.validate()?;
    let literal = scan(input).inspect_err(|err| {
        tracing::trace!(%err, input, "rejected decimal literal");
    })?;
    let ball = literal_to_ball(&literal, ctx)?;
    tracing::debug!(
        precision = ctx.precision(),
        exact = ball.is_exact(),
        mantissa_bits = ball.mid().mantissa_bits(),
        "parsed decimal literal"
    );
    Ok(ball)
}

/// Parse at `precision_bits` with round-to-nearest.
pub fn parse_with_precision(input: &str, precision_bits: u64) -> ParseResult<Ball> {
    parse(input, &Context::new(precision_bits)?)
}

/// Parse a midpoint-radius literal: `[mid +/- rad]`, `mid +/- rad`, or a plain
/// decimal literal.
///
/// The radius literal must be non-negative. It is rounded upward to
/// `RADIUS_PRECISION` bits and widened by the midpoint's rounding error.
pub fn parse_ball_literal(input: &str, ctx: &Context) -> ParseResult<Ball> {
    ctx.validate()?;

    let start = input.len() - input.trim_start().len();
    let body = input.trim();
    if body.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let (body, base) = match body.strip_prefix('[') {
        Some(inner) => {
            let inner = inner
                .strip_suffix(']')
                .ok_or(ParseError::MalformedLiteral { offset: input.trim_end().len() })?;
            (inner, start + 1)
        },
        None => (body, start),
    };

    let Some(sep) = body.find("+/-") else {
        return parse(body, ctx).map_err(|err| shift_offset(err, base));
    };

    let mid_text = &body[..sep];
    let rad_start = sep + 3;
    let rad_text = &body[rad_start..];

    let mid_literal = scan(mid_text).map_err(|err| shift_offset(err, base))?;
    let rad_literal = scan(rad_text).map_err(|err| shift_offset(err, base + rad_start))?;
    if rad_literal.is_negative() {
        let sign_at = rad_text.len() - rad_text.trim_start().len();
        return Err(ParseError::MalformedLiteral {
            offset: base + rad_start + sign_at,
        });
    }

    let mid = round_literal(&mid_literal, ctx.precision(), ctx.rounding());
    let rad = round_literal(&rad_literal, RADIUS_PRECISION, RoundingMode::Up).mid;
    let rad = match mid.error_exponent {
        Some(e) => rad.add_magnitudes_up(&BigFloat::pow2(e), RADIUS_PRECISION),
        None => rad,
    };

    tracing::debug!(
        precision = ctx.precision(),
        exact = rad.is_zero(),
        "parsed midpoint-radius literal"
    );
    Ok(Ball::new(mid.mid, rad))
}

fn shift_offset(err: ParseError, base: usize) -> ParseError {
    match err {
        ParseError::MalformedLiteral { offset } => ParseError::MalformedLiteral {
            offset: offset + base,
        },
        ParseError::EmptyInput if base > 0 => ParseError::MalformedLiteral { offset: base },
        other => other,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const LITERAL: &str = "1.23456864936982369264298462339e11";

    #[test]
    fn test_reference_literal() {
        let x = parse_with_precision(LITERAL, 256).unwrap();
        assert_eq!(x.to_decimal_string(20), "123456864936.98236926");
        assert!(!x.is_exact());
        assert!(x.contains_literal(&LITERAL.parse().unwrap()));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_with_precision("", 256), Err(ParseError::EmptyInput));
    }

    #[test]
    fn test_malformed_inputs() {
        for bad in ["12.3.4", "1.2.3", "1e", "abc", "--1", "1e5.0", "0x10"] {
            let err = parse_with_precision(bad, 64).unwrap_err();
            assert!(
                matches!(err, ParseError::MalformedLiteral { .. }),
                "{:?} gave {:?}",
                bad,
                err
            );
        }
    }

    #[test]
    fn test_invalid_precision() {
        assert_eq!(
            parse_with_precision("1", 1),
            Err(ParseError::InvalidPrecision(1))
        );
    }

    #[test]
    fn test_exact_integer_round_trip() {
        for text in ["0", "7", "-42", "1000", "9007199254740993", "-123456789012345678"] {
            let x = parse_with_precision(text, 64).unwrap();
            assert!(x.is_exact(), "{}", text);
            assert_eq!(x.to_decimal_string(20), text);
        }
    }

    #[test]
    fn test_integer_beyond_precision_is_inexact() {
        // 2^53 + 1 needs 54 bits
        let x = parse_with_precision("9007199254740993", 53).unwrap();
        assert!(!x.is_exact());
        assert_eq!(x.rad(), &BigFloat::pow2(0));
        assert!(x.contains_literal(&"9007199254740993".parse().unwrap()));
    }

    #[test]
    fn test_radius_is_half_ulp() {
        let x = parse_with_precision("0.1", 53).unwrap();
        assert_eq!(x.rad(), &BigFloat::pow2(-57));
    }

    #[test]
    fn test_directed_rounding_ball() {
        let ctx = Context::new(24).unwrap().with_rounding(RoundingMode::Floor);
        let x = parse("2.7", &ctx).unwrap();
        assert_eq!(x.rad(), &BigFloat::pow2(-22));
        assert!(x.contains_literal(&"2.7".parse().unwrap()));
    }

    #[test]
    fn test_ball_literal_forms() {
        let ctx = Context::new(64).unwrap();

        let x = parse_ball_literal("[1.5 +/- 0.25]", &ctx).unwrap();
        assert_eq!(x.mid(), &BigFloat::from_f64(1.5).unwrap());
        assert_eq!(x.rad(), &BigFloat::pow2(-2));

        let y = parse_ball_literal("  1.5 +/- 0.25 ", &ctx).unwrap();
        assert_eq!(x, y);

        let plain = parse_ball_literal("3", &ctx).unwrap();
        assert_eq!(plain, Ball::from_integer(3));
    }

    #[test]
    fn test_ball_literal_widens_radius() {
        let ctx = Context::new(32).unwrap();
        let x = parse_ball_literal("0.1 +/- 1e-3", &ctx).unwrap();
        assert!(x.contains_literal(&"0.101".parse().unwrap()));
        assert!(x.contains_literal(&"0.099".parse().unwrap()));
        assert!(!x.contains_literal(&"0.1011".parse().unwrap()));
    }

    #[test]
    fn test_ball_literal_errors() {
        let ctx = Context::new(64).unwrap();
        assert_eq!(parse_ball_literal("", &ctx), Err(ParseError::EmptyInput));
        assert_eq!(
            parse_ball_literal("[1 +/- 2", &ctx),
            Err(ParseError::MalformedLiteral { offset: 8 })
        );
        assert_eq!(
            parse_ball_literal("1 +/- -2", &ctx),
            Err(ParseError::MalformedLiteral { offset: 6 })
        );
        assert_eq!(
            parse_ball_literal("1 +/- x", &ctx),
            Err(ParseError::MalformedLiteral { offset: 6 })
        );
        assert_eq!(
            parse_ball_literal("[]", &ctx),
            Err(ParseError::MalformedLiteral { offset: 1 })
        );
    }

    #[test]
    fn test_idempotent() {
        let a = parse_with_precision(LITERAL, 256).unwrap();
        let b = parse_with_precision(LITERAL, 256).unwrap();
        assert_eq!(a, b);
    }

    fn literal_strategy() -> impl Strategy<Value = String> {
        (
            prop::bool::ANY,
            "[0-9]{1,30}",
            prop::option::of("[0-9]{0,30}"),
            prop::option::of(-60i32..60),
        )
            .prop_map(|(neg, int, frac, exp)| {
                let mut s = String::new();
                if neg {
                    s.push('-');
                }
                s.push_str(&int);
                if let Some(frac) = frac {
                    s.push('.');
                    s.push_str(&frac);
                }
                if let Some(exp) = exp {
                    s.push_str(&format!("e{}", exp));
                }
                s
            })
    }

    proptest! {
        #[test]
        fn prop_ball_contains_literal(text in literal_strategy(), bits in 2u64..300) {
            let ball = parse_with_precision(&text, bits).unwrap();
            let literal: DecimalLiteral = text.parse().unwrap();
            prop_assert!(ball.contains_literal(&literal));
        }

        #[test]
        fn prop_parse_is_deterministic(text in literal_strategy(), bits in 2u64..300) {
            let a = parse_with_precision(&text, bits).unwrap();
            let b = parse_with_precision(&text, bits).unwrap();
            prop_assert_eq!(a, b);
        }

        #[test]
        fn prop_mantissa_fits_precision(text in literal_strategy(), bits in 2u64..300) {
            let ball = parse_with_precision(&text, bits).unwrap();
            prop_assert!(ball.mid().mantissa_bits() <= bits);
        }
    }
}
