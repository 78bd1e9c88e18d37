// ============================================================================
// Decimal Literal
// Grammar validation and exact decomposition of decimal strings
// ============================================================================
//
// Grammar: [+-]? digit+ ('.' digit*)? (('e'|'E') [+-]? digit+)?
// Surrounding ASCII whitespace is ignored.

use crate::numeric::{ParseError, ParseResult};
use num_bigint::BigUint;
use num_traits::Zero;
use std::fmt;

/// Largest accepted magnitude of the normalized decimal exponent.
pub const MAX_DECIMAL_EXPONENT: i64 = 10_000_000;

/// Exact value `(-1)^negative · digits · 10^exponent` of a decimal literal.
///
/// Trailing zeros of `digits` are folded into `exponent`, and zero is stored
/// as a positive zero with exponent 0.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DecimalLiteral {
    negative: bool,
    digits: BigUint,
    exponent: i64,
}

impl DecimalLiteral {
    /// Build from parts, normalizing trailing zeros.
    pub fn from_parts(negative: bool, digits: BigUint, exponent: i64) -> Self {
        if digits.is_zero() {
            return Self {
                negative: false,
                digits,
                exponent: 0,
            };
        }
        let ten = BigUint::from(10u32);
        let mut digits = digits;
        let mut exponent = exponent;
        loop {
            let q = &digits / &ten;
            if &q * &ten != digits {
                break;
            }
            digits = q;
            exponent += 1;
        }
        Self {
            negative,
            digits,
            exponent,
        }
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits.is_zero()
    }

    /// Significant decimal digits as an integer.
    #[inline]
    pub fn digits(&self) -> &BigUint {
        &self.digits
    }

    /// Power of ten applied to `digits`.
    #[inline]
    pub fn exponent(&self) -> i64 {
        self.exponent
    }
}

/// Validate `input` against the literal grammar and decompose it exactly.
///
/// # Errors
/// - `EmptyInput` for empty or whitespace-only input
/// - `MalformedLiteral` with the byte offset of the first bad character
/// - `ExponentOutOfRange` when the normalized exponent exceeds `MAX_DECIMAL_EXPONENT`
pub fn scan(input: &str) -> ParseResult<DecimalLiteral> {
    let trimmed = input.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let lead = input.len() - trimmed.len();
    let body = trimmed.trim_end_matches(|c: char| c.is_ascii_whitespace());
    if body.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let bytes = body.as_bytes();
    let malformed = |pos: usize| ParseError::MalformedLiteral { offset: lead + pos };
    let mut pos = 0;

    let negative = match bytes[0] {
        b'-' => {
            pos += 1;
            true
        },
        b'+' => {
            pos += 1;
            false
        },
        _ => false,
    };

    let int_start = pos;
    pos += count_digits(&bytes[pos..]);
    if pos == int_start {
        return Err(malformed(pos));
    }
    let int_digits = &body[int_start..pos];

    let mut frac_digits = "";
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        let frac_start = pos;
        pos += count_digits(&bytes[pos..]);
        frac_digits = &body[frac_start..pos];
    }

    let mut exp_text = None;
    if matches!(bytes.get(pos), Some(b'e') | Some(b'E')) {
        pos += 1;
        let exp_start = pos;
        if matches!(bytes.get(pos), Some(b'+') | Some(b'-')) {
            pos += 1;
        }
        let digits_start = pos;
        pos += count_digits(&bytes[pos..]);
        if pos == digits_start {
            return Err(malformed(pos));
        }
        exp_text = Some(&body[exp_start..pos]);
    }

    if pos != bytes.len() {
        return Err(malformed(pos));
    }

    let written_exponent = match exp_text {
        Some(text) => parse_exponent(text)?,
        None => 0,
    };

    let mantissa_text = format!("{}{}", int_digits, frac_digits);
    let leading_trimmed = mantissa_text.trim_start_matches('0');
    let significant = leading_trimmed.trim_end_matches('0');
    let trailing_zeros = (leading_trimmed.len() - significant.len()) as i64;
    let digits = if significant.is_empty() {
        BigUint::zero()
    } else {
        BigUint::parse_bytes(significant.as_bytes(), 10).ok_or(malformed(int_start))?
    };

    let exponent = written_exponent - frac_digits.len() as i64 + trailing_zeros;
    let literal = DecimalLiteral::from_parts(negative, digits, exponent);
    if literal.exponent.abs() > MAX_DECIMAL_EXPONENT {
        return Err(ParseError::ExponentOutOfRange);
    }
    Ok(literal)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Parse a signed exponent, saturating early once it is clearly out of range.
fn parse_exponent(text: &str) -> ParseResult<i64> {
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let mut value: i64 = 0;
    for b in digits.bytes() {
        value = value * 10 + i64::from(b - b'0');
        // Leaves room for the fractional-digit adjustment without overflow.
        if value > 4 * MAX_DECIMAL_EXPONENT {
            return Err(ParseError::ExponentOutOfRange);
        }
    }
    Ok(if negative { -value } else { value })
}

impl std::str::FromStr for DecimalLiteral {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        scan(s)
    }
}

impl fmt::Display for DecimalLiteral {
    /// Canonical form `[-]digitsE[-]exponent`, or just the digits at exponent 0.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        if self.exponent == 0 {
            write!(f, "{}", self.digits)
        } else {
            write!(f, "{}e{}", self.digits, self.exponent)
        }
    }
}
