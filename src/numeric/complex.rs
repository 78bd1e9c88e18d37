// ============================================================================
// Complex Ball
// Rectangular complex enclosure built from two real balls
// ============================================================================

use super::ball::{Ball, DEFAULT_DISPLAY_DIGITS};
use super::errors::ParseError;
use crate::context::Context;
use std::fmt;

/// Which component of a complex literal failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComplexPart {
    Real,
    Imaginary,
}

impl fmt::Display for ComplexPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComplexPart::Real => f.write_str("real"),
            ComplexPart::Imaginary => f.write_str("imaginary"),
        }
    }
}

/// Errors from parsing a complex pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplexParseError {
    /// Input was not of the form `real,imag`
    NotAPair,
    /// One of the components was rejected
    Component {
        part: ComplexPart,
        error: ParseError,
    },
}

impl fmt::Display for ComplexParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComplexParseError::NotAPair => {
                write!(f, "invalid complex input: expected `real,imag`")
            },
            ComplexParseError::Component { part, error } => {
                write!(f, "invalid {} part: {}", part, error)
            },
        }
    }
}

impl std::error::Error for ComplexParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ComplexParseError::NotAPair => None,
            ComplexParseError::Component { error, .. } => Some(error),
        }
    }
}

/// Complex number `re + im·i` with independent real and imaginary balls.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ComplexBall {
    pub re: Ball,
    pub im: Ball,
}

impl ComplexBall {
    pub fn new(re: Ball, im: Ball) -> Self {
        Self { re, im }
    }

    /// Parse both components at the context precision.
    ///
    /// Both components are attempted; the first failure is reported.
    pub fn parse(real: &str, imag: &str, ctx: &Context) -> Result<Self, ComplexParseError> {
        let re = Ball::parse(real, ctx);
        let im = Ball::parse(imag, ctx);
        match (re, im) {
            (Ok(re), Ok(im)) => Ok(Self { re, im }),
            (Err(error), _) => Err(ComplexParseError::Component {
                part: ComplexPart::Real,
                error,
            }),
            (_, Err(error)) => Err(ComplexParseError::Component {
                part: ComplexPart::Imaginary,
                error,
            }),
        }
    }

    /// Parse a `real,imag` pair.
    pub fn parse_pair(input: &str, ctx: &Context) -> Result<Self, ComplexParseError> {
        let mut parts = input.split(',');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(real), Some(imag), None) => Self::parse(real, imag, ctx),
            _ => Err(ComplexParseError::NotAPair),
        }
    }

    /// True when both components are exact.
    pub fn is_exact(&self) -> bool {
        self.re.is_exact() && self.im.is_exact()
    }

    /// `(re,imi)` with midpoints only.
    pub fn to_decimal_string(&self, digits: usize) -> String {
        format!(
            "({},{}i)",
            self.re.to_decimal_string(digits),
            self.im.to_decimal_string(digits)
        )
    }

    /// `(re,imi)` with each component in range form.
    pub fn to_range_string(&self, digits: usize) -> String {
        format!(
            "({},{}i)",
            self.re.to_range_string(digits),
            self.im.to_range_string(digits)
        )
    }
}

impl fmt::Display for ComplexBall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = f.precision().unwrap_or(DEFAULT_DISPLAY_DIGITS);
        if f.alternate() {
            f.write_str(&self.to_range_string(digits))
        } else {
            f.write_str(&self.to_decimal_string(digits))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pair() {
        let ctx = Context::new(128).unwrap();
        let z = ComplexBall::parse_pair("1.5,-2", &ctx).unwrap();
        assert!(z.is_exact());
        assert_eq!(z.to_string(), "(1.5,-2i)");
    }

    #[test]
    fn test_parse_pair_shape() {
        let ctx = Context::new(64).unwrap();
        assert_eq!(
            ComplexBall::parse_pair("1", &ctx),
            Err(ComplexParseError::NotAPair)
        );
        assert_eq!(
            ComplexBall::parse_pair("1,2,3", &ctx),
            Err(ComplexParseError::NotAPair)
        );
    }

    #[test]
    fn test_failing_component_is_named() {
        let ctx = Context::new(64).unwrap();
        let err = ComplexBall::parse("1", "x", &ctx).unwrap_err();
        assert_eq!(
            err,
            ComplexParseError::Component {
                part: ComplexPart::Imaginary,
                error: ParseError::MalformedLiteral { offset: 0 },
            }
        );
        assert_eq!(
            err.to_string(),
            "invalid imaginary part: malformed decimal literal at byte 0"
        );

        let err = ComplexBall::parse("", "1", &ctx).unwrap_err();
        assert!(matches!(
            err,
            ComplexParseError::Component {
                part: ComplexPart::Real,
                error: ParseError::EmptyInput
            }
        ));
    }

    #[test]
    fn test_range_display() {
        let ctx = Context::new(16).unwrap();
        let z = ComplexBall::parse_pair("0.1,2", &ctx).unwrap();
        let shown = format!("{:#.4}", z);
        assert!(shown.starts_with("([0.1 +/- "), "{}", shown);
        assert!(shown.ends_with("],2i)"), "{}", shown);
    }
}
