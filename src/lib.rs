// ============================================================================
// Ball Decimal Library
// Arbitrary-precision decimal parsing into midpoint-radius balls
// ============================================================================

//! # Ball Decimal
//!
//! Converts decimal literals into ball values: an arbitrary-precision binary
//! midpoint plus a non-negative radius that bounds the rounding error.
//!
//! ## Features
//!
//! - **Exact decimal decomposition** of `[+-]digits[.digits][e[+-]digits]`
//! - **Correct rounding** to any precision from 2 bits up, nearest-even or directed
//! - **Tight radii**: half an ulp under nearest rounding, zero for exact values
//! - **Explicit context** carrying precision and rounding, no global state
//! - **Significant-digit display** in C `%g` style, with optional range form
//!
//! ## Example
//!
//! ```rust
//! use ball_decimal::prelude::*;
//!
//! let ctx = Context::new(256).unwrap();
//! let x = Ball::parse("1.23456864936982369264298462339e11", &ctx).unwrap();
//!
//! assert_eq!(x.to_decimal_string(20), "123456864936.98236926");
//! assert!(!x.is_exact());
//!
//! // Failed parses report why and never yield a partial value
//! assert_eq!(Ball::parse("", &ctx), Err(ParseError::EmptyInput));
//! assert!(matches!(
//!     Ball::parse("12.3.4", &ctx),
//!     Err(ParseError::MalformedLiteral { .. })
//! ));
//! ```

pub mod context;
pub mod numeric;
pub mod parser;

// Re-exports for convenience
pub mod prelude {
    pub use crate::context::{Context, DEFAULT_PRECISION, MAX_PRECISION, MIN_PRECISION};
    pub use crate::numeric::{
        Ball, BigFloat, ComplexBall, ComplexParseError, ComplexPart, ParseError, ParseResult,
        RoundingMode, DEFAULT_DISPLAY_DIGITS,
    };
    pub use crate::parser::{parse, parse_ball_literal, parse_with_precision, DecimalLiteral};
}
