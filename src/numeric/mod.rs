// ============================================================================
// Numeric Module
// Arbitrary-precision binary floats and midpoint-radius balls
// ============================================================================
//
// This module provides:
// - BigFloat: exact sign/mantissa/exponent value with canonical odd mantissa
// - Ball: midpoint plus non-negative radius enclosing a real number
// - ComplexBall: pair of real balls
// - RoundingMode: rounding direction for fitting values to a precision
// - ParseError: error types for constructing balls from external input
//
// Design principles:
// - No floating-point operations on values (f64 only at conversion boundaries)
// - All fallible construction returns Result (no panics)
// - Precision lives in an explicit Context, never in the value

mod ball;
mod big_float;
mod complex;
mod errors;
mod format;
mod rounding;

pub use ball::{Ball, DEFAULT_DISPLAY_DIGITS, RADIUS_DISPLAY_DIGITS};
pub use big_float::BigFloat;
pub use complex::{ComplexBall, ComplexParseError, ComplexPart};
pub use errors::{ParseError, ParseResult};
pub use format::{format_significant, trim_range};
pub(crate) use rounding::round_magnitude;
pub use rounding::RoundingMode;
