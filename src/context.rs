// ============================================================================
// Arithmetic Context
// Working precision and rounding passed explicitly to every operation
// ============================================================================

use crate::numeric::{ParseError, ParseResult, RoundingMode};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Smallest supported working precision in bits.
pub const MIN_PRECISION: u32 = 2;

/// Largest supported working precision in bits.
pub const MAX_PRECISION: u32 = 1 << 24;

/// Working precision used by [`Context::default`].
pub const DEFAULT_PRECISION: u32 = 128;

/// Precision and rounding applied when a value is fitted into a ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Context {
    /// Significand precision in bits
    precision: u32,

    /// Rounding direction for the midpoint
    rounding: RoundingMode,
}

impl Context {
    /// Create a context with round-to-nearest.
    ///
    /// # Errors
    /// Returns `InvalidPrecision` outside `MIN_PRECISION..=MAX_PRECISION`.
    pub fn new(precision: u64) -> ParseResult<Self> {
        if precision < u64::from(MIN_PRECISION) || precision > u64::from(MAX_PRECISION) {
            return Err(ParseError::InvalidPrecision(precision));
        }
        Ok(Self {
            precision: precision as u32,
            rounding: RoundingMode::Nearest,
        })
    }

    /// Builder method: Set rounding mode
    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    #[inline]
    pub fn precision(&self) -> u32 {
        self.precision
    }

    #[inline]
    pub fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    /// Decimal digits carried by the precision: `floor(precision · log10 2)`.
    pub fn display_digits(&self) -> usize {
        ((self.precision as f64 * std::f64::consts::LOG10_2).floor() as usize).max(1)
    }

    /// Validate the context.
    ///
    /// Contexts from `new` are always valid; deserialized ones may not be.
    pub fn validate(&self) -> ParseResult<()> {
        if !(MIN_PRECISION..=MAX_PRECISION).contains(&self.precision) {
            return Err(ParseError::InvalidPrecision(u64::from(self.precision)));
        }
        Ok(())
    }
}

impl Default for Context {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            rounding: RoundingMode::Nearest,
        }
    }
}

// ============================================================================
// Preset Contexts
// ============================================================================

impl Context {
    /// IEEE binary32 significand (24 bits)
    pub const fn single() -> Self {
        Self::preset(24)
    }

    /// IEEE binary64 significand (53 bits)
    pub const fn double() -> Self {
        Self::preset(53)
    }

    /// IEEE binary128 significand (113 bits)
    pub const fn quad() -> Self {
        Self::preset(113)
    }

    /// IEEE binary256 significand (237 bits)
    pub const fn octuple() -> Self {
        Self::preset(237)
    }

    const fn preset(precision: u32) -> Self {
        Self {
            precision,
            rounding: RoundingMode::Nearest,
        }
    }
}
