// ============================================================================
// Rounding
// Rounding modes and the shared mantissa rounding kernel
// ============================================================================

use num_bigint::BigUint;
use num_traits::One;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rounding direction applied when a value does not fit the working precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingMode {
    /// Round to nearest, ties to even
    #[default]
    Nearest,
    /// Round toward zero
    Down,
    /// Round away from zero
    Up,
    /// Round toward negative infinity
    Floor,
    /// Round toward positive infinity
    Ceiling,
}

/// Portion of the magnitude discarded by a rounding step, relative to half
/// a unit in the last kept place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tail {
    Zero,
    BelowHalf,
    Half,
    AboveHalf,
}

impl Tail {
    /// Classify a discarded remainder against `half` of the divisor.
    ///
    /// `sticky` marks further nonzero bits below the remainder.
    pub(crate) fn classify(rem: &BigUint, half: &BigUint, sticky: bool) -> Self {
        let rem_zero = rem.bits() == 0;
        if rem_zero && !sticky {
            return Tail::Zero;
        }
        match rem.cmp(half) {
            std::cmp::Ordering::Less => Tail::BelowHalf,
            std::cmp::Ordering::Equal if sticky => Tail::AboveHalf,
            std::cmp::Ordering::Equal => Tail::Half,
            std::cmp::Ordering::Greater => Tail::AboveHalf,
        }
    }
}

impl RoundingMode {
    /// Directed modes bound the error by a full ulp instead of half of one.
    #[inline]
    pub const fn is_directed(self) -> bool {
        !matches!(self, RoundingMode::Nearest)
    }

    /// Decide whether the truncated magnitude must be bumped by one unit.
    #[inline]
    pub(crate) fn rounds_away(self, negative: bool, lsb_odd: bool, tail: Tail) -> bool {
        if tail == Tail::Zero {
            return false;
        }
        match self {
            RoundingMode::Nearest => match tail {
                Tail::AboveHalf => true,
                Tail::Half => lsb_odd,
                _ => false,
            },
            RoundingMode::Down => false,
            RoundingMode::Up => true,
            RoundingMode::Floor => negative,
            RoundingMode::Ceiling => !negative,
        }
    }

    /// Binary exponent of the error bound for a result whose ulp is `2^ulp_exponent`.
    #[inline]
    pub(crate) const fn error_exponent(self, ulp_exponent: i64) -> i64 {
        if self.is_directed() {
            ulp_exponent
        } else {
            ulp_exponent - 1
        }
    }
}

impl std::str::FromStr for RoundingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nearest" | "n" => Ok(RoundingMode::Nearest),
            "down" | "zero" => Ok(RoundingMode::Down),
            "up" => Ok(RoundingMode::Up),
            "floor" => Ok(RoundingMode::Floor),
            "ceiling" | "ceil" => Ok(RoundingMode::Ceiling),
            other => Err(format!("unknown rounding mode: {}", other)),
        }
    }
}

/// Outcome of rounding a magnitude to a fixed number of bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Rounded {
    pub mantissa: BigUint,
    pub exponent: i64,
    pub inexact: bool,
    /// Exponent of one unit in the last place at the target precision
    pub ulp_exponent: i64,
}

/// Round the magnitude `mantissa · 2^exponent` to `precision` bits.
///
/// `sticky` flags a nonzero tail strictly below the mantissa's lowest bit.
/// When it is set the mantissa must carry more than `precision` bits.
pub(crate) fn round_magnitude(
    mantissa: BigUint,
    exponent: i64,
    sticky: bool,
    negative: bool,
    precision: u32,
    mode: RoundingMode,
) -> Rounded {
    let bits = mantissa.bits();
    let precision = u64::from(precision);

    if bits <= precision {
        debug_assert!(!sticky, "sticky tail needs guard bits");
        return Rounded {
            mantissa,
            exponent,
            inexact: sticky,
            ulp_exponent: exponent - (precision - bits) as i64,
        };
    }

    let shift = bits - precision;
    let mut kept = &mantissa >> shift;
    let rem = &mantissa - (&kept << shift);
    let half = BigUint::one() << (shift - 1);
    let tail = Tail::classify(&rem, &half, sticky);

    if mode.rounds_away(negative, kept.bit(0), tail) {
        kept += 1u32;
    }

    let exponent = exponent + shift as i64;
    Rounded {
        mantissa: kept,
        exponent,
        inexact: tail != Tail::Zero,
        ulp_exponent: exponent,
    }
}
