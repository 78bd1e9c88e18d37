// ============================================================================
// Binary Floating-Point Value
// Arbitrary-precision sign/mantissa/exponent triple used for ball endpoints
// ============================================================================

use super::format::format_significant;
use super::rounding::{round_magnitude, RoundingMode};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Neg;

/// Exact binary floating-point number `(-1)^negative · mantissa · 2^exponent`.
///
/// Values are kept canonical: the mantissa is odd, and zero is stored as a
/// positive zero mantissa with exponent 0. Structural equality is therefore
/// value equality, and two equal values are bit-identical.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct BigFloat {
    negative: bool,
    mantissa: BigUint,
    exponent: i64,
}

impl BigFloat {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Zero
    #[inline]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Build from raw parts, normalizing to canonical form.
    pub fn from_parts(negative: bool, mantissa: BigUint, exponent: i64) -> Self {
        let Some(tz) = mantissa.trailing_zeros() else {
            return Self::zero();
        };
        Self {
            negative,
            mantissa: mantissa >> tz,
            exponent: exponent + tz as i64,
        }
    }

    /// Exact integer value.
    pub fn from_integer(value: i64) -> Self {
        Self::from_parts(value < 0, BigUint::from(value.unsigned_abs()), 0)
    }

    /// Exact power of two `2^exponent`.
    pub fn pow2(exponent: i64) -> Self {
        Self {
            negative: false,
            mantissa: BigUint::one(),
            exponent,
        }
    }

    /// Exact value of a finite `f64`; `None` for NaN and infinities.
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let bits = value.to_bits();
        let negative = bits >> 63 == 1;
        let biased = ((bits >> 52) & 0x7ff) as i64;
        let fraction = bits & ((1u64 << 52) - 1);
        let (mantissa, exponent) = if biased == 0 {
            (fraction, -1074)
        } else {
            (fraction | (1u64 << 52), biased - 1075)
        };
        Some(Self::from_parts(negative, BigUint::from(mantissa), exponent))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.mantissa.is_zero()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Odd mantissa (zero for zero).
    #[inline]
    pub fn mantissa(&self) -> &BigUint {
        &self.mantissa
    }

    #[inline]
    pub fn exponent(&self) -> i64 {
        self.exponent
    }

    /// Number of significant bits in the mantissa.
    #[inline]
    pub fn mantissa_bits(&self) -> u64 {
        self.mantissa.bits()
    }

    /// Position of the leading bit plus one: `|self|` lies in `[2^(top-1), 2^top)`.
    #[inline]
    fn top(&self) -> i64 {
        self.exponent + self.mantissa.bits() as i64
    }

    pub fn abs(&self) -> Self {
        Self {
            negative: false,
            ..self.clone()
        }
    }

    /// Signed mantissa as a `BigInt`.
    pub(crate) fn signed_mantissa(&self) -> BigInt {
        let sign = if self.negative { Sign::Minus } else { Sign::Plus };
        BigInt::from_biguint(sign, self.mantissa.clone())
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Round to `precision` bits. Returns the rounded value and whether
    /// rounding changed it.
    pub fn round(&self, precision: u32, mode: RoundingMode) -> (Self, bool) {
        if self.is_zero() {
            return (Self::zero(), false);
        }
        let r = round_magnitude(
            self.mantissa.clone(),
            self.exponent,
            false,
            self.negative,
            precision,
            mode,
        );
        (
            Self::from_parts(self.negative, r.mantissa, r.exponent),
            r.inexact,
        )
    }

    /// Exact sum.
    pub fn add_exact(&self, other: &Self) -> Self {
        if self.is_zero() {
            return other.clone();
        }
        if other.is_zero() {
            return self.clone();
        }
        let base = self.exponent.min(other.exponent);
        let lhs = self.signed_mantissa() << (self.exponent - base) as u64;
        let rhs = other.signed_mantissa() << (other.exponent - base) as u64;
        let (sign, magnitude) = (lhs + rhs).into_parts();
        Self::from_parts(sign == Sign::Minus, magnitude, base)
    }

    /// Exact difference.
    pub fn sub_exact(&self, other: &Self) -> Self {
        self.add_exact(&-other.clone())
    }

    /// Sum of two magnitudes, rounded away from zero to `precision` bits.
    ///
    /// Used for radii: the result is never below the exact sum.
    pub fn add_magnitudes_up(&self, other: &Self, precision: u32) -> Self {
        let (sum, _) = self.abs().add_exact(&other.abs()).round(precision, RoundingMode::Up);
        sum
    }

    // ========================================================================
    // Display
    // ========================================================================

    /// Format to `digits` significant decimal digits.
    pub fn to_decimal_string(&self, digits: usize, mode: RoundingMode) -> String {
        format_significant(self, digits, mode)
    }

    /// Enough decimal digits to show every mantissa bit.
    pub fn natural_digits(&self) -> usize {
        (self.mantissa_bits() as f64 * std::f64::consts::LOG10_2).ceil() as usize + 1
    }

    fn cmp_magnitude(&self, other: &Self) -> Ordering {
        match (self.is_zero(), other.is_zero()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {},
        }
        match self.top().cmp(&other.top()) {
            Ordering::Equal => {},
            unequal => return unequal,
        }
        let base = self.exponent.min(other.exponent);
        let lhs = &self.mantissa << (self.exponent - base) as u64;
        let rhs = &other.mantissa << (other.exponent - base) as u64;
        lhs.cmp(&rhs)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl PartialOrd for BigFloat {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigFloat {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.cmp_magnitude(other),
            (true, true) => other.cmp_magnitude(self),
        }
    }
}

impl Neg for BigFloat {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        if self.is_zero() {
            return self;
        }
        Self {
            negative: !self.negative,
            ..self
        }
    }
}

impl fmt::Debug for BigFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BigFloat({}{}*2^{})",
            if self.negative { "-" } else { "" },
            self.mantissa,
            self.exponent
        )
    }
}

impl fmt::Display for BigFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = f.precision().unwrap_or_else(|| self.natural_digits());
        f.write_str(&format_significant(self, digits, RoundingMode::Nearest))
    }
}

// ============================================================================
// Tests
// ============================================================================
