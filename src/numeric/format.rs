// ============================================================================
// Decimal Formatting
// Significant-digit rendering of binary floating-point values
// ============================================================================
//
// Output follows the C `%g` conventions: fixed notation when the decimal
// exponent X satisfies -4 <= X < digits, scientific `d.ddde+XX` otherwise,
// with trailing fractional zeros removed.

use super::big_float::BigFloat;
use super::rounding::{RoundingMode, Tail};
use num_bigint::BigUint;
use num_traits::{One, Pow};

/// Format `value` to `digits` significant decimal digits.
///
/// `digits` below one is treated as one.
pub fn format_significant(value: &BigFloat, digits: usize, mode: RoundingMode) -> String {
    if value.is_zero() {
        return "0".to_string();
    }
    let digits = digits.max(1);
    let (scaled, exponent10) = scale_to_digits(value, digits, mode);

    let mut text = scaled.to_string();
    while text.len() > 1 && text.ends_with('0') {
        text.pop();
    }

    let mut out = String::with_capacity(text.len() + 8);
    if value.is_negative() {
        out.push('-');
    }
    if exponent10 < -4 || exponent10 >= digits as i64 {
        push_scientific(&mut out, &text, exponent10);
    } else {
        push_fixed(&mut out, &text, exponent10);
    }
    out
}

/// Compute `q` with exactly `digits` decimal digits and the decimal exponent
/// `e10` such that `|value| ≈ q · 10^(e10 - digits + 1)`, rounded per `mode`.
fn scale_to_digits(value: &BigFloat, digits: usize, mode: RoundingMode) -> (BigUint, i64) {
    let exponent = value.exponent();
    let numerator = value.mantissa() << exponent.max(0) as u64;
    let denominator = BigUint::one() << (-exponent).max(0) as u64;

    let ten = BigUint::from(10u32);
    let lower: BigUint = Pow::pow(&ten, (digits - 1) as u64);
    let upper: BigUint = &lower * 10u32;

    // Leading bit position gives a first guess within one of the true exponent.
    let top = exponent + value.mantissa_bits() as i64 - 1;
    let mut exponent10 = (top as f64 * std::f64::consts::LOG10_2).floor() as i64;

    loop {
        let shift = digits as i64 - 1 - exponent10;
        let (a, b) = if shift >= 0 {
            (&numerator * Pow::pow(&ten, shift as u64), denominator.clone())
        } else {
            (numerator.clone(), &denominator * Pow::pow(&ten, (-shift) as u64))
        };
        let mut q = &a / &b;
        let rem = &a - &q * &b;

        if q >= upper {
            exponent10 += 1;
            continue;
        }
        if q < lower {
            exponent10 -= 1;
            continue;
        }

        let twice_rem = &rem << 1u32;
        let tail = match twice_rem.cmp(&b) {
            _ if rem.bits() == 0 => Tail::Zero,
            std::cmp::Ordering::Less => Tail::BelowHalf,
            std::cmp::Ordering::Equal => Tail::Half,
            std::cmp::Ordering::Greater => Tail::AboveHalf,
        };
        if mode.rounds_away(value.is_negative(), q.bit(0), tail) {
            q += 1u32;
            if q == upper {
                q = lower;
                exponent10 += 1;
            }
        }
        return (q, exponent10);
    }
}

fn push_scientific(out: &mut String, text: &str, exponent10: i64) {
    let (lead, rest) = text.split_at(1);
    out.push_str(lead);
    if !rest.is_empty() {
        out.push('.');
        out.push_str(rest);
    }
    let sign = if exponent10 < 0 { '-' } else { '+' };
    out.push_str(&format!("e{}{:02}", sign, exponent10.unsigned_abs()));
}

fn push_fixed(out: &mut String, text: &str, exponent10: i64) {
    if exponent10 < 0 {
        out.push_str("0.");
        for _ in 0..(-exponent10 - 1) {
            out.push('0');
        }
        out.push_str(text);
        return;
    }
    let int_len = exponent10 as usize + 1;
    if text.len() <= int_len {
        out.push_str(text);
        for _ in text.len()..int_len {
            out.push('0');
        }
    } else {
        out.push_str(&text[..int_len]);
        out.push('.');
        out.push_str(&text[int_len..]);
    }
}

/// Strip a `[mid +/- rad]` or `mid +/- rad` rendering down to `mid`.
pub fn trim_range(s: &str) -> &str {
    let s = s.trim();
    let s = s
        .strip_prefix('[')
        .and_then(|inner| inner.strip_suffix(']'))
        .unwrap_or(s);
    match s.find(" +/-") {
        Some(idx) => &s[..idx],
        None => s,
    }
}
