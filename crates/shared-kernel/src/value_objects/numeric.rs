// crates/shared-kernel/src/value_objects/numeric.rs
//! String-to-number coercion.
//!
//! Accepts the same literal forms a loosely-typed numeric conversion would:
//! surrounding whitespace is ignored, blank text is zero, `Infinity` is
//! spelled out, and `0x`/`0o`/`0b` integers are understood. Anything else
//! that is not a plain decimal literal is rejected.

const INFINITY_LITERAL: &str = "Infinity";

/// Whitespace and line terminators stripped around a numeric literal.
fn is_coercion_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'..='\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Parse `text` as a number, or return `None` if it is not coercible.
///
/// The result is never NaN.
pub fn parse_numeric(text: &str) -> Option<f64> {
    let s = text.trim_matches(is_coercion_whitespace);
    if s.is_empty() {
        return Some(0.0);
    }
    parse_infinity(s)
        .or_else(|| parse_radix_integer(s))
        .or_else(|| parse_decimal(s))
}

fn parse_infinity(s: &str) -> Option<f64> {
    match s.strip_prefix('-') {
        Some(rest) if rest == INFINITY_LITERAL => Some(f64::NEG_INFINITY),
        _ => (s.strip_prefix('+').unwrap_or(s) == INFINITY_LITERAL).then_some(f64::INFINITY),
    }
}

fn parse_radix_integer(s: &str) -> Option<f64> {
    const PREFIXES: &[(&[&str], u32)] = &[(&["0x", "0X"], 4), (&["0o", "0O"], 3), (&["0b", "0B"], 1)];
    for (prefixes, bits_per_digit) in PREFIXES {
        for prefix in *prefixes {
            if let Some(digits) = s.strip_prefix(prefix) {
                return accumulate_digits(digits, *bits_per_digit);
            }
        }
    }
    None
}

/// Digits past this many significant bits only feed the sticky bit.
const MANTISSA_BITS: u32 = 120;

// Power-of-two radixes only. The leading bits are kept exactly in a u128 and
// every dropped digit is folded into the lowest bit, so the single u128 -> f64
// conversion rounds to nearest like a full-width parse would.
fn accumulate_digits(digits: &str, bits_per_digit: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    let radix = 1_u32 << bits_per_digit;
    let mut mantissa: u128 = 0;
    let mut shift: u32 = 0;
    let mut sticky = false;
    for c in digits.chars() {
        let d = c.to_digit(radix)?;
        if mantissa >> MANTISSA_BITS == 0 {
            mantissa = (mantissa << bits_per_digit) | u128::from(d);
        } else {
            shift = shift.saturating_add(bits_per_digit);
            sticky |= d != 0;
        }
    }
    #[allow(clippy::cast_precision_loss)]
    let rounded = (mantissa | u128::from(sticky)) as f64;
    Some(scale_by_power_of_two(rounded, shift))
}

fn scale_by_power_of_two(mut value: f64, mut exponent: u32) -> f64 {
    const MAX_STEP: u32 = 1023;
    while exponent > 0 && value.is_finite() {
        let step = exponent.min(MAX_STEP);
        value *= f64::from_bits(u64::from(1023 + step) << 52);
        exponent -= step;
    }
    value
}

fn parse_decimal(s: &str) -> Option<f64> {
    if !is_decimal_literal(s) {
        return None;
    }
    s.parse::<f64>().ok()
}

/// `[+-]? (digits [. digits?] | . digits) ([eE] [+-]? digits)?`
fn is_decimal_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_digits = count_digits(&bytes[i..]);
    i += int_digits;
    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        frac_digits = count_digits(&bytes[i..]);
        i += frac_digits;
    }
    if int_digits == 0 && frac_digits == 0 {
        return false;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let exp_digits = count_digits(&bytes[i..]);
        if exp_digits == 0 {
            return false;
        }
        i += exp_digits;
    }
    i == bytes.len()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
