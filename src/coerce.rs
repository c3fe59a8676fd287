//! Conversion of raw strings into typed values.

use crate::model::NumberParsing;

/// Parse `raw` as a number, or `None` when it is not one.
pub(crate) fn parse_number(raw: &str, mode: NumberParsing) -> Option<f64> {
    match mode {
        NumberParsing::Loose => parse_loose(raw),
        NumberParsing::Strict => parse_decimal(raw).filter(|value| value.is_finite()),
    }
}

/// `"true"` / `"false"` in any letter case; nothing else.
pub(crate) fn parse_boolean(raw: &str) -> Option<bool> {
    if raw.eq_ignore_ascii_case("true") {
        Some(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn parse_loose(raw: &str) -> Option<f64> {
    let trimmed = raw.trim_matches(is_loose_whitespace);
    if trimmed.is_empty() {
        return Some(0.0);
    }

    match trimmed {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    if let Some(value) = parse_radix_integer(trimmed) {
        return Some(value);
    }

    parse_decimal(trimmed)
}

fn is_loose_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

fn parse_radix_integer(input: &str) -> Option<f64> {
    let bytes = input.as_bytes();
    if bytes.len() < 3 || bytes[0] != b'0' {
        return None;
    }

    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };

    input[2..].chars().try_fold(0f64, |acc, c| {
        c.to_digit(radix)
            .map(|digit| acc * f64::from(radix) + f64::from(digit))
    })
}

/// Decimal literal: `[+-]? (digits [. digits?] | . digits) ([eE] [+-]? digits)?`.
///
/// Checked by hand so that `inf`, `nan` and friends accepted by
/// `f64::from_str` are rejected.
fn parse_decimal(input: &str) -> Option<f64> {
    if !is_decimal_literal(input.as_bytes()) {
        return None;
    }
    input.parse::<f64>().ok()
}

fn is_decimal_literal(bytes: &[u8]) -> bool {
    let mut idx = 0usize;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        idx += 1;
    }

    let int_digits = count_digits(&bytes[idx..]);
    idx += int_digits;

    let mut frac_digits = 0usize;
    if bytes.get(idx) == Some(&b'.') {
        idx += 1;
        frac_digits = count_digits(&bytes[idx..]);
        idx += frac_digits;
    }

    if int_digits + frac_digits == 0 {
        return false;
    }

    if matches!(bytes.get(idx), Some(b'e' | b'E')) {
        idx += 1;
        if matches!(bytes.get(idx), Some(b'+' | b'-')) {
            idx += 1;
        }
        let exp_digits = count_digits(&bytes[idx..]);
        if exp_digits == 0 {
            return false;
        }
        idx += exp_digits;
    }

    idx == bytes.len()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|byte| byte.is_ascii_digit()).count()
}
