//! Coercion of raw cell text into a column's declared type

use crate::cell::FieldValue;
use crate::error::Result;
use crate::header::TypeTag;

/// Coerce a cell's raw text into `kind`
///
/// With `nullfill` on, empty text is [`FieldValue::Null`] whatever the
/// declared type. Otherwise:
///
/// - `int`/`integer`: the leading run of base-10 digits (after optional
///   whitespace and sign), so `"12px"` is `12` and `"3.9"` is `3`
/// - `number`: the whole trimmed text as a number (decimals, exponents,
///   `0x`/`0o`/`0b` literals, `Infinity`); empty text is `0`
/// - `array`: split on every comma, elements untrimmed
/// - `bool`/`boolean`: `true` only for a case-insensitive `"TRUE"`
/// - `json`: parsed JSON; malformed text is an error
/// - `string`: the raw text
///
/// Numeric text that does not parse yields [`FieldValue::NotANumber`]
/// rather than an error.
pub fn coerce(raw: &str, kind: TypeTag, nullfill: bool) -> Result<FieldValue> {
    if nullfill && raw.is_empty() {
        return Ok(FieldValue::Null);
    }

    let value = match kind {
        TypeTag::Int | TypeTag::Integer => leading_integer(raw),
        TypeTag::Number => parse_number(raw).map_or(FieldValue::NotANumber, FieldValue::Number),
        TypeTag::Array => FieldValue::Array(raw.split(',').map(str::to_string).collect()),
        TypeTag::Bool | TypeTag::Boolean => FieldValue::Boolean(raw.eq_ignore_ascii_case("TRUE")),
        TypeTag::Json => FieldValue::Json(serde_json::from_str(raw)?),
        TypeTag::String => FieldValue::String(raw.to_string()),
    };

    Ok(value)
}

/// Parse the leading integer of `raw`
///
/// Digit runs too long for `i64` fall back to a float.
fn leading_integer(raw: &str) -> FieldValue {
    let text = raw.trim_start();
    let sign_len = usize::from(text.starts_with(|c: char| c == '+' || c == '-'));
    let digits_len = text[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len() - sign_len);

    if digits_len == 0 {
        return FieldValue::NotANumber;
    }

    let candidate = &text[..sign_len + digits_len];
    match candidate.parse::<i64>() {
        Ok(n) => FieldValue::Integer(n),
        Err(_) => candidate
            .parse::<f64>()
            .map_or(FieldValue::NotANumber, FieldValue::Number),
    }
}

/// Parse the whole of `raw` as a number
fn parse_number(raw: &str) -> Option<f64> {
    let text = raw.trim();
    if text.is_empty() {
        return Some(0.0);
    }

    if let Some(n) = parse_radix_literal(text) {
        return Some(n);
    }

    let (sign, body) = match text.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, text.strip_prefix('+').unwrap_or(text)),
    };

    if body == "Infinity" {
        return Some(sign * f64::INFINITY);
    }

    // Rust's float grammar also takes "inf"/"nan" words; only digits,
    // a decimal point and an exponent are allowed here.
    let is_decimal = body.starts_with(|c: char| c.is_ascii_digit() || c == '.')
        && body.bytes().any(|b| b.is_ascii_digit())
        && body
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !is_decimal {
        return None;
    }

    body.parse::<f64>().ok().map(|n| sign * n)
}

/// Parse an unsigned `0x`, `0o` or `0b` literal
fn parse_radix_literal(text: &str) -> Option<f64> {
    let radix = match text.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };

    let digits = &text[2..];
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }

    // Accumulated as a float so literals wider than 64 bits still parse
    Some(digits.chars().fold(0.0, |acc, c| {
        acc * f64::from(radix) + f64::from(c.to_digit(radix).unwrap_or(0))
    }))
}
