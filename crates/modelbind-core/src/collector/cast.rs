//! Scalar coercion applied to single-segment writes.
//!
//! Follows loose scripting-language conversion: text is read through its
//! leading numeric prefix, floats truncate toward zero, and floats print
//! with 14 significant digits.

use crate::value::{Kind, Value};

/// Significant digits used when a float is turned into text.
const FLOAT_TEXT_DIGITS: usize = 14;

/// Coerce into a scalar kind; other kinds and non-scalar values pass through.
pub(super) fn cast_to(kind: &Kind, value: Value) -> Value {
    match kind {
        Kind::Bool => Value::Bool(truthy(&value)),
        Kind::Int => to_int(value),
        Kind::Float => to_float(value),
        Kind::String => to_text(value),
        _ => value,
    }
}

pub(super) fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(v) => *v,
        Value::Int(v) => *v != 0,
        Value::Float(v) => *v != 0.0,
        Value::Text(s) => !(s.is_empty() || s == "0"),
        Value::List(items) => !items.is_empty(),
        Value::Map(map) => !map.is_empty(),
        Value::Object(_) | Value::Nested(_) => true,
    }
}

fn to_int(value: Value) -> Value {
    match value {
        Value::Bool(v) => Value::Int(i64::from(v)),
        Value::Float(v) => Value::Int(truncate(v)),
        Value::Text(s) => Value::Int(match numeric_prefix(&s) {
            Numeric::Int(v) => v,
            Numeric::Float(v) => truncate(v),
        }),
        other => other,
    }
}

#[expect(clippy::cast_precision_loss)]
fn to_float(value: Value) -> Value {
    match value {
        Value::Bool(v) => Value::Float(f64::from(u8::from(v))),
        Value::Int(v) => Value::Float(v as f64),
        Value::Text(s) => Value::Float(match numeric_prefix(&s) {
            Numeric::Int(v) => v as f64,
            Numeric::Float(v) => v,
        }),
        other => other,
    }
}

fn to_text(value: Value) -> Value {
    match value {
        Value::Bool(v) => Value::text(if v { "1" } else { "" }),
        Value::Int(v) => Value::Text(v.to_string()),
        Value::Float(v) => Value::Text(format_float(v)),
        Value::Object(object) => match object.text() {
            Some(text) => Value::text(text),
            None => Value::Object(object),
        },
        other => other,
    }
}

// NaN becomes 0; out-of-range values saturate
#[expect(clippy::cast_possible_truncation)]
const fn truncate(value: f64) -> i64 {
    value as i64
}

///
/// Numeric
///

#[derive(Debug, PartialEq)]
enum Numeric {
    Int(i64),
    Float(f64),
}

/// Parse the leading numeric prefix of `text`, after leading whitespace.
/// No digits at all reads as `0`.
fn numeric_prefix(text: &str) -> Numeric {
    let trimmed = text.trim_start_matches([' ', '\t', '\n', '\r', '\x0b', '\x0c']);
    let bytes = trimmed.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    end += count_digits(&bytes[end..]);
    let mut digits = end - int_start;
    let mut is_float = false;

    if bytes.get(end) == Some(&b'.') {
        let fraction = count_digits(&bytes[end + 1..]);
        if digits > 0 || fraction > 0 {
            end += 1 + fraction;
            digits += fraction;
            is_float = true;
        }
    }

    if digits == 0 {
        return Numeric::Int(0);
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = count_digits(&bytes[exp..]);
        if exp_digits > 0 {
            end = exp + exp_digits;
            is_float = true;
        }
    }

    let literal = &trimmed[..end];
    if !is_float && let Ok(v) = literal.parse::<i64>() {
        return Numeric::Int(v);
    }

    Numeric::Float(literal.parse::<f64>().unwrap_or(0.0))
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Render a float the way loose string conversion does: 14 significant
/// digits, trailing zeros dropped, exponent form outside `1e-4..1e15`.
pub(super) fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "NAN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "INF" } else { "-INF" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let scientific = format!("{:.*e}", FLOAT_TEXT_DIGITS - 1, value.abs());
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let digits = digits.trim_end_matches('0');
    let sign = if value < 0.0 { "-" } else { "" };
    let point = exponent + 1;

    let exponent_form = point < -3 || usize::try_from(point).is_ok_and(|p| p > FLOAT_TEXT_DIGITS);
    if exponent_form {
        let (first, rest) = digits.split_at(1);
        let rest = if rest.is_empty() { "0" } else { rest };
        let exp_sign = if exponent < 0 { '-' } else { '+' };

        return format!("{sign}{first}.{rest}E{exp_sign}{}", exponent.unsigned_abs());
    }

    if point <= 0 {
        let zeros = "0".repeat(point.unsigned_abs() as usize);
        return format!("{sign}0.{zeros}{digits}");
    }

    let point = point.unsigned_abs() as usize;
    if digits.len() <= point {
        let zeros = "0".repeat(point - digits.len());
        format!("{sign}{digits}{zeros}")
    } else {
        let (whole, fraction) = digits.split_at(point);
        format!("{sign}{whole}.{fraction}")
    }
}
