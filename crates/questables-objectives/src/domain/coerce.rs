//! Scalar coercions for loosely-typed payload values.
//!
//! Request bodies arrive from browser forms, so numbers and booleans may be
//! sent either as JSON scalars or as their string spelling.

use serde_json::Value;
use uuid::Uuid;

/// Coerces a JSON number or numeric string into a finite `f64`.
pub(crate) fn finite_f64(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(raw) => raw.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    n.is_finite().then_some(n)
}

/// Coerces a JSON number or numeric string into an `i32`. Fractional and
/// out-of-range values are rejected rather than truncated.
pub(crate) fn integer_i32(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .and_then(|i| i32::try_from(i).ok())
            .or_else(|| n.as_f64().and_then(integral_i32)),
        Value::String(raw) => {
            let raw = raw.trim();
            raw.parse::<i32>()
                .ok()
                .or_else(|| raw.parse::<f64>().ok().and_then(integral_i32))
        }
        _ => None,
    }
}

#[allow(clippy::float_cmp, clippy::cast_possible_truncation)]
fn integral_i32(n: f64) -> Option<i32> {
    let in_range = n >= f64::from(i32::MIN) && n <= f64::from(i32::MAX);
    (n.is_finite() && n.trunc() == n && in_range).then(|| n as i32)
}

/// Coerces a JSON boolean or the exact strings `"true"` / `"false"`.
pub(crate) fn boolean(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(raw) if raw == "true" => Some(true),
        Value::String(raw) if raw == "false" => Some(false),
        _ => None,
    }
}

/// Parses a record identifier. Identifiers are UUID strings.
pub(crate) fn identifier(value: &Value) -> Option<Uuid> {
    let raw = value.as_str()?.trim();
    if raw.is_empty() {
        return None;
    }
    Uuid::parse_str(raw).ok()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_finite_f64_accepts_numbers_and_numeric_strings() {
        assert_eq!(finite_f64(&json!(123.45)), Some(123.45));
        assert_eq!(finite_f64(&json!(" 678.9 ")), Some(678.9));
        assert_eq!(finite_f64(&json!(-3)), Some(-3.0));
    }

    #[test]
    fn test_finite_f64_rejects_non_finite_and_non_numeric() {
        assert_eq!(finite_f64(&json!("NaN")), None);
        assert_eq!(finite_f64(&json!("inf")), None);
        assert_eq!(finite_f64(&json!("")), None);
        assert_eq!(finite_f64(&json!(true)), None);
        assert_eq!(finite_f64(&json!({ "x": 1 })), None);
    }

    #[test]
    fn test_integer_i32_accepts_integral_values() {
        assert_eq!(integer_i32(&json!(42)), Some(42));
        assert_eq!(integer_i32(&json!("42")), Some(42));
        assert_eq!(integer_i32(&json!(" -7 ")), Some(-7));
        assert_eq!(integer_i32(&json!(4.0)), Some(4));
        assert_eq!(integer_i32(&json!("4.0")), Some(4));
    }

    #[test]
    fn test_integer_i32_rejects_fractional_and_out_of_range() {
        assert_eq!(integer_i32(&json!(4.5)), None);
        assert_eq!(integer_i32(&json!("4.5")), None);
        assert_eq!(integer_i32(&json!(i64::from(i32::MAX) + 1)), None);
        assert_eq!(integer_i32(&json!("first")), None);
        assert_eq!(integer_i32(&json!(null)), None);
    }

    #[test]
    fn test_boolean_is_case_sensitive() {
        assert_eq!(boolean(&json!(true)), Some(true));
        assert_eq!(boolean(&json!("false")), Some(false));
        assert_eq!(boolean(&json!("True")), None);
        assert_eq!(boolean(&json!("yes")), None);
        assert_eq!(boolean(&json!(1)), None);
    }

    #[test]
    fn test_identifier_requires_uuid_string() {
        let id = Uuid::new_v4();
        assert_eq!(identifier(&json!(id.to_string())), Some(id));
        assert_eq!(identifier(&json!("")), None);
        assert_eq!(identifier(&json!("burg-12")), None);
        assert_eq!(identifier(&json!(12)), None);
    }
}
