//! Coercions render functions apply to resolved values.

use serde_json::Value;

/// Text form of a resolved value; `None` becomes the empty string.
pub fn display_string(v: Option<&Value>) -> String {
    match v {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(other) => other.to_string(),
    }
}

/// Loose truthiness: absent, `null`, `false`, `0`, `NaN` and `""` are false.
pub fn is_truthy(v: Option<&Value>) -> bool {
    match v {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => true,
    }
}

/// Numeric form: numbers as-is, numeric strings parsed.
pub fn as_f64(v: Option<&Value>) -> Option<f64> {
    match v? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Non-empty text form, or `None`.
pub fn non_empty_string(v: Option<&Value>) -> Option<String> {
    is_truthy(v).then(|| display_string(v))
}

#[cfg(test)]
#[path = "../../tests/unit/binding/scalar.rs"]
mod tests;
