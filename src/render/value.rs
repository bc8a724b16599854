//! Conversions from cell values to text

use serde_json::{Number, Value};

/// Text of a value the truncator is allowed to shorten.
///
/// Only strings and numbers qualify; everything else returns `None` and is
/// passed through by renderers untouched.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(number_text(n)),
        _ => None,
    }
}

/// Text of any cell, used by filtering and the text/HTML writers
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => number_text(n),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Number text in the form a script engine prints it.
///
/// Whole floats lose `.0`. Magnitudes below 1e-6 or from 1e21 up use
/// exponent form with a signed exponent (`1e-7`, `1.5e+21`).
pub fn number_text(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }

    match n.as_f64() {
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) if f.is_finite() && (f.abs() < 1e-6 || f.abs() >= 1e21) => exponent_text(f),
        Some(f) if f.is_finite() && f.fract() == 0.0 => format!("{:.0}", f),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

fn exponent_text(f: f64) -> String {
    let text = format!("{:e}", f);
    match text.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => text,
    }
}
