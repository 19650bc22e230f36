//! Reconciled field values
//!
//! [`DisplayField`] is what the user sees and what exports embed. It is
//! derived on every access and never stored.

use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Marker shown when neither source has a value for a label
pub const NO_VALUE: &str = "-";

/// A raw value from either data source, before formatting
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Convert a service value; `null` counts as absent
    ///
    /// Booleans, arrays and objects are kept in their JSON text form.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Number(n) => n.as_f64().map(FieldValue::Number),
            Value::String(s) => Some(FieldValue::Text(s.clone())),
            other => Some(FieldValue::Text(other.to_string())),
        }
    }

    /// Numbers get exactly two decimals, text passes through unchanged
    pub fn format(&self) -> String {
        match self {
            FieldValue::Number(n) => two_decimals(*n),
            FieldValue::Text(s) => s.clone(),
        }
    }
}

/// Fixed two-decimal formatting with halves rounded away from zero
///
/// Only values whose magnitude is an odd number of eighths sit exactly between
/// two hundredths; every other value is already rounded correctly by `{:.2}`.
fn two_decimals(n: f64) -> String {
    let magnitude = n.abs();
    let eighths = magnitude * 8.0;
    let is_tie = magnitude < 1e13 && eighths.fract() == 0.0 && eighths % 2.0 == 1.0;
    if !is_tie {
        return format!("{n:.2}");
    }

    let hundredths = (magnitude * 100.0).ceil() as u64;
    let sign = if n.is_sign_negative() { "-" } else { "" };
    format!("{sign}{}.{:02}", hundredths / 100, hundredths % 100)
}

/// One label/value line of the reconciled view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayField {
    pub label: String,
    pub value: String,
}

impl DisplayField {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for DisplayField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}
