//! Calculation service payload helpers
//!
//! The service speaks flat JSON objects. A calculation answers either with a
//! result object or with `{"error": "..."}`; a diagram endpoint answers with
//! a base64 JPEG under a kind-specific member.

use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use crate::domain::{KhioneError, Result};

/// Which pressure-enthalpy diagram to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagramKind {
    /// Standard cycle diagram (`plot` endpoint)
    Primary,
    /// Cycle diagram with economizer (`plot_economizer` endpoint)
    Economizer,
}

impl DiagramKind {
    /// Response member carrying the base64 image
    pub fn response_field(&self) -> &'static str {
        match self {
            DiagramKind::Primary => "ph_diagram",
            DiagramKind::Economizer => "ph_diagram_economizer",
        }
    }

    /// Suffix appended to the model identifier to form the download name
    pub fn file_suffix(&self) -> &'static str {
        match self {
            DiagramKind::Primary => "_PH_Graph_Diagram.jpg",
            DiagramKind::Economizer => "_PH_Graph_Economizer.jpg",
        }
    }

    /// Human-readable name used in notices
    pub fn title(&self) -> &'static str {
        match self {
            DiagramKind::Primary => "PH-Graph Diagram",
            DiagramKind::Economizer => "PH-Graph Economizer",
        }
    }
}

impl fmt::Display for DiagramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for DiagramKind {
    type Err = KhioneError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "primary" | "diagram" | "ph" => Ok(DiagramKind::Primary),
            "economizer" => Ok(DiagramKind::Economizer),
            _ => Err(KhioneError::Validation(format!(
                "Unknown diagram kind: {s}. Use 'primary' or 'economizer'"
            ))),
        }
    }
}

/// Extract a structured service error, if the payload carries one
///
/// Any truthy `error` member counts: a non-empty string is returned as-is,
/// other truthy values in their JSON text form.
pub fn service_error(payload: &Map<String, Value>) -> Option<String> {
    match payload.get("error")? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        v @ (Value::Array(_) | Value::Object(_)) => Some(v.to_string()),
        _ => None,
    }
}

/// Base64 image for a diagram kind, if present and non-empty
pub fn diagram_payload(payload: &Map<String, Value>, kind: DiagramKind) -> Option<&str> {
    payload
        .get(kind.response_field())
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}
