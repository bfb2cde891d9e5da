//! Raw JSON value classification
//!
//! Maps a JSON value to a primitive kind, the parameter-type label used at
//! reference sites, and a serialization-safe literal default.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Primitive kind of a raw JSON value
///
/// The serialized labels follow the classic dynamic-language `gettype`
/// family, which is what downstream templates key on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrimitiveKind {
    #[serde(rename = "NULL")]
    Null,
    #[serde(rename = "boolean")]
    Boolean,
    #[serde(rename = "integer")]
    Integer,
    #[serde(rename = "double")]
    Double,
    #[serde(rename = "string")]
    String,
    #[serde(rename = "array")]
    Array,
    #[serde(rename = "object")]
    Object,
}

impl PrimitiveKind {
    /// The raw type label, as serialized to templates
    pub fn label(self) -> &'static str {
        match self {
            PrimitiveKind::Null => "NULL",
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Integer => "integer",
            PrimitiveKind::Double => "double",
            PrimitiveKind::String => "string",
            PrimitiveKind::Array => "array",
            PrimitiveKind::Object => "object",
        }
    }

    /// The type label used in a generated parameter signature
    ///
    /// Booleans, integers, and arrays map to their short forms, null maps to
    /// an empty string, everything else passes through unchanged.
    pub fn param_type(self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "bool",
            PrimitiveKind::Integer => "int",
            PrimitiveKind::Array => "array",
            PrimitiveKind::Null => "",
            other => other.label(),
        }
    }
}

impl std::fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Classify a raw JSON value into its primitive kind
pub fn classify(value: &Value) -> PrimitiveKind {
    match value {
        Value::Null => PrimitiveKind::Null,
        Value::Bool(_) => PrimitiveKind::Boolean,
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                PrimitiveKind::Integer
            } else {
                PrimitiveKind::Double
            }
        }
        Value::String(_) => PrimitiveKind::String,
        Value::Array(_) => PrimitiveKind::Array,
        Value::Object(_) => PrimitiveKind::Object,
    }
}

/// Build the serialization-safe literal default for a value
///
/// Arrays collapse to `"[]"`, strings are escaped so they can be embedded in
/// single quotes, numbers and bools are kept verbatim, everything else
/// becomes JSON null.
pub fn literal(value: &Value) -> Value {
    match value {
        Value::Array(_) => Value::String("[]".to_string()),
        Value::String(s) => Value::String(escape_single_quoted(s)),
        Value::Number(_) | Value::Bool(_) => value.clone(),
        _ => Value::Null,
    }
}

/// Escape backslashes and single quotes with a leading backslash
///
/// Backslashes are escaped first so the inserted escape characters are not
/// escaped again.
fn escape_single_quoted(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}
