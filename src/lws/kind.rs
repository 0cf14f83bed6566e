//! Type Classifier: maps schema-declared type references and runtime JSON
//! values into the closed classification domain used everywhere else in
//! the validator.

use serde::Deserialize;
use serde_json::Value;

/// A classified JSON-shaped kind. `Unknown` covers schema type references
/// that don't map to anything the validator understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Text,
    Num,
    Bool,
    Null,
    Dict,
    List,
    Unknown,
}

impl Kind {
    /// Classify a schema-declared type reference (as decoded from the
    /// schema document's `type` slot).
    pub fn classify_type(name: &str) -> Kind {
        // Boolean must be tested before numeric: many schema authors write
        // "bool" as a kind of number, and we want the narrower match to win.
        match name {
            "text" | "str" | "string" => Kind::Text,
            "bool" | "boolean" => Kind::Bool,
            "num" | "number" | "int" | "float" => Kind::Num,
            "dict" | "object" | "map" => Kind::Dict,
            "list" | "array" => Kind::List,
            "null" => Kind::Null,
            _ => Kind::Unknown,
        }
    }

    /// Classify a runtime JSON value.
    pub fn classify_value(value: &Value) -> Kind {
        match value {
            Value::String(_) => Kind::Text,
            Value::Bool(_) => Kind::Bool,
            Value::Number(_) => Kind::Num,
            Value::Object(_) => Kind::Dict,
            Value::Array(_) => Kind::List,
            Value::Null => Kind::Null,
        }
    }

    /// Whether a schema-declared type and a runtime value's classified
    /// kind agree. Text subsumes both byte-strings and Unicode strings
    /// transparently, which in Rust's `serde_json::Value` is moot (there
    /// is only one string variant), but the check stays explicit so the
    /// leaf-matching contract reads the same regardless of representation.
    pub fn matches_value(schema_kind: Kind, value: &Value) -> bool {
        if schema_kind == Kind::Text {
            return Kind::classify_value(value) == Kind::Text;
        }
        schema_kind == Kind::classify_value(value)
    }
}
