//! Schema loader: decodes a serialized schema document into the core's
//! `SchemaTree` using a `serde`-deserializable JSON shape whose slots
//! mirror a schema descriptor's fields directly: a key descriptor is a
//! JSON array of 2-4 elements `[name, type, rule?, quantifier?]`, a value
//! descriptor an array of 2-3 elements `[name, type, rule?]`.

use std::fs;
use std::path::Path;

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use crate::errors::LwsError;
use crate::lws::kind::Kind;
use crate::lws::rule::Rule;
use crate::lws::schema::{Quantifier, SchemaKey, SchemaNode, SchemaTree, SchemaValue};

/// One entry of an interior schema node: a key descriptor paired with its
/// sub-tree or leaf value.
#[derive(Debug, Deserialize)]
struct RawEntry {
    key: Vec<Value>,
    node: RawNode,
}

/// A schema node as decoded straight from JSON: either a list of entries
/// (interior) or a bare descriptor array (leaf). `serde`'s untagged
/// matching disambiguates on shape — an array of objects vs. an array of
/// scalars — so the wire format never needs an explicit tag.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawNode {
    Interior(Vec<RawEntry>),
    Leaf(Vec<Value>),
}

/// Load and parse a schema document from a file path.
pub fn load_schema_file(path: impl AsRef<Path>) -> Result<SchemaTree, LwsError> {
    let path_ref = path.as_ref();
    let contents = fs::read_to_string(path_ref).map_err(|source| LwsError::SchemaIo {
        path: path_ref.display().to_string(),
        source,
    })?;
    load_schema_str(&contents)
}

/// Parse a schema document from its serialized text form.
pub fn load_schema_str(source: &str) -> Result<SchemaTree, LwsError> {
    let entries: Vec<RawEntry> = serde_json::from_str(source)?;
    let root = entries.into_iter().map(decode_entry).collect::<Result<Vec<_>, _>>()?;
    Ok(SchemaTree::wrap(root))
}

fn decode_entry(entry: RawEntry) -> Result<(SchemaKey, SchemaNode), LwsError> {
    let key = decode_key(entry.key)?;
    let node = decode_node(entry.node)?;
    Ok((key, node))
}

fn decode_node(node: RawNode) -> Result<SchemaNode, LwsError> {
    match node {
        RawNode::Interior(entries) => {
            let decoded = entries.into_iter().map(decode_entry).collect::<Result<Vec<_>, _>>()?;
            Ok(SchemaNode::Interior(decoded))
        }
        RawNode::Leaf(slots) => Ok(SchemaNode::Leaf(decode_value(slots)?)),
    }
}

fn decode_key(slots: Vec<Value>) -> Result<SchemaKey, LwsError> {
    if slots.len() < 2 || slots.len() > 4 {
        return Err(LwsError::SchemaKeyArity(slots.len()));
    }
    let name = as_string(&slots[0])?;
    let kind = Kind::classify_type(&as_type_string(&slots[1])?);
    let rule = slots.get(2).map(|v| decode_rule(kind, v)).transpose()?;
    let quantifier = slots
        .get(3)
        .map(as_string)
        .transpose()?
        .map(|s| Quantifier::parse(&s));
    Ok(SchemaKey::new(name, kind, rule, quantifier))
}

fn decode_value(slots: Vec<Value>) -> Result<SchemaValue, LwsError> {
    if slots.len() < 2 || slots.len() > 3 {
        return Err(LwsError::SchemaValueArity(slots.len()));
    }
    let name = as_string(&slots[0])?;
    let kind = Kind::classify_type(&as_type_string(&slots[1])?);
    let rule = slots.get(2).map(|v| decode_rule(kind, v)).transpose()?;
    Ok(SchemaValue::new(name, kind, rule))
}

fn decode_rule(kind: Kind, raw: &Value) -> Result<Rule, LwsError> {
    match (kind, raw) {
        (Kind::Text, Value::String(pattern)) => Ok(Rule::Regex(Regex::new(&format!("^(?:{pattern})"))?)),
        (_, Value::Null) => Ok(Rule::None),
        _ => Ok(Rule::Literal(raw.clone())),
    }
}

fn as_string(value: &Value) -> Result<String, LwsError> {
    value.as_str().map(str::to_string).ok_or(LwsError::SchemaDescriptorName)
}

fn as_type_string(value: &Value) -> Result<String, LwsError> {
    value.as_str().map(str::to_string).ok_or(LwsError::SchemaDescriptorType)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_nested_schema_with_defaults() {
        let source = r#"
        [
            {
                "key": ["ticker", "text", "[A-Z]+", "+"],
                "node": ["price", "num"]
            }
        ]
        "#;
        let tree = load_schema_str(source).unwrap();
        let entries = tree.root.as_interior().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].0.name, "ticker");
        assert!(matches!(entries[0].1, SchemaNode::Leaf(_)));
    }

    #[test]
    fn rejects_malformed_key_arity() {
        let source = r#"[{"key": ["only_one"], "node": ["v", "text"]}]"#;
        assert!(matches!(load_schema_str(source), Err(LwsError::SchemaKeyArity(1))));
    }

    #[test]
    fn rejects_non_string_type_slot() {
        let source = r#"[{"key": ["ticker", 1], "node": ["v", "text"]}]"#;
        assert!(matches!(load_schema_str(source), Err(LwsError::SchemaDescriptorType)));
    }

    #[test]
    fn decodes_interior_nodes() {
        let source = r#"
        [
            {
                "key": ["item", "text"],
                "node": [
                    {"key": ["name", "text"], "node": ["v", "text"]}
                ]
            }
        ]
        "#;
        let tree = load_schema_str(source).unwrap();
        let entries = tree.root.as_interior().unwrap();
        assert!(matches!(entries[0].1, SchemaNode::Interior(_)));
    }
}
