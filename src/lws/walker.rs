//! Validation Walker: a stack-driven traversal that advances a schema
//! path and a data path together, resolving matching keys via the Key
//! Resolver at each frame and either recursing (both sides are dicts) or
//! recording a leaf outcome.
//!
//! Both directions share a stack discipline, the same leaf-validation
//! call, and the same graph-edge bookkeeping; they differ only in which
//! side drives key resolution. `walk` is the single entry point,
//! parameterized by `Direction`, per the "unify the two near-duplicate
//! walkers" redesign flag — the two directions still need their own
//! inner loop because the driver side's shape differs (`Vec<(SchemaKey,
//! SchemaNode)>` vs `serde_json::Map`), but callers never choose between
//! two functions, only a `Direction` value.

use std::sync::LazyLock;

use serde_json::{Map, Value};

use crate::lws::kind::Kind;
use crate::lws::report::graph::{EdgeLabel, ValidationGraph};
use crate::lws::resolver::{resolve_data_keys, resolve_schema_keys};
use crate::lws::schema::{SchemaKey, SchemaNode, SchemaTree, SchemaValue};

static EMPTY_MAP: LazyLock<Map<String, Value>> = LazyLock::new(Map::new);
static EMPTY_SCHEMA_ENTRIES: LazyLock<Vec<(SchemaKey, SchemaNode)>> = LazyLock::new(Vec::new);

/// Which side of the pair drives key resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Walk schema-mandated keys, asking whether each appears in the data.
    SchemaDriven,
    /// Walk data keys, asking whether each is permitted by the schema.
    DataDriven,
}

/// A value's children as a dict, or an empty dict when the invariant that
/// a schema interior maps to a data dict is violated by the input. This
/// keeps the walker total instead of panicking on malformed input; a
/// value mismatch at this level surfaces downstream as key errors for
/// every expected child, which is the closest honest outcome to "the
/// data didn't have the shape the schema demanded".
fn as_object(value: &Value) -> &Map<String, Value> {
    value.as_object().unwrap_or(&EMPTY_MAP)
}

fn as_schema_entries(node: &SchemaNode) -> &[(SchemaKey, SchemaNode)] {
    node.as_interior().unwrap_or(&EMPTY_SCHEMA_ENTRIES)
}

/// Run a single direction of validation and return its graph.
pub fn walk(direction: Direction, schema: &SchemaTree, data: &Value) -> ValidationGraph {
    match direction {
        Direction::SchemaDriven => walk_schema_driven(schema, data),
        Direction::DataDriven => walk_data_driven(schema, data),
    }
}

struct SchemaFrame<'a> {
    parent_id: (String, String),
    schema_key: &'a SchemaKey,
    schema_node: &'a SchemaNode,
    data_sub: &'a Map<String, Value>,
}

fn walk_schema_driven(schema: &SchemaTree, data: &Value) -> ValidationGraph {
    let mut graph = ValidationGraph::new();
    let root_name = schema.root_name.clone();
    let root_data = as_object(data);

    let mut stack: Vec<SchemaFrame> = as_schema_entries(&schema.root)
        .iter()
        .map(|(key, node)| SchemaFrame {
            parent_id: (root_name.clone(), root_name.clone()),
            schema_key: key,
            schema_node: node,
            data_sub: root_data,
        })
        .collect();

    while let Some(frame) = stack.pop() {
        let d_keys = resolve_data_keys(frame.data_sub, frame.schema_key);
        if d_keys.is_empty() {
            graph.record(frame.parent_id, frame.schema_key.name.clone(), EdgeLabel::KeyErr);
            continue;
        }

        for d_key in d_keys {
            let d_val = &frame.data_sub[&d_key];
            match frame.schema_node {
                SchemaNode::Interior(children) => {
                    graph.record(
                        frame.parent_id.clone(),
                        frame.schema_key.name.clone(),
                        EdgeLabel::Key(d_key.clone()),
                    );
                    let next_data = as_object(d_val);
                    let next_parent = (frame.schema_key.name.clone(), d_key.clone());
                    for (child_key, child_node) in children {
                        stack.push(SchemaFrame {
                            parent_id: next_parent.clone(),
                            schema_key: child_key,
                            schema_node: child_node,
                            data_sub: next_data,
                        });
                    }
                }
                SchemaNode::Leaf(value_desc) => {
                    let label = if valid_data_val(value_desc, d_val) {
                        EdgeLabel::Value(d_val.clone())
                    } else {
                        EdgeLabel::ValErr
                    };
                    graph.record(frame.parent_id.clone(), frame.schema_key.name.clone(), label);
                }
            }
        }
    }

    graph
}

struct DataFrame<'a> {
    parent_id: (String, String),
    data_key: String,
    data_sub: &'a Map<String, Value>,
    schema_sub: &'a [(SchemaKey, SchemaNode)],
}

fn walk_data_driven(schema: &SchemaTree, data: &Value) -> ValidationGraph {
    let mut graph = ValidationGraph::new();
    let root_name = schema.root_name.clone();
    let root_data = as_object(data);
    let root_schema = as_schema_entries(&schema.root);

    let mut stack: Vec<DataFrame> = root_data
        .keys()
        .map(|data_key| DataFrame {
            parent_id: (root_name.clone(), root_name.clone()),
            data_key: data_key.clone(),
            data_sub: root_data,
            schema_sub: root_schema,
        })
        .collect();

    while let Some(frame) = stack.pop() {
        let matches = resolve_schema_keys(frame.schema_sub, &frame.data_key);
        if matches.is_empty() {
            graph.record(frame.parent_id, frame.data_key.clone(), EdgeLabel::KeyErr);
            continue;
        }

        let d_val = &frame.data_sub[&frame.data_key];
        for schema_key in matches {
            let schema_node = &frame
                .schema_sub
                .iter()
                .find(|(key, _)| std::ptr::eq(key, schema_key))
                .expect("schema_key came from this schema_sub")
                .1;

            if let Value::Object(_) = d_val {
                graph.record(
                    frame.parent_id.clone(),
                    frame.data_key.clone(),
                    EdgeLabel::Key(schema_key.name.clone()),
                );
                let next_parent = (frame.data_key.clone(), schema_key.name.clone());
                let next_data = as_object(d_val);
                let next_schema = as_schema_entries(schema_node);
                for next_key in next_data.keys() {
                    stack.push(DataFrame {
                        parent_id: next_parent.clone(),
                        data_key: next_key.clone(),
                        data_sub: next_data,
                        schema_sub: next_schema,
                    });
                }
            } else {
                // A successful data-driven leaf match records the schema
                // value descriptor, not the data value — asymmetric with
                // the schema-driven walk, which records the data value.
                let label = match schema_node {
                    SchemaNode::Leaf(value_desc) if valid_data_val(value_desc, d_val) => {
                        EdgeLabel::SchemaRef(describe_value_descriptor(value_desc))
                    }
                    _ => EdgeLabel::ValErr,
                };
                graph.record(frame.parent_id.clone(), frame.data_key.clone(), label);
            }
        }
    }

    graph
}

fn describe_value_descriptor(desc: &SchemaValue) -> String {
    format!("{}:{:?}", desc.name, desc.kind)
}

/// Verify a data value validates against a schema value descriptor:
/// `match_types(...) AND match_vals(...)`.
fn valid_data_val(schema_val: &SchemaValue, data_val: &Value) -> bool {
    Kind::matches_value(schema_val.kind, data_val) && crate::lws::rule::matches(data_val, &schema_val.rule)
}
