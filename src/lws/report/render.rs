//! Report Renderer: folds redundant error markers per edge, flattens the
//! graph via DFS into a depth-annotated sequence, formats each entry with
//! an indent-per-depth convention, counts errors, and emits a single
//! string.

use indexmap::IndexMap;
use serde_json::Value;

use crate::lws::report::graph::{EdgeLabel, ValidationGraph, KEY_ERR_STR, VAL_ERR_STR};

/// Rendering parameters: the indent unit and the per-field trim length.
/// Both are exposed as `EnvConfig` overrides (`LWS_INDENT`, `LWS_TRIM_LEN`)
/// so they can be tuned without a code change.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub indent: String,
    pub trim_len: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { indent: " -- ".to_string(), trim_len: 75 }
    }
}

/// The outcome of rendering one direction's graph: error counts plus the
/// tree body text (header + blank line + flattened tree).
pub struct Rendered {
    pub key_errors: usize,
    pub value_errors: usize,
    pub body: String,
}

/// Group a parent's child entries by child name and fold each group down
/// to a single representative: all-`KeyErr` folds to one `KeyErr`,
/// all-`ValErr` folds to one `ValErr`, otherwise every non-error label
/// survives (a successful match makes the error redundant).
fn fold(children: &[(String, EdgeLabel)]) -> Vec<(String, EdgeLabel)> {
    let mut groups: IndexMap<&str, Vec<&EdgeLabel>> = IndexMap::new();
    for (name, label) in children {
        groups.entry(name.as_str()).or_default().push(label);
    }

    let mut folded = Vec::new();
    for (name, labels) in groups {
        if labels.iter().all(|l| matches!(l, EdgeLabel::KeyErr)) {
            folded.push((name.to_string(), EdgeLabel::KeyErr));
        } else if labels.iter().all(|l| matches!(l, EdgeLabel::ValErr)) {
            folded.push((name.to_string(), EdgeLabel::ValErr));
        } else {
            for label in labels {
                if !matches!(label, EdgeLabel::KeyErr | EdgeLabel::ValErr) {
                    folded.push((name.to_string(), clone_label(label)));
                }
            }
        }
    }
    folded
}

fn clone_label(label: &EdgeLabel) -> EdgeLabel {
    match label {
        EdgeLabel::Key(s) => EdgeLabel::Key(s.clone()),
        EdgeLabel::Value(v) => EdgeLabel::Value(v.clone()),
        EdgeLabel::SchemaRef(s) => EdgeLabel::SchemaRef(s.clone()),
        EdgeLabel::KeyErr => EdgeLabel::KeyErr,
        EdgeLabel::ValErr => EdgeLabel::ValErr,
    }
}

/// DFS over the graph starting at `key`, pushing `(name, label, depth)`
/// triples into `out`. A node only recurses further when its label is a
/// `Key` (the only label that doubles as the next parent id) *and* the
/// graph actually has children recorded under that id; every other label
/// is necessarily terminal.
fn visit(
    graph: &ValidationGraph,
    key: (String, String),
    self_name: String,
    self_label: EdgeLabel,
    depth: usize,
    out: &mut Vec<(String, EdgeLabel, usize)>,
) {
    out.push((self_name, self_label, depth));
    let Some(children) = graph.children(&key) else { return };

    for (child_name, label) in fold(children) {
        match &label {
            EdgeLabel::Key(matched) => {
                let next_key = (child_name.clone(), matched.clone());
                visit(graph, next_key, child_name, label, depth + 1, out);
            }
            _ => out.push((child_name, label, depth + 1)),
        }
    }
}

fn trim(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len).collect();
        format!("{truncated}...")
    } else {
        s.to_string()
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(_) | Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}

fn display_label(label: &EdgeLabel) -> String {
    match label {
        EdgeLabel::Key(s) => s.clone(),
        EdgeLabel::Value(v) => display_value(v),
        EdgeLabel::SchemaRef(s) => s.clone(),
        EdgeLabel::KeyErr => KEY_ERR_STR.to_string(),
        EdgeLabel::ValErr => VAL_ERR_STR.to_string(),
    }
}

fn node_to_str(name: &str, label: &EdgeLabel, trim_len: usize) -> String {
    format!("{}: {}", trim(name, trim_len), trim(&display_label(label), trim_len))
}

fn format_node(name: &str, label: &EdgeLabel, depth: usize, config: &RenderConfig) -> String {
    let space = if depth >= 1 {
        " ".repeat((config.indent.chars().count() + 1) * (depth - 1))
    } else {
        String::new()
    };
    let leader = if depth > 0 { format!("|{}", config.indent) } else { String::new() };
    format!("{space}{leader}{}", node_to_str(name, label, config.trim_len))
}

/// Render one direction's graph into a `Rendered` report.
pub fn render(graph: &ValidationGraph, root_name: &str, config: &RenderConfig) -> Rendered {
    let mut flat = Vec::new();
    let root_key = (root_name.to_string(), root_name.to_string());
    visit(
        graph,
        root_key,
        root_name.to_string(),
        EdgeLabel::Key(root_name.to_string()),
        0,
        &mut flat,
    );

    let key_errors = flat.iter().filter(|(_, l, _)| matches!(l, EdgeLabel::KeyErr)).count();
    let value_errors = flat.iter().filter(|(_, l, _)| matches!(l, EdgeLabel::ValErr)).count();

    let header = format!("Key Errors:\t{key_errors}\nValue Errors:\t{value_errors}");
    let lines: Vec<String> = flat
        .iter()
        .map(|(name, label, depth)| format_node(name, label, *depth, config))
        .collect();

    Rendered { key_errors, value_errors, body: format!("{header}\n\n{}", lines.join("\n")) }
}
