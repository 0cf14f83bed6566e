//! Report Graph Builder: a per-parent adjacency list keyed by the
//! `(parent-schema-name, parent-data-name)` pair (or, for the data-driven
//! walk, `(parent-data-name, parent-schema-name)` — the walker always
//! supplies the pair in "driver, follower" order), with two sentinel
//! markers for missing-key and bad-value outcomes. Insertion order within
//! each parent's child list is preserved; the renderer folds duplicates.

use indexmap::IndexMap;
use serde_json::Value;

/// The literal rendered tokens for the two error sentinels.
pub const KEY_ERR_STR: &str = "*** Key error";
pub const VAL_ERR_STR: &str = "*** Value error";

/// A child edge's label. Two sentinel variants (`KeyErr`, `ValErr`) are
/// distinct identities, never strings, so folding never confuses a
/// genuinely-named key with an error marker.
#[derive(Debug, Clone)]
pub enum EdgeLabel {
    /// A matched key string. This is the only label variant that doubles
    /// as a recursion key: the renderer looks up `(child_name, key)` as
    /// the next parent id when walking deeper.
    Key(String),
    /// A matched leaf data value (schema-driven success).
    Value(Value),
    /// A rendered schema value descriptor — the data-driven walk's
    /// successful-leaf label (see `walker::walk_data_driven`).
    SchemaRef(String),
    /// A schema-mandated key produced no matches in the data, or a data
    /// key matched no schema descriptor.
    KeyErr,
    /// A leaf value failed type or rule matching.
    ValErr,
}

/// `(parent-driver-name, parent-follower-name) → ordered child edges`.
#[derive(Debug, Default)]
pub struct ValidationGraph {
    edges: IndexMap<(String, String), Vec<(String, EdgeLabel)>>,
}

impl ValidationGraph {
    pub fn new() -> Self {
        Self { edges: IndexMap::new() }
    }

    pub fn record(&mut self, parent: (String, String), child_name: String, label: EdgeLabel) {
        self.edges.entry(parent).or_default().push((child_name, label));
    }

    pub fn children(&self, parent: &(String, String)) -> Option<&Vec<(String, EdgeLabel)>> {
        self.edges.get(parent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_preserve_insertion_order() {
        let mut graph = ValidationGraph::new();
        let parent = ("root".to_string(), "root".to_string());
        graph.record(parent.clone(), "a".into(), EdgeLabel::KeyErr);
        graph.record(parent.clone(), "b".into(), EdgeLabel::ValErr);
        let children = graph.children(&parent).unwrap();
        assert_eq!(children[0].0, "a");
        assert_eq!(children[1].0, "b");
    }
}
