//! Schema tree data model and Schema Node Parser: decomposes schema keys
//! and schema values into `(kind, rule, quantifier)` triples (keys) or
//! `(kind, rule)` pairs (values), applying the documented defaults.

use crate::lws::kind::Kind;
use crate::lws::rule::Rule;

/// Cardinality constraint over the number of data keys that may match one
/// key descriptor at a given schema level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    /// No quantifier given.
    None,
    /// `?` — zero or one.
    Maybe,
    /// `+` — more than one match required, not "one or more"; see
    /// `resolver::quantifier_allows`.
    Plus,
    /// `*` — any number.
    Star,
}

impl Quantifier {
    pub fn parse(token: &str) -> Quantifier {
        match token {
            "?" => Quantifier::Maybe,
            "+" => Quantifier::Plus,
            "*" => Quantifier::Star,
            _ => Quantifier::None,
        }
    }
}

/// A schema-key descriptor: `(name, kind, rule, quantifier)`. `name` is a
/// human label used only in reports; it plays no role in matching.
#[derive(Debug, Clone)]
pub struct SchemaKey {
    pub name: String,
    pub kind: Kind,
    pub rule: Rule,
    pub quantifier: Quantifier,
}

impl SchemaKey {
    /// Build a key descriptor, applying the Schema Node Parser's
    /// defaulting rules: a missing rule defaults to `.*` for text kinds
    /// and accept-all otherwise; a missing quantifier defaults to `None`.
    pub fn new(name: impl Into<String>, kind: Kind, rule: Option<Rule>, quantifier: Option<Quantifier>) -> Self {
        Self {
            name: name.into(),
            kind,
            rule: rule.unwrap_or_else(|| Rule::default_for(kind)),
            quantifier: quantifier.unwrap_or(Quantifier::None),
        }
    }
}

/// A schema-value descriptor: `(name, kind, rule)`.
#[derive(Debug, Clone)]
pub struct SchemaValue {
    pub name: String,
    pub kind: Kind,
    pub rule: Rule,
}

impl SchemaValue {
    pub fn new(name: impl Into<String>, kind: Kind, rule: Option<Rule>) -> Self {
        Self {
            name: name.into(),
            kind,
            rule: rule.unwrap_or_else(|| Rule::default_for(kind)),
        }
    }
}

/// A node in the schema tree: either an interior node (a list of
/// key-descriptor → sub-tree entries, in document order) or a leaf
/// (a value descriptor).
///
/// Interior children are stored as an ordered `Vec` rather than a hash map
/// keyed by `SchemaKey`: `SchemaKey::rule` may hold a predicate or a
/// compiled regex, neither of which is hashable, and nothing in the
/// validator ever looks a schema child up by key — the Key Resolver always
/// scans every descriptor at a level. A `Vec` gives the stable,
/// document-order enumeration the renderer relies on for free.
#[derive(Debug, Clone)]
pub enum SchemaNode {
    Interior(Vec<(SchemaKey, SchemaNode)>),
    Leaf(SchemaValue),
}

impl SchemaNode {
    pub fn interior(entries: Vec<(SchemaKey, SchemaNode)>) -> Self {
        SchemaNode::Interior(entries)
    }

    pub fn leaf(value: SchemaValue) -> Self {
        SchemaNode::Leaf(value)
    }

    pub fn as_interior(&self) -> Option<&[(SchemaKey, SchemaNode)]> {
        match self {
            SchemaNode::Interior(entries) => Some(entries),
            SchemaNode::Leaf(_) => None,
        }
    }
}

/// A schema tree wrapped under a synthetic root `(name="root", kind=Text)`.
/// This makes recursion over the real schema and the real data uniform:
/// both start from a single named entry point.
#[derive(Debug, Clone)]
pub struct SchemaTree {
    pub root_name: String,
    pub root: SchemaNode,
}

impl SchemaTree {
    pub fn wrap(root_children: Vec<(SchemaKey, SchemaNode)>) -> Self {
        Self {
            root_name: "root".to_string(),
            root: SchemaNode::Interior(root_children),
        }
    }
}
