//! The JSON Lightweight Schema (LWS) validation core: the bidirectional
//! walk over a schema tree and a data tree, and the tree-shaped report
//! that names every key and value mismatch.
//!
//! The core is strictly single-threaded and synchronous — no suspension
//! points, no shared mutable state. A second `validate` call may run
//! concurrently on another thread as long as it validates disjoint trees.

pub mod kind;
pub mod report;
pub mod resolver;
pub mod rule;
pub mod schema;
pub mod walker;

use serde_json::Value;

use report::{render, RenderConfig, ValidationGraph};
use schema::SchemaTree;
use walker::{walk, Direction};

/// The full outcome of validating a data tree against a schema tree in
/// both directions: per-direction error counts and the joined, pretty
/// printed report.
pub struct ValidationOutcome {
    pub schema_key_errors: usize,
    pub schema_value_errors: usize,
    pub data_key_errors: usize,
    pub data_value_errors: usize,
    pub report: String,
}

/// Validate `data` against `schema` in both directions and produce the
/// joined report. This is the crate's single validation entry point.
pub fn validate(schema: &SchemaTree, data: &Value) -> ValidationOutcome {
    validate_with_config(schema, data, &RenderConfig::default())
}

/// As `validate`, but with an explicit rendering configuration (trim
/// length, indent unit) instead of the defaults.
pub fn validate_with_config(schema: &SchemaTree, data: &Value, config: &RenderConfig) -> ValidationOutcome {
    let schema_graph: ValidationGraph = walk(Direction::SchemaDriven, schema, data);
    let data_graph: ValidationGraph = walk(Direction::DataDriven, schema, data);

    let schema_rendered = render(&schema_graph, &schema.root_name, config);
    let data_rendered = render(&data_graph, &schema.root_name, config);

    let report = format!(
        "\n> SCHEMA VALIDATION\n\n{}\n\n\n> DATA VALIDATION\n\n{}\n",
        schema_rendered.body, data_rendered.body
    );

    ValidationOutcome {
        schema_key_errors: schema_rendered.key_errors,
        schema_value_errors: schema_rendered.value_errors,
        data_key_errors: data_rendered.key_errors,
        data_value_errors: data_rendered.value_errors,
        report,
    }
}
