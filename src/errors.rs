//! Runtime errors: unparseable schema input, unparseable data JSON, and
//! malformed schema descriptors. These are distinct from validation
//! outcomes — they propagate out of the loaders, never surfacing as
//! `KeyErr`/`ValErr` in a report.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LwsError {
    #[error("failed to read schema file {path}: {source}")]
    SchemaIo { path: String, #[source] source: std::io::Error },

    #[error("failed to parse schema document: {0}")]
    SchemaParse(#[from] serde_json::Error),

    #[error("schema key descriptor must have 2-4 elements, got {0}")]
    SchemaKeyArity(usize),

    #[error("schema value descriptor must have 2-3 elements, got {0}")]
    SchemaValueArity(usize),

    #[error("schema descriptor name must be a string")]
    SchemaDescriptorName,

    #[error("schema descriptor type must be a string")]
    SchemaDescriptorType,

    #[error("invalid regex in schema descriptor: {0}")]
    SchemaRegex(#[from] regex::Error),

    #[error("failed to read data file {path}: {source}")]
    DataIo { path: String, #[source] source: std::io::Error },

    #[error("failed to parse data JSON: {0}")]
    DataParse(serde_json::Error),
}
