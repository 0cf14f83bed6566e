//! Data loader: reads the JSON document being validated from a file or
//! from its serialized text form.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::errors::LwsError;

/// Load a JSON data document from a file path.
pub fn load_data_file(path: impl AsRef<Path>) -> Result<Value, LwsError> {
    let path_ref = path.as_ref();
    let contents = fs::read_to_string(path_ref).map_err(|source| LwsError::DataIo {
        path: path_ref.display().to_string(),
        source,
    })?;
    load_data_str(&contents)
}

/// Parse a JSON data document from its serialized text form.
pub fn load_data_str(source: &str) -> Result<Value, LwsError> {
    serde_json::from_str(source).map_err(LwsError::DataParse)
}
