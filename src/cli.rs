//! CLI driver: loads a schema document and a data document, runs them
//! through the validation core, and prints the report. Exit status
//! reflects loader/runtime failure only — an ill-formed document being
//! validated is not a process failure, it is the report's subject
//! matter.

use std::path::PathBuf;

use log::debug;

use crate::env::EnvConfig;
use crate::errors::LwsError;
use crate::loader::{load_data_file, load_schema_file};
use crate::lws::validate_with_config;

pub fn run(schema: &PathBuf, data: &PathBuf, env: &EnvConfig) -> Result<String, LwsError> {
    let schema_path = schema.display().to_string();
    debug!("loading schema from {schema_path}");
    let schema_tree = load_schema_file(schema)?;

    let data_path = data.display().to_string();
    debug!("loading data from {data_path}");
    let data_value = load_data_file(data)?;

    debug!("running validation");
    let config = env.render_config();
    let outcome = validate_with_config(&schema_tree, &data_value, &config);

    debug!(
        "validation finished: schema_key_errors={} schema_value_errors={} data_key_errors={} data_value_errors={}",
        outcome.schema_key_errors, outcome.schema_value_errors, outcome.data_key_errors, outcome.data_value_errors
    );

    Ok(outcome.report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn run_produces_a_report_for_a_clean_document() {
        let schema = write_temp(r#"[{"key": ["ticker", "text", "[A-Z]+"], "node": ["price", "num"]}]"#);
        let data = write_temp(r#"{"BAC": 1.0}"#);

        let report = run(&schema.path().to_path_buf(), &data.path().to_path_buf(), &EnvConfig::default()).unwrap();
        assert!(report.contains("SCHEMA VALIDATION"));
        assert!(report.contains("DATA VALIDATION"));
    }

    #[test]
    fn run_surfaces_a_loader_error_for_missing_schema() {
        let data = write_temp(r#"{"BAC": 1.0}"#);
        let err = run(&PathBuf::from("/nonexistent/schema.json"), &data.path().to_path_buf(), &EnvConfig::default())
            .unwrap_err();
        assert!(matches!(err, LwsError::SchemaIo { .. }));
    }
}
