//! External loaders: turn files or strings into the core's `SchemaTree`
//! and `serde_json::Value` inputs. Kept outside `lws` proper since the
//! core never touches a filesystem or a specific wire encoding.

pub mod data;
pub mod schema;

pub use data::{load_data_file, load_data_str};
pub use schema::{load_schema_file, load_schema_str};
