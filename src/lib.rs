//! json-lws: a JSON Lightweight Schema validator.
//!
//! [`lws`] holds the bidirectional validation core; [`loader`] turns files
//! or strings into the core's input types; [`env`] and [`cli`] wire the
//! core up for the `jlws` binary.

pub mod cli;
pub mod env;
pub mod errors;
pub mod loader;
pub mod lws;
