pub mod graph;
pub mod render;

pub use graph::{EdgeLabel, ValidationGraph, KEY_ERR_STR, VAL_ERR_STR};
pub use render::{render, RenderConfig, Rendered};
