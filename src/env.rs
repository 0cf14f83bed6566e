//! Environment variable configuration for jlws.
//!
//! This module provides a structured way to access environment variables
//! using the `envy` crate with serde deserialization.

use serde::Deserialize;

use crate::lws::report::RenderConfig;

/// Environment configuration for the application.
///
/// All fields are optional; missing or unparseable variables fall back to
/// `RenderConfig::default()`'s values.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct EnvConfig {
    /// Enable debug mode for error output.
    ///
    /// When enabled, runtime errors are printed using simple Debug
    /// formatting instead of the colored, user-facing message.
    ///
    /// Set via: `LWS_DEBUG=1` or `LWS_DEBUG=true`
    #[serde(default)]
    pub lws_debug: bool,

    /// Overrides the per-field trim length used by the report renderer.
    ///
    /// Set via: `LWS_TRIM_LEN=<usize>`
    pub lws_trim_len: Option<usize>,

    /// Overrides the indent unit used by the report renderer.
    ///
    /// Set via: `LWS_INDENT=<string>`
    pub lws_indent: Option<String>,
}

impl EnvConfig {
    /// Load configuration from environment variables.
    ///
    /// This will attempt to parse environment variables into the config
    /// struct. If parsing fails or variables are not set, it will return
    /// the default config.
    pub fn load() -> Self {
        envy::from_env::<EnvConfig>().unwrap_or_default()
    }

    /// Check if debug mode is enabled.
    pub fn is_debug_mode(&self) -> bool {
        self.lws_debug
    }

    /// Build a `RenderConfig`, applying any overrides on top of the
    /// default trim length and indent unit.
    pub fn render_config(&self) -> RenderConfig {
        let mut config = RenderConfig::default();
        if let Some(trim_len) = self.lws_trim_len {
            config.trim_len = trim_len;
        }
        if let Some(indent) = self.lws_indent.clone() {
            config.indent = indent;
        }
        config
    }
}
