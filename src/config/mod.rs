//! Configuration for the documentation tool.
//!
//! Settings are read from an optional TOML file. Every section and field
//! has a default, so an empty or missing file is valid.

mod loading;
mod log_level;
mod paths;

#[cfg(test)]
mod tests;

use std::path::PathBuf;

pub use log_level::LogLevel;
pub use paths::ConfigPaths;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Default)]
#[serde(default)]
pub struct DocsConfig {
    /// Where generated files are written.
    pub output: OutputConfig,

    /// Markdown rendering settings.
    pub render: RenderConfig,

    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Output locations for generated documentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory markdown pages and the index are written to.
    pub docs_dir: PathBuf,

    /// Directory JSON Schema artifacts are written to.
    pub schemas_dir: PathBuf,

    /// Whether JSON Schema artifacts are removed after the pages are written.
    pub cleanup_schemas: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            docs_dir: PathBuf::from("docs/markdown"),
            schemas_dir: PathBuf::from("docs/schema"),
            cleanup_schemas: false,
        }
    }
}

/// Markdown rendering settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct RenderConfig {
    /// Maximum number of nested section levels below a page's top-level table.
    pub max_depth: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { max_depth: 8 }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum level of emitted log events. `RUST_LOG` takes precedence.
    pub level: LogLevel,

    /// Directory for rotated log files. Logs go to stderr only when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,
}
