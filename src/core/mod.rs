use std::{
    fmt,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::docs::DocsError;

/// Error types for the devcontainer-docs tool.
///
/// Covers configuration loading and documentation generation failures.
#[derive(Error, Debug)]
pub enum DocsToolError {
    /// Configuration value missing or invalid
    #[error("invalid config field '{field}': {reason}")]
    InvalidConfigField {
        /// The field that is invalid
        field: String,
        /// Reason why the field is invalid
        reason: String,
    },

    /// I/O operation error
    #[error("I/O error on '{path}': {details}")]
    IoError {
        /// Path where I/O error occurred
        path: PathBuf,
        /// I/O error details
        details: String,
    },

    /// TOML parsing error with location context
    #[error("failed to parse TOML at '{location}': {details}")]
    TomlParseError {
        /// Location of TOML being parsed (file path or "string")
        location: String,
        /// Parse error details
        details: String,
    },

    /// Documentation generation error
    #[error(transparent)]
    Docs(#[from] DocsError),
}

/// A specialized `Result` type for devcontainer-docs operations.
pub type Result<T> = std::result::Result<T, DocsToolError>;

impl DocsToolError {
    /// Creates a TOML parsing error with optional file path context.
    ///
    /// # Arguments
    ///
    /// * `error` - The underlying parsing error
    /// * `path` - Optional path to the file that failed to parse
    pub fn toml_parse(error: impl fmt::Display, path: Option<&Path>) -> Self {
        let location = match path {
            Some(p) => {
                let clean_path = p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
                clean_path.to_string_lossy().to_string()
            }
            None => "string".to_string(),
        };

        DocsToolError::TomlParseError {
            location,
            details: error.to_string(),
        }
    }

    /// Creates an I/O error with file path context.
    pub fn io(error: impl fmt::Display, path: &Path) -> Self {
        DocsToolError::IoError {
            path: path.to_path_buf(),
            details: error.to_string(),
        }
    }
}
