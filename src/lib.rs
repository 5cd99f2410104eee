//! devcontainer-docs - documentation generator for dev container configuration.
//!
//! Configuration types derive a JSON Schema, which is converted into an
//! abstract schema tree and rendered as nested, cross-linked markdown:
//!
//! - One page per configuration type with a properties table per object
//! - Nested sections for object properties, array items and map values
//! - Structural de-duplication so repeated or recursive shapes render once
//! - An index page linking every generated page
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use devcontainer_docs::docs::DocsGenerator;
//!
//! let documents = DocsGenerator::new().generate_in_memory()?;
//! println!("{}", documents.index);
//! # Ok::<(), devcontainer_docs::docs::DocsError>(())
//! ```

/// Command-line interface.
pub mod cli;

/// Configuration loading and defaults.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Schema-to-markdown documentation generation.
pub mod docs;

/// Dev container configuration types that get documented.
pub mod model;

/// Logging setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use core::{DocsToolError, Result};
