//! Documentation generation for configuration schemas.
//!
//! Configuration types are reflected into JSON Schema, converted into an
//! abstract [`SchemaNode`] tree and rendered as nested, cross-linked
//! markdown pages.

mod assembler;
mod describe;
mod documented;
mod generator;
mod index;
mod markdown;
mod node;
mod paths;
mod registry;
mod schema;
mod section;
mod visited;

#[cfg(test)]
mod tests;

pub use assembler::{DocumentSet, assemble};
pub use describe::describe_type;
pub use documented::{DocumentedType, DocumentedTypeProvider, SchemaFn};
pub use generator::{DocsError, DocsGenerator, GenerationReport, TypeFailure};
pub use index::{INDEX_FILE_NAME, generate_index};
pub use markdown::{RenderOptions, SectionRenderer, escape_cell, property_anchor, render_document};
pub use node::{SchemaKind, SchemaNode};
pub use paths::ensure_within_base;
pub use registry::TypeRegistry;
pub use schema::schema_to_node;
pub use section::{Document, PropertyRow, Section, slugify};
pub use visited::{SectionRole, VisitTracker, fingerprint};
