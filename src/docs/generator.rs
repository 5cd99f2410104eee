use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error, info, instrument};

use crate::config::DocsConfig;

use super::{
    DocumentSet, DocumentedType, RenderOptions, TypeRegistry, assemble,
    index::{INDEX_FILE_NAME, generate_index},
    paths::ensure_within_base,
    render_document, schema_to_node,
};

/// Generates markdown documentation and JSON Schema artifacts for
/// configuration types.
///
/// Every type is rendered independently; a failure for one type is
/// reported with its name and does not touch the files of the others.
pub struct DocsGenerator {
    docs_dir: PathBuf,
    schemas_dir: PathBuf,
    cleanup_schemas: bool,
    render_options: RenderOptions,
    types: Vec<DocumentedType>,
}

impl Default for DocsGenerator {
    fn default() -> Self {
        Self {
            docs_dir: PathBuf::from("docs/markdown"),
            schemas_dir: PathBuf::from("docs/schema"),
            cleanup_schemas: false,
            render_options: RenderOptions::default(),
            types: TypeRegistry::get_all(),
        }
    }
}

impl DocsGenerator {
    /// Creates a generator for all registered types with default directories.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator using the output and render settings of `config`.
    pub fn from_config(config: &DocsConfig) -> Self {
        Self::new()
            .with_docs_dir(&config.output.docs_dir)
            .with_schemas_dir(&config.output.schemas_dir)
            .with_cleanup_schemas(config.output.cleanup_schemas)
            .with_render_options(RenderOptions {
                max_depth: config.render.max_depth,
            })
    }

    /// Sets the directory markdown pages and the index are written to.
    pub fn with_docs_dir(mut self, docs_dir: impl Into<PathBuf>) -> Self {
        self.docs_dir = docs_dir.into();
        self
    }

    /// Sets the directory JSON Schema artifacts are written to.
    pub fn with_schemas_dir(mut self, schemas_dir: impl Into<PathBuf>) -> Self {
        self.schemas_dir = schemas_dir.into();
        self
    }

    /// Removes each JSON Schema artifact once its page has been written.
    pub fn with_cleanup_schemas(mut self, cleanup_schemas: bool) -> Self {
        self.cleanup_schemas = cleanup_schemas;
        self
    }

    /// Overrides the renderer settings.
    pub fn with_render_options(mut self, render_options: RenderOptions) -> Self {
        self.render_options = render_options;
        self
    }

    /// Replaces the set of documented types.
    pub fn with_types(mut self, types: Vec<DocumentedType>) -> Self {
        self.types = types;
        self
    }

    /// Returns the names of the types this generator documents.
    pub fn list_types(&self) -> Vec<String> {
        self.types.iter().map(|ty| ty.name.clone()).collect()
    }

    /// Generates pages for every type, then the index of the successful ones.
    ///
    /// Per-type failures are logged and collected in the report instead of
    /// aborting the run.
    ///
    /// # Errors
    ///
    /// Returns `DocsError::FileWrite` if the output directories or the index
    /// cannot be written.
    #[instrument(skip(self), fields(docs_dir = %self.docs_dir.display()))]
    pub fn generate_all(&self) -> Result<GenerationReport, DocsError> {
        self.create_output_dirs()?;

        let mut report = GenerationReport::default();
        for documented in &self.types {
            match self.generate_type(documented) {
                Ok(path) => report.generated.push((documented.name.clone(), path)),
                Err(err) => {
                    error!(type_name = %documented.name, error = %err, "Failed to generate documentation");
                    report.failures.push(TypeFailure {
                        type_name: documented.name.clone(),
                        error: err,
                    });
                }
            }
        }

        let names: Vec<&str> = report
            .generated
            .iter()
            .map(|(name, _)| name.as_str())
            .collect();
        let index_path = self.docs_path(INDEX_FILE_NAME)?;
        write_file(&index_path, &generate_index(&names))?;
        info!("Generated {}", index_path.display());
        report.index = Some(index_path);

        info!(
            generated = report.generated.len(),
            failed = report.failures.len(),
            "Documentation generation finished"
        );
        Ok(report)
    }

    /// Generates the page for a single type by name, ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// Returns `DocsError::InvalidTypeName` if no such type is registered, or
    /// the error of the failed generation step.
    pub fn generate_type_by_name(&self, type_name: &str) -> Result<PathBuf, DocsError> {
        let documented = self
            .types
            .iter()
            .find(|ty| ty.name.eq_ignore_ascii_case(type_name))
            .ok_or_else(|| DocsError::InvalidTypeName(type_name.to_string()))?;

        self.create_output_dirs()?;
        self.generate_type(documented)
    }

    /// Renders all pages in memory without touching the file system.
    ///
    /// # Errors
    ///
    /// Returns `DocsError::TypeGeneration` naming the first type whose schema
    /// could not be converted.
    pub fn generate_in_memory(&self) -> Result<DocumentSet, DocsError> {
        let nodes = self
            .types
            .iter()
            .map(|documented| {
                let schema = schema_value(documented).map_err(|err| err.for_type(documented))?;
                Ok((documented.name.clone(), schema_to_node(&schema)))
            })
            .collect::<Result<Vec<_>, DocsError>>()?;

        Ok(assemble(&nodes, self.render_options))
    }

    /// Writes the JSON Schema artifact and the markdown page for one type.
    ///
    /// # Errors
    ///
    /// Returns `DocsError::TypeGeneration` wrapping the failed step.
    #[instrument(skip_all, fields(type_name = %documented.name))]
    pub fn generate_type(&self, documented: &DocumentedType) -> Result<PathBuf, DocsError> {
        self.write_type(documented)
            .map_err(|err| err.for_type(documented))
    }

    fn write_type(&self, documented: &DocumentedType) -> Result<PathBuf, DocsError> {
        let stem = documented.file_stem();
        let schema_path = ensure_within_base(
            &self.schemas_dir,
            &self.schemas_dir.join(format!("{stem}.json")),
        )?;
        let docs_path = self.docs_path(&format!("{stem}.md"))?;

        let schema = schema_value(documented)?;
        let pretty = serde_json::to_string_pretty(&schema).map_err(|err| {
            DocsError::SchemaConversion {
                type_name: documented.name.clone(),
                details: err.to_string(),
            }
        })?;
        write_file(&schema_path, &pretty)?;
        debug!("Saved schema to {}", schema_path.display());

        let root = schema_to_node(&schema);
        let markdown = render_document(&documented.name, &root, self.render_options).to_string();
        write_file(&docs_path, &markdown)?;
        info!("Generated {}", docs_path.display());

        if self.cleanup_schemas {
            fs::remove_file(&schema_path).map_err(|err| DocsError::FileWrite {
                path: schema_path.clone(),
                details: format!("Failed to remove schema file: {err}"),
            })?;
            debug!("Removed {}", schema_path.display());
        }

        Ok(docs_path)
    }

    fn docs_path(&self, file_name: &str) -> Result<PathBuf, DocsError> {
        ensure_within_base(&self.docs_dir, &self.docs_dir.join(file_name))
    }

    fn create_output_dirs(&self) -> Result<(), DocsError> {
        for dir in [&self.docs_dir, &self.schemas_dir] {
            fs::create_dir_all(dir).map_err(|err| DocsError::FileWrite {
                path: dir.clone(),
                details: format!("Failed to create output directory: {err}"),
            })?;
        }
        Ok(())
    }
}

fn schema_value(documented: &DocumentedType) -> Result<Value, DocsError> {
    serde_json::to_value((documented.schema)()).map_err(|err| DocsError::SchemaConversion {
        type_name: documented.name.clone(),
        details: err.to_string(),
    })
}

fn write_file(path: &Path, content: &str) -> Result<(), DocsError> {
    fs::write(path, content).map_err(|err| DocsError::FileWrite {
        path: path.to_path_buf(),
        details: err.to_string(),
    })
}

/// Outcome of [`DocsGenerator::generate_all`].
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// `(type name, page path)` for every page written.
    pub generated: Vec<(String, PathBuf)>,
    /// Path of the index page.
    pub index: Option<PathBuf>,
    /// Types whose generation failed.
    pub failures: Vec<TypeFailure>,
}

impl GenerationReport {
    /// Whether every type was generated.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// A type whose documentation could not be generated.
#[derive(Debug)]
pub struct TypeFailure {
    /// Name of the failed type.
    pub type_name: String,
    /// What went wrong.
    pub error: DocsError,
}

/// Errors that can occur during documentation generation.
#[derive(Error, Debug)]
pub enum DocsError {
    /// Creating, writing or removing a file failed.
    #[error("failed to write '{path}': {details}")]
    FileWrite {
        /// Path of the file or directory
        path: PathBuf,
        /// Underlying error details
        details: String,
    },

    /// A computed output path resolves outside its output directory.
    #[error("path '{target}' escapes output directory '{base}'")]
    PathEscape {
        /// Configured output directory
        base: PathBuf,
        /// Offending path
        target: PathBuf,
    },

    /// No documented type with this name exists.
    #[error("unknown type '{0}'")]
    InvalidTypeName(String),

    /// The JSON Schema of a type could not be serialized.
    #[error("failed to convert schema of '{type_name}': {details}")]
    SchemaConversion {
        /// Type whose schema failed
        type_name: String,
        /// Serialization error details
        details: String,
    },

    /// Generating the documentation of one type failed.
    #[error("error generating docs for {type_name}: {source}")]
    TypeGeneration {
        /// Type whose generation failed
        type_name: String,
        /// The failed step
        source: Box<DocsError>,
    },
}

impl DocsError {
    fn for_type(self, documented: &DocumentedType) -> Self {
        match self {
            already @ DocsError::TypeGeneration { .. } => already,
            other => DocsError::TypeGeneration {
                type_name: documented.name.clone(),
                source: Box::new(other),
            },
        }
    }
}
