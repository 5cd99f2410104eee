use schemars::Schema;

/// Function producing the JSON Schema of a documented type.
pub type SchemaFn = fn() -> Schema;

/// Trait for configuration types that can describe themselves for documentation.
///
/// Implement this on each top-level configuration struct that should get
/// its own page.
pub trait DocumentedTypeProvider {
    /// Returns the page metadata and schema generator for this type.
    fn documented_type() -> DocumentedType;
}

/// A configuration type registered for documentation.
#[derive(Debug, Clone)]
pub struct DocumentedType {
    /// Type name, used as page title and (lower-cased) as file name.
    pub name: String,
    /// Schema generator for the type.
    pub schema: SchemaFn,
}

impl DocumentedType {
    /// Creates a documented type from its name and schema generator.
    pub fn new(name: impl Into<String>, schema: SchemaFn) -> Self {
        Self {
            name: name.into(),
            schema,
        }
    }

    /// File stem of the generated documents: the lower-cased type name.
    pub fn file_stem(&self) -> String {
        self.name.to_lowercase()
    }
}
