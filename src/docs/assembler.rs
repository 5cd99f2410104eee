use tracing::debug;

use super::{
    index::generate_index,
    markdown::{RenderOptions, render_document},
    node::SchemaNode,
};

/// Markdown produced for a set of documented types.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentSet {
    /// `(type name, markdown)` pairs in input order.
    pub documents: Vec<(String, String)>,
    /// Index page linking every document.
    pub index: String,
}

impl DocumentSet {
    /// Markdown of the document for `type_name`, ignoring ASCII case.
    pub fn get(&self, type_name: &str) -> Option<&str> {
        self.documents
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(type_name))
            .map(|(_, markdown)| markdown.as_str())
    }

    /// Names of the documented types in input order.
    pub fn type_names(&self) -> Vec<&str> {
        self.documents.iter().map(|(name, _)| name.as_str()).collect()
    }
}

/// Renders every `(type name, schema)` pair and builds the index.
///
/// Each type gets its own visit tracker, so one type's sections never
/// suppress another's.
pub fn assemble(types: &[(String, SchemaNode)], options: RenderOptions) -> DocumentSet {
    let documents: Vec<(String, String)> = types
        .iter()
        .map(|(name, root)| {
            let document = render_document(name, root, options);
            debug!(
                type_name = %name,
                sections = document.sections.iter().map(|s| s.count()).sum::<usize>(),
                "Rendered document"
            );
            (name.clone(), document.to_string())
        })
        .collect();

    let names: Vec<&str> = documents.iter().map(|(name, _)| name.as_str()).collect();
    let index = generate_index(&names);

    DocumentSet { documents, index }
}
