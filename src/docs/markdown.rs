use serde_json::Value;
use tracing::{debug, warn};

use super::{
    describe::describe_type,
    node::SchemaNode,
    section::{ARGUMENTS_HEADING, Document, PropertyRow, Section, slugify},
    visited::{SectionRole, VisitTracker},
};

/// Heading level of the first nested sections under a document's table.
const FIRST_SECTION_LEVEL: usize = 3;

/// Tuning knobs for the markdown renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Maximum number of nested section levels below the top-level table.
    pub max_depth: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { max_depth: 8 }
    }
}

/// Renders the documentation page for one top-level type.
///
/// Uses a fresh [`VisitTracker`], so rendering the same tree twice always
/// yields identical output.
pub fn render_document(type_name: &str, root: &SchemaNode, options: RenderOptions) -> Document {
    let mut tracker = VisitTracker::new();
    tracker.claim_slug(type_name);
    tracker.claim_slug(ARGUMENTS_HEADING);
    let mut renderer = SectionRenderer::new(&mut tracker, options);

    let sections = renderer.nested_sections(root, FIRST_SECTION_LEVEL, 1);
    Document {
        type_name: type_name.to_string(),
        description: root.description.clone(),
        rows: renderer.property_rows(root),
        sections,
    }
}

/// Recursive renderer turning schema nodes into [`Section`]s.
///
/// Borrows the tracker of the current document pass so repeated or cyclic
/// shapes are emitted only once.
pub struct SectionRenderer<'t> {
    tracker: &'t mut VisitTracker,
    options: RenderOptions,
}

impl<'t> SectionRenderer<'t> {
    /// Creates a renderer sharing `tracker` for the whole document pass.
    pub fn new(tracker: &'t mut VisitTracker, options: RenderOptions) -> Self {
        Self { tracker, options }
    }

    /// Renders `node` as a section titled `name` plus the role suffix.
    ///
    /// The section itself counts as the first nesting level. Its heading
    /// claims the next free anchor for its title.
    pub fn render_section(
        &mut self,
        name: &str,
        role: SectionRole,
        node: &SchemaNode,
        level: usize,
    ) -> Section {
        let anchor = self.tracker.claim_slug(&role.title(name));
        self.section_at(name, role, node, level, 1, anchor)
    }

    fn section_at(
        &mut self,
        name: &str,
        role: SectionRole,
        node: &SchemaNode,
        level: usize,
        depth: usize,
        anchor: String,
    ) -> Section {
        // Children first: their headings must own their anchors before rows link to them.
        let children = self.nested_sections(node, level + 1, depth + 1);
        Section {
            title: role.title(name),
            anchor,
            level,
            description: node.description.clone(),
            rows: self.property_rows(node),
            children,
        }
    }

    /// Rows link to the section recorded for a property, wherever in the
    /// document it was rendered.
    fn property_rows(&self, node: &SchemaNode) -> Vec<PropertyRow> {
        node.properties()
            .iter()
            .map(|property| {
                let name = escape_cell(&property.name);
                PropertyRow {
                    display_name: match self.section_anchor(property) {
                        Some(anchor) => format!("[{name}](#{anchor})"),
                        None => name,
                    },
                    type_name: describe_type(property),
                    description: escape_cell(property.description.as_deref().unwrap_or("")),
                    required: node.is_required(&property.name),
                    default_value: format_default(property),
                }
            })
            .collect()
    }

    fn nested_sections(&mut self, node: &SchemaNode, level: usize, depth: usize) -> Vec<Section> {
        if depth > self.options.max_depth {
            if nested_targets_of_any(node) {
                warn!(
                    max_depth = self.options.max_depth,
                    "Maximum nesting depth reached, omitting deeper sections"
                );
            }
            return Vec::new();
        }

        let mut sections = Vec::new();
        for property in node.properties() {
            for (role, target) in nested_targets(property) {
                match self.tracker.visit(&property.name, role, target) {
                    Some(anchor) => sections.push(
                        self.section_at(&property.name, role, target, level, depth, anchor),
                    ),
                    None => debug!(
                        property = %property.name,
                        ?role,
                        "Section already rendered, skipping"
                    ),
                }
            }
        }
        sections
    }

    fn section_anchor(&self, property: &SchemaNode) -> Option<String> {
        let (role, target) = nested_targets(property).into_iter().next()?;
        self.tracker
            .anchor(&property.name, role, target)
            .map(str::to_string)
    }
}

/// Schemas reachable from `property` that render as their own section.
fn nested_targets(property: &SchemaNode) -> Vec<(SectionRole, &SchemaNode)> {
    let mut targets = Vec::new();

    if property.has_properties() {
        targets.push((SectionRole::Object, property));
    }
    if let Some(items) = property.items().filter(|items| items.has_properties()) {
        targets.push((SectionRole::ArrayItem, items));
    }
    if let Some(values) = property.values() {
        if values.has_properties() {
            targets.push((SectionRole::MapValue, values));
        }
        if let Some(items) = values.items().filter(|items| items.has_properties()) {
            targets.push((SectionRole::MapValueItem, items));
        }
    }

    targets
}

fn nested_targets_of_any(node: &SchemaNode) -> bool {
    node.properties()
        .iter()
        .any(|property| !nested_targets(property).is_empty())
}

/// Base anchor of the nested section `property` links to, if it has one.
///
/// The rendered link carries a `-N` suffix when an earlier heading in the
/// same document has the same title.
pub fn property_anchor(property: &SchemaNode) -> Option<String> {
    nested_targets(property)
        .first()
        .map(|(role, _)| slugify(&role.title(&property.name)))
}

/// Makes free text safe for a single markdown table cell.
///
/// Escapes pipes and collapses every run of whitespace, newlines included,
/// into one space.
pub fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_default(property: &SchemaNode) -> String {
    match &property.default {
        None | Some(Value::Null) => "-".to_string(),
        Some(quoted @ Value::String(s)) if s.trim().is_empty() => quoted.to_string(),
        Some(Value::String(s)) => escape_cell(s),
        Some(other) => escape_cell(&other.to_string()),
    }
}
