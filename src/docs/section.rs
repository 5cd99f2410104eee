//! Rendered markdown units and their serialization.

use std::fmt;

const TABLE_HEADER: &str = "| Name | Type | Description | Required | Default |\n\
                            |------|------|-------------|----------|---------|";

/// Title of the heading above a document's top-level table.
pub(super) const ARGUMENTS_HEADING: &str = "Arguments";

const ARGUMENTS_INTRO: &str = "The following arguments are supported:";

/// One row of a properties table, already escaped for markdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyRow {
    /// Property name, wrapped in a link when a nested section exists.
    pub display_name: String,
    /// Output of [`describe_type`](super::describe_type).
    pub type_name: String,
    /// Description with pipes escaped and whitespace collapsed.
    pub description: String,
    /// Whether the property is mandatory.
    pub required: bool,
    /// Default value as text, or `-`.
    pub default_value: String,
}

impl fmt::Display for PropertyRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "| {} | {} | {} | {} | {} |",
            self.display_name,
            self.type_name,
            self.description,
            if self.required { "Yes" } else { "No" },
            self.default_value
        )
    }
}

/// A rendered schema node: heading, description, table and nested sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Heading text, including any role suffix.
    pub title: String,
    /// Anchor of the heading, unique within its document.
    pub anchor: String,
    /// Heading depth (number of `#`).
    pub level: usize,
    /// Optional paragraph under the heading.
    pub description: Option<String>,
    /// Properties table rows in declaration order.
    pub rows: Vec<PropertyRow>,
    /// Sections for nested object schemas.
    pub children: Vec<Section>,
}

impl Section {
    /// Anchor slug of this section's heading.
    pub fn slug(&self) -> &str {
        &self.anchor
    }

    /// Total number of sections in this subtree, including `self`.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Section::count).sum::<usize>()
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}\n\n", "#".repeat(self.level), self.title)?;
        write_description(f, self.description.as_deref())?;
        write!(f, "{ARGUMENTS_INTRO}\n\n")?;
        write_table(f, &self.rows)?;
        for child in &self.children {
            write!(f, "{child}")?;
        }
        Ok(())
    }
}

/// The complete documentation page of one top-level type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Name of the documented type, used as the page title.
    pub type_name: String,
    /// Description of the type.
    pub description: Option<String>,
    /// Top-level properties table.
    pub rows: Vec<PropertyRow>,
    /// Nested sections, starting at heading level 3.
    pub sections: Vec<Section>,
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "# {}\n\n", self.type_name)?;
        write_description(f, self.description.as_deref())?;
        write!(f, "## {ARGUMENTS_HEADING}\n\n{ARGUMENTS_INTRO}\n\n")?;
        write_table(f, &self.rows)?;
        for section in &self.sections {
            write!(f, "{section}")?;
        }
        Ok(())
    }
}

fn write_description(f: &mut fmt::Formatter<'_>, description: Option<&str>) -> fmt::Result {
    match description {
        Some(text) if !text.trim().is_empty() => write!(f, "{}\n\n", text.trim()),
        _ => Ok(()),
    }
}

fn write_table(f: &mut fmt::Formatter<'_>, rows: &[PropertyRow]) -> fmt::Result {
    writeln!(f, "{TABLE_HEADER}")?;
    for row in rows {
        writeln!(f, "{row}")?;
    }
    writeln!(f)
}

/// Converts heading text into the anchor slug markdown renderers generate.
///
/// Lower-cases, turns whitespace into `-` and drops anything that is not
/// alphanumeric, `-` or `_`.
pub fn slugify(title: &str) -> String {
    title
        .trim()
        .chars()
        .filter_map(|c| match c {
            c if c.is_whitespace() => Some('-'),
            c if c.is_alphanumeric() || c == '-' || c == '_' => Some(c),
            _ => None,
        })
        .flat_map(char::to_lowercase)
        .collect()
}
