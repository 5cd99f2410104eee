use std::collections::HashMap;

use super::{describe::describe_type, node::SchemaNode, section::slugify};

/// Presentation context of a nested section.
///
/// The role feeds both the heading suffix and the de-duplication key, so the
/// same shape reached as a plain property and as an array item yields two
/// distinct sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionRole {
    /// A property whose own schema is an object.
    Object,
    /// The element schema of an array property.
    ArrayItem,
    /// The value schema of a map property.
    MapValue,
    /// The element schema of a map property whose values are arrays.
    MapValueItem,
}

impl SectionRole {
    /// Text appended to the property name in the section heading.
    pub fn suffix(self) -> &'static str {
        match self {
            SectionRole::Object => "",
            SectionRole::ArrayItem => " Item",
            SectionRole::MapValue => " Value",
            SectionRole::MapValueItem => " Value Item",
        }
    }

    /// Heading title for a section of this role.
    pub fn title(self, name: &str) -> String {
        format!("{name}{}", self.suffix())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct VisitedKey {
    name: String,
    role: SectionRole,
    fingerprint: String,
}

impl VisitedKey {
    fn new(name: &str, role: SectionRole, node: &SchemaNode) -> Self {
        Self {
            name: name.to_string(),
            role,
            fingerprint: fingerprint(node),
        }
    }
}

/// Remembers which sections were already rendered during one document pass,
/// and the heading anchor each of them received.
///
/// Anchors are numbered the way markdown renderers do it: the second heading
/// slugging to `child` becomes `child-1`. Create one tracker per top-level
/// document and drop it afterwards.
#[derive(Debug, Default)]
pub struct VisitTracker {
    visited: HashMap<VisitedKey, String>,
    slugs: HashMap<String, usize>,
}

impl VisitTracker {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if an equivalent section was seen before, otherwise
    /// records it and returns `false`.
    pub fn has_visited(&mut self, name: &str, role: SectionRole, node: &SchemaNode) -> bool {
        self.visit(name, role, node).is_none()
    }

    /// Records a section and returns the anchor of its heading, or `None` if
    /// an equivalent section was already recorded.
    pub fn visit(&mut self, name: &str, role: SectionRole, node: &SchemaNode) -> Option<String> {
        let key = VisitedKey::new(name, role, node);
        if self.visited.contains_key(&key) {
            return None;
        }
        let anchor = self.claim_slug(&role.title(name));
        self.visited.insert(key, anchor.clone());
        Some(anchor)
    }

    /// Anchor of the recorded section equivalent to this one, if any.
    pub fn anchor(&self, name: &str, role: SectionRole, node: &SchemaNode) -> Option<&str> {
        self.visited
            .get(&VisitedKey::new(name, role, node))
            .map(String::as_str)
    }

    /// Reserves the anchor of the next heading titled `title` in document
    /// order.
    pub fn claim_slug(&mut self, title: &str) -> String {
        let base = slugify(title);
        let mut slug = base.clone();
        while self.slugs.contains_key(&slug) {
            let count = self.slugs.entry(base.clone()).or_insert(0);
            *count += 1;
            slug = format!("{base}-{count}");
        }
        self.slugs.insert(slug.clone(), 0);
        slug
    }

    /// Number of distinct sections recorded so far.
    pub fn len(&self) -> usize {
        self.visited.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }
}

/// Structural signature of a node: its sorted `property:type` pairs.
pub fn fingerprint(node: &SchemaNode) -> String {
    let mut pairs: Vec<String> = node
        .properties()
        .iter()
        .map(|property| format!("{}:{}", property.name, describe_type(property)))
        .collect();
    pairs.sort();
    pairs.join("|")
}
