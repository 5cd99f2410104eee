//! Abstract schema tree consumed by the markdown renderer.
//!
//! A [`SchemaNode`] describes one piece of a configuration type's shape.
//! The renderer only ever sees this model, never the Rust types or the
//! JSON Schema documents they were reflected from.

use std::collections::BTreeSet;

use serde_json::Value;

/// One unit of the abstract schema tree.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaNode {
    /// Identifier of the node within its parent object.
    ///
    /// Empty for the root and for array-item or map-value schemas.
    pub name: String,
    /// Human-readable description.
    pub description: Option<String>,
    /// Default value, rendered as text in property tables.
    pub default: Option<Value>,
    /// Shape of the node.
    pub kind: SchemaKind,
}

/// The shape of a [`SchemaNode`].
///
/// Each composite variant carries exactly one child collection, so a node
/// can never be an object and an array at the same time.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaKind {
    /// A leaf value. `None` marks a schema whose type could not be determined.
    Scalar {
        /// Primitive type name such as `string`, `integer` or `boolean`.
        type_name: Option<String>,
    },
    /// A structure with named properties.
    Object {
        /// Properties in declaration order.
        properties: Vec<SchemaNode>,
        /// Names of the mandatory properties.
        required: BTreeSet<String>,
    },
    /// A sequence of homogeneous elements.
    Array {
        /// Schema of each element.
        items: Box<SchemaNode>,
    },
    /// A string-keyed dictionary (JSON Schema `additionalProperties`).
    Map {
        /// Schema of each value.
        values: Box<SchemaNode>,
    },
}

impl SchemaNode {
    /// Creates a scalar node with an explicit primitive type.
    pub fn scalar(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::with_kind(
            name,
            SchemaKind::Scalar {
                type_name: Some(type_name.into()),
            },
        )
    }

    /// Creates a node whose type is unknown.
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::with_kind(name, SchemaKind::Scalar { type_name: None })
    }

    /// Creates an object node from its properties, keeping their order.
    pub fn object(name: impl Into<String>, properties: Vec<SchemaNode>) -> Self {
        Self::with_kind(
            name,
            SchemaKind::Object {
                properties,
                required: BTreeSet::new(),
            },
        )
    }

    /// Creates an array node.
    pub fn array(name: impl Into<String>, items: SchemaNode) -> Self {
        Self::with_kind(
            name,
            SchemaKind::Array {
                items: Box::new(items),
            },
        )
    }

    /// Creates a map node.
    pub fn map(name: impl Into<String>, values: SchemaNode) -> Self {
        Self::with_kind(
            name,
            SchemaKind::Map {
                values: Box::new(values),
            },
        )
    }

    fn with_kind(name: impl Into<String>, kind: SchemaKind) -> Self {
        Self {
            name: name.into(),
            description: None,
            default: None,
            kind,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the default value.
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Marks the given properties as required. Has no effect on non-object nodes.
    pub fn with_required<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let SchemaKind::Object { required, .. } = &mut self.kind {
            required.extend(names.into_iter().map(Into::into));
        }
        self
    }

    /// Properties of an object node, or an empty slice for any other kind.
    pub fn properties(&self) -> &[SchemaNode] {
        match &self.kind {
            SchemaKind::Object { properties, .. } => properties,
            _ => &[],
        }
    }

    /// Whether `property` is listed as required on this node.
    pub fn is_required(&self, property: &str) -> bool {
        match &self.kind {
            SchemaKind::Object { required, .. } => required.contains(property),
            _ => false,
        }
    }

    /// Element schema of an array node.
    pub fn items(&self) -> Option<&SchemaNode> {
        match &self.kind {
            SchemaKind::Array { items } => Some(items),
            _ => None,
        }
    }

    /// Value schema of a map node.
    pub fn values(&self) -> Option<&SchemaNode> {
        match &self.kind {
            SchemaKind::Map { values } => Some(values),
            _ => None,
        }
    }

    /// True for object nodes that would produce a non-empty properties table.
    pub fn has_properties(&self) -> bool {
        !self.properties().is_empty()
    }
}
