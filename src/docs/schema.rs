//! Conversion of JSON Schema documents into the renderer's schema tree.
//!
//! Schemas come from `schemars` reflection. Local references
//! (`#/$defs/...`, `#/definitions/...`) are inlined; anything else that
//! cannot be interpreted degrades to an unknown node instead of failing.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::node::{SchemaKind, SchemaNode};

/// Builds a [`SchemaNode`] tree from a JSON Schema document.
///
/// The root node has an empty name. Property order follows the order of the
/// `properties` object in `schema`.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use devcontainer_docs::docs::{describe_type, schema_to_node};
///
/// let schema = json!({
///     "type": "object",
///     "properties": {
///         "name": {
///             "type": "string",
///             "description": "Name of the dev container."
///         }
///     },
///     "required": ["name"]
/// });
///
/// let root = schema_to_node(&schema);
/// assert_eq!(root.properties()[0].name, "name");
/// assert_eq!(describe_type(&root.properties()[0]), "string");
/// assert!(root.is_required("name"));
/// ```
pub fn schema_to_node(schema: &Value) -> SchemaNode {
    SchemaConverter::new(schema).convert("", schema)
}

struct SchemaConverter<'a> {
    root: &'a Value,
    ref_chain: Vec<String>,
}

impl<'a> SchemaConverter<'a> {
    fn new(root: &'a Value) -> Self {
        Self {
            root,
            ref_chain: Vec::new(),
        }
    }

    fn convert(&mut self, name: &str, schema: &'a Value) -> SchemaNode {
        let Some(object) = schema.as_object() else {
            return SchemaNode::unknown(name);
        };

        let node = if let Some(reference) = object.get("$ref").and_then(Value::as_str) {
            self.convert_reference(name, reference)
        } else if let Some(variants) = variants(object) {
            self.convert_variants(name, variants)
        } else {
            SchemaNode {
                name: name.to_string(),
                description: None,
                default: None,
                kind: self.convert_kind(object),
            }
        };

        overlay_annotations(node, object)
    }

    fn convert_reference(&mut self, name: &str, reference: &str) -> SchemaNode {
        if self.ref_chain.iter().any(|seen| seen == reference) {
            warn!(reference, "Recursive schema reference, not expanding further");
            let description = self
                .resolve(reference)
                .and_then(|target| target.get("description"))
                .and_then(Value::as_str);
            let node = SchemaNode::object(name, Vec::new());
            return match description {
                Some(text) => node.with_description(text),
                None => node,
            };
        }

        let Some(target) = self.resolve(reference) else {
            debug!(reference, "Unresolvable schema reference");
            return SchemaNode::unknown(name);
        };

        self.ref_chain.push(reference.to_string());
        let node = self.convert(name, target);
        self.ref_chain.pop();
        node
    }

    fn convert_variants(&mut self, name: &str, variants: &'a [Value]) -> SchemaNode {
        let mut candidates: Vec<SchemaNode> = variants
            .iter()
            .filter(|variant| !is_null_schema(variant))
            .map(|variant| self.convert(name, variant))
            .collect();

        if candidates.len() == 1 {
            return candidates.remove(0);
        }

        let shared_type = candidates
            .iter()
            .map(|candidate| match &candidate.kind {
                SchemaKind::Scalar { type_name } => type_name.as_deref(),
                _ => None,
            })
            .reduce(|left, right| if left == right { left } else { None })
            .flatten();

        match shared_type {
            Some(type_name) => SchemaNode::scalar(name, type_name),
            None => SchemaNode::unknown(name),
        }
    }

    fn convert_kind(&mut self, object: &'a Map<String, Value>) -> SchemaKind {
        let type_name = primary_type(object);

        if let Some(properties) = object.get("properties").and_then(Value::as_object) {
            return SchemaKind::Object {
                properties: properties
                    .iter()
                    .map(|(property, schema)| self.convert(property, schema))
                    .collect(),
                required: object
                    .get("required")
                    .and_then(Value::as_array)
                    .map(|names| {
                        names
                            .iter()
                            .filter_map(Value::as_str)
                            .map(str::to_string)
                            .collect()
                    })
                    .unwrap_or_default(),
            };
        }

        match type_name {
            Some("object") | None if is_value_schema(object.get("additionalProperties")) => {
                SchemaKind::Map {
                    values: Box::new(self.convert_child(object.get("additionalProperties"))),
                }
            }
            Some("object") => SchemaKind::Object {
                properties: Vec::new(),
                required: Default::default(),
            },
            Some("array") => SchemaKind::Array {
                items: Box::new(self.convert_child(object.get("items"))),
            },
            Some(other) => SchemaKind::Scalar {
                type_name: Some(other.to_string()),
            },
            None => SchemaKind::Scalar {
                type_name: inferred_enum_type(object),
            },
        }
    }

    fn convert_child(&mut self, schema: Option<&'a Value>) -> SchemaNode {
        match schema {
            Some(Value::Array(tuple)) => match tuple.first() {
                Some(first) => self.convert("", first),
                None => SchemaNode::unknown(""),
            },
            Some(schema) => self.convert("", schema),
            None => SchemaNode::unknown(""),
        }
    }

    fn resolve(&self, reference: &str) -> Option<&'a Value> {
        let pointer = reference.strip_prefix('#')?;
        if pointer.is_empty() {
            return Some(self.root);
        }
        self.root.pointer(pointer)
    }
}

/// Applies the description and default found next to a `$ref` or on the
/// schema itself; these win over annotations of the referenced target.
fn overlay_annotations(mut node: SchemaNode, object: &Map<String, Value>) -> SchemaNode {
    if let Some(description) = object.get("description").and_then(Value::as_str) {
        node.description = Some(description.to_string());
    }
    if let Some(default) = object.get("default") {
        node.default = Some(default.clone());
    }
    node
}

fn variants(object: &Map<String, Value>) -> Option<&[Value]> {
    if object.contains_key("type") || object.contains_key("properties") {
        return None;
    }

    ["anyOf", "oneOf"]
        .iter()
        .find_map(|key| object.get(*key).and_then(Value::as_array))
        .or_else(|| {
            object
                .get("allOf")
                .and_then(Value::as_array)
                .filter(|all| all.len() == 1)
        })
        .map(Vec::as_slice)
}

fn primary_type(object: &Map<String, Value>) -> Option<&str> {
    match object.get("type")? {
        Value::String(type_name) => Some(type_name),
        Value::Array(types) => types
            .iter()
            .filter_map(Value::as_str)
            .find(|type_name| *type_name != "null"),
        _ => None,
    }
}

fn is_null_schema(schema: &Value) -> bool {
    schema.get("type").and_then(Value::as_str) == Some("null")
        || schema.get("const").is_some_and(Value::is_null)
}

fn is_value_schema(schema: Option<&Value>) -> bool {
    matches!(schema, Some(Value::Object(_)) | Some(Value::Bool(true)))
}

fn inferred_enum_type(object: &Map<String, Value>) -> Option<String> {
    let values: Vec<&Value> = match (object.get("const"), object.get("enum")) {
        (Some(constant), _) => vec![constant],
        (None, Some(Value::Array(values))) => values.iter().collect(),
        _ => return None,
    };

    let type_name = json_type_name(values.first()?)?;
    values
        .iter()
        .all(|value| json_type_name(value) == Some(type_name))
        .then(|| type_name.to_string())
}

fn json_type_name(value: &Value) -> Option<&'static str> {
    match value {
        Value::String(_) => Some("string"),
        Value::Bool(_) => Some("boolean"),
        Value::Number(number) if number.is_i64() || number.is_u64() => Some("integer"),
        Value::Number(_) => Some("number"),
        _ => None,
    }
}
