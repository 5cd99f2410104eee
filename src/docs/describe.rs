use super::node::{SchemaKind, SchemaNode};

const UNKNOWN: &str = "-";
const OBJECT: &str = "object";

/// Returns a compact human-readable type for a schema node.
///
/// Maps and arrays spell out their element type one level deep
/// (`map[string]array[object]`); anything nested further collapses to
/// `object`. Nodes without a recognizable type are described as `-`.
///
/// # Example
///
/// ```
/// use devcontainer_docs::docs::{SchemaNode, describe_type};
///
/// let node = SchemaNode::map("env", SchemaNode::scalar("", "string"));
/// assert_eq!(describe_type(&node), "map[string]string");
/// ```
pub fn describe_type(node: &SchemaNode) -> String {
    match &node.kind {
        SchemaKind::Map { values } => format!("map[string]{}", element_label(values)),
        SchemaKind::Array { items } => format!("array[{}]", element_label(items)),
        SchemaKind::Object { .. } => OBJECT.to_string(),
        SchemaKind::Scalar {
            type_name: Some(type_name),
        } => type_name.clone(),
        SchemaKind::Scalar { type_name: None } => UNKNOWN.to_string(),
    }
}

fn element_label(element: &SchemaNode) -> String {
    match &element.kind {
        SchemaKind::Map { values } => format!("map[string]{}", collapsed_label(values)),
        SchemaKind::Array { items } => format!("array[{}]", collapsed_label(items)),
        _ => collapsed_label(element),
    }
}

fn collapsed_label(element: &SchemaNode) -> String {
    match &element.kind {
        SchemaKind::Scalar {
            type_name: Some(type_name),
        } => type_name.clone(),
        _ => OBJECT.to_string(),
    }
}
