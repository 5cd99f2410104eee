//! Unit tests for the docs module.
//!
//! Schema trees are built by hand or from inline JSON; nothing here touches
//! the file system.

#![allow(clippy::panic, clippy::unwrap_used)]

mod render;

use super::SchemaNode;

/// `{ name: string (required), build: { dockerfile: string (required) } }`
fn devcontainer_fixture() -> SchemaNode {
    let build = SchemaNode::object(
        "build",
        vec![SchemaNode::scalar("dockerfile", "string").with_description("Path to the Dockerfile.")],
    )
    .with_required(["dockerfile"])
    .with_description("Configuration for building the image.");

    SchemaNode::object(
        "",
        vec![
            SchemaNode::scalar("name", "string").with_description("Name of the dev container."),
            build,
        ],
    )
    .with_required(["name"])
}

/// Object with a single `port: integer` property.
fn port_object(name: &str) -> SchemaNode {
    SchemaNode::object(name, vec![SchemaNode::scalar("port", "integer")])
}
