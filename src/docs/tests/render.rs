use std::collections::{BTreeSet, HashMap};

use pretty_assertions::assert_eq;
use serde_json::json;

use super::{devcontainer_fixture, port_object};
use crate::docs::{
    RenderOptions, SchemaNode, SectionRenderer, SectionRole, VisitTracker, escape_cell,
    property_anchor, render_document, slugify,
};

fn render(root: &SchemaNode) -> String {
    render_document("DevContainer", root, RenderOptions::default()).to_string()
}

fn anchors_in(markdown: &str) -> Vec<String> {
    markdown
        .split("](#")
        .skip(1)
        .filter_map(|rest| rest.split(')').next())
        .map(str::to_string)
        .collect()
}

/// Heading anchors as a markdown renderer numbers them in document order.
fn heading_slugs(markdown: &str) -> BTreeSet<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    markdown
        .lines()
        .filter(|line| line.starts_with('#'))
        .map(|line| {
            let base = slugify(line.trim_start_matches('#'));
            let count = seen.entry(base.clone()).or_insert(0);
            let slug = if *count == 0 {
                base.clone()
            } else {
                format!("{base}-{count}")
            };
            *count += 1;
            slug
        })
        .collect()
}

fn headings(markdown: &str) -> Vec<&str> {
    markdown
        .lines()
        .filter(|line| line.starts_with('#'))
        .collect()
}

#[test]
fn renders_nested_object_document() {
    let markdown = render(&devcontainer_fixture());

    let expected = "\
# DevContainer

## Arguments

The following arguments are supported:

| Name | Type | Description | Required | Default |
|------|------|-------------|----------|---------|
| name | string | Name of the dev container. | Yes | - |
| [build](#build) | object | Configuration for building the image. | No | - |

### build

Configuration for building the image.

The following arguments are supported:

| Name | Type | Description | Required | Default |
|------|------|-------------|----------|---------|
| dockerfile | string | Path to the Dockerfile. | Yes | - |

";
    assert_eq!(markdown, expected);
}

#[test]
fn rendering_is_idempotent() {
    let root = devcontainer_fixture();

    assert_eq!(render(&root), render(&root));
}

#[test]
fn rows_keep_declaration_order() {
    let root = SchemaNode::object(
        "",
        vec![
            SchemaNode::scalar("zeta", "string"),
            SchemaNode::scalar("alpha", "string"),
            SchemaNode::scalar("mid", "string"),
        ],
    );

    let document = render_document("Ordered", &root, RenderOptions::default());
    let names: Vec<&str> = document
        .rows
        .iter()
        .map(|row| row.display_name.as_str())
        .collect();

    assert_eq!(names, ["zeta", "alpha", "mid"]);
}

#[test]
fn description_pipes_are_escaped_and_whitespace_collapsed() {
    let root = SchemaNode::object(
        "",
        vec![SchemaNode::scalar("mode", "string").with_description("Uses \"|\" for\n  choices\tand more")],
    );

    let markdown = render(&root);

    assert!(markdown.contains("| mode | string | Uses \"\\|\" for choices and more | No | - |"));
    assert_eq!(escape_cell("a\n\nb | c"), "a b \\| c");
}

#[test]
fn property_names_are_escaped() {
    let root = SchemaNode::object(
        "",
        vec![
            SchemaNode::scalar("a|b", "string"),
            SchemaNode::object("x|y", vec![SchemaNode::scalar("port", "integer")]),
        ],
    );

    let markdown = render(&root);

    assert!(markdown.contains("\n| a\\|b | string |  | No | - |\n"));
    assert!(markdown.contains("\n| [x\\|y](#xy) | object |  | No | - |\n"));
    assert!(markdown.contains("\n### x|y\n"));
}

#[test]
fn defaults_are_rendered_as_text() {
    let root = SchemaNode::object(
        "",
        vec![
            SchemaNode::scalar("context", "string").with_default("."),
            SchemaNode::scalar("readonly", "boolean").with_default(false),
            SchemaNode::scalar("retries", "integer").with_default(3),
            SchemaNode::array("args", SchemaNode::scalar("", "string")).with_default(json!(["a", "b"])),
            SchemaNode::scalar("label", "string").with_default(json!(null)),
            SchemaNode::scalar("prefix", "string").with_default(""),
            SchemaNode::scalar("sep", "string").with_default(" "),
            SchemaNode::scalar("eol", "string").with_default("\n"),
        ],
    );

    let rows = render_document("Defaults", &root, RenderOptions::default()).rows;
    let defaults: Vec<&str> = rows.iter().map(|row| row.default_value.as_str()).collect();

    assert_eq!(
        defaults,
        [".", "false", "3", "[\"a\",\"b\"]", "-", "\"\"", "\" \"", "\"\\n\""]
    );
}

#[test]
fn array_map_and_map_array_items_get_sections() {
    let root = SchemaNode::object(
        "",
        vec![
            SchemaNode::array("mounts", port_object("")),
            SchemaNode::map("secrets", port_object("")),
            SchemaNode::map("groups", SchemaNode::array("", port_object(""))),
        ],
    );

    let markdown = render(&root);

    assert_eq!(
        headings(&markdown),
        [
            "# DevContainer",
            "## Arguments",
            "### mounts Item",
            "### secrets Value",
            "### groups Value Item",
        ]
    );
    assert_eq!(anchors_in(&markdown), ["mounts-item", "secrets-value", "groups-value-item"]);
}

#[test]
fn every_link_has_a_matching_heading() {
    let shared = port_object("");
    let root = SchemaNode::object(
        "",
        vec![
            SchemaNode::object(
                "outer",
                vec![
                    SchemaNode::array("items", shared.clone()),
                    SchemaNode::map("byName", shared.clone()),
                ],
            ),
            SchemaNode::array("items", shared.clone()),
            SchemaNode::map("nested", SchemaNode::array("", shared)),
        ],
    );

    let markdown = render(&root);
    let slugs = heading_slugs(&markdown);

    let anchors = anchors_in(&markdown);
    assert!(!anchors.is_empty());
    for anchor in anchors {
        assert!(slugs.contains(&anchor), "missing heading for #{anchor}");
    }
}

#[test]
fn repeated_shape_renders_once_but_keeps_links() {
    let root = SchemaNode::object(
        "",
        vec![
            SchemaNode::object("first", vec![SchemaNode::array("mounts", port_object(""))]),
            SchemaNode::object("second", vec![SchemaNode::array("mounts", port_object(""))]),
        ],
    );

    let markdown = render(&root);

    let mounts_headings = headings(&markdown)
        .into_iter()
        .filter(|heading| heading.ends_with(" mounts Item"))
        .count();
    assert_eq!(mounts_headings, 1);
    assert_eq!(markdown.matches("[mounts](#mounts-item)").count(), 2);
}

#[test]
fn empty_objects_get_no_section_or_anchor() {
    let root = SchemaNode::object(
        "",
        vec![
            SchemaNode::object("settings", Vec::new()),
            SchemaNode::array("plugins", SchemaNode::object("", Vec::new())),
        ],
    );

    let markdown = render(&root);

    assert!(markdown.contains("| settings | object |"));
    assert!(markdown.contains("| plugins | array[object] |"));
    assert!(!markdown.contains("###"));
    assert_eq!(property_anchor(&root.properties()[0]), None);
}

#[test]
fn repeated_shape_higher_in_tree_terminates() {
    let leaf = || SchemaNode::object("child", vec![SchemaNode::scalar("value", "string")]);
    let shape = || vec![SchemaNode::scalar("value", "string"), leaf()];
    let root = SchemaNode::object(
        "",
        vec![
            SchemaNode::object("child", shape()),
            SchemaNode::object("other", vec![SchemaNode::object("child", shape())]),
        ],
    );

    let markdown = render(&root);

    assert_eq!(
        headings(&markdown),
        ["# DevContainer", "## Arguments", "### child", "#### child", "### other"]
    );
    assert_eq!(markdown.matches("[child](#child)").count(), 2);
    assert_eq!(markdown.matches("[child](#child-1)").count(), 1);

    let slugs = heading_slugs(&markdown);
    for anchor in anchors_in(&markdown) {
        assert!(slugs.contains(&anchor), "missing heading for #{anchor}");
    }
}

#[test]
fn duplicate_titles_link_to_their_own_heading() {
    let root = SchemaNode::object(
        "",
        vec![
            SchemaNode::object("options", vec![SchemaNode::scalar("port", "integer")]),
            SchemaNode::object(
                "remote",
                vec![SchemaNode::object("options", vec![SchemaNode::scalar("host", "string")])],
            ),
        ],
    );

    let markdown = render(&root);

    assert!(markdown.contains("| [options](#options) | object |"));
    assert!(markdown.contains("| [options](#options-1) | object |"));
    assert_eq!(
        headings(&markdown),
        ["# DevContainer", "## Arguments", "### options", "### remote", "#### options"]
    );
}

#[test]
fn section_titles_avoid_page_headings() {
    let root = SchemaNode::object(
        "",
        vec![
            SchemaNode::object("arguments", vec![SchemaNode::scalar("value", "string")]),
            SchemaNode::object("devContainer", vec![SchemaNode::scalar("value", "integer")]),
        ],
    );

    let markdown = render(&root);

    assert!(markdown.contains("| [arguments](#arguments-1) | object |"));
    assert!(markdown.contains("| [devContainer](#devcontainer-1) | object |"));
}

#[test]
fn long_self_similar_chain_collapses_to_one_section() {
    fn chain(depth: usize) -> SchemaNode {
        let mut properties = vec![SchemaNode::scalar("value", "string")];
        if depth > 0 {
            properties.push(chain(depth - 1));
        }
        SchemaNode::object("child", properties)
    }

    let markdown = render(&SchemaNode::object("", vec![chain(50)]));

    assert_eq!(
        headings(&markdown),
        ["# DevContainer", "## Arguments", "### child"]
    );
}

#[test]
fn depth_cap_stops_recursion_without_dangling_links() {
    fn nest(depth: usize) -> SchemaNode {
        let name = format!("level{depth}");
        if depth == 0 {
            SchemaNode::object(name, vec![SchemaNode::scalar("leaf", "string")])
        } else {
            SchemaNode::object(name, vec![nest(depth - 1)])
        }
    }

    let root = SchemaNode::object("", vec![nest(5)]);
    let document = render_document("Deep", &root, RenderOptions { max_depth: 2 });
    let markdown = document.to_string();

    assert!(markdown.contains("### level5"));
    assert!(markdown.contains("#### level4"));
    assert!(!markdown.contains("level3]("));
    assert!(!markdown.contains("##### level3"));

    let slugs = heading_slugs(&markdown);
    for anchor in anchors_in(&markdown) {
        assert!(slugs.contains(&anchor), "missing heading for #{anchor}");
    }
}

#[test]
fn trackers_are_independent_between_documents() {
    let root = devcontainer_fixture();

    let first = render_document("A", &root, RenderOptions::default());
    let second = render_document("B", &root, RenderOptions::default());

    assert_eq!(first.sections, second.sections);
    assert_eq!(first.sections.len(), 1);
}

#[test]
fn section_renderer_uses_role_suffix_and_shared_tracker() {
    let mut tracker = VisitTracker::new();
    let item = SchemaNode::object(
        "",
        vec![SchemaNode::object("target", vec![SchemaNode::scalar("path", "string")])],
    );

    let mut renderer = SectionRenderer::new(&mut tracker, RenderOptions::default());
    let first = renderer.render_section("mounts", SectionRole::ArrayItem, &item, 3);
    let second = renderer.render_section("mounts", SectionRole::ArrayItem, &item, 3);

    assert_eq!(first.title, "mounts Item");
    assert_eq!(first.slug(), "mounts-item");
    assert_eq!(first.children.len(), 1);
    assert_eq!(first.children[0].level, 4);
    assert_eq!(first.children[0].slug(), "target");
    assert_eq!(second.slug(), "mounts-item-1");
    assert!(second.children.is_empty());
    assert_eq!(second.rows[0].display_name, "[target](#target)");
    assert_eq!(tracker.len(), 1);
}
