/// File name of the index page inside the docs directory.
pub const INDEX_FILE_NAME: &str = "index.md";

/// Builds the index page linking every documented type.
///
/// Each entry points at `./<lower-cased name>.md`, the file name the
/// generator writes the type's page to.
pub fn generate_index<S: AsRef<str>>(type_names: &[S]) -> String {
    let mut content = String::from("# Documentation Index\n\n");
    content.push_str("This documentation describes all available configuration structures.\n\n");
    content.push_str("## Available Configurations\n\n");

    for name in type_names {
        let name = name.as_ref();
        content.push_str(&format!("- [{name}](./{}.md)\n", name.to_lowercase()));
    }

    content
}
