//! Formatting utilities for CLI output.
//!
//! Provides consistent ANSI styling for headers, names and errors, and a
//! light highlighter for printing rendered markdown to a terminal.

/// ANSI color codes for terminal output
pub struct Colors;

impl Colors {
    /// Reset all formatting
    pub const RESET: &'static str = "\x1b[0m";
    /// Bold text
    pub const BOLD: &'static str = "\x1b[1m";
    /// Dim text
    pub const DIM: &'static str = "\x1b[2m";

    /// Red color
    pub const RED: &'static str = "\x1b[31m";
    /// Green color
    pub const GREEN: &'static str = "\x1b[32m";
    /// Yellow color
    pub const YELLOW: &'static str = "\x1b[33m";
    /// Cyan color
    pub const CYAN: &'static str = "\x1b[36m";
}

/// Formats section headers with styling
pub fn format_header(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::CYAN, text, Colors::RESET)
}

/// Formats subheaders with styling
pub fn format_subheader(text: &str) -> String {
    format!(
        "{}{}{}{}",
        Colors::BOLD,
        Colors::YELLOW,
        text,
        Colors::RESET
    )
}

/// Formats command and type names with styling
pub fn format_command(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::GREEN, text, Colors::RESET)
}

/// Formats descriptions with muted styling
pub fn format_description(text: &str) -> String {
    format!("{}{}{}", Colors::DIM, text, Colors::RESET)
}

/// Formats error messages with red styling
pub fn format_error(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::RED, text, Colors::RESET)
}

/// Highlights rendered markdown for display in a terminal.
///
/// Top-level headings use the header style, deeper headings the subheader
/// style, and table separator rows are dimmed. Every other line is printed
/// unchanged.
///
/// # Examples
///
/// ```
/// use devcontainer_docs::cli::formatting::{format_header, highlight_markdown};
///
/// let highlighted = highlight_markdown("# DevContainer\n\ntext\n");
/// assert!(highlighted.starts_with(&format_header("# DevContainer")));
/// assert!(highlighted.contains("\ntext\n"));
/// ```
pub fn highlight_markdown(markdown: &str) -> String {
    markdown
        .lines()
        .map(|line| {
            if line.starts_with("# ") || line.starts_with("## ") {
                format_header(line)
            } else if line.starts_with('#') {
                format_subheader(line)
            } else if line.starts_with("|--") {
                format_description(line)
            } else {
                line.to_string()
            }
        })
        .map(|line| line + "\n")
        .collect()
}
