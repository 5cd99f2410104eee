//! Command-line interface for documentation generation.
//!
//! `generate` writes every page plus the index, `type` writes a single
//! page, `list` prints the documented types and `show` renders a page in
//! memory and prints it.

pub mod formatting;

#[cfg(test)]
mod tests;

use std::{
    io::{self, IsTerminal},
    path::PathBuf,
};

use clap::{Args, Parser, Subcommand};
use tracing::info;

use crate::{
    Result,
    config::DocsConfig,
    docs::{DocsError, DocsGenerator},
};
use formatting::{format_command, format_error, format_header, highlight_markdown};

/// Top-level command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "devcontainer-docs")]
#[command(about = "Generate documentation for dev container configuration types")]
pub struct Cli {
    /// Path to a TOML config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Command to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate documentation for every type plus the index.
    Generate(OutputArgs),
    /// Generate documentation for a single type.
    Type {
        /// Type name, case-insensitive.
        name: String,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// List the documented types.
    List,
    /// Print a rendered page without writing files. Prints the index when no
    /// type is given.
    Show {
        /// Type name, case-insensitive.
        name: Option<String>,
    },
}

/// Output overrides shared by the generating commands.
#[derive(Debug, Clone, Default, Args)]
pub struct OutputArgs {
    /// Directory for markdown pages.
    #[arg(short, long)]
    pub docs_dir: Option<PathBuf>,

    /// Directory for JSON Schema artifacts.
    #[arg(short, long)]
    pub schemas_dir: Option<PathBuf>,

    /// Remove JSON Schema artifacts after the pages are written.
    #[arg(long)]
    pub cleanup_schemas: bool,
}

impl OutputArgs {
    /// Returns `config` with these command-line overrides applied.
    pub fn apply(&self, config: &DocsConfig) -> DocsConfig {
        let mut config = config.clone();
        if let Some(docs_dir) = &self.docs_dir {
            config.output.docs_dir = docs_dir.clone();
        }
        if let Some(schemas_dir) = &self.schemas_dir {
            config.output.schemas_dir = schemas_dir.clone();
        }
        if self.cleanup_schemas {
            config.output.cleanup_schemas = true;
        }
        config
    }
}

/// Runs `command` and returns whether it fully succeeded.
///
/// # Errors
///
/// Returns an error if generation fails outright or an unknown type is named.
pub fn run(command: Commands, config: &DocsConfig) -> Result<bool> {
    match command {
        Commands::Generate(output) => {
            let generator = DocsGenerator::from_config(&output.apply(config));
            let report = generator.generate_all()?;

            println!(
                "Generated documentation for {} types",
                report.generated.len()
            );
            for failure in &report.failures {
                eprintln!("{}: {}", format_error(&failure.type_name), failure.error);
            }
            Ok(report.is_success())
        }
        Commands::Type { name, output } => {
            let generator = DocsGenerator::from_config(&output.apply(config));
            let path = generator.generate_type_by_name(&name)?;
            println!("Generated {}", path.display());
            Ok(true)
        }
        Commands::List => {
            let generator = DocsGenerator::from_config(config);
            println!("{}", format_header("Available types:"));
            for name in generator.list_types() {
                println!("  - {}", format_command(&name));
            }
            Ok(true)
        }
        Commands::Show { name } => {
            let documents = DocsGenerator::from_config(config).generate_in_memory()?;
            let markdown = match &name {
                Some(name) => documents
                    .get(name)
                    .ok_or_else(|| DocsError::InvalidTypeName(name.clone()))?,
                None => documents.index.as_str(),
            };
            info!(type_name = name.as_deref().unwrap_or("index"), "Showing documentation");

            if io::stdout().is_terminal() {
                print!("{}", highlight_markdown(markdown));
            } else {
                print!("{markdown}");
            }
            Ok(true)
        }
    }
}
