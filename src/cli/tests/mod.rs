//! Unit tests for the CLI module.

#![allow(clippy::panic)]

use std::path::PathBuf;

use clap::Parser;

use super::{Cli, Commands, OutputArgs};
use crate::config::DocsConfig;

#[test]
fn parses_generate_with_overrides() {
    let cli = Cli::parse_from([
        "devcontainer-docs",
        "generate",
        "--docs-dir",
        "out/md",
        "--cleanup-schemas",
    ]);

    match cli.command {
        Commands::Generate(output) => {
            assert_eq!(output.docs_dir, Some(PathBuf::from("out/md")));
            assert!(output.schemas_dir.is_none());
            assert!(output.cleanup_schemas);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parses_global_config_after_subcommand() {
    let cli = Cli::parse_from(["devcontainer-docs", "show", "Mount", "--config", "docs.toml"]);

    assert_eq!(cli.config, Some(PathBuf::from("docs.toml")));
    assert!(matches!(cli.command, Commands::Show { name: Some(ref name) } if name == "Mount"));
}

#[test]
fn output_args_override_config() {
    let config = DocsConfig::default();
    let args = OutputArgs {
        docs_dir: None,
        schemas_dir: Some(PathBuf::from("tmp/schema")),
        cleanup_schemas: true,
    };

    let applied = args.apply(&config);

    assert_eq!(applied.output.docs_dir, config.output.docs_dir);
    assert_eq!(applied.output.schemas_dir, PathBuf::from("tmp/schema"));
    assert!(applied.output.cleanup_schemas);
}

#[test]
fn output_args_without_flags_keep_config() {
    let mut config = DocsConfig::default();
    config.output.cleanup_schemas = true;

    let applied = OutputArgs::default().apply(&config);

    assert_eq!(applied, config);
}
