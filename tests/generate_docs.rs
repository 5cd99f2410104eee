//! Integration tests for documentation generation on disk.

#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::panic)]

use std::fs;

use devcontainer_docs::docs::{DocsError, DocsGenerator, DocumentedType, TypeRegistry};
use schemars::schema_for;
use tempfile::TempDir;

fn generator_in(temp_dir: &TempDir) -> DocsGenerator {
    DocsGenerator::new()
        .with_docs_dir(temp_dir.path().join("markdown"))
        .with_schemas_dir(temp_dir.path().join("schema"))
}

mod generate_all {
    use super::*;

    #[test]
    fn writes_pages_schemas_and_index() {
        let temp = TempDir::new().unwrap();
        let report = generator_in(&temp).generate_all().unwrap();

        assert!(report.is_success());
        assert_eq!(report.generated.len(), TypeRegistry::list_type_names().len());

        for name in TypeRegistry::list_type_names() {
            let stem = name.to_lowercase();
            let page = fs::read_to_string(temp.path().join(format!("markdown/{stem}.md"))).unwrap();
            assert!(page.starts_with(&format!("# {name}\n")));
            assert!(page.contains("| Name | Type | Description | Required | Default |"));
            assert!(temp.path().join(format!("schema/{stem}.json")).is_file());
        }

        let index = fs::read_to_string(temp.path().join("markdown/index.md")).unwrap();
        assert!(index.starts_with("# Documentation Index\n"));
        assert!(index.contains("- [DevContainer](./devcontainer.md)\n"));
        assert!(index.contains("- [PortAttributes](./portattributes.md)\n"));
    }

    #[test]
    fn devcontainer_page_links_nested_sections() {
        let temp = TempDir::new().unwrap();
        generator_in(&temp).generate_all().unwrap();

        let page = fs::read_to_string(temp.path().join("markdown/devcontainer.md")).unwrap();

        assert!(page.contains("| [build](#build) | object |"));
        assert!(page.contains("\n### build\n"));
        assert!(page.contains("| [mounts](#mounts-item) | array[object] |"));
        assert!(page.contains("\n### mounts Item\n"));
        assert!(page.contains("| [secrets](#secrets-value) | map[string]object |"));
        assert!(page.contains("\n### secrets Value\n"));
        assert!(page.contains("\n### customizations\n"));
        assert!(page.contains("\n#### vscode\n"));
    }

    #[test]
    fn cleanup_removes_schema_artifacts() {
        let temp = TempDir::new().unwrap();
        generator_in(&temp)
            .with_cleanup_schemas(true)
            .generate_all()
            .unwrap();

        let leftover = fs::read_dir(temp.path().join("schema")).unwrap().count();
        assert_eq!(leftover, 0);
        assert!(temp.path().join("markdown/mount.md").is_file());
    }

    #[test]
    fn failing_type_does_not_affect_others() {
        let temp = TempDir::new().unwrap();
        let types = vec![
            DocumentedType::new("Mount", || schema_for!(devcontainer_docs::model::Mount)),
            DocumentedType::new("../Escape", || schema_for!(devcontainer_docs::model::Secret)),
            DocumentedType::new("Secret", || schema_for!(devcontainer_docs::model::Secret)),
        ];

        let report = generator_in(&temp).with_types(types).generate_all().unwrap();

        assert!(!report.is_success());
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].type_name, "../Escape");
        match &report.failures[0].error {
            DocsError::TypeGeneration { type_name, source } => {
                assert_eq!(type_name, "../Escape");
                assert!(matches!(**source, DocsError::PathEscape { .. }));
            }
            other => panic!("unexpected error: {other}"),
        }

        assert!(temp.path().join("markdown/mount.md").is_file());
        assert!(temp.path().join("markdown/secret.md").is_file());
        assert!(!temp.path().join("escape.md").exists());
        assert!(!temp.path().join("escape.json").exists());

        let index = fs::read_to_string(temp.path().join("markdown/index.md")).unwrap();
        assert!(index.contains("[Mount]"));
        assert!(index.contains("[Secret]"));
        assert!(!index.contains("Escape"));
    }
}

mod single_type {
    use super::*;

    #[test]
    fn generates_by_case_insensitive_name() {
        let temp = TempDir::new().unwrap();
        let path = generator_in(&temp).generate_type_by_name("buildconfig").unwrap();

        assert_eq!(path, temp.path().join("markdown/buildconfig.md"));
        let page = fs::read_to_string(path).unwrap();
        assert!(page.starts_with("# BuildConfig\n"));
        assert!(page.contains("| dockerfile | string |"));
        assert!(page.contains("\n### secrets Item\n"));
    }

    #[test]
    fn unknown_name_is_rejected() {
        let temp = TempDir::new().unwrap();
        let err = generator_in(&temp).generate_type_by_name("Nope").unwrap_err();

        assert!(matches!(err, DocsError::InvalidTypeName(name) if name == "Nope"));
    }
}

mod in_memory {
    use super::*;

    #[test]
    fn renders_without_touching_the_file_system() {
        let temp = TempDir::new().unwrap();
        let documents = generator_in(&temp).generate_in_memory().unwrap();

        assert!(!temp.path().join("markdown").exists());
        assert!(!temp.path().join("schema").exists());
        assert_eq!(documents.type_names(), TypeRegistry::list_type_names());
        assert!(documents.get("devcontainer").unwrap().starts_with("# DevContainer\n"));
        assert!(documents.index.contains("- [Customizations](./customizations.md)\n"));
    }

    #[test]
    fn matches_files_written_to_disk() {
        let temp = TempDir::new().unwrap();
        let generator = generator_in(&temp);

        let documents = generator.generate_in_memory().unwrap();
        let path = generator.generate_type_by_name("WatchConfig").unwrap();

        assert_eq!(
            documents.get("WatchConfig").unwrap(),
            fs::read_to_string(path).unwrap()
        );
    }
}
