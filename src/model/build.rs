use std::collections::HashMap;

use schemars::{JsonSchema, schema_for};
use serde::{Deserialize, Serialize};

use crate::docs::{DocumentedType, DocumentedTypeProvider};

/// Parameters for building a dev container image.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    /// Path to the Dockerfile to use for building the image.
    pub dockerfile: String,

    /// Build context directory.
    #[serde(default = "default_context")]
    pub context: String,

    /// Build arguments as key-value pairs.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub args: HashMap<String, String>,

    /// Target stage for multi-stage Docker builds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    /// List of images to cache from.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cache_from: Vec<String>,

    /// Output location of the build.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    /// SSH mount sources to use during build.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ssh: Vec<String>,

    /// Secrets to pass to the build process.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub secrets: Vec<BuildSecret>,
}

/// A secret made available during the image build.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BuildSecret {
    /// Identifier for the secret.
    pub id: String,

    /// Path or source of the secret.
    pub src: String,
}

fn default_context() -> String {
    ".".to_string()
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            dockerfile: "Dockerfile".to_string(),
            context: default_context(),
            args: HashMap::new(),
            target: None,
            cache_from: Vec::new(),
            output: None,
            ssh: Vec::new(),
            secrets: Vec::new(),
        }
    }
}

impl DocumentedTypeProvider for BuildConfig {
    fn documented_type() -> DocumentedType {
        DocumentedType::new("BuildConfig", || schema_for!(BuildConfig))
    }
}
