use std::collections::HashMap;

use schemars::{JsonSchema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::docs::{DocumentedType, DocumentedTypeProvider};

/// Editor or IDE specific configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct Customizations {
    /// VS Code specific customizations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vscode: Option<VsCodeCustomization>,

    /// Codespaces specific customizations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codespaces: Option<CodespacesCustomization>,

    /// JetBrains IDE specific customizations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jetbrains: Option<JetBrainsCustomization>,

    /// Neovim specific customizations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neovim: Option<NeovimCustomization>,
}

/// VS Code settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VsCodeCustomization {
    /// Key-value settings for VS Code.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub settings: HashMap<String, Value>,

    /// List of VS Code extensions to install.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extensions: Vec<String>,

    /// Remote user for VS Code container setup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_user: Option<String>,
}

/// GitHub Codespaces settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct CodespacesCustomization {
    /// Key-value settings for Codespaces.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub settings: HashMap<String, Value>,

    /// List of Codespaces extensions to install.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extensions: Vec<String>,
}

/// JetBrains IDE configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct JetBrainsCustomization {
    /// List of JetBrains plugins to install.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<String>,
}

/// Neovim configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct NeovimCustomization {
    /// List of Neovim plugins to install.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<String>,
}

impl DocumentedTypeProvider for Customizations {
    fn documented_type() -> DocumentedType {
        DocumentedType::new("Customizations", || schema_for!(Customizations))
    }
}
