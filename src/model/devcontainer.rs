use std::collections::HashMap;

use schemars::{JsonSchema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::docs::{DocumentedType, DocumentedTypeProvider};

use super::{BuildConfig, Customizations, ForwardPort, Mount, PortAttributes, Secret, WatchConfig};

/// Root of a `devcontainer.json` file.
///
/// Describes the image or build used for the container, how the workspace is
/// mounted, lifecycle commands and editor customizations.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DevContainer {
    /// URL of the JSON schema that describes the format of this file.
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Name of the dev container.
    pub name: String,

    /// Docker image to use for the dev container.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Configuration for building the image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build: Option<BuildConfig>,

    /// List of Docker Compose files to use.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub docker_compose_file: Vec<String>,

    /// Specific service to run from Docker Compose.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,

    /// Path to the workspace folder inside the container.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_folder: Option<String>,

    /// Mount type for the workspace folder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_mount: Option<String>,

    /// User to use inside the container.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_user: Option<String>,

    /// Command to detect the default user inside the container.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_env_probe: Option<UserEnvProbe>,

    /// Environment variables to set in the container.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub container_env: HashMap<String, String>,

    /// Environment variables for remote connections (like SSH).
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub remote_env: HashMap<String, String>,

    /// Ports that are forwarded from the container to the local machine.
    /// Can be an integer port number, or a string of the format "host:port_number".
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub forward_ports: Vec<ForwardPort>,

    /// Additional attributes for forwarded ports.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub ports_attributes: HashMap<String, PortAttributes>,

    /// Default attributes applied to all forwarded ports not defined in portsAttributes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_ports_attributes: Option<PortAttributes>,

    /// Mount points inside the container.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mounts: Vec<Mount>,

    /// Additional arguments to pass to 'docker run'.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub run_args: Vec<String>,

    /// Command to run on container startup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub startup_command: Option<String>,

    /// Command to run inside the container instead of the default CMD.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    /// Entrypoint to override in the container.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entrypoint: Option<String>,

    /// Whether to run an init process inside the container.
    #[serde(default)]
    pub init: bool,

    /// Run the container in privileged mode.
    #[serde(default)]
    pub privileged: bool,

    /// Linux capabilities to add to the container.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cap_add: Vec<String>,

    /// Linux capabilities to drop from the container.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cap_drop: Vec<String>,

    /// Security options for the container.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub security_opt: Vec<String>,

    /// Devices to expose to the container.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub devices: Vec<String>,

    /// Order to install features inside the container, overriding defaults.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub override_feature_install_order: Vec<String>,

    /// Features to install in the container and their options.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub features: HashMap<String, HashMap<String, Value>>,

    /// Command to run after the container is created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_create_command: Option<String>,

    /// Command to run after the container is created and initialized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_create_command: Option<String>,

    /// Command to run after the container starts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_start_command: Option<String>,

    /// Command to run after attaching to the container.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_attach_command: Option<String>,

    /// Configuration for files/processes to watch for restarts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watch: Option<WatchConfig>,

    /// Editor/IDE customizations inside the container.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customizations: Option<Customizations>,

    /// Secrets to pass to the container.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub secrets: HashMap<String, Secret>,

    /// Action to take when the container is stopped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shutdown_action: Option<ShutdownAction>,
}

/// How the user environment is probed inside the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum UserEnvProbe {
    /// Do not probe.
    None,
    /// Use a login shell.
    LoginShell,
    /// Use an interactive login shell.
    LoginInteractiveShell,
    /// Use an interactive shell.
    InteractiveShell,
}

/// What happens to the container when the editor window closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum ShutdownAction {
    /// Leave everything running.
    None,
    /// Stop the container.
    StopContainer,
    /// Stop the whole Docker Compose project.
    StopCompose,
}

impl DocumentedTypeProvider for DevContainer {
    fn documented_type() -> DocumentedType {
        DocumentedType::new("DevContainer", || schema_for!(DevContainer))
    }
}
