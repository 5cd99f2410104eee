use schemars::{JsonSchema, schema_for};
use serde::{Deserialize, Serialize};

use crate::docs::{DocumentedType, DocumentedTypeProvider};

/// Controls which files or processes trigger restarts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WatchConfig {
    /// List of processes or files to wait for before starting.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub wait_for: Vec<String>,

    /// List of files or events that trigger a restart.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub restart: Vec<String>,
}

impl DocumentedTypeProvider for WatchConfig {
    fn documented_type() -> DocumentedType {
        DocumentedType::new("WatchConfig", || schema_for!(WatchConfig))
    }
}
