use schemars::{JsonSchema, schema_for};
use serde::{Deserialize, Serialize};

use crate::docs::{DocumentedType, DocumentedTypeProvider};

/// A reusable secret for builds or runtime.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Secret {
    /// Human-readable description of the secret.
    pub description: String,

    /// Default value for the secret if none is provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl DocumentedTypeProvider for Secret {
    fn documented_type() -> DocumentedType {
        DocumentedType::new("Secret", || schema_for!(Secret))
    }
}
