use schemars::{JsonSchema, schema_for};
use serde::{Deserialize, Serialize};

use crate::docs::{DocumentedType, DocumentedTypeProvider};

/// A filesystem or volume mount for the container.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Mount {
    /// Type of mount (e.g., bind, volume).
    #[serde(rename = "type")]
    pub mount_type: MountType,

    /// Source path of the mount.
    pub source: String,

    /// Target path inside the container.
    pub target: String,

    /// Consistency mode for the mount (e.g., cached, delegated, consistent).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consistency: Option<MountConsistency>,

    /// Whether the mount is read-only.
    #[serde(default)]
    pub readonly: bool,
}

/// Kind of mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum MountType {
    /// A host path bound into the container.
    Bind,
    /// A named Docker volume.
    Volume,
}

/// File sharing consistency for bind mounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum MountConsistency {
    /// The host view is authoritative.
    Cached,
    /// The container view is authoritative.
    Delegated,
    /// Host and container are always identical.
    Consistent,
}

impl DocumentedTypeProvider for Mount {
    fn documented_type() -> DocumentedType {
        DocumentedType::new("Mount", || schema_for!(Mount))
    }
}
