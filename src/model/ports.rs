use schemars::{JsonSchema, schema_for};
use serde::{Deserialize, Serialize};

use crate::docs::{DocumentedType, DocumentedTypeProvider};

/// Additional metadata for a forwarded port.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PortAttributes {
    /// Human-readable label for the port.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Behavior when the port is auto-forwarded (notify, openBrowser, ignore).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_auto_forward: Option<OnAutoForward>,

    /// Network protocol (http/https) for the port.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<PortProtocol>,
}

/// Action taken when a port is forwarded automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum OnAutoForward {
    /// Show a notification.
    Notify,
    /// Open the port in a browser.
    OpenBrowser,
    /// Open the port in a browser the first time only.
    OpenBrowserOnce,
    /// Open the port in the editor preview.
    OpenPreview,
    /// Forward without notifying.
    Silent,
    /// Do not forward.
    Ignore,
}

/// Protocol spoken on a forwarded port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PortProtocol {
    /// Plain HTTP.
    Http,
    /// HTTP over TLS.
    Https,
}

/// A port to forward: a number or a `host:port` string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum ForwardPort {
    /// A port number on localhost.
    Number(u16),
    /// A `host:port_number` string.
    Address(String),
}

impl DocumentedTypeProvider for PortAttributes {
    fn documented_type() -> DocumentedType {
        DocumentedType::new("PortAttributes", || schema_for!(PortAttributes))
    }
}
