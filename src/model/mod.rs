//! Dev container configuration model.
//!
//! These types mirror the `devcontainer.json` format. Each top-level type
//! derives [`JsonSchema`](schemars::JsonSchema) and implements
//! [`DocumentedTypeProvider`](crate::docs::DocumentedTypeProvider) so it
//! gets its own documentation page.

mod build;
mod customizations;
mod devcontainer;
mod mount;
mod ports;
mod secret;
mod watch;

pub use build::{BuildConfig, BuildSecret};
pub use customizations::{
    CodespacesCustomization, Customizations, JetBrainsCustomization, NeovimCustomization,
    VsCodeCustomization,
};
pub use devcontainer::{DevContainer, ShutdownAction, UserEnvProbe};
pub use mount::{Mount, MountConsistency, MountType};
pub use ports::{ForwardPort, OnAutoForward, PortAttributes, PortProtocol};
pub use secret::Secret;
pub use watch::WatchConfig;
