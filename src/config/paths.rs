use std::{env, path::PathBuf};

/// Name of the config file looked up in the current directory.
const LOCAL_CONFIG_FILE: &str = "devcontainer-docs.toml";

/// Utility struct for locating configuration files
///
/// Follows the XDG Base Directory specification for the per-user file.
pub struct ConfigPaths;

impl ConfigPaths {
    /// Returns the per-user configuration directory
    ///
    /// - First checks `XDG_CONFIG_HOME`
    /// - Falls back to `$HOME/.config`
    /// - Appends "devcontainer-docs" to the base config directory
    ///
    /// Returns `None` if neither environment variable is set.
    pub fn config_dir() -> Option<PathBuf> {
        env::var("XDG_CONFIG_HOME")
            .or_else(|_| env::var("HOME").map(|home| format!("{home}/.config")))
            .ok()
            .map(|config_home| PathBuf::from(config_home).join("devcontainer-docs"))
    }

    /// Path of the config file in the current working directory
    pub fn local_config() -> PathBuf {
        PathBuf::from(LOCAL_CONFIG_FILE)
    }

    /// Path of the per-user config file, if a config directory can be determined
    pub fn user_config() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns the first existing config file: local first, then per-user
    pub fn discover() -> Option<PathBuf> {
        std::iter::once(Self::local_config())
            .chain(Self::user_config())
            .find(|path| path.is_file())
    }
}
