use std::{fs, path::Path};

use tracing::{debug, info};

use super::{ConfigPaths, DocsConfig};
use crate::{DocsToolError, Result};

impl DocsConfig {
    /// Loads the configuration.
    ///
    /// Uses `path` when given, otherwise the first file found by
    /// [`ConfigPaths::discover`], otherwise the built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration file cannot be read
    /// - The TOML content is invalid
    /// - A value is out of range
    pub fn load(path: Option<&Path>) -> Result<DocsConfig> {
        match path.map(Path::to_path_buf).or_else(ConfigPaths::discover) {
            Some(path) => Self::load_from_file(&path),
            None => {
                debug!("No config file found, using defaults");
                Ok(DocsConfig::default())
            }
        }
    }

    /// Loads and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// contains invalid values.
    pub fn load_from_file(path: &Path) -> Result<DocsConfig> {
        let content = fs::read_to_string(path).map_err(|err| DocsToolError::io(err, path))?;
        let config: DocsConfig =
            toml::from_str(&content).map_err(|err| DocsToolError::toml_parse(err, Some(path)))?;

        info!("Loaded config from {}", path.display());
        config.validate()
    }

    /// Parses and validates a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or contains invalid values.
    pub fn from_toml_str(content: &str) -> Result<DocsConfig> {
        let config: DocsConfig =
            toml::from_str(content).map_err(|err| DocsToolError::toml_parse(err, None))?;
        config.validate()
    }

    fn validate(self) -> Result<DocsConfig> {
        if self.render.max_depth == 0 {
            return Err(DocsToolError::InvalidConfigField {
                field: "render.max_depth".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if self.output.docs_dir.as_os_str().is_empty() {
            return Err(DocsToolError::InvalidConfigField {
                field: "output.docs_dir".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(self)
    }
}
