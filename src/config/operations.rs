//! Config loading, discovery and validation.

use super::model::{CONFIG_FILE_NAME, Config};
use crate::error::{Result, TmplError};
use log::debug;
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(TmplError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            TmplError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Find the config to use.
    ///
    /// An explicit path must exist. Without one, `.tmplfill.yaml` in `dir`
    /// is used when present, and defaults otherwise.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            debug!("loading config from {}", path.display());
            return Self::load(path);
        }

        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            debug!("loading config from {}", candidate.display());
            return Self::load(candidate);
        }

        Ok(Self::default())
    }

    /// Parse config from a YAML string.
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| TmplError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    ///
    /// - `default_output` must be non-empty
    /// - preset value names must be non-empty
    pub fn validate(&self) -> Result<()> {
        if self.default_output.trim().is_empty() {
            return Err(TmplError::UserError(
                "config validation failed: default_output must not be empty".to_string(),
            ));
        }

        if self.values.keys().any(|name| name.trim().is_empty()) {
            return Err(TmplError::UserError(
                "config validation failed: values must not contain an empty name".to_string(),
            ));
        }

        Ok(())
    }
}
