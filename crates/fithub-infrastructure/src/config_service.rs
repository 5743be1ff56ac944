//! Loads the wizard configuration from `config.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use fithub_core::config::WizardConfig;
use fithub_core::error::{FithubError, Result};

use crate::paths::{FithubPaths, ServiceType};

/// Reads `config.toml`, falling back to defaults when the file is absent.
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Creates a service for the config file resolved by `paths`.
    pub fn from_paths(paths: &FithubPaths) -> Result<Self> {
        // The slot name does not influence the config path.
        let path = paths
            .get_path(ServiceType::Config, "")
            .map_err(|e| FithubError::config(e.to_string()))?;
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads and validates the configuration.
    pub fn load(&self) -> Result<WizardConfig> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No config file, using defaults");
            return Ok(WizardConfig::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            FithubError::io(format!(
                "Failed to read config file '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        let config: WizardConfig = toml::from_str(&content).map_err(|e| {
            FithubError::config(format!(
                "Failed to parse config file '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }
}
