//! Unified path management for fithub files.
//!
//! Paths are resolved via AppPaths from the version-migrate crate, unless a
//! base directory override is given (CLI flag, tests).

use std::path::{Path, PathBuf};
use version_migrate::AppPaths;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Files managed by fithub.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceType {
    /// `config.toml`
    Config,
    /// The durable selection slot, `<slot>.json`
    SelectionSlot,
}

/// Unified path management for fithub.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/fithub/            # Config directory (AppPaths default)
/// └── config.toml              # Wizard configuration
///
/// ~/.local/share/fithub/       # Data directory
/// └── gymSubscription.json     # Durable selection slot
/// ```
///
/// With a base override both files live directly under the override.
#[derive(Debug, Clone, Default)]
pub struct FithubPaths {
    base_override: Option<PathBuf>,
}

impl FithubPaths {
    pub fn new(base_override: Option<PathBuf>) -> Self {
        Self { base_override }
    }

    fn app_paths() -> AppPaths {
        AppPaths::new("fithub")
    }

    /// Returns the directory holding `config.toml`.
    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base_override {
            Some(base) => Ok(base.clone()),
            None => Self::app_paths()
                .config_dir()
                .map_err(|_| PathError::HomeDirNotFound),
        }
    }

    /// Returns the directory holding the selection slot.
    pub fn data_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base_override {
            Some(base) => Ok(base.clone()),
            None => Self::app_paths()
                .data_dir()
                .map_err(|_| PathError::HomeDirNotFound),
        }
    }

    /// Resolves the file for a service. `slot` names the selection slot file.
    pub fn get_path(&self, service: ServiceType, slot: &str) -> Result<PathBuf, PathError> {
        match service {
            ServiceType::Config => Ok(self.config_dir()?.join("config.toml")),
            ServiceType::SelectionSlot => Ok(slot_file(&self.data_dir()?, slot)),
        }
    }
}

/// File name of a storage slot inside `dir`.
pub fn slot_file(dir: &Path, slot: &str) -> PathBuf {
    dir.join(format!("{}.json", slot))
}
