use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::debug;

use fithub_core::selection::SelectionStore;
use fithub_infrastructure::{ConfigService, FileSelectionRepository, FithubPaths};

/// Builds the store for one CLI invocation: config, slot, then restore.
pub fn open_store(data_dir: Option<PathBuf>) -> Result<SelectionStore> {
    let paths = FithubPaths::new(data_dir);

    let config = ConfigService::from_paths(&paths)
        .and_then(|service| service.load())
        .context("Failed to load configuration")?;

    let repository = FileSelectionRepository::from_paths(&paths, &config)
        .context("Failed to resolve selection storage")?;
    debug!(path = %repository.path().display(), "Using selection slot");

    Ok(SelectionStore::restore(Arc::new(repository), config))
}
