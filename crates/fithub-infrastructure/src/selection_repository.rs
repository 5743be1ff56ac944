//! File-backed selection repository.
//!
//! The durable storage slot is a single JSON file. Every save rewrites the
//! whole file through a temporary file and an atomic rename.
//!
//! File location: `{data_dir}/{storage_slot}.json`

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;
use version_migrate::Migrator;

use fithub_core::config::WizardConfig;
use fithub_core::error::{FithubError, Result};
use fithub_core::plan::DEFAULT_BASE_PRICE_PER_MONTH;
use fithub_core::selection::{Selection, SelectionRepository};

use crate::dto::{LegacySelection, SELECTION_ENTITY, create_selection_migrator};
use crate::paths::{FithubPaths, ServiceType, slot_file};

/// Selection repository storing one versioned JSON document.
pub struct FileSelectionRepository {
    path: PathBuf,
    migrator: Migrator,
}

impl FileSelectionRepository {
    /// Creates a repository for `slot` inside `data_dir`.
    pub fn new(data_dir: impl AsRef<Path>, slot: &str) -> Self {
        Self::at_path(slot_file(data_dir.as_ref(), slot))
    }

    /// Creates a repository for an explicit file path.
    pub fn at_path(path: PathBuf) -> Self {
        Self {
            path,
            migrator: create_selection_migrator(),
        }
    }

    /// Creates a repository at the location resolved by `paths`.
    pub fn from_paths(paths: &FithubPaths, config: &WizardConfig) -> Result<Self> {
        let path = paths
            .get_path(ServiceType::SelectionSlot, &config.storage_slot)
            .map_err(|e| FithubError::config(e.to_string()))?;
        Ok(Self::at_path(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn decode(&self, content: &str) -> Result<Selection> {
        let json_value: serde_json::Value = serde_json::from_str(content)?;

        if LegacySelection::matches(&json_value) {
            debug!(path = %self.path.display(), "Reading unversioned selection");
            let legacy: LegacySelection = serde_json::from_value(json_value)?;
            return Ok(Selection::from_persisted(
                legacy.into(),
                DEFAULT_BASE_PRICE_PER_MONTH,
            ));
        }

        Ok(self.migrator.load_flat_from(SELECTION_ENTITY, json_value)?)
    }

    /// Writes `content` to the temp file and renames it over the slot.
    /// The temp file is removed if any step fails.
    fn write_atomic(&self, content: &str) -> std::io::Result<()> {
        let tmp_path = self.temp_path();

        let result = File::create(&tmp_path).and_then(|mut tmp_file| {
            tmp_file.write_all(content.as_bytes())?;
            tmp_file.sync_all()?;
            drop(tmp_file);
            fs::rename(&tmp_path, &self.path)
        });

        if result.is_err() {
            let _ = fs::remove_file(&tmp_path);
        }
        result
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl SelectionRepository for FileSelectionRepository {
    fn load(&self) -> Result<Option<Selection>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            FithubError::io(format!(
                "Failed to read selection file '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        if content.trim().is_empty() {
            return Ok(None);
        }

        self.decode(&content).map(Some)
    }

    fn save(&self, selection: &Selection) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| FithubError::io(format!("Failed to create directory: {}", e)))?;
        }

        // Serialize using migrator (includes version info)
        let serialized = self
            .migrator
            .save_domain_flat(SELECTION_ENTITY, selection.clone())
            .map_err(|e| FithubError::Serialization {
                format: "JSON".to_string(),
                message: format!("Failed to serialize selection: {}", e),
            })?;

        self.write_atomic(&serialized)?;

        debug!(path = %self.path.display(), "Wrote selection slot");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fithub_core::selection::PersistedSelection;
    use tempfile::TempDir;

    #[test]
    fn test_load_none_when_not_exists() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileSelectionRepository::new(temp_dir.path(), "gymSubscription");
        assert!(repo.load().unwrap().is_none());
    }

    #[test]
    fn test_load_none_when_empty() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileSelectionRepository::new(temp_dir.path(), "gymSubscription");
        fs::write(repo.path(), "  \n").unwrap();
        assert!(repo.load().unwrap().is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileSelectionRepository::new(temp_dir.path(), "gymSubscription");

        let selection = Selection::from_persisted(
            PersistedSelection {
                duration_months: Some(12),
                ..PersistedSelection::default()
            },
            DEFAULT_BASE_PRICE_PER_MONTH,
        );
        repo.save(&selection).unwrap();

        assert!(repo.path().ends_with("gymSubscription.json"));
        assert!(!repo.temp_path().exists());
        assert_eq!(repo.load().unwrap(), Some(selection));
    }

    #[test]
    fn test_save_creates_missing_directories() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileSelectionRepository::new(temp_dir.path().join("a").join("b"), "slot");
        repo.save(&Selection::default()).unwrap();
        assert!(repo.path().exists());
    }

    #[test]
    fn test_failed_save_removes_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileSelectionRepository::new(temp_dir.path(), "gymSubscription");
        // A non-empty directory at the slot path makes the rename fail
        fs::create_dir_all(repo.path().join("occupied")).unwrap();

        let err = repo.save(&Selection::default()).unwrap_err();
        assert!(matches!(err, FithubError::Io { .. }), "unexpected error: {}", err);
        assert!(!repo.temp_path().exists());
    }

    #[test]
    fn test_garbage_is_unparseable_state() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileSelectionRepository::new(temp_dir.path(), "gymSubscription");
        fs::write(repo.path(), "{\"plan\": ").unwrap();

        let err = repo.load().unwrap_err();
        assert!(err.is_unparseable_state(), "unexpected error: {}", err);
    }

    #[test]
    fn test_unknown_version_is_unparseable_state() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileSelectionRepository::new(temp_dir.path(), "gymSubscription");
        fs::write(repo.path(), r#"{"version": "9.0.0", "plan": {}}"#).unwrap();

        let err = repo.load().unwrap_err();
        assert!(err.is_unparseable_state(), "unexpected error: {}", err);
    }

    #[test]
    fn test_wrong_field_type_is_unparseable_state() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileSelectionRepository::new(temp_dir.path(), "gymSubscription");
        fs::write(
            repo.path(),
            r#"{"version": "1.1.0", "plan": {"durationMonths": -3}}"#,
        )
        .unwrap();

        let err = repo.load().unwrap_err();
        assert!(err.is_unparseable_state(), "unexpected error: {}", err);
    }

    #[test]
    fn test_reads_legacy_browser_format() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileSelectionRepository::new(temp_dir.path(), "gymSubscription");
        fs::write(
            repo.path(),
            r#"{
                "plan": { "duration": 6, "basePrice": 50, "discount": 0.1 },
                "goal": null,
                "addons": { "yoga": { "price": 25, "selected": true } },
                "user": null,
                "totalPrice": 420
            }"#,
        )
        .unwrap();

        let selection = repo.load().unwrap().unwrap();
        assert_eq!(selection.plan().duration_months(), Some(6));
        assert!((selection.total_price() - 420.0).abs() < 1e-9);
    }
}
