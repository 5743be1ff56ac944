//! Selection repository trait.

use std::sync::Mutex;

use super::model::Selection;
use crate::error::{FithubError, Result};

/// Durable storage slot for the selection.
///
/// The slot holds exactly one selection; every save fully overwrites it.
pub trait SelectionRepository: Send + Sync {
    /// Reads the stored selection.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet and an error when
    /// stored content cannot be turned back into a selection.
    fn load(&self) -> Result<Option<Selection>>;

    /// Overwrites the slot with `selection`.
    fn save(&self, selection: &Selection) -> Result<()>;
}

/// Repository that keeps the slot in memory.
///
/// Used for embedding the store without a filesystem and in tests.
#[derive(Debug, Default)]
pub struct InMemorySelectionRepository {
    slot: Mutex<Option<Selection>>,
}

impl InMemorySelectionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository whose slot already holds `selection`.
    pub fn with_selection(selection: Selection) -> Self {
        Self {
            slot: Mutex::new(Some(selection)),
        }
    }
}

impl SelectionRepository for InMemorySelectionRepository {
    fn load(&self) -> Result<Option<Selection>> {
        let slot = self
            .slot
            .lock()
            .map_err(|e| FithubError::internal(format!("Selection slot poisoned: {}", e)))?;
        Ok(slot.clone())
    }

    fn save(&self, selection: &Selection) -> Result<()> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|e| FithubError::internal(format!("Selection slot poisoned: {}", e)))?;
        *slot = Some(selection.clone());
        Ok(())
    }
}
