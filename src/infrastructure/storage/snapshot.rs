use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use anyhow::{Context, Result};

/// Single-key persistence seam for the serialized store snapshot. The store
/// overwrites the whole payload after every mutation and reads it once at
/// startup; both directions are best-effort for callers.
#[cfg_attr(test, mockall::automock)]
pub trait SnapshotStore: Send {
    /// Returns the last saved payload, or `None` when nothing was ever saved.
    fn load(&self) -> Result<Option<String>>;
    fn save(&self, payload: &str) -> Result<()>;
}

/// Snapshot persisted as a JSON file on disk.
pub struct JsonFileSnapshotStore {
    path: PathBuf,
}

impl JsonFileSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SnapshotStore for JsonFileSnapshotStore {
    fn load(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => {
                Err(err).with_context(|| format!("failed to read {}", self.path.display()))
            }
        }
    }

    fn save(&self, payload: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
        }
        fs::write(&self.path, payload)
            .with_context(|| format!("failed to write {}", self.path.display()))
    }
}

/// Snapshot held in memory. Clones share the same cell, so a store built
/// over a clone sees what an earlier store saved.
#[derive(Clone, Default)]
pub struct MemorySnapshotStore {
    cell: Arc<Mutex<Option<String>>>,
}

impl MemorySnapshotStore {
    fn cell(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.cell.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.cell().clone())
    }

    fn save(&self, payload: &str) -> Result<()> {
        *self.cell() = Some(payload.to_string());
        Ok(())
    }
}
