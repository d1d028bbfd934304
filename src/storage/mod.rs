//! Storage layer for passkeep
//!
//! Holds the in-memory [`AccountStore`] behind a lock and moves it to and from
//! the flat store file. Saves go through an atomic temp-file rename.

pub mod file_io;
pub mod format;

pub use file_io::{read_json, read_text, write_json_atomic, write_text_atomic};
pub use format::{deserialize, serialize, ParsedStore, CATEGORY_PREFIX};

use std::path::{Path, PathBuf};
use std::sync::{Mutex, RwLock};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::{PasskeepPaths, Settings};
use crate::error::{PasskeepError, PasskeepResult};
use crate::models::AccountStore;

/// What a call to [`Storage::load`] found on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadReport {
    /// False when the store file didn't exist
    pub file_found: bool,
    pub categories: usize,
    pub accounts: usize,
    pub skipped_lines: usize,
}

#[derive(Debug, Default)]
struct StoreState {
    store: AccountStore,
    dirty: bool,
}

/// Owns the credential store, its file location and the audit log
///
/// Every mutation goes through a single exclusive lock.
pub struct Storage {
    store_path: PathBuf,
    state: RwLock<StoreState>,
    audit: Option<AuditLogger>,
    audit_warnings: Mutex<Vec<String>>,
}

impl Storage {
    /// Create a storage over `store_path`; pass `None` to disable auditing
    pub fn new(store_path: PathBuf, audit: Option<AuditLogger>) -> Self {
        Self {
            store_path,
            state: RwLock::new(StoreState::default()),
            audit,
            audit_warnings: Mutex::new(Vec::new()),
        }
    }

    /// Create storage from the configured paths
    ///
    /// `store_override` replaces the default `accounts.txt` location.
    pub fn from_config(
        paths: &PasskeepPaths,
        settings: &Settings,
        store_override: Option<PathBuf>,
    ) -> PasskeepResult<Self> {
        paths.ensure_directories()?;

        let audit = settings
            .audit_enabled
            .then(|| AuditLogger::new(paths.audit_log()));
        let store_path = store_override.unwrap_or_else(|| paths.store_file());

        Ok(Self::new(store_path, audit))
    }

    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    pub fn audit_logger(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Replace the in-memory store with the contents of the store file
    ///
    /// A missing file is not an error and leaves the store as it is. On a
    /// read failure the store is left unchanged.
    pub fn load(&self) -> PasskeepResult<LoadReport> {
        let Some(text) = read_text(&self.store_path)? else {
            return Ok(LoadReport::default());
        };

        let parsed = deserialize(&text);
        let report = LoadReport {
            file_found: true,
            categories: parsed.store.category_count(),
            accounts: parsed.store.account_count(),
            skipped_lines: parsed.skipped_lines,
        };

        let mut state = self.state.write().map_err(|e| {
            PasskeepError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        state.store = parsed.store;
        state.dirty = false;

        Ok(report)
    }

    /// Overwrite the store file with the current contents
    pub fn save(&self) -> PasskeepResult<()> {
        let mut state = self.state.write().map_err(|e| {
            PasskeepError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        write_text_atomic(&self.store_path, &serialize(&state.store))?;
        state.dirty = false;
        Ok(())
    }

    /// Run a read-only closure against the store
    pub fn read<T>(&self, f: impl FnOnce(&AccountStore) -> T) -> PasskeepResult<T> {
        let state = self.state.read().map_err(|e| {
            PasskeepError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(f(&state.store))
    }

    /// Run a mutating closure against the store
    ///
    /// The store is marked as having unsaved changes only if `f` succeeds.
    pub fn write<T>(
        &self,
        f: impl FnOnce(&mut AccountStore) -> PasskeepResult<T>,
    ) -> PasskeepResult<T> {
        let mut state = self.state.write().map_err(|e| {
            PasskeepError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let value = f(&mut state.store)?;
        state.dirty = true;
        Ok(value)
    }

    /// Whether the store changed since the last load or save
    pub fn has_unsaved_changes(&self) -> PasskeepResult<bool> {
        let state = self.state.read().map_err(|e| {
            PasskeepError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(state.dirty)
    }

    /// Append an entry to the audit log, if auditing is enabled
    ///
    /// The change being recorded has already been applied, so a failed write
    /// is kept as a warning (see [`Storage::take_audit_warnings`]) instead of
    /// being returned as an error.
    pub fn log(&self, entry: AuditEntry) {
        let Some(logger) = &self.audit else {
            return;
        };

        if let Err(e) = logger.log(&entry) {
            if let Ok(mut warnings) = self.audit_warnings.lock() {
                warnings.push(format!("Audit log not updated: {}", e));
            }
        }
    }

    /// Drain warnings collected from failed audit writes
    pub fn take_audit_warnings(&self) -> PasskeepResult<Vec<String>> {
        let mut warnings = self.audit_warnings.lock().map_err(|e| {
            PasskeepError::Storage(format!("Failed to acquire audit warning lock: {}", e))
        })?;

        Ok(std::mem::take(&mut *warnings))
    }
}
