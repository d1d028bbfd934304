//! Path management for passkeep
//!
//! ## Path Resolution Order
//!
//! 1. `PASSKEEP_DATA_DIR` environment variable (if set)
//! 2. The platform config directory joined with `passkeep`
//!    (`~/.config/passkeep` on Linux, `%APPDATA%\passkeep` on Windows)

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::PasskeepError;

/// Manages all paths used by passkeep
#[derive(Debug, Clone)]
pub struct PasskeepPaths {
    /// Base directory for all passkeep data
    base_dir: PathBuf,
}

impl PasskeepPaths {
    /// Create a new PasskeepPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and
    /// `PASSKEEP_DATA_DIR` is not set.
    pub fn new() -> Result<Self, PasskeepError> {
        let base_dir = if let Ok(custom) = std::env::var("PASSKEEP_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create PasskeepPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the credential store (accounts.txt)
    pub fn store_file(&self) -> PathBuf {
        self.base_dir.join("accounts.txt")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), PasskeepError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PasskeepError::Io(format!("Failed to create base directory: {}", e)))
    }
}

fn resolve_default_path() -> Result<PathBuf, PasskeepError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| PasskeepError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join("passkeep"))
}
