//! User settings for passkeep
//!
//! Manages user preferences such as the default generated password length
//! and whether mutations are recorded in the audit log.

use serde::{Deserialize, Serialize};

use super::paths::PasskeepPaths;
use crate::error::PasskeepError;
use crate::services::password::DEFAULT_LENGTH;
use crate::storage::file_io::{read_json, write_json_atomic};

/// User settings for passkeep
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Length used when generating a password without an explicit length
    #[serde(default = "default_password_length")]
    pub password_length: usize,

    /// Whether create/update/delete operations are appended to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_password_length() -> usize {
    DEFAULT_LENGTH
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            password_length: default_password_length(),
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &PasskeepPaths) -> Result<Self, PasskeepError> {
        read_json(paths.settings_file()).map_err(|e| {
            PasskeepError::Config(format!("Failed to load settings: {}", e))
        })
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PasskeepPaths) -> Result<(), PasskeepError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.password_length, 12);
        assert!(settings.audit_enabled);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PasskeepPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.password_length, 12);
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PasskeepPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            password_length: 30,
            audit_enabled: false,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.password_length, 30);
        assert!(!loaded.audit_enabled);
    }

    #[test]
    fn test_partial_file_uses_field_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PasskeepPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"password_length": 20}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.password_length, 20);
        assert!(loaded.audit_enabled);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PasskeepPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, PasskeepError::Config(_)));
    }
}
