//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::PasskeepError;

/// Read a text file, returning `None` if it doesn't exist
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<Option<String>, PasskeepError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(None);
    }

    fs::read_to_string(path)
        .map(Some)
        .map_err(|e| PasskeepError::Storage(format!("Failed to read {}: {}", path.display(), e)))
}

/// Read JSON from a file, returning a default value if file doesn't exist
pub fn read_json<T, P>(path: P) -> Result<T, PasskeepError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path)
        .map_err(|e| PasskeepError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| PasskeepError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write text to a file atomically (write to temp, then rename)
///
/// The target is either completely replaced or left as it was; a failed
/// write never leaves a truncated file behind.
pub fn write_text_atomic<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), PasskeepError> {
    write_atomic(path.as_ref(), |writer| {
        writer
            .write_all(contents.as_bytes())
            .map_err(|e| PasskeepError::Storage(format!("Failed to write data: {}", e)))
    })
}

/// Write pretty-printed JSON to a file atomically
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), PasskeepError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    write_atomic(path.as_ref(), |writer| {
        serde_json::to_writer_pretty(writer, data)
            .map_err(|e| PasskeepError::Storage(format!("Failed to serialize data: {}", e)))
    })
}

fn write_atomic<F>(path: &Path, write: F) -> Result<(), PasskeepError>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), PasskeepError>,
{
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            PasskeepError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = temp_path_for(path)?;

    let file = File::create(&temp_path)
        .map_err(|e| PasskeepError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    let result = write(&mut writer)
        .and_then(|()| {
            writer
                .flush()
                .map_err(|e| PasskeepError::Storage(format!("Failed to flush data: {}", e)))
        })
        .and_then(|()| {
            writer
                .get_ref()
                .sync_all()
                .map_err(|e| PasskeepError::Storage(format!("Failed to sync data: {}", e)))
        });
    drop(writer);

    if let Err(e) = result {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        PasskeepError::Storage(format!("Failed to rename temp file: {}", e))
    })
}

fn temp_path_for(path: &Path) -> Result<PathBuf, PasskeepError> {
    let file_name = path.file_name().ok_or_else(|| {
        PasskeepError::Storage(format!("Not a file path: {}", path.display()))
    })?;

    let mut temp_name = OsString::from(file_name);
    temp_name.push(".tmp");
    Ok(path.with_file_name(temp_name))
}
