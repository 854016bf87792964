// SPDX-License-Identifier: MPL-2.0
//! Visitor-local key/value storage using CBOR format.
//!
//! This holds small pieces of state the visitor changes from the UI (such as
//! the accent color), kept apart from the hand-editable `settings.toml`.
//! Every write goes straight to disk.
//!
//! # Path Resolution
//!
//! 1. Use [`LocalStorage::open_in`] with an explicit directory
//! 2. Set `FOLIO_DATA_DIR` environment variable
//! 3. Falls back to platform-specific data directory

use super::paths;
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// Storage file name within the app data directory.
const STORAGE_FILE: &str = "storage.cbor";

/// String map persisted as a CBOR file.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage {
    /// Backing file; `None` keeps everything in memory.
    path: Option<PathBuf>,
    entries: BTreeMap<String, String>,
}

impl LocalStorage {
    /// Opens the storage file in `base_dir`, or the default data directory.
    ///
    /// Returns the storage and an optional warning. An unreadable file yields
    /// empty storage plus a warning; the next write replaces it.
    #[must_use]
    pub fn open_in(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = paths::get_app_data_dir_with_override(base_dir).map(|mut dir| {
            dir.push(STORAGE_FILE);
            dir
        }) else {
            log::warn!("No data directory available; local storage is kept in memory");
            return (Self::in_memory(), None);
        };

        Self::open_file(path)
    }

    /// Opens the storage backed by exactly `path`.
    #[must_use]
    pub fn open_file(path: PathBuf) -> (Self, Option<String>) {
        if !path.exists() {
            return (
                Self {
                    path: Some(path),
                    entries: BTreeMap::new(),
                },
                None,
            );
        }

        match read_entries(&path) {
            Ok(entries) => (
                Self {
                    path: Some(path),
                    entries,
                },
                None,
            ),
            Err(err) => {
                log::warn!("Ignoring unreadable local storage {}: {err}", path.display());
                (
                    Self {
                        path: Some(path),
                        entries: BTreeMap::new(),
                    },
                    Some("Saved preferences could not be read and were reset.".to_string()),
                )
            }
        }
    }

    /// Storage that never touches the filesystem.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Stores `value` under `key` and writes the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written. The in-memory value is
    /// updated regardless.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        self.entries.insert(key.to_string(), value.into());
        self.flush()
    }

    fn flush(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let writer = BufWriter::new(fs::File::create(path)?);
        ciborium::into_writer(&self.entries, writer)
            .map_err(|err| Error::Storage(err.to_string()))
    }
}

fn read_entries(path: &Path) -> Result<BTreeMap<String, String>> {
    let reader = BufReader::new(fs::File::open(path)?);
    ciborium::from_reader(reader).map_err(|err| Error::Storage(err.to_string()))
}
