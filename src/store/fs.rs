//! # Filesystem Backend
//!
//! One `<key>.json` file per document inside a data directory. The
//! directory is created on the first write; listing a directory that does
//! not exist yet yields an empty set.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use super::backend::DocumentBackend;
use super::errors::{StoreError, StoreResult};

/// Filesystem document backend
#[derive(Debug)]
pub struct FsBackend {
    dir: PathBuf,
}

impl FsBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn document_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl DocumentBackend for FsBackend {
    fn write(&self, key: &str, data: &[u8]) -> StoreResult<()> {
        fs::create_dir_all(&self.dir).map_err(|e| StoreError::WriteFailed(e.to_string()))?;
        fs::write(self.document_path(key), data)
            .map_err(|e| StoreError::WriteFailed(e.to_string()))
    }

    fn read(&self, key: &str) -> StoreResult<Vec<u8>> {
        fs::read(self.document_path(key)).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                StoreError::NotFound(key.to_string())
            } else {
                StoreError::Io(e.to_string())
            }
        })
    }

    fn delete(&self, key: &str) -> StoreResult<()> {
        fs::remove_file(self.document_path(key)).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                StoreError::NotFound(key.to_string())
            } else {
                StoreError::Io(e.to_string())
            }
        })
    }

    fn exists(&self, key: &str) -> StoreResult<bool> {
        Ok(self.document_path(key).exists())
    }

    fn list(&self) -> StoreResult<Vec<String>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::Io(e.to_string())),
        };

        let mut keys = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| StoreError::Io(e.to_string()))?;
            if let Some(name) = entry.file_name().to_str() {
                if let Some(key) = name.strip_suffix(".json") {
                    keys.push(key.to_string());
                }
            }
        }
        Ok(keys)
    }
}
