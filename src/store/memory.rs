//! # In-Memory Backend
//!
//! HashMap-backed document store, used by tests and anywhere durability is
//! not required.

use std::collections::HashMap;
use std::sync::RwLock;

use super::backend::DocumentBackend;
use super::errors::{StoreError, StoreResult};

/// In-memory document backend
#[derive(Debug, Default)]
pub struct MemoryBackend {
    documents: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentBackend for MemoryBackend {
    fn write(&self, key: &str, data: &[u8]) -> StoreResult<()> {
        let mut documents = self
            .documents
            .write()
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;
        documents.insert(key.to_string(), data.to_vec());
        Ok(())
    }

    fn read(&self, key: &str) -> StoreResult<Vec<u8>> {
        let documents = self
            .documents
            .read()
            .map_err(|e| StoreError::Io(e.to_string()))?;
        documents
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(key.to_string()))
    }

    fn delete(&self, key: &str) -> StoreResult<()> {
        let mut documents = self
            .documents
            .write()
            .map_err(|e| StoreError::Io(e.to_string()))?;
        documents
            .remove(key)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(key.to_string()))
    }

    fn exists(&self, key: &str) -> StoreResult<bool> {
        let documents = self
            .documents
            .read()
            .map_err(|e| StoreError::Io(e.to_string()))?;
        Ok(documents.contains_key(key))
    }

    fn list(&self) -> StoreResult<Vec<String>> {
        let documents = self
            .documents
            .read()
            .map_err(|e| StoreError::Io(e.to_string()))?;
        Ok(documents.keys().cloned().collect())
    }
}
