//! # Document Backend Trait

use super::errors::StoreResult;

/// Keyed document storage backing the record store.
///
/// One document per key; the collection (directory, bucket, map) is created
/// lazily on first write.
pub trait DocumentBackend: Send + Sync + std::fmt::Debug {
    /// Write a document, overwriting any existing one with the same key
    fn write(&self, key: &str, data: &[u8]) -> StoreResult<()>;

    /// Read the document for a key
    fn read(&self, key: &str) -> StoreResult<Vec<u8>>;

    /// Delete the document for a key
    fn delete(&self, key: &str) -> StoreResult<()>;

    /// Check whether a document exists for a key
    fn exists(&self, key: &str) -> StoreResult<bool>;

    /// List all document keys, in no particular order
    fn list(&self) -> StoreResult<Vec<String>>;
}
