//! # Student Record Store
//!
//! CRUD, listing, and the duplicate-name check over a [`DocumentBackend`].
//! The store exclusively owns the persisted representation; request
//! handlers never touch the backend directly.
//!
//! Creates are serialized behind a store-wide mutex so the duplicate-name
//! check and the subsequent write act as one step. Every other operation is
//! a single backend call and relies on the medium's own atomicity for that
//! call; concurrent writes to the same identifier are last-write-wins.

use std::sync::Mutex;

use super::backend::DocumentBackend;
use super::errors::{StoreError, StoreResult};
use super::id::IdGenerator;
use super::record::{RecordId, StudentFields, StudentRecord};

/// Keyed store of student records
#[derive(Debug)]
pub struct StudentStore<B: DocumentBackend> {
    backend: B,
    ids: IdGenerator,
    create_lock: Mutex<()>,
}

impl<B: DocumentBackend> StudentStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            ids: IdGenerator::new(),
            create_lock: Mutex::new(()),
        }
    }

    /// Create a new record with a freshly generated identifier.
    ///
    /// Fails with [`StoreError::DuplicateName`] when a record with the same
    /// case-insensitive name pair already exists, and with
    /// [`StoreError::WriteFailed`] when the medium rejects the write.
    pub fn create(&self, fields: StudentFields) -> StoreResult<RecordId> {
        let _guard = self
            .create_lock
            .lock()
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;

        if let (Some(first), Some(last)) = (&fields.first_name, &fields.last_name) {
            if self.exists_by_name(first, last)? {
                return Err(StoreError::DuplicateName {
                    first_name: first.clone(),
                    last_name: last.clone(),
                });
            }
        }

        let record_id = self.ids.next_id();
        self.persist(&StudentRecord::new(record_id, fields))?;
        Ok(record_id)
    }

    /// Scan all stored records for a case-insensitive name match
    pub fn exists_by_name(&self, first_name: &str, last_name: &str) -> StoreResult<bool> {
        for key in self.backend.list()? {
            // A record that fails to parse cannot match; skip it here and
            // let list_all surface the corruption.
            if let Ok(record) = self.load(&key) {
                if record.fields.name_matches(first_name, last_name) {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }

    /// Fetch a single record by identifier
    pub fn get(&self, record_id: RecordId) -> StoreResult<StudentRecord> {
        self.load(&record_id.key())
    }

    /// Fetch every stored record, in no particular order.
    ///
    /// Short-circuits with [`StoreError::Corrupted`] on the first document
    /// that fails to parse.
    pub fn list_all(&self) -> StoreResult<Vec<StudentRecord>> {
        let keys = self.backend.list()?;
        let mut records = Vec::with_capacity(keys.len());
        for key in keys {
            records.push(self.load(&key)?);
        }
        Ok(records)
    }

    /// Fully overwrite the record for an existing identifier.
    ///
    /// Fields absent from `fields` are not merged; earlier values are lost.
    pub fn replace(&self, record_id: RecordId, fields: StudentFields) -> StoreResult<()> {
        if !self.backend.exists(&record_id.key())? {
            return Err(StoreError::NotFound(record_id.key()));
        }
        self.persist(&StudentRecord::new(record_id, fields))
    }

    /// Remove the record for an identifier
    pub fn delete(&self, record_id: RecordId) -> StoreResult<()> {
        self.backend.delete(&record_id.key())
    }

    fn persist(&self, record: &StudentRecord) -> StoreResult<()> {
        let data = serde_json::to_vec_pretty(record)
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;
        self.backend.write(&record.record_id.key(), &data)
    }

    fn load(&self, key: &str) -> StoreResult<StudentRecord> {
        let data = self.backend.read(key)?;
        serde_json::from_slice(&data).map_err(|e| StoreError::Corrupted {
            key: key.to_string(),
            reason: e.to_string(),
        })
    }
}
