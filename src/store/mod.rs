//! # Record Store
//!
//! Durable keyed storage of student records, one JSON document per
//! identifier, behind a pluggable [`DocumentBackend`].

pub mod backend;
pub mod errors;
pub mod fs;
pub mod id;
pub mod memory;
pub mod record;
pub mod students;

pub use backend::DocumentBackend;
pub use errors::{StoreError, StoreResult};
pub use fs::FsBackend;
pub use id::IdGenerator;
pub use memory::MemoryBackend;
pub use record::{RecordId, StudentFields, StudentRecord};
pub use students::StudentStore;
