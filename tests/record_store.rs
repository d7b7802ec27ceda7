//! Record store integration tests over the filesystem backend.
//!
//! Covers the durable path end to end: round-trips, uniqueness, not-found
//! symmetry, listing completeness, and corruption handling.

use std::fs;

use tempfile::TempDir;

use rosterdb::store::{FsBackend, RecordId, StoreError, StudentFields, StudentStore};

fn fields(first: &str, last: &str, gpa: f64, enrolled: bool) -> StudentFields {
    StudentFields {
        first_name: Some(first.to_string()),
        last_name: Some(last.to_string()),
        gpa: Some(gpa),
        enrolled: Some(enrolled),
    }
}

fn open_store(temp: &TempDir) -> StudentStore<FsBackend> {
    StudentStore::new(FsBackend::new(temp.path().join("students")))
}

#[test]
fn round_trip_survives_reopen() {
    let temp = TempDir::new().unwrap();
    let id = {
        let store = open_store(&temp);
        store.create(fields("John", "Doe", 3.0, true)).unwrap()
    };

    // A fresh store over the same directory sees the document.
    let store = open_store(&temp);
    let record = store.get(id).unwrap();
    assert_eq!(record.record_id, id);
    assert_eq!(record.fields.first_name.as_deref(), Some("John"));
    assert_eq!(record.fields.last_name.as_deref(), Some("Doe"));
    assert_eq!(record.fields.gpa, Some(3.0));
    assert_eq!(record.fields.enrolled, Some(true));
}

#[test]
fn one_document_per_record_named_by_id() {
    let temp = TempDir::new().unwrap();
    let store = open_store(&temp);
    let id = store.create(fields("John", "Doe", 3.0, true)).unwrap();

    let path = temp.path().join("students").join(format!("{}.json", id));
    assert!(path.exists());

    let doc: serde_json::Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
    assert_eq!(doc["record_id"], id.as_i64());
    assert_eq!(doc["first_name"], "John");
}

#[test]
fn rapid_creates_get_distinct_identifiers() {
    let temp = TempDir::new().unwrap();
    let store = open_store(&temp);

    let mut ids = Vec::new();
    for i in 0..50 {
        ids.push(
            store
                .create(fields(&format!("Student{}", i), "Rapid", 3.0, true))
                .unwrap(),
        );
    }

    let mut unique = ids.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), ids.len());
    assert_eq!(store.list_all().unwrap().len(), 50);
}

#[test]
fn duplicate_name_is_rejected_without_persisting() {
    let temp = TempDir::new().unwrap();
    let store = open_store(&temp);
    store.create(fields("John", "Doe", 3.0, true)).unwrap();

    let result = store.create(fields("jOhN", "dOe", 2.0, false));
    assert!(matches!(result, Err(StoreError::DuplicateName { .. })));

    let docs = fs::read_dir(temp.path().join("students")).unwrap().count();
    assert_eq!(docs, 1);
}

#[test]
fn uniqueness_not_enforced_on_replace() {
    let temp = TempDir::new().unwrap();
    let store = open_store(&temp);
    store.create(fields("John", "Doe", 3.0, true)).unwrap();
    let id = store.create(fields("Jane", "Doe", 3.5, true)).unwrap();

    // Renaming Jane to John via replace is allowed.
    store.replace(id, fields("John", "Doe", 3.5, true)).unwrap();
    assert_eq!(store.list_all().unwrap().len(), 2);
}

#[test]
fn not_found_symmetry_for_unknown_id() {
    let temp = TempDir::new().unwrap();
    let store = open_store(&temp);
    let id = RecordId::from(424242);

    assert!(store.get(id).unwrap_err().is_not_found());
    assert!(store
        .replace(id, StudentFields::default())
        .unwrap_err()
        .is_not_found());
    assert!(store.delete(id).unwrap_err().is_not_found());
}

#[test]
fn delete_then_get_is_always_not_found() {
    let temp = TempDir::new().unwrap();
    let store = open_store(&temp);
    let id = store.create(fields("John", "Doe", 3.0, true)).unwrap();

    store.delete(id).unwrap();
    assert!(store.get(id).unwrap_err().is_not_found());
    assert!(store.get(id).unwrap_err().is_not_found());
}

#[test]
fn corrupt_document_surfaces_as_corrupted() {
    let temp = TempDir::new().unwrap();
    let store = open_store(&temp);
    store.create(fields("John", "Doe", 3.0, true)).unwrap();

    fs::write(temp.path().join("students").join("999.json"), b"{ broken").unwrap();

    assert!(matches!(
        store.list_all(),
        Err(StoreError::Corrupted { .. })
    ));

    // The duplicate check skips the corrupt document instead of failing.
    assert!(store.exists_by_name("John", "Doe").unwrap());
    assert!(!store.exists_by_name("Jane", "Doe").unwrap());
}
