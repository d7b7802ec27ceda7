//! rosterdb - A minimal, file-backed student record service
//!
//! Two components: a record store ([`store`]) persisting one JSON document
//! per student record, and an HTTP layer ([`http_server`]) mapping verbs
//! and paths onto store operations.

pub mod cli;
pub mod http_server;
pub mod store;
