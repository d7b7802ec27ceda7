//! # HTTP Server Module
//!
//! Request handler layer: maps HTTP verbs and paths to record store
//! operations and translates outcomes into status/body pairs.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `POST /students` - Create a record
//! - `GET /students` - List all records
//! - `GET /students/:record_id` - Fetch one record
//! - `PUT /students/:record_id` - Fully replace a record
//! - `DELETE /students/:record_id` - Delete a record

pub mod config;
pub mod server;
pub mod student_routes;

pub use config::{ConfigError, HttpServerConfig};
pub use server::HttpServer;
pub use student_routes::{student_routes, StudentState};
