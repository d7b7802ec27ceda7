//! # Student HTTP Routes
//!
//! CRUD endpoints over the record store. Every store failure is converted
//! to a status/body pair here; nothing propagates past the handlers.
//!
//! Path identifiers arrive as opaque strings. A segment that does not parse
//! as an identifier can never name a stored record, so it takes the same
//! not-found path as a missing one, and error bodies echo the segment back
//! exactly as it was given.

use std::path::Path as FsPath;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::store::{
    DocumentBackend, FsBackend, RecordId, StoreError, StudentFields, StudentRecord, StudentStore,
};

// ==================
// Shared State
// ==================

/// Student state shared across handlers
#[derive(Debug)]
pub struct StudentState<B: DocumentBackend> {
    pub store: StudentStore<B>,
}

impl<B: DocumentBackend> StudentState<B> {
    pub fn new(backend: B) -> Self {
        Self {
            store: StudentStore::new(backend),
        }
    }
}

impl StudentState<FsBackend> {
    pub fn with_data_dir(data_dir: &FsPath) -> Self {
        Self::new(FsBackend::new(data_dir))
    }
}

// ==================
// Response Types
// ==================

#[derive(Debug, Serialize)]
pub struct IdMessageResponse {
    pub record_id: RecordId,
    pub message: String,
}

impl IdMessageResponse {
    fn new(record_id: RecordId, message: &str) -> Self {
        Self {
            record_id,
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Not-found body echoing the path segment as given
#[derive(Debug, Serialize)]
pub struct NotFoundResponse {
    pub record_id: String,
    pub message: String,
}

impl NotFoundResponse {
    fn for_id(record_id: &str) -> (StatusCode, Json<Self>) {
        (
            StatusCode::NOT_FOUND,
            Json(Self {
                record_id: record_id.to_string(),
                message: "error - resource not found".to_string(),
            }),
        )
    }
}

#[derive(Debug, Serialize)]
pub struct StudentsListResponse {
    pub students: Vec<StudentRecord>,
}

// ==================
// Student Routes
// ==================

/// Create student routes
pub fn student_routes<B: DocumentBackend + 'static>(state: Arc<StudentState<B>>) -> Router {
    Router::new()
        .route(
            "/students",
            get(list_students_handler::<B>).post(create_student_handler::<B>),
        )
        .route(
            "/students/:record_id",
            get(get_student_handler::<B>)
                .put(update_student_handler::<B>)
                .delete(delete_student_handler::<B>),
        )
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn create_student_handler<B: DocumentBackend>(
    State(state): State<Arc<StudentState<B>>>,
    Json(fields): Json<StudentFields>,
) -> Response {
    match state.store.create(fields) {
        Ok(record_id) => (
            StatusCode::CREATED,
            Json(IdMessageResponse::new(record_id, "successfully created")),
        )
            .into_response(),
        Err(StoreError::DuplicateName { .. }) => (
            StatusCode::CONFLICT,
            Json(MessageResponse {
                message: "Student with the same name already exists".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "create failed");
            (
                StatusCode::BAD_REQUEST,
                Json(IdMessageResponse::new(
                    RecordId::from(-1),
                    "error - unable to create resource",
                )),
            )
                .into_response()
        }
    }
}

async fn get_student_handler<B: DocumentBackend>(
    State(state): State<Arc<StudentState<B>>>,
    Path(record_id): Path<String>,
) -> Response {
    let Ok(id) = record_id.parse::<RecordId>() else {
        return NotFoundResponse::for_id(&record_id).into_response();
    };

    match state.store.get(id) {
        Ok(record) => Json(record).into_response(),
        Err(_) => NotFoundResponse::for_id(&record_id).into_response(),
    }
}

async fn list_students_handler<B: DocumentBackend>(
    State(state): State<Arc<StudentState<B>>>,
) -> Response {
    match state.store.list_all() {
        Ok(students) => Json(StudentsListResponse { students }).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "listing failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MessageResponse {
                    message: "error - internal server error".to_string(),
                }),
            )
                .into_response()
        }
    }
}

async fn update_student_handler<B: DocumentBackend>(
    State(state): State<Arc<StudentState<B>>>,
    Path(record_id): Path<String>,
    Json(fields): Json<StudentFields>,
) -> Response {
    let Ok(id) = record_id.parse::<RecordId>() else {
        return NotFoundResponse::for_id(&record_id).into_response();
    };

    match state.store.replace(id, fields) {
        Ok(()) => (
            StatusCode::CREATED,
            Json(IdMessageResponse::new(id, "successfully updated")),
        )
            .into_response(),
        Err(StoreError::NotFound(_)) => NotFoundResponse::for_id(&record_id).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "update failed");
            // The record exists but the overwrite failed; report on 200 so
            // the caller can distinguish this from a missing record.
            (
                StatusCode::OK,
                Json(IdMessageResponse::new(id, "error - unable to update resource")),
            )
                .into_response()
        }
    }
}

async fn delete_student_handler<B: DocumentBackend>(
    State(state): State<Arc<StudentState<B>>>,
    Path(record_id): Path<String>,
) -> Response {
    let Ok(id) = record_id.parse::<RecordId>() else {
        return NotFoundResponse::for_id(&record_id).into_response();
    };

    match state.store.delete(id) {
        Ok(()) => (
            StatusCode::OK,
            Json(IdMessageResponse::new(id, "record deleted")),
        )
            .into_response(),
        Err(_) => NotFoundResponse::for_id(&record_id).into_response(),
    }
}
