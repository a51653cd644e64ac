use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::validate::ValidationError;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("short code already taken: {0}")]
    Conflict(String),
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage query failed: {0}")]
    Query(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
}

pub(crate) fn map_sqlx_error(err: sqlx::Error) -> StorageError {
    let message = err.to_string();

    if err
        .as_database_error()
        .is_some_and(|db| db.is_unique_violation())
    {
        return StorageError::Conflict(message);
    }

    match err {
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_) => StorageError::Unavailable(message),
        sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::Decode(_) => StorageError::InvalidData(message),
        _ => StorageError::Query(message),
    }
}

/// Every failure a handler can end in.
///
/// Status codes follow the public API as it has always behaved: a host that
/// does not resolve and an unknown short code both answer 200 with an error
/// body; only a parse failure is 400.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    InvalidUrl(#[from] ValidationError),
    #[error("no mapping for short code")]
    NotFound,
    #[error(transparent)]
    Store(#[from] StorageError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::InvalidUrl(ValidationError::Malformed(_)) => {
                (StatusCode::BAD_REQUEST, "Invalid URL")
            }
            AppError::InvalidUrl(ValidationError::Unresolvable { .. }) => {
                (StatusCode::OK, "invalid url")
            }
            AppError::NotFound => (StatusCode::OK, "No short URL found"),
            AppError::Store(e) => {
                tracing::error!("Store failure: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error")
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
