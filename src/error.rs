//! Error types for the book catalog

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Numeric error codes carried in every error body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    BadValue = 1,
    NoSuchItem = 2,
    DbFailure = 3,
}

/// Failure returned by the persistence layer.
///
/// `NotFound` is only ever produced by a lookup by identifier; every other
/// store-level failure (connectivity, constraint, driver) is `Store`.
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Book {0} not found")]
    NotFound(i32),

    #[error("Store error: {0}")]
    Store(#[from] sqlx::Error),
}

/// Result type alias for persistence operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Store(sqlx::Error),
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(id) => AppError::NotFound(format!("Book {} not found", id)),
            RepositoryError::Store(e) => AppError::Store(e),
        }
    }
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (code, message) = match self {
            AppError::Validation(msg) => (ErrorCode::BadValue, msg),
            AppError::NotFound(msg) => (ErrorCode::NoSuchItem, msg),
            AppError::Store(e) => {
                tracing::error!("Database error: {:?}", e);
                (ErrorCode::DbFailure, "Database error".to_string())
            }
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
