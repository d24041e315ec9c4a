//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// # Error Categories
///
/// - **Source Errors**: failures reading the dataset from PostgreSQL or CSV
/// - **Request Errors**: missing or malformed request parameters
/// - **Lookup Errors**: a request names a column the dataset does not have
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (e.g., connection error, query error).
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The CSV dataset could not be parsed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The dataset file could not be opened.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The loaded data does not form a rectangular table with unique column names.
    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),

    /// A required request parameter is absent or empty.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("{0}")]
    MissingParameter(String),

    /// Request body or parameters are invalid.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// A requested column does not exist in the dataset.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Column '{0}' not found in dataset")]
    ColumnNotFound(String),
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// All errors return JSON in this format:
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
///
/// # Status Code Mapping
///
/// - `MissingParameter` → 400 Bad Request
/// - `InvalidRequest` → 400 Bad Request
/// - `ColumnNotFound` → 404 Not Found
/// - `Database`, `Csv`, `Io`, `InvalidDataset` → 500 Internal Server Error (hides details from client)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::MissingParameter(ref msg) => {
                (StatusCode::BAD_REQUEST, "missing_parameter", msg.clone())
            }
            AppError::InvalidRequest(_) => {
                (StatusCode::BAD_REQUEST, "invalid_request", self.to_string())
            }
            AppError::ColumnNotFound(_) => {
                (StatusCode::NOT_FOUND, "column_not_found", self.to_string())
            }
            AppError::Database(_)
            | AppError::Csv(_)
            | AppError::Io(_)
            | AppError::InvalidDataset(_) => {
                tracing::error!("Internal error: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
