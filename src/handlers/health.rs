//! Health check and API welcome endpoints.

use crate::{error::AppError, state::AppState};
use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Value, json};

/// Health check response.
///
/// Returns service status, database connectivity and dataset size.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status: `healthy`, or `degraded` when the configured database is unavailable
    pub status: String,

    /// Database connection status: `connected`, `unavailable` or `not_configured`
    pub database: String,

    /// Number of rows loaded into memory
    pub dataset_rows: usize,

    /// Current server timestamp
    pub timestamp: DateTime<Utc>,
}

/// Health check handler.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "status": "healthy",
///   "database": "connected",
///   "dataset_rows": 1000,
///   "timestamp": "2025-12-21T19:00:00Z"
/// }
/// ```
///
/// # Response (500 Internal Server Error)
///
/// If the pool exists but the database is unreachable, returns standard error response.
/// A database that was configured but never connected at startup is reported as
/// `unavailable` with status `degraded`.
pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, AppError> {
    let database = match (&state.pool, state.database_configured) {
        (Some(pool), _) => {
            // Verify database connectivity with simple query
            sqlx::query("SELECT 1").execute(pool).await?;
            "connected"
        }
        (None, true) => "unavailable",
        (None, false) => "not_configured",
    };
    let status = if database == "unavailable" {
        "degraded"
    } else {
        "healthy"
    };

    Ok(Json(HealthResponse {
        status: status.to_string(),
        database: database.to_string(),
        dataset_rows: state.dataset.row_count(),
        timestamp: Utc::now(),
    }))
}

/// `GET /api/v1`
pub async fn welcome() -> Json<Value> {
    Json(json!({
        "message": "Welcome to the Climate Impact and Correlation Analyzer API!"
    }))
}
