//! Dataset inspection handlers.
//!
//! This module implements the endpoints the chart controls use to populate
//! their pickers:
//! - GET /api/v1/dataset - Whole dataset, column by column
//! - GET /api/v1/dataset/columns - Column names
//! - POST /api/v1/dataset/unique-values - Distinct values of one column

use crate::{
    error::AppError, models::requests::FilterRequest, services::aggregation, state::AppState,
};
use axum::{Json, extract::State};
use serde_json::{Map, Value};

/// Return the entire dataset.
///
/// # Response
///
/// ```json
/// {
///   "country": { "0": "India", "1": "Chile" },
///   "likelihood": { "0": 3, "1": null }
/// }
/// ```
pub async fn show_dataset(State(state): State<AppState>) -> Json<Map<String, Value>> {
    Json(aggregation::table_json(&state.dataset))
}

/// Return the column names in dataset order.
pub async fn list_columns(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(aggregation::column_names(&state.dataset))
}

/// Return the distinct values of a column.
///
/// # Request Body
///
/// ```json
/// { "filter": "country" }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: `["India", "Chile", null]`
/// - **Error (400)**: `filter` missing
/// - **Error (404)**: Column not found
pub async fn unique_values(
    State(state): State<AppState>,
    Json(request): Json<FilterRequest>,
) -> Result<Json<Vec<Value>>, AppError> {
    let column = request.column()?;
    let values = aggregation::unique_values(&state.dataset, column).inspect_err(log_failure)?;

    Ok(Json(values))
}

pub(crate) fn log_failure(err: &AppError) {
    tracing::warn!("Request failed: {}", err);
}
