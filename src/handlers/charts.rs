//! Chart data handlers.
//!
//! One endpoint per homepage panel:
//! - POST /api/v1/charts/count-bar - Bar chart
//! - POST /api/v1/charts/constrained-bar - Constrained bar chart
//! - POST /api/v1/charts/grouped-histogram - Histogram
//! - POST /api/v1/charts/count-line - Line chart
//!
//! All responses are JSON objects whose key order is the display order.

use crate::{
    error::AppError,
    handlers::dataset::log_failure,
    models::requests::{ConstrainedFilterRequest, FilterRequest, PairFilterRequest},
    services::aggregation,
    state::AppState,
};
use axum::{Json, extract::State};
use serde_json::{Map, Value};

/// Most frequent values of a column.
///
/// # Request Body
///
/// ```json
/// { "filter": "country" }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: `{"United States of America": 12, "India": 8}`
/// - **Error (400)**: `filter` missing
/// - **Error (404)**: Column not found
pub async fn count_bar(
    State(state): State<AppState>,
    Json(request): Json<FilterRequest>,
) -> Result<Json<Map<String, Value>>, AppError> {
    let column = request.column()?;
    let counts = aggregation::value_counts(&state.dataset, column).inspect_err(log_failure)?;

    Ok(Json(counts))
}

/// Values of `filter2` for rows where `filter1` equals `constrain`.
///
/// # Request Body
///
/// ```json
/// { "filter1": "country", "constrain": "India", "filter2": "likelihood" }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: `{"4": 3, "17": 2}` (keys are row indices)
/// - **Error (400)**: A parameter is missing, or `constrain` is not a scalar
/// - **Error (404)**: Column not found
pub async fn constrained_bar(
    State(state): State<AppState>,
    Json(request): Json<ConstrainedFilterRequest>,
) -> Result<Json<Map<String, Value>>, AppError> {
    let (filter_column, constraint, value_column) = request.parts()?;
    let values =
        aggregation::constrained_values(&state.dataset, filter_column, constraint, value_column)
            .inspect_err(log_failure)?;

    Ok(Json(values))
}

/// Counts of `filter1` groups split by `filter2` values.
///
/// # Request Body
///
/// ```json
/// { "filter1": "country", "filter2": "likelihood" }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: `{"2": {"India": 5, "Chile": null}, "3": {"India": 2, "Chile": 1}}`
/// - **Error (400)**: A parameter is missing
/// - **Error (404)**: Column not found
pub async fn grouped_histogram(
    State(state): State<AppState>,
    Json(request): Json<PairFilterRequest>,
) -> Result<Json<Map<String, Value>>, AppError> {
    let (group_column, value_column) = request.columns()?;
    let grouped = aggregation::grouped_counts(&state.dataset, group_column, value_column)
        .inspect_err(log_failure)?;

    Ok(Json(grouped))
}

/// Row counts per value of a column, in ascending value order.
///
/// # Request Body
///
/// ```json
/// { "filter": "start_year" }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: `{"2016": 4, "2017": 9}`
/// - **Error (400)**: `filter` missing
/// - **Error (404)**: Column not found
pub async fn count_line(
    State(state): State<AppState>,
    Json(request): Json<FilterRequest>,
) -> Result<Json<Map<String, Value>>, AppError> {
    let column = request.column()?;
    let counts = aggregation::ordered_counts(&state.dataset, column).inspect_err(log_failure)?;

    Ok(Json(counts))
}
