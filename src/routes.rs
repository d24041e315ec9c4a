//! HTTP router construction.

use crate::{handlers, state::AppState};
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the application router.
///
/// # Routes
///
/// - `GET /` - Homepage shell
/// - `GET /health` - Health check
/// - `GET /api/v1` - API welcome message
/// - `/api/v1/dataset/*` - Dataset inspection
/// - `/api/v1/charts/*` - Chart data, one route per panel
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/", get(handlers::health::welcome))
        // Dataset routes
        .route("/dataset", get(handlers::dataset::show_dataset))
        .route("/dataset/columns", get(handlers::dataset::list_columns))
        .route(
            "/dataset/unique-values",
            post(handlers::dataset::unique_values),
        )
        // Chart routes
        .route("/charts/count-bar", post(handlers::charts::count_bar))
        .route(
            "/charts/constrained-bar",
            post(handlers::charts::constrained_bar),
        )
        .route(
            "/charts/grouped-histogram",
            post(handlers::charts::grouped_histogram),
        )
        .route("/charts/count-line", post(handlers::charts::count_line));

    Router::new()
        .route("/", get(handlers::page::homepage))
        .route("/health", get(handlers::health::health_check))
        .nest("/api/v1", api_routes)
        // The charts may be served from a different origin than the API
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cell::Cell;
    use crate::models::dataset::Dataset;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn app() -> Router {
        app_with(false)
    }

    fn app_with(database_configured: bool) -> Router {
        let text = |s: &str| Cell::Text(s.to_string());
        let dataset = Dataset::from_rows(
            vec!["country".into(), "likelihood".into(), "start_year".into()],
            vec![
                vec![text("India"), Cell::Integer(3), Cell::Integer(2017)],
                vec![text("Chile"), Cell::Integer(2), Cell::Integer(2016)],
                vec![text("India"), Cell::Integer(3), Cell::Integer(2016)],
            ],
        )
        .unwrap();
        build_router(AppState::new(dataset, None, database_configured))
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = app()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        read_json(response).await
    }

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        read_json(response).await
    }

    async fn read_json(response: axum::response::Response) -> (StatusCode, Value) {
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn homepage_is_html() {
        let response = app()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("Interactive Data Visualizations"));
        assert_eq!(html.matches("class=\"visualization\"").count(), 4);
    }

    #[tokio::test]
    async fn health_reports_dataset_rows() {
        let (status, body) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["database"], "not_configured");
        assert_eq!(body["dataset_rows"], 3);
    }

    #[tokio::test]
    async fn health_reports_unavailable_database() {
        let response = app_with(true)
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let (status, body) = read_json(response).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "degraded");
        assert_eq!(body["database"], "unavailable");
    }

    #[tokio::test]
    async fn welcome_message() {
        let (status, body) = get_json("/api/v1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["message"],
            "Welcome to the Climate Impact and Correlation Analyzer API!"
        );
    }

    #[tokio::test]
    async fn dataset_and_columns() {
        let (_, columns) = get_json("/api/v1/dataset/columns").await;
        assert_eq!(columns, json!(["country", "likelihood", "start_year"]));

        let (status, table) = get_json("/api/v1/dataset").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(table["country"]["1"], "Chile");
    }

    #[tokio::test]
    async fn unique_values_endpoint() {
        let (status, body) =
            post_json("/api/v1/dataset/unique-values", json!({ "filter": "country" })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!(["India", "Chile"]));
    }

    #[tokio::test]
    async fn count_bar_endpoint() {
        let (status, body) =
            post_json("/api/v1/charts/count-bar", json!({ "filter": "country" })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "India": 2, "Chile": 1 }));
    }

    #[tokio::test]
    async fn constrained_bar_endpoint() {
        let (status, body) = post_json(
            "/api/v1/charts/constrained-bar",
            json!({ "filter1": "country", "constrain": "India", "filter2": "start_year" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "0": 2017, "2": 2016 }));
    }

    #[tokio::test]
    async fn grouped_histogram_endpoint() {
        let (status, body) = post_json(
            "/api/v1/charts/grouped-histogram",
            json!({ "filter1": "country", "filter2": "likelihood" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "2": { "India": null, "Chile": 1 }, "3": { "India": 2, "Chile": null } })
        );
    }

    #[tokio::test]
    async fn count_line_endpoint() {
        let (status, body) =
            post_json("/api/v1/charts/count-line", json!({ "filter": "start_year" })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "2016": 2, "2017": 1 }));
    }

    #[tokio::test]
    async fn missing_filter_is_bad_request() {
        let (status, body) = post_json("/api/v1/charts/count-bar", json!({})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "missing_parameter");
    }

    #[tokio::test]
    async fn missing_constraint_is_bad_request() {
        let (status, _) = post_json(
            "/api/v1/charts/constrained-bar",
            json!({ "filter1": "country", "filter2": "likelihood" }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_column_is_not_found() {
        let (status, body) = post_json(
            "/api/v1/charts/grouped-histogram",
            json!({ "filter1": "country", "filter2": "sector" }),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "column_not_found");
        assert_eq!(body["error"]["message"], "Column 'sector' not found in dataset");
    }
}
