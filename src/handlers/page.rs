//! Homepage handler.

use crate::views::homepage;
use axum::response::Html;

/// `GET /`
///
/// Serves the static homepage shell. The document does not depend on the
/// dataset, so it never fails.
pub async fn homepage() -> Html<String> {
    Html(homepage::render())
}
