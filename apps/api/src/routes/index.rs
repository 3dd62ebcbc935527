use axum::response::Html;

/// GET /
/// Serves the static chat page, embedded at compile time.
pub async fn index_handler() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}
