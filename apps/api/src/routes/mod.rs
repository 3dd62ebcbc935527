pub mod health;
pub mod index;

use axum::{
    routing::{get, post},
    Router,
};

use crate::chat::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index::index_handler))
        .route("/health", get(health::health_handler))
        .route("/chat", post(handlers::handle_chat))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::prompts::FALLBACK_GREETING;
    use crate::chat::testing::{state_with, FixedHarvester, FixedResume, RecordingLlm};
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_state() -> AppState {
        state_with(
            Arc::new(FixedResume::new("doc")),
            Arc::new(FixedHarvester::new(vec![])),
            Arc::new(RecordingLlm::new("an answer")),
        )
    }

    #[tokio::test]
    async fn test_health_endpoint_reports_ok() {
        let app = build_router(test_state());

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_chat_endpoint_greets_on_missing_question() {
        let app = build_router(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/chat")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["answer"], FALLBACK_GREETING);
    }

    #[tokio::test]
    async fn test_chat_endpoint_returns_answer() {
        let app = build_router(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/chat")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"question": "What is his background?"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["answer"], "an answer");
    }

    #[tokio::test]
    async fn test_index_serves_html() {
        let app = build_router(test_state());

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(content_type.starts_with("text/html"));
    }
}
