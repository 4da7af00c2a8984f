//! Router assembly

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

use super::handlers::{self, AppState};
use crate::config::ServerConfig;

/// Build the relay router
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/generate", post(handlers::generate))
        .route("/metrics", get(handlers::metrics))
        .layer(RequestBodyLimitLayer::new(config.max_body_bytes))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GraphConfig, InferenceConfig};
    use crate::context::ContextResolver;
    use crate::facts::{seed, Catalog, MemoryStore};
    use crate::inference::InferenceClient;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    async fn app(base_url: String, config: &ServerConfig) -> Router {
        let store = Arc::new(MemoryStore::new());
        seed(store.as_ref(), &Catalog::builtin()).await.unwrap();
        let state = AppState {
            resolver: Arc::new(ContextResolver::new(store, &GraphConfig::default())),
            inference: Arc::new(
                InferenceClient::new(InferenceConfig {
                    base_url,
                    ..Default::default()
                })
                .unwrap(),
            ),
            graph_name: "chatbot_knowledge".to_string(),
        };
        build_router(state, config)
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_root_route() {
        let app = app("http://localhost:11434".to_string(), &ServerConfig::default()).await;

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "running");
        assert_eq!(body["model"], "tinyllama");
        assert_eq!(body["graph"], "chatbot_knowledge");
    }

    #[tokio::test]
    async fn test_generate_route() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/generate")
            .with_status(200)
            .with_body(r#"{"response":"Hey! Doing great."}"#)
            .create_async()
            .await;
        let app = app(server.url(), &ServerConfig::default()).await;

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/generate")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"prompt":"hey, how are you?"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["response"], "Hey! Doing great.");
        assert_eq!(body["context_used"], true);
    }

    #[tokio::test]
    async fn test_generate_rejects_missing_prompt() {
        let app = app("http://127.0.0.1:1".to_string(), &ServerConfig::default()).await;

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/generate")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_oversized_body_rejected() {
        let config = ServerConfig {
            max_body_bytes: 16,
            ..Default::default()
        };
        let app = app("http://127.0.0.1:1".to_string(), &config).await;
        let body = format!(r#"{{"prompt":"{}"}}"#, "x".repeat(64));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/generate")
                    .header(header::CONTENT_TYPE, "application/json")
                    .header(header::CONTENT_LENGTH, body.len())
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_metrics_route() {
        let app = app("http://localhost:11434".to_string(), &ServerConfig::default()).await;

        let response = app
            .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(text.contains("relay_inference_duration_seconds"));
    }
}
